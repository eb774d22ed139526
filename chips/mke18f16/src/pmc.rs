// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Power management controller.

use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

use crate::helpers::instance_lookup;
use crate::nvic;
use crate::static_ref::StaticRef;

register_structs! {
    pub PmcRegisters {
        /// Low Voltage Detect Status and Control 1 Register
        (0x0 => pub lvdsc1: ReadWrite<u8, LVDSC1::Register>),
        /// Low Voltage Detect Status and Control 2 Register
        (0x1 => pub lvdsc2: ReadWrite<u8, LVDSC2::Register>),
        /// Regulator Status and Control Register
        (0x2 => pub regsc: ReadWrite<u8, REGSC::Register>),
        (0x3 => _reserved0),
        /// Low Power Oscillator Trim Register
        (0x4 => pub lpotrim: ReadWrite<u8, LPOTRIM::Register>),
        (0x5 => @END),
    }
}

register_bitfields![u8,
    pub LVDSC1 [
        /// Low Voltage Detect Reset Enable
        LVDRE OFFSET(4) NUMBITS(1) [],
        /// Low Voltage Detect Interrupt Enable
        LVDIE OFFSET(5) NUMBITS(1) [],
        /// Low Voltage Detect Acknowledge
        LVDACK OFFSET(6) NUMBITS(1) [],
        /// Low Voltage Detect Flag
        LVDF OFFSET(7) NUMBITS(1) [],
    ],
    pub LVDSC2 [
        /// Low-Voltage Warning Interrupt Enable
        LVWIE OFFSET(5) NUMBITS(1) [],
        /// Low-Voltage Warning Acknowledge
        LVWACK OFFSET(6) NUMBITS(1) [],
        /// Low-Voltage Warning Flag
        LVWF OFFSET(7) NUMBITS(1) [],
    ],
    pub REGSC [
        /// Bias Enable Bit
        BIASEN OFFSET(0) NUMBITS(1) [],
        /// Clock Bias Disable Bit
        CLKBIASDIS OFFSET(1) NUMBITS(1) [],
        /// Regulator in Full Performance Mode Status Bit
        REGFPM OFFSET(2) NUMBITS(1) [],
        /// LPO Status Bit
        LPOSTAT OFFSET(6) NUMBITS(1) [],
        /// LPO Disable Bit
        LPODIS OFFSET(7) NUMBITS(1) [],
    ],
    pub LPOTRIM [
        /// LPO trimming bits
        LPOTRIM OFFSET(0) NUMBITS(5) [],
    ],
];

pub const PMC_BASE_ADDR: usize = 0x4007_D000;

pub const PMC_BASE: StaticRef<PmcRegisters> =
    unsafe { StaticRef::new(PMC_BASE_ADDR as *const PmcRegisters) };

pub const PMC_BASE_ADDRS: [usize; 1] = [PMC_BASE_ADDR];
pub const PMC_BASE_PTRS: [StaticRef<PmcRegisters>; 1] = [PMC_BASE];
pub const PMC_IRQS: [u32; 1] = [nvic::LVD_LVW];

instance_lookup!(PMC_BASE_ADDRS);

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::{offset_of, size_of};

    #[test]
    fn layout() {
        assert_eq!(offset_of!(PmcRegisters, lpotrim), 4);
        assert_eq!(size_of::<PmcRegisters>(), 5);
        assert_eq!(LPOTRIM::LPOTRIM.val(0xff).value, 0x1f);
        assert_eq!(PMC_IRQS, [20]);
    }
}
