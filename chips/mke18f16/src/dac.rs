// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! 12-bit digital-to-analog converter with an eight-entry data buffer.

use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

use crate::helpers::instance_lookup;
use crate::nvic;
use crate::static_ref::StaticRef;

/// Depth of the DAC data buffer.
pub const DAC_DAT_COUNT: usize = 8;

register_structs! {
    pub DacRegisters {
        /// DAC Data Register
        (0x00 => pub dat: [ReadWrite<u32, DAT::Register>; DAC_DAT_COUNT]),
        /// DAC Status and Control Register
        (0x20 => pub statctrl: ReadWrite<u32, STATCTRL::Register>),
        (0x24 => @END),
    }
}

register_bitfields![u32,
    pub DAT [
        /// Buffer entry
        DATA OFFSET(0) NUMBITS(12) [],
    ],
    pub STATCTRL [
        /// DAC Buffer Read Pointer Bottom Position Flag
        DACBFRPBF OFFSET(0) NUMBITS(1) [],
        /// DAC Buffer Read Pointer Top Position Flag
        DACBFRPTF OFFSET(1) NUMBITS(1) [],
        /// DAC Buffer Watermark Flag
        DACBFWMF OFFSET(2) NUMBITS(1) [],
        /// DAC Buffer Read Pointer Bottom Flag Interrupt Enable
        DACBBIEN OFFSET(8) NUMBITS(1) [],
        /// DAC Buffer Read Pointer Top Flag Interrupt Enable
        DACBTIEN OFFSET(9) NUMBITS(1) [],
        /// DAC Buffer Watermark Interrupt Enable
        DACBWIEN OFFSET(10) NUMBITS(1) [],
        /// DAC Low Power Control
        LPEN OFFSET(11) NUMBITS(1) [],
        /// DAC Software Trigger
        DACSWTRG OFFSET(12) NUMBITS(1) [],
        /// DAC Trigger Select
        DACTRGSEL OFFSET(13) NUMBITS(1) [
            Hardware = 0,
            Software = 1,
        ],
        /// DAC Reference Select
        DACRFS OFFSET(14) NUMBITS(1) [],
        /// DAC Enable
        DACEN OFFSET(15) NUMBITS(1) [],
        /// DAC Buffer Enable
        DACBFEN OFFSET(16) NUMBITS(1) [],
        /// DAC Buffer Work Mode Select
        DACBFMD OFFSET(17) NUMBITS(2) [
            Normal = 0,
            Swing = 1,
            OneTimeScan = 2,
            Fifo = 3,
        ],
        /// DAC Buffer Watermark Select
        DACBFWM OFFSET(19) NUMBITS(2) [],
        /// DMA Enable Select
        DMAEN OFFSET(23) NUMBITS(1) [],
        /// DAC Buffer Upper Limit
        DACBFUP OFFSET(24) NUMBITS(4) [],
        /// DAC Buffer Read Pointer
        DACBFRP OFFSET(28) NUMBITS(4) [],
    ],
];

pub const DAC0_BASE_ADDR: usize = 0x4003_F000;

pub const DAC0_BASE: StaticRef<DacRegisters> =
    unsafe { StaticRef::new(DAC0_BASE_ADDR as *const DacRegisters) };

pub const DAC_BASE_ADDRS: [usize; 1] = [DAC0_BASE_ADDR];
pub const DAC_BASE_PTRS: [StaticRef<DacRegisters>; 1] = [DAC0_BASE];
pub const DAC_IRQS: [u32; 1] = [nvic::DAC0];

instance_lookup!(DAC_BASE_ADDRS);

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::{offset_of, size_of};
    use tock_registers::LocalRegisterCopy;

    #[test]
    fn layout() {
        assert_eq!(offset_of!(DacRegisters, statctrl), 0x20);
        assert_eq!(size_of::<DacRegisters>(), 0x24);
    }

    #[test]
    fn buffered_swing() {
        let mut ctrl = LocalRegisterCopy::<u32, STATCTRL::Register>::new(0);
        ctrl.modify(
            STATCTRL::DACEN::SET
                + STATCTRL::DACBFEN::SET
                + STATCTRL::DACBFMD::Swing
                + STATCTRL::DACBFUP.val(7),
        );
        assert_eq!(ctrl.get(), 0x0703_8000);
        assert_eq!(DAT::DATA.val(0x1fff).value, 0xfff);
        assert_eq!(DAC_IRQS, [56]);
    }
}
