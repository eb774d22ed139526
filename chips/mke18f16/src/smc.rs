// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! System mode controller.

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::helpers::instance_lookup;
use crate::static_ref::StaticRef;

register_structs! {
    pub SmcRegisters {
        /// SMC Version ID Register
        (0x00 => pub verid: ReadOnly<u32>),
        /// SMC Parameter Register
        (0x04 => pub param: ReadOnly<u32, PARAM::Register>),
        /// Power Mode Protection register
        (0x08 => pub pmprot: ReadWrite<u32, PMPROT::Register>),
        /// Power Mode Control register
        (0x0c => pub pmctrl: ReadWrite<u32, PMCTRL::Register>),
        /// Stop Control Register
        (0x10 => pub stopctrl: ReadWrite<u32, STOPCTRL::Register>),
        /// Power Mode Status register
        (0x14 => pub pmstat: ReadOnly<u32, PMSTAT::Register>),
        (0x18 => @END),
    }
}

register_bitfields![u32,
    pub PARAM [
        /// Existence of HSRUN feature
        EHSRUN OFFSET(0) NUMBITS(1) [],
        /// Existence of LLS feature
        ELLS OFFSET(3) NUMBITS(1) [],
        /// Existence of LLS2 feature
        ELLS2 OFFSET(5) NUMBITS(1) [],
        /// Existence of VLLS0 feature
        EVLLS0 OFFSET(6) NUMBITS(1) [],
    ],
    pub PMPROT [
        /// Allow Very-Low-Power Modes
        AVLP OFFSET(5) NUMBITS(1) [],
        /// Allow High Speed Run mode
        AHSRUN OFFSET(7) NUMBITS(1) [],
    ],
    pub PMCTRL [
        /// Stop Mode Control
        STOPM OFFSET(0) NUMBITS(3) [
            Stop = 0,
            Vlps = 2,
        ],
        /// Very Low Power Stop Aborted
        VLPSA OFFSET(3) NUMBITS(1) [],
        /// Run Mode Control
        RUNM OFFSET(5) NUMBITS(2) [
            Run = 0,
            Vlpr = 2,
            Hsrun = 3,
        ],
    ],
    pub STOPCTRL [
        /// Stop Option
        STOPO OFFSET(6) NUMBITS(2) [
            Stop1 = 1,
            Stop2 = 2,
        ],
    ],
    pub PMSTAT [
        /// Power Mode Status, one-hot
        PMSTAT OFFSET(0) NUMBITS(8) [
            Run = 0x01,
            Stop = 0x02,
            Vlpr = 0x04,
            Vlps = 0x10,
            Hsrun = 0x80,
        ],
    ],
];

pub const SMC_BASE_ADDR: usize = 0x4007_E000;

pub const SMC_BASE: StaticRef<SmcRegisters> =
    unsafe { StaticRef::new(SMC_BASE_ADDR as *const SmcRegisters) };

pub const SMC_BASE_ADDRS: [usize; 1] = [SMC_BASE_ADDR];
pub const SMC_BASE_PTRS: [StaticRef<SmcRegisters>; 1] = [SMC_BASE];

instance_lookup!(SMC_BASE_ADDRS);

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::size_of;
    use tock_registers::LocalRegisterCopy;

    #[test]
    fn layout() {
        assert_eq!(size_of::<SmcRegisters>(), 0x18);
    }

    #[test]
    fn power_modes() {
        assert_eq!(PMCTRL::RUNM::Hsrun.value, 0x60);
        let stat = LocalRegisterCopy::<u32, PMSTAT::Register>::new(0x80);
        assert_eq!(
            stat.read_as_enum(PMSTAT::PMSTAT),
            Some(PMSTAT::PMSTAT::Value::Hsrun)
        );
        let stat = LocalRegisterCopy::<u32, PMSTAT::Register>::new(0x08);
        assert_eq!(stat.read_as_enum::<PMSTAT::PMSTAT::Value>(PMSTAT::PMSTAT), None);
    }
}
