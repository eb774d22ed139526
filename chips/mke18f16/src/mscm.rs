// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Miscellaneous system control module: processor identification and
//! on-chip memory descriptors.

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::helpers::instance_lookup;
use crate::static_ref::StaticRef;

pub const MSCM_OCMDR_COUNT: usize = 4;

register_structs! {
    /// Processor configuration block. CPx describes whichever core reads it,
    /// CP0 the Cortex-M4.
    pub ProcessorConfig {
        /// Processor Type Register
        (0x00 => pub cptype: ReadOnly<u32, CPTYPE::Register>),
        /// Processor Number Register
        (0x04 => pub cpnum: ReadOnly<u32>),
        /// Processor Master Register
        (0x08 => pub cpmaster: ReadOnly<u32>),
        /// Processor Count Register
        (0x0c => pub cpcount: ReadOnly<u32>),
        /// Processor Cache Configuration
        (0x10 => pub cpcfg0: ReadOnly<u32, CPCFG0::Register>),
        (0x14 => pub cpcfg1: ReadOnly<u32, CPCFG1::Register>),
        (0x18 => pub cpcfg2: ReadOnly<u32, CPCFG2::Register>),
        /// Processor Core Configuration
        (0x1c => pub cpcfg3: ReadOnly<u32, CPCFG3::Register>),
        (0x20 => @END),
    }
}

register_structs! {
    pub MscmRegisters {
        (0x000 => pub cpx: ProcessorConfig),
        (0x020 => pub cp0: ProcessorConfig),
        (0x040 => _reserved0),
        /// On-Chip Memory Descriptor Register
        (0x400 => pub ocmdr: [ReadWrite<u32, OCMDR::Register>; MSCM_OCMDR_COUNT]),
        (0x410 => @END),
    }
}

register_bitfields![u32,
    pub CPTYPE [
        /// Processor Revision
        RYPZ OFFSET(0) NUMBITS(8) [],
        /// Processor x Personality
        PERSONALITY OFFSET(8) NUMBITS(24) [],
    ],
    pub CPCFG0 [
        /// Level 1 Data Cache Ways
        DCWY OFFSET(0) NUMBITS(8) [],
        /// Level 1 Data Cache Size
        DCSZ OFFSET(8) NUMBITS(8) [],
        /// Level 1 Instruction Cache Ways
        ICWY OFFSET(16) NUMBITS(8) [],
        /// Level 1 Instruction Cache Size
        ICSZ OFFSET(24) NUMBITS(8) [],
    ],
    pub CPCFG1 [
        /// Level 2 Instruction Cache Ways
        L2WY OFFSET(16) NUMBITS(8) [],
        /// Level 2 Instruction Cache Size
        L2SZ OFFSET(24) NUMBITS(8) [],
    ],
    pub CPCFG2 [
        /// Tightly-coupled Memory Upper Size
        TMUSZ OFFSET(8) NUMBITS(8) [],
        /// Tightly-coupled Memory Lower Size
        TMLSZ OFFSET(24) NUMBITS(8) [],
    ],
    pub CPCFG3 [
        /// Floating Point Unit
        FPU OFFSET(0) NUMBITS(1) [],
        /// SIMD/NEON instruction support
        SIMD OFFSET(1) NUMBITS(1) [],
        /// Jazelle support
        JAZ OFFSET(2) NUMBITS(1) [],
        /// Memory Management Unit
        MMU OFFSET(3) NUMBITS(1) [],
        /// Trust Zone
        TZ OFFSET(4) NUMBITS(1) [],
        /// Core Memory Protection unit
        CMP OFFSET(5) NUMBITS(1) [],
        /// Bit Banding
        BB OFFSET(6) NUMBITS(1) [],
        /// System Bus Ports
        SBP OFFSET(8) NUMBITS(2) [],
    ],
    pub OCMDR [
        /// OCMEM Control Field 1
        OCM1 OFFSET(4) NUMBITS(2) [],
        /// OCMPU
        OCMPU OFFSET(12) NUMBITS(1) [],
        /// OCMT
        OCMT OFFSET(13) NUMBITS(3) [],
        /// Read-Only
        RO OFFSET(16) NUMBITS(1) [],
        /// OCMEM data path width
        OCMW OFFSET(17) NUMBITS(3) [],
        /// OCMEM Size
        OCMSZ OFFSET(24) NUMBITS(4) [],
        /// OCMSZH
        OCMSZH OFFSET(28) NUMBITS(1) [],
        /// Valid
        V OFFSET(31) NUMBITS(1) [],
    ],
];

pub const MSCM_BASE_ADDR: usize = 0x4000_1000;

pub const MSCM_BASE: StaticRef<MscmRegisters> =
    unsafe { StaticRef::new(MSCM_BASE_ADDR as *const MscmRegisters) };

pub const MSCM_BASE_ADDRS: [usize; 1] = [MSCM_BASE_ADDR];
pub const MSCM_BASE_PTRS: [StaticRef<MscmRegisters>; 1] = [MSCM_BASE];

instance_lookup!(MSCM_BASE_ADDRS);

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::{offset_of, size_of};
    use tock_registers::LocalRegisterCopy;

    #[test]
    fn layout() {
        assert_eq!(size_of::<ProcessorConfig>(), 0x20);
        assert_eq!(offset_of!(MscmRegisters, cp0), 0x20);
        assert_eq!(offset_of!(MscmRegisters, ocmdr), 0x400);
        assert_eq!(size_of::<MscmRegisters>(), 0x410);
    }

    #[test]
    fn decode_core_config() {
        let cfg3 = LocalRegisterCopy::<u32, CPCFG3::Register>::new(0x0000_0161);
        assert!(cfg3.is_set(CPCFG3::FPU));
        assert!(cfg3.is_set(CPCFG3::CMP));
        assert!(cfg3.is_set(CPCFG3::BB));
        assert!(!cfg3.is_set(CPCFG3::MMU));
        assert_eq!(cfg3.read(CPCFG3::SBP), 1);
    }
}
