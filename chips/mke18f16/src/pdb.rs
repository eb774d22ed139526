// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Programmable delay blocks (PDB0..PDB2).
//!
//! PDB0 triggers ADC0, PDB1 triggers ADC1 and PDB2 triggers ADC2. Each
//! channel has eight pre-triggers with their own delay registers.

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::helpers::instance_lookup;
use crate::nvic;
use crate::static_ref::StaticRef;

pub const PDB_CHANNEL_COUNT: usize = 2;
pub const PDB_DLY_COUNT: usize = 8;

register_structs! {
    pub PdbChannel {
        /// Channel n Control register 1
        (0x00 => pub c1: ReadWrite<u32, C1::Register>),
        /// Channel n Status register
        (0x04 => pub s: ReadWrite<u32, S::Register>),
        /// Channel n Delay register
        (0x08 => pub dly: [ReadWrite<u32, DLY::Register>; PDB_DLY_COUNT]),
        (0x28 => @END),
    }
}

register_structs! {
    pub PdbRegisters {
        /// Status and Control register
        (0x000 => pub sc: ReadWrite<u32, SC::Register>),
        /// Modulus register
        (0x004 => pub modulo: ReadWrite<u32, DLY::Register>),
        /// Counter register
        (0x008 => pub cnt: ReadOnly<u32, DLY::Register>),
        /// Interrupt Delay register
        (0x00c => pub idly: ReadWrite<u32, DLY::Register>),
        (0x010 => pub ch: [PdbChannel; PDB_CHANNEL_COUNT]),
        (0x060 => _reserved0),
        /// Pulse-Out n Enable register
        (0x190 => pub poen: ReadWrite<u32, POEN::Register>),
        /// Pulse-Out n Delay register
        (0x194 => pub podly: ReadWrite<u32, PODLY::Register>),
        (0x198 => @END),
    }
}

register_bitfields![u32,
    pub SC [
        /// Load OK
        LDOK OFFSET(0) NUMBITS(1) [],
        /// Continuous Mode Enable
        CONT OFFSET(1) NUMBITS(1) [],
        /// Multiplication Factor Select for Prescaler
        MULT OFFSET(2) NUMBITS(2) [
            X1 = 0,
            X10 = 1,
            X20 = 2,
            X40 = 3,
        ],
        /// PDB Interrupt Enable
        PDBIE OFFSET(5) NUMBITS(1) [],
        /// PDB Interrupt Flag
        PDBIF OFFSET(6) NUMBITS(1) [],
        /// PDB Enable
        PDBEN OFFSET(7) NUMBITS(1) [],
        /// Trigger Input Source Select
        TRGSEL OFFSET(8) NUMBITS(4) [
            Trgmux = 0,
            Software = 15,
        ],
        /// Prescaler Divider Select
        PRESCALER OFFSET(12) NUMBITS(3) [],
        /// DMA Enable
        DMAEN OFFSET(15) NUMBITS(1) [],
        /// Software Trigger
        SWTRIG OFFSET(16) NUMBITS(1) [],
        /// PDB Sequence Error Interrupt Enable
        PDBEIE OFFSET(17) NUMBITS(1) [],
        /// Load Mode Select
        LDMOD OFFSET(18) NUMBITS(2) [],
    ],
    /// MOD, CNT, IDLY and DLYn
    pub DLY [
        DLY OFFSET(0) NUMBITS(16) [],
    ],
    pub C1 [
        /// PDB Channel Pre-Trigger Enable
        EN OFFSET(0) NUMBITS(8) [],
        /// PDB Channel Pre-Trigger Output Select
        TOS OFFSET(8) NUMBITS(8) [],
        /// PDB Channel Pre-Trigger Back-to-Back Operation Enable
        BB OFFSET(16) NUMBITS(8) [],
    ],
    pub S [
        /// PDB Channel Sequence Error Flags
        ERR OFFSET(0) NUMBITS(8) [],
        /// PDB Channel Flags
        CF OFFSET(16) NUMBITS(8) [],
    ],
    pub POEN [
        /// PDB Pulse-Out Enable
        POEN OFFSET(0) NUMBITS(8) [],
    ],
    pub PODLY [
        /// PDB Pulse-Out Delay 2
        DLY2 OFFSET(0) NUMBITS(16) [],
        /// PDB Pulse-Out Delay 1
        DLY1 OFFSET(16) NUMBITS(16) [],
    ],
];

pub const PDB0_BASE_ADDR: usize = 0x4003_6000;
pub const PDB1_BASE_ADDR: usize = 0x4003_1000;
pub const PDB2_BASE_ADDR: usize = 0x4004_7000;

pub const PDB0_BASE: StaticRef<PdbRegisters> =
    unsafe { StaticRef::new(PDB0_BASE_ADDR as *const PdbRegisters) };
pub const PDB1_BASE: StaticRef<PdbRegisters> =
    unsafe { StaticRef::new(PDB1_BASE_ADDR as *const PdbRegisters) };
pub const PDB2_BASE: StaticRef<PdbRegisters> =
    unsafe { StaticRef::new(PDB2_BASE_ADDR as *const PdbRegisters) };

pub const PDB_BASE_ADDRS: [usize; 3] = [PDB0_BASE_ADDR, PDB1_BASE_ADDR, PDB2_BASE_ADDR];
pub const PDB_BASE_PTRS: [StaticRef<PdbRegisters>; 3] = [PDB0_BASE, PDB1_BASE, PDB2_BASE];
pub const PDB_IRQS: [u32; 3] = [nvic::PDB0, nvic::PDB1, nvic::PDB2];

instance_lookup!(PDB_BASE_ADDRS);

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::{offset_of, size_of};

    #[test]
    fn layout() {
        assert_eq!(size_of::<PdbChannel>(), 0x28);
        assert_eq!(offset_of!(PdbRegisters, ch), 0x10);
        assert_eq!(offset_of!(PdbRegisters, poen), 0x190);
        assert_eq!(size_of::<PdbRegisters>(), 0x198);
    }

    #[test]
    fn software_triggered() {
        let sc = SC::PDBEN::SET + SC::TRGSEL::Software + SC::LDOK::SET + SC::CONT::SET;
        assert_eq!(sc.value, 0x0f83);
        assert_eq!(PDB_IRQS, [52, 75, 68]);
        assert_eq!(instance(PDB1_BASE_ADDR), Ok(1));
    }
}
