// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Core platform miscellaneous control module: crossbar configuration,
//! FPU exception status and local memory ECC reporting.

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::helpers::instance_lookup;
use crate::nvic;
use crate::static_ref::StaticRef;

pub const MCM_LMDR_COUNT: usize = 2;

register_structs! {
    pub McmRegisters {
        (0x000 => _reserved0),
        /// Crossbar Switch (AXBS) Slave Configuration
        (0x008 => pub plasc: ReadOnly<u16>),
        /// Crossbar Switch (AXBS) Master Configuration
        (0x00a => pub plamc: ReadOnly<u16>),
        /// Core Platform Control Register
        (0x00c => pub cpcr: ReadWrite<u32, CPCR::Register>),
        /// Interrupt Status and Control Register
        (0x010 => pub iscr: ReadWrite<u32, ISCR::Register>),
        (0x014 => _reserved1),
        /// Process ID Register
        (0x030 => pub pid: ReadWrite<u32>),
        (0x034 => _reserved2),
        /// Compute Operation Control Register
        (0x040 => pub cpo: ReadWrite<u32, CPO::Register>),
        (0x044 => _reserved3),
        /// Local Memory Descriptor Register
        (0x400 => pub lmdr: [ReadWrite<u32, LMDR::Register>; MCM_LMDR_COUNT]),
        (0x408 => _reserved4),
        /// LMEM Parity and ECC Control Register
        (0x480 => pub lmpecr: ReadWrite<u32, LMPECR::Register>),
        (0x484 => _reserved5),
        /// LMEM Parity and ECC Interrupt Register
        (0x488 => pub lmpeir: ReadWrite<u32, LMPEIR::Register>),
        (0x48c => _reserved6),
        /// LMEM Fault Address Register
        (0x490 => pub lmfar: ReadOnly<u32>),
        /// LMEM Fault Attribute Register
        (0x494 => pub lmfatr: ReadOnly<u32, LMFATR::Register>),
        (0x498 => _reserved7),
        /// LMEM Fault Data High Register
        (0x4a0 => pub lmfdhr: ReadOnly<u32>),
        /// LMEM Fault Data Low Register
        (0x4a4 => pub lmfdlr: ReadOnly<u32>),
        (0x4a8 => @END),
    }
}

register_bitfields![u32,
    pub CPCR [
        /// AXBS Halt State Machine Status
        HLT_FSM_ST OFFSET(0) NUMBITS(2) [],
        /// AXBS Halt Request
        AXBS_HLT_REQ OFFSET(2) NUMBITS(1) [],
        /// AXBS Halted
        AXBS_HLTD OFFSET(3) NUMBITS(1) [],
        /// Flash Memory Controller Program Flash Idle
        FMC_PF_IDLE OFFSET(4) NUMBITS(1) [],
        /// Peripheral Bridge Idle
        PBRIDGE_IDLE OFFSET(6) NUMBITS(1) [],
        /// Crossbar Round-robin Arbitration Enable
        CBRR OFFSET(9) NUMBITS(1) [],
        /// SRAM_U Arbitration Priority
        SRAMUAP OFFSET(24) NUMBITS(2) [],
        /// SRAM_U Write Protect
        SRAMUWP OFFSET(26) NUMBITS(1) [],
        /// SRAM_L Arbitration Priority
        SRAMLAP OFFSET(28) NUMBITS(2) [],
        /// SRAM_L Write Protect
        SRAMLWP OFFSET(30) NUMBITS(1) [],
    ],
    pub ISCR [
        /// FPU Invalid Operation interrupt Status
        FIOC OFFSET(8) NUMBITS(1) [],
        /// FPU Divide-by-Zero Interrupt Status
        FDZC OFFSET(9) NUMBITS(1) [],
        /// FPU Overflow interrupt status
        FOFC OFFSET(10) NUMBITS(1) [],
        /// FPU Underflow Interrupt Status
        FUFC OFFSET(11) NUMBITS(1) [],
        /// FPU Inexact Interrupt Status
        FIXC OFFSET(12) NUMBITS(1) [],
        /// FPU Input Denormal Interrupt Status
        FIDC OFFSET(15) NUMBITS(1) [],
        FIOCE OFFSET(24) NUMBITS(1) [],
        FDZCE OFFSET(25) NUMBITS(1) [],
        FOFCE OFFSET(26) NUMBITS(1) [],
        FUFCE OFFSET(27) NUMBITS(1) [],
        FIXCE OFFSET(28) NUMBITS(1) [],
        FIDCE OFFSET(31) NUMBITS(1) [],
    ],
    pub CPO [
        /// Compute Operation request
        CPOREQ OFFSET(0) NUMBITS(1) [],
        /// Compute Operation acknowledge
        CPOACK OFFSET(1) NUMBITS(1) [],
        /// Compute Operation wakeup on interrupt
        CPOWOI OFFSET(2) NUMBITS(1) [],
    ],
    pub LMDR [
        /// Control Field 0
        CF0 OFFSET(0) NUMBITS(4) [],
        /// Memory Type
        MT OFFSET(13) NUMBITS(3) [],
        /// Lock Configuration
        LOCK OFFSET(16) NUMBITS(1) [],
        /// LMEM Data Path Width
        DPW OFFSET(17) NUMBITS(3) [],
        /// Level 1 Cache Ways
        WY OFFSET(20) NUMBITS(4) [],
        /// LMEM Size
        LMSZ OFFSET(24) NUMBITS(4) [],
        /// LMEM Size Hole
        LMSZH OFFSET(28) NUMBITS(1) [],
        /// Local Memory Valid
        V OFFSET(31) NUMBITS(1) [],
    ],
    pub LMPECR [
        /// Enable RAM ECC Noncorrectable Reporting
        ERNCR OFFSET(0) NUMBITS(1) [],
        /// Enable RAM ECC 1 Bit Reporting
        ER1BR OFFSET(8) NUMBITS(1) [],
        /// Enable Cache Parity Reporting
        ECPR OFFSET(20) NUMBITS(1) [],
    ],
    pub LMPEIR [
        /// ENCn = ECC Noncorrectable Error n
        ENC OFFSET(0) NUMBITS(8) [],
        /// E1Bn = ECC 1-bit Error n
        E1B OFFSET(8) NUMBITS(8) [],
        /// Parity or ECC Error Location
        PEELOC OFFSET(16) NUMBITS(5) [],
        /// Valid Bit
        V OFFSET(31) NUMBITS(1) [],
    ],
    pub LMFATR [
        /// Parity/ECC Fault Protection
        PEFPRT OFFSET(0) NUMBITS(4) [],
        /// Parity/ECC Fault Master Size
        PEFSIZE OFFSET(4) NUMBITS(3) [],
        /// Parity/ECC Fault Write
        PEFW OFFSET(7) NUMBITS(1) [],
        /// Parity/ECC Fault Master Number
        PEFMST OFFSET(8) NUMBITS(8) [],
        /// Overrun
        OVR OFFSET(31) NUMBITS(1) [],
    ],
];

pub const MCM_BASE_ADDR: usize = 0xE008_0000;

pub const MCM_BASE: StaticRef<McmRegisters> =
    unsafe { StaticRef::new(MCM_BASE_ADDR as *const McmRegisters) };

pub const MCM_BASE_ADDRS: [usize; 1] = [MCM_BASE_ADDR];
pub const MCM_BASE_PTRS: [StaticRef<McmRegisters>; 1] = [MCM_BASE];
pub const MCM_IRQS: [u32; 1] = [nvic::MCM];

instance_lookup!(MCM_BASE_ADDRS);

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::{offset_of, size_of};

    #[test]
    fn layout() {
        assert_eq!(offset_of!(McmRegisters, plasc), 0x8);
        assert_eq!(offset_of!(McmRegisters, plamc), 0xa);
        assert_eq!(offset_of!(McmRegisters, lmdr), 0x400);
        assert_eq!(offset_of!(McmRegisters, lmfatr), 0x494);
        assert_eq!(size_of::<McmRegisters>(), 0x4a8);
    }

    #[test]
    fn fpu_exception_enables() {
        let all = ISCR::FIOCE::SET
            + ISCR::FDZCE::SET
            + ISCR::FOFCE::SET
            + ISCR::FUFCE::SET
            + ISCR::FIXCE::SET
            + ISCR::FIDCE::SET;
        assert_eq!(all.value, 0x9f00_0000);
        assert_eq!(MCM_IRQS, [17]);
    }
}
