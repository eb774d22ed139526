// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Reset control module.
//!
//! SRS reports the cause of the most recent reset, SSRS accumulates causes
//! until cleared by writing ones.

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::helpers::instance_lookup;
use crate::nvic;
use crate::static_ref::StaticRef;

register_structs! {
    pub RcmRegisters {
        /// Version ID Register
        (0x00 => pub verid: ReadOnly<u32, VERID::Register>),
        /// Parameter Register
        (0x04 => pub param: ReadOnly<u32, RESET_SOURCES::Register>),
        /// System Reset Status Register
        (0x08 => pub srs: ReadOnly<u32, RESET_SOURCES::Register>),
        /// Reset Pin Control register
        (0x0c => pub rpc: ReadWrite<u32, RPC::Register>),
        (0x10 => _reserved0),
        /// Sticky System Reset Status Register
        (0x18 => pub ssrs: ReadWrite<u32, RESET_SOURCES::Register>),
        /// System Reset Interrupt Enable Register
        (0x1c => pub srie: ReadWrite<u32, SRIE::Register>),
        (0x20 => @END),
    }
}

register_bitfields![u32,
    pub VERID [
        /// Feature Specification Number
        FEATURE OFFSET(0) NUMBITS(16) [],
        /// Minor Version Number
        MINOR OFFSET(16) NUMBITS(8) [],
        /// Major Version Number
        MAJOR OFFSET(24) NUMBITS(8) [],
    ],
    /// Shared by PARAM, SRS and SSRS
    pub RESET_SOURCES [
        /// Low-Voltage Detect
        LVD OFFSET(1) NUMBITS(1) [],
        /// Loss-of-Clock
        LOC OFFSET(2) NUMBITS(1) [],
        /// Loss-of-Lock
        LOL OFFSET(3) NUMBITS(1) [],
        /// Watchdog
        WDOG OFFSET(5) NUMBITS(1) [],
        /// External Reset Pin
        PIN OFFSET(6) NUMBITS(1) [],
        /// Power-On Reset
        POR OFFSET(7) NUMBITS(1) [],
        /// JTAG generated reset
        JTAG OFFSET(8) NUMBITS(1) [],
        /// Core Lockup
        LOCKUP OFFSET(9) NUMBITS(1) [],
        /// Software
        SW OFFSET(10) NUMBITS(1) [],
        /// MDM-AP System Reset Request
        MDM_AP OFFSET(11) NUMBITS(1) [],
        /// Stop Acknowledge Error
        SACKERR OFFSET(13) NUMBITS(1) [],
    ],
    pub RPC [
        /// Reset Pin Filter Select in Run and Wait Modes
        RSTFLTSRW OFFSET(0) NUMBITS(2) [
            Disabled = 0,
            BusClock = 1,
            Lpo = 2,
        ],
        /// Reset Pin Filter Select in Stop Mode
        RSTFLTSS OFFSET(2) NUMBITS(1) [],
        /// Reset Pin Filter Bus Clock Select
        RSTFLTSEL OFFSET(8) NUMBITS(5) [],
    ],
    pub SRIE [
        /// Reset Delay Time
        DELAY OFFSET(0) NUMBITS(2) [
            Lpo10 = 0,
            Lpo34 = 1,
            Lpo130 = 2,
            Lpo514 = 3,
        ],
        /// Loss-of-Clock Interrupt
        LOC OFFSET(2) NUMBITS(1) [],
        /// Loss-of-Lock Interrupt
        LOL OFFSET(3) NUMBITS(1) [],
        /// Watchdog Interrupt
        WDOG OFFSET(5) NUMBITS(1) [],
        /// External Reset Pin Interrupt
        PIN OFFSET(6) NUMBITS(1) [],
        /// Global Interrupt Enable
        GIE OFFSET(7) NUMBITS(1) [],
        /// JTAG generated reset
        JTAG OFFSET(8) NUMBITS(1) [],
        /// Core Lockup Interrupt
        LOCKUP OFFSET(9) NUMBITS(1) [],
        /// Software Interrupt
        SW OFFSET(10) NUMBITS(1) [],
        /// MDM-AP System Reset Request
        MDM_AP OFFSET(11) NUMBITS(1) [],
        /// Stop Acknowledge Error Interrupt
        SACKERR OFFSET(13) NUMBITS(1) [],
    ],
];

pub const RCM_BASE_ADDR: usize = 0x4007_F000;

pub const RCM_BASE: StaticRef<RcmRegisters> =
    unsafe { StaticRef::new(RCM_BASE_ADDR as *const RcmRegisters) };

pub const RCM_BASE_ADDRS: [usize; 1] = [RCM_BASE_ADDR];
pub const RCM_BASE_PTRS: [StaticRef<RcmRegisters>; 1] = [RCM_BASE];
/// Shared with the SCG.
pub const RCM_IRQS: [u32; 1] = [nvic::SCG_RCM];

instance_lookup!(RCM_BASE_ADDRS);

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::{offset_of, size_of};
    use tock_registers::LocalRegisterCopy;

    #[test]
    fn layout() {
        assert_eq!(offset_of!(RcmRegisters, rpc), 0x0c);
        assert_eq!(offset_of!(RcmRegisters, ssrs), 0x18);
        assert_eq!(size_of::<RcmRegisters>(), 0x20);
    }

    #[test]
    fn reset_cause() {
        let srs = LocalRegisterCopy::<u32, RESET_SOURCES::Register>::new(0x0000_0482);
        assert!(srs.is_set(RESET_SOURCES::POR));
        assert!(srs.is_set(RESET_SOURCES::LVD));
        assert!(srs.is_set(RESET_SOURCES::SW));
        assert!(!srs.is_set(RESET_SOURCES::WDOG));
        assert_eq!(RCM_IRQS, [crate::scg::SCG_IRQS[0]]);
    }
}
