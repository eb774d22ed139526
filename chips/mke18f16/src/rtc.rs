// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Secure real time clock.

use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

use crate::helpers::instance_lookup;
use crate::nvic;
use crate::static_ref::StaticRef;

register_structs! {
    pub RtcRegisters {
        /// RTC Time Seconds Register
        (0x00 => pub tsr: ReadWrite<u32>),
        /// RTC Time Prescaler Register
        (0x04 => pub tpr: ReadWrite<u32, TPR::Register>),
        /// RTC Time Alarm Register
        (0x08 => pub tar: ReadWrite<u32>),
        /// RTC Time Compensation Register
        (0x0c => pub tcr: ReadWrite<u32, TCR::Register>),
        /// RTC Control Register
        (0x10 => pub cr: ReadWrite<u32, CR::Register>),
        /// RTC Status Register
        (0x14 => pub sr: ReadWrite<u32, SR::Register>),
        /// RTC Lock Register
        (0x18 => pub lr: ReadWrite<u32, LR::Register>),
        /// RTC Interrupt Enable Register
        (0x1c => pub ier: ReadWrite<u32, IER::Register>),
        (0x20 => @END),
    }
}

register_bitfields![u32,
    pub TPR [
        /// Time Prescaler Register
        TPR OFFSET(0) NUMBITS(16) [],
    ],
    pub TCR [
        /// Time Compensation Register
        TCR OFFSET(0) NUMBITS(8) [],
        /// Compensation Interval Register
        CIR OFFSET(8) NUMBITS(8) [],
        /// Time Compensation Value
        TCV OFFSET(16) NUMBITS(8) [],
        /// Compensation Interval Counter
        CIC OFFSET(24) NUMBITS(8) [],
    ],
    pub CR [
        /// Software Reset
        SWR OFFSET(0) NUMBITS(1) [],
        /// Supervisor Access
        SUP OFFSET(2) NUMBITS(1) [],
        /// Update Mode
        UM OFFSET(3) NUMBITS(1) [],
        /// Clock Pin Select
        CPS OFFSET(5) NUMBITS(1) [],
        /// LPO Select
        LPOS OFFSET(7) NUMBITS(1) [
            Rtc32k = 0,
            Lpo1k = 1,
        ],
        /// Clock Pin Enable
        CPE OFFSET(24) NUMBITS(1) [],
    ],
    pub SR [
        /// Time Invalid Flag
        TIF OFFSET(0) NUMBITS(1) [],
        /// Time Overflow Flag
        TOF OFFSET(1) NUMBITS(1) [],
        /// Time Alarm Flag
        TAF OFFSET(2) NUMBITS(1) [],
        /// Time Counter Enable
        TCE OFFSET(4) NUMBITS(1) [],
    ],
    pub LR [
        /// Time Compensation Lock
        TCL OFFSET(3) NUMBITS(1) [],
        /// Control Register Lock
        CRL OFFSET(4) NUMBITS(1) [],
        /// Status Register Lock
        SRL OFFSET(5) NUMBITS(1) [],
        /// Lock Register Lock
        LRL OFFSET(6) NUMBITS(1) [],
    ],
    pub IER [
        /// Time Invalid Interrupt Enable
        TIIE OFFSET(0) NUMBITS(1) [],
        /// Time Overflow Interrupt Enable
        TOIE OFFSET(1) NUMBITS(1) [],
        /// Time Alarm Interrupt Enable
        TAIE OFFSET(2) NUMBITS(1) [],
        /// Time Seconds Interrupt Enable
        TSIE OFFSET(4) NUMBITS(1) [],
        /// Timer Seconds Interrupt Configuration
        TSIC OFFSET(16) NUMBITS(3) [
            Hz1 = 0,
            Hz2 = 1,
            Hz4 = 2,
            Hz8 = 3,
            Hz16 = 4,
            Hz32 = 5,
            Hz64 = 6,
            Hz128 = 7,
        ],
    ],
];

pub const RTC_BASE_ADDR: usize = 0x4003_D000;

pub const RTC_BASE: StaticRef<RtcRegisters> =
    unsafe { StaticRef::new(RTC_BASE_ADDR as *const RtcRegisters) };

pub const RTC_BASE_ADDRS: [usize; 1] = [RTC_BASE_ADDR];
pub const RTC_BASE_PTRS: [StaticRef<RtcRegisters>; 1] = [RTC_BASE];
pub const RTC_IRQS: [u32; 1] = [nvic::RTC];
pub const RTC_SECONDS_IRQS: [u32; 1] = [nvic::RTC_Seconds];

instance_lookup!(RTC_BASE_ADDRS);

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::size_of;
    use tock_registers::LocalRegisterCopy;

    #[test]
    fn layout() {
        assert_eq!(size_of::<RtcRegisters>(), 0x20);
        assert_eq!(RTC_IRQS, [46]);
        assert_eq!(RTC_SECONDS_IRQS, [47]);
    }

    #[test]
    fn status_after_power_on() {
        // TIF is set out of reset until TSR is written.
        let sr = LocalRegisterCopy::<u32, SR::Register>::new(0x0000_0001);
        assert!(sr.is_set(SR::TIF));
        assert!(!sr.is_set(SR::TCE));
        assert_eq!(IER::TSIC::Hz8.value, 0x0003_0000);
    }
}
