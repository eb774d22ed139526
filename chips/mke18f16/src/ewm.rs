// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! External watchdog monitor.

use tock_registers::registers::{ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

use crate::helpers::instance_lookup;
use crate::nvic;
use crate::static_ref::StaticRef;

/// First and second words of the service sequence written to SERV.
pub const EWM_SERVICE_KEYS: [u8; 2] = [0xb4, 0x2c];

register_structs! {
    pub EwmRegisters {
        /// Control Register
        (0x0 => pub ctrl: ReadWrite<u8, CTRL::Register>),
        /// Service Register
        (0x1 => pub serv: WriteOnly<u8>),
        /// Compare Low Register
        (0x2 => pub cmpl: ReadWrite<u8>),
        /// Compare High Register
        (0x3 => pub cmph: ReadWrite<u8>),
        /// Clock Control Register
        (0x4 => pub clkctrl: ReadWrite<u8, CLKCTRL::Register>),
        /// Clock Prescaler Register
        (0x5 => pub clkprescaler: ReadWrite<u8>),
        (0x6 => @END),
    }
}

register_bitfields![u8,
    pub CTRL [
        /// EWM enable
        EWMEN OFFSET(0) NUMBITS(1) [],
        /// EWM_in's Assertion State Select
        ASSIN OFFSET(1) NUMBITS(1) [],
        /// Input Enable
        INEN OFFSET(2) NUMBITS(1) [],
        /// Interrupt Enable
        INTEN OFFSET(3) NUMBITS(1) [],
    ],
    pub CLKCTRL [
        CLKSEL OFFSET(0) NUMBITS(2) [
            Lpo = 0,
            Sirc = 1,
            Firc = 2,
            Sosc = 3,
        ],
    ],
];

pub const EWM_BASE_ADDR: usize = 0x4006_1000;

pub const EWM_BASE: StaticRef<EwmRegisters> =
    unsafe { StaticRef::new(EWM_BASE_ADDR as *const EwmRegisters) };

pub const EWM_BASE_ADDRS: [usize; 1] = [EWM_BASE_ADDR];
pub const EWM_BASE_PTRS: [StaticRef<EwmRegisters>; 1] = [EWM_BASE];
/// Shared with the watchdog.
pub const EWM_IRQS: [u32; 1] = [nvic::WDOG_EWM];

instance_lookup!(EWM_BASE_ADDRS);

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::size_of;

    #[test]
    fn layout_and_lines() {
        assert_eq!(size_of::<EwmRegisters>(), 6);
        assert_eq!(EWM_IRQS, [crate::wdog::WDOG_IRQS[0]]);
        assert_eq!(CTRL::INTEN::SET.value, 0x08);
        assert_eq!(instance(EWM_BASE_ADDR), Ok(0));
    }
}
