// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Watchdog timer.
//!
//! Configuration is only writable inside the unlock window that follows a
//! write of [`WDOG_UNLOCK_KEY`] to CNT, and only if CS.UPDATE allows
//! reconfiguration. With CS.CMD32EN set the keys are written as one 32-bit
//! word, otherwise as two 16-bit halves low half first.

use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

use crate::helpers::instance_lookup;
use crate::nvic;
use crate::static_ref::StaticRef;

register_structs! {
    pub WdogRegisters {
        /// Watchdog Control and Status Register
        (0x0 => pub cs: ReadWrite<u32, CS::Register>),
        /// Watchdog Counter Register
        (0x4 => pub cnt: ReadWrite<u32, CNT::Register>),
        /// Watchdog Timeout Value Register
        (0x8 => pub toval: ReadWrite<u32, CNT::Register>),
        /// Watchdog Window Register
        (0xc => pub win: ReadWrite<u32, CNT::Register>),
        (0x10 => @END),
    }
}

register_bitfields![u32,
    pub CS [
        /// Stop Enable
        STOP OFFSET(0) NUMBITS(1) [],
        /// Wait Enable
        WAIT OFFSET(1) NUMBITS(1) [],
        /// Debug Enable
        DBG OFFSET(2) NUMBITS(1) [],
        /// Watchdog Test
        TST OFFSET(3) NUMBITS(2) [
            Disabled = 0,
            UserMode = 1,
            TestLowByte = 2,
            TestHighByte = 3,
        ],
        /// Allow updates
        UPDATE OFFSET(5) NUMBITS(1) [],
        /// Watchdog Interrupt
        INT OFFSET(6) NUMBITS(1) [],
        /// Watchdog Enable
        EN OFFSET(7) NUMBITS(1) [],
        /// Watchdog Clock
        CLK OFFSET(8) NUMBITS(2) [
            BusClock = 0,
            LpoClock = 1,
            IntClock = 2,
            ErClock = 3,
        ],
        /// Reconfiguration Success
        RCS OFFSET(10) NUMBITS(1) [],
        /// Unlock status
        ULK OFFSET(11) NUMBITS(1) [],
        /// Watchdog prescaler, divide by 256 when set
        PRES OFFSET(12) NUMBITS(1) [],
        /// Enables or disables WDOG support for 32-bit refresh/unlock
        CMD32EN OFFSET(13) NUMBITS(1) [],
        /// Watchdog Interrupt Flag
        FLG OFFSET(14) NUMBITS(1) [],
        /// Watchdog Window
        WIN OFFSET(15) NUMBITS(1) [],
    ],
    /// CNT, TOVAL and WIN
    pub CNT [
        LOW OFFSET(0) NUMBITS(8) [],
        HIGH OFFSET(8) NUMBITS(8) [],
    ],
];

/// Written to CNT to open the configuration window.
pub const WDOG_UNLOCK_KEY: u32 = 0xD928_C520;
/// Written to CNT to restart the timeout.
pub const WDOG_REFRESH_KEY: u32 = 0xB480_A602;

/// The 16-bit write sequences used when CS.CMD32EN is clear.
pub const WDOG_UNLOCK_SEQUENCE: [u16; 2] =
    [WDOG_UNLOCK_KEY as u16, (WDOG_UNLOCK_KEY >> 16) as u16];
pub const WDOG_REFRESH_SEQUENCE: [u16; 2] =
    [WDOG_REFRESH_KEY as u16, (WDOG_REFRESH_KEY >> 16) as u16];

/// Reset value of TOVAL.
pub const WDOG_TOVAL_RESET: u32 = 0x0400;

pub const WDOG_BASE_ADDR: usize = 0x4005_2000;

pub const WDOG_BASE: StaticRef<WdogRegisters> =
    unsafe { StaticRef::new(WDOG_BASE_ADDR as *const WdogRegisters) };

pub const WDOG_BASE_ADDRS: [usize; 1] = [WDOG_BASE_ADDR];
pub const WDOG_BASE_PTRS: [StaticRef<WdogRegisters>; 1] = [WDOG_BASE];
/// Shared with the EWM.
pub const WDOG_IRQS: [u32; 1] = [nvic::WDOG_EWM];

instance_lookup!(WDOG_BASE_ADDRS);

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::size_of;
    use tock_registers::interfaces::{Readable, Writeable};

    #[test]
    fn layout() {
        assert_eq!(size_of::<WdogRegisters>(), 0x10);
        assert_eq!(WDOG_IRQS, [22]);
    }

    #[test]
    fn keys() {
        assert_eq!(WDOG_UNLOCK_SEQUENCE, [0xC520, 0xD928]);
        assert_eq!(WDOG_REFRESH_SEQUENCE, [0xA602, 0xB480]);
    }

    #[test]
    fn disable_config() {
        // The usual "disable at boot" value: 32-bit commands, LPO clock,
        // updates still allowed.
        let mut backing = [0u32; 4];
        let regs = unsafe { &*(backing.as_mut_ptr() as *const WdogRegisters) };
        regs.cs.write(CS::CMD32EN::SET + CS::CLK::LpoClock + CS::UPDATE::SET);
        regs.toval.set(0xffff);
        assert_eq!(regs.cs.get(), 0x2120);
        assert_eq!(backing[2], 0xffff);
    }
}
