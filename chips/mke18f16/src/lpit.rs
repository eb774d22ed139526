// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Low-power periodic interrupt timer with four chainable channels.
//!
//! Channels 0..3 also drive the periodic triggers of DMAMUX channels 0..3.

use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

use crate::helpers::instance_lookup;
use crate::nvic;
use crate::static_ref::StaticRef;

pub const LPIT_CHANNEL_COUNT: usize = 4;

register_structs! {
    pub LpitChannel {
        /// Timer Value Register
        (0x0 => pub tval: ReadWrite<u32>),
        /// Current Timer Value
        (0x4 => pub cval: ReadOnly<u32>),
        /// Timer Control Register
        (0x8 => pub tctrl: ReadWrite<u32, TCTRL::Register>),
        (0xc => _reserved0),
        (0x10 => @END),
    }
}

register_structs! {
    pub LpitRegisters {
        /// Version ID Register
        (0x00 => pub verid: ReadOnly<u32>),
        /// Parameter Register
        (0x04 => pub param: ReadOnly<u32, PARAM::Register>),
        /// Module Control Register
        (0x08 => pub mcr: ReadWrite<u32, MCR::Register>),
        /// Module Status Register
        (0x0c => pub msr: ReadWrite<u32, CHANNELS::Register>),
        /// Module Interrupt Enable Register
        (0x10 => pub mier: ReadWrite<u32, CHANNELS::Register>),
        /// Set Timer Enable Register
        (0x14 => pub setten: WriteOnly<u32, CHANNELS::Register>),
        /// Clear Timer Enable Register
        (0x18 => pub clrten: WriteOnly<u32, CHANNELS::Register>),
        (0x1c => _reserved0),
        (0x20 => pub channel: [LpitChannel; LPIT_CHANNEL_COUNT]),
        (0x60 => @END),
    }
}

register_bitfields![u32,
    pub PARAM [
        /// Number of Timer Channels
        CHANNEL OFFSET(0) NUMBITS(8) [],
        /// Number of External Trigger Inputs
        EXT_TRIG OFFSET(8) NUMBITS(8) [],
    ],
    pub MCR [
        /// Module Clock Enable
        M_CEN OFFSET(0) NUMBITS(1) [],
        /// Software Reset Bit
        SW_RST OFFSET(1) NUMBITS(1) [],
        /// DOZE Mode Enable Bit
        DOZE_EN OFFSET(2) NUMBITS(1) [],
        /// Debug Enable Bit
        DBG_EN OFFSET(3) NUMBITS(1) [],
    ],
    /// MSR, MIER, SETTEN and CLRTEN: one bit per channel.
    pub CHANNELS [
        CH0 OFFSET(0) NUMBITS(1) [],
        CH1 OFFSET(1) NUMBITS(1) [],
        CH2 OFFSET(2) NUMBITS(1) [],
        CH3 OFFSET(3) NUMBITS(1) [],
    ],
    pub TCTRL [
        /// Timer Enable
        T_EN OFFSET(0) NUMBITS(1) [],
        /// Chain Channel
        CHAIN OFFSET(1) NUMBITS(1) [],
        /// Timer Operation Mode
        MODE OFFSET(2) NUMBITS(2) [
            Periodic32 = 0,
            DualPeriodic16 = 1,
            TriggerAccumulator32 = 2,
            InputCapture32 = 3,
        ],
        /// Timer Start On Trigger
        TSOT OFFSET(16) NUMBITS(1) [],
        /// Timer Stop On Interrupt
        TSOI OFFSET(17) NUMBITS(1) [],
        /// Timer Reload On Trigger
        TROT OFFSET(18) NUMBITS(1) [],
        /// Trigger Source
        TRG_SRC OFFSET(23) NUMBITS(1) [
            External = 0,
            Internal = 1,
        ],
        /// Trigger Select
        TRG_SEL OFFSET(24) NUMBITS(4) [],
    ],
];

/// Bit for `channel` in MSR, MIER, SETTEN and CLRTEN, `None` past the last
/// channel.
pub const fn channel_mask(channel: usize) -> Option<u32> {
    if channel < LPIT_CHANNEL_COUNT {
        Some(1 << channel)
    } else {
        None
    }
}

pub const LPIT0_BASE_ADDR: usize = 0x4003_7000;

pub const LPIT0_BASE: StaticRef<LpitRegisters> =
    unsafe { StaticRef::new(LPIT0_BASE_ADDR as *const LpitRegisters) };

pub const LPIT_BASE_ADDRS: [usize; 1] = [LPIT0_BASE_ADDR];
pub const LPIT_BASE_PTRS: [StaticRef<LpitRegisters>; 1] = [LPIT0_BASE];
/// One line per channel.
pub const LPIT_IRQS: [[u32; LPIT_CHANNEL_COUNT]; 1] = [[
    nvic::LPIT0_Ch0,
    nvic::LPIT0_Ch1,
    nvic::LPIT0_Ch2,
    nvic::LPIT0_Ch3,
]];

instance_lookup!(LPIT_BASE_ADDRS);

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::{offset_of, size_of};
    use tock_registers::interfaces::{ReadWriteable, Readable, Writeable};

    #[test]
    fn layout() {
        assert_eq!(size_of::<LpitChannel>(), 0x10);
        assert_eq!(offset_of!(LpitRegisters, channel), 0x20);
        assert_eq!(size_of::<LpitRegisters>(), 0x60);
    }

    #[test]
    fn chained_channel() {
        let mut backing = [0u32; 0x60 / 4];
        let regs: &LpitRegisters = unsafe { &*(backing.as_mut_ptr() as *const LpitRegisters) };
        regs.channel[1].tval.set(47_999);
        regs.channel[1]
            .tctrl
            .modify(TCTRL::MODE::Periodic32 + TCTRL::CHAIN::SET + TCTRL::T_EN::SET);
        assert_eq!(backing[(0x20 + 0x10) / 4], 47_999);
        assert_eq!(backing[(0x20 + 0x10 + 0x8) / 4], 0x3);
        assert!(regs.channel[1].tctrl.is_set(TCTRL::CHAIN));
    }

    #[test]
    fn interrupt_lines() {
        assert_eq!(LPIT_IRQS[0], [48, 49, 50, 51]);
        assert_eq!(channel_mask(3), Some(CHANNELS::CH3::SET.value));
    }

    #[test]
    fn channel_mask_bounds() {
        assert_eq!(channel_mask(0), Some(1));
        assert_eq!(channel_mask(LPIT_CHANNEL_COUNT), None);
        assert_eq!(channel_mask(32), None);
        assert_eq!(channel_mask(usize::MAX), None);
    }
}
