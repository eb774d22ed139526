// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Pulse width timer.

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::helpers::instance_lookup;
use crate::nvic;
use crate::static_ref::StaticRef;

register_structs! {
    pub PwtRegisters {
        /// Pulse Width Timer Control and Status Register
        (0x0 => pub pwtcs: ReadWrite<u8, PWTCS::Register>),
        /// Pulse Width Timer Control Register
        (0x1 => pub pwtc: ReadWrite<u8, PWTC::Register>),
        /// Positive Pulse Width, high and low byte
        (0x2 => pub pwtpph: ReadOnly<u8>),
        (0x3 => pub pwtppl: ReadOnly<u8>),
        /// Negative Pulse Width, high and low byte
        (0x4 => pub pwtnph: ReadOnly<u8>),
        (0x5 => pub pwtnpl: ReadOnly<u8>),
        /// Counter, high and low byte
        (0x6 => pub pwtcnth: ReadOnly<u8>),
        (0x7 => pub pwtcntl: ReadOnly<u8>),
        (0x8 => @END),
    }
}

register_bitfields![u8,
    pub PWTCS [
        /// PWT Soft Reset
        PWTSR OFFSET(0) NUMBITS(1) [],
        /// PWT Counter Overflow
        PWTOV OFFSET(1) NUMBITS(1) [],
        /// PWT Pulse Width Valid
        PWTRDY OFFSET(2) NUMBITS(1) [],
        /// PWT Module Interrupt Enable
        PWTIE OFFSET(4) NUMBITS(1) [],
        /// PWT Counter Overflow Interrupt Enable
        POVIE OFFSET(5) NUMBITS(1) [],
        /// PWT Pulse Width Data Ready Interrupt Enable
        PRDYIE OFFSET(6) NUMBITS(1) [],
        /// PWT Module Enable
        PWTEN OFFSET(7) NUMBITS(1) [],
    ],
    pub PWTC [
        /// PWT Clock Prescaler, divide by 2^PRE
        PRE OFFSET(0) NUMBITS(3) [],
        /// PWT Input Edge Sensitivity
        EDGE OFFSET(3) NUMBITS(2) [
            FallingToFalling = 0,
            RisingToFalling = 1,
            RisingToRising = 2,
            FallingToRising = 3,
        ],
        /// PWT Pulse Inputs Selection
        PINSEL OFFSET(5) NUMBITS(2) [],
        /// PWT Clock Source Selection
        PCLKS OFFSET(7) NUMBITS(1) [
            BusClock = 0,
            AlternativeClock = 1,
        ],
    ],
];

impl PwtRegisters {
    /// Latched positive pulse width in counter ticks.
    pub fn positive_width(&self) -> u16 {
        use tock_registers::interfaces::Readable;
        u16::from_be_bytes([self.pwtpph.get(), self.pwtppl.get()])
    }

    /// Latched negative pulse width in counter ticks.
    pub fn negative_width(&self) -> u16 {
        use tock_registers::interfaces::Readable;
        u16::from_be_bytes([self.pwtnph.get(), self.pwtnpl.get()])
    }
}

pub const PWT_BASE_ADDR: usize = 0x4005_6000;

pub const PWT_BASE: StaticRef<PwtRegisters> =
    unsafe { StaticRef::new(PWT_BASE_ADDR as *const PwtRegisters) };

pub const PWT_BASE_ADDRS: [usize; 1] = [PWT_BASE_ADDR];
pub const PWT_BASE_PTRS: [StaticRef<PwtRegisters>; 1] = [PWT_BASE];
pub const PWT_IRQS: [u32; 1] = [nvic::PWT];

instance_lookup!(PWT_BASE_ADDRS);

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::size_of;

    #[test]
    fn layout() {
        assert_eq!(size_of::<PwtRegisters>(), 8);
        assert_eq!(PWT_IRQS, [29]);
    }

    #[test]
    fn pulse_widths() {
        let mut backing = [0x12u8, 0x00, 0x03, 0xe8, 0x00, 0x7f, 0, 0];
        let regs = unsafe { &*(backing.as_mut_ptr() as *const PwtRegisters) };
        assert_eq!(regs.positive_width(), 1000);
        assert_eq!(regs.negative_width(), 0x7f);
        assert_eq!(PWTC::EDGE::RisingToRising.value, 0x10);
    }
}
