// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Pin control and interrupt ports (PORTA..PORTE).
//!
//! Each port has 32 pin control registers selecting the pin mux, pull and
//! interrupt configuration, plus global write registers that update the
//! low or high 16 PCRs in one access.

use tock_registers::registers::{ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

use crate::helpers::instance_lookup;
use crate::nvic;
use crate::static_ref::StaticRef;

pub const PORT_PCR_COUNT: usize = 32;

register_structs! {
    pub PortRegisters {
        /// Pin Control Register n
        (0x00 => pub pcr: [ReadWrite<u32, PCR::Register>; PORT_PCR_COUNT]),
        /// Global Pin Control Low Register
        (0x80 => pub gpclr: WriteOnly<u32, GPC::Register>),
        /// Global Pin Control High Register
        (0x84 => pub gpchr: WriteOnly<u32, GPC::Register>),
        /// Global Interrupt Control Low Register
        (0x88 => pub giclr: WriteOnly<u32, GIC::Register>),
        /// Global Interrupt Control High Register
        (0x8c => pub gichr: WriteOnly<u32, GIC::Register>),
        (0x90 => _reserved0),
        /// Interrupt Status Flag Register, write 1 to clear
        (0xa0 => pub isfr: ReadWrite<u32>),
        (0xa4 => _reserved1),
        /// Digital Filter Enable Register
        (0xc0 => pub dfer: ReadWrite<u32>),
        /// Digital Filter Clock Register
        (0xc4 => pub dfcr: ReadWrite<u32, DFCR::Register>),
        /// Digital Filter Width Register
        (0xc8 => pub dfwr: ReadWrite<u32, DFWR::Register>),
        (0xcc => @END),
    }
}

register_bitfields![u32,
    pub PCR [
        /// Pull Select
        PS OFFSET(0) NUMBITS(1) [
            PullDown = 0,
            PullUp = 1,
        ],
        /// Pull Enable
        PE OFFSET(1) NUMBITS(1) [],
        /// Passive Filter Enable
        PFE OFFSET(4) NUMBITS(1) [],
        /// Drive Strength Enable
        DSE OFFSET(6) NUMBITS(1) [],
        /// Pin Mux Control
        MUX OFFSET(8) NUMBITS(3) [
            PinDisabled = 0,
            Gpio = 1,
            Alt2 = 2,
            Alt3 = 3,
            Alt4 = 4,
            Alt5 = 5,
            Alt6 = 6,
            Alt7 = 7,
        ],
        /// Lock Register
        LK OFFSET(15) NUMBITS(1) [],
        /// Interrupt Configuration
        IRQC OFFSET(16) NUMBITS(4) [
            Disabled = 0,
            DmaRisingEdge = 1,
            DmaFallingEdge = 2,
            DmaEitherEdge = 3,
            FlagRisingEdge = 5,
            FlagFallingEdge = 6,
            FlagEitherEdge = 7,
            InterruptLogicZero = 8,
            InterruptRisingEdge = 9,
            InterruptFallingEdge = 10,
            InterruptEitherEdge = 11,
            InterruptLogicOne = 12,
            TriggerHigh = 13,
            TriggerLow = 14,
        ],
        /// Interrupt Status Flag
        ISF OFFSET(24) NUMBITS(1) [],
    ],
    pub GPC [
        /// Global Pin Write Data, written to PCR[15:0]
        GPWD OFFSET(0) NUMBITS(16) [],
        /// Global Pin Write Enable, one bit per pin of the half
        GPWE OFFSET(16) NUMBITS(16) [],
    ],
    pub GIC [
        /// Global Interrupt Write Enable
        GIWE OFFSET(0) NUMBITS(16) [],
        /// Global Interrupt Write Data, written to PCR[31:16]
        GIWD OFFSET(16) NUMBITS(16) [],
    ],
    pub DFCR [
        /// Clock Source
        CS OFFSET(0) NUMBITS(1) [
            BusClock = 0,
            Lpo = 1,
        ],
    ],
    pub DFWR [
        /// Filter Length
        FILT OFFSET(0) NUMBITS(5) [],
    ],
];

pub const PORTA_BASE_ADDR: usize = 0x4004_9000;
pub const PORTB_BASE_ADDR: usize = 0x4004_A000;
pub const PORTC_BASE_ADDR: usize = 0x4004_B000;
pub const PORTD_BASE_ADDR: usize = 0x4004_C000;
pub const PORTE_BASE_ADDR: usize = 0x4004_D000;

pub const PORTA_BASE: StaticRef<PortRegisters> =
    unsafe { StaticRef::new(PORTA_BASE_ADDR as *const PortRegisters) };
pub const PORTB_BASE: StaticRef<PortRegisters> =
    unsafe { StaticRef::new(PORTB_BASE_ADDR as *const PortRegisters) };
pub const PORTC_BASE: StaticRef<PortRegisters> =
    unsafe { StaticRef::new(PORTC_BASE_ADDR as *const PortRegisters) };
pub const PORTD_BASE: StaticRef<PortRegisters> =
    unsafe { StaticRef::new(PORTD_BASE_ADDR as *const PortRegisters) };
pub const PORTE_BASE: StaticRef<PortRegisters> =
    unsafe { StaticRef::new(PORTE_BASE_ADDR as *const PortRegisters) };

pub const PORT_BASE_ADDRS: [usize; 5] = [
    PORTA_BASE_ADDR,
    PORTB_BASE_ADDR,
    PORTC_BASE_ADDR,
    PORTD_BASE_ADDR,
    PORTE_BASE_ADDR,
];
pub const PORT_BASE_PTRS: [StaticRef<PortRegisters>; 5] =
    [PORTA_BASE, PORTB_BASE, PORTC_BASE, PORTD_BASE, PORTE_BASE];
pub const PORT_IRQS: [u32; 5] = [
    nvic::PORTA,
    nvic::PORTB,
    nvic::PORTC,
    nvic::PORTD,
    nvic::PORTE,
];

instance_lookup!(PORT_BASE_ADDRS);

/// Value for GPCLR or GPCHR that writes `pcr` (low half only) into every
/// pin selected by `pins` within the corresponding 16-pin half.
pub const fn global_pin_write(pins: u16, pcr: u16) -> u32 {
    ((pins as u32) << 16) | pcr as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::{offset_of, size_of};
    use tock_registers::interfaces::{Readable, Writeable};
    use tock_registers::LocalRegisterCopy;

    #[test]
    fn layout() {
        assert_eq!(offset_of!(PortRegisters, gpclr), 0x80);
        assert_eq!(offset_of!(PortRegisters, gichr), 0x8c);
        assert_eq!(offset_of!(PortRegisters, isfr), 0xa0);
        assert_eq!(offset_of!(PortRegisters, dfer), 0xc0);
        assert_eq!(offset_of!(PortRegisters, dfwr), 0xc8);
        assert_eq!(size_of::<PortRegisters>(), 0xcc);
    }

    #[test]
    fn pin_config() {
        let mut backing = [0u32; size_of::<PortRegisters>() / 4];
        let regs = unsafe { &*(backing.as_mut_ptr() as *const PortRegisters) };
        regs.pcr[7].write(PCR::MUX::Alt3 + PCR::PE::SET + PCR::PS::PullUp);
        regs.pcr[8].write(PCR::MUX::Gpio + PCR::IRQC::InterruptFallingEdge);
        assert_eq!(regs.pcr[7].get(), 0x0303);
        assert_eq!(backing[8], 0x000a_0100);

        let pcr = LocalRegisterCopy::<u32, PCR::Register>::new(backing[8]);
        assert_eq!(
            pcr.read_as_enum(PCR::IRQC),
            Some(PCR::IRQC::Value::InterruptFallingEdge)
        );
    }

    #[test]
    fn global_write() {
        let value = global_pin_write(0x00f0, 0x0100);
        assert_eq!(value, 0x00f0_0100);
        assert_eq!(
            value,
            (GPC::GPWE.val(0x00f0) + GPC::GPWD.val(0x0100)).value
        );
    }

    #[test]
    fn instances() {
        assert_eq!(instance(PORTC_BASE_ADDR), Ok(2));
        assert_eq!(PORT_IRQS, [59, 60, 61, 62, 63]);
    }
}
