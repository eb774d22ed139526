// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Low-power timer.
//!
//! CNR returns the counter only after a write to it latches the value.

use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

use crate::helpers::instance_lookup;
use crate::nvic;
use crate::static_ref::StaticRef;

register_structs! {
    pub LptmrRegisters {
        /// Low Power Timer Control Status Register
        (0x0 => pub csr: ReadWrite<u32, CSR::Register>),
        /// Low Power Timer Prescale Register
        (0x4 => pub psr: ReadWrite<u32, PSR::Register>),
        /// Low Power Timer Compare Register
        (0x8 => pub cmr: ReadWrite<u32, VALUE::Register>),
        /// Low Power Timer Counter Register
        (0xc => pub cnr: ReadWrite<u32, VALUE::Register>),
        (0x10 => @END),
    }
}

register_bitfields![u32,
    pub CSR [
        /// Timer Enable
        TEN OFFSET(0) NUMBITS(1) [],
        /// Timer Mode Select
        TMS OFFSET(1) NUMBITS(1) [
            TimeCounter = 0,
            PulseCounter = 1,
        ],
        /// Timer Free-Running Counter
        TFC OFFSET(2) NUMBITS(1) [],
        /// Timer Pin Polarity
        TPP OFFSET(3) NUMBITS(1) [],
        /// Timer Pin Select
        TPS OFFSET(4) NUMBITS(2) [],
        /// Timer Interrupt Enable
        TIE OFFSET(6) NUMBITS(1) [],
        /// Timer Compare Flag
        TCF OFFSET(7) NUMBITS(1) [],
        /// Timer DMA Request Enable
        TDRE OFFSET(8) NUMBITS(1) [],
    ],
    pub PSR [
        /// Prescaler and Glitch Filter Clock Select
        PCS OFFSET(0) NUMBITS(2) [
            Sircdiv2 = 0,
            Lpo1k = 1,
            Rtc = 2,
            Sosc = 3,
        ],
        /// Prescaler and Glitch Filter Bypass
        PBYP OFFSET(2) NUMBITS(1) [],
        /// Prescale Value
        PRESCALE OFFSET(3) NUMBITS(4) [],
    ],
    pub VALUE [
        VALUE OFFSET(0) NUMBITS(16) [],
    ],
];

pub const LPTMR0_BASE_ADDR: usize = 0x4004_0000;

pub const LPTMR0_BASE: StaticRef<LptmrRegisters> =
    unsafe { StaticRef::new(LPTMR0_BASE_ADDR as *const LptmrRegisters) };

pub const LPTMR_BASE_ADDRS: [usize; 1] = [LPTMR0_BASE_ADDR];
pub const LPTMR_BASE_PTRS: [StaticRef<LptmrRegisters>; 1] = [LPTMR0_BASE];
pub const LPTMR_IRQS: [u32; 1] = [nvic::LPTMR0];

instance_lookup!(LPTMR_BASE_ADDRS);

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::size_of;

    #[test]
    fn lpo_tick() {
        assert_eq!(size_of::<LptmrRegisters>(), 0x10);
        let psr = PSR::PCS::Lpo1k + PSR::PBYP::SET;
        assert_eq!(psr.value, 0x5);
        assert_eq!(CSR::TCF::SET.value, 0x80);
        assert_eq!(LPTMR_IRQS, [58]);
    }
}
