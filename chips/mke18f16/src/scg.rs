// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! System clock generator.
//!
//! Four clock sources (system oscillator, slow and fast IRCs, system PLL)
//! each expose a control/status, an asynchronous divider and a
//! configuration register. The core, bus and slow clocks are derived from
//! the source selected in RCCR (run), VCCR (VLPR) or HCCR (HSRUN), and the
//! active selection is reported in CSR.

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::helpers::instance_lookup;
use crate::nvic;
use crate::static_ref::StaticRef;

register_structs! {
    pub ScgRegisters {
        /// Version ID Register
        (0x000 => pub verid: ReadOnly<u32>),
        /// Parameter Register
        (0x004 => pub param: ReadOnly<u32, PARAM::Register>),
        (0x008 => _reserved0),
        /// Clock Status Register
        (0x010 => pub csr: ReadOnly<u32, CCR::Register>),
        /// Run Clock Control Register
        (0x014 => pub rccr: ReadWrite<u32, CCR::Register>),
        /// VLPR Clock Control Register
        (0x018 => pub vccr: ReadWrite<u32, CCR::Register>),
        /// HSRUN Clock Control Register
        (0x01c => pub hccr: ReadWrite<u32, CCR::Register>),
        /// SCG CLKOUT Configuration Register
        (0x020 => pub clkoutcnfg: ReadWrite<u32, CLKOUTCNFG::Register>),
        (0x024 => _reserved1),
        /// System OSC Control Status Register
        (0x100 => pub sosccsr: ReadWrite<u32, SOSCCSR::Register>),
        /// System OSC Divide Register
        (0x104 => pub soscdiv: ReadWrite<u32, DIV::Register>),
        /// System Oscillator Configuration Register
        (0x108 => pub sosccfg: ReadWrite<u32, SOSCCFG::Register>),
        (0x10c => _reserved2),
        /// Slow IRC Control Status Register
        (0x200 => pub sirccsr: ReadWrite<u32, SIRCCSR::Register>),
        /// Slow IRC Divide Register
        (0x204 => pub sircdiv: ReadWrite<u32, DIV::Register>),
        /// Slow IRC Configuration Register
        (0x208 => pub sirccfg: ReadWrite<u32, SIRCCFG::Register>),
        (0x20c => _reserved3),
        /// Fast IRC Control Status Register
        (0x300 => pub firccsr: ReadWrite<u32, FIRCCSR::Register>),
        /// Fast IRC Divide Register
        (0x304 => pub fircdiv: ReadWrite<u32, DIV::Register>),
        /// Fast IRC Configuration Register
        (0x308 => pub firccfg: ReadWrite<u32, FIRCCFG::Register>),
        (0x30c => _reserved4),
        /// System PLL Control Status Register
        (0x600 => pub spllcsr: ReadWrite<u32, SPLLCSR::Register>),
        /// System PLL Divide Register
        (0x604 => pub splldiv: ReadWrite<u32, DIV::Register>),
        /// System PLL Configuration Register
        (0x608 => pub spllcfg: ReadWrite<u32, SPLLCFG::Register>),
        (0x60c => @END),
    }
}

register_bitfields![u32,
    pub PARAM [
        /// Clock Present, one bit per source number
        CLKPRES OFFSET(0) NUMBITS(8) [],
        /// Divider Present
        DIVPRES OFFSET(27) NUMBITS(5) [],
    ],
    /// CSR, RCCR, VCCR and HCCR
    pub CCR [
        /// Slow Clock Divide Ratio, divide by DIVSLOW + 1
        DIVSLOW OFFSET(0) NUMBITS(4) [],
        /// Bus Clock Divide Ratio, divide by DIVBUS + 1
        DIVBUS OFFSET(4) NUMBITS(4) [],
        /// Core Clock Divide Ratio, divide by DIVCORE + 1
        DIVCORE OFFSET(16) NUMBITS(4) [],
        /// System Clock Source
        SCS OFFSET(24) NUMBITS(4) [
            Sosc = 1,
            Sirc = 2,
            Firc = 3,
            Spll = 6,
        ],
    ],
    pub CLKOUTCNFG [
        /// SCG Clkout Select
        CLKOUTSEL OFFSET(24) NUMBITS(4) [
            SlowClock = 0,
            Sosc = 1,
            Sirc = 2,
            Firc = 3,
            Spll = 6,
        ],
    ],
    /// SOSCDIV, SIRCDIV, FIRCDIV and SPLLDIV
    pub DIV [
        /// Asynchronous clock divider 1
        DIV1 OFFSET(0) NUMBITS(3) [
            Disabled = 0,
            DivBy1 = 1,
            DivBy2 = 2,
            DivBy4 = 3,
            DivBy8 = 4,
            DivBy16 = 5,
            DivBy32 = 6,
            DivBy64 = 7,
        ],
        /// Asynchronous clock divider 2
        DIV2 OFFSET(8) NUMBITS(3) [
            Disabled = 0,
            DivBy1 = 1,
            DivBy2 = 2,
            DivBy4 = 3,
            DivBy8 = 4,
            DivBy16 = 5,
            DivBy32 = 6,
            DivBy64 = 7,
        ],
    ],
    pub SOSCCSR [
        /// System OSC Enable
        SOSCEN OFFSET(0) NUMBITS(1) [],
        /// System OSC Stop Enable
        SOSCSTEN OFFSET(1) NUMBITS(1) [],
        /// System OSC Low Power Enable
        SOSCLPEN OFFSET(2) NUMBITS(1) [],
        /// System OSC Clock Monitor
        SOSCCM OFFSET(16) NUMBITS(1) [],
        /// System OSC Clock Monitor Reset Enable
        SOSCCMRE OFFSET(17) NUMBITS(1) [],
        /// Lock Register
        LK OFFSET(23) NUMBITS(1) [],
        /// System OSC Valid
        SOSCVLD OFFSET(24) NUMBITS(1) [],
        /// System OSC Selected
        SOSCSEL OFFSET(25) NUMBITS(1) [],
        /// System OSC Clock Error
        SOSCERR OFFSET(26) NUMBITS(1) [],
    ],
    pub SOSCCFG [
        /// External Reference Select
        EREFS OFFSET(2) NUMBITS(1) [
            External = 0,
            Oscillator = 1,
        ],
        /// High Gain Oscillator Select
        HGO OFFSET(3) NUMBITS(1) [],
        /// System OSC Range Select
        RANGE OFFSET(4) NUMBITS(2) [
            Medium = 2,
            High = 3,
        ],
    ],
    pub SIRCCSR [
        /// Slow IRC Enable
        SIRCEN OFFSET(0) NUMBITS(1) [],
        /// Slow IRC Stop Enable
        SIRCSTEN OFFSET(1) NUMBITS(1) [],
        /// Slow IRC Low Power Enable
        SIRCLPEN OFFSET(2) NUMBITS(1) [],
        /// Lock Register
        LK OFFSET(23) NUMBITS(1) [],
        /// Slow IRC Valid
        SIRCVLD OFFSET(24) NUMBITS(1) [],
        /// Slow IRC Selected
        SIRCSEL OFFSET(25) NUMBITS(1) [],
    ],
    pub SIRCCFG [
        /// Frequency Range
        RANGE OFFSET(0) NUMBITS(1) [
            Low2MHz = 0,
            High8MHz = 1,
        ],
    ],
    pub FIRCCSR [
        /// Fast IRC Enable
        FIRCEN OFFSET(0) NUMBITS(1) [],
        /// Fast IRC Regulator Enable, active low
        FIRCREGOFF OFFSET(3) NUMBITS(1) [],
        /// Lock Register
        LK OFFSET(23) NUMBITS(1) [],
        /// Fast IRC Valid status
        FIRCVLD OFFSET(24) NUMBITS(1) [],
        /// Fast IRC Selected status
        FIRCSEL OFFSET(25) NUMBITS(1) [],
        /// Fast IRC Clock Error
        FIRCERR OFFSET(26) NUMBITS(1) [],
    ],
    pub FIRCCFG [
        /// Frequency Range
        RANGE OFFSET(0) NUMBITS(2) [
            Trimmed48MHz = 0,
        ],
    ],
    pub SPLLCSR [
        /// System PLL Enable
        SPLLEN OFFSET(0) NUMBITS(1) [],
        /// System PLL Clock Monitor
        SPLLCM OFFSET(16) NUMBITS(1) [],
        /// System PLL Clock Monitor Reset Enable
        SPLLCMRE OFFSET(17) NUMBITS(1) [],
        /// Lock Register
        LK OFFSET(23) NUMBITS(1) [],
        /// System PLL Valid
        SPLLVLD OFFSET(24) NUMBITS(1) [],
        /// System PLL Selected
        SPLLSEL OFFSET(25) NUMBITS(1) [],
        /// System PLL Clock Error
        SPLLERR OFFSET(26) NUMBITS(1) [],
    ],
    pub SPLLCFG [
        /// PLL Reference Clock Divider, divide by PREDIV + 1
        PREDIV OFFSET(8) NUMBITS(3) [],
        /// System PLL Multiplier, multiply by MULT + 16
        MULT OFFSET(16) NUMBITS(5) [],
    ],
];

/// Division ratio selected by a DIV1/DIV2 field, `None` when the output
/// is disabled.
pub const fn async_divider(field: u32) -> Option<u32> {
    match field & 0x7 {
        0 => None,
        n => Some(1 << (n - 1)),
    }
}

/// SPLL_CLK frequency for a given reference and SPLLCFG setting. The VCO
/// runs at `reference * (MULT + 16) / (PREDIV + 1)` and is halved on the
/// way out.
pub const fn spll_output_freq(reference_hz: u32, prediv: u32, mult: u32) -> u32 {
    let vco = reference_hz as u64 * ((mult & 0x1f) as u64 + 16) / ((prediv & 0x7) as u64 + 1);
    (vco / 2) as u32
}

pub const SCG_BASE_ADDR: usize = 0x4006_4000;

pub const SCG_BASE: StaticRef<ScgRegisters> =
    unsafe { StaticRef::new(SCG_BASE_ADDR as *const ScgRegisters) };

pub const SCG_BASE_ADDRS: [usize; 1] = [SCG_BASE_ADDR];
pub const SCG_BASE_PTRS: [StaticRef<ScgRegisters>; 1] = [SCG_BASE];
pub const SCG_IRQS: [u32; 1] = [nvic::SCG_RCM];

instance_lookup!(SCG_BASE_ADDRS);

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::{offset_of, size_of};
    use tock_registers::LocalRegisterCopy;

    #[test]
    fn layout() {
        assert_eq!(offset_of!(ScgRegisters, csr), 0x10);
        assert_eq!(offset_of!(ScgRegisters, clkoutcnfg), 0x20);
        assert_eq!(offset_of!(ScgRegisters, sosccsr), 0x100);
        assert_eq!(offset_of!(ScgRegisters, sirccfg), 0x208);
        assert_eq!(offset_of!(ScgRegisters, fircdiv), 0x304);
        assert_eq!(offset_of!(ScgRegisters, spllcfg), 0x608);
        assert_eq!(size_of::<ScgRegisters>(), 0x60c);
    }

    #[test]
    fn run_mode_from_firc() {
        // Out of reset the core runs from FIRC, bus at half and slow at a
        // quarter of the core clock.
        let csr = LocalRegisterCopy::<u32, CCR::Register>::new(0x0301_0013);
        assert_eq!(csr.read_as_enum(CCR::SCS), Some(CCR::SCS::Value::Firc));
        assert_eq!(csr.read(CCR::DIVCORE), 1);
        assert_eq!(csr.read(CCR::DIVBUS), 1);
        assert_eq!(csr.read(CCR::DIVSLOW), 3);
    }

    #[test]
    fn dividers() {
        assert_eq!(async_divider(0), None);
        assert_eq!(async_divider(1), Some(1));
        assert_eq!(async_divider(DIV::DIV1::DivBy64.value), Some(64));
        assert_eq!((DIV::DIV1::DivBy1 + DIV::DIV2::DivBy2).value, 0x0201);
    }

    #[test]
    fn pll_frequency() {
        // 8 MHz crystal, PREDIV 0, MULT 24: 320 MHz VCO, 160 MHz SPLL_CLK.
        assert_eq!(spll_output_freq(8_000_000, 0, 24), 160_000_000);
        // PREDIV + 1 = 3 does not divide 16 MHz.
        assert_eq!(spll_output_freq(16_000_000, 2, 24), 106_666_666);
        assert_eq!(spll_output_freq(48_000_000, 0, 31), 1_128_000_000);
        assert_eq!(
            (SPLLCFG::PREDIV.val(0) + SPLLCFG::MULT.val(24)).value,
            0x0018_0000
        );
    }
}
