// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! System integration module.

use tock_registers::interfaces::Readable;
use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::helpers::instance_lookup;
use crate::static_ref::StaticRef;

register_structs! {
    pub SimRegisters {
        (0x00 => _reserved0),
        /// Chip Control register
        (0x04 => pub chipctl: ReadWrite<u32, CHIPCTL::Register>),
        (0x08 => _reserved1),
        /// FTM Option Register 0
        (0x0c => pub ftmopt0: ReadWrite<u32, FTMOPT0::Register>),
        /// LPO Clock Select Register
        (0x10 => pub lpoclks: ReadWrite<u32, LPOCLKS::Register>),
        (0x14 => _reserved2),
        /// ADC Options Register
        (0x18 => pub adcopt: ReadWrite<u32, ADCOPT::Register>),
        /// FTM Option Register 1
        (0x1c => pub ftmopt1: ReadWrite<u32, FTMOPT1::Register>),
        /// Miscellaneous control register 0
        (0x20 => pub misctrl0: ReadWrite<u32, MISCTRL0::Register>),
        /// System Device Identification Register
        (0x24 => pub sdid: ReadOnly<u32, SDID::Register>),
        (0x28 => _reserved3),
        /// Platform Clock Gating Control Register
        (0x40 => pub platcgc: ReadWrite<u32, PLATCGC::Register>),
        (0x44 => _reserved4),
        /// Flash Configuration Register 1
        (0x4c => pub fcfg1: ReadOnly<u32, FCFG1::Register>),
        (0x50 => _reserved5),
        /// Unique Identification Register High
        (0x54 => pub uidh: ReadOnly<u32>),
        /// Unique Identification Register Mid-High
        (0x58 => pub uidmh: ReadOnly<u32>),
        /// Unique Identification Register Mid Low
        (0x5c => pub uidml: ReadOnly<u32>),
        /// Unique Identification Register Low
        (0x60 => pub uidl: ReadOnly<u32>),
        (0x64 => _reserved6),
        /// System Clock Divider Register 4
        (0x68 => pub clkdiv4: ReadWrite<u32, CLKDIV4::Register>),
        /// Miscellaneous Control register 1
        (0x6c => pub misctrl1: ReadWrite<u32, MISCTRL1::Register>),
        (0x70 => @END),
    }
}

register_bitfields![u32,
    pub CHIPCTL [
        /// ADC interleave channel enable
        ADC_INTERLEAVE_EN OFFSET(0) NUMBITS(4) [],
        /// CLKOUT Select
        CLKOUTSEL OFFSET(4) NUMBITS(4) [
            ScgClkout = 0,
            SoscDiv2 = 2,
            SircDiv2 = 4,
            FircDiv2 = 6,
            HclkClk = 7,
            SpllDiv2 = 8,
            BusClk = 9,
            Lpo128k = 10,
            LpoClk = 12,
            RtcClk = 14,
        ],
        /// CLKOUT Divide Ratio, divide by CLKOUTDIV + 1
        CLKOUTDIV OFFSET(8) NUMBITS(3) [],
        /// CLKOUT enable
        CLKOUTEN OFFSET(11) NUMBITS(1) [],
        /// Debug trace clock select
        TRACECLK_SEL OFFSET(12) NUMBITS(1) [],
        /// PDB back-to-back select
        PDB_BB_SEL OFFSET(13) NUMBITS(1) [],
        /// ADC_SUPPLY
        ADC_SUPPLY OFFSET(16) NUMBITS(3) [],
        /// ADC_SUPPLYEN
        ADC_SUPPLYEN OFFSET(19) NUMBITS(1) [],
        /// SRAMU_RETEN
        SRAMU_RETEN OFFSET(20) NUMBITS(1) [],
        /// SRAML_RETEN
        SRAML_RETEN OFFSET(21) NUMBITS(1) [],
    ],
    pub FTMOPT0 [
        FTM0FLTXSEL OFFSET(0) NUMBITS(3) [],
        FTM1FLTXSEL OFFSET(4) NUMBITS(3) [],
        FTM2FLTXSEL OFFSET(8) NUMBITS(3) [],
        FTM3FLTXSEL OFFSET(12) NUMBITS(3) [],
        /// FTM0 External Clock Pin Select
        FTM0CLKSEL OFFSET(24) NUMBITS(2) [],
        FTM1CLKSEL OFFSET(26) NUMBITS(2) [],
        FTM2CLKSEL OFFSET(28) NUMBITS(2) [],
        FTM3CLKSEL OFFSET(30) NUMBITS(2) [],
    ],
    pub LPOCLKS [
        /// 1 kHz LPO_CLK enable
        LPO1KCLKEN OFFSET(0) NUMBITS(1) [],
        /// 32 kHz LPO_CLK enable
        LPO32KCLKEN OFFSET(1) NUMBITS(1) [],
        /// LPO clock source select
        LPOCLKSEL OFFSET(2) NUMBITS(2) [
            Lpo128k = 0,
            NoClock = 1,
            Lpo32k = 2,
            Lpo1k = 3,
        ],
        /// 32 kHz clock source select
        RTCCLKSEL OFFSET(4) NUMBITS(2) [
            SoscDiv1 = 0,
            Lpo32k = 1,
            RtcClkin = 2,
            FircDiv1 = 3,
        ],
    ],
    pub ADCOPT [
        /// ADC0 trigger source select
        ADC0TRGSEL OFFSET(0) NUMBITS(1) [
            Pdb = 0,
            Trgmux = 1,
        ],
        /// ADC0 software pretrigger sources
        ADC0SWPRETRG OFFSET(1) NUMBITS(3) [],
        /// ADC0 pretrigger source select
        ADC0PRETRGSEL OFFSET(4) NUMBITS(2) [],
        ADC1TRGSEL OFFSET(8) NUMBITS(1) [
            Pdb = 0,
            Trgmux = 1,
        ],
        ADC1SWPRETRG OFFSET(9) NUMBITS(3) [],
        ADC1PRETRGSEL OFFSET(12) NUMBITS(2) [],
        ADC2TRGSEL OFFSET(16) NUMBITS(1) [
            Pdb = 0,
            Trgmux = 1,
        ],
        ADC2SWPRETRG OFFSET(17) NUMBITS(3) [],
        ADC2PRETRGSEL OFFSET(20) NUMBITS(2) [],
    ],
    pub FTMOPT1 [
        /// FTMn Sync Bit
        FTM0SYNCBIT OFFSET(0) NUMBITS(1) [],
        FTM1SYNCBIT OFFSET(1) NUMBITS(1) [],
        FTM2SYNCBIT OFFSET(2) NUMBITS(1) [],
        FTM3SYNCBIT OFFSET(3) NUMBITS(1) [],
        /// FTM1 CH0 Select
        FTM1CH0SEL OFFSET(4) NUMBITS(2) [],
        /// FTM2 CH0 Select
        FTM2CH0SEL OFFSET(6) NUMBITS(2) [],
        /// FTM2 CH1 Select
        FTM2CH1SEL OFFSET(8) NUMBITS(1) [],
        /// FTM0 channel modulation select with FTM1_CH1
        FTM0_OUTSEL OFFSET(16) NUMBITS(8) [],
        /// FTM3 channel modulation select with FTM2_CH1
        FTM3_OUTSEL OFFSET(24) NUMBITS(8) [],
    ],
    pub MISCTRL0 [
        /// FTMn OBE CTRL bit
        FTM0_OBE_CTRL OFFSET(16) NUMBITS(1) [],
        FTM1_OBE_CTRL OFFSET(17) NUMBITS(1) [],
        FTM2_OBE_CTRL OFFSET(18) NUMBITS(1) [],
        FTM3_OBE_CTRL OFFSET(19) NUMBITS(1) [],
    ],
    pub SDID [
        /// Features
        FEATURES OFFSET(0) NUMBITS(8) [],
        /// Package
        PACKAGE OFFSET(8) NUMBITS(4) [
            Lqfp64 = 4,
            Lqfp100 = 8,
        ],
        /// Device revision number
        REVID OFFSET(12) NUMBITS(4) [],
        /// RAM size
        RAMSIZE OFFSET(16) NUMBITS(4) [],
        /// Derivate
        DERIVATE OFFSET(20) NUMBITS(4) [],
        /// Subseries
        SUBSERIES OFFSET(24) NUMBITS(4) [],
        /// Kinetis Generation
        GENERATION OFFSET(28) NUMBITS(4) [],
    ],
    pub PLATCGC [
        /// MSCM Clock Gating Control
        CGCMSCM OFFSET(0) NUMBITS(1) [],
        /// MPU Clock Gating Control
        CGCMPU OFFSET(1) NUMBITS(1) [],
        /// DMA Clock Gating Control
        CGCDMA OFFSET(2) NUMBITS(1) [],
        /// ERM Clock Gating Control
        CGCERM OFFSET(3) NUMBITS(1) [],
        /// EIM Clock Gating Control
        CGCEIM OFFSET(4) NUMBITS(1) [],
    ],
    pub FCFG1 [
        /// FlexNVM partition
        DEPART OFFSET(12) NUMBITS(4) [],
        /// EEE SRAM SIZE
        EEERAMSIZE OFFSET(16) NUMBITS(4) [],
    ],
    pub CLKDIV4 [
        /// Trace Clock Divider fraction
        TRACEFRAC OFFSET(0) NUMBITS(1) [],
        /// Trace Clock Divider value
        TRACEDIV OFFSET(1) NUMBITS(3) [],
        /// Debug Trace Divider control
        TRACEDIVEN OFFSET(28) NUMBITS(1) [],
    ],
    pub MISCTRL1 [
        /// Software trigger to TRGMUX
        SW_TRG OFFSET(0) NUMBITS(1) [],
    ],
];

impl SimRegisters {
    /// 128-bit unique identifier, UIDH in the top word.
    pub fn unique_id(&self) -> u128 {
        ((self.uidh.get() as u128) << 96)
            | ((self.uidmh.get() as u128) << 64)
            | ((self.uidml.get() as u128) << 32)
            | self.uidl.get() as u128
    }
}

pub const SIM_BASE_ADDR: usize = 0x4004_8000;

pub const SIM_BASE: StaticRef<SimRegisters> =
    unsafe { StaticRef::new(SIM_BASE_ADDR as *const SimRegisters) };

pub const SIM_BASE_ADDRS: [usize; 1] = [SIM_BASE_ADDR];
pub const SIM_BASE_PTRS: [StaticRef<SimRegisters>; 1] = [SIM_BASE];

instance_lookup!(SIM_BASE_ADDRS);

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::{offset_of, size_of};
    use tock_registers::LocalRegisterCopy;

    #[test]
    fn layout() {
        assert_eq!(offset_of!(SimRegisters, chipctl), 0x04);
        assert_eq!(offset_of!(SimRegisters, sdid), 0x24);
        assert_eq!(offset_of!(SimRegisters, platcgc), 0x40);
        assert_eq!(offset_of!(SimRegisters, uidh), 0x54);
        assert_eq!(offset_of!(SimRegisters, clkdiv4), 0x68);
        assert_eq!(size_of::<SimRegisters>(), 0x70);
    }

    #[test]
    fn unique_id_word_order() {
        let mut backing = [0u32; 0x70 / 4];
        backing[0x54 / 4] = 0x0011_2233;
        backing[0x58 / 4] = 0x4455_6677;
        backing[0x5c / 4] = 0x8899_aabb;
        backing[0x60 / 4] = 0xccdd_eeff;
        let regs = unsafe { &*(backing.as_mut_ptr() as *const SimRegisters) };
        assert_eq!(regs.unique_id(), 0x0011_2233_4455_6677_8899_aabb_ccdd_eeff);
    }

    #[test]
    fn package_from_sdid() {
        let sdid = LocalRegisterCopy::<u32, SDID::Register>::new(0x0000_0800);
        assert_eq!(
            sdid.read_as_enum(SDID::PACKAGE),
            Some(SDID::PACKAGE::Value::Lqfp100)
        );
        assert_eq!(CHIPCTL::CLKOUTSEL::SpllDiv2.value, 0x80);
    }
}
