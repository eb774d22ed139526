// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! 12-bit SAR analog-to-digital converter (ADC0, ADC1, ADC2).

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::helpers::instance_lookup;
use crate::nvic;
use crate::static_ref::StaticRef;

/// Number of status and control registers (SC1A..SC1P).
pub const ADC_SC1_COUNT: usize = 16;
/// Number of data result registers (RA..RP).
pub const ADC_R_COUNT: usize = 16;
/// Number of compare value registers.
pub const ADC_CV_COUNT: usize = 2;

register_structs! {
    pub AdcRegisters {
        /// ADC Status and Control Register 1, one per conversion channel
        (0x000 => pub sc1: [ReadWrite<u32, SC1::Register>; ADC_SC1_COUNT]),
        /// ADC Configuration Register 1
        (0x040 => pub cfg1: ReadWrite<u32, CFG1::Register>),
        /// ADC Configuration Register 2
        (0x044 => pub cfg2: ReadWrite<u32, CFG2::Register>),
        /// ADC Data Result Registers
        (0x048 => pub r: [ReadOnly<u32, R::Register>; ADC_R_COUNT]),
        /// Compare Value Registers
        (0x088 => pub cv: [ReadWrite<u32, CV::Register>; ADC_CV_COUNT]),
        /// Status and Control Register 2
        (0x090 => pub sc2: ReadWrite<u32, SC2::Register>),
        /// Status and Control Register 3
        (0x094 => pub sc3: ReadWrite<u32, SC3::Register>),
        /// BASE Offset Register
        (0x098 => pub base_ofs: ReadWrite<u32, BASE_OFS::Register>),
        /// ADC Offset Correction Register
        (0x09c => pub ofs: ReadWrite<u32, OFS::Register>),
        /// USER Offset Correction Register
        (0x0a0 => pub usr_ofs: ReadWrite<u32, USR_OFS::Register>),
        /// ADC X Offset Correction Register
        (0x0a4 => pub xofs: ReadWrite<u32, XOFS::Register>),
        /// ADC Y Offset Correction Register
        (0x0a8 => pub yofs: ReadWrite<u32, YOFS::Register>),
        /// ADC Gain Register
        (0x0ac => pub g: ReadWrite<u32, G::Register>),
        /// ADC User Gain Register
        (0x0b0 => pub ug: ReadWrite<u32, UG::Register>),
        /// ADC General Calibration Value Register S
        (0x0b4 => pub clps: ReadWrite<u32, CLPS::Register>),
        /// ADC Plus-Side General Calibration Value Register 3
        (0x0b8 => pub clp3: ReadWrite<u32, CLP3::Register>),
        /// ADC Plus-Side General Calibration Value Register 2
        (0x0bc => pub clp2: ReadWrite<u32, CLP2::Register>),
        /// ADC Plus-Side General Calibration Value Register 1
        (0x0c0 => pub clp1: ReadWrite<u32, CLP1::Register>),
        /// ADC Plus-Side General Calibration Value Register 0
        (0x0c4 => pub clp0: ReadWrite<u32, CLP0::Register>),
        /// ADC Plus-Side General Calibration Value Register X
        (0x0c8 => pub clpx: ReadWrite<u32, CLPX::Register>),
        /// ADC Plus-Side General Calibration Value Register 9
        (0x0cc => pub clp9: ReadWrite<u32, CLP9::Register>),
        /// ADC General Calibration Offset Value Register S
        (0x0d0 => pub clps_ofs: ReadWrite<u32, CLPS_OFS::Register>),
        /// ADC Plus-Side General Calibration Offset Value Register 3
        (0x0d4 => pub clp3_ofs: ReadWrite<u32, CLP3_OFS::Register>),
        /// ADC Plus-Side General Calibration Offset Value Register 2
        (0x0d8 => pub clp2_ofs: ReadWrite<u32, CLP2_OFS::Register>),
        /// ADC Plus-Side General Calibration Offset Value Register 1
        (0x0dc => pub clp1_ofs: ReadWrite<u32, CLP1_OFS::Register>),
        /// ADC Plus-Side General Calibration Offset Value Register 0
        (0x0e0 => pub clp0_ofs: ReadWrite<u32, CLP0_OFS::Register>),
        /// ADC Plus-Side General Calibration Offset Value Register X
        (0x0e4 => pub clpx_ofs: ReadWrite<u32, CLPX_OFS::Register>),
        /// ADC Plus-Side General Calibration Offset Value Register 9
        (0x0e8 => pub clp9_ofs: ReadWrite<u32, CLP9_OFS::Register>),
        (0x0ec => @END),
    }
}

register_bitfields![u32,
    pub SC1 [
        /// Input channel select
        ADCH OFFSET(0) NUMBITS(6) [
            External0 = 0x00,
            InternalTemperature = 0x1a,
            InternalBandgap = 0x1b,
            VrefSh = 0x1d,
            VrefSl = 0x1e,
            Disabled = 0x3f,
        ],
        /// Interrupt Enable
        AIEN OFFSET(6) NUMBITS(1) [],
        /// Conversion Complete Flag
        COCO OFFSET(7) NUMBITS(1) [],
    ],
    pub CFG1 [
        /// Input Clock Select
        ADICLK OFFSET(0) NUMBITS(2) [
            Alt1 = 0,
            Alt2 = 1,
            Alt3 = 2,
            Alt4 = 3,
        ],
        /// Conversion mode selection
        MODE OFFSET(2) NUMBITS(2) [
            EightBit = 0,
            TwelveBit = 1,
            TenBit = 2,
        ],
        /// Clock Divide Select
        ADIV OFFSET(5) NUMBITS(2) [
            DivideBy1 = 0,
            DivideBy2 = 1,
            DivideBy4 = 2,
            DivideBy8 = 3,
        ],
        /// Clear Latch Trigger in Trigger Handler Block
        CLRLTRG OFFSET(8) NUMBITS(1) [],
    ],
    pub CFG2 [
        /// Sample Time Select
        SMPLTS OFFSET(0) NUMBITS(8) [],
    ],
    pub R [
        /// Data result
        D OFFSET(0) NUMBITS(12) [],
    ],
    pub CV [
        /// Compare Value
        CV OFFSET(0) NUMBITS(16) [],
    ],
    pub SC2 [
        /// Voltage Reference Selection
        REFSEL OFFSET(0) NUMBITS(2) [
            Vref = 0,
            Valt = 1,
        ],
        /// DMA Enable
        DMAEN OFFSET(2) NUMBITS(1) [],
        /// Compare Function Range Enable
        ACREN OFFSET(3) NUMBITS(1) [],
        /// Compare Function Greater Than Enable
        ACFGT OFFSET(4) NUMBITS(1) [],
        /// Compare Function Enable
        ACFE OFFSET(5) NUMBITS(1) [],
        /// Conversion Trigger Select
        ADTRG OFFSET(6) NUMBITS(1) [
            Software = 0,
            Hardware = 1,
        ],
        /// Conversion Active
        ADACT OFFSET(7) NUMBITS(1) [],
        /// Trigger Process Number
        TRGPRNUM OFFSET(13) NUMBITS(2) [],
        /// Trigger Status
        TRGSTLAT OFFSET(16) NUMBITS(4) [],
        /// Error in Multiplexed Trigger Request
        TRGSTERR OFFSET(24) NUMBITS(4) [],
    ],
    pub SC3 [
        /// Hardware Average Select
        AVGS OFFSET(0) NUMBITS(2) [
            Samples4 = 0,
            Samples8 = 1,
            Samples16 = 2,
            Samples32 = 3,
        ],
        /// Hardware Average Enable
        AVGE OFFSET(2) NUMBITS(1) [],
        /// Continuous Conversion Enable
        ADCO OFFSET(3) NUMBITS(1) [],
        /// Calibration
        CAL OFFSET(7) NUMBITS(1) [],
    ],
    pub BASE_OFS [
        /// Base Offset Error Correction Value
        BA_OFS OFFSET(0) NUMBITS(8) [],
    ],
    pub OFS [
        /// Offset Error Correction Value
        OFS OFFSET(0) NUMBITS(16) [],
    ],
    pub USR_OFS [
        /// USER Offset Error Correction Value
        USR_OFS OFFSET(0) NUMBITS(8) [],
    ],
    pub XOFS [
        /// X offset error correction value
        XOFS OFFSET(0) NUMBITS(6) [],
    ],
    pub YOFS [
        /// Y offset error correction value
        YOFS OFFSET(0) NUMBITS(8) [],
    ],
    pub G [
        /// Gain error adjustment factor for the overall conversion
        G OFFSET(0) NUMBITS(11) [],
    ],
    pub UG [
        /// User gain error correction value
        UG OFFSET(0) NUMBITS(10) [],
    ],
    pub CLPS [
        /// Calibration Value
        CLPS OFFSET(0) NUMBITS(7) [],
    ],
    pub CLP3 [
        /// Calibration Value
        CLP3 OFFSET(0) NUMBITS(10) [],
    ],
    pub CLP2 [
        /// Calibration Value
        CLP2 OFFSET(0) NUMBITS(10) [],
    ],
    pub CLP1 [
        /// Calibration Value
        CLP1 OFFSET(0) NUMBITS(9) [],
    ],
    pub CLP0 [
        /// Calibration Value
        CLP0 OFFSET(0) NUMBITS(8) [],
    ],
    pub CLPX [
        /// Calibration Value
        CLPX OFFSET(0) NUMBITS(7) [],
    ],
    pub CLP9 [
        /// Calibration Value
        CLP9 OFFSET(0) NUMBITS(7) [],
    ],
    pub CLPS_OFS [
        /// CLPS Offset
        CLPS_OFS OFFSET(0) NUMBITS(4) [],
    ],
    pub CLP3_OFS [
        /// CLP3 Offset
        CLP3_OFS OFFSET(0) NUMBITS(4) [],
    ],
    pub CLP2_OFS [
        /// CLP2 Offset
        CLP2_OFS OFFSET(0) NUMBITS(4) [],
    ],
    pub CLP1_OFS [
        /// CLP1 Offset
        CLP1_OFS OFFSET(0) NUMBITS(4) [],
    ],
    pub CLP0_OFS [
        /// CLP0 Offset
        CLP0_OFS OFFSET(0) NUMBITS(4) [],
    ],
    pub CLPX_OFS [
        /// CLPX Offset
        CLPX_OFS OFFSET(0) NUMBITS(12) [],
    ],
    pub CLP9_OFS [
        /// CLP9 Offset
        CLP9_OFS OFFSET(0) NUMBITS(12) [],
    ],
];

pub const ADC0_BASE_ADDR: usize = 0x4003_B000;
pub const ADC1_BASE_ADDR: usize = 0x4002_7000;
pub const ADC2_BASE_ADDR: usize = 0x4003_C000;

pub const ADC0_BASE: StaticRef<AdcRegisters> =
    unsafe { StaticRef::new(ADC0_BASE_ADDR as *const AdcRegisters) };
pub const ADC1_BASE: StaticRef<AdcRegisters> =
    unsafe { StaticRef::new(ADC1_BASE_ADDR as *const AdcRegisters) };
pub const ADC2_BASE: StaticRef<AdcRegisters> =
    unsafe { StaticRef::new(ADC2_BASE_ADDR as *const AdcRegisters) };

pub const ADC_BASE_ADDRS: [usize; 3] = [ADC0_BASE_ADDR, ADC1_BASE_ADDR, ADC2_BASE_ADDR];
pub const ADC_BASE_PTRS: [StaticRef<AdcRegisters>; 3] = [ADC0_BASE, ADC1_BASE, ADC2_BASE];
pub const ADC_IRQS: [u32; 3] = [nvic::ADC0, nvic::ADC1, nvic::ADC2];

instance_lookup!(ADC_BASE_ADDRS);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorCode;
    use core::mem::{offset_of, size_of};
    use tock_registers::LocalRegisterCopy;

    #[test]
    fn layout() {
        assert_eq!(offset_of!(AdcRegisters, cfg1), 0x40);
        assert_eq!(offset_of!(AdcRegisters, r), 0x48);
        assert_eq!(offset_of!(AdcRegisters, cv), 0x88);
        assert_eq!(offset_of!(AdcRegisters, clp9_ofs), 0xe8);
        assert_eq!(size_of::<AdcRegisters>(), 0xec);
    }

    #[test]
    fn channel_select() {
        assert_eq!(SC1::ADCH.mask, 0x3f);
        assert_eq!(SC1::ADCH.shift, 0);
        assert_eq!(SC1::ADCH.val(0x1a).value, 0x1a);
        // Oversize inputs are truncated to the field.
        assert_eq!(SC1::ADCH.val(0x7f).value, 0x3f);
        assert_eq!(SC1::COCO::SET.value, 0x80);

        let mut sc1 = LocalRegisterCopy::<u32, SC1::Register>::new(0);
        sc1.modify(SC1::ADCH::InternalTemperature + SC1::AIEN::SET);
        assert_eq!(sc1.get(), 0x5a);
        assert_eq!(sc1.read(SC1::ADCH), 0x1a);
    }

    #[test]
    fn config_fields() {
        assert_eq!(CFG1::MODE::TwelveBit.value, 0x4);
        assert_eq!(CFG1::ADIV::DivideBy8.value, 0x60);
        assert_eq!(SC2::TRGSTERR.mask << SC2::TRGSTERR.shift, 0x0f00_0000);
        assert_eq!(SC3::AVGS::Samples32.value | SC3::AVGE::SET.value, 0x7);
    }

    #[test]
    fn instances() {
        for (i, (addr, regs)) in ADC_BASE_ADDRS.iter().zip(ADC_BASE_PTRS.iter()).enumerate() {
            assert_eq!(regs.addr(), *addr);
            assert_eq!(instance(*addr), Ok(i));
        }
        assert_eq!(instance(0x4003_D000), Err(ErrorCode::NODEVICE));
        assert_eq!(ADC_IRQS, [39, 71, 72]);
    }
}
