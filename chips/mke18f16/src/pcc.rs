// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Peripheral clock controller.
//!
//! Each AIPS peripheral slot has one PCC register at the same index: a
//! peripheral at `0x4000_0000 + n * 0x1000` is gated by `pccn[n]`.
//! Registers for unpopulated slots read as zero with PR clear.

use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

use crate::helpers::instance_lookup;
use crate::static_ref::StaticRef;
use crate::ErrorCode;

pub const PCC_PCCN_COUNT: usize = 128;

register_structs! {
    pub PccRegisters {
        (0x000 => pub pccn: [ReadWrite<u32, PCCn::Register>; PCC_PCCN_COUNT]),
        (0x200 => @END),
    }
}

register_bitfields![u32,
    pub PCCn [
        /// Peripheral Clock Divider Select, divide by PCD + 1
        PCD OFFSET(0) NUMBITS(3) [],
        /// Peripheral Clock Divider Fraction
        FRAC OFFSET(3) NUMBITS(1) [],
        /// Peripheral Clock Source Select
        PCS OFFSET(24) NUMBITS(3) [
            ClockOff = 0,
            Soscdiv = 1,
            Sircdiv = 2,
            Fircdiv = 3,
            Splldiv = 6,
        ],
        /// Clock Gate Control
        CGC OFFSET(30) NUMBITS(1) [],
        /// Present
        PR OFFSET(31) NUMBITS(1) [],
    ],
];

pub const PCC_FTFE_INDEX: usize = 32;
pub const PCC_DMAMUX_INDEX: usize = 33;
pub const PCC_FLEXCAN0_INDEX: usize = 36;
pub const PCC_FLEXCAN1_INDEX: usize = 37;
pub const PCC_FTM3_INDEX: usize = 38;
pub const PCC_ADC1_INDEX: usize = 39;
pub const PCC_LPSPI0_INDEX: usize = 44;
pub const PCC_LPSPI1_INDEX: usize = 45;
pub const PCC_PDB1_INDEX: usize = 49;
pub const PCC_CRC_INDEX: usize = 50;
pub const PCC_PDB0_INDEX: usize = 54;
pub const PCC_LPIT0_INDEX: usize = 55;
pub const PCC_FTM0_INDEX: usize = 56;
pub const PCC_FTM1_INDEX: usize = 57;
pub const PCC_FTM2_INDEX: usize = 58;
pub const PCC_ADC0_INDEX: usize = 59;
pub const PCC_ADC2_INDEX: usize = 60;
pub const PCC_RTC_INDEX: usize = 61;
pub const PCC_DAC0_INDEX: usize = 63;
pub const PCC_LPTMR0_INDEX: usize = 64;
pub const PCC_PDB2_INDEX: usize = 71;
pub const PCC_PORTA_INDEX: usize = 73;
pub const PCC_PORTB_INDEX: usize = 74;
pub const PCC_PORTC_INDEX: usize = 75;
pub const PCC_PORTD_INDEX: usize = 76;
pub const PCC_PORTE_INDEX: usize = 77;
pub const PCC_PWT_INDEX: usize = 86;
pub const PCC_FLEXIO_INDEX: usize = 90;
pub const PCC_RTC_OSC_INDEX: usize = 96;
pub const PCC_EWM_INDEX: usize = 97;
pub const PCC_LPI2C0_INDEX: usize = 102;
pub const PCC_LPI2C1_INDEX: usize = 103;
pub const PCC_LPUART0_INDEX: usize = 106;
pub const PCC_LPUART1_INDEX: usize = 107;
pub const PCC_LPUART2_INDEX: usize = 108;
pub const PCC_CMP0_INDEX: usize = 115;
pub const PCC_CMP1_INDEX: usize = 116;
pub const PCC_CMP2_INDEX: usize = 117;

/// Every slot with a PCC register, in ascending order.
pub const PCC_POPULATED: [usize; 38] = [
    PCC_FTFE_INDEX,
    PCC_DMAMUX_INDEX,
    PCC_FLEXCAN0_INDEX,
    PCC_FLEXCAN1_INDEX,
    PCC_FTM3_INDEX,
    PCC_ADC1_INDEX,
    PCC_LPSPI0_INDEX,
    PCC_LPSPI1_INDEX,
    PCC_PDB1_INDEX,
    PCC_CRC_INDEX,
    PCC_PDB0_INDEX,
    PCC_LPIT0_INDEX,
    PCC_FTM0_INDEX,
    PCC_FTM1_INDEX,
    PCC_FTM2_INDEX,
    PCC_ADC0_INDEX,
    PCC_ADC2_INDEX,
    PCC_RTC_INDEX,
    PCC_DAC0_INDEX,
    PCC_LPTMR0_INDEX,
    PCC_PDB2_INDEX,
    PCC_PORTA_INDEX,
    PCC_PORTB_INDEX,
    PCC_PORTC_INDEX,
    PCC_PORTD_INDEX,
    PCC_PORTE_INDEX,
    PCC_PWT_INDEX,
    PCC_FLEXIO_INDEX,
    PCC_RTC_OSC_INDEX,
    PCC_EWM_INDEX,
    PCC_LPI2C0_INDEX,
    PCC_LPI2C1_INDEX,
    PCC_LPUART0_INDEX,
    PCC_LPUART1_INDEX,
    PCC_LPUART2_INDEX,
    PCC_CMP0_INDEX,
    PCC_CMP1_INDEX,
    PCC_CMP2_INDEX,
];

const AIPS_BASE: usize = 0x4000_0000;
const AIPS_SLOT_SIZE: usize = 0x1000;

/// PCC register index gating the peripheral whose block starts at `base`.
///
/// `INVAL` if `base` is not the start of an AIPS slot, `NODEVICE` if the slot
/// has no clock gate.
pub fn index_of(base: usize) -> Result<usize, ErrorCode> {
    let offset = base.checked_sub(AIPS_BASE).ok_or(ErrorCode::INVAL)?;
    if offset % AIPS_SLOT_SIZE != 0 || offset / AIPS_SLOT_SIZE >= PCC_PCCN_COUNT {
        return Err(ErrorCode::INVAL);
    }
    let slot = offset / AIPS_SLOT_SIZE;
    if PCC_POPULATED.contains(&slot) {
        Ok(slot)
    } else {
        Err(ErrorCode::NODEVICE)
    }
}

pub const PCC_BASE_ADDR: usize = 0x4006_5000;

pub const PCC_BASE: StaticRef<PccRegisters> =
    unsafe { StaticRef::new(PCC_BASE_ADDR as *const PccRegisters) };

pub const PCC_BASE_ADDRS: [usize; 1] = [PCC_BASE_ADDR];
pub const PCC_BASE_PTRS: [StaticRef<PccRegisters>; 1] = [PCC_BASE];

instance_lookup!(PCC_BASE_ADDRS);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{adc, can, cmp, ftm, lpi2c, lpspi, lpuart, pdb, port};
    use core::mem::size_of;

    #[test]
    fn layout() {
        assert_eq!(size_of::<PccRegisters>(), 0x200);
        assert!(PCC_POPULATED.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn slots_match_base_addresses() {
        assert_eq!(index_of(adc::ADC0_BASE_ADDR), Ok(PCC_ADC0_INDEX));
        assert_eq!(index_of(adc::ADC1_BASE_ADDR), Ok(PCC_ADC1_INDEX));
        assert_eq!(index_of(can::CAN1_BASE_ADDR), Ok(PCC_FLEXCAN1_INDEX));
        assert_eq!(index_of(ftm::FTM3_BASE_ADDR), Ok(PCC_FTM3_INDEX));
        assert_eq!(index_of(lpspi::LPSPI1_BASE_ADDR), Ok(PCC_LPSPI1_INDEX));
        assert_eq!(index_of(lpi2c::LPI2C0_BASE_ADDR), Ok(PCC_LPI2C0_INDEX));
        assert_eq!(index_of(lpuart::LPUART2_BASE_ADDR), Ok(PCC_LPUART2_INDEX));
        assert_eq!(index_of(cmp::CMP2_BASE_ADDR), Ok(PCC_CMP2_INDEX));
        assert_eq!(index_of(pdb::PDB2_BASE_ADDR), Ok(PCC_PDB2_INDEX));
        assert_eq!(index_of(port::PORTE_BASE_ADDR), Ok(PCC_PORTE_INDEX));
    }

    #[test]
    fn rejects_unclocked() {
        // The PCC itself and the SCG have no gate.
        assert_eq!(index_of(PCC_BASE_ADDR), Err(ErrorCode::NODEVICE));
        assert_eq!(index_of(0x4006_4000), Err(ErrorCode::NODEVICE));
        assert_eq!(index_of(0x4006_A004), Err(ErrorCode::INVAL));
        assert_eq!(index_of(0x2000_0000), Err(ErrorCode::INVAL));
        assert_eq!(index_of(0x400F_F000), Err(ErrorCode::INVAL));
    }

    #[test]
    fn clock_source() {
        let value = (PCCn::CGC::SET + PCCn::PCS::Fircdiv).value;
        assert_eq!(value, 0x4300_0000);
    }
}
