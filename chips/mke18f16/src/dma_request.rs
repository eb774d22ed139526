// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! DMAMUX request slot assignments.
//!
//! The value of each variant is what goes into `CHCFG::SOURCE`. Slots 1,
//! 8, 9, 43 and 61 are unassigned on this part.

use tock_registers::fields::FieldValue;

use crate::dmamux::CHCFG;
use crate::helpers::u8_enum;

u8_enum! {
    pub enum DmaRequestSource {
        /// Channel disabled.
        Disable = 0,
        Lpuart0Rx = 2,
        Lpuart0Tx = 3,
        Lpuart1Rx = 4,
        Lpuart1Tx = 5,
        Lpuart2Rx = 6,
        Lpuart2Tx = 7,
        FlexioChannel0 = 10,
        FlexioChannel1 = 11,
        FlexioChannel2 = 12,
        FlexioChannel3 = 13,
        Lpspi0Rx = 14,
        Lpspi0Tx = 15,
        Lpspi1Rx = 16,
        Lpspi1Tx = 17,
        Lpi2c1Rx = 18,
        Lpi2c1Tx = 19,
        Ftm1Channel0 = 20,
        Ftm1Channel1 = 21,
        Ftm2Channel0 = 22,
        Ftm2Channel1 = 23,
        Ftm3Channel0 = 24,
        Ftm3Channel1 = 25,
        Ftm3Channel2 = 26,
        Ftm3Channel3 = 27,
        Ftm3Channel4 = 28,
        Ftm3Channel5 = 29,
        Ftm3Channel6 = 30,
        Ftm3Channel7 = 31,
        Ftm0Channel0 = 32,
        Ftm0Channel1 = 33,
        Ftm0Channel2 = 34,
        Ftm0Channel3 = 35,
        Ftm0Channel4 = 36,
        Ftm0Channel5 = 37,
        Ftm0Channel6 = 38,
        Ftm0Channel7 = 39,
        Adc0 = 40,
        Adc1 = 41,
        Adc2 = 42,
        Lpi2c0Rx = 44,
        Lpi2c0Tx = 45,
        Pdb0 = 46,
        Pdb1 = 47,
        Pdb2 = 48,
        Cmp0 = 49,
        Cmp1 = 50,
        Cmp2 = 51,
        PortA = 52,
        PortB = 53,
        PortC = 54,
        PortD = 55,
        PortE = 56,
        Dac0 = 57,
        Can0 = 58,
        Can1 = 59,
        Lptmr0 = 60,
        /// Always-enabled slots for memory-to-memory or software-paced
        /// transfers.
        AlwaysOn62 = 62,
        AlwaysOn63 = 63,
    }
}

impl DmaRequestSource {
    /// CHCFG field value routing this source to a channel.
    pub fn chcfg_source(self) -> FieldValue<u8, CHCFG::Register> {
        CHCFG::SOURCE.val(self as u8)
    }

    pub fn is_always_on(self) -> bool {
        matches!(
            self,
            DmaRequestSource::AlwaysOn62 | DmaRequestSource::AlwaysOn63
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorCode;

    #[test]
    fn slots() {
        assert_eq!(DmaRequestSource::Lpuart0Rx as u8, 2);
        assert_eq!(DmaRequestSource::Lpi2c0Tx as u8, 45);
        assert_eq!(DmaRequestSource::Lptmr0 as u8, 60);
        assert_eq!(DmaRequestSource::ALL.len(), 59);
        assert!(DmaRequestSource::ALL
            .windows(2)
            .all(|w| (w[0] as u8) < (w[1] as u8)));
    }

    #[test]
    fn from_raw() {
        for &source in DmaRequestSource::ALL {
            assert_eq!(DmaRequestSource::try_from(source as u8), Ok(source));
        }
        for unassigned in [1u8, 8, 9, 43, 61, 64, 0xff] {
            assert_eq!(
                DmaRequestSource::try_from(unassigned),
                Err(ErrorCode::INVAL)
            );
        }
    }

    #[test]
    fn fits_source_field() {
        let value = (DmaRequestSource::AlwaysOn63.chcfg_source() + CHCFG::ENBL::SET).value;
        assert_eq!(value, 0xbf);
        assert!(DmaRequestSource::AlwaysOn62.is_always_on());
        assert!(!DmaRequestSource::Disable.is_always_on());
    }
}
