// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Named constants for NVIC ids

#![allow(non_upper_case_globals)]

use core::fmt;

use crate::ErrorCode;

pub const DMA0: u32 = 0;
pub const DMA1: u32 = 1;
pub const DMA2: u32 = 2;
pub const DMA3: u32 = 3;
pub const DMA4: u32 = 4;
pub const DMA5: u32 = 5;
pub const DMA6: u32 = 6;
pub const DMA7: u32 = 7;
pub const DMA8: u32 = 8;
pub const DMA9: u32 = 9;
pub const DMA10: u32 = 10;
pub const DMA11: u32 = 11;
pub const DMA12: u32 = 12;
pub const DMA13: u32 = 13;
pub const DMA14: u32 = 14;
pub const DMA15: u32 = 15;
pub const DMA_Error: u32 = 16;
pub const MCM: u32 = 17;
pub const FTFE: u32 = 18;
pub const Read_Collision: u32 = 19;
pub const LVD_LVW: u32 = 20;
pub const Doublebit_Fault: u32 = 21;
pub const WDOG_EWM: u32 = 22;
// XX RESERVED XX = 23;
pub const LPI2C0: u32 = 24;
pub const LPI2C1: u32 = 25;
pub const LPSPI0: u32 = 26;
pub const LPSPI1: u32 = 27;
// XX RESERVED XX = 28;
pub const PWT: u32 = 29;
// XX RESERVED XX = 30;
pub const LPUART0_TX: u32 = 31;
pub const LPUART0_RX: u32 = 32;
pub const LPUART1_TX: u32 = 33;
pub const LPUART1_RX: u32 = 34;
pub const LPUART2_TX: u32 = 35;
pub const LPUART2_RX: u32 = 36;
// XX RESERVED XX = 37;
// XX RESERVED XX = 38;
pub const ADC0: u32 = 39;
pub const CMP0: u32 = 40;
pub const CMP1: u32 = 41;
pub const FTM0: u32 = 42;
pub const FTM1: u32 = 43;
pub const FTM2: u32 = 44;
// XX RESERVED XX = 45;
pub const RTC: u32 = 46;
pub const RTC_Seconds: u32 = 47;
pub const LPIT0_Ch0: u32 = 48;
pub const LPIT0_Ch1: u32 = 49;
pub const LPIT0_Ch2: u32 = 50;
pub const LPIT0_Ch3: u32 = 51;
pub const PDB0: u32 = 52;
// XX RESERVED XX = 53;
// XX RESERVED XX = 54;
// XX RESERVED XX = 55;
pub const DAC0: u32 = 56;
pub const SCG_RCM: u32 = 57;
pub const LPTMR0: u32 = 58;
pub const PORTA: u32 = 59;
pub const PORTB: u32 = 60;
pub const PORTC: u32 = 61;
pub const PORTD: u32 = 62;
pub const PORTE: u32 = 63;
pub const SWI: u32 = 64;
// XX RESERVED XX = 65;
// XX RESERVED XX = 66;
// XX RESERVED XX = 67;
pub const PDB2: u32 = 68;
pub const FTM3: u32 = 69;
pub const CMP2: u32 = 70;
pub const ADC1: u32 = 71;
pub const ADC2: u32 = 72;
// XX RESERVED XX = 73;
// XX RESERVED XX = 74;
pub const PDB1: u32 = 75;
pub const FLEXIO: u32 = 76;
// XX RESERVED XX = 77;
pub const CAN0_ORed: u32 = 78;
pub const CAN0_Error: u32 = 79;
pub const CAN0_Wake_Up: u32 = 80;
pub const CAN0_ORed_Message_buffer: u32 = 81;
// XX RESERVED XX = 82;
// XX RESERVED XX = 83;
// XX RESERVED XX = 84;
pub const CAN1_ORed: u32 = 85;
pub const CAN1_Error: u32 = 86;
// XX RESERVED XX = 87;
pub const CAN1_ORed_Message_buffer: u32 = 88;
// XX RESERVED XX = 89;
// XX RESERVED XX = 90;

/// Number of device interrupt lines wired to the NVIC.
pub const NUM_INTERRUPTS: u32 = 91;

/// Number of entries in the vector table, including the 16 core slots.
pub const NUMBER_OF_INT_VECTORS: usize = 16 + NUM_INTERRUPTS as usize;

#[rustfmt::skip]
static NAMES: [Option<&str>; NUM_INTERRUPTS as usize] = [
    /* 0 */  Some("DMA0"),
    /* 1 */  Some("DMA1"),
    /* 2 */  Some("DMA2"),
    /* 3 */  Some("DMA3"),
    /* 4 */  Some("DMA4"),
    /* 5 */  Some("DMA5"),
    /* 6 */  Some("DMA6"),
    /* 7 */  Some("DMA7"),
    /* 8 */  Some("DMA8"),
    /* 9 */  Some("DMA9"),
    /* 10 */ Some("DMA10"),
    /* 11 */ Some("DMA11"),
    /* 12 */ Some("DMA12"),
    /* 13 */ Some("DMA13"),
    /* 14 */ Some("DMA14"),
    /* 15 */ Some("DMA15"),
    /* 16 */ Some("DMA_Error"),
    /* 17 */ Some("MCM"),
    /* 18 */ Some("FTFE"),
    /* 19 */ Some("Read_Collision"),
    /* 20 */ Some("LVD_LVW"),
    /* 21 */ Some("Doublebit_Fault"),
    /* 22 */ Some("WDOG_EWM"),
    /* 23 */ None,
    /* 24 */ Some("LPI2C0"),
    /* 25 */ Some("LPI2C1"),
    /* 26 */ Some("LPSPI0"),
    /* 27 */ Some("LPSPI1"),
    /* 28 */ None,
    /* 29 */ Some("PWT"),
    /* 30 */ None,
    /* 31 */ Some("LPUART0_TX"),
    /* 32 */ Some("LPUART0_RX"),
    /* 33 */ Some("LPUART1_TX"),
    /* 34 */ Some("LPUART1_RX"),
    /* 35 */ Some("LPUART2_TX"),
    /* 36 */ Some("LPUART2_RX"),
    /* 37 */ None,
    /* 38 */ None,
    /* 39 */ Some("ADC0"),
    /* 40 */ Some("CMP0"),
    /* 41 */ Some("CMP1"),
    /* 42 */ Some("FTM0"),
    /* 43 */ Some("FTM1"),
    /* 44 */ Some("FTM2"),
    /* 45 */ None,
    /* 46 */ Some("RTC"),
    /* 47 */ Some("RTC_Seconds"),
    /* 48 */ Some("LPIT0_Ch0"),
    /* 49 */ Some("LPIT0_Ch1"),
    /* 50 */ Some("LPIT0_Ch2"),
    /* 51 */ Some("LPIT0_Ch3"),
    /* 52 */ Some("PDB0"),
    /* 53 */ None,
    /* 54 */ None,
    /* 55 */ None,
    /* 56 */ Some("DAC0"),
    /* 57 */ Some("SCG_RCM"),
    /* 58 */ Some("LPTMR0"),
    /* 59 */ Some("PORTA"),
    /* 60 */ Some("PORTB"),
    /* 61 */ Some("PORTC"),
    /* 62 */ Some("PORTD"),
    /* 63 */ Some("PORTE"),
    /* 64 */ Some("SWI"),
    /* 65 */ None,
    /* 66 */ None,
    /* 67 */ None,
    /* 68 */ Some("PDB2"),
    /* 69 */ Some("FTM3"),
    /* 70 */ Some("CMP2"),
    /* 71 */ Some("ADC1"),
    /* 72 */ Some("ADC2"),
    /* 73 */ None,
    /* 74 */ None,
    /* 75 */ Some("PDB1"),
    /* 76 */ Some("FLEXIO"),
    /* 77 */ None,
    /* 78 */ Some("CAN0_ORed"),
    /* 79 */ Some("CAN0_Error"),
    /* 80 */ Some("CAN0_Wake_Up"),
    /* 81 */ Some("CAN0_ORed_Message_buffer"),
    /* 82 */ None,
    /* 83 */ None,
    /* 84 */ None,
    /* 85 */ Some("CAN1_ORed"),
    /* 86 */ Some("CAN1_Error"),
    /* 87 */ None,
    /* 88 */ Some("CAN1_ORed_Message_buffer"),
    /* 89 */ None,
    /* 90 */ None,
];

/// CMSIS name of a device interrupt.
///
/// Returns `INVAL` for a reserved line and `SIZE` past the end of the table.
pub fn name(irq: u32) -> Result<&'static str, ErrorCode> {
    NAMES
        .get(irq as usize)
        .copied()
        .ok_or(ErrorCode::SIZE)?
        .ok_or(ErrorCode::INVAL)
}

/// Whether `irq` is a reserved (unconnected) line. Numbers past the table are
/// reserved too.
pub fn is_reserved(irq: u32) -> bool {
    name(irq).is_err()
}

/// Vector table slot of a device interrupt.
pub const fn vector(irq: u32) -> usize {
    16 + irq as usize
}

/// Cortex-M4 system exceptions. The discriminant is the CMSIS `IRQn` value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(i8)]
pub enum CoreException {
    NonMaskableInt = -14,
    HardFault = -13,
    MemoryManagement = -12,
    BusFault = -11,
    UsageFault = -10,
    SVCall = -5,
    DebugMonitor = -4,
    PendSV = -2,
    SysTick = -1,
}

impl CoreException {
    pub const ALL: [CoreException; 9] = [
        CoreException::NonMaskableInt,
        CoreException::HardFault,
        CoreException::MemoryManagement,
        CoreException::BusFault,
        CoreException::UsageFault,
        CoreException::SVCall,
        CoreException::DebugMonitor,
        CoreException::PendSV,
        CoreException::SysTick,
    ];

    /// CMSIS `IRQn` number.
    pub const fn number(self) -> i8 {
        self as i8
    }

    /// Vector table slot.
    pub const fn vector(self) -> usize {
        (16 + self as i8) as usize
    }
}

impl TryFrom<i8> for CoreException {
    type Error = ErrorCode;

    fn try_from(n: i8) -> Result<Self, Self::Error> {
        CoreException::ALL
            .iter()
            .copied()
            .find(|e| e.number() == n)
            .ok_or(ErrorCode::INVAL)
    }
}

impl fmt::Display for CoreException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} ({})", self, self.number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names() {
        assert_eq!(name(DMA0), Ok("DMA0"));
        assert_eq!(name(WDOG_EWM), Ok("WDOG_EWM"));
        assert_eq!(name(LPUART2_RX), Ok("LPUART2_RX"));
        assert_eq!(name(CAN1_ORed_Message_buffer), Ok("CAN1_ORed_Message_buffer"));
        assert_eq!(name(23), Err(ErrorCode::INVAL));
        assert_eq!(name(NUM_INTERRUPTS), Err(ErrorCode::SIZE));
    }

    #[test]
    fn reserved_lines() {
        let reserved: Vec<u32> = (0..NUM_INTERRUPTS).filter(|&i| is_reserved(i)).collect();
        assert_eq!(
            reserved,
            [23, 28, 30, 37, 38, 45, 53, 54, 55, 65, 66, 67, 73, 74, 77, 82, 83, 84, 87, 89, 90]
        );
        assert!(is_reserved(200));
    }

    #[test]
    fn names_are_unique() {
        let named: Vec<&str> = NAMES.iter().flatten().copied().collect();
        for (i, a) in named.iter().enumerate() {
            assert!(!named[i + 1..].contains(a), "{} listed twice", a);
        }
    }

    #[test]
    fn vectors() {
        assert_eq!(vector(DMA0), 16);
        assert_eq!(vector(PORTE), 79);
        assert_eq!(NUMBER_OF_INT_VECTORS, 107);
        assert_eq!(CoreException::SysTick.vector(), 15);
        assert_eq!(CoreException::NonMaskableInt.vector(), 2);
    }

    #[test]
    fn core_exceptions() {
        assert_eq!(CoreException::try_from(-11), Ok(CoreException::BusFault));
        assert_eq!(CoreException::try_from(-6), Err(ErrorCode::INVAL));
        assert_eq!(format!("{}", CoreException::PendSV), "PendSV (-2)");
    }
}
