// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Trigger multiplexer.
//!
//! One TRGCFG register per trigger target ([`TrgmuxDevice`]), each with up
//! to four 6-bit selectors choosing a [`TrgmuxSource`]. Setting LK makes
//! the register read-only until the next reset.

use tock_registers::fields::Field;
use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

use crate::helpers::{instance_lookup, u8_enum};
use crate::static_ref::StaticRef;

pub const TRGMUX_TRGCFG_COUNT: usize = 27;
pub const TRGMUX_INPUTS_PER_DEVICE: usize = 4;

register_structs! {
    pub TrgmuxRegisters {
        /// TRGMUX Configuration register, indexed by TrgmuxDevice
        (0x00 => pub trgcfg: [ReadWrite<u32, TRGCFG::Register>; TRGMUX_TRGCFG_COUNT]),
        (0x6c => @END),
    }
}

register_bitfields![u32,
    pub TRGCFG [
        /// Trigger MUX Input 0 Source Select
        SEL0 OFFSET(0) NUMBITS(6) [],
        /// Trigger MUX Input 1 Source Select
        SEL1 OFFSET(8) NUMBITS(6) [],
        /// Trigger MUX Input 2 Source Select
        SEL2 OFFSET(16) NUMBITS(6) [],
        /// Trigger MUX Input 3 Source Select
        SEL3 OFFSET(24) NUMBITS(6) [],
        /// TRGMUX register lock
        LK OFFSET(31) NUMBITS(1) [],
    ],
];

u8_enum! {
    /// Trigger targets, in TRGCFG register order.
    pub enum TrgmuxDevice {
        Dmamux0 = 0,
        Extout0 = 1,
        Extout1 = 2,
        Adc0 = 3,
        Adc1 = 4,
        Adc2 = 5,
        Dac0 = 6,
        Cmp0 = 7,
        Cmp1 = 8,
        Cmp2 = 9,
        Ftm0 = 10,
        Ftm1 = 11,
        Ftm2 = 12,
        Ftm3 = 13,
        Pdb0 = 14,
        Pdb1 = 15,
        Pdb2 = 16,
        Flexio = 17,
        Lpit0 = 18,
        Lpuart0 = 19,
        Lpuart1 = 20,
        Lpuart2 = 21,
        Lpi2c0 = 22,
        Lpi2c1 = 23,
        Lpspi0 = 24,
        Lpspi1 = 25,
        Lptmr0 = 26,
    }
}

u8_enum! {
    /// Values for the TRGCFG SELn fields.
    pub enum TrgmuxSource {
        Disable = 0,
        Vdd = 1,
        TrgmuxIn0 = 2,
        TrgmuxIn1 = 3,
        TrgmuxIn2 = 4,
        TrgmuxIn3 = 5,
        TrgmuxIn4 = 6,
        TrgmuxIn5 = 7,
        TrgmuxIn6 = 8,
        TrgmuxIn7 = 9,
        TrgmuxIn8 = 10,
        TrgmuxIn9 = 11,
        TrgmuxIn10 = 12,
        TrgmuxIn11 = 13,
        Cmp0Output = 14,
        Cmp1Output = 15,
        Cmp2Output = 16,
        Lpit0Channel0 = 17,
        Lpit0Channel1 = 18,
        Lpit0Channel2 = 19,
        Lpit0Channel3 = 20,
        Lptmr0Trigger = 21,
        Ftm0InitTrigger = 22,
        Ftm0ExtTrigger = 23,
        Ftm1InitTrigger = 24,
        Ftm1ExtTrigger = 25,
        Ftm2InitTrigger = 26,
        Ftm2ExtTrigger = 27,
        Ftm3InitTrigger = 28,
        Ftm3ExtTrigger = 29,
        Adc0ConversionACompleted = 30,
        Adc0ConversionBCompleted = 31,
        Adc1ConversionACompleted = 32,
        Adc1ConversionBCompleted = 33,
        Pdb0Channel0Trigger = 34,
        Pdb0PulseOut = 35,
        Pdb1Channel0Trigger = 36,
        Pdb1PulseOut = 37,
        Pdb2Channel0Trigger = 38,
        Pdb2PulseOut = 39,
        Adc2ConversionACompleted = 40,
        Adc2ConversionBCompleted = 41,
        RtcAlarm = 42,
        RtcSeconds = 43,
        FlexioTrigger0 = 44,
        FlexioTrigger1 = 45,
        FlexioTrigger2 = 46,
        FlexioTrigger3 = 47,
        Lpuart0RxData = 48,
        Lpuart0TxData = 49,
        Lpuart0RxIdle = 50,
        Lpuart1RxData = 51,
        Lpuart1TxData = 52,
        Lpuart1RxIdle = 53,
        Lpi2c0MasterTrigger = 54,
        Lpi2c0SlaveTrigger = 55,
        Lpspi0Frame = 56,
        Lpspi0RxData = 57,
        Lpspi1Frame = 58,
        Lpspi1RxData = 59,
        SimSoftwareTrigger = 60,
        Lpi2c1MasterTrigger = 61,
        Lpi2c1SlaveTrigger = 62,
    }
}

/// SELn field for trigger input `input` of a TRGCFG register.
pub fn select_field(input: usize) -> Option<Field<u32, TRGCFG::Register>> {
    match input {
        0 => Some(TRGCFG::SEL0),
        1 => Some(TRGCFG::SEL1),
        2 => Some(TRGCFG::SEL2),
        3 => Some(TRGCFG::SEL3),
        _ => None,
    }
}

impl TrgmuxRegisters {
    /// TRGCFG register of `device`.
    pub fn device(&self, device: TrgmuxDevice) -> &ReadWrite<u32, TRGCFG::Register> {
        &self.trgcfg[device as usize]
    }
}

pub const TRGMUX_BASE_ADDR: usize = 0x4006_3000;

pub const TRGMUX_BASE: StaticRef<TrgmuxRegisters> =
    unsafe { StaticRef::new(TRGMUX_BASE_ADDR as *const TrgmuxRegisters) };

pub const TRGMUX_BASE_ADDRS: [usize; 1] = [TRGMUX_BASE_ADDR];
pub const TRGMUX_BASE_PTRS: [StaticRef<TrgmuxRegisters>; 1] = [TRGMUX_BASE];

instance_lookup!(TRGMUX_BASE_ADDRS);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorCode;
    use core::mem::size_of;
    use tock_registers::interfaces::{ReadWriteable, Readable};

    #[test]
    fn layout() {
        assert_eq!(size_of::<TrgmuxRegisters>(), TRGMUX_TRGCFG_COUNT * 4);
        assert_eq!(TrgmuxDevice::ALL.len(), TRGMUX_TRGCFG_COUNT);
    }

    #[test]
    fn dense_tables() {
        for (i, device) in TrgmuxDevice::ALL.iter().enumerate() {
            assert_eq!(*device as usize, i);
        }
        for (i, source) in TrgmuxSource::ALL.iter().enumerate() {
            assert_eq!(*source as usize, i);
        }
        assert_eq!(TrgmuxDevice::try_from(27), Err(ErrorCode::INVAL));
        assert_eq!(TrgmuxSource::try_from(63), Err(ErrorCode::INVAL));
        assert_eq!(TrgmuxSource::try_from(21), Ok(TrgmuxSource::Lptmr0Trigger));
    }

    #[test]
    fn route_lpit_to_adc() {
        let mut backing = [0u32; TRGMUX_TRGCFG_COUNT];
        let regs = unsafe { &*(backing.as_mut_ptr() as *const TrgmuxRegisters) };
        let sel1 = select_field(1).unwrap();
        regs.device(TrgmuxDevice::Adc1)
            .modify(sel1.val(TrgmuxSource::Lpit0Channel2 as u32));
        assert_eq!(regs.trgcfg[4].get(), 19 << 8);
        assert_eq!(regs.device(TrgmuxDevice::Adc1).read(TRGCFG::SEL1), 19);
        assert!(select_field(4).is_none());
        assert_eq!(backing[TrgmuxDevice::Adc1 as usize], 0x1300);
    }
}
