// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Analog comparators (CMP0..CMP2) with the 8-bit DAC and round-robin
//! channel scanner.

use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

use crate::helpers::instance_lookup;
use crate::nvic;
use crate::static_ref::StaticRef;

register_structs! {
    pub CmpRegisters {
        /// CMP Control Register 0
        (0x0 => pub c0: ReadWrite<u32, C0::Register>),
        /// CMP Control Register 1
        (0x4 => pub c1: ReadWrite<u32, C1::Register>),
        /// CMP Control Register 2
        (0x8 => pub c2: ReadWrite<u32, C2::Register>),
        (0xc => @END),
    }
}

register_bitfields![u32,
    pub C0 [
        /// Comparator hard block hysteresis control
        HYSTCTR OFFSET(0) NUMBITS(2) [
            Level0 = 0,
            Level1 = 1,
            Level2 = 2,
            Level3 = 3,
        ],
        /// Comparator hard block offset control
        HYSTOFF OFFSET(2) NUMBITS(1) [],
        /// Filter Sample Count
        FILTER_CNT OFFSET(4) NUMBITS(3) [],
        /// Comparator Module Enable
        EN OFFSET(8) NUMBITS(1) [],
        /// Comparator Output Pin Enable
        OPE OFFSET(9) NUMBITS(1) [],
        /// Comparator Output Select
        COS OFFSET(10) NUMBITS(1) [],
        /// Comparator invert
        INVT OFFSET(11) NUMBITS(1) [],
        /// Power Mode Select
        PMODE OFFSET(12) NUMBITS(1) [
            LowSpeed = 0,
            HighSpeed = 1,
        ],
        /// Windowing Enable
        WE OFFSET(14) NUMBITS(1) [],
        /// Sample Enable
        SE OFFSET(15) NUMBITS(1) [],
        /// Filter Sample Period
        FPR OFFSET(16) NUMBITS(8) [],
        /// Analog Comparator Output
        COUT OFFSET(24) NUMBITS(1) [],
        /// Analog Comparator Flag Falling
        CFF OFFSET(25) NUMBITS(1) [],
        /// Analog Comparator Flag Rising
        CFR OFFSET(26) NUMBITS(1) [],
        /// Comparator Interrupt Enable Falling
        IEF OFFSET(27) NUMBITS(1) [],
        /// Comparator Interrupt Enable Rising
        IER OFFSET(28) NUMBITS(1) [],
        /// DMA Enable
        DMAEN OFFSET(30) NUMBITS(1) [],
    ],
    pub C1 [
        /// DAC Output Voltage Select
        VOSEL OFFSET(0) NUMBITS(8) [],
        /// Minus Input MUX Control
        MSEL OFFSET(8) NUMBITS(3) [],
        /// Plus Input MUX Control
        PSEL OFFSET(11) NUMBITS(3) [],
        /// Supply Voltage Reference Source Select
        VRSEL OFFSET(14) NUMBITS(1) [],
        /// DAC Enable
        DACEN OFFSET(15) NUMBITS(1) [],
        /// Channel 0 input enable
        CHN0 OFFSET(16) NUMBITS(1) [],
        /// Channel 1 input enable
        CHN1 OFFSET(17) NUMBITS(1) [],
        /// Channel 2 input enable
        CHN2 OFFSET(18) NUMBITS(1) [],
        /// Channel 3 input enable
        CHN3 OFFSET(19) NUMBITS(1) [],
        /// Channel 4 input enable
        CHN4 OFFSET(20) NUMBITS(1) [],
        /// Channel 5 input enable
        CHN5 OFFSET(21) NUMBITS(1) [],
        /// Channel 6 input enable
        CHN6 OFFSET(22) NUMBITS(1) [],
        /// Channel 7 input enable
        CHN7 OFFSET(23) NUMBITS(1) [],
        /// Selection of the input to the negative port of the comparator
        INNSEL OFFSET(24) NUMBITS(2) [],
        /// Selection of the input to the positive port of the comparator
        INPSEL OFFSET(27) NUMBITS(2) [],
    ],
    pub C2 [
        /// The result of the input comparison for channels 0..7
        ACO OFFSET(0) NUMBITS(8) [],
        /// Comparator and DAC initialization delay modulus
        INITMOD OFFSET(8) NUMBITS(6) [],
        /// Number of sample clocks
        NSAM OFFSET(14) NUMBITS(2) [],
        /// Channel 0 input changed flag
        CH0F OFFSET(16) NUMBITS(1) [],
        /// Channel 1 input changed flag
        CH1F OFFSET(17) NUMBITS(1) [],
        /// Channel 2 input changed flag
        CH2F OFFSET(18) NUMBITS(1) [],
        /// Channel 3 input changed flag
        CH3F OFFSET(19) NUMBITS(1) [],
        /// Channel 4 input changed flag
        CH4F OFFSET(20) NUMBITS(1) [],
        /// Channel 5 input changed flag
        CH5F OFFSET(21) NUMBITS(1) [],
        /// Channel 6 input changed flag
        CH6F OFFSET(22) NUMBITS(1) [],
        /// Channel 7 input changed flag
        CH7F OFFSET(23) NUMBITS(1) [],
        /// Fixed MUX Port
        FXMP OFFSET(29) NUMBITS(1) [
            PlusFixed = 0,
            MinusFixed = 1,
        ],
        /// Fixed channel selection
        FXMXCH OFFSET(25) NUMBITS(3) [],
        /// Round-Robin interrupt enable
        RRIE OFFSET(30) NUMBITS(1) [],
        /// Round-Robin Enable
        RRE OFFSET(31) NUMBITS(1) [],
    ],
];

pub const CMP0_BASE_ADDR: usize = 0x4007_3000;
pub const CMP1_BASE_ADDR: usize = 0x4007_4000;
pub const CMP2_BASE_ADDR: usize = 0x4007_5000;

pub const CMP0_BASE: StaticRef<CmpRegisters> =
    unsafe { StaticRef::new(CMP0_BASE_ADDR as *const CmpRegisters) };
pub const CMP1_BASE: StaticRef<CmpRegisters> =
    unsafe { StaticRef::new(CMP1_BASE_ADDR as *const CmpRegisters) };
pub const CMP2_BASE: StaticRef<CmpRegisters> =
    unsafe { StaticRef::new(CMP2_BASE_ADDR as *const CmpRegisters) };

pub const CMP_BASE_ADDRS: [usize; 3] = [CMP0_BASE_ADDR, CMP1_BASE_ADDR, CMP2_BASE_ADDR];
pub const CMP_BASE_PTRS: [StaticRef<CmpRegisters>; 3] = [CMP0_BASE, CMP1_BASE, CMP2_BASE];
pub const CMP_IRQS: [u32; 3] = [nvic::CMP0, nvic::CMP1, nvic::CMP2];

instance_lookup!(CMP_BASE_ADDRS);

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::size_of;
    use tock_registers::LocalRegisterCopy;

    #[test]
    fn layout() {
        assert_eq!(size_of::<CmpRegisters>(), 0xc);
    }

    #[test]
    fn dac_setup() {
        let mut c1 = LocalRegisterCopy::<u32, C1::Register>::new(0);
        c1.modify(C1::DACEN::SET + C1::VOSEL.val(0x7f) + C1::PSEL.val(7));
        assert_eq!(c1.get(), 0x0000_b87f);
        assert_eq!(C2::FXMXCH.mask << C2::FXMXCH.shift, 0x0e00_0000);
    }

    #[test]
    fn instances() {
        assert_eq!(instance(CMP2_BASE_ADDR), Ok(2));
        assert_eq!(CMP_IRQS, [40, 41, 70]);
    }
}
