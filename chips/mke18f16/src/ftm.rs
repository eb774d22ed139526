// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! FlexTimer modules (FTM0..FTM3), eight channels each.
//!
//! Channels are grouped in pairs (0/1, 2/3, 4/5, 6/7) for combine,
//! complementary and dead-time control. The pair fields of COMBINE are
//! eight bits apart; see [`combine_pair_shift`].

use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

use crate::helpers::instance_lookup;
use crate::nvic;
use crate::static_ref::StaticRef;

pub const FTM_CHANNEL_COUNT: usize = 8;
pub const FTM_PAIR_COUNT: usize = FTM_CHANNEL_COUNT / 2;

register_structs! {
    /// Channel status/control and value.
    pub FtmChannel {
        (0x0 => pub csc: ReadWrite<u32, CnSC::Register>),
        (0x4 => pub cv: ReadWrite<u32, COUNT::Register>),
        (0x8 => @END),
    }
}

register_structs! {
    pub FtmRegisters {
        /// Status And Control
        (0x00 => pub sc: ReadWrite<u32, SC::Register>),
        /// Counter
        (0x04 => pub cnt: ReadWrite<u32, COUNT::Register>),
        /// Modulo
        (0x08 => pub modulo: ReadWrite<u32, COUNT::Register>),
        (0x0c => pub controls: [FtmChannel; FTM_CHANNEL_COUNT]),
        /// Counter Initial Value
        (0x4c => pub cntin: ReadWrite<u32, COUNT::Register>),
        /// Capture And Compare Status
        (0x50 => pub status: ReadWrite<u32, STATUS::Register>),
        /// Features Mode Selection
        (0x54 => pub mode: ReadWrite<u32, MODE::Register>),
        /// Synchronization
        (0x58 => pub sync: ReadWrite<u32, SYNC::Register>),
        /// Initial State For Channels Output
        (0x5c => pub outinit: ReadWrite<u32, CHANNEL_MASK::Register>),
        /// Output Mask
        (0x60 => pub outmask: ReadWrite<u32, CHANNEL_MASK::Register>),
        /// Function For Linked Channels
        (0x64 => pub combine: ReadWrite<u32, COMBINE::Register>),
        /// Deadtime Configuration
        (0x68 => pub deadtime: ReadWrite<u32, DEADTIME::Register>),
        /// FTM External Trigger
        (0x6c => pub exttrig: ReadWrite<u32, EXTTRIG::Register>),
        /// Channels Polarity
        (0x70 => pub pol: ReadWrite<u32, CHANNEL_MASK::Register>),
        /// Fault Mode Status
        (0x74 => pub fms: ReadWrite<u32, FMS::Register>),
        /// Input Capture Filter Control
        (0x78 => pub filter: ReadWrite<u32, FILTER::Register>),
        /// Fault Control
        (0x7c => pub fltctrl: ReadWrite<u32, FLTCTRL::Register>),
        /// Quadrature Decoder Control And Status
        (0x80 => pub qdctrl: ReadWrite<u32, QDCTRL::Register>),
        /// Configuration
        (0x84 => pub conf: ReadWrite<u32, CONF::Register>),
        /// FTM Fault Input Polarity
        (0x88 => pub fltpol: ReadWrite<u32, FLTPOL::Register>),
        /// Synchronization Configuration
        (0x8c => pub synconf: ReadWrite<u32, SYNCONF::Register>),
        /// FTM Inverting Control
        (0x90 => pub invctrl: ReadWrite<u32, INVCTRL::Register>),
        /// FTM Software Output Control
        (0x94 => pub swoctrl: ReadWrite<u32, SWOCTRL::Register>),
        /// FTM PWM Load
        (0x98 => pub pwmload: ReadWrite<u32, PWMLOAD::Register>),
        /// Half Cycle Register
        (0x9c => pub hcr: ReadWrite<u32, HCR::Register>),
        /// Pair 0 Deadtime Configuration
        (0xa0 => pub pair0deadtime: ReadWrite<u32, DEADTIME::Register>),
        (0xa4 => _reserved0),
        /// Pair 1 Deadtime Configuration
        (0xa8 => pub pair1deadtime: ReadWrite<u32, DEADTIME::Register>),
        (0xac => _reserved1),
        /// Pair 2 Deadtime Configuration
        (0xb0 => pub pair2deadtime: ReadWrite<u32, DEADTIME::Register>),
        (0xb4 => _reserved2),
        /// Pair 3 Deadtime Configuration
        (0xb8 => pub pair3deadtime: ReadWrite<u32, DEADTIME::Register>),
        (0xbc => @END),
    }
}

impl FtmRegisters {
    /// Per-pair deadtime register for `pair` (0..3).
    pub fn pair_deadtime(&self, pair: usize) -> Option<&ReadWrite<u32, DEADTIME::Register>> {
        match pair {
            0 => Some(&self.pair0deadtime),
            1 => Some(&self.pair1deadtime),
            2 => Some(&self.pair2deadtime),
            3 => Some(&self.pair3deadtime),
            _ => None,
        }
    }
}

/// Shift of channel pair `pair`'s byte within COMBINE.
pub const fn combine_pair_shift(pair: usize) -> usize {
    8 * pair
}

register_bitfields![u32,
    pub COUNT [
        COUNT OFFSET(0) NUMBITS(16) [],
    ],
    pub SC [
        /// Prescale Factor Selection
        PS OFFSET(0) NUMBITS(3) [
            Div1 = 0,
            Div2 = 1,
            Div4 = 2,
            Div8 = 3,
            Div16 = 4,
            Div32 = 5,
            Div64 = 6,
            Div128 = 7,
        ],
        /// Clock Source Selection
        CLKS OFFSET(3) NUMBITS(2) [
            NoClock = 0,
            FtmInputClock = 1,
            FixedFrequency = 2,
            External = 3,
        ],
        /// Center-Aligned PWM Select
        CPWMS OFFSET(5) NUMBITS(1) [],
        /// Reload Point Interrupt Enable
        RIE OFFSET(6) NUMBITS(1) [],
        /// Reload Flag
        RF OFFSET(7) NUMBITS(1) [],
        /// Timer Overflow Interrupt Enable
        TOIE OFFSET(8) NUMBITS(1) [],
        /// Timer Overflow Flag
        TOF OFFSET(9) NUMBITS(1) [],
        /// Channel n PWM enable bits
        PWMEN OFFSET(16) NUMBITS(8) [],
        /// Filter Prescaler
        FLTPS OFFSET(24) NUMBITS(4) [],
    ],
    pub CnSC [
        /// DMA Enable
        DMA OFFSET(0) NUMBITS(1) [],
        /// FTM counter reset by the selected input capture event
        ICRST OFFSET(1) NUMBITS(1) [],
        /// Channel (n) Edge or Level Select
        ELSA OFFSET(2) NUMBITS(1) [],
        ELSB OFFSET(3) NUMBITS(1) [],
        /// Channel (n) Mode Select
        MSA OFFSET(4) NUMBITS(1) [],
        MSB OFFSET(5) NUMBITS(1) [],
        /// Channel (n) Interrupt Enable
        CHIE OFFSET(6) NUMBITS(1) [],
        /// Channel (n) Flag
        CHF OFFSET(7) NUMBITS(1) [],
        /// Trigger mode control
        TRIGMODE OFFSET(8) NUMBITS(1) [],
        /// Channel (n) Input State
        CHIS OFFSET(9) NUMBITS(1) [],
        /// Channel (n) Output Value
        CHOV OFFSET(10) NUMBITS(1) [],
    ],
    pub STATUS [
        /// Channel n flags
        CHF OFFSET(0) NUMBITS(8) [],
    ],
    pub MODE [
        /// FTM Enable
        FTMEN OFFSET(0) NUMBITS(1) [],
        /// Initialize The Channels Output
        INIT OFFSET(1) NUMBITS(1) [],
        /// Write Protection Disable
        WPDIS OFFSET(2) NUMBITS(1) [],
        /// PWM Synchronization Mode
        PWMSYNC OFFSET(3) NUMBITS(1) [],
        /// Capture Test Mode Enable
        CAPTEST OFFSET(4) NUMBITS(1) [],
        /// Fault Control Mode
        FAULTM OFFSET(5) NUMBITS(2) [
            Disabled = 0,
            EvenChannelsManual = 1,
            AllChannelsManual = 2,
            AllChannelsAutomatic = 3,
        ],
        /// Fault Interrupt Enable
        FAULTIE OFFSET(7) NUMBITS(1) [],
    ],
    pub SYNC [
        /// Minimum Loading Point Enable
        CNTMIN OFFSET(0) NUMBITS(1) [],
        /// Maximum Loading Point Enable
        CNTMAX OFFSET(1) NUMBITS(1) [],
        /// FTM Counter Reinitialization by Synchronization
        REINIT OFFSET(2) NUMBITS(1) [],
        /// Output Mask Synchronization
        SYNCHOM OFFSET(3) NUMBITS(1) [],
        /// PWM Synchronization Hardware Trigger 0
        TRIG0 OFFSET(4) NUMBITS(1) [],
        /// PWM Synchronization Hardware Trigger 1
        TRIG1 OFFSET(5) NUMBITS(1) [],
        /// PWM Synchronization Hardware Trigger 2
        TRIG2 OFFSET(6) NUMBITS(1) [],
        /// PWM Synchronization Software Trigger
        SWSYNC OFFSET(7) NUMBITS(1) [],
    ],
    /// OUTINIT, OUTMASK and POL: one bit per channel.
    pub CHANNEL_MASK [
        CH OFFSET(0) NUMBITS(8) [],
    ],
    pub COMBINE [
        COMBINE0 OFFSET(0) NUMBITS(1) [],
        COMP0 OFFSET(1) NUMBITS(1) [],
        DECAPEN0 OFFSET(2) NUMBITS(1) [],
        DECAP0 OFFSET(3) NUMBITS(1) [],
        DTEN0 OFFSET(4) NUMBITS(1) [],
        SYNCEN0 OFFSET(5) NUMBITS(1) [],
        FAULTEN0 OFFSET(6) NUMBITS(1) [],
        MCOMBINE0 OFFSET(7) NUMBITS(1) [],
        COMBINE1 OFFSET(8) NUMBITS(1) [],
        COMP1 OFFSET(9) NUMBITS(1) [],
        DECAPEN1 OFFSET(10) NUMBITS(1) [],
        DECAP1 OFFSET(11) NUMBITS(1) [],
        DTEN1 OFFSET(12) NUMBITS(1) [],
        SYNCEN1 OFFSET(13) NUMBITS(1) [],
        FAULTEN1 OFFSET(14) NUMBITS(1) [],
        MCOMBINE1 OFFSET(15) NUMBITS(1) [],
        COMBINE2 OFFSET(16) NUMBITS(1) [],
        COMP2 OFFSET(17) NUMBITS(1) [],
        DECAPEN2 OFFSET(18) NUMBITS(1) [],
        DECAP2 OFFSET(19) NUMBITS(1) [],
        DTEN2 OFFSET(20) NUMBITS(1) [],
        SYNCEN2 OFFSET(21) NUMBITS(1) [],
        FAULTEN2 OFFSET(22) NUMBITS(1) [],
        MCOMBINE2 OFFSET(23) NUMBITS(1) [],
        COMBINE3 OFFSET(24) NUMBITS(1) [],
        COMP3 OFFSET(25) NUMBITS(1) [],
        DECAPEN3 OFFSET(26) NUMBITS(1) [],
        DECAP3 OFFSET(27) NUMBITS(1) [],
        DTEN3 OFFSET(28) NUMBITS(1) [],
        SYNCEN3 OFFSET(29) NUMBITS(1) [],
        FAULTEN3 OFFSET(30) NUMBITS(1) [],
        MCOMBINE3 OFFSET(31) NUMBITS(1) [],
    ],
    /// DEADTIME and PAIRnDEADTIME
    pub DEADTIME [
        /// Deadtime Value
        DTVAL OFFSET(0) NUMBITS(6) [],
        /// Deadtime Prescaler Value
        DTPS OFFSET(6) NUMBITS(2) [
            Div1 = 0,
            Div4 = 2,
            Div16 = 3,
        ],
        /// Extended Deadtime Value
        DTVALEX OFFSET(16) NUMBITS(4) [],
    ],
    pub EXTTRIG [
        CH2TRIG OFFSET(0) NUMBITS(1) [],
        CH3TRIG OFFSET(1) NUMBITS(1) [],
        CH4TRIG OFFSET(2) NUMBITS(1) [],
        CH5TRIG OFFSET(3) NUMBITS(1) [],
        CH0TRIG OFFSET(4) NUMBITS(1) [],
        CH1TRIG OFFSET(5) NUMBITS(1) [],
        /// Initialization Trigger Enable
        INITTRIGEN OFFSET(6) NUMBITS(1) [],
        /// Channel Trigger Flag
        TRIGF OFFSET(7) NUMBITS(1) [],
        CH6TRIG OFFSET(8) NUMBITS(1) [],
        CH7TRIG OFFSET(9) NUMBITS(1) [],
    ],
    pub FMS [
        /// Fault Detection Flag n
        FAULTFN OFFSET(0) NUMBITS(4) [],
        /// Fault Inputs
        FAULTIN OFFSET(5) NUMBITS(1) [],
        /// Write Protection Enable
        WPEN OFFSET(6) NUMBITS(1) [],
        /// Fault Detection Flag
        FAULTF OFFSET(7) NUMBITS(1) [],
    ],
    pub FILTER [
        CH0FVAL OFFSET(0) NUMBITS(4) [],
        CH1FVAL OFFSET(4) NUMBITS(4) [],
        CH2FVAL OFFSET(8) NUMBITS(4) [],
        CH3FVAL OFFSET(12) NUMBITS(4) [],
    ],
    pub FLTCTRL [
        /// Fault Input n Enable
        FAULTEN OFFSET(0) NUMBITS(4) [],
        /// Fault Input n Filter Enable
        FFLTREN OFFSET(4) NUMBITS(4) [],
        /// Fault Input Filter
        FFVAL OFFSET(8) NUMBITS(4) [],
        /// Fault output state
        FSTATE OFFSET(15) NUMBITS(1) [],
    ],
    pub QDCTRL [
        /// Quadrature Decoder Mode Enable
        QUADEN OFFSET(0) NUMBITS(1) [],
        /// Timer Overflow Direction In Quadrature Decoder Mode
        TOFDIR OFFSET(1) NUMBITS(1) [],
        /// FTM Counter Direction In Quadrature Decoder Mode
        QUADIR OFFSET(2) NUMBITS(1) [],
        /// Quadrature Decoder Mode
        QUADMODE OFFSET(3) NUMBITS(1) [
            PhaseAPhaseB = 0,
            CountAndDirection = 1,
        ],
        PHBPOL OFFSET(4) NUMBITS(1) [],
        PHAPOL OFFSET(5) NUMBITS(1) [],
        PHBFLTREN OFFSET(6) NUMBITS(1) [],
        PHAFLTREN OFFSET(7) NUMBITS(1) [],
    ],
    pub CONF [
        /// Frequency of the Reload Opportunities
        LDFQ OFFSET(0) NUMBITS(5) [],
        /// Debug Mode
        BDMMODE OFFSET(6) NUMBITS(2) [],
        /// Global Time Base Enable
        GTBEEN OFFSET(9) NUMBITS(1) [],
        /// Global Time Base Output
        GTBEOUT OFFSET(10) NUMBITS(1) [],
        /// Initialization trigger on Reload Point
        ITRIGR OFFSET(11) NUMBITS(1) [],
    ],
    pub FLTPOL [
        FLTPOL OFFSET(0) NUMBITS(4) [],
    ],
    pub SYNCONF [
        HWTRIGMODE OFFSET(0) NUMBITS(1) [],
        CNTINC OFFSET(2) NUMBITS(1) [],
        INVC OFFSET(4) NUMBITS(1) [],
        SWOC OFFSET(5) NUMBITS(1) [],
        /// Synchronization Mode
        SYNCMODE OFFSET(7) NUMBITS(1) [
            Legacy = 0,
            Enhanced = 1,
        ],
        SWRSTCNT OFFSET(8) NUMBITS(1) [],
        SWWRBUF OFFSET(9) NUMBITS(1) [],
        SWOM OFFSET(10) NUMBITS(1) [],
        SWINVC OFFSET(11) NUMBITS(1) [],
        SWSOC OFFSET(12) NUMBITS(1) [],
        HWRSTCNT OFFSET(16) NUMBITS(1) [],
        HWWRBUF OFFSET(17) NUMBITS(1) [],
        HWOM OFFSET(18) NUMBITS(1) [],
        HWINVC OFFSET(19) NUMBITS(1) [],
        HWSOC OFFSET(20) NUMBITS(1) [],
    ],
    pub INVCTRL [
        /// Pair Channels n Inverting Enable
        INVEN OFFSET(0) NUMBITS(4) [],
    ],
    pub SWOCTRL [
        /// Channel n Software Output Control Enable
        CHOC OFFSET(0) NUMBITS(8) [],
        /// Channel n Software Output Control Value
        CHOCV OFFSET(8) NUMBITS(8) [],
    ],
    pub PWMLOAD [
        /// Channel n Select
        CHSEL OFFSET(0) NUMBITS(8) [],
        /// Half Cycle Select
        HCSEL OFFSET(8) NUMBITS(1) [],
        /// Load Enable
        LDOK OFFSET(9) NUMBITS(1) [],
        /// Global Load Enable
        GLEN OFFSET(10) NUMBITS(1) [],
        /// Global Load OK
        GLDOK OFFSET(11) NUMBITS(1) [],
    ],
    pub HCR [
        /// Half Cycle Value
        HCVAL OFFSET(0) NUMBITS(16) [],
    ],
];

pub const FTM0_BASE_ADDR: usize = 0x4003_8000;
pub const FTM1_BASE_ADDR: usize = 0x4003_9000;
pub const FTM2_BASE_ADDR: usize = 0x4003_A000;
pub const FTM3_BASE_ADDR: usize = 0x4002_6000;

pub const FTM0_BASE: StaticRef<FtmRegisters> =
    unsafe { StaticRef::new(FTM0_BASE_ADDR as *const FtmRegisters) };
pub const FTM1_BASE: StaticRef<FtmRegisters> =
    unsafe { StaticRef::new(FTM1_BASE_ADDR as *const FtmRegisters) };
pub const FTM2_BASE: StaticRef<FtmRegisters> =
    unsafe { StaticRef::new(FTM2_BASE_ADDR as *const FtmRegisters) };
pub const FTM3_BASE: StaticRef<FtmRegisters> =
    unsafe { StaticRef::new(FTM3_BASE_ADDR as *const FtmRegisters) };

pub const FTM_BASE_ADDRS: [usize; 4] = [
    FTM0_BASE_ADDR,
    FTM1_BASE_ADDR,
    FTM2_BASE_ADDR,
    FTM3_BASE_ADDR,
];
pub const FTM_BASE_PTRS: [StaticRef<FtmRegisters>; 4] = [FTM0_BASE, FTM1_BASE, FTM2_BASE, FTM3_BASE];
pub const FTM_IRQS: [u32; 4] = [nvic::FTM0, nvic::FTM1, nvic::FTM2, nvic::FTM3];

instance_lookup!(FTM_BASE_ADDRS);

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::{offset_of, size_of};
    use tock_registers::interfaces::{Readable, Writeable};
    use tock_registers::LocalRegisterCopy;

    #[test]
    fn layout() {
        assert_eq!(size_of::<FtmChannel>(), 8);
        assert_eq!(offset_of!(FtmRegisters, controls), 0x0c);
        assert_eq!(offset_of!(FtmRegisters, cntin), 0x4c);
        assert_eq!(offset_of!(FtmRegisters, hcr), 0x9c);
        assert_eq!(offset_of!(FtmRegisters, pair3deadtime), 0xb8);
        assert_eq!(size_of::<FtmRegisters>(), 0xbc);
    }

    #[test]
    fn edge_aligned_pwm() {
        let mut sc = LocalRegisterCopy::<u32, SC::Register>::new(0);
        sc.modify(SC::CLKS::FtmInputClock + SC::PS::Div8 + SC::PWMEN.val(0b11));
        assert_eq!(sc.get(), 0x0003_000b);

        let csc = CnSC::MSB::SET + CnSC::ELSB::SET;
        assert_eq!(csc.value, 0x28);
    }

    #[test]
    fn pair_fields() {
        assert_eq!(combine_pair_shift(2), COMBINE::COMBINE2.shift);
        assert_eq!(combine_pair_shift(3) + 4, COMBINE::DTEN3.shift);

        let mut backing = [0u32; 0xbc / 4];
        let regs: &FtmRegisters = unsafe { &*(backing.as_mut_ptr() as *const FtmRegisters) };
        if let Some(dt) = regs.pair_deadtime(2) {
            dt.set(0x15);
        }
        assert_eq!(regs.pair2deadtime.get(), 0x15);
        assert!(regs.pair_deadtime(FTM_PAIR_COUNT).is_none());
    }

    #[test]
    fn instances() {
        assert_eq!(instance(FTM3_BASE_ADDR), Ok(3));
        assert_eq!(FTM_IRQS, [42, 43, 44, 69]);
    }
}
