// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Low-power I2C (LPI2C0, LPI2C1).
//!
//! Master and slave logic share one block and one interrupt line. The
//! master is driven through command words pushed into MTDR: the upper
//! bits select start, transmit, receive or stop and the low byte carries
//! the address, data or receive count.

use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

use crate::helpers::instance_lookup;
use crate::nvic;
use crate::static_ref::StaticRef;

/// Depth of the master transmit and receive FIFOs.
pub const LPI2C_FIFO_DEPTH: usize = 4;

register_structs! {
    pub Lpi2cRegisters {
        /// Version ID Register
        (0x000 => pub verid: ReadOnly<u32>),
        /// Parameter Register
        (0x004 => pub param: ReadOnly<u32, PARAM::Register>),
        (0x008 => _reserved0),
        /// Master Control Register
        (0x010 => pub mcr: ReadWrite<u32, MCR::Register>),
        /// Master Status Register
        (0x014 => pub msr: ReadWrite<u32, MSR::Register>),
        /// Master Interrupt Enable Register
        (0x018 => pub mier: ReadWrite<u32, MIER::Register>),
        /// Master DMA Enable Register
        (0x01c => pub mder: ReadWrite<u32, MDER::Register>),
        /// Master Configuration Register 0
        (0x020 => pub mcfgr0: ReadWrite<u32, MCFGR0::Register>),
        /// Master Configuration Register 1
        (0x024 => pub mcfgr1: ReadWrite<u32, MCFGR1::Register>),
        /// Master Configuration Register 2
        (0x028 => pub mcfgr2: ReadWrite<u32, MCFGR2::Register>),
        /// Master Configuration Register 3
        (0x02c => pub mcfgr3: ReadWrite<u32, MCFGR3::Register>),
        (0x030 => _reserved1),
        /// Master Data Match Register
        (0x040 => pub mdmr: ReadWrite<u32, MDMR::Register>),
        (0x044 => _reserved2),
        /// Master Clock Configuration Register 0
        (0x048 => pub mccr0: ReadWrite<u32, MCCR::Register>),
        (0x04c => _reserved3),
        /// Master Clock Configuration Register 1, used in high speed mode
        (0x050 => pub mccr1: ReadWrite<u32, MCCR::Register>),
        (0x054 => _reserved4),
        /// Master FIFO Control Register
        (0x058 => pub mfcr: ReadWrite<u32, MFCR::Register>),
        /// Master FIFO Status Register
        (0x05c => pub mfsr: ReadOnly<u32, MFSR::Register>),
        /// Master Transmit Data Register
        (0x060 => pub mtdr: WriteOnly<u32, MTDR::Register>),
        (0x064 => _reserved5),
        /// Master Receive Data Register
        (0x070 => pub mrdr: ReadOnly<u32, MRDR::Register>),
        (0x074 => _reserved6),
        /// Slave Control Register
        (0x110 => pub scr: ReadWrite<u32, SCR::Register>),
        /// Slave Status Register
        (0x114 => pub ssr: ReadWrite<u32, SSR::Register>),
        /// Slave Interrupt Enable
        (0x118 => pub sier: ReadWrite<u32, SSR::Register>),
        /// Slave DMA Enable Register
        (0x11c => pub sder: ReadWrite<u32, SDER::Register>),
        (0x120 => _reserved7),
        /// Slave Configuration Register 1
        (0x124 => pub scfgr1: ReadWrite<u32, SCFGR1::Register>),
        /// Slave Configuration Register 2
        (0x128 => pub scfgr2: ReadWrite<u32, SCFGR2::Register>),
        (0x12c => _reserved8),
        /// Slave Address Match Register
        (0x140 => pub samr: ReadWrite<u32, SAMR::Register>),
        (0x144 => _reserved9),
        /// Slave Address Status Register
        (0x150 => pub sasr: ReadOnly<u32, SASR::Register>),
        /// Slave Transmit ACK Register
        (0x154 => pub star: ReadWrite<u32, STAR::Register>),
        (0x158 => _reserved10),
        /// Slave Transmit Data Register
        (0x160 => pub stdr: WriteOnly<u32, STDR::Register>),
        (0x164 => _reserved11),
        /// Slave Receive Data Register
        (0x170 => pub srdr: ReadOnly<u32, SRDR::Register>),
        (0x174 => @END),
    }
}

register_bitfields![u32,
    pub PARAM [
        /// Master Transmit FIFO Size, log2
        MTXFIFO OFFSET(0) NUMBITS(4) [],
        /// Master Receive FIFO Size, log2
        MRXFIFO OFFSET(8) NUMBITS(4) [],
    ],
    pub MCR [
        /// Master Enable
        MEN OFFSET(0) NUMBITS(1) [],
        /// Software Reset
        RST OFFSET(1) NUMBITS(1) [],
        /// Doze mode enable
        DOZEN OFFSET(2) NUMBITS(1) [],
        /// Debug Enable
        DBGEN OFFSET(3) NUMBITS(1) [],
        /// Reset Transmit FIFO
        RTF OFFSET(8) NUMBITS(1) [],
        /// Reset Receive FIFO
        RRF OFFSET(9) NUMBITS(1) [],
    ],
    pub MSR [
        /// Transmit Data Flag
        TDF OFFSET(0) NUMBITS(1) [],
        /// Receive Data Flag
        RDF OFFSET(1) NUMBITS(1) [],
        /// End Packet Flag
        EPF OFFSET(8) NUMBITS(1) [],
        /// STOP Detect Flag
        SDF OFFSET(9) NUMBITS(1) [],
        /// NACK Detect Flag
        NDF OFFSET(10) NUMBITS(1) [],
        /// Arbitration Lost Flag
        ALF OFFSET(11) NUMBITS(1) [],
        /// FIFO Error Flag
        FEF OFFSET(12) NUMBITS(1) [],
        /// Pin Low Timeout Flag
        PLTF OFFSET(13) NUMBITS(1) [],
        /// Data Match Flag
        DMF OFFSET(14) NUMBITS(1) [],
        /// Master Busy Flag
        MBF OFFSET(24) NUMBITS(1) [],
        /// Bus Busy Flag
        BBF OFFSET(25) NUMBITS(1) [],
    ],
    pub MIER [
        TDIE OFFSET(0) NUMBITS(1) [],
        RDIE OFFSET(1) NUMBITS(1) [],
        EPIE OFFSET(8) NUMBITS(1) [],
        SDIE OFFSET(9) NUMBITS(1) [],
        NDIE OFFSET(10) NUMBITS(1) [],
        ALIE OFFSET(11) NUMBITS(1) [],
        FEIE OFFSET(12) NUMBITS(1) [],
        PLTIE OFFSET(13) NUMBITS(1) [],
        DMIE OFFSET(14) NUMBITS(1) [],
    ],
    pub MDER [
        /// Transmit Data DMA Enable
        TDDE OFFSET(0) NUMBITS(1) [],
        /// Receive Data DMA Enable
        RDDE OFFSET(1) NUMBITS(1) [],
    ],
    pub MCFGR0 [
        /// Host Request Enable
        HREN OFFSET(0) NUMBITS(1) [],
        /// Host Request Polarity
        HRPOL OFFSET(1) NUMBITS(1) [],
        /// Host Request Select
        HRSEL OFFSET(2) NUMBITS(1) [],
        /// Circular FIFO Enable
        CIRFIFO OFFSET(8) NUMBITS(1) [],
        /// Receive Data Match Only
        RDMO OFFSET(9) NUMBITS(1) [],
    ],
    pub MCFGR1 [
        /// Prescaler, divide by 2^PRESCALE
        PRESCALE OFFSET(0) NUMBITS(3) [],
        /// Automatic STOP Generation
        AUTOSTOP OFFSET(8) NUMBITS(1) [],
        /// Ignore NACK
        IGNACK OFFSET(9) NUMBITS(1) [],
        /// Timeout Configuration
        TIMECFG OFFSET(10) NUMBITS(1) [],
        /// Match Configuration
        MATCFG OFFSET(16) NUMBITS(3) [],
        /// Pin Configuration
        PINCFG OFFSET(24) NUMBITS(3) [
            OpenDrain2Pin = 0,
            OutputOnly2Pin = 1,
            PushPull2Pin = 2,
            PushPull4Pin = 3,
        ],
    ],
    pub MCFGR2 [
        /// Bus Idle Timeout
        BUSIDLE OFFSET(0) NUMBITS(12) [],
        /// Glitch Filter SCL
        FILTSCL OFFSET(16) NUMBITS(4) [],
        /// Glitch Filter SDA
        FILTSDA OFFSET(24) NUMBITS(4) [],
    ],
    pub MCFGR3 [
        /// Pin Low Timeout
        PINLOW OFFSET(8) NUMBITS(12) [],
    ],
    pub MDMR [
        MATCH0 OFFSET(0) NUMBITS(8) [],
        MATCH1 OFFSET(16) NUMBITS(8) [],
    ],
    /// MCCR0 and MCCR1
    pub MCCR [
        /// Clock Low Period
        CLKLO OFFSET(0) NUMBITS(6) [],
        /// Clock High Period
        CLKHI OFFSET(8) NUMBITS(6) [],
        /// Setup Hold Delay
        SETHOLD OFFSET(16) NUMBITS(6) [],
        /// Data Valid Delay
        DATAVD OFFSET(24) NUMBITS(6) [],
    ],
    pub MFCR [
        /// Transmit FIFO Watermark
        TXWATER OFFSET(0) NUMBITS(2) [],
        /// Receive FIFO Watermark
        RXWATER OFFSET(16) NUMBITS(2) [],
    ],
    pub MFSR [
        /// Transmit FIFO Count
        TXCOUNT OFFSET(0) NUMBITS(3) [],
        /// Receive FIFO Count
        RXCOUNT OFFSET(16) NUMBITS(3) [],
    ],
    pub MTDR [
        /// Transmit Data
        DATA OFFSET(0) NUMBITS(8) [],
        /// Command Data
        CMD OFFSET(8) NUMBITS(3) [
            Transmit = 0,
            Receive = 1,
            Stop = 2,
            ReceiveDiscard = 3,
            Start = 4,
            StartExpectNack = 5,
            StartHighSpeed = 6,
            StartHighSpeedExpectNack = 7,
        ],
    ],
    pub MRDR [
        /// Receive Data
        DATA OFFSET(0) NUMBITS(8) [],
        /// RX Empty
        RXEMPTY OFFSET(14) NUMBITS(1) [],
    ],
    pub SCR [
        /// Slave Enable
        SEN OFFSET(0) NUMBITS(1) [],
        /// Software Reset
        RST OFFSET(1) NUMBITS(1) [],
        /// Filter Enable
        FILTEN OFFSET(4) NUMBITS(1) [],
        /// Filter Doze Enable
        FILTDZ OFFSET(5) NUMBITS(1) [],
        /// Reset Transmit FIFO
        RTF OFFSET(8) NUMBITS(1) [],
        /// Reset Receive FIFO
        RRF OFFSET(9) NUMBITS(1) [],
    ],
    /// SSR flags; SIER uses the same positions as enables.
    pub SSR [
        /// Transmit Data Flag
        TDF OFFSET(0) NUMBITS(1) [],
        /// Receive Data Flag
        RDF OFFSET(1) NUMBITS(1) [],
        /// Address Valid Flag
        AVF OFFSET(2) NUMBITS(1) [],
        /// Transmit ACK Flag
        TAF OFFSET(3) NUMBITS(1) [],
        /// Repeated Start Flag
        RSF OFFSET(8) NUMBITS(1) [],
        /// STOP Detect Flag
        SDF OFFSET(9) NUMBITS(1) [],
        /// Bit Error Flag
        BEF OFFSET(10) NUMBITS(1) [],
        /// FIFO Error Flag
        FEF OFFSET(11) NUMBITS(1) [],
        /// Address Match 0 Flag
        AM0F OFFSET(12) NUMBITS(1) [],
        /// Address Match 1 Flag
        AM1F OFFSET(13) NUMBITS(1) [],
        /// General Call Flag
        GCF OFFSET(14) NUMBITS(1) [],
        /// SMBus Alert Response Flag
        SARF OFFSET(15) NUMBITS(1) [],
        /// Slave Busy Flag
        SBF OFFSET(24) NUMBITS(1) [],
        /// Bus Busy Flag
        BBF OFFSET(25) NUMBITS(1) [],
    ],
    pub SDER [
        TDDE OFFSET(0) NUMBITS(1) [],
        RDDE OFFSET(1) NUMBITS(1) [],
        /// Address Valid DMA Enable
        AVDE OFFSET(2) NUMBITS(1) [],
    ],
    pub SCFGR1 [
        ADRSTALL OFFSET(0) NUMBITS(1) [],
        RXSTALL OFFSET(1) NUMBITS(1) [],
        TXDSTALL OFFSET(2) NUMBITS(1) [],
        ACKSTALL OFFSET(3) NUMBITS(1) [],
        /// General Call Enable
        GCEN OFFSET(8) NUMBITS(1) [],
        /// SMBus Alert Enable
        SAEN OFFSET(9) NUMBITS(1) [],
        /// Transmit Flag Configuration
        TXCFG OFFSET(10) NUMBITS(1) [],
        /// Receive Data Configuration
        RXCFG OFFSET(11) NUMBITS(1) [],
        /// Ignore NACK
        IGNACK OFFSET(12) NUMBITS(1) [],
        /// High Speed Mode Enable
        HSMEN OFFSET(13) NUMBITS(1) [],
        /// Address Configuration
        ADDRCFG OFFSET(16) NUMBITS(3) [],
    ],
    pub SCFGR2 [
        /// Clock Hold Time
        CLKHOLD OFFSET(0) NUMBITS(4) [],
        /// Data Valid Delay
        DATAVD OFFSET(8) NUMBITS(6) [],
        /// Glitch Filter SCL
        FILTSCL OFFSET(16) NUMBITS(4) [],
        /// Glitch Filter SDA
        FILTSDA OFFSET(24) NUMBITS(4) [],
    ],
    pub SAMR [
        /// Address 0 Value
        ADDR0 OFFSET(1) NUMBITS(10) [],
        /// Address 1 Value
        ADDR1 OFFSET(17) NUMBITS(10) [],
    ],
    pub SASR [
        /// Received Address
        RADDR OFFSET(0) NUMBITS(11) [],
        /// Address Not Valid
        ANV OFFSET(14) NUMBITS(1) [],
    ],
    pub STAR [
        /// Transmit NACK
        TXNACK OFFSET(0) NUMBITS(1) [],
    ],
    pub STDR [
        DATA OFFSET(0) NUMBITS(8) [],
    ],
    pub SRDR [
        DATA OFFSET(0) NUMBITS(8) [],
        RXEMPTY OFFSET(14) NUMBITS(1) [],
        /// Start Of Frame
        SOF OFFSET(15) NUMBITS(1) [],
    ],
];

pub const LPI2C0_BASE_ADDR: usize = 0x4006_6000;
pub const LPI2C1_BASE_ADDR: usize = 0x4006_7000;

pub const LPI2C0_BASE: StaticRef<Lpi2cRegisters> =
    unsafe { StaticRef::new(LPI2C0_BASE_ADDR as *const Lpi2cRegisters) };
pub const LPI2C1_BASE: StaticRef<Lpi2cRegisters> =
    unsafe { StaticRef::new(LPI2C1_BASE_ADDR as *const Lpi2cRegisters) };

pub const LPI2C_BASE_ADDRS: [usize; 2] = [LPI2C0_BASE_ADDR, LPI2C1_BASE_ADDR];
pub const LPI2C_BASE_PTRS: [StaticRef<Lpi2cRegisters>; 2] = [LPI2C0_BASE, LPI2C1_BASE];
/// Master and slave requests share a line per instance.
pub const LPI2C_IRQS: [u32; 2] = [nvic::LPI2C0, nvic::LPI2C1];

instance_lookup!(LPI2C_BASE_ADDRS);

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::{offset_of, size_of};
    use tock_registers::LocalRegisterCopy;

    #[test]
    fn layout() {
        assert_eq!(offset_of!(Lpi2cRegisters, mccr0), 0x48);
        assert_eq!(offset_of!(Lpi2cRegisters, mtdr), 0x60);
        assert_eq!(offset_of!(Lpi2cRegisters, mrdr), 0x70);
        assert_eq!(offset_of!(Lpi2cRegisters, scr), 0x110);
        assert_eq!(offset_of!(Lpi2cRegisters, samr), 0x140);
        assert_eq!(size_of::<Lpi2cRegisters>(), 0x174);
    }

    #[test]
    fn master_commands() {
        // Start with a read of address 0x50.
        let start = MTDR::CMD::Start + MTDR::DATA.val((0x50 << 1) | 1);
        assert_eq!(start.value, 0x04a1);
        let receive = MTDR::CMD::Receive + MTDR::DATA.val(3);
        assert_eq!(receive.value, 0x0103);
        assert_eq!(MTDR::CMD::Stop.value, 0x0200);

        let mrdr = LocalRegisterCopy::<u32, MRDR::Register>::new(0x4000);
        assert!(mrdr.is_set(MRDR::RXEMPTY));
    }

    #[test]
    fn instances() {
        assert_eq!(LPI2C_IRQS, [24, 25]);
        assert_eq!(instance(LPI2C1_BASE_ADDR), Ok(1));
    }
}
