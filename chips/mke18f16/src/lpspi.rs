// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Low-power SPI (LPSPI0, LPSPI1).
//!
//! Frames are described by a transmit command word written to TCR before
//! the data words; TCR is pushed through the transmit FIFO along with data.

use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

use crate::helpers::instance_lookup;
use crate::nvic;
use crate::static_ref::StaticRef;

register_structs! {
    pub LpspiRegisters {
        /// Version ID Register
        (0x00 => pub verid: ReadOnly<u32>),
        /// Parameter Register
        (0x04 => pub param: ReadOnly<u32, PARAM::Register>),
        (0x08 => _reserved0),
        /// Control Register
        (0x10 => pub cr: ReadWrite<u32, CR::Register>),
        /// Status Register
        (0x14 => pub sr: ReadWrite<u32, SR::Register>),
        /// Interrupt Enable Register
        (0x18 => pub ier: ReadWrite<u32, SR::Register>),
        /// DMA Enable Register
        (0x1c => pub der: ReadWrite<u32, DER::Register>),
        /// Configuration Register 0
        (0x20 => pub cfgr0: ReadWrite<u32, CFGR0::Register>),
        /// Configuration Register 1
        (0x24 => pub cfgr1: ReadWrite<u32, CFGR1::Register>),
        (0x28 => _reserved1),
        /// Data Match Register 0
        (0x30 => pub dmr0: ReadWrite<u32>),
        /// Data Match Register 1
        (0x34 => pub dmr1: ReadWrite<u32>),
        (0x38 => _reserved2),
        /// Clock Configuration Register
        (0x40 => pub ccr: ReadWrite<u32, CCR::Register>),
        (0x44 => _reserved3),
        /// FIFO Control Register
        (0x58 => pub fcr: ReadWrite<u32, FCR::Register>),
        /// FIFO Status Register
        (0x5c => pub fsr: ReadOnly<u32, FSR::Register>),
        /// Transmit Command Register
        (0x60 => pub tcr: ReadWrite<u32, TCR::Register>),
        /// Transmit Data Register
        (0x64 => pub tdr: WriteOnly<u32>),
        (0x68 => _reserved4),
        /// Receive Status Register
        (0x70 => pub rsr: ReadOnly<u32, RSR::Register>),
        /// Receive Data Register
        (0x74 => pub rdr: ReadOnly<u32>),
        (0x78 => @END),
    }
}

register_bitfields![u32,
    pub PARAM [
        /// Transmit FIFO Size, log2
        TXFIFO OFFSET(0) NUMBITS(8) [],
        /// Receive FIFO Size, log2
        RXFIFO OFFSET(8) NUMBITS(8) [],
    ],
    pub CR [
        /// Module Enable
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
    /// SR flags; IER enables use the same positions.
    pub SR [
        /// Transmit Data Flag
        TDF OFFSET(0) NUMBITS(1) [],
        /// Receive Data Flag
        RDF OFFSET(1) NUMBITS(1) [],
        /// Word Complete Flag
        WCF OFFSET(8) NUMBITS(1) [],
        /// Frame Complete Flag
        FCF OFFSET(9) NUMBITS(1) [],
        /// Transfer Complete Flag
        TCF OFFSET(10) NUMBITS(1) [],
        /// Transmit Error Flag
        TEF OFFSET(11) NUMBITS(1) [],
        /// Receive Error Flag
        REF OFFSET(12) NUMBITS(1) [],
        /// Data Match Flag
        DMF OFFSET(13) NUMBITS(1) [],
        /// Module Busy Flag
        MBF OFFSET(24) NUMBITS(1) [],
    ],
    pub DER [
        /// Transmit Data DMA Enable
        TDDE OFFSET(0) NUMBITS(1) [],
        /// Receive Data DMA Enable
        RDDE OFFSET(1) NUMBITS(1) [],
    ],
    pub CFGR0 [
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
    pub CFGR1 [
        /// Master Mode
        MASTER OFFSET(0) NUMBITS(1) [],
        /// Sample Point
        SAMPLE OFFSET(1) NUMBITS(1) [],
        /// Automatic PCS
        AUTOPCS OFFSET(2) NUMBITS(1) [],
        /// No Stall
        NOSTALL OFFSET(3) NUMBITS(1) [],
        /// Peripheral Chip Select Polarity
        PCSPOL OFFSET(8) NUMBITS(4) [],
        /// Match Configuration
        MATCFG OFFSET(16) NUMBITS(3) [],
        /// Pin Configuration
        PINCFG OFFSET(24) NUMBITS(2) [
            SinInSoutOut = 0,
            SinOnly = 1,
            SoutOnly = 2,
            SoutInSinOut = 3,
        ],
        /// Output Config
        OUTCFG OFFSET(26) NUMBITS(1) [],
        /// Peripheral Chip Select Configuration
        PCSCFG OFFSET(27) NUMBITS(1) [],
    ],
    pub CCR [
        /// SCK Divider
        SCKDIV OFFSET(0) NUMBITS(8) [],
        /// Delay Between Transfers
        DBT OFFSET(8) NUMBITS(8) [],
        /// PCS-to-SCK Delay
        PCSSCK OFFSET(16) NUMBITS(8) [],
        /// SCK-to-PCS Delay
        SCKPCS OFFSET(24) NUMBITS(8) [],
    ],
    pub FCR [
        /// Transmit FIFO Watermark
        TXWATER OFFSET(0) NUMBITS(2) [],
        /// Receive FIFO Watermark
        RXWATER OFFSET(16) NUMBITS(2) [],
    ],
    pub FSR [
        /// Transmit FIFO Count
        TXCOUNT OFFSET(0) NUMBITS(3) [],
        /// Receive FIFO Count
        RXCOUNT OFFSET(16) NUMBITS(3) [],
    ],
    pub TCR [
        /// Frame Size, in bits minus one
        FRAMESZ OFFSET(0) NUMBITS(12) [],
        /// Transfer Width
        WIDTH OFFSET(16) NUMBITS(2) [
            Single = 0,
            Dual = 1,
            Quad = 2,
        ],
        /// Transmit Data Mask
        TXMSK OFFSET(18) NUMBITS(1) [],
        /// Receive Data Mask
        RXMSK OFFSET(19) NUMBITS(1) [],
        /// Continuing Command
        CONTC OFFSET(20) NUMBITS(1) [],
        /// Continuous Transfer
        CONT OFFSET(21) NUMBITS(1) [],
        /// Byte Swap
        BYSW OFFSET(22) NUMBITS(1) [],
        /// LSB First
        LSBF OFFSET(23) NUMBITS(1) [],
        /// Peripheral Chip Select
        PCS OFFSET(24) NUMBITS(2) [],
        /// Prescaler Value
        PRESCALE OFFSET(27) NUMBITS(3) [],
        /// Clock Phase
        CPHA OFFSET(30) NUMBITS(1) [],
        /// Clock Polarity
        CPOL OFFSET(31) NUMBITS(1) [],
    ],
    pub RSR [
        /// Start Of Frame
        SOF OFFSET(0) NUMBITS(1) [],
        /// RX FIFO Empty
        RXEMPTY OFFSET(1) NUMBITS(1) [],
    ],
];

pub const LPSPI0_BASE_ADDR: usize = 0x4002_C000;
pub const LPSPI1_BASE_ADDR: usize = 0x4002_D000;

pub const LPSPI0_BASE: StaticRef<LpspiRegisters> =
    unsafe { StaticRef::new(LPSPI0_BASE_ADDR as *const LpspiRegisters) };
pub const LPSPI1_BASE: StaticRef<LpspiRegisters> =
    unsafe { StaticRef::new(LPSPI1_BASE_ADDR as *const LpspiRegisters) };

pub const LPSPI_BASE_ADDRS: [usize; 2] = [LPSPI0_BASE_ADDR, LPSPI1_BASE_ADDR];
pub const LPSPI_BASE_PTRS: [StaticRef<LpspiRegisters>; 2] = [LPSPI0_BASE, LPSPI1_BASE];
pub const LPSPI_IRQS: [u32; 2] = [nvic::LPSPI0, nvic::LPSPI1];

instance_lookup!(LPSPI_BASE_ADDRS);

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::{offset_of, size_of};

    #[test]
    fn layout() {
        assert_eq!(offset_of!(LpspiRegisters, ccr), 0x40);
        assert_eq!(offset_of!(LpspiRegisters, tcr), 0x60);
        assert_eq!(offset_of!(LpspiRegisters, rdr), 0x74);
        assert_eq!(size_of::<LpspiRegisters>(), 0x78);
    }

    #[test]
    fn mode3_byte_frames() {
        let tcr = TCR::CPOL::SET + TCR::CPHA::SET + TCR::PCS.val(1) + TCR::FRAMESZ.val(7);
        assert_eq!(tcr.value, 0xc100_0007);
        assert_eq!(LPSPI_IRQS, [26, 27]);
        assert_eq!(instance(LPSPI0_BASE_ADDR), Ok(0));
    }
}
