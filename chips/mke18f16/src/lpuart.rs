// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Low-power UART (LPUART0..LPUART2).
//!
//! Each instance has separate transmit and receive interrupt lines.

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::helpers::instance_lookup;
use crate::nvic;
use crate::static_ref::StaticRef;

register_structs! {
    /// LP Universal asynchronous receiver transmitter
    pub LpuartRegisters {
        /// Version ID Register
        (0x00 => pub verid: ReadOnly<u32, VERID::Register>),
        /// Parameter Register
        (0x04 => pub param: ReadOnly<u32, PARAM::Register>),
        /// LPUART Global Register
        (0x08 => pub global: ReadWrite<u32, GLOBAL::Register>),
        /// LPUART Pin Configuration Register
        (0x0c => pub pincfg: ReadWrite<u32, PINCFG::Register>),
        /// LPUART Baud Rate Register
        (0x10 => pub baud: ReadWrite<u32, BAUD::Register>),
        /// LPUART Status Register
        (0x14 => pub stat: ReadWrite<u32, STAT::Register>),
        /// LPUART Control Register
        (0x18 => pub ctrl: ReadWrite<u32, CTRL::Register>),
        /// LPUART Data Register
        (0x1c => pub data: ReadWrite<u32, DATA::Register>),
        /// LPUART Match Address Register
        (0x20 => pub r#match: ReadWrite<u32, MATCH::Register>),
        /// LPUART Modem IrDA Register
        (0x24 => pub modir: ReadWrite<u32, MODIR::Register>),
        /// LPUART FIFO Register
        (0x28 => pub fifo: ReadWrite<u32, FIFO::Register>),
        /// LPUART Watermark Register
        (0x2c => pub water: ReadWrite<u32, WATER::Register>),
        (0x30 => @END),
    }
}

register_bitfields![u32,
    pub VERID [
        /// Major Version Number
        MAJOR OFFSET(24) NUMBITS(8) [],
        /// Minor Version Number
        MINOR OFFSET(16) NUMBITS(8) [],
        /// Feature Identification Number
        FEATURE OFFSET(0) NUMBITS(16) [],
    ],
    pub PARAM [
        /// Receive FIFO Size
        RXFIFO OFFSET(8) NUMBITS(8) [],
        /// Transmit FIFO Size
        TXFIFO OFFSET(0) NUMBITS(8) [],
    ],
    pub GLOBAL [
        /// Software Reset
        RST OFFSET(1) NUMBITS(1) [],
    ],
    pub PINCFG [
        /// Trigger Select
        TRGSEL OFFSET(0) NUMBITS(2) [
            Disabled = 0,
            RxdInput = 1,
            CtsInput = 2,
            TxdModulation = 3,
        ],
    ],
    pub BAUD [
        /// Match Address Mode Enable 1
        MAEN1 OFFSET(31) NUMBITS(1) [],
        /// Match Address Mode Enable 2
        MAEN2 OFFSET(30) NUMBITS(1) [],
        /// 10-bit Mode select
        M10 OFFSET(29) NUMBITS(1) [],
        /// Oversampling Ratio, minus one
        OSR OFFSET(24) NUMBITS(5) [],
        /// Transmitter DMA Enable
        TDMAE OFFSET(23) NUMBITS(1) [],
        /// Receiver Full DMA Enable
        RDMAE OFFSET(21) NUMBITS(1) [],
        /// Match Configuration
        MATCFG OFFSET(18) NUMBITS(2) [],
        /// Both Edge Sampling
        BOTHEDGE OFFSET(17) NUMBITS(1) [],
        /// Resynchronization Disable
        RESYNCDIS OFFSET(16) NUMBITS(1) [],
        /// LIN Break Detect Interrupt Enable
        LBKDIE OFFSET(15) NUMBITS(1) [],
        /// RX Input Active Edge Interrupt Enable
        RXEDGIE OFFSET(14) NUMBITS(1) [],
        /// Stop Bit Number Select
        SBNS OFFSET(13) NUMBITS(1) [
            One = 0,
            Two = 1,
        ],
        /// Baud Rate Modulo Divisor
        SBR OFFSET(0) NUMBITS(13) [],
    ],
    pub STAT [
        /// LIN Break Detect Interrupt Flag
        LBKDIF OFFSET(31) NUMBITS(1) [],
        /// RXD Pin Active Edge Interrupt Flag
        RXEDGIF OFFSET(30) NUMBITS(1) [],
        /// MSB First
        MSBF OFFSET(29) NUMBITS(1) [],
        /// Receive Data Inversion
        RXINV OFFSET(28) NUMBITS(1) [],
        /// Receive Wake Up Idle Detect
        RWUID OFFSET(27) NUMBITS(1) [],
        /// Break Character Generation Length
        BRK13 OFFSET(26) NUMBITS(1) [],
        /// LIN Break Detection Enable
        LBKDE OFFSET(25) NUMBITS(1) [],
        /// Receiver Active Flag
        RAF OFFSET(24) NUMBITS(1) [],
        /// Transmit Data Register Empty Flag
        TDRE OFFSET(23) NUMBITS(1) [],
        /// Transmission Complete Flag
        TC OFFSET(22) NUMBITS(1) [],
        /// Receive Data Register Full Flag
        RDRF OFFSET(21) NUMBITS(1) [],
        /// Idle Line Flag
        IDLE OFFSET(20) NUMBITS(1) [],
        /// Receiver Overrun Flag
        OR OFFSET(19) NUMBITS(1) [],
        /// Noise Flag
        NF OFFSET(18) NUMBITS(1) [],
        /// Framing Error Flag
        FE OFFSET(17) NUMBITS(1) [],
        /// Parity Error Flag
        PF OFFSET(16) NUMBITS(1) [],
        /// Match 1 Flag
        MA1F OFFSET(15) NUMBITS(1) [],
        /// Match 2 Flag
        MA2F OFFSET(14) NUMBITS(1) [],
    ],
    pub CTRL [
        /// Receive Bit 8 / Transmit Bit 9
        R8T9 OFFSET(31) NUMBITS(1) [],
        /// Receive Bit 9 / Transmit Bit 8
        R9T8 OFFSET(30) NUMBITS(1) [],
        /// TXD Pin Direction in Single-Wire Mode
        TXDIR OFFSET(29) NUMBITS(1) [],
        /// Transmit Data Inversion
        TXINV OFFSET(28) NUMBITS(1) [],
        /// Overrun Interrupt Enable
        ORIE OFFSET(27) NUMBITS(1) [],
        /// Noise Error Interrupt Enable
        NEIE OFFSET(26) NUMBITS(1) [],
        /// Framing Error Interrupt Enable
        FEIE OFFSET(25) NUMBITS(1) [],
        /// Parity Error Interrupt Enable
        PEIE OFFSET(24) NUMBITS(1) [],
        /// Transmit Interrupt Enable
        TIE OFFSET(23) NUMBITS(1) [],
        /// Transmission Complete Interrupt Enable
        TCIE OFFSET(22) NUMBITS(1) [],
        /// Receiver Interrupt Enable
        RIE OFFSET(21) NUMBITS(1) [],
        /// Idle Line Interrupt Enable
        ILIE OFFSET(20) NUMBITS(1) [],
        /// Transmitter Enable
        TE OFFSET(19) NUMBITS(1) [],
        /// Receiver Enable
        RE OFFSET(18) NUMBITS(1) [],
        /// Receiver Wakeup Control
        RWU OFFSET(17) NUMBITS(1) [],
        /// Send Break
        SBK OFFSET(16) NUMBITS(1) [],
        /// Match 1 Interrupt Enable
        MA1IE OFFSET(15) NUMBITS(1) [],
        /// Match 2 Interrupt Enable
        MA2IE OFFSET(14) NUMBITS(1) [],
        /// 7-Bit Mode Select
        M7 OFFSET(11) NUMBITS(1) [],
        /// Idle Configuration
        IDLECFG OFFSET(8) NUMBITS(3) [],
        /// Loop Mode Select
        LOOPS OFFSET(7) NUMBITS(1) [],
        /// Doze Enable
        DOZEEN OFFSET(6) NUMBITS(1) [],
        /// Receiver Source Select
        RSRC OFFSET(5) NUMBITS(1) [],
        /// 9-Bit or 8-Bit Mode Select
        M OFFSET(4) NUMBITS(1) [
            Bits8 = 0,
            Bits9 = 1,
        ],
        /// Receiver Wakeup Method Select
        WAKE OFFSET(3) NUMBITS(1) [],
        /// Idle Line Type Select
        ILT OFFSET(2) NUMBITS(1) [],
        /// Parity Enable
        PE OFFSET(1) NUMBITS(1) [],
        /// Parity Type
        PT OFFSET(0) NUMBITS(1) [
            Even = 0,
            Odd = 1,
        ],
    ],
    pub DATA [
        /// Receive data buffer was received with noise
        NOISY OFFSET(15) NUMBITS(1) [],
        /// Receive data buffer was received with a parity error
        PARITYE OFFSET(14) NUMBITS(1) [],
        /// Frame Error / Transmit Special Character
        FRETSC OFFSET(13) NUMBITS(1) [],
        /// Receive Buffer Empty
        RXEMPT OFFSET(12) NUMBITS(1) [],
        /// Idle Line
        IDLINE OFFSET(11) NUMBITS(1) [],
        /// Data bits 0..9
        R9T9_R0T0 OFFSET(0) NUMBITS(10) [],
        /// Low eight data bits
        RT OFFSET(0) NUMBITS(8) [],
    ],
    pub MATCH [
        /// Match Address 2
        MA2 OFFSET(16) NUMBITS(10) [],
        /// Match Address 1
        MA1 OFFSET(0) NUMBITS(10) [],
    ],
    pub MODIR [
        /// Infrared enable
        IREN OFFSET(18) NUMBITS(1) [],
        /// Transmitter narrow pulse
        TNP OFFSET(16) NUMBITS(2) [],
        /// Receive RTS Configuration
        RTSWATER OFFSET(8) NUMBITS(2) [],
        /// Transmit CTS Source
        TXCTSSRC OFFSET(5) NUMBITS(1) [],
        /// Transmit CTS Configuration
        TXCTSC OFFSET(4) NUMBITS(1) [],
        /// Receiver request-to-send enable
        RXRTSE OFFSET(3) NUMBITS(1) [],
        /// Transmitter request-to-send polarity
        TXRTSPOL OFFSET(2) NUMBITS(1) [],
        /// Transmitter request-to-send enable
        TXRTSE OFFSET(1) NUMBITS(1) [],
        /// Transmitter clear-to-send enable
        TXCTSE OFFSET(0) NUMBITS(1) [],
    ],
    pub FIFO [
        /// Transmit Buffer/FIFO Empty
        TXEMPT OFFSET(23) NUMBITS(1) [],
        /// Receive Buffer/FIFO Empty
        RXEMPT OFFSET(22) NUMBITS(1) [],
        /// Transmitter Buffer Overflow Flag
        TXOF OFFSET(17) NUMBITS(1) [],
        /// Receiver Buffer Underflow Flag
        RXUF OFFSET(16) NUMBITS(1) [],
        /// Transmit FIFO/Buffer Flush
        TXFLUSH OFFSET(15) NUMBITS(1) [],
        /// Receive FIFO/Buffer Flush
        RXFLUSH OFFSET(14) NUMBITS(1) [],
        /// Receiver Idle Empty Enable
        RXIDEN OFFSET(10) NUMBITS(3) [],
        /// Transmit FIFO Overflow Interrupt Enable
        TXOFE OFFSET(9) NUMBITS(1) [],
        /// Receive FIFO Underflow Interrupt Enable
        RXUFE OFFSET(8) NUMBITS(1) [],
        /// Transmit FIFO Enable
        TXFE OFFSET(7) NUMBITS(1) [],
        /// Transmit FIFO Buffer Depth
        TXFIFOSIZE OFFSET(4) NUMBITS(3) [],
        /// Receive FIFO Enable
        RXFE OFFSET(3) NUMBITS(1) [],
        /// Receive FIFO Buffer Depth
        RXFIFOSIZE OFFSET(0) NUMBITS(3) [],
    ],
    pub WATER [
        /// Receive Counter
        RXCOUNT OFFSET(24) NUMBITS(3) [],
        /// Receive Watermark
        RXWATER OFFSET(16) NUMBITS(2) [],
        /// Transmit Counter
        TXCOUNT OFFSET(8) NUMBITS(3) [],
        /// Transmit Watermark
        TXWATER OFFSET(0) NUMBITS(2) [],
    ],
];

pub const LPUART0_BASE_ADDR: usize = 0x4006_A000;
pub const LPUART1_BASE_ADDR: usize = 0x4006_B000;
pub const LPUART2_BASE_ADDR: usize = 0x4006_C000;

pub const LPUART0_BASE: StaticRef<LpuartRegisters> =
    unsafe { StaticRef::new(LPUART0_BASE_ADDR as *const LpuartRegisters) };
pub const LPUART1_BASE: StaticRef<LpuartRegisters> =
    unsafe { StaticRef::new(LPUART1_BASE_ADDR as *const LpuartRegisters) };
pub const LPUART2_BASE: StaticRef<LpuartRegisters> =
    unsafe { StaticRef::new(LPUART2_BASE_ADDR as *const LpuartRegisters) };

pub const LPUART_BASE_ADDRS: [usize; 3] = [LPUART0_BASE_ADDR, LPUART1_BASE_ADDR, LPUART2_BASE_ADDR];
pub const LPUART_BASE_PTRS: [StaticRef<LpuartRegisters>; 3] =
    [LPUART0_BASE, LPUART1_BASE, LPUART2_BASE];
pub const LPUART_TX_IRQS: [u32; 3] = [nvic::LPUART0_TX, nvic::LPUART1_TX, nvic::LPUART2_TX];
pub const LPUART_RX_IRQS: [u32; 3] = [nvic::LPUART0_RX, nvic::LPUART1_RX, nvic::LPUART2_RX];

instance_lookup!(LPUART_BASE_ADDRS);

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::{offset_of, size_of};
    use tock_registers::LocalRegisterCopy;

    #[test]
    fn layout() {
        assert_eq!(offset_of!(LpuartRegisters, data), 0x1c);
        assert_eq!(offset_of!(LpuartRegisters, water), 0x2c);
        assert_eq!(size_of::<LpuartRegisters>(), 0x30);
    }

    #[test]
    fn data_flags_are_single_bits() {
        for field in [DATA::NOISY, DATA::PARITYE, DATA::FRETSC, DATA::RXEMPT, DATA::IDLINE] {
            assert_eq!(field.mask, 1);
        }
        let data = LocalRegisterCopy::<u32, DATA::Register>::new(0x1041);
        assert!(data.is_set(DATA::RXEMPT));
        assert_eq!(data.read(DATA::RT), 0x41);
    }

    #[test]
    fn baud_115200_from_48mhz() {
        // 48 MHz / (16 * 26) is within 0.2% of 115200.
        let mut baud = LocalRegisterCopy::<u32, BAUD::Register>::new(0);
        baud.modify(BAUD::OSR.val(15) + BAUD::SBR.val(26) + BAUD::SBNS::One);
        assert_eq!(baud.get(), 0x0f00_001a);
    }

    #[test]
    fn interrupt_lines() {
        assert_eq!(LPUART_TX_IRQS, [31, 33, 35]);
        assert_eq!(LPUART_RX_IRQS, [32, 34, 36]);
        assert_eq!(instance(LPUART2_BASE_ADDR), Ok(2));
    }
}
