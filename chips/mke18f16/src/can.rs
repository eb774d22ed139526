// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! FlexCAN controller (CAN0, CAN1).
//!
//! Message buffers live in the embedded RAM starting at offset 0x80. Each
//! buffer is four words: control/status, identifier and eight data bytes
//! stored most significant byte first within each word.

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::helpers::instance_lookup;
use crate::nvic;
use crate::static_ref::StaticRef;

/// Number of message buffers.
pub const CAN_MB_COUNT: usize = 16;
/// Number of words in the message buffer RAM.
pub const CAN_RAMN_COUNT: usize = CAN_MB_COUNT * 4;
/// Number of individual receive mask registers.
pub const CAN_RXIMR_COUNT: usize = 16;

register_structs! {
    /// One 8-byte payload message buffer.
    pub MessageBuffer {
        /// Control and status word
        (0x0 => pub cs: ReadWrite<u32, CS::Register>),
        /// Identifier word
        (0x4 => pub id: ReadWrite<u32, ID::Register>),
        /// Data bytes 0..3
        (0x8 => pub word0: ReadWrite<u32, WORD0::Register>),
        /// Data bytes 4..7
        (0xc => pub word1: ReadWrite<u32, WORD1::Register>),
        (0x10 => @END),
    }
}

register_structs! {
    pub CanRegisters {
        /// Module Configuration Register
        (0x000 => pub mcr: ReadWrite<u32, MCR::Register>),
        /// Control 1 register
        (0x004 => pub ctrl1: ReadWrite<u32, CTRL1::Register>),
        /// Free Running Timer
        (0x008 => pub timer: ReadWrite<u32, TIMER::Register>),
        (0x00c => _reserved0),
        /// Rx Mailboxes Global Mask Register
        (0x010 => pub rxmgmask: ReadWrite<u32>),
        /// Rx 14 Mask register
        (0x014 => pub rx14mask: ReadWrite<u32>),
        /// Rx 15 Mask register
        (0x018 => pub rx15mask: ReadWrite<u32>),
        /// Error Counter
        (0x01c => pub ecr: ReadWrite<u32, ECR::Register>),
        /// Error and Status 1 register
        (0x020 => pub esr1: ReadWrite<u32, ESR1::Register>),
        (0x024 => _reserved1),
        /// Interrupt Masks 1 register
        (0x028 => pub imask1: ReadWrite<u32>),
        (0x02c => _reserved2),
        /// Interrupt Flags 1 register
        (0x030 => pub iflag1: ReadWrite<u32, IFLAG1::Register>),
        /// Control 2 register
        (0x034 => pub ctrl2: ReadWrite<u32, CTRL2::Register>),
        /// Error and Status 2 register
        (0x038 => pub esr2: ReadOnly<u32, ESR2::Register>),
        (0x03c => _reserved3),
        /// CRC Register
        (0x044 => pub crcr: ReadOnly<u32, CRCR::Register>),
        /// Rx FIFO Global Mask register
        (0x048 => pub rxfgmask: ReadWrite<u32>),
        /// Rx FIFO Information Register
        (0x04c => pub rxfir: ReadOnly<u32, RXFIR::Register>),
        /// CAN Bit Timing Register
        (0x050 => pub cbt: ReadWrite<u32, CBT::Register>),
        (0x054 => _reserved4),
        /// Message buffers
        (0x080 => pub mb: [MessageBuffer; CAN_MB_COUNT]),
        (0x180 => _reserved5),
        /// Rx Individual Mask Registers
        (0x880 => pub rximr: [ReadWrite<u32>; CAN_RXIMR_COUNT]),
        (0x8c0 => @END),
    }
}

register_bitfields![u32,
    pub MCR [
        /// Number Of The Last Message Buffer
        MAXMB OFFSET(0) NUMBITS(7) [],
        /// ID Acceptance Mode
        IDAM OFFSET(8) NUMBITS(2) [
            FormatA = 0,
            FormatB = 1,
            FormatC = 2,
            FormatD = 3,
        ],
        /// Abort Enable
        AEN OFFSET(12) NUMBITS(1) [],
        /// Local Priority Enable
        LPRIOEN OFFSET(13) NUMBITS(1) [],
        /// DMA Enable
        DMA OFFSET(15) NUMBITS(1) [],
        /// Individual Rx Masking And Queue Enable
        IRMQ OFFSET(16) NUMBITS(1) [],
        /// Self Reception Disable
        SRXDIS OFFSET(17) NUMBITS(1) [],
        /// Doze Mode Enable
        DOZE OFFSET(18) NUMBITS(1) [],
        /// Wake Up Source
        WAKSRC OFFSET(19) NUMBITS(1) [],
        /// Low-Power Mode Acknowledge
        LPMACK OFFSET(20) NUMBITS(1) [],
        /// Warning Interrupt Enable
        WRNEN OFFSET(21) NUMBITS(1) [],
        /// Self Wake Up
        SLFWAK OFFSET(22) NUMBITS(1) [],
        /// Supervisor Mode
        SUPV OFFSET(23) NUMBITS(1) [],
        /// Freeze Mode Acknowledge
        FRZACK OFFSET(24) NUMBITS(1) [],
        /// Soft Reset
        SOFTRST OFFSET(25) NUMBITS(1) [],
        /// Wake Up Interrupt Mask
        WAKMSK OFFSET(26) NUMBITS(1) [],
        /// FlexCAN Not Ready
        NOTRDY OFFSET(27) NUMBITS(1) [],
        /// Halt FlexCAN
        HALT OFFSET(28) NUMBITS(1) [],
        /// Rx FIFO Enable
        RFEN OFFSET(29) NUMBITS(1) [],
        /// Freeze Enable
        FRZ OFFSET(30) NUMBITS(1) [],
        /// Module Disable
        MDIS OFFSET(31) NUMBITS(1) [],
    ],
    pub CTRL1 [
        /// Propagation Segment
        PROPSEG OFFSET(0) NUMBITS(3) [],
        /// Listen-Only Mode
        LOM OFFSET(3) NUMBITS(1) [],
        /// Lowest Buffer Transmitted First
        LBUF OFFSET(4) NUMBITS(1) [],
        /// Timer Sync
        TSYN OFFSET(5) NUMBITS(1) [],
        /// Bus Off Recovery
        BOFFREC OFFSET(6) NUMBITS(1) [],
        /// CAN Bit Sampling
        SMP OFFSET(7) NUMBITS(1) [],
        /// Rx Warning Interrupt Mask
        RWRNMSK OFFSET(10) NUMBITS(1) [],
        /// Tx Warning Interrupt Mask
        TWRNMSK OFFSET(11) NUMBITS(1) [],
        /// Loop Back Mode
        LPB OFFSET(12) NUMBITS(1) [],
        /// CAN Engine Clock Source
        CLKSRC OFFSET(13) NUMBITS(1) [
            Oscillator = 0,
            PeripheralClock = 1,
        ],
        /// Error Interrupt Mask
        ERRMSK OFFSET(14) NUMBITS(1) [],
        /// Bus Off Interrupt Mask
        BOFFMSK OFFSET(15) NUMBITS(1) [],
        /// Phase Segment 2
        PSEG2 OFFSET(16) NUMBITS(3) [],
        /// Phase Segment 1
        PSEG1 OFFSET(19) NUMBITS(3) [],
        /// Resync Jump Width
        RJW OFFSET(22) NUMBITS(2) [],
        /// Prescaler Division Factor
        PRESDIV OFFSET(24) NUMBITS(8) [],
    ],
    pub TIMER [
        /// Timer Value
        TIMER OFFSET(0) NUMBITS(16) [],
    ],
    pub ECR [
        /// Transmit Error Counter
        TXERRCNT OFFSET(0) NUMBITS(8) [],
        /// Receive Error Counter
        RXERRCNT OFFSET(8) NUMBITS(8) [],
    ],
    pub ESR1 [
        /// Wake-Up Interrupt
        WAKINT OFFSET(0) NUMBITS(1) [],
        /// Error Interrupt
        ERRINT OFFSET(1) NUMBITS(1) [],
        /// Bus Off Interrupt
        BOFFINT OFFSET(2) NUMBITS(1) [],
        /// FlexCAN In Reception
        RX OFFSET(3) NUMBITS(1) [],
        /// Fault Confinement State
        FLTCONF OFFSET(4) NUMBITS(2) [
            ErrorActive = 0,
            ErrorPassive = 1,
            BusOff = 2,
        ],
        /// FlexCAN In Transmission
        TX OFFSET(6) NUMBITS(1) [],
        /// Idle
        IDLE OFFSET(7) NUMBITS(1) [],
        /// Rx Error Warning
        RXWRN OFFSET(8) NUMBITS(1) [],
        /// TX Error Warning
        TXWRN OFFSET(9) NUMBITS(1) [],
        /// Stuffing Error
        STFERR OFFSET(10) NUMBITS(1) [],
        /// Form Error
        FRMERR OFFSET(11) NUMBITS(1) [],
        /// Cyclic Redundancy Check Error
        CRCERR OFFSET(12) NUMBITS(1) [],
        /// Acknowledge Error
        ACKERR OFFSET(13) NUMBITS(1) [],
        /// Bit0 Error
        BIT0ERR OFFSET(14) NUMBITS(1) [],
        /// Bit1 Error
        BIT1ERR OFFSET(15) NUMBITS(1) [],
        /// Rx Warning Interrupt Flag
        RWRNINT OFFSET(16) NUMBITS(1) [],
        /// Tx Warning Interrupt Flag
        TWRNINT OFFSET(17) NUMBITS(1) [],
        /// CAN Synchronization Status
        SYNCH OFFSET(18) NUMBITS(1) [],
        /// Bus Off Done Interrupt
        BOFFDONEINT OFFSET(19) NUMBITS(1) [],
        /// Error Overrun bit
        ERROVR OFFSET(21) NUMBITS(1) [],
    ],
    pub IFLAG1 [
        /// Buffer MB0 Interrupt Or Clear FIFO bit
        BUF0I OFFSET(0) NUMBITS(1) [],
        /// Buffer MB i Interrupt Or "reserved"
        BUF4TO1I OFFSET(1) NUMBITS(4) [],
        /// Buffer MB5 Interrupt Or "Frames available in Rx FIFO"
        BUF5I OFFSET(5) NUMBITS(1) [],
        /// Buffer MB6 Interrupt Or "Rx FIFO Warning"
        BUF6I OFFSET(6) NUMBITS(1) [],
        /// Buffer MB7 Interrupt Or "Rx FIFO Overflow"
        BUF7I OFFSET(7) NUMBITS(1) [],
        /// Buffer MBi Interrupt
        BUF31TO8I OFFSET(8) NUMBITS(24) [],
    ],
    pub CTRL2 [
        /// Entire Frame Arbitration Field Comparison Enable For Rx Mailboxes
        EACEN OFFSET(16) NUMBITS(1) [],
        /// Remote Request Storing
        RRS OFFSET(17) NUMBITS(1) [],
        /// Mailboxes Reception Priority
        MRP OFFSET(18) NUMBITS(1) [],
        /// Tx Arbitration Start Delay
        TASD OFFSET(19) NUMBITS(5) [],
        /// Number Of Rx FIFO Filters
        RFFN OFFSET(24) NUMBITS(4) [],
        /// Write-Access To Memory In Freeze Mode
        WRMFRZ OFFSET(28) NUMBITS(1) [],
        /// Bus Off Done Interrupt Mask
        BOFFDONEMSK OFFSET(30) NUMBITS(1) [],
    ],
    pub ESR2 [
        /// Inactive Mailbox
        IMB OFFSET(13) NUMBITS(1) [],
        /// Valid Priority Status
        VPS OFFSET(14) NUMBITS(1) [],
        /// Lowest Priority Tx Mailbox
        LPTM OFFSET(16) NUMBITS(7) [],
    ],
    pub CRCR [
        /// Transmitted CRC value
        TXCRC OFFSET(0) NUMBITS(15) [],
        /// CRC Mailbox
        MBCRC OFFSET(16) NUMBITS(7) [],
    ],
    pub RXFIR [
        /// Identifier Acceptance Filter Hit Indicator
        IDHIT OFFSET(0) NUMBITS(9) [],
    ],
    pub CBT [
        /// Extended Phase Segment 2
        EPSEG2 OFFSET(0) NUMBITS(5) [],
        /// Extended Phase Segment 1
        EPSEG1 OFFSET(5) NUMBITS(5) [],
        /// Extended Propagation Segment
        EPROPSEG OFFSET(10) NUMBITS(6) [],
        /// Extended Resync Jump Width
        ERJW OFFSET(16) NUMBITS(5) [],
        /// Extended Prescaler Division Factor
        EPRESDIV OFFSET(21) NUMBITS(10) [],
        /// Bit Timing Format Enable
        BTF OFFSET(31) NUMBITS(1) [],
    ],
    pub CS [
        /// Free-Running Counter Time stamp
        TIME_STAMP OFFSET(0) NUMBITS(16) [],
        /// Length of the data to be stored/transmitted
        DLC OFFSET(16) NUMBITS(4) [],
        /// Remote Transmission Request
        RTR OFFSET(20) NUMBITS(1) [],
        /// ID Extended
        IDE OFFSET(21) NUMBITS(1) [],
        /// Substitute Remote Request
        SRR OFFSET(22) NUMBITS(1) [],
        /// Message Buffer Code
        CODE OFFSET(24) NUMBITS(4) [
            RxInactive = 0x0,
            RxBusy = 0x1,
            RxFull = 0x2,
            RxEmpty = 0x4,
            RxOverrun = 0x6,
            TxInactive = 0x8,
            TxAbort = 0x9,
            RxRanswer = 0xa,
            TxData = 0xc,
            TxTanswer = 0xe,
        ],
    ],
    pub ID [
        /// Contains extended (LOW word) identifier of message buffer
        EXT OFFSET(0) NUMBITS(18) [],
        /// Contains standard/extended (HIGH word) identifier of message buffer
        STD OFFSET(18) NUMBITS(11) [],
        /// Local priority
        PRIO OFFSET(29) NUMBITS(3) [],
    ],
    pub WORD0 [
        DATA_BYTE_3 OFFSET(0) NUMBITS(8) [],
        DATA_BYTE_2 OFFSET(8) NUMBITS(8) [],
        DATA_BYTE_1 OFFSET(16) NUMBITS(8) [],
        DATA_BYTE_0 OFFSET(24) NUMBITS(8) [],
    ],
    pub WORD1 [
        DATA_BYTE_7 OFFSET(0) NUMBITS(8) [],
        DATA_BYTE_6 OFFSET(8) NUMBITS(8) [],
        DATA_BYTE_5 OFFSET(16) NUMBITS(8) [],
        DATA_BYTE_4 OFFSET(24) NUMBITS(8) [],
    ],
];

pub const CAN0_BASE_ADDR: usize = 0x4002_4000;
pub const CAN1_BASE_ADDR: usize = 0x4002_5000;

pub const CAN0_BASE: StaticRef<CanRegisters> =
    unsafe { StaticRef::new(CAN0_BASE_ADDR as *const CanRegisters) };
pub const CAN1_BASE: StaticRef<CanRegisters> =
    unsafe { StaticRef::new(CAN1_BASE_ADDR as *const CanRegisters) };

pub const CAN_BASE_ADDRS: [usize; 2] = [CAN0_BASE_ADDR, CAN1_BASE_ADDR];
pub const CAN_BASE_PTRS: [StaticRef<CanRegisters>; 2] = [CAN0_BASE, CAN1_BASE];

pub const CAN_ORED_IRQS: [u32; 2] = [nvic::CAN0_ORed, nvic::CAN1_ORed];
pub const CAN_ERROR_IRQS: [u32; 2] = [nvic::CAN0_Error, nvic::CAN1_Error];
/// CAN1 has no wake-up line.
pub const CAN_WAKE_UP_IRQS: [Option<u32>; 2] = [Some(nvic::CAN0_Wake_Up), None];
pub const CAN_ORED_MESSAGE_BUFFER_IRQS: [u32; 2] = [
    nvic::CAN0_ORed_Message_buffer,
    nvic::CAN1_ORed_Message_buffer,
];

instance_lookup!(CAN_BASE_ADDRS);

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::{offset_of, size_of};
    use tock_registers::LocalRegisterCopy;

    #[test]
    fn layout() {
        assert_eq!(size_of::<MessageBuffer>(), 16);
        assert_eq!(offset_of!(CanRegisters, iflag1), 0x30);
        assert_eq!(offset_of!(CanRegisters, cbt), 0x50);
        assert_eq!(offset_of!(CanRegisters, mb), 0x80);
        assert_eq!(
            offset_of!(CanRegisters, mb) + CAN_MB_COUNT * size_of::<MessageBuffer>(),
            0x80 + CAN_RAMN_COUNT * 4
        );
        assert_eq!(offset_of!(CanRegisters, rximr), 0x880);
    }

    #[test]
    fn message_buffer_fields() {
        let mut cs = LocalRegisterCopy::<u32, CS::Register>::new(0);
        cs.modify(CS::CODE::TxData + CS::DLC.val(8) + CS::SRR::SET);
        assert_eq!(cs.get(), 0x0c48_0000);
        assert!(cs.matches_all(CS::CODE::TxData));

        assert_eq!(ID::STD.val(0x123).value, 0x123 << 18);
        assert_eq!(ID::STD.val(0xfff).value, 0x7ff << 18);
        assert_eq!(ID::EXT.mask, 0x3_ffff);

        let word0 = LocalRegisterCopy::<u32, WORD0::Register>::new(0x1122_3344);
        assert_eq!(word0.read(WORD0::DATA_BYTE_0), 0x11);
        assert_eq!(word0.read(WORD0::DATA_BYTE_3), 0x44);
    }

    #[test]
    fn fault_confinement() {
        let esr1 = LocalRegisterCopy::<u32, ESR1::Register>::new(0x20);
        assert_eq!(
            esr1.read_as_enum(ESR1::FLTCONF),
            Some(ESR1::FLTCONF::Value::BusOff)
        );
        assert_eq!(CTRL1::PRESDIV.val(0xff).value, 0xff00_0000);
    }

    #[test]
    fn interrupts() {
        assert_eq!(CAN_WAKE_UP_IRQS, [Some(80), None]);
        assert_eq!(CAN_ORED_MESSAGE_BUFFER_IRQS, [81, 88]);
        assert_eq!(instance(CAN1_BASE_ADDR), Ok(1));
        assert_eq!(CAN_BASE_PTRS[0].addr(), CAN0_BASE_ADDR);
    }
}
