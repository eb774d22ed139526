// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! eDMA controller with 16 channels.
//!
//! Channel priorities are stored byte-reversed within each 32-bit word of
//! the DCHPRI block; use [`ChannelPriorityRegisters`] indexing rather than
//! raw offsets. Channels are routed to peripheral requests by the
//! [`dmamux`](crate::dmamux).

use core::ops::Index;

use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

use crate::helpers::{instance_lookup, word_swapped_index};
use crate::nvic;
use crate::static_ref::StaticRef;

/// Number of DMA channels.
pub const DMA_CHANNEL_COUNT: usize = 16;

register_structs! {
    /// Transfer control descriptor for a single channel.
    pub TransferControlDescriptor {
        /// Source Address
        (0x00 => pub saddr: ReadWrite<u32>),
        /// Signed Source Address Offset
        (0x04 => pub soff: ReadWrite<u16>),
        /// Transfer Attributes
        (0x06 => pub attr: ReadWrite<u16, ATTR::Register>),
        /// Minor byte count. Layout depends on CR[EMLM] and the SMLOE/DMLOE bits.
        (0x08 => pub nbytes: ReadWrite<u32, NBYTES::Register>),
        /// Last Source Address Adjustment
        (0x0c => pub slast: ReadWrite<u32>),
        /// Destination Address
        (0x10 => pub daddr: ReadWrite<u32>),
        /// Signed Destination Address Offset
        (0x14 => pub doff: ReadWrite<u16>),
        /// Current Minor Loop Link, Major Loop Count
        (0x16 => pub citer: ReadWrite<u16, ITER::Register>),
        /// Last Destination Address Adjustment/Scatter Gather Address
        (0x18 => pub dlast_sga: ReadWrite<u32>),
        /// Control and Status
        (0x1c => pub csr: ReadWrite<u16, CSR::Register>),
        /// Beginning Minor Loop Link, Major Loop Count
        (0x1e => pub biter: ReadWrite<u16, ITER::Register>),
        (0x20 => @END),
    }
}

/// Channel priority registers, indexed by channel number.
#[repr(transparent)]
pub struct ChannelPriorityRegisters([ReadWrite<u8, DCHPRI::Register>; DMA_CHANNEL_COUNT]);

/// Byte offset of channel `channel`'s priority register within DCHPRI.
///
/// Pattern is 3, 2, 1, 0, 7, 6, 5, 4, 11, ...
pub const fn dchpri_index(channel: usize) -> usize {
    word_swapped_index(channel)
}

impl Index<usize> for ChannelPriorityRegisters {
    type Output = ReadWrite<u8, DCHPRI::Register>;
    fn index(&self, channel: usize) -> &ReadWrite<u8, DCHPRI::Register> {
        &self.0[dchpri_index(channel)]
    }
}

register_structs! {
    pub DmaRegisters {
        /// Control Register
        (0x000 => pub cr: ReadWrite<u32, CR::Register>),
        /// Error Status Register
        (0x004 => pub es: ReadOnly<u32, ES::Register>),
        (0x008 => _reserved0),
        /// Enable Request Register
        (0x00c => pub erq: ReadWrite<u32>),
        (0x010 => _reserved1),
        /// Enable Error Interrupt Register
        (0x014 => pub eei: ReadWrite<u32>),
        /// Clear Enable Error Interrupt Register
        (0x018 => pub ceei: WriteOnly<u8, CHANNEL_OP::Register>),
        /// Set Enable Error Interrupt Register
        (0x019 => pub seei: WriteOnly<u8, CHANNEL_OP::Register>),
        /// Clear Enable Request Register
        (0x01a => pub cerq: WriteOnly<u8, CHANNEL_OP::Register>),
        /// Set Enable Request Register
        (0x01b => pub serq: WriteOnly<u8, CHANNEL_OP::Register>),
        /// Clear DONE Status Bit Register
        (0x01c => pub cdne: WriteOnly<u8, CHANNEL_OP::Register>),
        /// Set START Bit Register
        (0x01d => pub ssrt: WriteOnly<u8, CHANNEL_OP::Register>),
        /// Clear Error Register
        (0x01e => pub cerr: WriteOnly<u8, CHANNEL_OP::Register>),
        /// Clear Interrupt Request Register
        (0x01f => pub cint: WriteOnly<u8, CHANNEL_OP::Register>),
        (0x020 => _reserved2),
        /// Interrupt Request Register
        (0x024 => pub int: ReadWrite<u32>),
        (0x028 => _reserved3),
        /// Error Register
        (0x02c => pub err: ReadWrite<u32>),
        (0x030 => _reserved4),
        /// Hardware Request Status Register
        (0x034 => pub hrs: ReadOnly<u32>),
        (0x038 => _reserved5),
        /// Enable Asynchronous Request in Stop Register
        (0x044 => pub ears: ReadWrite<u32>),
        (0x048 => _reserved6),
        /// Channel Priority Registers
        (0x100 => pub dchpri: ChannelPriorityRegisters),
        (0x110 => _reserved7),
        (0x1000 => pub tcd: [TransferControlDescriptor; DMA_CHANNEL_COUNT]),
        (0x1200 => @END),
    }
}

register_bitfields![u8,
    pub DCHPRI [
        /// Channel n Arbitration Priority
        CHPRI OFFSET(0) NUMBITS(4) [],
        /// Disable Preempt Ability
        DPA OFFSET(6) NUMBITS(1) [],
        /// Enable Channel Preemption
        ECP OFFSET(7) NUMBITS(1) [],
    ],
    /// Shared layout of CEEI, SEEI, CERQ, SERQ, CDNE, SSRT, CERR and CINT.
    pub CHANNEL_OP [
        /// Channel number
        CHANNEL OFFSET(0) NUMBITS(4) [],
        /// Apply to all channels
        ALL OFFSET(6) NUMBITS(1) [],
        /// No Op enable
        NOP OFFSET(7) NUMBITS(1) [],
    ],
];

register_bitfields![u16,
    pub ATTR [
        /// Destination data transfer size
        DSIZE OFFSET(0) NUMBITS(3) [
            Bits8 = 0,
            Bits16 = 1,
            Bits32 = 2,
            Bytes16Burst = 4,
        ],
        /// Destination Address Modulo
        DMOD OFFSET(3) NUMBITS(5) [],
        /// Source data transfer size
        SSIZE OFFSET(8) NUMBITS(3) [
            Bits8 = 0,
            Bits16 = 1,
            Bits32 = 2,
            Bytes16Burst = 4,
        ],
        /// Source Address Modulo
        SMOD OFFSET(11) NUMBITS(5) [],
    ],
    /// CITER and BITER. With ELINK set, bits 9..12 carry the link channel and
    /// the count shrinks to nine bits.
    pub ITER [
        /// Major Iteration Count, minor channel linking disabled
        ITER OFFSET(0) NUMBITS(15) [],
        /// Major Iteration Count, minor channel linking enabled
        ITER_LINKED OFFSET(0) NUMBITS(9) [],
        /// Minor Loop Link Channel Number
        LINKCH OFFSET(9) NUMBITS(4) [],
        /// Enable channel-to-channel linking on minor-loop complete
        ELINK OFFSET(15) NUMBITS(1) [],
    ],
    pub CSR [
        /// Channel Start
        START OFFSET(0) NUMBITS(1) [],
        /// Enable an interrupt when major iteration count completes.
        INTMAJOR OFFSET(1) NUMBITS(1) [],
        /// Enable an interrupt when major counter is half complete.
        INTHALF OFFSET(2) NUMBITS(1) [],
        /// Disable Request
        DREQ OFFSET(3) NUMBITS(1) [],
        /// Enable Scatter/Gather Processing
        ESG OFFSET(4) NUMBITS(1) [],
        /// Enable channel-to-channel linking on major loop complete
        MAJORELINK OFFSET(5) NUMBITS(1) [],
        /// Channel Active
        ACTIVE OFFSET(6) NUMBITS(1) [],
        /// Channel Done
        DONE OFFSET(7) NUMBITS(1) [],
        /// Major Loop Link Channel Number
        MAJORLINKCH OFFSET(8) NUMBITS(4) [],
        /// Bandwidth Control
        BWC OFFSET(14) NUMBITS(2) [
            NoStalls = 0,
            FourCycles = 2,
            EightCycles = 3,
        ],
    ],
];

register_bitfields![u32,
    pub CR [
        /// Enable Debug
        EDBG OFFSET(1) NUMBITS(1) [],
        /// Enable Round Robin Channel Arbitration
        ERCA OFFSET(2) NUMBITS(1) [],
        /// Halt On Error
        HOE OFFSET(4) NUMBITS(1) [],
        /// Halt DMA Operations
        HALT OFFSET(5) NUMBITS(1) [],
        /// Continuous Link Mode
        CLM OFFSET(6) NUMBITS(1) [],
        /// Enable Minor Loop Mapping
        EMLM OFFSET(7) NUMBITS(1) [],
        /// Error Cancel Transfer
        ECX OFFSET(16) NUMBITS(1) [],
        /// Cancel Transfer
        CX OFFSET(17) NUMBITS(1) [],
        /// DMA Active Status
        ACTIVE OFFSET(31) NUMBITS(1) [],
    ],
    pub ES [
        /// Destination Bus Error
        DBE OFFSET(0) NUMBITS(1) [],
        /// Source Bus Error
        SBE OFFSET(1) NUMBITS(1) [],
        /// Scatter/Gather Configuration Error
        SGE OFFSET(2) NUMBITS(1) [],
        /// NBYTES/CITER Configuration Error
        NCE OFFSET(3) NUMBITS(1) [],
        /// Destination Offset Error
        DOE OFFSET(4) NUMBITS(1) [],
        /// Destination Address Error
        DAE OFFSET(5) NUMBITS(1) [],
        /// Source Offset Error
        SOE OFFSET(6) NUMBITS(1) [],
        /// Source Address Error
        SAE OFFSET(7) NUMBITS(1) [],
        /// Error Channel Number or Canceled Channel Number
        ERRCHN OFFSET(8) NUMBITS(4) [],
        /// Channel Priority Error
        CPE OFFSET(14) NUMBITS(1) [],
        /// Transfer Canceled
        ECX OFFSET(16) NUMBITS(1) [],
        /// Logical OR of all ERR status bits
        VLD OFFSET(31) NUMBITS(1) [],
    ],
    /// NBYTES in its three layouts. MLNO when EMLM is clear, MLOFFNO or
    /// MLOFFYES when EMLM is set depending on whether an offset is applied.
    pub NBYTES [
        /// Minor Byte Transfer Count (MLNO)
        NBYTES OFFSET(0) NUMBITS(32) [],
        /// Minor Byte Transfer Count (MLOFFNO)
        NBYTES_MLOFFNO OFFSET(0) NUMBITS(30) [],
        /// Minor Byte Transfer Count (MLOFFYES)
        NBYTES_MLOFFYES OFFSET(0) NUMBITS(10) [],
        /// Minor loop offset
        MLOFF OFFSET(10) NUMBITS(20) [],
        /// Destination Minor Loop Offset enable
        DMLOE OFFSET(30) NUMBITS(1) [],
        /// Source Minor Loop Offset Enable
        SMLOE OFFSET(31) NUMBITS(1) [],
    ],
];

pub const DMA0_BASE_ADDR: usize = 0x4000_8000;

pub const DMA0_BASE: StaticRef<DmaRegisters> =
    unsafe { StaticRef::new(DMA0_BASE_ADDR as *const DmaRegisters) };

pub const DMA_BASE_ADDRS: [usize; 1] = [DMA0_BASE_ADDR];
pub const DMA_BASE_PTRS: [StaticRef<DmaRegisters>; 1] = [DMA0_BASE];

/// Per-channel completion interrupts.
pub const DMA_CHN_IRQS: [u32; DMA_CHANNEL_COUNT] = [
    nvic::DMA0,
    nvic::DMA1,
    nvic::DMA2,
    nvic::DMA3,
    nvic::DMA4,
    nvic::DMA5,
    nvic::DMA6,
    nvic::DMA7,
    nvic::DMA8,
    nvic::DMA9,
    nvic::DMA10,
    nvic::DMA11,
    nvic::DMA12,
    nvic::DMA13,
    nvic::DMA14,
    nvic::DMA15,
];
pub const DMA_ERROR_IRQS: [u32; 1] = [nvic::DMA_Error];

instance_lookup!(DMA_BASE_ADDRS);

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::{offset_of, size_of};
    use tock_registers::LocalRegisterCopy;

    #[test]
    fn layout() {
        assert_eq!(size_of::<TransferControlDescriptor>(), 32);
        assert_eq!(offset_of!(TransferControlDescriptor, csr), 0x1c);
        assert_eq!(offset_of!(DmaRegisters, serq), 0x1b);
        assert_eq!(offset_of!(DmaRegisters, ears), 0x44);
        assert_eq!(offset_of!(DmaRegisters, dchpri), 0x100);
        assert_eq!(offset_of!(DmaRegisters, tcd), 0x1000);
        assert_eq!(size_of::<DmaRegisters>(), 0x1200);
    }

    #[test]
    fn priority_swizzle() {
        let order: Vec<usize> = (0..8).map(dchpri_index).collect();
        assert_eq!(order, [3, 2, 1, 0, 7, 6, 5, 4]);
        assert_eq!(dchpri_index(15), 12);
    }

    #[test]
    fn descriptor_fields() {
        let mut attr = LocalRegisterCopy::<u16, ATTR::Register>::new(0);
        attr.modify(ATTR::SSIZE::Bits32 + ATTR::DSIZE::Bits16);
        assert_eq!(attr.get(), 0x0201);

        let mut csr = LocalRegisterCopy::<u16, CSR::Register>::new(0);
        csr.modify(CSR::INTMAJOR::SET + CSR::DREQ::SET + CSR::MAJORLINKCH.val(5));
        assert_eq!(csr.get(), 0x050a);

        let iter = LocalRegisterCopy::<u16, ITER::Register>::new(0x8000 | (3 << 9) | 100);
        assert!(iter.is_set(ITER::ELINK));
        assert_eq!(iter.read(ITER::LINKCH), 3);
        assert_eq!(iter.read(ITER::ITER_LINKED), 100);

        assert_eq!(CHANNEL_OP::ALL::SET.value, 0x40);
    }

    #[test]
    fn interrupts() {
        assert_eq!(DMA_CHN_IRQS[0], 0);
        assert_eq!(DMA_CHN_IRQS[15], 15);
        assert_eq!(DMA_ERROR_IRQS, [16]);
        assert_eq!(instance(DMA0_BASE_ADDR), Ok(0));
    }
}
