// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Flexible I/O with four shifters and four timers.
//!
//! Each shifter buffer is mirrored four times: plain, bit swapped, byte
//! swapped and bit-byte swapped.

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::helpers::instance_lookup;
use crate::nvic;
use crate::static_ref::StaticRef;

pub const FLEXIO_SHIFTER_COUNT: usize = 4;
pub const FLEXIO_TIMER_COUNT: usize = 4;

register_structs! {
    pub FlexioRegisters {
        /// Version ID Register
        (0x000 => pub verid: ReadOnly<u32, VERID::Register>),
        /// Parameter Register
        (0x004 => pub param: ReadOnly<u32, PARAM::Register>),
        /// FlexIO Control Register
        (0x008 => pub ctrl: ReadWrite<u32, CTRL::Register>),
        /// Pin State Register
        (0x00c => pub pin: ReadOnly<u32>),
        /// Shifter Status Register
        (0x010 => pub shiftstat: ReadWrite<u32>),
        /// Shifter Error Register
        (0x014 => pub shifterr: ReadWrite<u32>),
        /// Timer Status Register
        (0x018 => pub timstat: ReadWrite<u32>),
        (0x01c => _reserved0),
        /// Shifter Status Interrupt Enable
        (0x020 => pub shiftsien: ReadWrite<u32>),
        /// Shifter Error Interrupt Enable
        (0x024 => pub shifteien: ReadWrite<u32>),
        /// Timer Interrupt Enable Register
        (0x028 => pub timien: ReadWrite<u32>),
        (0x02c => _reserved1),
        /// Shifter Status DMA Enable
        (0x030 => pub shiftsden: ReadWrite<u32>),
        (0x034 => _reserved2),
        /// Shifter Control N Register
        (0x080 => pub shiftctl: [ReadWrite<u32, SHIFTCTL::Register>; FLEXIO_SHIFTER_COUNT]),
        (0x090 => _reserved3),
        /// Shifter Configuration N Register
        (0x100 => pub shiftcfg: [ReadWrite<u32, SHIFTCFG::Register>; FLEXIO_SHIFTER_COUNT]),
        (0x110 => _reserved4),
        /// Shifter Buffer N Register
        (0x200 => pub shiftbuf: [ReadWrite<u32>; FLEXIO_SHIFTER_COUNT]),
        (0x210 => _reserved5),
        /// Shifter Buffer N Bit Swapped Register
        (0x280 => pub shiftbufbis: [ReadWrite<u32>; FLEXIO_SHIFTER_COUNT]),
        (0x290 => _reserved6),
        /// Shifter Buffer N Byte Swapped Register
        (0x300 => pub shiftbufbys: [ReadWrite<u32>; FLEXIO_SHIFTER_COUNT]),
        (0x310 => _reserved7),
        /// Shifter Buffer N Bit Byte Swapped Register
        (0x380 => pub shiftbufbbs: [ReadWrite<u32>; FLEXIO_SHIFTER_COUNT]),
        (0x390 => _reserved8),
        /// Timer Control N Register
        (0x400 => pub timctl: [ReadWrite<u32, TIMCTL::Register>; FLEXIO_TIMER_COUNT]),
        (0x410 => _reserved9),
        /// Timer Configuration N Register
        (0x480 => pub timcfg: [ReadWrite<u32, TIMCFG::Register>; FLEXIO_TIMER_COUNT]),
        (0x490 => _reserved10),
        /// Timer Compare N Register
        (0x500 => pub timcmp: [ReadWrite<u32, TIMCMP::Register>; FLEXIO_TIMER_COUNT]),
        (0x510 => @END),
    }
}

register_bitfields![u32,
    pub VERID [
        FEATURE OFFSET(0) NUMBITS(16) [],
        MINOR OFFSET(16) NUMBITS(8) [],
        MAJOR OFFSET(24) NUMBITS(8) [],
    ],
    pub PARAM [
        SHIFTER OFFSET(0) NUMBITS(8) [],
        TIMER OFFSET(8) NUMBITS(8) [],
        PIN OFFSET(16) NUMBITS(8) [],
        TRIGGER OFFSET(24) NUMBITS(8) [],
    ],
    pub CTRL [
        /// FlexIO Enable
        FLEXEN OFFSET(0) NUMBITS(1) [],
        /// Software Reset
        SWRST OFFSET(1) NUMBITS(1) [],
        /// Fast Access
        FASTACC OFFSET(2) NUMBITS(1) [],
        /// Debug Enable
        DBGE OFFSET(30) NUMBITS(1) [],
        /// Doze Enable
        DOZEN OFFSET(31) NUMBITS(1) [],
    ],
    pub SHIFTCTL [
        /// Shifter Mode
        SMOD OFFSET(0) NUMBITS(3) [
            Disabled = 0,
            Receive = 1,
            Transmit = 2,
            MatchStore = 4,
            MatchContinuous = 5,
        ],
        /// Shifter Pin Polarity
        PINPOL OFFSET(7) NUMBITS(1) [],
        /// Shifter Pin Select
        PINSEL OFFSET(8) NUMBITS(3) [],
        /// Shifter Pin Configuration
        PINCFG OFFSET(16) NUMBITS(2) [
            Disabled = 0,
            OpenDrain = 1,
            BidirectionalOutput = 2,
            Output = 3,
        ],
        /// Timer Polarity
        TIMPOL OFFSET(23) NUMBITS(1) [],
        /// Timer Select
        TIMSEL OFFSET(24) NUMBITS(2) [],
    ],
    pub SHIFTCFG [
        /// Shifter Start bit
        SSTART OFFSET(0) NUMBITS(2) [],
        /// Shifter Stop bit
        SSTOP OFFSET(4) NUMBITS(2) [],
        /// Input Source
        INSRC OFFSET(8) NUMBITS(1) [],
    ],
    pub TIMCTL [
        /// Timer Mode
        TIMOD OFFSET(0) NUMBITS(2) [
            Disabled = 0,
            DualBaud8Bit = 1,
            DualPwm8Bit = 2,
            Single16Bit = 3,
        ],
        /// Timer Pin Polarity
        PINPOL OFFSET(7) NUMBITS(1) [],
        /// Timer Pin Select
        PINSEL OFFSET(8) NUMBITS(3) [],
        /// Timer Pin Configuration
        PINCFG OFFSET(16) NUMBITS(2) [],
        /// Trigger Source
        TRGSRC OFFSET(22) NUMBITS(1) [],
        /// Trigger Polarity
        TRGPOL OFFSET(23) NUMBITS(1) [],
        /// Trigger Select
        TRGSEL OFFSET(24) NUMBITS(4) [],
    ],
    pub TIMCFG [
        /// Timer Start Bit
        TSTART OFFSET(1) NUMBITS(1) [],
        /// Timer Stop Bit
        TSTOP OFFSET(4) NUMBITS(2) [],
        /// Timer Enable
        TIMENA OFFSET(8) NUMBITS(3) [],
        /// Timer Disable
        TIMDIS OFFSET(12) NUMBITS(3) [],
        /// Timer Reset
        TIMRST OFFSET(16) NUMBITS(3) [],
        /// Timer Decrement
        TIMDEC OFFSET(20) NUMBITS(2) [],
        /// Timer Output
        TIMOUT OFFSET(24) NUMBITS(2) [],
    ],
    pub TIMCMP [
        /// Timer Compare Value
        CMP OFFSET(0) NUMBITS(16) [],
    ],
];

pub const FLEXIO_BASE_ADDR: usize = 0x4005_A000;

pub const FLEXIO_BASE: StaticRef<FlexioRegisters> =
    unsafe { StaticRef::new(FLEXIO_BASE_ADDR as *const FlexioRegisters) };

pub const FLEXIO_BASE_ADDRS: [usize; 1] = [FLEXIO_BASE_ADDR];
pub const FLEXIO_BASE_PTRS: [StaticRef<FlexioRegisters>; 1] = [FLEXIO_BASE];
pub const FLEXIO_IRQS: [u32; 1] = [nvic::FLEXIO];

instance_lookup!(FLEXIO_BASE_ADDRS);

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::{offset_of, size_of};

    #[test]
    fn layout() {
        assert_eq!(offset_of!(FlexioRegisters, shiftsden), 0x30);
        assert_eq!(offset_of!(FlexioRegisters, shiftbufbbs), 0x380);
        assert_eq!(offset_of!(FlexioRegisters, timcmp), 0x500);
        assert_eq!(size_of::<FlexioRegisters>(), 0x510);
    }

    #[test]
    fn uart_tx_shifter() {
        let value = (SHIFTCTL::SMOD::Transmit
            + SHIFTCTL::PINCFG::Output
            + SHIFTCTL::PINSEL.val(2)
            + SHIFTCTL::TIMSEL.val(1))
        .value;
        assert_eq!(value, 0x0103_0202);
        assert_eq!(TIMCTL::TRGSEL.mask, 0xf);
    }
}
