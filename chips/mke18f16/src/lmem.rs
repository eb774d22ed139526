// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Local memory controller: code bus cache control.

use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

use crate::helpers::instance_lookup;
use crate::static_ref::StaticRef;

register_structs! {
    pub LmemRegisters {
        /// Cache control register
        (0x00 => pub pcccr: ReadWrite<u32, PCCCR::Register>),
        /// Cache line control register
        (0x04 => pub pcclcr: ReadWrite<u32, PCCLCR::Register>),
        /// Cache search address register
        (0x08 => pub pccsar: ReadWrite<u32, PCCSAR::Register>),
        /// Cache read/write value register
        (0x0c => pub pcccvr: ReadWrite<u32>),
        (0x10 => _reserved0),
        /// Cache regions mode register
        (0x20 => pub pccrmr: ReadWrite<u32>),
        (0x24 => @END),
    }
}

register_bitfields![u32,
    pub PCCCR [
        /// Cache enable
        ENCACHE OFFSET(0) NUMBITS(1) [],
        /// Forces all cacheable spaces to write through
        PCCR2 OFFSET(2) NUMBITS(1) [],
        /// Forces no allocation on cache misses
        PCCR3 OFFSET(3) NUMBITS(1) [],
        /// Invalidate Way 0
        INVW0 OFFSET(24) NUMBITS(1) [],
        /// Push Way 0
        PUSHW0 OFFSET(25) NUMBITS(1) [],
        /// Invalidate Way 1
        INVW1 OFFSET(26) NUMBITS(1) [],
        /// Push Way 1
        PUSHW1 OFFSET(27) NUMBITS(1) [],
        /// Initiate Cache Command
        GO OFFSET(31) NUMBITS(1) [],
    ],
    pub PCCLCR [
        /// Initiate Cache Line Command
        LGO OFFSET(0) NUMBITS(1) [],
        /// Cache Index
        CACHEADDR OFFSET(2) NUMBITS(9) [],
        /// Way select
        WSEL OFFSET(14) NUMBITS(1) [],
        /// Tag/Data Select
        TDSEL OFFSET(16) NUMBITS(1) [],
        /// Line Command Initial Valid
        LCIVB OFFSET(20) NUMBITS(1) [],
        /// Line Command Initial Modified
        LCIMB OFFSET(21) NUMBITS(1) [],
        /// Line Command Way
        LCWAY OFFSET(22) NUMBITS(1) [],
        /// Line Command
        LCMD OFFSET(24) NUMBITS(2) [
            SearchReadWrite = 0,
            Invalidate = 1,
            Push = 2,
            Clear = 3,
        ],
        /// Line Address Select
        LADSEL OFFSET(26) NUMBITS(1) [],
        /// Line access type
        LACC OFFSET(27) NUMBITS(1) [],
    ],
    pub PCCSAR [
        /// Initiate Cache Line Command
        LGO OFFSET(0) NUMBITS(1) [],
        /// Physical Address
        PHYADDR OFFSET(2) NUMBITS(30) [],
    ],
];

/// Invalidate both ways and start the command.
pub const PCCCR_INVALIDATE_ALL: u32 = 0x8500_0000;

pub const LMEM_BASE_ADDR: usize = 0xE008_2000;

pub const LMEM_BASE: StaticRef<LmemRegisters> =
    unsafe { StaticRef::new(LMEM_BASE_ADDR as *const LmemRegisters) };

pub const LMEM_BASE_ADDRS: [usize; 1] = [LMEM_BASE_ADDR];
pub const LMEM_BASE_PTRS: [StaticRef<LmemRegisters>; 1] = [LMEM_BASE];

instance_lookup!(LMEM_BASE_ADDRS);

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::offset_of;

    #[test]
    fn layout() {
        assert_eq!(offset_of!(LmemRegisters, pccrmr), 0x20);
    }

    #[test]
    fn invalidate_command() {
        let cmd = PCCCR::GO::SET + PCCCR::INVW0::SET + PCCCR::INVW1::SET;
        assert_eq!(cmd.value, PCCCR_INVALIDATE_ALL);
        assert_eq!(PCCLCR::LCMD::Clear.value, 0x0300_0000);
    }
}
