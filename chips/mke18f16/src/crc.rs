// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Cyclic redundancy check unit.
//!
//! The 32-bit data register can also be accessed by byte or halfword lanes;
//! [`CrcRegisters::data_lane`] exposes the byte view.

use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

use crate::helpers::instance_lookup;
use crate::static_ref::StaticRef;

register_structs! {
    pub CrcRegisters {
        /// CRC Data register
        (0x0 => pub data: ReadWrite<u32, DATA::Register>),
        /// CRC Polynomial register
        (0x4 => pub gpoly: ReadWrite<u32, GPOLY::Register>),
        /// CRC Control register
        (0x8 => pub ctrl: ReadWrite<u32, CTRL::Register>),
        (0xc => @END),
    }
}

register_bitfields![u32,
    pub DATA [
        LL OFFSET(0) NUMBITS(8) [],
        LU OFFSET(8) NUMBITS(8) [],
        HL OFFSET(16) NUMBITS(8) [],
        HU OFFSET(24) NUMBITS(8) [],
    ],
    pub GPOLY [
        /// Low Polynominal Half-word
        LOW OFFSET(0) NUMBITS(16) [],
        /// High Polynominal Half-word
        HIGH OFFSET(16) NUMBITS(16) [],
    ],
    pub CTRL [
        /// Width of CRC protocol
        TCRC OFFSET(24) NUMBITS(1) [
            Crc16 = 0,
            Crc32 = 1,
        ],
        /// Write CRC Data Register As Seed
        WAS OFFSET(25) NUMBITS(1) [],
        /// Complement Read Of CRC Data Register
        FXOR OFFSET(26) NUMBITS(1) [],
        /// Type Of Transpose For Read
        TOTR OFFSET(28) NUMBITS(2) [
            NoTranspose = 0,
            BitsInBytes = 1,
            BitsAndBytes = 2,
            Bytes = 3,
        ],
        /// Type Of Transpose For Writes
        TOT OFFSET(30) NUMBITS(2) [
            NoTranspose = 0,
            BitsInBytes = 1,
            BitsAndBytes = 2,
            Bytes = 3,
        ],
    ],
];

impl CrcRegisters {
    /// Pointer to byte `lane` (0 = LL .. 3 = HU) of the data register.
    ///
    /// Byte writes feed eight bits into the engine instead of 32.
    pub fn data_lane(&self, lane: usize) -> Option<*mut u8> {
        if lane < 4 {
            let base = core::ptr::addr_of!(self.data) as *mut u8;
            // SAFETY: lane is within the 4-byte data register.
            Some(unsafe { base.add(lane) })
        } else {
            None
        }
    }
}

pub const CRC_BASE_ADDR: usize = 0x4003_2000;

pub const CRC_BASE: StaticRef<CrcRegisters> =
    unsafe { StaticRef::new(CRC_BASE_ADDR as *const CrcRegisters) };

pub const CRC_BASE_ADDRS: [usize; 1] = [CRC_BASE_ADDR];
pub const CRC_BASE_PTRS: [StaticRef<CrcRegisters>; 1] = [CRC_BASE];

instance_lookup!(CRC_BASE_ADDRS);

#[cfg(test)]
mod tests {
    use super::*;
    use tock_registers::LocalRegisterCopy;

    #[test]
    fn crc32_setup() {
        let mut ctrl = LocalRegisterCopy::<u32, CTRL::Register>::new(0);
        ctrl.modify(
            CTRL::TCRC::Crc32 + CTRL::TOT::BitsInBytes + CTRL::TOTR::BitsAndBytes + CTRL::FXOR::SET,
        );
        assert_eq!(ctrl.get(), 0x6500_0000);
        ctrl.modify(CTRL::WAS::SET);
        assert!(ctrl.is_set(CTRL::WAS));
    }

    #[test]
    fn byte_lanes() {
        let backing = [0u32; 3];
        let regs: &CrcRegisters = unsafe { &*(backing.as_ptr() as *const CrcRegisters) };
        let base = core::ptr::addr_of!(regs.data) as usize;
        assert_eq!(regs.data_lane(0).map(|p| p as usize), Some(base));
        assert_eq!(regs.data_lane(3).map(|p| p as usize), Some(base + 3));
        assert!(regs.data_lane(4).is_none());
    }

    #[test]
    fn single_instance() {
        assert_eq!(instance(CRC_BASE_ADDR), Ok(0));
        assert!(instance(CRC_BASE_ADDR + 4).is_err());
    }
}
