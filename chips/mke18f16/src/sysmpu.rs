// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! System memory protection unit.
//!
//! Eight region descriptors, each with start and end addresses at 32-byte
//! granularity, per-master access rights and an optional process ID match.
//! RGDAAC provides an alias of WORD2 that can be written without
//! invalidating the descriptor.

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::helpers::instance_lookup;
use crate::static_ref::StaticRef;

pub const SYSMPU_SLAVE_PORT_COUNT: usize = 4;
pub const SYSMPU_REGION_COUNT: usize = 8;
pub const SYSMPU_REGION_ALIGN: u32 = 32;

register_structs! {
    /// Error capture for one slave port.
    pub SlavePortError {
        /// Error Address Register
        (0x0 => pub ear: ReadOnly<u32>),
        /// Error Detail Register
        (0x4 => pub edr: ReadOnly<u32, EDR::Register>),
        (0x8 => @END),
    }
}

register_structs! {
    pub RegionDescriptor {
        /// Region Descriptor Word 0, start address
        (0x0 => pub word0: ReadWrite<u32, WORD0::Register>),
        /// Region Descriptor Word 1, end address
        (0x4 => pub word1: ReadWrite<u32, WORD1::Register>),
        /// Region Descriptor Word 2, access control
        (0x8 => pub word2: ReadWrite<u32, WORD2::Register>),
        /// Region Descriptor Word 3, process ID and valid
        (0xc => pub word3: ReadWrite<u32, WORD3::Register>),
        (0x10 => @END),
    }
}

register_structs! {
    pub SysmpuRegisters {
        /// Control/Error Status Register
        (0x000 => pub cesr: ReadWrite<u32, CESR::Register>),
        (0x004 => _reserved0),
        (0x010 => pub sp: [SlavePortError; SYSMPU_SLAVE_PORT_COUNT]),
        (0x030 => _reserved1),
        (0x400 => pub rgd: [RegionDescriptor; SYSMPU_REGION_COUNT]),
        (0x480 => _reserved2),
        /// Region Descriptor Alternate Access Control
        (0x800 => pub rgdaac: [ReadWrite<u32, WORD2::Register>; SYSMPU_REGION_COUNT]),
        (0x820 => @END),
    }
}

register_bitfields![u32,
    pub CESR [
        /// Valid, global enable
        VLD OFFSET(0) NUMBITS(1) [],
        /// Number Of Region Descriptors
        NRGD OFFSET(8) NUMBITS(4) [],
        /// Number Of Slave Ports
        NSP OFFSET(12) NUMBITS(4) [],
        /// Hardware Revision Level
        HRL OFFSET(16) NUMBITS(4) [],
        /// Slave Port n Error, write 1 to clear
        SPERR OFFSET(27) NUMBITS(5) [],
    ],
    pub EDR [
        /// Error Read/Write
        ERW OFFSET(0) NUMBITS(1) [
            Read = 0,
            Write = 1,
        ],
        /// Error Attributes
        EATTR OFFSET(1) NUMBITS(3) [
            UserInstruction = 0,
            UserData = 1,
            SupervisorInstruction = 2,
            SupervisorData = 3,
        ],
        /// Error Master Number
        EMN OFFSET(4) NUMBITS(4) [],
        /// Error Process Identification
        EPID OFFSET(8) NUMBITS(8) [],
        /// Error Access Control Detail, one bit per region
        EACD OFFSET(16) NUMBITS(16) [],
    ],
    pub WORD0 [
        /// Start Address, bits 31:5
        SRTADDR OFFSET(5) NUMBITS(27) [],
    ],
    pub WORD1 [
        /// End Address, bits 31:5, inclusive
        ENDADDR OFFSET(5) NUMBITS(27) [],
    ],
    pub WORD2 [
        /// Bus Master 0 User Mode Access Control, rwx
        M0UM OFFSET(0) NUMBITS(3) [],
        /// Bus Master 0 Supervisor Mode Access Control
        M0SM OFFSET(3) NUMBITS(2) [
            ReadWriteExecute = 0,
            ReadExecute = 1,
            ReadWrite = 2,
            SameAsUser = 3,
        ],
        /// Bus Master 0 Process Identifier Enable
        M0PE OFFSET(5) NUMBITS(1) [],
        M1UM OFFSET(6) NUMBITS(3) [],
        M1SM OFFSET(9) NUMBITS(2) [
            ReadWriteExecute = 0,
            ReadExecute = 1,
            ReadWrite = 2,
            SameAsUser = 3,
        ],
        M1PE OFFSET(11) NUMBITS(1) [],
        M2UM OFFSET(12) NUMBITS(3) [],
        M2SM OFFSET(15) NUMBITS(2) [
            ReadWriteExecute = 0,
            ReadExecute = 1,
            ReadWrite = 2,
            SameAsUser = 3,
        ],
        M3UM OFFSET(18) NUMBITS(3) [],
        M3SM OFFSET(21) NUMBITS(2) [
            ReadWriteExecute = 0,
            ReadExecute = 1,
            ReadWrite = 2,
            SameAsUser = 3,
        ],
        /// Bus Master 4..7 write and read enables
        M4WE OFFSET(24) NUMBITS(1) [],
        M4RE OFFSET(25) NUMBITS(1) [],
        M5WE OFFSET(26) NUMBITS(1) [],
        M5RE OFFSET(27) NUMBITS(1) [],
        M6WE OFFSET(28) NUMBITS(1) [],
        M6RE OFFSET(29) NUMBITS(1) [],
        M7WE OFFSET(30) NUMBITS(1) [],
        M7RE OFFSET(31) NUMBITS(1) [],
    ],
    pub WORD3 [
        /// Valid
        VLD OFFSET(0) NUMBITS(1) [],
        /// Process Identifier Mask
        PIDMASK OFFSET(16) NUMBITS(8) [],
        /// Process Identifier
        PID OFFSET(24) NUMBITS(8) [],
    ],
];

/// WORD0/WORD1 values covering `[start, start + size)`.
///
/// Both ends are rounded outward to 32 bytes. A zero `size` yields the
/// single block containing `start`.
pub const fn region_words(start: u32, size: u32) -> (u32, u32) {
    let align_mask = SYSMPU_REGION_ALIGN - 1;
    let first = start & !align_mask;
    let last = start.saturating_add(size.saturating_sub(1)) | align_mask;
    (first, last)
}

pub const SYSMPU_BASE_ADDR: usize = 0x4000_D000;

pub const SYSMPU_BASE: StaticRef<SysmpuRegisters> =
    unsafe { StaticRef::new(SYSMPU_BASE_ADDR as *const SysmpuRegisters) };

pub const SYSMPU_BASE_ADDRS: [usize; 1] = [SYSMPU_BASE_ADDR];
pub const SYSMPU_BASE_PTRS: [StaticRef<SysmpuRegisters>; 1] = [SYSMPU_BASE];

instance_lookup!(SYSMPU_BASE_ADDRS);

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::{offset_of, size_of};
    use tock_registers::interfaces::{Readable, Writeable};

    #[test]
    fn layout() {
        assert_eq!(size_of::<SlavePortError>(), 8);
        assert_eq!(size_of::<RegionDescriptor>(), 16);
        assert_eq!(offset_of!(SysmpuRegisters, sp), 0x10);
        assert_eq!(offset_of!(SysmpuRegisters, rgd), 0x400);
        assert_eq!(offset_of!(SysmpuRegisters, rgdaac), 0x800);
        assert_eq!(size_of::<SysmpuRegisters>(), 0x820);
    }

    #[test]
    fn region_rounding() {
        assert_eq!(region_words(0x2000_0000, 0x8000), (0x2000_0000, 0x2000_7fff));
        assert_eq!(region_words(0x1fff_8010, 0x10), (0x1fff_8000, 0x1fff_801f));
        assert_eq!(region_words(0xffff_ffe0, 0x100), (0xffff_ffe0, 0xffff_ffff));
    }

    #[test]
    fn descriptor_writes() {
        let mut backing = [0u32; 0x820 / 4];
        let regs = unsafe { &*(backing.as_mut_ptr() as *const SysmpuRegisters) };
        let (start, end) = region_words(0x2000_0000, 0x1000);
        regs.rgd[1].word0.set(start);
        regs.rgd[1].word1.set(end);
        regs.rgd[1].word2.write(WORD2::M0UM.val(0b110) + WORD2::M0SM::SameAsUser);
        regs.rgd[1].word3.write(WORD3::VLD::SET);
        assert_eq!(backing[0x410 / 4], 0x2000_0000);
        assert_eq!(backing[0x414 / 4], 0x2000_0fff);
        assert_eq!(regs.rgd[1].word2.get(), 0x1e);
        assert_eq!(backing[0x41c / 4], 1);
    }
}
