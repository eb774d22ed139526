// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Flash memory module (FTFE).
//!
//! Commands are loaded into the FCCOB bytes and launched by clearing
//! FSTAT[CCIF]. The FCCOB and FPROT byte registers are stored big-endian
//! within each word, so FCCOB0 sits at offset 0x7. Index them through
//! [`FccobRegisters`] and [`FprotRegisters`] by their logical number.

use core::fmt;
use core::ops::Index;

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::helpers::{instance_lookup, u8_enum, word_swapped_index};
use crate::nvic;
use crate::static_ref::StaticRef;

pub const FTFE_FCCOB_COUNT: usize = 12;
pub const FTFE_FPROT_COUNT: usize = 4;

/// FCCOB0..FCCOBB, indexed by logical number.
#[repr(transparent)]
pub struct FccobRegisters([ReadWrite<u8>; FTFE_FCCOB_COUNT]);

impl Index<usize> for FccobRegisters {
    type Output = ReadWrite<u8>;
    fn index(&self, n: usize) -> &ReadWrite<u8> {
        &self.0[word_swapped_index(n)]
    }
}

/// FPROT0..FPROT3, indexed by logical number.
#[repr(transparent)]
pub struct FprotRegisters([ReadWrite<u8>; FTFE_FPROT_COUNT]);

impl Index<usize> for FprotRegisters {
    type Output = ReadWrite<u8>;
    fn index(&self, n: usize) -> &ReadWrite<u8> {
        &self.0[word_swapped_index(n)]
    }
}

register_structs! {
    pub FtfeRegisters {
        /// Flash Status Register
        (0x00 => pub fstat: ReadWrite<u8, FSTAT::Register>),
        /// Flash Configuration Register
        (0x01 => pub fcnfg: ReadWrite<u8, FCNFG::Register>),
        /// Flash Security Register
        (0x02 => pub fsec: ReadOnly<u8, FSEC::Register>),
        /// Flash Option Register
        (0x03 => pub fopt: ReadOnly<u8>),
        /// Flash Common Command Object Registers
        (0x04 => pub fccob: FccobRegisters),
        /// Program Flash Protection Registers
        (0x10 => pub fprot: FprotRegisters),
        (0x14 => _reserved0),
        /// EEPROM Protection Register
        (0x16 => pub feprot: ReadWrite<u8>),
        /// Data Flash Protection Register
        (0x17 => pub fdprot: ReadWrite<u8>),
        (0x18 => @END),
    }
}

register_bitfields![u8,
    pub FSTAT [
        /// Memory Controller Command Completion Status Flag
        MGSTAT0 OFFSET(0) NUMBITS(1) [],
        /// Flash Protection Violation Flag
        FPVIOL OFFSET(4) NUMBITS(1) [],
        /// Flash Access Error Flag
        ACCERR OFFSET(5) NUMBITS(1) [],
        /// Flash Read Collision Error Flag
        RDCOLERR OFFSET(6) NUMBITS(1) [],
        /// Command Complete Interrupt Flag
        CCIF OFFSET(7) NUMBITS(1) [],
    ],
    pub FCNFG [
        /// EEPROM backup data copied to FlexRAM and is available for read access
        EEERDY OFFSET(0) NUMBITS(1) [],
        /// RAM Ready
        RAMRDY OFFSET(1) NUMBITS(1) [],
        /// FTFE configuration
        PFLSH OFFSET(2) NUMBITS(1) [],
        /// Erase Suspend
        ERSSUSP OFFSET(4) NUMBITS(1) [],
        /// Erase All Request
        ERSAREQ OFFSET(5) NUMBITS(1) [],
        /// Read Collision Error Interrupt Enable
        RDCOLLIE OFFSET(6) NUMBITS(1) [],
        /// Command Complete Interrupt Enable
        CCIE OFFSET(7) NUMBITS(1) [],
    ],
    pub FSEC [
        /// Flash Security
        SEC OFFSET(0) NUMBITS(2) [
            Secure0 = 0,
            Secure1 = 1,
            Unsecure = 2,
            Secure3 = 3,
        ],
        /// Factory Failure Analysis Access Code
        FSLACC OFFSET(2) NUMBITS(2) [],
        /// Mass Erase Enable Bits
        MEEN OFFSET(4) NUMBITS(2) [],
        /// Backdoor Key Security Enable
        KEYEN OFFSET(6) NUMBITS(2) [
            Disabled0 = 0,
            Disabled1 = 1,
            Enabled = 2,
            Disabled3 = 3,
        ],
    ],
];

u8_enum! {
    /// FTFE command codes written to FCCOB0.
    pub enum FlashCommand {
        /// Verify that a flash block is erased.
        Read1sBlock = 0x00,
        /// Verify that a flash section is erased.
        Read1sSection = 0x01,
        /// Tests previously programmed phrases at margin read levels.
        ProgramCheck = 0x02,
        /// Read 8 bytes from a dedicated resource.
        ReadResource = 0x03,
        /// Program 8 bytes in a flash block.
        ProgramPhrase = 0x07,
        /// Erase a flash block.
        EraseBlock = 0x08,
        /// Erase a flash sector.
        EraseSector = 0x09,
        /// Program data from the section program buffer.
        ProgramSection = 0x0b,
        /// Verify that all flash blocks are erased.
        Read1sAllBlocks = 0x40,
        /// Read 8 bytes from the program once field.
        ReadOnce = 0x41,
        /// One-time program of 8 bytes into the program once field.
        ProgramOnce = 0x43,
        /// Erase all flash and FlexRAM space.
        EraseAllBlocks = 0x44,
        /// Release security using the backdoor key.
        VerifyBackdoorAccessKey = 0x45,
        /// Erase all flash and FlexRAM space, then release security.
        EraseAllBlocksUnsecure = 0x49,
        /// Partition FlexNVM between data flash and EEPROM backup.
        ProgramPartition = 0x80,
        /// Switch FlexRAM between RAM and EEPROM mode.
        SetFlexRamFunction = 0x81,
    }
}

impl FlashCommand {
    /// Mnemonic used in the reference manual.
    pub fn mnemonic(self) -> &'static str {
        match self {
            FlashCommand::Read1sBlock => "RD1BLK",
            FlashCommand::Read1sSection => "RD1SEC",
            FlashCommand::ProgramCheck => "PGMCHK",
            FlashCommand::ReadResource => "RDRSRC",
            FlashCommand::ProgramPhrase => "PGM8",
            FlashCommand::EraseBlock => "ERSBLK",
            FlashCommand::EraseSector => "ERSSCR",
            FlashCommand::ProgramSection => "PGMSEC",
            FlashCommand::Read1sAllBlocks => "RD1ALL",
            FlashCommand::ReadOnce => "RDONCE",
            FlashCommand::ProgramOnce => "PGMONCE",
            FlashCommand::EraseAllBlocks => "ERSALL",
            FlashCommand::VerifyBackdoorAccessKey => "VFYKEY",
            FlashCommand::EraseAllBlocksUnsecure => "ERSALLU",
            FlashCommand::ProgramPartition => "PGMPART",
            FlashCommand::SetFlexRamFunction => "SETRAM",
        }
    }
}

impl fmt::Display for FlashCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (0x{:02x})", self.mnemonic(), *self as u8)
    }
}

/// FSTAT error flags that must be cleared before launching a command.
pub const FSTAT_ERROR_FLAGS: u8 = 0x70;

pub const FTFE_BASE_ADDR: usize = 0x4002_0000;

pub const FTFE_BASE: StaticRef<FtfeRegisters> =
    unsafe { StaticRef::new(FTFE_BASE_ADDR as *const FtfeRegisters) };

pub const FTFE_BASE_ADDRS: [usize; 1] = [FTFE_BASE_ADDR];
pub const FTFE_BASE_PTRS: [StaticRef<FtfeRegisters>; 1] = [FTFE_BASE];
pub const FTFE_COMMAND_COMPLETE_IRQS: [u32; 1] = [nvic::FTFE];
pub const FTFE_READ_COLLISION_IRQS: [u32; 1] = [nvic::Read_Collision];

instance_lookup!(FTFE_BASE_ADDRS);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorCode;
    use core::mem::{offset_of, size_of};
    use tock_registers::interfaces::{Readable, Writeable};

    #[test]
    fn layout() {
        assert_eq!(offset_of!(FtfeRegisters, fccob), 0x04);
        assert_eq!(offset_of!(FtfeRegisters, fprot), 0x10);
        assert_eq!(offset_of!(FtfeRegisters, fdprot), 0x17);
        assert_eq!(size_of::<FtfeRegisters>(), 0x18);
    }

    #[test]
    fn fccob_byte_order() {
        let mut backing = [0u32; 6];
        let regs: &FtfeRegisters = unsafe { &*(backing.as_mut_ptr() as *const FtfeRegisters) };
        let block = core::ptr::addr_of!(regs.fccob) as usize;

        assert_eq!(core::ptr::addr_of!(regs.fccob[0]) as usize - block, 3);
        assert_eq!(core::ptr::addr_of!(regs.fccob[4]) as usize - block, 7);
        assert_eq!(core::ptr::addr_of!(regs.fccob[0xb]) as usize - block, 8);

        regs.fccob[0].set(FlashCommand::EraseSector as u8);
        assert_eq!(regs.fccob[0].get(), 0x09);
        assert_eq!(regs.fprot[0].get(), 0);
    }

    #[test]
    fn command_codes() {
        assert_eq!(FlashCommand::try_from(0x09), Ok(FlashCommand::EraseSector));
        assert_eq!(FlashCommand::try_from(0x81), Ok(FlashCommand::SetFlexRamFunction));
        assert_eq!(FlashCommand::try_from(0x04), Err(ErrorCode::INVAL));
        assert_eq!(
            FlashCommand::try_from(0x49),
            Ok(FlashCommand::EraseAllBlocksUnsecure)
        );
        assert_eq!(FlashCommand::ALL.len(), 16);
        for &cmd in FlashCommand::ALL {
            assert_eq!(FlashCommand::try_from(cmd as u8), Ok(cmd));
        }
        assert_eq!(format!("{}", FlashCommand::ProgramPhrase), "PGM8 (0x07)");
    }

    #[test]
    fn error_flags() {
        let flags = FSTAT::ACCERR::SET + FSTAT::FPVIOL::SET + FSTAT::RDCOLERR::SET;
        assert_eq!(flags.value, FSTAT_ERROR_FLAGS);
        assert_eq!(FTFE_COMMAND_COMPLETE_IRQS, [18]);
        assert_eq!(FTFE_READ_COLLISION_IRQS, [19]);
    }
}
