// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Flash configuration field at 0x400.
//!
//! These sixteen bytes are loaded into the FTFE registers on reset. Boards
//! place [`DEFAULT_FLASH_CONFIG`] (or their own value) in a linker section
//! at this address; getting FSEC wrong locks the part.

use tock_registers::registers::ReadOnly;
use tock_registers::{register_bitfields, register_structs};

use crate::helpers::instance_lookup;
use crate::static_ref::StaticRef;

register_structs! {
    pub NvRegisters {
        (0x0 => pub backkey3: ReadOnly<u8>),
        (0x1 => pub backkey2: ReadOnly<u8>),
        (0x2 => pub backkey1: ReadOnly<u8>),
        (0x3 => pub backkey0: ReadOnly<u8>),
        (0x4 => pub backkey7: ReadOnly<u8>),
        (0x5 => pub backkey6: ReadOnly<u8>),
        (0x6 => pub backkey5: ReadOnly<u8>),
        (0x7 => pub backkey4: ReadOnly<u8>),
        (0x8 => pub fprot3: ReadOnly<u8>),
        (0x9 => pub fprot2: ReadOnly<u8>),
        (0xa => pub fprot1: ReadOnly<u8>),
        (0xb => pub fprot0: ReadOnly<u8>),
        /// Non-volatile Flash Security Register
        (0xc => pub fsec: ReadOnly<u8, FSEC::Register>),
        /// Non-volatile Flash Option Register
        (0xd => pub fopt: ReadOnly<u8, FOPT::Register>),
        /// Non-volatile EERAM Protection Register
        (0xe => pub feprot: ReadOnly<u8>),
        /// Non-volatile D-Flash Protection Register
        (0xf => pub fdprot: ReadOnly<u8>),
        (0x10 => @END),
    }
}

register_bitfields![u8,
    pub FSEC [
        /// Flash Security
        SEC OFFSET(0) NUMBITS(2) [],
        /// Freescale Failure Analysis Access Code
        FSLACC OFFSET(2) NUMBITS(2) [],
        MEEN OFFSET(4) NUMBITS(2) [],
        KEYEN OFFSET(6) NUMBITS(2) [],
    ],
    pub FOPT [
        /// Low-power boot
        LPBOOT OFFSET(0) NUMBITS(1) [],
        /// Reset pin enable
        RESET_PIN_CFG OFFSET(3) NUMBITS(1) [],
        /// NMI pin enable
        NMI_PIN_CFG OFFSET(2) NUMBITS(1) [],
    ],
];

/// Offset of FSEC within the field.
pub const NV_FSEC_OFFSET: usize = 0xc;
/// Offset of FOPT within the field.
pub const NV_FOPT_OFFSET: usize = 0xd;

/// Unsecured part, backdoor key disabled, all regions unprotected.
pub const DEFAULT_FLASH_CONFIG: [u8; 16] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, // backdoor key
    0xff, 0xff, 0xff, 0xff, // FPROT
    0xfe, // FSEC
    0x7d, // FOPT
    0xff, // FEPROT
    0xff, // FDPROT
];

pub const FTFE_FLASH_CONFIG_BASE_ADDR: usize = 0x0000_0400;

pub const FTFE_FLASH_CONFIG_BASE: StaticRef<NvRegisters> =
    unsafe { StaticRef::new(FTFE_FLASH_CONFIG_BASE_ADDR as *const NvRegisters) };

pub const NV_BASE_ADDRS: [usize; 1] = [FTFE_FLASH_CONFIG_BASE_ADDR];
pub const NV_BASE_PTRS: [StaticRef<NvRegisters>; 1] = [FTFE_FLASH_CONFIG_BASE];

instance_lookup!(NV_BASE_ADDRS);

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::{offset_of, size_of};
    use tock_registers::interfaces::Readable;
    use tock_registers::LocalRegisterCopy;

    #[test]
    fn layout() {
        assert_eq!(size_of::<NvRegisters>(), DEFAULT_FLASH_CONFIG.len());
        assert_eq!(offset_of!(NvRegisters, fsec), NV_FSEC_OFFSET);
        assert_eq!(offset_of!(NvRegisters, fopt), NV_FOPT_OFFSET);
    }

    #[test]
    fn default_config_is_unsecure() {
        let fsec = LocalRegisterCopy::<u8, FSEC::Register>::new(DEFAULT_FLASH_CONFIG[NV_FSEC_OFFSET]);
        // SEC = 0b10 is the only unsecure encoding.
        assert_eq!(fsec.read(FSEC::SEC), 0b10);
        assert_eq!(fsec.read(FSEC::KEYEN), 0b11);

        let fopt = LocalRegisterCopy::<u8, FOPT::Register>::new(DEFAULT_FLASH_CONFIG[NV_FOPT_OFFSET]);
        assert!(fopt.is_set(FOPT::RESET_PIN_CFG));
        assert!(fopt.is_set(FOPT::LPBOOT));
    }

    #[test]
    fn overlay_reads_bytes() {
        let image = DEFAULT_FLASH_CONFIG;
        let regs: &NvRegisters = unsafe { &*(image.as_ptr() as *const NvRegisters) };
        assert_eq!(regs.fsec.get(), 0xfe);
        assert_eq!(regs.backkey0.get(), 0xff);
        assert_eq!(instance(FTFE_FLASH_CONFIG_BASE_ADDR), Ok(0));
    }
}
