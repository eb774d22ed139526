// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! System memory map.
//!
//! Program flash sits at address zero with the flash configuration field at
//! 0x400. SRAM is split at 0x2000_0000 into SRAM_L on the code bus and
//! SRAM_U on the system bus, so the two halves form one contiguous 64 KiB
//! block.

pub const P_FLASH_BASE: usize = 0x0000_0000;
pub const P_FLASH_SIZE: usize = 512 * 1024;

/// Flash configuration field, see [`crate::nv`].
pub const FLASH_CONFIG_BASE: usize = 0x0000_0400;
pub const FLASH_CONFIG_SIZE: usize = 16;

pub const FLEX_NVM_BASE: usize = 0x1000_0000;
pub const FLEX_NVM_SIZE: usize = 64 * 1024;

pub const FLEX_RAM_BASE: usize = 0x1400_0000;
pub const FLEX_RAM_SIZE: usize = 4 * 1024;

pub const SRAM_L_BASE: usize = 0x1FFF_8000;
pub const SRAM_L_SIZE: usize = 32 * 1024;

pub const SRAM_U_BASE: usize = 0x2000_0000;
pub const SRAM_U_SIZE: usize = 32 * 1024;

/// AIPS peripheral bridge, one 4 KiB slot per peripheral.
pub const AIPS_BASE: usize = 0x4000_0000;
pub const AIPS_SIZE: usize = 0x0008_0000;

/// GPIO, also reachable through the AIPS alias at 0x4004_F000.
pub const GPIO_BASE: usize = 0x400F_F000;
pub const GPIO_SIZE: usize = 0x1000;

/// Private peripheral bus, including the NVIC, MCM and LMEM.
pub const PPB_BASE: usize = 0xE000_0000;
pub const PPB_SIZE: usize = 0x0010_0000;

const SRAM_BITBAND_BASE: usize = 0x2000_0000;
const SRAM_BITBAND_ALIAS: usize = 0x2200_0000;
const PERIPHERAL_BITBAND_BASE: usize = 0x4000_0000;
const PERIPHERAL_BITBAND_ALIAS: usize = 0x4200_0000;
const BITBAND_REGION_SIZE: usize = 0x0010_0000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MemoryRegion {
    pub name: &'static str,
    pub base: usize,
    pub size: usize,
}

impl MemoryRegion {
    const fn new(name: &'static str, base: usize, size: usize) -> Self {
        MemoryRegion { name, base, size }
    }

    /// One past the last address.
    pub const fn end(&self) -> usize {
        self.base + self.size
    }

    pub const fn contains(&self, addr: usize) -> bool {
        addr >= self.base && addr - self.base < self.size
    }
}

/// Every region above, in address order.
pub const REGIONS: [MemoryRegion; 8] = [
    MemoryRegion::new("P_FLASH", P_FLASH_BASE, P_FLASH_SIZE),
    MemoryRegion::new("FLEX_NVM", FLEX_NVM_BASE, FLEX_NVM_SIZE),
    MemoryRegion::new("FLEX_RAM", FLEX_RAM_BASE, FLEX_RAM_SIZE),
    MemoryRegion::new("SRAM_L", SRAM_L_BASE, SRAM_L_SIZE),
    MemoryRegion::new("SRAM_U", SRAM_U_BASE, SRAM_U_SIZE),
    MemoryRegion::new("AIPS", AIPS_BASE, AIPS_SIZE),
    MemoryRegion::new("GPIO", GPIO_BASE, GPIO_SIZE),
    MemoryRegion::new("PPB", PPB_BASE, PPB_SIZE),
];

/// Region containing `addr`, if any.
pub fn region_of(addr: usize) -> Option<&'static MemoryRegion> {
    REGIONS.iter().find(|region| region.contains(addr))
}

/// Bit-band alias word for `bit` of the byte at `addr`.
///
/// Only the first megabyte of SRAM_U and of the peripheral space is
/// bit-banded. Returns `None` for any other address or for `bit > 7`.
pub const fn bitband_alias(addr: usize, bit: usize) -> Option<usize> {
    if bit > 7 {
        return None;
    }
    let (base, alias) = if addr >= SRAM_BITBAND_BASE
        && addr < SRAM_BITBAND_BASE + BITBAND_REGION_SIZE
    {
        (SRAM_BITBAND_BASE, SRAM_BITBAND_ALIAS)
    } else if addr >= PERIPHERAL_BITBAND_BASE
        && addr < PERIPHERAL_BITBAND_BASE + BITBAND_REGION_SIZE
    {
        (PERIPHERAL_BITBAND_BASE, PERIPHERAL_BITBAND_ALIAS)
    } else {
        return None;
    };
    Some(alias + (addr - base) * 32 + bit * 4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sram_is_contiguous() {
        assert_eq!(REGIONS[3].end(), SRAM_U_BASE);
        assert_eq!(REGIONS[4].end(), 0x2000_8000);
    }

    #[test]
    fn regions_ordered_and_disjoint() {
        assert!(REGIONS.windows(2).all(|w| w[0].end() <= w[1].base));
    }

    #[test]
    fn lookup() {
        let name = |addr| region_of(addr).map(|r| r.name);
        assert_eq!(name(FLASH_CONFIG_BASE), Some("P_FLASH"));
        assert_eq!(name(crate::lpuart::LPUART0_BASE_ADDR), Some("AIPS"));
        assert_eq!(name(crate::gpio::GPIOE_BASE_ADDR), Some("GPIO"));
        assert_eq!(name(crate::lmem::LMEM_BASE_ADDR), Some("PPB"));
        assert_eq!(name(0x2000_8000), None);
        assert_eq!(name(0xffff_ffff), None);
    }

    #[test]
    fn flash_config_matches_nv() {
        assert_eq!(FLASH_CONFIG_BASE, crate::nv::FTFE_FLASH_CONFIG_BASE_ADDR);
        assert_eq!(FLASH_CONFIG_SIZE, crate::nv::DEFAULT_FLASH_CONFIG.len());
    }

    #[test]
    fn bitband() {
        assert_eq!(bitband_alias(0x2000_0000, 0), Some(0x2200_0000));
        assert_eq!(bitband_alias(0x2000_0001, 3), Some(0x2200_002c));
        assert_eq!(bitband_alias(0x4006_5000, 7), Some(0x42ca_001c));
        assert_eq!(bitband_alias(0x1fff_8000, 0), None);
        assert_eq!(bitband_alias(0x2000_0000, 8), None);
    }
}
