// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Chip specific configuration.
//!
//! The MKE18F16 ships in a 64-pin and a 100-pin LQFP package with the same
//! die. This file holds the package dependent values behind a common trait,
//! plus the Cortex-M4 core configuration that applies to both. The package
//! is chosen with the `config_lqfp64` or `config_lqfp100` Cargo feature; if
//! neither is enabled the 100-pin package is assumed.

/// Revision of the Cortex-M4 core, r0p1.
pub const CM4_REV: u16 = 0x0001;
/// Whether the Arm core MPU is implemented. Memory protection on this part
/// is provided by the SYSMPU instead.
pub const MPU_PRESENT: bool = false;
/// Number of NVIC priority bits.
pub const NVIC_PRIO_BITS: u32 = 4;
/// Whether the vendor supplies its own SysTick configuration.
pub const VENDOR_SYSTICK_CONFIG: bool = false;
/// Whether the single precision FPU is present.
pub const FPU_PRESENT: bool = true;

/// MKE18F16 configuration based on the package.
pub trait Mke18f16Config {
    /// Identifier for the part. Useful when debugging to confirm which
    /// configuration a board was built with.
    const NAME: &'static str;

    /// Number of package pins.
    const PIN_COUNT: usize;

    /// Bonded-out GPIO pins on PORTA..PORTE.
    const PORT_PIN_COUNTS: [usize; 5];

    /// SIM SDID PACKAGE field value reported by this package.
    const SDID_PACKAGE: u32;

    /// Fast IRC frequency in Hz.
    const FIRC_FREQ: u32 = 48_000_000;

    /// Slow IRC frequency in Hz, high range.
    const SIRC_FREQ: u32 = 8_000_000;

    /// Core clock out of reset in Hz. The core boots from FIRC undivided.
    const DEFAULT_CORE_CLOCK: u32 = 48_000_000;

    /// Program flash size in bytes.
    const P_FLASH_SIZE: usize = 512 * 1024;

    /// FlexNVM size in bytes.
    const FLEX_NVM_SIZE: usize = 64 * 1024;
}

/// MKE18F512VLH16, 64-pin LQFP.
pub enum Lqfp64 {}

impl Mke18f16Config for Lqfp64 {
    const NAME: &'static str = "MKE18F512VLH16";
    const PIN_COUNT: usize = 64;
    const PORT_PIN_COUNTS: [usize; 5] = [14, 12, 12, 10, 10];
    const SDID_PACKAGE: u32 = 4;
}

/// MKE18F512VLL16, 100-pin LQFP.
pub enum Lqfp100 {}

impl Mke18f16Config for Lqfp100 {
    const NAME: &'static str = "MKE18F512VLL16";
    const PIN_COUNT: usize = 100;
    const PORT_PIN_COUNTS: [usize; 5] = [18, 18, 18, 18, 17];
    const SDID_PACKAGE: u32 = 8;
}

#[cfg(all(feature = "config_lqfp64", feature = "config_lqfp100"))]
compile_error!("enable only one of config_lqfp64 and config_lqfp100");

/// Configuration selected by the enabled Cargo feature.
#[cfg(feature = "config_lqfp64")]
pub type Config = Lqfp64;

/// Configuration selected by the enabled Cargo feature.
#[cfg(any(
    feature = "config_lqfp100",
    all(not(feature = "config_lqfp64"), not(feature = "config_disable_default"))
))]
pub type Config = Lqfp100;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::SDID;
    use crate::{memory_map, port};

    fn gpio_total<C: Mke18f16Config>() -> usize {
        C::PORT_PIN_COUNTS.iter().sum()
    }

    #[test]
    fn pin_budgets() {
        assert!(gpio_total::<Lqfp64>() < Lqfp64::PIN_COUNT);
        assert!(gpio_total::<Lqfp100>() < Lqfp100::PIN_COUNT);
        assert!(Lqfp100::PORT_PIN_COUNTS
            .iter()
            .all(|&n| n <= port::PORT_PCR_COUNT));
    }

    #[test]
    fn package_ids() {
        assert_eq!(
            SDID::PACKAGE::Lqfp100.value,
            Lqfp100::SDID_PACKAGE << 8
        );
        assert_eq!(SDID::PACKAGE::Lqfp64.value, Lqfp64::SDID_PACKAGE << 8);
        assert_eq!(Lqfp64::NAME, "MKE18F512VLH16");
        assert_eq!(Lqfp100::NAME, "MKE18F512VLL16");
    }

    #[cfg(not(any(feature = "config_lqfp64", feature = "config_disable_default")))]
    #[test]
    fn default_package() {
        assert_eq!(<Config as Mke18f16Config>::NAME, Lqfp100::NAME);
        assert_eq!(<Config as Mke18f16Config>::PIN_COUNT, 100);
    }

    #[cfg(feature = "config_lqfp64")]
    #[test]
    fn lqfp64_package() {
        assert_eq!(<Config as Mke18f16Config>::NAME, Lqfp64::NAME);
        assert_eq!(<Config as Mke18f16Config>::PIN_COUNT, 64);
    }

    #[test]
    fn memories_agree() {
        assert_eq!(Lqfp100::P_FLASH_SIZE, memory_map::P_FLASH_SIZE);
        assert_eq!(Lqfp64::FLEX_NVM_SIZE, memory_map::FLEX_NVM_SIZE);
        assert_eq!(Lqfp100::DEFAULT_CORE_CLOCK, Lqfp100::FIRC_FREQ);
    }
}
