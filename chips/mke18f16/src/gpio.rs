// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! General purpose I/O, ports A through E.
//!
//! Each register holds one bit per pin. Pin muxing, pulls and interrupts
//! are configured through the matching [`port`](crate::port) instance.

use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::register_structs;

use crate::helpers::instance_lookup;
use crate::static_ref::StaticRef;

register_structs! {
    pub GpioRegisters {
        /// Port Data Output Register
        (0x00 => pub pdor: ReadWrite<u32>),
        /// Port Set Output Register
        (0x04 => pub psor: WriteOnly<u32>),
        /// Port Clear Output Register
        (0x08 => pub pcor: WriteOnly<u32>),
        /// Port Toggle Output Register
        (0x0c => pub ptor: WriteOnly<u32>),
        /// Port Data Input Register
        (0x10 => pub pdir: ReadOnly<u32>),
        /// Port Data Direction Register
        (0x14 => pub pddr: ReadWrite<u32>),
        /// Port Input Disable Register
        (0x18 => pub pidr: ReadWrite<u32>),
        (0x1c => @END),
    }
}

pub const GPIOA_BASE_ADDR: usize = 0x400F_F000;
pub const GPIOB_BASE_ADDR: usize = 0x400F_F040;
pub const GPIOC_BASE_ADDR: usize = 0x400F_F080;
pub const GPIOD_BASE_ADDR: usize = 0x400F_F0C0;
pub const GPIOE_BASE_ADDR: usize = 0x400F_F100;

pub const GPIOA_BASE: StaticRef<GpioRegisters> =
    unsafe { StaticRef::new(GPIOA_BASE_ADDR as *const GpioRegisters) };
pub const GPIOB_BASE: StaticRef<GpioRegisters> =
    unsafe { StaticRef::new(GPIOB_BASE_ADDR as *const GpioRegisters) };
pub const GPIOC_BASE: StaticRef<GpioRegisters> =
    unsafe { StaticRef::new(GPIOC_BASE_ADDR as *const GpioRegisters) };
pub const GPIOD_BASE: StaticRef<GpioRegisters> =
    unsafe { StaticRef::new(GPIOD_BASE_ADDR as *const GpioRegisters) };
pub const GPIOE_BASE: StaticRef<GpioRegisters> =
    unsafe { StaticRef::new(GPIOE_BASE_ADDR as *const GpioRegisters) };

pub const GPIO_BASE_ADDRS: [usize; 5] = [
    GPIOA_BASE_ADDR,
    GPIOB_BASE_ADDR,
    GPIOC_BASE_ADDR,
    GPIOD_BASE_ADDR,
    GPIOE_BASE_ADDR,
];
pub const GPIO_BASE_PTRS: [StaticRef<GpioRegisters>; 5] =
    [GPIOA_BASE, GPIOB_BASE, GPIOC_BASE, GPIOD_BASE, GPIOE_BASE];

instance_lookup!(GPIO_BASE_ADDRS);

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::size_of;

    #[test]
    fn ports_are_packed() {
        assert_eq!(size_of::<GpioRegisters>(), 0x1c);
        for pair in GPIO_BASE_ADDRS.windows(2) {
            assert_eq!(pair[1] - pair[0], 0x40);
        }
        assert_eq!(instance(GPIOD_BASE_ADDR), Ok(3));
        assert_eq!(GPIO_BASE_PTRS[4].addr(), GPIOE_BASE_ADDR);
    }
}
