// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Peripheral access layer for the NXP MKE18F16 (Kinetis KE1xF, Cortex-M4F).
//!
//! One module per peripheral. Each module declares its register block with
//! `register_structs!`, its fields with `register_bitfields!`, and then the
//! base addresses, `StaticRef` pointers and interrupt numbers of every
//! instance, plus an `instance()` lookup from base address to index.
//! Interrupt numbers live in [`nvic`]; package and core configuration in
//! [`chip_config`]; the address map in [`memory_map`].

#![cfg_attr(not(test), no_std)]
#![crate_name = "mke18f16"]
#![crate_type = "rlib"]
// The FlexIO, FTM and LPI2C blocks declare enough registers in one
// `register_structs!` that the default recursion limit is not enough to expand
// them.
#![recursion_limit = "256"]

mod helpers;

pub mod chip_config;
pub mod dma_request;
pub mod errorcode;
pub mod memory_map;
pub mod nvic;
pub mod static_ref;

pub mod adc;
pub mod can;
pub mod cmp;
pub mod crc;
pub mod dac;
pub mod dma;
pub mod dmamux;
pub mod ewm;
pub mod flexio;
pub mod ftfe;
pub mod ftm;
pub mod gpio;
pub mod lmem;
pub mod lpi2c;
pub mod lpit;
pub mod lpspi;
pub mod lptmr;
pub mod lpuart;
pub mod mcm;
pub mod mscm;
pub mod nv;
pub mod pcc;
pub mod pdb;
pub mod pmc;
pub mod port;
pub mod pwt;
pub mod rcm;
pub mod rtc;
pub mod rtc_osc;
pub mod scg;
pub mod sim;
pub mod smc;
pub mod sysmpu;
pub mod trgmux;
pub mod wdog;

pub use errorcode::ErrorCode;
pub use static_ref::StaticRef;
