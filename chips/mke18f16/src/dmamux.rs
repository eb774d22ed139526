// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! DMA channel multiplexer.
//!
//! | ENBL | TRIG | Function                                   |
//! |------|------|--------------------------------------------|
//! |   0  |   X  | Channel disabled                           |
//! |   1  |   0  | Source routed straight to the channel      |
//! |   1  |   1  | Source gated by the matching LPIT channel  |
//!
//! Only channels 0..3 can use periodic triggering. Source numbers are listed
//! in [`dma_request`](crate::dma_request).

use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

use crate::dma::DMA_CHANNEL_COUNT;
use crate::helpers::instance_lookup;
use crate::static_ref::StaticRef;

register_structs! {
    pub DmamuxRegisters {
        /// Channel Configuration register
        (0x00 => pub chcfg: [ReadWrite<u8, CHCFG::Register>; DMA_CHANNEL_COUNT]),
        (0x10 => @END),
    }
}

register_bitfields![u8,
    pub CHCFG [
        /// DMA Channel Source (Slot)
        SOURCE OFFSET(0) NUMBITS(6) [],
        /// DMA Channel Trigger Enable
        TRIG OFFSET(6) NUMBITS(1) [],
        /// DMA Channel Enable
        ENBL OFFSET(7) NUMBITS(1) [],
    ],
];

/// Channels that can be periodically triggered by LPIT0.
pub const DMAMUX_TRIGGERED_CHANNELS: usize = 4;

pub const DMAMUX_BASE_ADDR: usize = 0x4002_1000;

pub const DMAMUX_BASE: StaticRef<DmamuxRegisters> =
    unsafe { StaticRef::new(DMAMUX_BASE_ADDR as *const DmamuxRegisters) };

pub const DMAMUX_BASE_ADDRS: [usize; 1] = [DMAMUX_BASE_ADDR];
pub const DMAMUX_BASE_PTRS: [StaticRef<DmamuxRegisters>; 1] = [DMAMUX_BASE];

instance_lookup!(DMAMUX_BASE_ADDRS);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dma_request::DmaRequestSource;
    use core::mem::size_of;
    use tock_registers::LocalRegisterCopy;

    #[test]
    fn layout() {
        assert_eq!(size_of::<DmamuxRegisters>(), 16);
    }

    #[test]
    fn route_source() {
        let mut chcfg = LocalRegisterCopy::<u8, CHCFG::Register>::new(0);
        chcfg.modify(CHCFG::ENBL::SET + CHCFG::SOURCE.val(DmaRequestSource::Lpuart0Rx as u8));
        assert_eq!(chcfg.get(), 0x82);
        chcfg.modify(CHCFG::TRIG::SET);
        assert_eq!(chcfg.get(), 0xc2);
    }
}
