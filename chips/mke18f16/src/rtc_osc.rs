// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! 32 kHz RTC oscillator.

use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

use crate::helpers::instance_lookup;
use crate::static_ref::StaticRef;

register_structs! {
    pub RtcOscRegisters {
        /// RTC Oscillator Control Register
        (0x0 => pub cr: ReadWrite<u8, CR::Register>),
        (0x1 => @END),
    }
}

register_bitfields![u8,
    pub CR [
        /// RTC 32k Clock Select
        ROSCEREFS OFFSET(4) NUMBITS(1) [
            Oscillator = 0,
            External = 1,
        ],
        /// RTC 32k Oscillator Stable
        ROSCSTB OFFSET(5) NUMBITS(1) [],
        /// RTC 32k Oscillator Stop Enable
        ROSCSTPEN OFFSET(6) NUMBITS(1) [],
        /// RTC 32k Oscillator Enable
        ROSCEN OFFSET(7) NUMBITS(1) [],
    ],
];

pub const RTC_OSC_BASE_ADDR: usize = 0x4006_0000;

pub const RTC_OSC_BASE: StaticRef<RtcOscRegisters> =
    unsafe { StaticRef::new(RTC_OSC_BASE_ADDR as *const RtcOscRegisters) };

pub const RTC_OSC_BASE_ADDRS: [usize; 1] = [RTC_OSC_BASE_ADDR];
pub const RTC_OSC_BASE_PTRS: [StaticRef<RtcOscRegisters>; 1] = [RTC_OSC_BASE];

instance_lookup!(RTC_OSC_BASE_ADDRS);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enable_bits() {
        assert_eq!((CR::ROSCEN::SET + CR::ROSCSTPEN::SET).value, 0xc0);
        assert_eq!(CR::ROSCEREFS::External.value, 0x10);
        assert_eq!(instance(RTC_OSC_BASE_ADDR), Ok(0));
    }
}
