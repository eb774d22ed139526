// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

use crate::ErrorCode;

/// Position of `base` in a peripheral's base address table.
pub(crate) fn instance_of(bases: &[usize], base: usize) -> Result<usize, ErrorCode> {
    bases
        .iter()
        .position(|&b| b == base)
        .ok_or(ErrorCode::NODEVICE)
}

/// Byte address of element `n` in a block of byte registers laid out
/// big-endian within each 32-bit word: 3, 2, 1, 0, 7, 6, 5, 4, ...
pub(crate) const fn word_swapped_index(n: usize) -> usize {
    4 * (n / 4) + (3 - (n % 4))
}

/// Generates the `instance()` lookup for a module's `*_BASE_ADDRS` table.
macro_rules! instance_lookup {
    ($bases:ident) => {
        /// Instance number of the peripheral at `base`.
        pub fn instance(base: usize) -> Result<usize, $crate::ErrorCode> {
            $crate::helpers::instance_of(&$bases, base)
        }
    };
}

pub(crate) use instance_lookup;

/// Declares a `u8` selector enum with an `ALL` table and a `TryFrom<u8>`
/// that rejects unassigned codes with `INVAL`.
macro_rules! u8_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident = $value:literal,)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        #[repr(u8)]
        pub enum $name {
            $($(#[$vmeta])* $variant = $value,)*
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant,)*];
        }

        impl TryFrom<u8> for $name {
            type Error = $crate::ErrorCode;

            fn try_from(code: u8) -> Result<Self, Self::Error> {
                match code {
                    $($value => Ok($name::$variant),)*
                    _ => Err($crate::ErrorCode::INVAL),
                }
            }
        }
    };
}

pub(crate) use u8_enum;

#[cfg(test)]
mod tests {
    use super::{instance_of, word_swapped_index};
    use crate::ErrorCode;

    #[test]
    fn finds_position() {
        let bases = [0x4006_6000, 0x4006_7000];
        assert_eq!(instance_of(&bases, 0x4006_7000), Ok(1));
        assert_eq!(instance_of(&bases, 0x4006_8000), Err(ErrorCode::NODEVICE));
        assert_eq!(instance_of(&[], 0), Err(ErrorCode::NODEVICE));
    }

    #[test]
    fn swaps_within_words() {
        assert_eq!(word_swapped_index(0), 3);
        assert_eq!(word_swapped_index(3), 0);
        assert_eq!(word_swapped_index(4), 7);
        assert_eq!(word_swapped_index(11), 8);
    }
}
