// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Byte-level helpers shared by the rampart AEAD crates.
//!
//! The little-endian conversions scrub their source after reading so key
//! material does not linger in temporaries.

#![cfg_attr(not(test), no_std)]

#[cfg(feature = "test-utils")]
extern crate alloc;

#[cfg(test)]
mod tests;

use subtle::ConstantTimeEq;

/// Constant-time equality comparison for byte slices.
///
/// Returns `false` for slices of different length. For equal lengths the
/// running time does not depend on where (or whether) the slices differ.
///
/// # Example
///
/// ```
/// use rampart_util::constant_time_eq;
///
/// assert!(constant_time_eq(&[1, 2, 3, 4], &[1, 2, 3, 4]));
/// assert!(!constant_time_eq(&[1, 2, 3, 4], &[1, 2, 3, 5]));
/// ```
#[inline]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}

/// Verifies that every byte of a slice is zero.
///
/// # Example
///
/// ```
/// use rampart_util::is_slice_zeroized;
///
/// assert!(is_slice_zeroized(&[0u8; 10]));
/// assert!(!is_slice_zeroized(&[0u8, 1, 0, 0]));
/// ```
#[inline(always)]
pub fn is_slice_zeroized(slice: &[u8]) -> bool {
    slice.iter().all(|&b| b == 0)
}

/// Attempts to split a slice into a prefix and a suffix of `end_size` elements.
///
/// Returns `None` if `end_size > slice.len()`. Used to peel a fixed-size tag
/// off the end of a combined buffer.
///
/// # Example
///
/// ```
/// use rampart_util::try_split_at_from_end;
///
/// let data = [1, 2, 3, 4, 5];
/// let (left, right) = try_split_at_from_end(&data, 2).unwrap();
/// assert_eq!(left, &[1, 2, 3]);
/// assert_eq!(right, &[4, 5]);
///
/// assert!(try_split_at_from_end(&data, 6).is_none());
/// ```
#[inline(always)]
pub fn try_split_at_from_end<T>(slice: &[T], end_size: usize) -> Option<(&[T], &[T])> {
    let split_point = slice.len().checked_sub(end_size)?;
    Some(slice.split_at(split_point))
}

/// Parses a hexadecimal string into bytes.
///
/// # Panics
///
/// Panics if the string contains invalid hex characters or has odd length.
///
/// # Example
///
/// ```
/// use rampart_util::hex_to_bytes;
///
/// assert_eq!(hex_to_bytes("deadbeef"), vec![0xde, 0xad, 0xbe, 0xef]);
/// ```
#[cfg(feature = "test-utils")]
pub fn hex_to_bytes(hex: &str) -> alloc::vec::Vec<u8> {
    assert!(hex.len() % 2 == 0, "hex string has odd length");

    (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).expect("invalid hex digit"))
        .collect()
}

/// Parses a hexadecimal string into a fixed-size array.
///
/// # Panics
///
/// Panics on invalid hex or if the decoded length is not `N`.
#[cfg(feature = "test-utils")]
pub fn hex_to_array<const N: usize>(hex: &str) -> [u8; N] {
    let bytes = hex_to_bytes(hex);
    let mut out = [0u8; N];
    assert_eq!(bytes.len(), N, "decoded hex has wrong length");
    out.copy_from_slice(&bytes);
    out
}

/// Generates `{type}_from_le` and `{type}_to_le` functions for integer types.
macro_rules! impl_le_conversions {
    ($type:ty, $size:expr, $fn_from:ident, $fn_to:ident) => {
        #[doc = concat!("Converts ", stringify!($size), " bytes to a little-endian `", stringify!($type), "`, zeroizing the source bytes.")]
        #[inline(always)]
        pub fn $fn_from(dst: &mut $type, bytes: &mut [u8; $size]) {
            *dst = 0;
            for (i, byte) in bytes.iter_mut().enumerate() {
                *dst |= (*byte as $type) << (8 * i);
                *byte = 0;
            }
        }

        #[doc = concat!("Converts a `", stringify!($type), "` to little-endian bytes, zeroizing the source.")]
        #[inline(always)]
        pub fn $fn_to(src: &mut $type, bytes: &mut [u8; $size]) {
            for (i, byte) in bytes.iter_mut().enumerate() {
                *byte = (*src >> (8 * i)) as u8;
            }
            *src = 0;
        }
    };
}

impl_le_conversions!(u32, 4, u32_from_le, u32_to_le);
impl_le_conversions!(u64, 8, u64_from_le, u64_to_le);
