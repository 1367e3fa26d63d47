// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Fixed-size entities of the construction.
//!
//! Each width gets its own type so a 12-byte value can never be passed where
//! a key is expected. Slice conversions fail with the matching
//! [`AeadError`] instead of truncating or padding.

use zeroize::{Zeroize, ZeroizeOnDrop};

use rampart_util::constant_time_eq;

use crate::consts::{KEY_SIZE, KEYSTREAM_BLOCK_SIZE, NONCE_SIZE, SUBKEY_SIZE, TAG_SIZE};
use crate::error::AeadError;

/// 256-bit ChaCha20 key. Zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Key([u8; KEY_SIZE]);

impl Key {
    pub const fn new(bytes: [u8; KEY_SIZE]) -> Self {
        Self(bytes)
    }

    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }
}

impl From<[u8; KEY_SIZE]> for Key {
    fn from(bytes: [u8; KEY_SIZE]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for Key {
    type Error = AeadError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; KEY_SIZE] = bytes.try_into().map_err(|_| AeadError::InvalidKeySize)?;
        Ok(Self(bytes))
    }
}

impl core::fmt::Debug for Key {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Key {{ [protected] }}")
    }
}

/// 96-bit nonce. Uniqueness per key is the caller's obligation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Nonce([u8; NONCE_SIZE]);

impl Nonce {
    pub const fn new(bytes: [u8; NONCE_SIZE]) -> Self {
        Self(bytes)
    }

    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8; NONCE_SIZE] {
        &self.0
    }
}

impl From<[u8; NONCE_SIZE]> for Nonce {
    fn from(bytes: [u8; NONCE_SIZE]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for Nonce {
    type Error = AeadError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; NONCE_SIZE] =
            bytes.try_into().map_err(|_| AeadError::InvalidNonceSize)?;
        Ok(Self(bytes))
    }
}

/// 128-bit authentication tag.
///
/// Equality is constant-time, so comparing a received tag against a computed
/// one with `==` does not leak the position of the first differing byte.
#[derive(Clone, Copy, Default, Zeroize)]
pub struct Tag([u8; TAG_SIZE]);

impl Tag {
    pub const fn new(bytes: [u8; TAG_SIZE]) -> Self {
        Self(bytes)
    }

    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8; TAG_SIZE] {
        &self.0
    }

    #[inline(always)]
    pub fn as_mut_bytes(&mut self) -> &mut [u8; TAG_SIZE] {
        &mut self.0
    }

    pub fn into_bytes(self) -> [u8; TAG_SIZE] {
        self.0
    }
}

impl PartialEq for Tag {
    fn eq(&self, other: &Self) -> bool {
        constant_time_eq(&self.0, &other.0)
    }
}

impl Eq for Tag {}

impl From<[u8; TAG_SIZE]> for Tag {
    fn from(bytes: [u8; TAG_SIZE]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for Tag {
    type Error = AeadError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; TAG_SIZE] = bytes.try_into().map_err(|_| AeadError::InvalidTagSize)?;
        Ok(Self(bytes))
    }
}

impl AsRef<[u8]> for Tag {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl core::fmt::Debug for Tag {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Tag(")?;
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        write!(f, ")")
    }
}

/// Per-message Poly1305 one-time key. Never cloned, zeroized on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Subkey([u8; SUBKEY_SIZE]);

impl Subkey {
    pub const fn new(bytes: [u8; SUBKEY_SIZE]) -> Self {
        Self(bytes)
    }

    /// Takes the first 32 bytes of a keystream block. The caller owns the
    /// block and is responsible for scrubbing it.
    pub fn from_keystream_block(block: &[u8; KEYSTREAM_BLOCK_SIZE]) -> Self {
        let mut bytes = [0u8; SUBKEY_SIZE];
        bytes.copy_from_slice(&block[..SUBKEY_SIZE]);
        Self(bytes)
    }

    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8; SUBKEY_SIZE] {
        &self.0
    }
}

impl core::fmt::Debug for Subkey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Subkey {{ [protected] }}")
    }
}
