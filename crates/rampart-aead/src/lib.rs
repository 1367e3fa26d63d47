// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! ChaCha20-Poly1305 authenticated encryption with associated data (RFC 8439).
//!
//! ```
//! use rampart_aead::{Key, Nonce};
//!
//! let key = Key::new([0x42; 32]);
//! let nonce = Nonce::new([0x07; 12]);
//!
//! let (ciphertext, tag) = rampart_aead::encrypt(&key, &nonce, b"header", b"payload")?;
//! let plaintext = rampart_aead::decrypt(&key, &nonce, b"header", &ciphertext, &tag)?;
//!
//! assert_eq!(plaintext, b"payload");
//! # Ok::<(), rampart_aead::AeadError>(())
//! ```
//!
//! Nonces must never repeat under the same key; this crate does not generate
//! or track them.
//!
//! # Features
//!
//! - `tracing`: emits `debug` events on rejected messages. Only lengths are
//!   recorded, never key, nonce, tag or message bytes.
//! - `test-utils`: exposes recording mock primitives in [`test_utils`].

#![cfg_attr(not(test), no_std)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod aead;
mod api;
mod subkey;
mod support;
mod transcript;

use alloc::vec::Vec;

pub use rampart_aead_chacha::{ChaCha20, Poly1305};
pub use rampart_aead_core::consts;
pub use rampart_aead_core::{AeadApi, AeadError, Key, KeystreamCipher, Nonce, OneTimeMac, Subkey, Tag};

pub use aead::ChaCha20Poly1305;
pub use subkey::derive_subkey;
pub use transcript::{Transcript, build_transcript};

#[cfg(any(test, feature = "test-utils"))]
pub use support::test_utils;

/// One-shot encryption with a fresh [`ChaCha20Poly1305`].
pub fn encrypt(
    key: &Key,
    nonce: &Nonce,
    aad: &[u8],
    plaintext: &[u8],
) -> Result<(Vec<u8>, Tag), AeadError> {
    ChaCha20Poly1305::new().encrypt(key, nonce, aad, plaintext)
}

/// One-shot verification and decryption with a fresh [`ChaCha20Poly1305`].
///
/// Returns [`AeadError::AuthenticationFailed`] without computing any
/// plaintext if the tag does not verify.
pub fn decrypt(
    key: &Key,
    nonce: &Nonce,
    aad: &[u8],
    ciphertext: &[u8],
    tag: &Tag,
) -> Result<Vec<u8>, AeadError> {
    ChaCha20Poly1305::new().decrypt(key, nonce, aad, ciphertext, tag)
}
