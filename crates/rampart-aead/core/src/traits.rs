// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Seams between the AEAD composition and its primitives.

use alloc::vec::Vec;

use crate::consts::KEYSTREAM_BLOCK_SIZE;
use crate::error::AeadError;
use crate::types::{Key, Nonce, Subkey, Tag};

/// Stream cipher keystream generator (ChaCha20, RFC 8439 Section 2.3/2.4).
///
/// Implementors may keep scratch state in `self`, but every call must be
/// independent: the output depends only on the arguments.
pub trait KeystreamCipher {
    /// Produces the 64-byte keystream block for `counter`.
    fn block(
        &mut self,
        key: &Key,
        counter: u32,
        nonce: &Nonce,
        output: &mut [u8; KEYSTREAM_BLOCK_SIZE],
    );

    /// XORs `data` in place with consecutive keystream blocks, the first one
    /// being `counter`. Applying it twice restores the input.
    fn apply_keystream(&mut self, key: &Key, counter: u32, nonce: &Nonce, data: &mut [u8]);

    /// Allocating variant of [`apply_keystream`](Self::apply_keystream).
    fn xor(&mut self, key: &Key, counter: u32, nonce: &Nonce, data: &[u8]) -> Vec<u8> {
        let mut out = data.to_vec();
        self.apply_keystream(key, counter, nonce, &mut out);
        out
    }
}

/// One-time message authentication code (Poly1305, RFC 8439 Section 2.5).
pub trait OneTimeMac {
    /// Starts a new computation under `key`, discarding any previous state.
    fn init(&mut self, key: &Subkey);

    /// Absorbs `data`. May be called any number of times with any lengths.
    fn update(&mut self, data: &[u8]);

    /// Writes the tag and scrubs the internal state.
    fn finalize(&mut self, tag: &mut Tag);

    /// One-shot MAC over `message`.
    fn compute(&mut self, key: &Subkey, message: &[u8]) -> Tag {
        let mut tag = Tag::default();
        self.init(key);
        self.update(message);
        self.finalize(&mut tag);
        tag
    }
}

/// Object-safe, slice-level AEAD API.
///
/// Sizes of key, nonce and tag are checked before any cryptographic work;
/// a wrong size yields the matching `Invalid*Size` error and leaves `data`
/// untouched.
pub trait AeadApi {
    /// Encrypts `data` in place and writes the tag into `tag`.
    fn api_encrypt(
        &mut self,
        key: &[u8],
        nonce: &[u8],
        aad: &[u8],
        data: &mut [u8],
        tag: &mut [u8],
    ) -> Result<(), AeadError>;

    /// Verifies `tag` and decrypts `data` in place.
    fn api_decrypt(
        &mut self,
        key: &[u8],
        nonce: &[u8],
        aad: &[u8],
        data: &mut [u8],
        tag: &[u8],
    ) -> Result<(), AeadError>;

    fn api_key_size(&self) -> usize;
    fn api_nonce_size(&self) -> usize;
    fn api_tag_size(&self) -> usize;
}
