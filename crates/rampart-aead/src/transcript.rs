// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Poly1305 input construction for the AEAD (RFC 8439 Section 2.8).
//!
//! Layout:
//!
//! ```text
//! AAD ‖ pad16 ‖ ciphertext ‖ pad16 ‖ le64(len(AAD)) ‖ le64(len(ciphertext))
//! ```
//!
//! Padding is zero bytes up to the next multiple of 16 and is omitted when a
//! part is already aligned (including when it is empty). The two length
//! fields are always present, so the total is always a multiple of 16.

use alloc::vec::Vec;

use zeroize::Zeroize;

use rampart_aead_core::consts::MAC_BLOCK_SIZE;
use rampart_aead_core::{OneTimeMac, Subkey, Tag};
use rampart_util::u64_to_le;

const ZERO_PAD: [u8; MAC_BLOCK_SIZE] = [0; MAC_BLOCK_SIZE];

/// Number of zero bytes needed to bring `len` to a multiple of 16.
#[inline(always)]
pub(crate) fn pad_len(len: usize) -> usize {
    (MAC_BLOCK_SIZE - (len % MAC_BLOCK_SIZE)) % MAC_BLOCK_SIZE
}

/// Smallest multiple of 16 that is `>= len`.
#[inline(always)]
pub(crate) fn padded_len(len: usize) -> usize {
    len + pad_len(len)
}

/// The byte sequence authenticated by the tag, borrowed from its parts.
///
/// A transcript never copies the ciphertext: [`feed`](Self::feed) streams
/// the padded layout straight into a MAC. [`to_bytes`](Self::to_bytes)
/// materializes the identical sequence for inspection.
#[derive(Clone, Copy)]
pub struct Transcript<'a> {
    aad: &'a [u8],
    ciphertext: &'a [u8],
}

/// Builds the transcript over `aad` and `ciphertext`.
///
/// The MAC input is always ciphertext; plaintext never enters a transcript.
pub fn build_transcript<'a>(aad: &'a [u8], ciphertext: &'a [u8]) -> Transcript<'a> {
    Transcript { aad, ciphertext }
}

impl<'a> Transcript<'a> {
    pub fn aad(&self) -> &'a [u8] {
        self.aad
    }

    pub fn ciphertext(&self) -> &'a [u8] {
        self.ciphertext
    }

    /// Total transcript length in bytes; always a multiple of 16.
    pub fn encoded_len(&self) -> usize {
        padded_len(self.aad.len()) + padded_len(self.ciphertext.len()) + MAC_BLOCK_SIZE
    }

    /// The trailing block: `le64(len(AAD)) ‖ le64(len(ciphertext))`.
    pub fn lengths_block(&self) -> [u8; MAC_BLOCK_SIZE] {
        let mut block = [0u8; MAC_BLOCK_SIZE];
        let mut aad_len = self.aad.len() as u64;
        let mut ct_len = self.ciphertext.len() as u64;

        u64_to_le(
            &mut aad_len,
            (&mut block[0..8])
                .try_into()
                .expect("infallible: block[0..8] is exactly 8 bytes"),
        );
        u64_to_le(
            &mut ct_len,
            (&mut block[8..16])
                .try_into()
                .expect("infallible: block[8..16] is exactly 8 bytes"),
        );

        block
    }

    /// Materializes the full transcript.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.encoded_len());

        out.extend_from_slice(self.aad);
        out.extend_from_slice(&ZERO_PAD[..pad_len(self.aad.len())]);
        out.extend_from_slice(self.ciphertext);
        out.extend_from_slice(&ZERO_PAD[..pad_len(self.ciphertext.len())]);
        out.extend_from_slice(&self.lengths_block());

        out
    }

    /// Streams the transcript into an already initialized MAC.
    pub fn feed<M: OneTimeMac>(&self, mac: &mut M) {
        mac.update(self.aad);
        mac.update(&ZERO_PAD[..pad_len(self.aad.len())]);
        mac.update(self.ciphertext);
        mac.update(&ZERO_PAD[..pad_len(self.ciphertext.len())]);

        let mut lengths = self.lengths_block();
        mac.update(&lengths);
        lengths.zeroize();
    }

    /// Computes the tag over this transcript under `subkey`.
    pub fn authenticate<M: OneTimeMac>(&self, mac: &mut M, subkey: &Subkey) -> Tag {
        let mut tag = Tag::default();

        mac.init(subkey);
        self.feed(mac);
        mac.finalize(&mut tag);

        tag
    }
}

impl core::fmt::Debug for Transcript<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Transcript")
            .field("aad_len", &self.aad.len())
            .field("ct_len", &self.ciphertext.len())
            .finish()
    }
}
