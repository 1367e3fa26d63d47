// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Poly1305 one-time key generation (RFC 8439 Section 2.6).

use zeroize::Zeroize;

use rampart_aead_core::consts::{KEYSTREAM_BLOCK_SIZE, SUBKEY_COUNTER};
use rampart_aead_core::{Key, KeystreamCipher, Nonce, Subkey};

/// Derives the per-message Poly1305 key: the first 32 bytes of keystream
/// block 0 under `(key, nonce)`.
///
/// The other half of the block is discarded and the scratch block is
/// zeroized before returning. Block 0 is never used for message content.
pub fn derive_subkey<K: KeystreamCipher>(keystream: &mut K, key: &Key, nonce: &Nonce) -> Subkey {
    let mut block = [0u8; KEYSTREAM_BLOCK_SIZE];
    keystream.block(key, SUBKEY_COUNTER, nonce, &mut block);

    let subkey = Subkey::from_keystream_block(&block);
    block.zeroize();

    subkey
}
