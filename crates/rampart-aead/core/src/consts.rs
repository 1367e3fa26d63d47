// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Sizes and counters fixed by RFC 8439.

/// Key size in bytes
pub const KEY_SIZE: usize = 32;

/// Nonce size in bytes (96-bit IETF nonce)
pub const NONCE_SIZE: usize = 12;

/// Authentication tag size in bytes
pub const TAG_SIZE: usize = 16;

/// Poly1305 one-time key size in bytes
pub const SUBKEY_SIZE: usize = 32;

/// ChaCha20 keystream block size in bytes
pub const KEYSTREAM_BLOCK_SIZE: usize = 64;

/// Poly1305 block size, also the transcript padding boundary
pub const MAC_BLOCK_SIZE: usize = 16;

/// Block counter reserved for the Poly1305 one-time key
pub const SUBKEY_COUNTER: u32 = 0;

/// First block counter used for message content
pub const MESSAGE_COUNTER: u32 = 1;

/// Largest message the 32-bit counter covers when starting at block 1.
pub const MAX_MESSAGE_LEN: u64 = (u32::MAX as u64) * KEYSTREAM_BLOCK_SIZE as u64;
