// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! AEAD error types.

use crate::consts::{KEY_SIZE, MAX_MESSAGE_LEN, NONCE_SIZE, TAG_SIZE};

/// Errors that can occur during AEAD operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum AeadError {
    /// Tag verification failed: ciphertext, AAD, nonce or tag was modified.
    #[error("authentication failed: tag mismatch")]
    AuthenticationFailed,

    #[error("invalid key size: expected {KEY_SIZE} bytes")]
    InvalidKeySize,

    #[error("invalid nonce size: expected {NONCE_SIZE} bytes")]
    InvalidNonceSize,

    #[error("invalid tag size: expected {TAG_SIZE} bytes")]
    InvalidTagSize,

    #[error("ciphertext too short: expected at least {TAG_SIZE} bytes")]
    CiphertextTooShort,

    #[error("message too long: at most {MAX_MESSAGE_LEN} bytes")]
    MessageTooLong,
}

impl AeadError {
    /// Returns `true` for errors raised on the shape of the input, before any
    /// cryptographic computation took place.
    pub fn is_malformed_input(&self) -> bool {
        !matches!(self, AeadError::AuthenticationFailed)
    }
}
