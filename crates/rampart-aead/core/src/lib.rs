// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Core types, traits and errors shared by the rampart AEAD crates.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

#[cfg(test)]
mod tests;

pub mod consts;
mod error;
mod traits;
mod types;

pub use error::AeadError;
pub use traits::{AeadApi, KeystreamCipher, OneTimeMac};
pub use types::{Key, Nonce, Subkey, Tag};
