// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! ChaCha20 and Poly1305 primitives for the rampart AEAD.
//!
//! Both types hold their scratch state inline and scrub it after each call,
//! so a single instance can be reused across messages without carrying
//! key material from one to the next.

#![cfg_attr(not(test), no_std)]

#[cfg(test)]
mod tests;

mod chacha20;
mod poly1305;

pub use chacha20::ChaCha20;
pub use poly1305::Poly1305;
