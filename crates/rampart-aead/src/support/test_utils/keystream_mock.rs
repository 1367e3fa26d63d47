// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use rampart_aead_chacha::ChaCha20;
use rampart_aead_core::consts::KEYSTREAM_BLOCK_SIZE;
use rampart_aead_core::{Key, KeystreamCipher, Nonce};

use super::event_log::{Event, EventLog};

/// Keystream mock for testing.
///
/// Delegates to [`ChaCha20`] so outputs stay correct, and records every call
/// into an [`EventLog`].
pub struct KeystreamMock {
    inner: ChaCha20,
    log: EventLog,
}

impl KeystreamMock {
    pub fn new(log: EventLog) -> Self {
        Self {
            inner: ChaCha20::default(),
            log,
        }
    }
}

impl KeystreamCipher for KeystreamMock {
    fn block(
        &mut self,
        key: &Key,
        counter: u32,
        nonce: &Nonce,
        output: &mut [u8; KEYSTREAM_BLOCK_SIZE],
    ) {
        self.log.push(Event::KeystreamBlock { counter });
        self.inner.block(key, counter, nonce, output);
    }

    fn apply_keystream(&mut self, key: &Key, counter: u32, nonce: &Nonce, data: &mut [u8]) {
        self.log.push(Event::KeystreamApply {
            counter,
            len: data.len(),
        });
        self.inner.apply_keystream(key, counter, nonce, data);
    }
}
