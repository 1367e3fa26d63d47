// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use rampart_aead_chacha::Poly1305;
use rampart_aead_core::{OneTimeMac, Subkey, Tag};

use super::event_log::{Event, EventLog};

/// Configurable behavior for [`MacMock`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MacMockBehaviour {
    /// Normal operation (delegates to Poly1305).
    None,
    /// Flip the low bit of the first tag byte on every finalize.
    CorruptTag,
}

/// MAC mock for testing.
///
/// Delegates to [`Poly1305`] and records every call into an [`EventLog`].
/// [`MacMockBehaviour::CorruptTag`] simulates a MAC that disagrees with the
/// one used at encryption time.
pub struct MacMock {
    inner: Poly1305,
    log: EventLog,
    behaviour: MacMockBehaviour,
}

impl MacMock {
    pub fn new(log: EventLog, behaviour: MacMockBehaviour) -> Self {
        Self {
            inner: Poly1305::default(),
            log,
            behaviour,
        }
    }

    /// Changes the mock behavior at runtime.
    pub fn change_behaviour(&mut self, behaviour: MacMockBehaviour) {
        self.behaviour = behaviour;
    }
}

impl OneTimeMac for MacMock {
    fn init(&mut self, key: &Subkey) {
        self.log.push(Event::MacInit);
        self.inner.init(key);
    }

    fn update(&mut self, data: &[u8]) {
        self.log.push(Event::MacUpdate(data.to_vec()));
        self.inner.update(data);
    }

    fn finalize(&mut self, tag: &mut Tag) {
        self.log.push(Event::MacFinalize);
        self.inner.finalize(tag);

        if self.behaviour == MacMockBehaviour::CorruptTag {
            tag.as_mut_bytes()[0] ^= 0x01;
        }
    }
}
