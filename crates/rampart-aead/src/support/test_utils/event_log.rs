// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

/// A single call observed by a mock primitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// `KeystreamCipher::block` with the given counter.
    KeystreamBlock { counter: u32 },
    /// `KeystreamCipher::apply_keystream` starting at `counter` over `len` bytes.
    KeystreamApply { counter: u32, len: usize },
    /// `OneTimeMac::init`.
    MacInit,
    /// `OneTimeMac::update` with a copy of the absorbed bytes.
    MacUpdate(Vec<u8>),
    /// `OneTimeMac::finalize`.
    MacFinalize,
}

/// Shared, ordered record of calls made on a set of mocks.
///
/// Clones share the same underlying log, so a keystream mock and a MAC mock
/// built from clones of one log interleave their events in call order.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<Event>>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&self, event: Event) {
        self.events.borrow_mut().push(event);
    }

    /// Snapshot of every event recorded so far.
    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    /// Concatenation of every byte passed to `OneTimeMac::update`.
    pub fn mac_input(&self) -> Vec<u8> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                Event::MacUpdate(bytes) => Some(bytes.as_slice()),
                _ => None,
            })
            .flatten()
            .copied()
            .collect()
    }

    /// Counters passed to `KeystreamCipher::block`, in order.
    pub fn block_counters(&self) -> Vec<u32> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                Event::KeystreamBlock { counter } => Some(*counter),
                _ => None,
            })
            .collect()
    }

    /// `(counter, len)` of every `apply_keystream` call, in order.
    pub fn keystream_applications(&self) -> Vec<(u32, usize)> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                Event::KeystreamApply { counter, len } => Some((*counter, *len)),
                _ => None,
            })
            .collect()
    }

    /// Index of the first event matching `predicate`.
    pub fn position(&self, predicate: impl Fn(&Event) -> bool) -> Option<usize> {
        self.events.borrow().iter().position(predicate)
    }
}
