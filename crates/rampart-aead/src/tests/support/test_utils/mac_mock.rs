// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Tests for MacMock.

use crate::support::test_utils::{Event, EventLog, MacMock, MacMockBehaviour};
use crate::{OneTimeMac, Poly1305, Subkey};

#[test]
fn test_compute_delegates_and_records() {
    let log = EventLog::new();
    let mut mock = MacMock::new(log.clone(), MacMockBehaviour::None);
    let key = Subkey::new([0x0f; 32]);

    let from_mock = mock.compute(&key, b"message");
    let expected = Poly1305::default().compute(&key, b"message");

    assert_eq!(from_mock, expected);
    assert_eq!(
        log.events(),
        vec![
            Event::MacInit,
            Event::MacUpdate(b"message".to_vec()),
            Event::MacFinalize,
        ]
    );
}

#[test]
fn test_corrupt_tag_behaviour() {
    let log = EventLog::new();
    let mut mock = MacMock::new(log, MacMockBehaviour::CorruptTag);
    let key = Subkey::new([0x0f; 32]);
    let expected = Poly1305::default().compute(&key, b"message");

    let corrupted = mock.compute(&key, b"message");
    assert_ne!(corrupted, expected);
    assert_eq!(corrupted.as_bytes()[0], expected.as_bytes()[0] ^ 0x01);
    assert_eq!(corrupted.as_bytes()[1..], expected.as_bytes()[1..]);

    mock.change_behaviour(MacMockBehaviour::None);
    assert_eq!(mock.compute(&key, b"message"), expected);
}
