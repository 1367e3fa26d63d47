// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Tests for KeystreamMock.

use crate::support::test_utils::{Event, EventLog, KeystreamMock};
use crate::{ChaCha20, Key, KeystreamCipher, Nonce};

#[test]
fn test_block_delegates_and_records() {
    let log = EventLog::new();
    let mut mock = KeystreamMock::new(log.clone());
    let key = Key::new([0x01; 32]);
    let nonce = Nonce::new([0x02; 12]);
    let mut from_mock = [0u8; 64];
    let mut expected = [0u8; 64];

    mock.block(&key, 3, &nonce, &mut from_mock);
    ChaCha20::default().block(&key, 3, &nonce, &mut expected);

    assert_eq!(from_mock, expected);
    assert_eq!(log.events(), vec![Event::KeystreamBlock { counter: 3 }]);
}

#[test]
fn test_apply_keystream_delegates_and_records() {
    let log = EventLog::new();
    let mut mock = KeystreamMock::new(log.clone());
    let key = Key::new([0x01; 32]);
    let nonce = Nonce::new([0x02; 12]);

    let from_mock = mock.xor(&key, 1, &nonce, &[0x33; 100]);
    let expected = ChaCha20::default().xor(&key, 1, &nonce, &[0x33; 100]);

    assert_eq!(from_mock, expected);
    assert_eq!(
        log.events(),
        vec![Event::KeystreamApply { counter: 1, len: 100 }]
    );
}
