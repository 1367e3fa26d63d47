// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Tests for EventLog.

use crate::support::test_utils::{Event, EventLog};

#[test]
fn test_new_log_is_empty() {
    let log = EventLog::new();

    assert!(log.events().is_empty());
    assert!(log.mac_input().is_empty());
    assert!(log.block_counters().is_empty());
    assert!(log.keystream_applications().is_empty());
}

#[test]
fn test_clones_share_events() {
    let log = EventLog::new();
    let other = log.clone();

    other.push(Event::MacInit);
    log.push(Event::MacFinalize);

    assert_eq!(log.events(), vec![Event::MacInit, Event::MacFinalize]);
    assert_eq!(other.events(), log.events());
}

#[test]
fn test_filters() {
    let log = EventLog::new();

    log.push(Event::KeystreamBlock { counter: 0 });
    log.push(Event::MacInit);
    log.push(Event::MacUpdate(vec![1, 2]));
    log.push(Event::KeystreamApply { counter: 1, len: 9 });
    log.push(Event::MacUpdate(vec![3]));
    log.push(Event::MacFinalize);

    assert_eq!(log.mac_input(), vec![1, 2, 3]);
    assert_eq!(log.block_counters(), vec![0]);
    assert_eq!(log.keystream_applications(), vec![(1, 9)]);
    assert_eq!(log.position(|e| *e == Event::MacFinalize), Some(5));
    assert_eq!(log.position(|e| *e == Event::MacUpdate(vec![])), None);
}

#[test]
fn test_clear() {
    let log = EventLog::new();
    log.push(Event::MacInit);

    log.clear();

    assert!(log.events().is_empty());
}
