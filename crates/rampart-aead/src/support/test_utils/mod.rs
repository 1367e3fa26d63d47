// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

mod event_log;
mod keystream_mock;
mod mac_mock;

pub use event_log::{Event, EventLog};
pub use keystream_mock::KeystreamMock;
pub use mac_mock::{MacMock, MacMockBehaviour};
