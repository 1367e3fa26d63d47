// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Differential tests against the RustCrypto `poly1305` crate.

use poly1305::universal_hash::KeyInit;
use proptest::prelude::*;

use rampart_aead_chacha::Poly1305;
use rampart_aead_core::{OneTimeMac, Subkey, Tag};

fn reference_tag(key: &[u8; 32], message: &[u8]) -> [u8; 16] {
    let mac = poly1305::Poly1305::new(poly1305::Key::from_slice(key));
    mac.compute_unpadded(message).into()
}

proptest! {
    #[test]
    fn poly1305_matches_reference(
        key in any::<[u8; 32]>(),
        message in proptest::collection::vec(any::<u8>(), 0..600),
    ) {
        let mut mac = Poly1305::default();

        let tag = mac.compute(&Subkey::new(key), &message);

        prop_assert_eq!(tag.into_bytes(), reference_tag(&key, &message));
    }

    #[test]
    fn poly1305_split_update_matches_reference(
        key in any::<[u8; 32]>(),
        message in proptest::collection::vec(any::<u8>(), 1..300),
        split in any::<prop::sample::Index>(),
    ) {
        let at = split.index(message.len());
        let mut mac = Poly1305::default();
        let mut tag = Tag::default();

        mac.init(&Subkey::new(key));
        mac.update(&message[..at]);
        mac.update(&message[at..]);
        mac.finalize(&mut tag);

        prop_assert_eq!(tag.into_bytes(), reference_tag(&key, &message));
    }
}

#[test]
fn poly1305_all_ones_key_matches_reference() {
    // Exercises the final h >= p reduction path
    let key = [0xff; 32];
    let message = [0xff; 160];
    let mut mac = Poly1305::default();

    let tag = mac.compute(&Subkey::new(key), &message);

    assert_eq!(tag.into_bytes(), reference_tag(&key, &message));
}
