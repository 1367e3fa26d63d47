// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Differential tests against the RustCrypto `chacha20poly1305` crate.

use chacha20poly1305::aead::{Aead, KeyInit, Payload};
use proptest::prelude::*;

use rampart_aead::{AeadError, ChaCha20Poly1305, Key, Nonce};

fn reference_seal(key: &[u8; 32], nonce: &[u8; 12], aad: &[u8], plaintext: &[u8]) -> Vec<u8> {
    let cipher = chacha20poly1305::ChaCha20Poly1305::new(chacha20poly1305::Key::from_slice(key));
    cipher
        .encrypt(
            chacha20poly1305::Nonce::from_slice(nonce),
            Payload {
                msg: plaintext,
                aad,
            },
        )
        .expect("reference encryption failed")
}

proptest! {
    #[test]
    fn seal_matches_reference(
        key in any::<[u8; 32]>(),
        nonce in any::<[u8; 12]>(),
        aad in proptest::collection::vec(any::<u8>(), 0..100),
        plaintext in proptest::collection::vec(any::<u8>(), 0..1000),
    ) {
        let sealed = ChaCha20Poly1305::new()
            .seal(&Key::new(key), &Nonce::new(nonce), &aad, &plaintext)
            .expect("Failed to seal(..)");

        prop_assert_eq!(sealed, reference_seal(&key, &nonce, &aad, &plaintext));
    }

    #[test]
    fn opens_reference_output(
        key in any::<[u8; 32]>(),
        nonce in any::<[u8; 12]>(),
        aad in proptest::collection::vec(any::<u8>(), 0..100),
        plaintext in proptest::collection::vec(any::<u8>(), 0..1000),
    ) {
        let sealed = reference_seal(&key, &nonce, &aad, &plaintext);

        let opened = ChaCha20Poly1305::new()
            .open(&Key::new(key), &Nonce::new(nonce), &aad, &sealed)
            .expect("Failed to open(..)");

        prop_assert_eq!(opened, plaintext);
    }

    #[test]
    fn rejects_what_reference_rejects(
        key in any::<[u8; 32]>(),
        nonce in any::<[u8; 12]>(),
        plaintext in proptest::collection::vec(any::<u8>(), 0..200),
        position in any::<prop::sample::Index>(),
    ) {
        let mut sealed = reference_seal(&key, &nonce, b"", &plaintext);
        let at = position.index(sealed.len());
        sealed[at] ^= 0x01;

        let reference = chacha20poly1305::ChaCha20Poly1305::new(chacha20poly1305::Key::from_slice(&key))
            .decrypt(chacha20poly1305::Nonce::from_slice(&nonce), sealed.as_slice());
        let ours = ChaCha20Poly1305::new().open(&Key::new(key), &Nonce::new(nonce), b"", &sealed);

        prop_assert!(reference.is_err());
        prop_assert_eq!(ours, Err(AeadError::AuthenticationFailed));
    }
}

#[test]
fn multi_block_boundaries_match_reference() {
    let key = [0x5a; 32];
    let nonce = [0xa5; 12];

    for len in [63, 64, 65, 127, 128, 129, 4096 + 17] {
        let plaintext: Vec<u8> = (0..len).map(|i| i as u8).collect();

        let sealed = ChaCha20Poly1305::new()
            .seal(&Key::new(key), &Nonce::new(nonce), b"boundary", &plaintext)
            .expect("Failed to seal(..)");

        assert_eq!(
            sealed,
            reference_seal(&key, &nonce, b"boundary", &plaintext),
            "len {len}"
        );
    }
}
