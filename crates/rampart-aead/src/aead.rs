// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! ChaCha20-Poly1305 AEAD (RFC 8439 Section 2.8).
//!
//! Encryption derives the one-time key from block 0, encrypts from block 1,
//! then authenticates the ciphertext. Decryption authenticates first and
//! only runs the keystream once the tag has been verified in constant time.

use alloc::vec::Vec;

use zeroize::Zeroize;

use rampart_aead_chacha::{ChaCha20, Poly1305};
use rampart_aead_core::consts::{MAX_MESSAGE_LEN, MESSAGE_COUNTER, TAG_SIZE};
use rampart_aead_core::{AeadError, Key, KeystreamCipher, Nonce, OneTimeMac, Tag};
use rampart_util::try_split_at_from_end;

use crate::subkey::derive_subkey;
use crate::transcript::build_transcript;

/// Rejects messages the 32-bit block counter cannot cover from block 1.
#[inline]
pub(crate) fn check_message_len(aad_len: usize, msg_len: usize) -> Result<(), AeadError> {
    if msg_len as u64 > MAX_MESSAGE_LEN {
        #[cfg(feature = "tracing")]
        tracing::debug!(aad_len, ct_len = msg_len, "message exceeds block counter range");
        #[cfg(not(feature = "tracing"))]
        let _ = aad_len;

        return Err(AeadError::MessageTooLong);
    }

    Ok(())
}

/// ChaCha20-Poly1305 AEAD over a keystream primitive `K` and a MAC `M`.
///
/// Holds only scratch state, which the primitives scrub after every call
/// and on drop. An instance may be reused for any number of messages, under
/// any keys.
pub struct ChaCha20Poly1305<K = ChaCha20, M = Poly1305> {
    keystream: K,
    mac: M,
}

impl ChaCha20Poly1305 {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<K: Default, M: Default> Default for ChaCha20Poly1305<K, M> {
    fn default() -> Self {
        Self {
            keystream: K::default(),
            mac: M::default(),
        }
    }
}

impl<K: KeystreamCipher, M: OneTimeMac> ChaCha20Poly1305<K, M> {
    /// Builds the AEAD from explicit primitives.
    pub fn from_parts(keystream: K, mac: M) -> Self {
        Self { keystream, mac }
    }

    fn compute_tag(&mut self, key: &Key, nonce: &Nonce, aad: &[u8], ciphertext: &[u8]) -> Tag {
        let subkey = derive_subkey(&mut self.keystream, key, nonce);
        build_transcript(aad, ciphertext).authenticate(&mut self.mac, &subkey)
    }

    fn verify(
        &mut self,
        key: &Key,
        nonce: &Nonce,
        aad: &[u8],
        ciphertext: &[u8],
        tag: &Tag,
    ) -> Result<(), AeadError> {
        let mut expected = self.compute_tag(key, nonce, aad, ciphertext);
        let verified = expected == *tag;
        expected.zeroize();

        if !verified {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                aad_len = aad.len(),
                ct_len = ciphertext.len(),
                "authentication failed"
            );

            return Err(AeadError::AuthenticationFailed);
        }

        Ok(())
    }

    /// Encrypts `buffer` in place and returns the detached tag.
    pub fn encrypt_in_place_detached(
        &mut self,
        key: &Key,
        nonce: &Nonce,
        aad: &[u8],
        buffer: &mut [u8],
    ) -> Result<Tag, AeadError> {
        check_message_len(aad.len(), buffer.len())?;

        let subkey = derive_subkey(&mut self.keystream, key, nonce);
        self.keystream
            .apply_keystream(key, MESSAGE_COUNTER, nonce, buffer);

        Ok(build_transcript(aad, buffer).authenticate(&mut self.mac, &subkey))
    }

    /// Verifies `tag` over `buffer`, then decrypts it in place.
    ///
    /// On [`AeadError::AuthenticationFailed`] the buffer is zeroized and no
    /// keystream has been applied to it.
    pub fn decrypt_in_place_detached(
        &mut self,
        key: &Key,
        nonce: &Nonce,
        aad: &[u8],
        buffer: &mut [u8],
        tag: &Tag,
    ) -> Result<(), AeadError> {
        check_message_len(aad.len(), buffer.len())?;

        if let Err(err) = self.verify(key, nonce, aad, buffer, tag) {
            buffer.zeroize();
            return Err(err);
        }

        self.keystream
            .apply_keystream(key, MESSAGE_COUNTER, nonce, buffer);

        Ok(())
    }

    /// Encrypts `plaintext`, returning the ciphertext and its tag.
    pub fn encrypt(
        &mut self,
        key: &Key,
        nonce: &Nonce,
        aad: &[u8],
        plaintext: &[u8],
    ) -> Result<(Vec<u8>, Tag), AeadError> {
        check_message_len(aad.len(), plaintext.len())?;

        let mut ciphertext = plaintext.to_vec();
        let tag = self.encrypt_in_place_detached(key, nonce, aad, &mut ciphertext)?;

        Ok((ciphertext, tag))
    }

    /// Verifies `tag` and returns the plaintext. `ciphertext` is left untouched.
    pub fn decrypt(
        &mut self,
        key: &Key,
        nonce: &Nonce,
        aad: &[u8],
        ciphertext: &[u8],
        tag: &Tag,
    ) -> Result<Vec<u8>, AeadError> {
        check_message_len(aad.len(), ciphertext.len())?;
        self.verify(key, nonce, aad, ciphertext, tag)?;

        let mut plaintext = ciphertext.to_vec();
        self.keystream
            .apply_keystream(key, MESSAGE_COUNTER, nonce, &mut plaintext);

        Ok(plaintext)
    }

    /// Encrypts `plaintext` and returns `ciphertext ‖ tag`.
    pub fn seal(
        &mut self,
        key: &Key,
        nonce: &Nonce,
        aad: &[u8],
        plaintext: &[u8],
    ) -> Result<Vec<u8>, AeadError> {
        check_message_len(aad.len(), plaintext.len())?;

        let mut sealed = Vec::with_capacity(plaintext.len() + TAG_SIZE);
        sealed.extend_from_slice(plaintext);

        let tag = self.encrypt_in_place_detached(key, nonce, aad, &mut sealed)?;
        sealed.extend_from_slice(tag.as_bytes());

        Ok(sealed)
    }

    /// Splits `ciphertext ‖ tag`, verifies and returns the plaintext.
    pub fn open(
        &mut self,
        key: &Key,
        nonce: &Nonce,
        aad: &[u8],
        sealed: &[u8],
    ) -> Result<Vec<u8>, AeadError> {
        let (ciphertext, tag) =
            try_split_at_from_end(sealed, TAG_SIZE).ok_or(AeadError::CiphertextTooShort)?;
        let tag = Tag::try_from(tag)?;

        self.decrypt(key, nonce, aad, ciphertext, &tag)
    }
}

impl<K, M> core::fmt::Debug for ChaCha20Poly1305<K, M> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "ChaCha20Poly1305 {{ [protected] }}")
    }
}
