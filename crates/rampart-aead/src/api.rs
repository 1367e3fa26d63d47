// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use rampart_aead_core::consts::{KEY_SIZE, NONCE_SIZE, TAG_SIZE};
use rampart_aead_core::{AeadApi, AeadError, Key, KeystreamCipher, Nonce, OneTimeMac, Tag};

use crate::aead::ChaCha20Poly1305;

impl<K: KeystreamCipher, M: OneTimeMac> AeadApi for ChaCha20Poly1305<K, M> {
    fn api_encrypt(
        &mut self,
        key: &[u8],
        nonce: &[u8],
        aad: &[u8],
        data: &mut [u8],
        tag: &mut [u8],
    ) -> Result<(), AeadError> {
        let key = Key::try_from(key)?;
        let nonce = Nonce::try_from(nonce)?;

        if tag.len() != TAG_SIZE {
            return Err(AeadError::InvalidTagSize);
        }

        let computed = self.encrypt_in_place_detached(&key, &nonce, aad, data)?;
        tag.copy_from_slice(computed.as_bytes());

        Ok(())
    }

    fn api_decrypt(
        &mut self,
        key: &[u8],
        nonce: &[u8],
        aad: &[u8],
        data: &mut [u8],
        tag: &[u8],
    ) -> Result<(), AeadError> {
        let key = Key::try_from(key)?;
        let nonce = Nonce::try_from(nonce)?;
        let tag = Tag::try_from(tag)?;

        self.decrypt_in_place_detached(&key, &nonce, aad, data, &tag)
    }

    fn api_key_size(&self) -> usize {
        KEY_SIZE
    }

    fn api_nonce_size(&self) -> usize {
        NONCE_SIZE
    }

    fn api_tag_size(&self) -> usize {
        TAG_SIZE
    }
}
