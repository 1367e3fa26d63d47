// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! ChaCha20 stream cipher implementation (RFC 8439 Section 2.3 and 2.4)
//!
//! All working state lives in the struct and is zeroized after every block
//! and on drop.

use zeroize::{Zeroize, ZeroizeOnDrop};

use rampart_aead_core::consts::KEYSTREAM_BLOCK_SIZE;
use rampart_aead_core::{Key, KeystreamCipher, Nonce};
#[cfg(test)]
use rampart_util::is_slice_zeroized;
use rampart_util::{u32_from_le, u32_to_le};

/// "expand 32-byte k"
const SIGMA: [u32; 4] = [0x61707865, 0x3320646e, 0x79622d32, 0x6b206574];

/// ChaCha20 cipher state with guaranteed zeroization.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ChaCha20 {
    initial: [u32; 16],
    working: [u32; 16],
    le_bytes_tmp: [u8; 4],
    keystream: [u8; KEYSTREAM_BLOCK_SIZE],
    // Quarter-round temporaries
    qr_a: u32,
    qr_b: u32,
    qr_c: u32,
    qr_d: u32,
}

impl Default for ChaCha20 {
    fn default() -> Self {
        Self {
            initial: [0; 16],
            working: [0; 16],
            le_bytes_tmp: [0; 4],
            keystream: [0; KEYSTREAM_BLOCK_SIZE],
            qr_a: 0,
            qr_b: 0,
            qr_c: 0,
            qr_d: 0,
        }
    }
}

impl ChaCha20 {
    #[cfg(test)]
    pub(crate) fn is_zeroized(&self) -> bool {
        self.initial.iter().all(|&w| w == 0)
            && self.working.iter().all(|&w| w == 0)
            && is_slice_zeroized(&self.le_bytes_tmp)
            && is_slice_zeroized(&self.keystream)
            && self.qr_a == 0
            && self.qr_b == 0
            && self.qr_c == 0
            && self.qr_d == 0
    }

    #[inline(always)]
    fn quarter_round(&mut self, a: usize, b: usize, c: usize, d: usize) {
        self.qr_a = self.working[a];
        self.qr_b = self.working[b];
        self.qr_c = self.working[c];
        self.qr_d = self.working[d];

        self.qr_a = self.qr_a.wrapping_add(self.qr_b);
        self.qr_d ^= self.qr_a;
        self.qr_d = self.qr_d.rotate_left(16);

        self.qr_c = self.qr_c.wrapping_add(self.qr_d);
        self.qr_b ^= self.qr_c;
        self.qr_b = self.qr_b.rotate_left(12);

        self.qr_a = self.qr_a.wrapping_add(self.qr_b);
        self.qr_d ^= self.qr_a;
        self.qr_d = self.qr_d.rotate_left(8);

        self.qr_c = self.qr_c.wrapping_add(self.qr_d);
        self.qr_b ^= self.qr_c;
        self.qr_b = self.qr_b.rotate_left(7);

        self.working[a] = self.qr_a;
        self.working[b] = self.qr_b;
        self.working[c] = self.qr_c;
        self.working[d] = self.qr_d;
    }

    #[inline(always)]
    fn init_state(&mut self, key: &Key, counter: u32, nonce: &Nonce) {
        let key = key.as_bytes();
        let nonce = nonce.as_bytes();

        self.initial[..4].copy_from_slice(&SIGMA);

        for i in 0..8 {
            self.le_bytes_tmp.copy_from_slice(&key[i * 4..i * 4 + 4]);
            u32_from_le(&mut self.initial[4 + i], &mut self.le_bytes_tmp);
        }

        self.initial[12] = counter;

        for i in 0..3 {
            self.le_bytes_tmp.copy_from_slice(&nonce[i * 4..i * 4 + 4]);
            u32_from_le(&mut self.initial[13 + i], &mut self.le_bytes_tmp);
        }
    }

    /// 20 rounds as 10 column/diagonal double rounds.
    #[inline(always)]
    fn do_rounds(&mut self) {
        for _ in 0..10 {
            self.quarter_round(0, 4, 8, 12);
            self.quarter_round(1, 5, 9, 13);
            self.quarter_round(2, 6, 10, 14);
            self.quarter_round(3, 7, 11, 15);

            self.quarter_round(0, 5, 10, 15);
            self.quarter_round(1, 6, 11, 12);
            self.quarter_round(2, 7, 8, 13);
            self.quarter_round(3, 4, 9, 14);
        }
    }

    /// Generate keystream block into self.keystream
    #[inline(always)]
    fn generate_block(&mut self, key: &Key, counter: u32, nonce: &Nonce) {
        self.init_state(key, counter, nonce);
        self.working.copy_from_slice(&self.initial);

        self.do_rounds();

        for i in 0..16 {
            self.working[i] = self.working[i].wrapping_add(self.initial[i]);
            u32_to_le(
                &mut self.working[i],
                (&mut self.keystream[i * 4..i * 4 + 4])
                    .try_into()
                    .expect("infallible: keystream slice is exactly 4 bytes"),
            );
        }

        self.initial.zeroize();
        self.qr_a.zeroize();
        self.qr_b.zeroize();
        self.qr_c.zeroize();
        self.qr_d.zeroize();
    }
}

impl KeystreamCipher for ChaCha20 {
    fn block(
        &mut self,
        key: &Key,
        counter: u32,
        nonce: &Nonce,
        output: &mut [u8; KEYSTREAM_BLOCK_SIZE],
    ) {
        self.generate_block(key, counter, nonce);
        output.copy_from_slice(&self.keystream);
        self.keystream.zeroize();
    }

    fn apply_keystream(&mut self, key: &Key, counter: u32, nonce: &Nonce, data: &mut [u8]) {
        for (i, chunk) in data.chunks_mut(KEYSTREAM_BLOCK_SIZE).enumerate() {
            self.generate_block(key, counter.wrapping_add(i as u32), nonce);

            for (byte, ks_byte) in chunk.iter_mut().zip(self.keystream.iter()) {
                *byte ^= ks_byte;
            }
        }

        self.keystream.zeroize();
    }
}

impl core::fmt::Debug for ChaCha20 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "ChaCha20 {{ [protected] }}")
    }
}
