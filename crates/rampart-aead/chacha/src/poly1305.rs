// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Minimal Poly1305 implementation with guaranteed zeroization.
//!
//! Implements the Poly1305 one-time authenticator (RFC 8439 Section 2.5)
//! with five 26-bit limbs. All sensitive state is zeroized after
//! finalization and on drop.

use zeroize::{Zeroize, ZeroizeOnDrop};

use rampart_aead_core::consts::MAC_BLOCK_SIZE;
use rampart_aead_core::{OneTimeMac, Subkey, Tag};
#[cfg(test)]
use rampart_util::is_slice_zeroized;
use rampart_util::{u32_from_le, u32_to_le};

const LIMB_MASK: u32 = 0x3ffffff;

/// Work variables for block processing.
#[derive(Default, Zeroize, ZeroizeOnDrop)]
pub(crate) struct Poly1305Block {
    t: [u32; 4],
    s: [u64; 4],
    d: [u64; 5],
    tmp: [u8; MAC_BLOCK_SIZE],
    le_bytes_tmp: [u8; 4],
    shifting_tmp_a: u32,
    shifting_tmp_b: u32,
}

#[cfg(test)]
impl Poly1305Block {
    pub(crate) fn is_zeroized(&self) -> bool {
        self.t.iter().all(|&w| w == 0)
            && self.s.iter().all(|&w| w == 0)
            && self.d.iter().all(|&w| w == 0)
            && is_slice_zeroized(&self.tmp)
            && is_slice_zeroized(&self.le_bytes_tmp)
            && self.shifting_tmp_a == 0
            && self.shifting_tmp_b == 0
    }
}

impl core::fmt::Debug for Poly1305Block {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Poly1305Block {{ [protected] }}")
    }
}

/// Work variables for finalization.
#[derive(Default, Zeroize, ZeroizeOnDrop)]
pub(crate) struct Poly1305Final {
    d: [u64; 5], // reduced accumulator
    g: [u64; 4], // h + 5 for comparison
    h: [u64; 4], // h0-h3 for tag
    g4: u64,     // overflow check
    mask: u64,
    shifting_tmp_a: u64,
    shifting_tmp_b: u64,
    le_bytes_tmp: [u8; 4],
    s_u32: u32,
}

#[cfg(test)]
impl Poly1305Final {
    pub(crate) fn is_zeroized(&self) -> bool {
        self.d.iter().all(|&w| w == 0)
            && self.g.iter().all(|&w| w == 0)
            && self.h.iter().all(|&w| w == 0)
            && self.g4 == 0
            && self.mask == 0
            && self.shifting_tmp_a == 0
            && self.shifting_tmp_b == 0
            && is_slice_zeroized(&self.le_bytes_tmp)
            && self.s_u32 == 0
    }
}

impl core::fmt::Debug for Poly1305Final {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Poly1305Final {{ [protected] }}")
    }
}

/// Poly1305 authenticator state.
#[derive(Default, Zeroize, ZeroizeOnDrop)]
pub struct Poly1305 {
    r: [u32; 5],
    s: [u8; 16],
    acc: [u64; 5],
    buffer: [u8; MAC_BLOCK_SIZE],
    buffer_len: usize,
    block: Poly1305Block,
    finalize: Poly1305Final,
}

impl Poly1305 {
    #[cfg(test)]
    pub(crate) fn is_zeroized(&self) -> bool {
        self.r.iter().all(|&w| w == 0)
            && is_slice_zeroized(&self.s)
            && self.acc.iter().all(|&w| w == 0)
            && is_slice_zeroized(&self.buffer)
            && self.buffer_len == 0
            && self.block.is_zeroized()
            && self.finalize.is_zeroized()
    }

    #[cfg(test)]
    pub(crate) fn has_pending_state(&self) -> bool {
        self.acc.iter().any(|&w| w != 0) || self.buffer_len != 0
    }

    /// Loads word `word` of `block.tmp` (little-endian) into `block.t[word]`.
    #[inline(always)]
    fn load_word(&mut self, word: usize) {
        self.block
            .le_bytes_tmp
            .copy_from_slice(&self.block.tmp[word * 4..word * 4 + 4]);
        u32_from_le(&mut self.block.t[word], &mut self.block.le_bytes_tmp);
    }

    fn clamp_r(&mut self, r_bytes: &[u8; MAC_BLOCK_SIZE]) {
        self.block.tmp.copy_from_slice(r_bytes);
        self.block.tmp[3] &= 0x0f;
        self.block.tmp[4] &= 0xfc;
        self.block.tmp[7] &= 0x0f;
        self.block.tmp[8] &= 0xfc;
        self.block.tmp[11] &= 0x0f;
        self.block.tmp[12] &= 0xfc;
        self.block.tmp[15] &= 0x0f;

        for word in 0..4 {
            self.load_word(word);
        }

        self.r[0] = self.block.t[0] & LIMB_MASK;

        self.block.shifting_tmp_a = self.block.t[0] >> 26;
        self.block.shifting_tmp_b = self.block.t[1] << 6;
        self.block.shifting_tmp_a |= self.block.shifting_tmp_b;
        self.r[1] = self.block.shifting_tmp_a & LIMB_MASK;

        self.block.shifting_tmp_a = self.block.t[1] >> 20;
        self.block.shifting_tmp_b = self.block.t[2] << 12;
        self.block.shifting_tmp_a |= self.block.shifting_tmp_b;
        self.r[2] = self.block.shifting_tmp_a & LIMB_MASK;

        self.block.shifting_tmp_a = self.block.t[2] >> 14;
        self.block.shifting_tmp_b = self.block.t[3] << 18;
        self.block.shifting_tmp_a |= self.block.shifting_tmp_b;
        self.r[3] = self.block.shifting_tmp_a & LIMB_MASK;

        self.r[4] = self.block.t[3] >> 8;

        self.block.zeroize();
    }

    /// Absorbs `block.tmp` with the given high bit (1 for full blocks, 0 for
    /// the already-padded final partial block).
    fn process_block_from_tmp(&mut self, hibit: u32) {
        for word in 0..4 {
            self.load_word(word);
        }

        self.acc[0] += (self.block.t[0] & LIMB_MASK) as u64;

        self.block.shifting_tmp_a = self.block.t[0] >> 26;
        self.block.shifting_tmp_b = self.block.t[1] << 6;
        self.block.shifting_tmp_a |= self.block.shifting_tmp_b;
        self.acc[1] += (self.block.shifting_tmp_a & LIMB_MASK) as u64;

        self.block.shifting_tmp_a = self.block.t[1] >> 20;
        self.block.shifting_tmp_b = self.block.t[2] << 12;
        self.block.shifting_tmp_a |= self.block.shifting_tmp_b;
        self.acc[2] += (self.block.shifting_tmp_a & LIMB_MASK) as u64;

        self.block.shifting_tmp_a = self.block.t[2] >> 14;
        self.block.shifting_tmp_b = self.block.t[3] << 18;
        self.block.shifting_tmp_a |= self.block.shifting_tmp_b;
        self.acc[3] += (self.block.shifting_tmp_a & LIMB_MASK) as u64;

        self.block.shifting_tmp_a = self.block.t[3] >> 8;
        self.block.shifting_tmp_b = hibit << 24;
        self.block.shifting_tmp_a |= self.block.shifting_tmp_b;
        self.acc[4] += self.block.shifting_tmp_a as u64;

        self.block.s[0] = (self.r[1] as u64) * 5;
        self.block.s[1] = (self.r[2] as u64) * 5;
        self.block.s[2] = (self.r[3] as u64) * 5;
        self.block.s[3] = (self.r[4] as u64) * 5;

        self.block.d[0] = self.acc[0] * (self.r[0] as u64)
            + self.acc[1] * self.block.s[3]
            + self.acc[2] * self.block.s[2]
            + self.acc[3] * self.block.s[1]
            + self.acc[4] * self.block.s[0];
        self.block.d[1] = self.acc[0] * (self.r[1] as u64)
            + self.acc[1] * (self.r[0] as u64)
            + self.acc[2] * self.block.s[3]
            + self.acc[3] * self.block.s[2]
            + self.acc[4] * self.block.s[1];
        self.block.d[2] = self.acc[0] * (self.r[2] as u64)
            + self.acc[1] * (self.r[1] as u64)
            + self.acc[2] * (self.r[0] as u64)
            + self.acc[3] * self.block.s[3]
            + self.acc[4] * self.block.s[2];
        self.block.d[3] = self.acc[0] * (self.r[3] as u64)
            + self.acc[1] * (self.r[2] as u64)
            + self.acc[2] * (self.r[1] as u64)
            + self.acc[3] * (self.r[0] as u64)
            + self.acc[4] * self.block.s[3];
        self.block.d[4] = self.acc[0] * (self.r[4] as u64)
            + self.acc[1] * (self.r[3] as u64)
            + self.acc[2] * (self.r[2] as u64)
            + self.acc[3] * (self.r[1] as u64)
            + self.acc[4] * (self.r[0] as u64);

        self.block.d[1] += self.block.d[0] >> 26;
        self.block.d[0] &= LIMB_MASK as u64;
        self.block.d[2] += self.block.d[1] >> 26;
        self.block.d[1] &= LIMB_MASK as u64;
        self.block.d[3] += self.block.d[2] >> 26;
        self.block.d[2] &= LIMB_MASK as u64;
        self.block.d[4] += self.block.d[3] >> 26;
        self.block.d[3] &= LIMB_MASK as u64;
        self.block.d[0] += (self.block.d[4] >> 26) * 5;
        self.block.d[4] &= LIMB_MASK as u64;
        self.block.d[1] += self.block.d[0] >> 26;
        self.block.d[0] &= LIMB_MASK as u64;

        self.acc.copy_from_slice(&self.block.d);

        self.block.zeroize();
    }

    /// Adds the little-endian word `s[offset..offset + 4]` into `finalize.s_u32`.
    #[inline(always)]
    fn load_s_word(&mut self, offset: usize) {
        self.finalize
            .le_bytes_tmp
            .copy_from_slice(&self.s[offset..offset + 4]);
        u32_from_le(&mut self.finalize.s_u32, &mut self.finalize.le_bytes_tmp);
    }

    /// Writes `finalize.h[word]` as four little-endian bytes of the tag.
    #[inline(always)]
    fn store_tag_word(&mut self, output: &mut Tag, word: usize) {
        self.finalize.s_u32 = self.finalize.h[word] as u32;
        u32_to_le(
            &mut self.finalize.s_u32,
            (&mut output.as_mut_bytes()[word * 4..word * 4 + 4])
                .try_into()
                .expect("infallible: tag word is exactly 4 bytes"),
        );
    }
}

impl OneTimeMac for Poly1305 {
    fn init(&mut self, key: &Subkey) {
        self.zeroize();

        let key = key.as_bytes();
        self.clamp_r(
            key[0..16]
                .try_into()
                .expect("infallible: key[0..16] is exactly 16 bytes"),
        );
        self.s.copy_from_slice(&key[16..32]);
    }

    fn update(&mut self, data: &[u8]) {
        let mut pos = 0;

        if self.buffer_len > 0 {
            let need = MAC_BLOCK_SIZE - self.buffer_len;
            let take = core::cmp::min(need, data.len());
            self.buffer[self.buffer_len..self.buffer_len + take].copy_from_slice(&data[..take]);
            self.buffer_len += take;
            pos = take;

            if self.buffer_len == MAC_BLOCK_SIZE {
                self.block.tmp.copy_from_slice(&self.buffer);
                self.buffer.zeroize();
                self.buffer_len = 0;
                self.process_block_from_tmp(1);
            }
        }

        while pos + MAC_BLOCK_SIZE <= data.len() {
            self.block
                .tmp
                .copy_from_slice(&data[pos..pos + MAC_BLOCK_SIZE]);
            self.process_block_from_tmp(1);
            pos += MAC_BLOCK_SIZE;
        }

        if pos < data.len() {
            let remaining = data.len() - pos;
            self.buffer[..remaining].copy_from_slice(&data[pos..]);
            self.buffer_len = remaining;
        }
    }

    fn finalize(&mut self, output: &mut Tag) {
        // Final partial block: zero pad, then the 0x01 marker right after the data
        if self.buffer_len > 0 {
            for i in (self.buffer_len + 1)..MAC_BLOCK_SIZE {
                self.buffer[i] = 0;
            }
            self.buffer[self.buffer_len] = 0x01;
            self.block.tmp.copy_from_slice(&self.buffer);
            self.buffer.zeroize();
            self.buffer_len = 0;
            self.process_block_from_tmp(0);
        }

        self.finalize.d.copy_from_slice(&self.acc);

        // Full carry propagation
        self.finalize.d[1] += self.finalize.d[0] >> 26;
        self.finalize.d[0] &= LIMB_MASK as u64;
        self.finalize.d[2] += self.finalize.d[1] >> 26;
        self.finalize.d[1] &= LIMB_MASK as u64;
        self.finalize.d[3] += self.finalize.d[2] >> 26;
        self.finalize.d[2] &= LIMB_MASK as u64;
        self.finalize.d[4] += self.finalize.d[3] >> 26;
        self.finalize.d[3] &= LIMB_MASK as u64;

        // Reduce mod 2^130 - 5
        self.finalize.d[0] += (self.finalize.d[4] >> 26) * 5;
        self.finalize.d[4] &= LIMB_MASK as u64;

        self.finalize.d[1] += self.finalize.d[0] >> 26;
        self.finalize.d[0] &= LIMB_MASK as u64;

        // g = h + 5
        self.finalize.g[0] = self.finalize.d[0] + 5;
        self.finalize.g[1] = self.finalize.d[1] + (self.finalize.g[0] >> 26);
        self.finalize.g[0] &= LIMB_MASK as u64;
        self.finalize.g[2] = self.finalize.d[2] + (self.finalize.g[1] >> 26);
        self.finalize.g[1] &= LIMB_MASK as u64;
        self.finalize.g[3] = self.finalize.d[3] + (self.finalize.g[2] >> 26);
        self.finalize.g[2] &= LIMB_MASK as u64;

        // Carry out of the top limb means h >= 2^130 - 5
        self.finalize.g4 = self.finalize.d[4] + (self.finalize.g[3] >> 26);
        self.finalize.g[3] &= LIMB_MASK as u64;

        // mask = all 1s keeps h, all 0s selects g
        self.finalize.mask = (self.finalize.g4 >> 26).wrapping_sub(1);

        for i in 0..4 {
            self.finalize.d[i] = (self.finalize.d[i] & self.finalize.mask)
                | (self.finalize.g[i] & !self.finalize.mask);
        }
        // g has no fifth limb
        self.finalize.d[4] &= self.finalize.mask;

        // Radix 2^26 to 4x32-bit
        self.finalize.shifting_tmp_a = self.finalize.d[1] & 0x3f;
        self.finalize.shifting_tmp_a <<= 26;
        self.finalize.h[0] = self.finalize.d[0] | self.finalize.shifting_tmp_a;

        self.finalize.shifting_tmp_a = self.finalize.d[1] >> 6;
        self.finalize.shifting_tmp_b = self.finalize.d[2] & 0xfff;
        self.finalize.shifting_tmp_b <<= 20;
        self.finalize.h[1] = self.finalize.shifting_tmp_a | self.finalize.shifting_tmp_b;

        self.finalize.shifting_tmp_a = self.finalize.d[2] >> 12;
        self.finalize.shifting_tmp_b = self.finalize.d[3] & 0x3ffff;
        self.finalize.shifting_tmp_b <<= 14;
        self.finalize.h[2] = self.finalize.shifting_tmp_a | self.finalize.shifting_tmp_b;

        self.finalize.shifting_tmp_a = self.finalize.d[3] >> 18;
        self.finalize.shifting_tmp_b = self.finalize.d[4] & 0xffffff;
        self.finalize.shifting_tmp_b <<= 8;
        self.finalize.h[3] = self.finalize.shifting_tmp_a | self.finalize.shifting_tmp_b;

        // tag = (h + s) mod 2^128
        self.load_s_word(0);
        self.finalize.h[0] += self.finalize.s_u32 as u64;

        self.load_s_word(4);
        self.finalize.h[1] += self.finalize.s_u32 as u64 + (self.finalize.h[0] >> 32);
        self.finalize.h[0] &= 0xffffffff;

        self.load_s_word(8);
        self.finalize.h[2] += self.finalize.s_u32 as u64 + (self.finalize.h[1] >> 32);
        self.finalize.h[1] &= 0xffffffff;

        self.load_s_word(12);
        self.finalize.h[3] += self.finalize.s_u32 as u64 + (self.finalize.h[2] >> 32);
        self.finalize.h[2] &= 0xffffffff;
        self.finalize.h[3] &= 0xffffffff;

        for word in 0..4 {
            self.store_tag_word(output, word);
        }

        // One-time key: nothing survives finalization
        self.zeroize();
    }
}

impl core::fmt::Debug for Poly1305 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Poly1305 {{ [protected] }}")
    }
}
