//! Poly1305 one-time authenticator
//!
//! Implements RFC 7539 section 2.5 with five 26-bit limbs and 64-bit
//! products. Input is absorbed incrementally; the final reduction selects
//! between `h` and `h - p` with a mask rather than a branch.

use byteorder::{ByteOrder, LittleEndian};
use djbaead_internal::constant_time::{ct_eq, ct_mask_from_msb, ct_select_u64};
use djbaead_params::{POLY1305_BLOCK_SIZE, POLY1305_KEY_SIZE, POLY1305_TAG_SIZE};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{validate, Result};

const LIMB_MASK: u32 = 0x3ff_ffff;

/// High bit added to every full 16-byte block (2^128 in limb 4)
const HIBIT: u32 = 1 << 24;

#[inline(always)]
fn load(bytes: &[u8], offset: usize) -> u32 {
    LittleEndian::read_u32(&bytes[offset..offset + 4])
}

/// Streaming Poly1305 state
///
/// A key must authenticate a single message only. The state, including the
/// key halves, is zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Poly1305 {
    r: [u32; 5],
    h: [u32; 5],
    pad: [u32; 4],
    buffer: [u8; POLY1305_BLOCK_SIZE],
    buffered: usize,
}

impl Poly1305 {
    /// Create a new instance from a 32-byte one-time key `r || s`
    pub fn new(key: &[u8; POLY1305_KEY_SIZE]) -> Self {
        // clamp r
        let r = [
            load(key, 0) & 0x3ff_ffff,
            (load(key, 3) >> 2) & 0x3ff_ff03,
            (load(key, 6) >> 4) & 0x3ff_c0ff,
            (load(key, 9) >> 6) & 0x3f0_3fff,
            (load(key, 12) >> 8) & 0x00f_ffff,
        ];

        let mut pad = [0u32; 4];
        LittleEndian::read_u32_into(&key[16..], &mut pad);

        Self {
            r,
            h: [0; 5],
            pad,
            buffer: [0; POLY1305_BLOCK_SIZE],
            buffered: 0,
        }
    }

    /// Create a new instance from a key slice, checking its length
    pub fn new_from_slice(key: &[u8]) -> Result<Self> {
        validate::key_length("Poly1305", key.len(), POLY1305_KEY_SIZE)?;
        let mut k = [0u8; POLY1305_KEY_SIZE];
        k.copy_from_slice(key);
        let mac = Self::new(&k);
        k.zeroize();
        Ok(mac)
    }

    /// Absorb more message bytes
    pub fn update(&mut self, mut data: &[u8]) {
        if self.buffered > 0 {
            let take = (POLY1305_BLOCK_SIZE - self.buffered).min(data.len());
            self.buffer[self.buffered..self.buffered + take].copy_from_slice(&data[..take]);
            self.buffered += take;
            data = &data[take..];
            if self.buffered < POLY1305_BLOCK_SIZE {
                return;
            }
            let block = self.buffer;
            self.block(&block, HIBIT);
            self.buffered = 0;
        }

        let mut blocks = data.chunks_exact(POLY1305_BLOCK_SIZE);
        for block in &mut blocks {
            self.block(block, HIBIT);
        }

        let rest = blocks.remainder();
        self.buffer[..rest.len()].copy_from_slice(rest);
        self.buffered = rest.len();
    }

    /// Absorb `data`, then zero bytes up to the next 16-byte boundary
    ///
    /// Nothing is added when the absorbed length is already aligned.
    pub fn update_padded(&mut self, data: &[u8]) {
        self.update(data);
        if self.buffered > 0 {
            const ZERO16: [u8; POLY1305_BLOCK_SIZE] = [0; POLY1305_BLOCK_SIZE];
            let fill = POLY1305_BLOCK_SIZE - self.buffered;
            self.update(&ZERO16[..fill]);
        }
    }

    fn block(&mut self, m: &[u8], hibit: u32) {
        let [r0, r1, r2, r3, r4] = self.r.map(u64::from);
        let (s1, s2, s3, s4) = (r1 * 5, r2 * 5, r3 * 5, r4 * 5);

        let h0 = u64::from(self.h[0] + (load(m, 0) & LIMB_MASK));
        let h1 = u64::from(self.h[1] + ((load(m, 3) >> 2) & LIMB_MASK));
        let h2 = u64::from(self.h[2] + ((load(m, 6) >> 4) & LIMB_MASK));
        let h3 = u64::from(self.h[3] + ((load(m, 9) >> 6) & LIMB_MASK));
        let h4 = u64::from(self.h[4] + ((load(m, 12) >> 8) | hibit));

        let d0 = h0 * r0 + h1 * s4 + h2 * s3 + h3 * s2 + h4 * s1;
        let mut d1 = h0 * r1 + h1 * r0 + h2 * s4 + h3 * s3 + h4 * s2;
        let mut d2 = h0 * r2 + h1 * r1 + h2 * r0 + h3 * s4 + h4 * s3;
        let mut d3 = h0 * r3 + h1 * r2 + h2 * r1 + h3 * r0 + h4 * s4;
        let mut d4 = h0 * r4 + h1 * r3 + h2 * r2 + h3 * r1 + h4 * r0;

        // partial reduction mod 2^130 - 5
        let mask = u64::from(LIMB_MASK);
        d1 += d0 >> 26;
        d2 += d1 >> 26;
        d3 += d2 >> 26;
        d4 += d3 >> 26;
        let mut h0 = (d0 & mask) + (d4 >> 26) * 5;
        let h1 = (d1 & mask) + (h0 >> 26);
        h0 &= mask;

        self.h = [
            h0 as u32,
            h1 as u32,
            (d2 & mask) as u32,
            (d3 & mask) as u32,
            (d4 & mask) as u32,
        ];
    }

    /// Finish the computation and return the 16-byte tag
    pub fn finalize(mut self) -> [u8; POLY1305_TAG_SIZE] {
        if self.buffered > 0 {
            let mut last = [0u8; POLY1305_BLOCK_SIZE];
            last[..self.buffered].copy_from_slice(&self.buffer[..self.buffered]);
            last[self.buffered] = 1;
            self.block(&last, 0);
            last.zeroize();
        }

        // full carry
        let mask = u64::from(LIMB_MASK);
        let [mut h0, mut h1, mut h2, mut h3, mut h4] = self.h.map(u64::from);
        h2 += h1 >> 26;
        h1 &= mask;
        h3 += h2 >> 26;
        h2 &= mask;
        h4 += h3 >> 26;
        h3 &= mask;
        h0 += (h4 >> 26) * 5;
        h4 &= mask;
        h1 += h0 >> 26;
        h0 &= mask;

        // g = h + 5 - 2^130
        let mut g0 = h0 + 5;
        let mut g1 = h1 + (g0 >> 26);
        g0 &= mask;
        let mut g2 = h2 + (g1 >> 26);
        g1 &= mask;
        let mut g3 = h3 + (g2 >> 26);
        g2 &= mask;
        let g4 = (h4 + (g3 >> 26)).wrapping_sub(1 << 26);
        g3 &= mask;

        // borrow out of g4 means h < p: keep h
        let keep_h = ct_mask_from_msb(g4);
        let h0 = ct_select_u64(h0, g0, keep_h);
        let h1 = ct_select_u64(h1, g1, keep_h);
        let h2 = ct_select_u64(h2, g2, keep_h);
        let h3 = ct_select_u64(h3, g3, keep_h);
        let h4 = ct_select_u64(h4, g4, keep_h);

        // h mod 2^128, as four 32-bit words
        let words = [
            (h0 | (h1 << 26)) & 0xffff_ffff,
            ((h1 >> 6) | (h2 << 20)) & 0xffff_ffff,
            ((h2 >> 12) | (h3 << 14)) & 0xffff_ffff,
            ((h3 >> 18) | (h4 << 8)) & 0xffff_ffff,
        ];

        let mut tag = [0u8; POLY1305_TAG_SIZE];
        let mut carry = 0u64;
        for (i, (word, pad)) in words.iter().zip(self.pad.iter()).enumerate() {
            let f = word + u64::from(*pad) + carry;
            LittleEndian::write_u32(&mut tag[i * 4..], f as u32);
            carry = f >> 32;
        }
        tag
    }

    /// One-shot tag over `data`
    pub fn compute(key: &[u8; POLY1305_KEY_SIZE], data: &[u8]) -> [u8; POLY1305_TAG_SIZE] {
        let mut mac = Self::new(key);
        mac.update(data);
        mac.finalize()
    }

    /// Check `tag` against the tag of `data` in constant time
    pub fn verify(key: &[u8; POLY1305_KEY_SIZE], data: &[u8], tag: &[u8]) -> Result<()> {
        let mut expected = Self::compute(key, data);
        let ok = ct_eq(expected, tag);
        expected.zeroize();
        validate::authentication(ok, "Poly1305")
    }
}

impl core::fmt::Debug for Poly1305 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Poly1305 { .. }")
    }
}
