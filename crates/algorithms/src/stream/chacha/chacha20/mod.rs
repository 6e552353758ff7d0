//! ChaCha20 stream cipher
//!
//! This module implements the ChaCha20 core as defined in RFC 7539: a 20-round
//! ARX permutation over a state of constants, key, a 32-bit block counter and
//! a 96-bit nonce.

use byteorder::{ByteOrder, LittleEndian};
use djbaead_common::EphemeralSecret;
use djbaead_params::{CHACHA20_BLOCK_SIZE, CHACHA20_NONCE_SIZE, DJB_BLOCK_SIZE_IN_WORDS};

use crate::stream::djb::{shuffle_add, DjbCore, State, DJB_KEY_SIZE, SIGMA};
use crate::types::sealed::Sealed;

/// Index of the block counter word
pub(crate) const COUNTER_WORD: usize = 12;

/// ChaCha20 with a 96-bit nonce
#[derive(Debug, Clone, Copy, Default)]
pub struct ChaCha20Core;

/// ChaCha20 stream cipher producing `nonce || ciphertext`
#[cfg(feature = "alloc")]
pub type ChaCha20 = crate::stream::djb::DjbCipher<ChaCha20Core>;

impl Sealed for ChaCha20Core {}

impl DjbCore for ChaCha20Core {
    const NAME: &'static str = "ChaCha20";
    const AEAD_NAME: &'static str = "ChaCha20Poly1305";
    const NONCE_SIZE: usize = CHACHA20_NONCE_SIZE;

    fn initial_state(key: &[u8; DJB_KEY_SIZE], nonce: &[u8], counter: u32) -> State {
        let mut state = [0u32; DJB_BLOCK_SIZE_IN_WORDS];
        state[..4].copy_from_slice(&SIGMA);
        LittleEndian::read_u32_into(key, &mut state[4..12]);
        state[COUNTER_WORD] = counter;
        LittleEndian::read_u32_into(nonce, &mut state[13..16]);
        state
    }

    fn shuffle(state: &mut State) {
        rounds(state);
    }

    fn increment_counter(state: &mut State) {
        state[COUNTER_WORD] = state[COUNTER_WORD].wrapping_add(1);
    }
}

#[inline(always)]
fn quarter_round(state: &mut State, a: usize, b: usize, c: usize, d: usize) {
    state[a] = state[a].wrapping_add(state[b]);
    state[d] = (state[d] ^ state[a]).rotate_left(16);

    state[c] = state[c].wrapping_add(state[d]);
    state[b] = (state[b] ^ state[c]).rotate_left(12);

    state[a] = state[a].wrapping_add(state[b]);
    state[d] = (state[d] ^ state[a]).rotate_left(8);

    state[c] = state[c].wrapping_add(state[d]);
    state[b] = (state[b] ^ state[c]).rotate_left(7);
}

/// The 20 ChaCha rounds (10 column/diagonal double rounds), no feed-forward
pub(crate) fn rounds(state: &mut State) {
    for _ in 0..10 {
        // Column round
        quarter_round(state, 0, 4, 8, 12);
        quarter_round(state, 1, 5, 9, 13);
        quarter_round(state, 2, 6, 10, 14);
        quarter_round(state, 3, 7, 11, 15);

        // Diagonal round
        quarter_round(state, 0, 5, 10, 15);
        quarter_round(state, 1, 6, 11, 12);
        quarter_round(state, 2, 7, 8, 13);
        quarter_round(state, 3, 4, 9, 14);
    }
}

/// One serialized ChaCha20 keystream block (RFC 7539 section 2.3)
pub fn chacha20_block(
    key: &[u8; DJB_KEY_SIZE],
    nonce: &[u8; CHACHA20_NONCE_SIZE],
    counter: u32,
) -> [u8; CHACHA20_BLOCK_SIZE] {
    let state = EphemeralSecret::new(ChaCha20Core::initial_state(key, nonce, counter));
    let block = EphemeralSecret::new(shuffle_add::<ChaCha20Core>(&state));
    let mut out = [0u8; CHACHA20_BLOCK_SIZE];
    LittleEndian::write_u32_into(&*block, &mut out);
    out
}
