//! XChaCha20 stream cipher
//!
//! ChaCha20 extended to a 192-bit nonce. The first 16 nonce bytes and the key
//! go through HChaCha20 to derive a subkey; the remaining 8 bytes form the
//! nonce of an otherwise ordinary ChaCha20 state with a 32-bit counter.

use byteorder::{ByteOrder, LittleEndian};
use djbaead_common::EphemeralSecret;
use djbaead_params::{DJB_BLOCK_SIZE_IN_WORDS, HCHACHA20_INPUT_SIZE, XCHACHA20_NONCE_SIZE};

use crate::stream::chacha::chacha20::{rounds, COUNTER_WORD};
use crate::stream::djb::{DjbCore, State, DJB_KEY_SIZE, SIGMA};
use crate::types::sealed::Sealed;

/// XChaCha20 with a 192-bit nonce
#[derive(Debug, Clone, Copy, Default)]
pub struct XChaCha20Core;

/// XChaCha20 stream cipher producing `nonce || ciphertext`
#[cfg(feature = "alloc")]
pub type XChaCha20 = crate::stream::djb::DjbCipher<XChaCha20Core>;

impl Sealed for XChaCha20Core {}

impl DjbCore for XChaCha20Core {
    const NAME: &'static str = "XChaCha20";
    const AEAD_NAME: &'static str = "XChaCha20Poly1305";
    const NONCE_SIZE: usize = XCHACHA20_NONCE_SIZE;

    fn initial_state(key: &[u8; DJB_KEY_SIZE], nonce: &[u8], counter: u32) -> State {
        let (prefix, suffix) = nonce.split_at(HCHACHA20_INPUT_SIZE);
        let subkey = EphemeralSecret::new(hchacha20_words(key, prefix));

        let mut state = [0u32; DJB_BLOCK_SIZE_IN_WORDS];
        state[..4].copy_from_slice(&SIGMA);
        state[4..12].copy_from_slice(&subkey[..]);
        state[COUNTER_WORD] = counter;
        state[13] = 0;
        LittleEndian::read_u32_into(suffix, &mut state[14..16]);
        state
    }

    fn shuffle(state: &mut State) {
        rounds(state);
    }

    fn increment_counter(state: &mut State) {
        state[COUNTER_WORD] = state[COUNTER_WORD].wrapping_add(1);
    }
}

fn hchacha20_words(key: &[u8; DJB_KEY_SIZE], input: &[u8]) -> [u32; 8] {
    let mut state = EphemeralSecret::new([0u32; DJB_BLOCK_SIZE_IN_WORDS]);
    state[..4].copy_from_slice(&SIGMA);
    LittleEndian::read_u32_into(key, &mut state[4..12]);
    LittleEndian::read_u32_into(input, &mut state[12..16]);

    rounds(&mut state);

    let mut out = [0u32; 8];
    out[..4].copy_from_slice(&state[..4]);
    out[4..].copy_from_slice(&state[12..]);
    out
}

/// HChaCha20 subkey derivation
///
/// Runs the ChaCha20 rounds over `sigma || key || input` without the final
/// addition and keeps words 0..4 and 12..16.
pub fn hchacha20(
    key: &[u8; DJB_KEY_SIZE],
    input: &[u8; HCHACHA20_INPUT_SIZE],
) -> [u8; DJB_KEY_SIZE] {
    let words = EphemeralSecret::new(hchacha20_words(key, input));
    let mut out = [0u8; DJB_KEY_SIZE];
    LittleEndian::write_u32_into(&words[..], &mut out);
    out
}
