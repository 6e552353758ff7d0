//! Generic engine shared by the DJB family of stream ciphers
//!
//! Every member of the family (ChaCha20, XChaCha20, ...) works on the same
//! model: a 16-word state built from constants, key, a block counter and the
//! nonce; a keyed permutation ("shuffle") over that state; and a keystream
//! block defined as `shuffle(state) + state`, word by word. A concrete cipher
//! only supplies the state layout, the shuffle and the counter step through
//! [`DjbCore`]; everything else lives here.

use djbaead_params::{CHACHA20_KEY_SIZE, DJB_BLOCK_SIZE_IN_WORDS};

use crate::types::sealed::Sealed;

#[cfg(feature = "alloc")]
pub mod cipher;
pub mod cursor;

#[cfg(feature = "alloc")]
pub use cipher::DjbCipher;
pub use cursor::KeystreamCursor;

/// A DJB cipher state, also the shape of one keystream block
pub type State = [u32; DJB_BLOCK_SIZE_IN_WORDS];

/// Key size shared by every cipher in the family
pub const DJB_KEY_SIZE: usize = CHACHA20_KEY_SIZE;

/// "expand 32-byte k" as little-endian words
pub const SIGMA: [u32; 4] = [0x6170_7865, 0x3320_646e, 0x7962_2d32, 0x6b20_6574];

/// Cipher-specific behaviour plugged into the shared engine
///
/// Implementations are zero-sized strategy types. The trait is sealed: the
/// set of ciphers is closed and fixed at the type level of each instance.
pub trait DjbCore: Sealed + Copy + Default + core::fmt::Debug + Send + Sync + 'static {
    /// Stream cipher name, used in errors and diagnostics
    const NAME: &'static str;

    /// Name of the cipher combined with Poly1305
    const AEAD_NAME: &'static str;

    /// Nonce size in bytes
    const NONCE_SIZE: usize;

    /// Build the state for `key`, `nonce` and the block `counter`
    ///
    /// `nonce` is exactly [`DjbCore::NONCE_SIZE`] bytes when called by the
    /// engine; `DjbCipher::cursor` checks the length for outside callers.
    ///
    /// # Panics
    ///
    /// The crate's cores panic if `nonce` is not exactly
    /// [`DjbCore::NONCE_SIZE`] bytes.
    fn initial_state(key: &[u8; DJB_KEY_SIZE], nonce: &[u8], counter: u32) -> State;

    /// Keyed permutation of the state, in place
    fn shuffle(state: &mut State);

    /// Step the block counter by exactly one
    fn increment_counter(state: &mut State);
}

/// Keystream block for `state`: `shuffle(state) + state`, word-wise mod 2^32
pub fn shuffle_add<C: DjbCore>(state: &State) -> State {
    let mut x = *state;
    C::shuffle(&mut x);
    for (out, input) in x.iter_mut().zip(state.iter()) {
        *out = out.wrapping_add(*input);
    }
    x
}
