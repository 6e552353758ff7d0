//! Block-at-a-time keystream cursor
//!
//! A cursor lives for exactly one encrypt or decrypt call. It may hand out a
//! partial first block once (`read`, used for one-time key derivation) and
//! then whole blocks (`advance`), with the stream continuing byte-exactly
//! from wherever the partial read stopped.

use core::marker::PhantomData;

use djbaead_common::EphemeralSecret;
use djbaead_params::DJB_BLOCK_SIZE_IN_WORDS;

use super::{shuffle_add, DjbCore, State, DJB_KEY_SIZE};
use crate::error::{validate, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Fresh,
    PartiallyRead,
    Advancing,
}

/// Keystream generator scoped to a single call
///
/// Not `Clone`: two copies would replay the same keystream. All buffers are
/// zeroized when the cursor is dropped.
pub struct KeystreamCursor<C: DjbCore> {
    state: EphemeralSecret<State>,
    block: EphemeralSecret<State>,
    spliced: EphemeralSecret<State>,
    offset: usize,
    phase: Phase,
    _core: PhantomData<C>,
}

impl<C: DjbCore> KeystreamCursor<C> {
    /// Start a keystream at block `counter`
    pub(crate) fn new(key: &[u8; DJB_KEY_SIZE], nonce: &[u8], counter: u32) -> Self {
        let state = EphemeralSecret::new(C::initial_state(key, nonce, counter));
        let block = EphemeralSecret::new(shuffle_add::<C>(&state));
        Self {
            state,
            block,
            spliced: EphemeralSecret::new([0u32; DJB_BLOCK_SIZE_IN_WORDS]),
            offset: 0,
            phase: Phase::Fresh,
            _core: PhantomData,
        }
    }

    /// First `length` words of the current block, without moving the counter
    ///
    /// Only legal once, before any [`advance`](Self::advance), and only for
    /// `length < 16`.
    pub fn read(&mut self, length: usize) -> Result<&[u32]> {
        validate::parameter(
            self.phase == Phase::Fresh,
            "read",
            "read can only be called once and before advance",
        )?;
        validate::parameter(
            length < DJB_BLOCK_SIZE_IN_WORDS,
            "length",
            "length must be less than 16",
        )?;

        self.phase = Phase::PartiallyRead;
        self.offset = length;
        Ok(&self.block[..length])
    }

    /// Next 16 keystream words
    ///
    /// The tail of the current block (from the read offset on) followed by
    /// the head of the next one; with no prior `read` that is simply the
    /// current block. The counter then moves one step.
    pub fn advance(&mut self) -> &State {
        self.phase = Phase::Advancing;

        let tail = DJB_BLOCK_SIZE_IN_WORDS - self.offset;
        self.spliced[..tail].copy_from_slice(&self.block[self.offset..]);

        C::increment_counter(&mut self.state);
        *self.block = shuffle_add::<C>(&self.state);

        self.spliced[tail..].copy_from_slice(&self.block[..self.offset]);
        &self.spliced
    }
}
