//! Shared helpers for the djbaead property and integration tests

use rand::{CryptoRng, Error, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// RNG that hands out a fixed nonce first, then seeded ChaCha20 output
///
/// Lets a test pin the nonce of one encryption while staying a valid
/// `CryptoRng` for anything that follows.
pub struct FixedNonceRng {
    nonce: Vec<u8>,
    fallback: ChaCha20Rng,
}

impl FixedNonceRng {
    /// Replay `nonce` on the first fill, then fall back to a seeded stream
    pub fn new(nonce: &[u8]) -> Self {
        Self {
            nonce: nonce.to_vec(),
            fallback: ChaCha20Rng::seed_from_u64(0),
        }
    }
}

impl RngCore for FixedNonceRng {
    fn next_u32(&mut self) -> u32 {
        self.fallback.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.fallback.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        if !self.nonce.is_empty() && dest.len() == self.nonce.len() {
            dest.copy_from_slice(&self.nonce);
            self.nonce.clear();
        } else {
            self.fallback.fill_bytes(dest);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl CryptoRng for FixedNonceRng {}

/// Decode a hex test vector, ignoring embedded whitespace
pub fn unhex(s: &str) -> Vec<u8> {
    let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    hex::decode(compact).unwrap()
}
