//! Encryption capabilities
//!
//! A keyset or registry layer holds primitives behind these traits and never
//! needs to know which cipher variant sits underneath. Implementations are
//! immutable once built and may be shared across threads.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::error::Result;

/// Authenticated encryption with associated data
///
/// `encrypt` produces a self-contained message that carries everything
/// `decrypt` needs besides the key and the associated data.
pub trait Aead: Send + Sync {
    /// Encrypt `plaintext` and authenticate it together with `associated_data`
    fn encrypt(&self, plaintext: &[u8], associated_data: &[u8]) -> Result<Vec<u8>>;

    /// Verify and decrypt a message produced by [`Aead::encrypt`]
    ///
    /// Returns no plaintext at all unless the whole message authenticates.
    fn decrypt(&self, ciphertext: &[u8], associated_data: &[u8]) -> Result<Vec<u8>>;
}

/// Unauthenticated encryption, secure only against chosen-plaintext attacks
pub trait IndCpaCipher: Send + Sync {
    /// Encrypt `plaintext` under a freshly generated nonce
    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>>;

    /// Decrypt a message produced by [`IndCpaCipher::encrypt`]
    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>>;
}
