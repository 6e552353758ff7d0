//! Key material handed to primitives by the key management layer
//!
//! Key formats and serialization are owned elsewhere; a primitive only ever
//! sees the raw symmetric key bytes.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use core::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Raw symmetric key bytes, zeroized on drop
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Key {
    data: Vec<u8>,
}

impl Key {
    /// Create a new key by copying the given bytes
    pub fn new(bytes: &[u8]) -> Self {
        Self {
            data: bytes.to_vec(),
        }
    }

    /// Get the length of the key
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the key is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl AsRef<[u8]> for Key {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Key(len={}, [REDACTED])", self.data.len())
    }
}
