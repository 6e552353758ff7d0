//! Public API traits and types for the djbaead library
//!
//! This crate provides the public API surface of the djbaead workspace: the
//! error type returned across crate boundaries, the `Aead` and
//! `IndCpaCipher` capabilities consumed by higher-level key management
//! layers, and the raw key container those layers hand to a primitive.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

#[cfg(feature = "alloc")]
pub mod traits;
pub mod error;
#[cfg(feature = "alloc")]
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};

#[cfg(feature = "alloc")]
pub use types::Key;

#[cfg(feature = "alloc")]
pub use traits::{Aead, IndCpaCipher};
