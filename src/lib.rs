//! # djbaead
//!
//! ChaCha20, XChaCha20 and Poly1305, combined into RFC 7539 authenticated
//! encryption with a self-describing `tag || nonce || ciphertext` format.
//!
//! ## Usage
//!
//! ```
//! use djbaead::prelude::*;
//!
//! let aead = ChaCha20Poly1305::new(&[0x42; 32]).unwrap();
//! let sealed = Aead::encrypt(&aead, b"attack at dawn", b"header").unwrap();
//! let opened = Aead::decrypt(&aead, &sealed, b"header").unwrap();
//! assert_eq!(opened, b"attack at dawn");
//! ```
//!
//! ## Features
//!
//! - `std` (default): OS entropy, `std::error::Error` and the [`Aead`] /
//!   [`IndCpaCipher`] trait implementations
//! - `alloc`: message-level APIs on `no_std` targets; nonces then come from
//!   a caller-provided `RngCore + CryptoRng`
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`djbaead-algorithms`]: the cipher engine, Poly1305 and the AEAD
//! - [`djbaead-api`]: public error type, key container and traits
//! - [`djbaead-common`]: zeroizing secret containers
//! - [`djbaead-internal`]: constant-time helpers
//! - [`djbaead-params`]: size constants
//!
//! [`Aead`]: djbaead_api::Aead
//! [`IndCpaCipher`]: djbaead_api::IndCpaCipher
//! [`djbaead-algorithms`]: djbaead_algorithms
//! [`djbaead-api`]: djbaead_api
//! [`djbaead-common`]: djbaead_common
//! [`djbaead-internal`]: djbaead_internal
//! [`djbaead-params`]: djbaead_params

#![cfg_attr(not(feature = "std"), no_std)]

pub use djbaead_algorithms as algorithms;
pub use djbaead_api as api;
pub use djbaead_common as common;
pub use djbaead_internal as internal;
pub use djbaead_params as params;

pub use rand;
pub use zeroize;

/// Common imports for djbaead users
pub mod prelude {
    pub use crate::api::{Error, Result};

    #[cfg(feature = "alloc")]
    pub use crate::api::{Aead, IndCpaCipher, Key};

    #[cfg(feature = "alloc")]
    pub use crate::algorithms::{ChaCha20, ChaCha20Poly1305, XChaCha20, XChaCha20Poly1305};

    pub use crate::algorithms::Poly1305;

    pub use crate::common::{EphemeralSecret, SecretBuffer};
}
