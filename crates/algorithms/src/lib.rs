//! DJB stream ciphers, Poly1305 and their RFC 7539 AEAD composition
//!
//! The crate is layered bottom-up:
//!
//! - [`stream::djb`]: the engine shared by every DJB cipher (state, keystream
//!   cursor, `nonce || ciphertext` encryption)
//! - [`stream::chacha`]: the ChaCha20 and XChaCha20 cores plugged into it
//! - [`mac::poly1305`]: the one-time authenticator
//! - [`aead`]: cipher plus authenticator, sealing to `tag || nonce || ciphertext`
//!
//! Every call draws a fresh nonce; callers never supply one. All key material
//! and keystream buffers are zeroized when dropped. The crate works in
//! `no_std` environments; the `alloc` feature enables the message-level APIs.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod error;
pub use error::{validate, Error, Result, ResultExt};

pub mod mac;
pub use mac::Poly1305;

pub mod stream;
pub use stream::{chacha20_block, hchacha20, ChaCha20Core, DjbCore, KeystreamCursor, XChaCha20Core};
#[cfg(feature = "alloc")]
pub use stream::{ChaCha20, DjbCipher, XChaCha20};

#[cfg(feature = "alloc")]
pub mod aead;
#[cfg(feature = "alloc")]
pub use aead::{ChaCha20Poly1305, DjbPoly1305, XChaCha20Poly1305};

pub(crate) mod types;

#[cfg(test)]
pub(crate) mod test_utils;
