//! Authenticated Encryption with Associated Data (AEAD)
//!
//! DJB stream ciphers combined with Poly1305 following RFC 7539 section 2.8.
//! Sealed messages are self-describing: `tag || nonce || ciphertext`.

pub mod chacha20poly1305;
pub mod xchacha20poly1305;

pub use chacha20poly1305::{ChaCha20Poly1305, DjbPoly1305};
pub use xchacha20poly1305::XChaCha20Poly1305;
