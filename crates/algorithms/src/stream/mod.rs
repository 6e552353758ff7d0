//! Stream cipher implementations
//!
//! The DJB family shares one engine ([`djb`]): a 16-word state, a keyed
//! shuffle and a block counter. Concrete ciphers only describe their state
//! layout and permutation.
//!
//! # Available Stream Ciphers
//!
//! - ChaCha20: 96-bit nonce, 32-bit block counter (RFC 7539)
//! - XChaCha20: 192-bit nonce through an HChaCha20-derived subkey
//!
//! # Security Considerations
//!
//! Stream ciphers require unique nonces for each encryption operation with the
//! same key. Nonces are drawn fresh for every call and travel in front of the
//! ciphertext; there is no API for choosing one.

pub mod chacha;
pub mod djb;

pub use chacha::{chacha20_block, hchacha20, ChaCha20Core, XChaCha20Core};
#[cfg(feature = "alloc")]
pub use chacha::{ChaCha20, XChaCha20};
#[cfg(feature = "alloc")]
pub use djb::DjbCipher;
pub use djb::{DjbCore, KeystreamCursor};
