//! The ChaCha family of DJB ciphers

pub mod chacha20;
pub mod xchacha20;

pub use chacha20::{chacha20_block, ChaCha20Core};
pub use xchacha20::{hchacha20, XChaCha20Core};

#[cfg(feature = "alloc")]
pub use chacha20::ChaCha20;
#[cfg(feature = "alloc")]
pub use xchacha20::XChaCha20;
