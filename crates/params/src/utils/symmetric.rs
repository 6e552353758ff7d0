//! Constants for the DJB stream cipher family and Poly1305

/// Number of 32-bit words in a DJB cipher state / keystream block
pub const DJB_BLOCK_SIZE_IN_WORDS: usize = 16;

/// DJB keystream block size in bytes
pub const DJB_BLOCK_SIZE: usize = DJB_BLOCK_SIZE_IN_WORDS * 4;

/// Number of 32-bit words in a DJB cipher key
pub const DJB_KEY_SIZE_IN_WORDS: usize = 8;

/// ChaCha20 key size in bytes
pub const CHACHA20_KEY_SIZE: usize = DJB_KEY_SIZE_IN_WORDS * 4;

/// ChaCha20 nonce size in bytes
pub const CHACHA20_NONCE_SIZE: usize = 12;

/// ChaCha20 block size in bytes
pub const CHACHA20_BLOCK_SIZE: usize = DJB_BLOCK_SIZE;

/// XChaCha20 nonce size in bytes
pub const XCHACHA20_NONCE_SIZE: usize = 24;

/// HChaCha20 input (nonce prefix) size in bytes
pub const HCHACHA20_INPUT_SIZE: usize = 16;

/// Poly1305 key size in bytes
pub const POLY1305_KEY_SIZE: usize = 32;

/// Poly1305 tag size in bytes
pub const POLY1305_TAG_SIZE: usize = 16;

/// Poly1305 block size in bytes
pub const POLY1305_BLOCK_SIZE: usize = 16;
