//! Capabilities exposed to higher-level key management layers

pub mod aead;

pub use aead::{Aead, IndCpaCipher};
