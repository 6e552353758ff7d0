//! Constant values for djbaead cryptographic operations
//!
//! This library provides the size constants shared by the stream cipher
//! engine, the Poly1305 authenticator and the AEAD construction.

#![no_std]

pub mod utils;

pub use utils::symmetric::*;
