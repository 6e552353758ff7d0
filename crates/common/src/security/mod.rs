//! Security primitives and memory safety utilities
//!
//! This module provides foundational security types used throughout the
//! djbaead workspace to ensure proper handling of sensitive cryptographic
//! material.

pub mod secret;

// Re-export core security types
pub use secret::{EphemeralSecret, SecretBuffer};
