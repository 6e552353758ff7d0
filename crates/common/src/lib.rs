//! Common implementations and shared functionality for the djbaead library
//!
//! This crate provides the secret containers used across the djbaead
//! components to hold key material and per-call intermediate state.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod security;

// Re-export core security types
pub use security::{EphemeralSecret, SecretBuffer};
