//! Internal utilities for the djbaead library
//!
//! Helpers shared by the other workspace crates. Nothing here is part of the
//! stable public API.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod constant_time;
