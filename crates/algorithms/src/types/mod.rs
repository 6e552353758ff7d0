//! Type-system helpers shared by the primitives

pub(crate) mod sealed;
