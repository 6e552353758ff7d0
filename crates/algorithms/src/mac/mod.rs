//! Message Authentication Code (MAC) implementations

pub mod poly1305;
pub use poly1305::Poly1305;
