//! XChaCha20-Poly1305 authenticated encryption
//!
//! The RFC 7539 construction over XChaCha20. The 192-bit nonce is large
//! enough to draw at random for any practical number of messages per key.

use crate::stream::chacha::XChaCha20Core;

use super::chacha20poly1305::DjbPoly1305;

/// XChaCha20-Poly1305 AEAD with a `tag || nonce || ciphertext` wire format
pub type XChaCha20Poly1305 = DjbPoly1305<XChaCha20Core>;
