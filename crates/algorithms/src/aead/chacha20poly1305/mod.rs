//! ChaCha20-Poly1305 authenticated encryption
//!
//! This module implements the RFC 7539 AEAD construction generically over the
//! DJB cipher core:
//!
//! * the one-time Poly1305 key is the first 32 keystream bytes at counter 0;
//! * the payload is encrypted from counter 1 on;
//! * the tag covers `pad16(aad) || pad16(ct) || le64(|aad|) || le64(|ct|)`.
//!
//! ## Constant-Time Guarantees
//!
//! The received tag is compared with a constant-time equality check, and no
//! ciphertext byte is decrypted before that check has passed.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use byteorder::{ByteOrder, LittleEndian};
use djbaead_common::SecretBuffer;
use djbaead_params::{POLY1305_KEY_SIZE, POLY1305_TAG_SIZE};
use rand::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;
use tracing::debug;
use zeroize::Zeroize;

use crate::error::{validate, Result};
#[cfg(feature = "std")]
use crate::error::ResultExt;
use crate::mac::poly1305::Poly1305;
use crate::stream::chacha::ChaCha20Core;
use crate::stream::djb::{DjbCipher, DjbCore, DJB_KEY_SIZE};

/// Counter of the block whose head becomes the Poly1305 key
const KEY_GEN_COUNTER: u32 = 0;

/// Words of keystream consumed by the one-time key
const POLY1305_KEY_WORDS: usize = POLY1305_KEY_SIZE / 4;

/// A DJB stream cipher authenticated with Poly1305
#[derive(Clone, Debug)]
pub struct DjbPoly1305<C: DjbCore> {
    stream: DjbCipher<C>,
}

/// ChaCha20-Poly1305 AEAD (RFC 7539) with a `tag || nonce || ciphertext` wire format
pub type ChaCha20Poly1305 = DjbPoly1305<ChaCha20Core>;

impl<C: DjbCore> DjbPoly1305<C> {
    /// Size of the authentication tag in bytes
    pub const TAG_SIZE: usize = POLY1305_TAG_SIZE;

    /// Create a new instance from a 256-bit key
    pub fn new(key: &[u8]) -> Result<Self> {
        validate::key_length(C::AEAD_NAME, key.len(), DJB_KEY_SIZE)?;
        Ok(Self {
            stream: DjbCipher::new(key)?,
        })
    }

    /// Create a new instance from key material handed over by a key manager
    pub fn from_key(key: &djbaead_api::Key) -> Result<Self> {
        Self::new(key.as_ref())
    }

    /// Nonce size of the underlying stream cipher
    pub const fn nonce_size() -> usize {
        C::NONCE_SIZE
    }

    /// Smallest possible sealed message: tag and nonce around an empty payload
    pub const fn overhead() -> usize {
        POLY1305_TAG_SIZE + C::NONCE_SIZE
    }

    /// Derive the one-time Poly1305 key for `nonce` (RFC 7539 section 2.6)
    pub fn poly1305_key_gen(&self, nonce: &[u8]) -> Result<SecretBuffer<POLY1305_KEY_SIZE>> {
        let mut cursor = self.stream.cursor(nonce, KEY_GEN_COUNTER)?;
        let mut key = [0u8; POLY1305_KEY_SIZE];
        LittleEndian::write_u32_into(cursor.read(POLY1305_KEY_WORDS)?, &mut key);
        let secret = SecretBuffer::new(key);
        key.zeroize();
        Ok(secret)
    }

    fn compute_tag(
        &self,
        nonce: &[u8],
        associated_data: &[u8],
        ciphertext: &[u8],
    ) -> Result<[u8; POLY1305_TAG_SIZE]> {
        let key = self.poly1305_key_gen(nonce)?;
        let mut mac = Poly1305::new(key.as_array());

        mac.update_padded(associated_data);
        mac.update_padded(ciphertext);

        let mut len_block = [0u8; 16];
        LittleEndian::write_u64(&mut len_block[..8], associated_data.len() as u64);
        LittleEndian::write_u64(&mut len_block[8..], ciphertext.len() as u64);
        mac.update(&len_block);

        Ok(mac.finalize())
    }

    /// Encrypt and authenticate under a nonce drawn from `rng`
    ///
    /// Returns `tag || nonce || ciphertext`.
    pub fn encrypt_with_rng<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
        plaintext: &[u8],
        associated_data: &[u8],
    ) -> Result<Vec<u8>> {
        let body = self.stream.encrypt_with_rng(rng, plaintext)?;
        let (nonce, ciphertext) = body.split_at(C::NONCE_SIZE);
        let tag = self.compute_tag(nonce, associated_data, ciphertext)?;

        let mut sealed = Vec::with_capacity(POLY1305_TAG_SIZE + body.len());
        sealed.extend_from_slice(&tag);
        sealed.extend_from_slice(&body);

        debug!(
            aead = C::AEAD_NAME,
            plaintext_len = plaintext.len(),
            aad_len = associated_data.len(),
            "sealed message"
        );
        Ok(sealed)
    }

    /// Verify and decrypt `tag || nonce || ciphertext`
    ///
    /// Fails with a length error when the input cannot hold a tag and a
    /// nonce, and with an authentication error when the tag does not match.
    /// Nothing is decrypted unless the tag verifies.
    pub fn decrypt(&self, sealed: &[u8], associated_data: &[u8]) -> Result<Vec<u8>> {
        validate::min_length("sealed message", sealed.len(), Self::overhead()).map_err(|e| {
            debug!(aead = C::AEAD_NAME, len = sealed.len(), "sealed message too short");
            e
        })?;

        let (tag, body) = sealed.split_at(POLY1305_TAG_SIZE);
        let (nonce, ciphertext) = body.split_at(C::NONCE_SIZE);

        let expected = self.compute_tag(nonce, associated_data, ciphertext)?;
        let tag_ok: bool = expected[..].ct_eq(tag).into();
        if !tag_ok {
            debug!(aead = C::AEAD_NAME, "tag mismatch");
        }
        validate::authentication(tag_ok, C::AEAD_NAME)?;

        let plaintext = self.stream.decrypt_at(sealed, POLY1305_TAG_SIZE)?;
        debug!(
            aead = C::AEAD_NAME,
            plaintext_len = plaintext.len(),
            "opened message"
        );
        Ok(plaintext)
    }
}

#[cfg(feature = "std")]
impl<C: DjbCore> djbaead_api::Aead for DjbPoly1305<C> {
    fn encrypt(&self, plaintext: &[u8], associated_data: &[u8]) -> djbaead_api::Result<Vec<u8>> {
        self.encrypt_with_rng(&mut rand::rngs::OsRng, plaintext, associated_data)
            .with_context(C::AEAD_NAME)
    }

    fn decrypt(&self, ciphertext: &[u8], associated_data: &[u8]) -> djbaead_api::Result<Vec<u8>> {
        DjbPoly1305::decrypt(self, ciphertext, associated_data).with_context(C::AEAD_NAME)
    }
}
