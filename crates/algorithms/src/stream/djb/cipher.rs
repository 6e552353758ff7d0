//! Stream cipher engine: `nonce || ciphertext` encryption for any DJB core

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use core::marker::PhantomData;

use byteorder::{ByteOrder, LittleEndian};
use djbaead_common::{EphemeralSecret, SecretBuffer};
use djbaead_params::DJB_BLOCK_SIZE;
use rand::{CryptoRng, RngCore};
use tracing::trace;
use zeroize::Zeroize;

use super::{DjbCore, KeystreamCursor, DJB_KEY_SIZE};
use crate::error::{validate, Error, Result};
#[cfg(feature = "std")]
use crate::error::ResultExt;

/// Largest input accepted by `encrypt`, before the nonce is prepended
const MAX_MESSAGE_SIZE: usize = isize::MAX as usize;

/// Block counter of the first keystream block used for payload bytes
pub(crate) const PAYLOAD_COUNTER: u32 = 1;

/// IND-CPA stream cipher over a DJB core
///
/// Holds only the key; every call builds its own [`KeystreamCursor`], so an
/// instance can be shared freely between threads.
#[derive(Clone, Debug)]
pub struct DjbCipher<C: DjbCore> {
    key: SecretBuffer<DJB_KEY_SIZE>,
    _core: PhantomData<C>,
}

impl<C: DjbCore> DjbCipher<C> {
    /// Create a cipher from a 32-byte key; the bytes are copied in
    pub fn new(key: &[u8]) -> Result<Self> {
        validate::key_length(C::NAME, key.len(), DJB_KEY_SIZE)?;
        let key = SecretBuffer::from_slice(key).ok_or(Error::Key {
            algorithm: C::NAME,
            expected: DJB_KEY_SIZE,
            actual: key.len(),
        })?;
        Ok(Self {
            key,
            _core: PhantomData,
        })
    }

    /// Create a cipher from key material handed over by a key manager
    #[cfg(feature = "alloc")]
    pub fn from_key(key: &djbaead_api::Key) -> Result<Self> {
        Self::new(key.as_ref())
    }

    /// Nonce size of the underlying core
    pub const fn nonce_size() -> usize {
        C::NONCE_SIZE
    }

    /// Fresh keystream for `nonce`, starting at block `counter`
    pub fn cursor(&self, nonce: &[u8], counter: u32) -> Result<KeystreamCursor<C>> {
        validate::length("nonce", nonce.len(), C::NONCE_SIZE)?;
        Ok(KeystreamCursor::new(self.key.as_array(), nonce, counter))
    }

    /// XOR `input` with successive cursor blocks, appending to `output`
    pub(crate) fn process(cursor: &mut KeystreamCursor<C>, input: &[u8], output: &mut Vec<u8>) {
        let mut keystream = EphemeralSecret::new([0u8; DJB_BLOCK_SIZE]);
        for chunk in input.chunks(DJB_BLOCK_SIZE) {
            LittleEndian::write_u32_into(cursor.advance(), &mut keystream[..]);
            output.extend(chunk.iter().zip(keystream.iter()).map(|(m, k)| m ^ k));
        }
    }

    /// Encrypt under a nonce drawn from `rng`; returns `nonce || ciphertext`
    pub fn encrypt_with_rng<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
        plaintext: &[u8],
    ) -> Result<Vec<u8>> {
        validate::max_length("plaintext", plaintext.len(), MAX_MESSAGE_SIZE - C::NONCE_SIZE)?;

        let mut output = Vec::with_capacity(C::NONCE_SIZE + plaintext.len());
        output.resize(C::NONCE_SIZE, 0);
        if rng.try_fill_bytes(&mut output).is_err() {
            output.zeroize();
            return Err(Error::RandomGeneration {
                operation: "nonce generation",
            });
        }

        let mut cursor = self.cursor(&output, PAYLOAD_COUNTER)?;
        Self::process(&mut cursor, plaintext, &mut output);

        trace!(cipher = C::NAME, len = plaintext.len(), "stream encrypt");
        Ok(output)
    }

    /// Decrypt `nonce || ciphertext` found at `offset` in `ciphertext`
    ///
    /// Bytes before `offset` are ignored; the AEAD layer uses this to skip
    /// its tag.
    pub fn decrypt_at(&self, ciphertext: &[u8], offset: usize) -> Result<Vec<u8>> {
        let header = offset
            .checked_add(C::NONCE_SIZE)
            .ok_or(Error::param("offset", "offset overflows the nonce position"))?;
        validate::min_length("ciphertext", ciphertext.len(), header)?;

        let mut cursor = self.cursor(&ciphertext[offset..header], PAYLOAD_COUNTER)?;
        let payload = &ciphertext[header..];
        let mut plaintext = Vec::with_capacity(payload.len());
        Self::process(&mut cursor, payload, &mut plaintext);

        trace!(cipher = C::NAME, len = payload.len(), "stream decrypt");
        Ok(plaintext)
    }

    /// Decrypt `nonce || ciphertext`
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        self.decrypt_at(ciphertext, 0)
    }
}

#[cfg(feature = "std")]
impl<C: DjbCore> djbaead_api::IndCpaCipher for DjbCipher<C> {
    fn encrypt(&self, plaintext: &[u8]) -> djbaead_api::Result<Vec<u8>> {
        self.encrypt_with_rng(&mut rand::rngs::OsRng, plaintext)
            .with_context(C::NAME)
    }

    fn decrypt(&self, ciphertext: &[u8]) -> djbaead_api::Result<Vec<u8>> {
        DjbCipher::decrypt(self, ciphertext).with_context(C::NAME)
    }
}
