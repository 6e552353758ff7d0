//! Property-based tests for the AEAD constructions
//!
//! The key, nonce and messages are generated; the properties must hold for
//! both ChaCha20-Poly1305 and XChaCha20-Poly1305.

use djbaead_algorithms::{ChaCha20Poly1305, Error, XChaCha20Poly1305};
use djbaead_tests::FixedNonceRng;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

proptest! {
    #[test]
    fn chacha20poly1305_roundtrip(
        key in any::<[u8; 32]>(),
        seed in any::<u64>(),
        plaintext in prop::collection::vec(any::<u8>(), 0..300),
        aad in prop::collection::vec(any::<u8>(), 0..64)
    ) {
        let aead = ChaCha20Poly1305::new(&key).unwrap();
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let sealed = aead.encrypt_with_rng(&mut rng, &plaintext, &aad).unwrap();

        prop_assert_eq!(sealed.len(), 16 + 12 + plaintext.len());
        prop_assert_eq!(aead.decrypt(&sealed, &aad).unwrap(), plaintext);
    }

    #[test]
    fn xchacha20poly1305_roundtrip(
        key in any::<[u8; 32]>(),
        nonce in any::<[u8; 24]>(),
        plaintext in prop::collection::vec(any::<u8>(), 0..300),
        aad in prop::collection::vec(any::<u8>(), 0..64)
    ) {
        let aead = XChaCha20Poly1305::new(&key).unwrap();
        let sealed = aead
            .encrypt_with_rng(&mut FixedNonceRng::new(&nonce), &plaintext, &aad)
            .unwrap();

        prop_assert_eq!(&sealed[16..40], &nonce[..]);
        prop_assert_eq!(aead.decrypt(&sealed, &aad).unwrap(), plaintext);
    }

    /// Any single-bit change anywhere in the sealed message is detected
    #[test]
    fn tampering_is_detected(
        key in any::<[u8; 32]>(),
        seed in any::<u64>(),
        plaintext in prop::collection::vec(any::<u8>(), 1..200),
        position in any::<prop::sample::Index>(),
        bit in 0u8..8
    ) {
        let aead = ChaCha20Poly1305::new(&key).unwrap();
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let mut sealed = aead.encrypt_with_rng(&mut rng, &plaintext, b"aad").unwrap();

        let i = position.index(sealed.len());
        sealed[i] ^= 1 << bit;

        let is_auth_failure = matches!(
            aead.decrypt(&sealed, b"aad"),
            Err(Error::Authentication { .. })
        );
        prop_assert!(is_auth_failure);
    }

    /// Inputs shorter than tag plus nonce are length errors, never MAC failures
    #[test]
    fn short_input_is_length_error(
        key in any::<[u8; 32]>(),
        input in prop::collection::vec(any::<u8>(), 0..28)
    ) {
        let aead = ChaCha20Poly1305::new(&key).unwrap();
        let is_length_error = matches!(
            aead.decrypt(&input, b""),
            Err(Error::Length { expected: 28, .. })
        );
        prop_assert!(is_length_error);
    }

    /// A sealed message only opens under the associated data it was sealed with
    #[test]
    fn associated_data_binds(
        key in any::<[u8; 32]>(),
        seed in any::<u64>(),
        aad in prop::collection::vec(any::<u8>(), 0..64),
        other in prop::collection::vec(any::<u8>(), 0..64)
    ) {
        prop_assume!(aad != other);
        let aead = ChaCha20Poly1305::new(&key).unwrap();
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let sealed = aead.encrypt_with_rng(&mut rng, b"payload", &aad).unwrap();
        prop_assert!(aead.decrypt(&sealed, &other).is_err());
    }
}
