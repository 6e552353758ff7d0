//! Property-based tests through the facade's `Aead` and `IndCpaCipher` traits
//!
//! Nonces come from the operating system here, so only properties that hold
//! for every nonce are checked.

use djbaead::prelude::{Aead, ChaCha20, ChaCha20Poly1305, IndCpaCipher, XChaCha20Poly1305};
use djbaead_api::Error;
use proptest::prelude::*;

fn boxed(key: &[u8; 32], extended: bool) -> Box<dyn Aead> {
    if extended {
        Box::new(XChaCha20Poly1305::new(key).unwrap())
    } else {
        Box::new(ChaCha20Poly1305::new(key).unwrap())
    }
}

proptest! {
    /// A keyset layer only sees `dyn Aead`; both variants must round-trip
    #[test]
    fn aead_trait_roundtrip(
        key in any::<[u8; 32]>(),
        extended in any::<bool>(),
        plaintext in prop::collection::vec(any::<u8>(), 0..300),
        aad in prop::collection::vec(any::<u8>(), 0..64)
    ) {
        let aead = boxed(&key, extended);
        let sealed = aead.encrypt(&plaintext, &aad).unwrap();
        let nonce_size = if extended { 24 } else { 12 };

        prop_assert_eq!(sealed.len(), 16 + nonce_size + plaintext.len());
        prop_assert_eq!(aead.decrypt(&sealed, &aad).unwrap(), plaintext);
    }

    /// Public errors name the algorithm and never carry plaintext
    #[test]
    fn aead_trait_errors(
        key in any::<[u8; 32]>(),
        plaintext in prop::collection::vec(any::<u8>(), 1..100),
        position in any::<prop::sample::Index>()
    ) {
        let aead = boxed(&key, false);
        let mut sealed = aead.encrypt(&plaintext, b"").unwrap();

        let short = aead.decrypt(&sealed[..27], b"").unwrap_err();
        prop_assert_eq!(
            short,
            Error::InvalidLength { context: "ChaCha20Poly1305", expected: 28, actual: 27 }
        );

        let i = position.index(sealed.len());
        sealed[i] ^= 0x01;
        let err = aead.decrypt(&sealed, b"").unwrap_err();
        let is_auth_failure = matches!(err, Error::AuthenticationFailed { .. });
        prop_assert!(is_auth_failure);
        prop_assert_eq!(err.context(), "ChaCha20Poly1305");
    }

    #[test]
    fn ind_cpa_trait_roundtrip(
        key in any::<[u8; 32]>(),
        plaintext in prop::collection::vec(any::<u8>(), 0..300)
    ) {
        let cipher = ChaCha20::new(&key).unwrap();
        let sealed = IndCpaCipher::encrypt(&cipher, &plaintext).unwrap();
        prop_assert_eq!(sealed.len(), 12 + plaintext.len());
        prop_assert_eq!(IndCpaCipher::decrypt(&cipher, &sealed).unwrap(), plaintext);
    }
}
