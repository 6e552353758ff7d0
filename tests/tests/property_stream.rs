//! Property-based tests for the stream cipher engine and keystream cursor

use djbaead_algorithms::{chacha20_block, ChaCha20, XChaCha20};
use djbaead_tests::FixedNonceRng;
use proptest::prelude::*;

fn words_to_bytes(words: &[u32]) -> Vec<u8> {
    words.iter().flat_map(|w| w.to_le_bytes()).collect()
}

proptest! {
    #[test]
    fn chacha20_roundtrip(
        key in any::<[u8; 32]>(),
        nonce in any::<[u8; 12]>(),
        plaintext in prop::collection::vec(any::<u8>(), 0..400)
    ) {
        let cipher = ChaCha20::new(&key).unwrap();
        let sealed = cipher
            .encrypt_with_rng(&mut FixedNonceRng::new(&nonce), &plaintext)
            .unwrap();
        prop_assert_eq!(&sealed[..12], &nonce[..]);
        prop_assert_eq!(cipher.decrypt(&sealed).unwrap(), plaintext);
    }

    /// The ciphertext is the plaintext XORed with the blocks from counter 1 on
    #[test]
    fn chacha20_matches_block_function(
        key in any::<[u8; 32]>(),
        nonce in any::<[u8; 12]>(),
        plaintext in prop::collection::vec(any::<u8>(), 0..200)
    ) {
        let cipher = ChaCha20::new(&key).unwrap();
        let sealed = cipher
            .encrypt_with_rng(&mut FixedNonceRng::new(&nonce), &plaintext)
            .unwrap();

        for (i, chunk) in plaintext.chunks(64).enumerate() {
            let block = chacha20_block(&key, &nonce, 1 + i as u32);
            for (j, byte) in chunk.iter().enumerate() {
                prop_assert_eq!(sealed[12 + i * 64 + j], byte ^ block[j]);
            }
        }
    }

    /// A partial read followed by advances continues the stream exactly
    #[test]
    fn cursor_read_then_advance_is_continuous(
        key in any::<[u8; 32]>(),
        nonce in any::<[u8; 12]>(),
        counter in 0u32..1000,
        skip in 0usize..16,
        blocks in 1usize..4
    ) {
        let cipher = ChaCha20::new(&key).unwrap();

        let mut continuous = Vec::new();
        for i in 0..=blocks as u32 {
            continuous.extend(chacha20_block(&key, &nonce, counter + i));
        }

        let mut cursor = cipher.cursor(&nonce, counter).unwrap();
        let mut spliced = words_to_bytes(cursor.read(skip).unwrap());
        for _ in 0..blocks {
            spliced.extend(words_to_bytes(cursor.advance()));
        }

        prop_assert_eq!(&spliced[..], &continuous[..spliced.len()]);
    }

    #[test]
    fn xchacha20_roundtrip(
        key in any::<[u8; 32]>(),
        nonce in any::<[u8; 24]>(),
        plaintext in prop::collection::vec(any::<u8>(), 0..400)
    ) {
        let cipher = XChaCha20::new(&key).unwrap();
        let sealed = cipher
            .encrypt_with_rng(&mut FixedNonceRng::new(&nonce), &plaintext)
            .unwrap();
        prop_assert_eq!(sealed.len(), 24 + plaintext.len());
        prop_assert_eq!(cipher.decrypt(&sealed).unwrap(), plaintext);
    }
}
