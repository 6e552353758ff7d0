//! Helpers shared by the unit tests

use rand::{CryptoRng, Error, RngCore};

/// RNG that replays fixed bytes, for reproducing published vectors
pub(crate) struct FixedRng<'a> {
    bytes: &'a [u8],
}

impl<'a> FixedRng<'a> {
    pub(crate) fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }
}

impl RngCore for FixedRng<'_> {
    fn next_u32(&mut self) -> u32 {
        let mut buf = [0u8; 4];
        self.fill_bytes(&mut buf);
        u32::from_le_bytes(buf)
    }

    fn next_u64(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        self.fill_bytes(&mut buf);
        u64::from_le_bytes(buf)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let (head, rest) = self.bytes.split_at(dest.len());
        dest.copy_from_slice(head);
        self.bytes = rest;
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl CryptoRng for FixedRng<'_> {}

/// RNG whose entropy source is always unavailable
pub(crate) struct FailingRng;

impl RngCore for FailingRng {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        0
    }

    fn fill_bytes(&mut self, _dest: &mut [u8]) {}

    fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), Error> {
        let code = core::num::NonZeroU32::new(Error::CUSTOM_START).unwrap();
        Err(Error::from(code))
    }
}

impl CryptoRng for FailingRng {}
