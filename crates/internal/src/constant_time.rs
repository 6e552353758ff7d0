//! Constant-time operations to prevent timing attacks

use subtle::{Choice, ConstantTimeEq};

/// Constant-time comparison of two byte slices
///
/// Returns true if the slices are equal, false otherwise. Slices of
/// different lengths compare unequal; the length itself is not secret.
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    ct_eq_choice(a, b).into()
}

/// Constant-time equality check that returns a Choice (0 or 1)
pub fn ct_eq_choice<A, B>(a: A, b: B) -> Choice
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return Choice::from(0);
    }

    a.ct_eq(b)
}

/// Mask from the sign bit of a two's-complement `u64`
///
/// All-1s when the top bit of `value` is set, all-0s otherwise.
#[inline(always)]
pub fn ct_mask_from_msb(value: u64) -> u64 {
    0u64.wrapping_sub(value >> 63)
}

/// Word-wise select: `a` where `mask` bits are set, `b` elsewhere
#[inline(always)]
pub fn ct_select_u64(a: u64, b: u64, mask: u64) -> u64 {
    (a & mask) | (b & !mask)
}
