//! Bit-width arithmetic for choosing integer footprints.
//!
//! These helpers answer one question in a few spellings: how many bits, or
//! bytes, does it take to represent every value up to a given maximum?
//! Containers use the answer to size their counters; see
//! [`Len`](crate::Len). Population counts and zero counts are native `u64`
//! methods and are not re-wrapped here.

/// Number of bits needed to represent `n`, zero for zero.
#[inline(always)]
pub const fn bit_width(n: u64) -> u32 {
    u64::BITS - n.leading_zeros()
}

/// Largest power of two less than or equal to `n`, zero for zero.
#[inline(always)]
pub const fn bit_floor(n: u64) -> u64 {
    if n == 0 {
        0
    } else {
        1 << (bit_width(n) - 1)
    }
}

/// Smallest power of two greater than or equal to `n`; `bit_ceil(0)` is one.
///
/// Saturates at `1 << 63`, the largest power of two a `u64` holds.
#[inline(always)]
pub const fn bit_ceil(n: u64) -> u64 {
    if n <= 1 {
        1
    } else if n > 1 << 63 {
        1 << 63
    } else {
        1 << bit_width(n - 1)
    }
}

/// Bits needed to represent every value in `[0, max]`.
#[inline(always)]
pub const fn bits_for(max: u64) -> u32 {
    bit_width(max)
}

/// Byte width of the smallest standard unsigned integer covering `[0, max]`.
///
/// Returns 1, 2, 4 or 8. `bytes_for(255)` is one byte, `bytes_for(256)` two.
#[inline(always)]
pub const fn bytes_for(max: u64) -> usize {
    match bits_for(max) {
        0..=8 => 1,
        9..=16 => 2,
        17..=32 => 4,
        _ => 8,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn widths() {
        assert_eq!(bit_width(0), 0);
        assert_eq!(bit_width(1), 1);
        assert_eq!(bit_width(2), 2);
        assert_eq!(bit_width(255), 8);
        assert_eq!(bit_width(256), 9);
        assert_eq!(bit_width(u64::MAX), 64);
    }

    #[test]
    fn floors_and_ceilings() {
        assert_eq!(bit_floor(0), 0);
        assert_eq!(bit_floor(1), 1);
        assert_eq!(bit_floor(5), 4);
        assert_eq!(bit_floor(8), 8);
        assert_eq!(bit_floor(u64::MAX), 1 << 63);

        assert_eq!(bit_ceil(0), 1);
        assert_eq!(bit_ceil(1), 1);
        assert_eq!(bit_ceil(5), 8);
        assert_eq!(bit_ceil(8), 8);
        assert_eq!(bit_ceil(9), 16);
        assert_eq!(bit_ceil((1 << 63) + 1), 1 << 63);
    }

    #[test]
    fn byte_selection() {
        assert_eq!(bytes_for(0), 1);
        assert_eq!(bytes_for(255), 1);
        assert_eq!(bytes_for(256), 2);
        assert_eq!(bytes_for(65_535), 2);
        assert_eq!(bytes_for(65_536), 4);
        assert_eq!(bytes_for(u64::from(u32::MAX)), 4);
        assert_eq!(bytes_for(u64::from(u32::MAX) + 1), 8);
        assert_eq!(bytes_for(u64::MAX), 8);
    }
}
