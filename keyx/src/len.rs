//! Counter types for capacity-bounded containers.

use core::fmt::Debug;

use num_traits::PrimInt;

/// An unsigned integer type usable as the live-element counter of a
/// capacity-bounded container.
///
/// The counter type changes nothing but the container's footprint: a buffer
/// capped at 255 elements can count with a `u8` instead of a `usize` and
/// shed seven bytes per instance. [`bytes_for`](crate::bytes_for) names the
/// smallest choice for a given capacity. Containers check once, at
/// construction, that their capacity fits in [`Len::MAX_USIZE`].
pub trait Len: PrimInt + Debug {
    /// The counter value zero.
    const ZERO: Self;
    /// The counter value one.
    const ONE: Self;
    /// Largest count this type can hold, capped at `usize::MAX`.
    const MAX_USIZE: usize;

    /// Converts a count from `usize`.
    ///
    /// Callers guarantee `n <= Self::MAX_USIZE`.
    fn from_usize(n: usize) -> Self;

    /// Converts a count to `usize`.
    ///
    /// Lossless for any value produced by [`Len::from_usize`] under its
    /// contract.
    fn to_usize(self) -> usize;
}

/// Implements [`Len`] for one unsigned integer type.
macro_rules! impl_len {
    ($($int:ty),* $(,)?) => {
        $(
            impl Len for $int {
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const MAX_USIZE: usize = <$int>::MAX as usize;

                #[inline(always)]
                fn from_usize(n: usize) -> Self {
                    n as $int
                }

                #[inline(always)]
                fn to_usize(self) -> usize {
                    self as usize
                }
            }
        )*
    };
}

impl_len!(u8, u16, u32, u64, usize);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn bounds() {
        assert_eq!(<u8 as Len>::MAX_USIZE, 255);
        assert_eq!(<u16 as Len>::MAX_USIZE, 65_535);
        assert_eq!(<usize as Len>::MAX_USIZE, usize::MAX);
    }

    #[test]
    fn round_trips() {
        assert_eq!(u8::from_usize(255).to_usize(), 255);
        assert_eq!(u16::from_usize(0).to_usize(), 0);
        assert_eq!(u32::from_usize(70_000).to_usize(), 70_000);
        assert_eq!(<u8 as Len>::ZERO.to_usize(), 0);
        assert_eq!(<u8 as Len>::ONE.to_usize(), 1);
    }
}
