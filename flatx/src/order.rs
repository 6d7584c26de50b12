//! Ordering policies for sorted containers.
//!
//! [`Order`] is the comparator seam of this crate: containers take the
//! policy as a type parameter and hold one instance as a plain field.
//! Stateless orderings like [`Natural`] are zero-sized types, so the field
//! costs nothing; a container configured with the default ordering is
//! byte-for-byte the size of its bare storage. Stateful comparators slot
//! into the same parameter when callers need them.

/// A strict weak ordering over keys of type `K`.
///
/// `less(a, b)` holds when `a` sorts strictly before `b`. Two keys are
/// *equivalent* when neither sorts before the other; the sorted containers
/// treat equivalent keys as the same key.
pub trait Order<K> {
    /// Whether `a` sorts strictly before `b`.
    fn less(&self, a: &K, b: &K) -> bool;

    /// Whether neither key sorts before the other.
    #[inline(always)]
    fn equiv(&self, a: &K, b: &K) -> bool {
        !self.less(a, b) && !self.less(b, a)
    }
}

impl<K, O: Order<K>> Order<K> for &O {
    #[inline(always)]
    fn less(&self, a: &K, b: &K) -> bool {
        (**self).less(a, b)
    }
}

/// The natural ascending ordering of `Ord` keys.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Natural;

impl<K: Ord> Order<K> for Natural {
    #[inline(always)]
    fn less(&self, a: &K, b: &K) -> bool {
        a < b
    }
}

/// The reverse of the natural ordering: descending keys.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Reverse;

impl<K: Ord> Order<K> for Reverse {
    #[inline(always)]
    fn less(&self, a: &K, b: &K) -> bool {
        b < a
    }
}

/// Orders `(key, value)` pairs by their keys under an inner [`Order`].
///
/// This is how whole map entries are fed through [`crate::sort`]: values
/// ride along, only keys decide. Zero-sized whenever the inner ordering
/// is.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ByKey<O>(pub O);

impl<K, V, O: Order<K>> Order<(K, V)> for ByKey<O> {
    #[inline(always)]
    fn less(&self, a: &(K, V), b: &(K, V)) -> bool {
        self.0.less(&a.0, &b.0)
    }
}
