//! Contiguous backing storage for the flat map.

use keyx::Len;

use crate::err::CapacityError;
use crate::vec::FixedVec;

/// A contiguous sequence a [`FlatMap`](crate::FlatMap) can keep sorted.
///
/// Implementations own their elements in one contiguous region, expose
/// them as a slice, and support positional insertion and removal with a
/// tail shift. `Vec` is the resizable backing; [`FixedVec`] the
/// capacity-bounded one. The map only ever calls these operations with
/// indices it derived from `len`, so implementations may treat index
/// violations as caller bugs and panic.
pub trait Storage<T> {
    /// All live elements in order.
    fn as_slice(&self) -> &[T];

    /// All live elements in order, mutably.
    fn as_mut_slice(&mut self) -> &mut [T];

    /// Number of live elements.
    fn len(&self) -> usize;

    /// Whether there are no live elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Upper bound on `len`; `usize::MAX` when the storage can grow.
    fn capacity(&self) -> usize;

    /// Inserts `value` at `index`, shifting the tail right.
    ///
    /// Returns the value inside [`CapacityError`] when the storage is
    /// full. Panics if `index > len`.
    fn insert(&mut self, index: usize, value: T) -> Result<(), CapacityError<T>>;

    /// Removes and returns the element at `index`, shifting the tail
    /// left.
    ///
    /// Panics if `index >= len`.
    fn remove(&mut self, index: usize) -> T;

    /// Destroys every live element.
    fn clear(&mut self);
}

impl<T> Storage<T> for Vec<T> {
    fn as_slice(&self) -> &[T] {
        self
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn capacity(&self) -> usize {
        usize::MAX
    }

    fn insert(&mut self, index: usize, value: T) -> Result<(), CapacityError<T>> {
        Vec::insert(self, index, value);
        Ok(())
    }

    fn remove(&mut self, index: usize) -> T {
        Vec::remove(self, index)
    }

    fn clear(&mut self) {
        Vec::clear(self);
    }
}

impl<T, const CAP: usize, L: Len> Storage<T> for FixedVec<T, CAP, L> {
    fn as_slice(&self) -> &[T] {
        FixedVec::as_slice(self)
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        FixedVec::as_mut_slice(self)
    }

    fn len(&self) -> usize {
        FixedVec::len(self)
    }

    fn capacity(&self) -> usize {
        CAP
    }

    fn insert(&mut self, index: usize, value: T) -> Result<(), CapacityError<T>> {
        self.try_insert(index, value)
    }

    fn remove(&mut self, index: usize) -> T {
        FixedVec::remove(self, index)
    }

    fn clear(&mut self) {
        FixedVec::clear(self);
    }
}
