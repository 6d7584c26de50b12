//! A capacity-bounded vector with manual element lifetimes.

use core::fmt;
use core::fmt::Debug;
use core::iter::FusedIterator;
use core::mem::{self, needs_drop, MaybeUninit};
use core::ops::{Deref, DerefMut};
use core::ptr;
use core::slice;

use keyx::Len;

use crate::err::CapacityError;

/// A contiguous vector storing at most `CAP` elements inline.
///
/// Storage is a `CAP`-slot array of [`MaybeUninit`] plus a live count:
/// slots `[0, len)` hold initialized elements owned by the vector, slots
/// `[len, CAP)` are uninitialized and never read. The vector never
/// reallocates, so references into the live prefix stay valid until the
/// element is removed or the vector is destroyed. Exceeding the capacity
/// is a caller error: the safe API panics ([`FixedVec::push`]) or hands
/// the value back ([`FixedVec::try_push`]), and only the `unsafe`
/// [`FixedVec::push_unchecked`] keeps the unchecked fast path.
///
/// `L` selects the integer type of the live counter and changes nothing
/// but the footprint; [`keyx::bytes_for`] names the smallest choice for a
/// given `CAP`.
///
/// # Examples
///
/// ```
/// use flatx::FixedVec;
///
/// let mut buf: FixedVec<u32, 4> = FixedVec::new();
/// buf.extend_from_slice(&[10, 20, 30]).unwrap();
/// assert_eq!(buf.pop(), Some(30));
/// buf.push(40);
/// assert_eq!(buf.as_slice(), &[10, 20, 40]);
/// assert_eq!(buf.len(), 3);
/// ```
pub struct FixedVec<T, const CAP: usize, L: Len = usize> {
    /// Element slots; `[0, len)` initialized, the rest uninitialized.
    slots: [MaybeUninit<T>; CAP],
    /// Count of live elements, at most `CAP`.
    len: L,
}

impl<T, const CAP: usize, L: Len> FixedVec<T, CAP, L> {
    /// An empty vector.
    ///
    /// Panics if the counter type cannot count to `CAP`; pairing `L` with
    /// the capacity is a static decision that deserves a loud failure.
    pub fn new() -> Self {
        assert!(
            CAP <= L::MAX_USIZE,
            "FixedVec counter type cannot count to the capacity"
        );
        Self {
            // SAFETY: an array of `MaybeUninit` is valid whatever its
            // contents.
            slots: unsafe { MaybeUninit::uninit().assume_init() },
            len: L::ZERO,
        }
    }

    /// Number of live elements.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len.to_usize()
    }

    /// Whether the vector holds no elements.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == L::ZERO
    }

    /// Whether the vector holds `CAP` elements.
    #[inline(always)]
    pub fn is_full(&self) -> bool {
        self.len() == CAP
    }

    /// Maximum element count; equals `CAP` and never changes.
    #[inline(always)]
    pub const fn capacity(&self) -> usize {
        CAP
    }

    /// The live elements as a slice.
    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: slots [0, len) are initialized per the struct invariant,
        // and `MaybeUninit<T>` has the layout of `T`.
        unsafe { slice::from_raw_parts(self.slots.as_ptr().cast::<T>(), self.len()) }
    }

    /// The live elements as a mutable slice.
    #[inline(always)]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as in `as_slice`, with exclusive access.
        unsafe { slice::from_raw_parts_mut(self.slots.as_mut_ptr().cast::<T>(), self.len()) }
    }

    /// Appends `value` at the end.
    ///
    /// Panics if the vector is full; [`FixedVec::try_push`] is the
    /// non-panicking form.
    #[inline]
    pub fn push(&mut self, value: T) {
        if self.try_push(value).is_err() {
            panic!("FixedVec is full (capacity {})", CAP);
        }
    }

    /// Appends `value`, or returns it inside the error when full.
    #[inline]
    pub fn try_push(&mut self, value: T) -> Result<(), CapacityError<T>> {
        if self.is_full() {
            return Err(CapacityError { value });
        }
        // SAFETY: len < CAP was just checked.
        unsafe { self.push_unchecked(value) };
        Ok(())
    }

    /// Appends `value` without checking capacity.
    ///
    /// # Safety
    ///
    /// The vector must not be full: `self.len() < CAP`.
    #[inline(always)]
    pub unsafe fn push_unchecked(&mut self, value: T) {
        debug_assert!(!self.is_full());
        let len = self.len();
        // SAFETY: the caller guarantees slot `len` exists; writing a
        // `MaybeUninit` slot drops nothing.
        unsafe { self.slots.get_unchecked_mut(len) }.write(value);
        self.len = self.len + L::ONE;
    }

    /// Removes and returns the last element, or `None` when empty.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.len = self.len - L::ONE;
        let len = self.len();
        // SAFETY: slot `len` was live, and the count no longer covers it,
        // so the value is moved out exactly once.
        Some(unsafe { self.slots.get_unchecked(len).assume_init_read() })
    }

    /// Inserts `value` at `index`, shifting later elements right.
    ///
    /// Panics if the vector is full or `index > len`;
    /// [`FixedVec::try_insert`] is the non-panicking form.
    pub fn insert(&mut self, index: usize, value: T) {
        if self.try_insert(index, value).is_err() {
            panic!("FixedVec is full (capacity {})", CAP);
        }
    }

    /// Inserts `value` at `index`, or returns it when full.
    ///
    /// Panics if `index > len`.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), CapacityError<T>> {
        let len = self.len();
        assert!(index <= len, "insert index {index} out of range (len {len})");
        if self.is_full() {
            return Err(CapacityError { value });
        }
        // SAFETY: index <= len < CAP. The shift moves the tail one slot
        // up into storage the new count will cover; the vacated slot is
        // then written without reading or dropping it.
        unsafe {
            let base = self.slots.as_mut_ptr().cast::<T>();
            ptr::copy(base.add(index), base.add(index + 1), len - index);
            ptr::write(base.add(index), value);
        }
        self.len = self.len + L::ONE;
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting later
    /// elements left.
    ///
    /// Panics if `index >= len`.
    pub fn remove(&mut self, index: usize) -> T {
        let len = self.len();
        assert!(index < len, "remove index {index} out of range (len {len})");
        // SAFETY: index < len, so the slot is live. The value is moved
        // out once, the tail shift fills the gap, and the count shrinks
        // so the duplicate last slot is no longer covered.
        unsafe {
            let base = self.slots.as_mut_ptr().cast::<T>();
            let value = ptr::read(base.add(index));
            ptr::copy(base.add(index + 1), base.add(index), len - index - 1);
            self.len = self.len - L::ONE;
            value
        }
    }

    /// Shortens the vector to `new_len`, destroying the tail.
    ///
    /// No effect when `new_len >= len`. The count is updated before any
    /// element is destroyed, so a panicking `Drop` cannot lead to a
    /// double drop.
    pub fn truncate(&mut self, new_len: usize) {
        let len = self.len();
        if new_len >= len {
            return;
        }
        self.len = L::from_usize(new_len);
        if needs_drop::<T>() {
            // SAFETY: slots [new_len, len) were live and the count no
            // longer covers them; each is dropped exactly once here.
            unsafe {
                let tail = slice::from_raw_parts_mut(
                    self.slots.as_mut_ptr().add(new_len).cast::<T>(),
                    len - new_len,
                );
                ptr::drop_in_place(tail);
            }
        }
    }

    /// Destroys every element and resets the count to zero.
    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Appends clones of every element of `other`.
    ///
    /// When the result would exceed `CAP` nothing is appended and the
    /// error reports it; the vector keeps its previous contents.
    pub fn extend_from_slice(&mut self, other: &[T]) -> Result<(), CapacityError>
    where
        T: Clone,
    {
        if CAP - self.len() < other.len() {
            return Err(CapacityError { value: () });
        }
        for item in other {
            // SAFETY: the length check above reserved a slot per element.
            unsafe { self.push_unchecked(item.clone()) };
        }
        Ok(())
    }
}

/// Clears the borrowed vector when dropped; armed across the element
/// copies in `clone_from` and disarmed on success.
struct ClearOnDrop<'a, T, const CAP: usize, L: Len> {
    /// Destination being refilled.
    vec: &'a mut FixedVec<T, CAP, L>,
}

impl<T, const CAP: usize, L: Len> Drop for ClearOnDrop<'_, T, CAP, L> {
    fn drop(&mut self) {
        self.vec.clear();
    }
}

impl<T: Clone, const CAP: usize, L: Len> Clone for FixedVec<T, CAP, L> {
    fn clone(&self) -> Self {
        let mut new = Self::new();
        new.extend_from_slice(self.as_slice())
            .expect("clone source fits its own capacity");
        new
    }

    /// Replaces `self` with clones of `source`'s elements.
    ///
    /// The usual strong rollback guarantee is traded away on purpose: the
    /// destination is cleared first and refilled element by element, so
    /// if cloning an element panics partway, the destination is left
    /// empty rather than restored to its previous contents. Callers get
    /// the cheaper non-transactional cost model in exchange; nothing
    /// leaks and nothing is dropped twice either way.
    fn clone_from(&mut self, source: &Self) {
        self.clear();
        let guard = ClearOnDrop { vec: self };
        for item in source.as_slice() {
            // SAFETY: the destination was cleared and the source holds at
            // most CAP elements, so a slot is free on every pass.
            unsafe { guard.vec.push_unchecked(item.clone()) };
        }
        mem::forget(guard);
    }
}

impl<T, const CAP: usize, L: Len> Drop for FixedVec<T, CAP, L> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T, const CAP: usize, L: Len> Default for FixedVec<T, CAP, L> {
    /// An empty vector.
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const CAP: usize, L: Len> Deref for FixedVec<T, CAP, L> {
    type Target = [T];

    #[inline(always)]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, const CAP: usize, L: Len> DerefMut for FixedVec<T, CAP, L> {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: Debug, const CAP: usize, L: Len> Debug for FixedVec<T, CAP, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: PartialEq, const CAP: usize, L: Len> PartialEq for FixedVec<T, CAP, L> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, const CAP: usize, L: Len> Eq for FixedVec<T, CAP, L> {}

impl<'a, T, const CAP: usize, L: Len> IntoIterator for &'a FixedVec<T, CAP, L> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T, const CAP: usize, L: Len> IntoIterator for &'a mut FixedVec<T, CAP, L> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}

impl<T, const CAP: usize, L: Len> IntoIterator for FixedVec<T, CAP, L> {
    type Item = T;
    type IntoIter = IntoIter<T, CAP, L>;

    /// Consumes the vector, yielding elements in index order.
    fn into_iter(self) -> Self::IntoIter {
        IntoIter { vec: self, next: 0 }
    }
}

/// Draining iterator over an owned [`FixedVec`].
///
/// Unconsumed elements are destroyed when the iterator is dropped.
pub struct IntoIter<T, const CAP: usize, L: Len = usize> {
    /// The vector being drained; elements `[next, vec.len)` are live.
    vec: FixedVec<T, CAP, L>,
    /// Next index to yield.
    next: usize,
}

impl<T, const CAP: usize, L: Len> Iterator for IntoIter<T, CAP, L> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.next == self.vec.len() {
            return None;
        }
        let index = self.next;
        self.next = index + 1;
        // SAFETY: slot `index` was live and will not be touched again:
        // the cursor moved past it and `drop` only handles [next, len).
        Some(unsafe { self.vec.slots.get_unchecked(index).assume_init_read() })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.vec.len() - self.next;
        (remaining, Some(remaining))
    }
}

impl<T, const CAP: usize, L: Len> ExactSizeIterator for IntoIter<T, CAP, L> {}

impl<T, const CAP: usize, L: Len> FusedIterator for IntoIter<T, CAP, L> {}

impl<T, const CAP: usize, L: Len> Drop for IntoIter<T, CAP, L> {
    fn drop(&mut self) {
        let len = self.vec.len();
        let next = self.next;
        // The vector's own drop must not also destroy the prefix this
        // iterator already handed out.
        self.vec.len = L::ZERO;
        if needs_drop::<T>() {
            // SAFETY: slots [next, len) are live and now unreachable
            // through the vector; each is dropped exactly once here.
            unsafe {
                let tail = slice::from_raw_parts_mut(
                    self.vec.slots.as_mut_ptr().add(next).cast::<T>(),
                    len - next,
                );
                ptr::drop_in_place(tail);
            }
        }
    }
}
