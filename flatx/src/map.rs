//! A sorted flat map over contiguous storage.
//!
//! [`FlatMap`] keeps key/value pairs ascending by key inside any
//! [`Storage`] backing and locates them by binary search. Lookups cost
//! O(log n) comparisons, insertions and removals shift the tail of the
//! backing. Against tree maps this trades insertion cost for locality,
//! zero per-entry allocation and a backing that can be capacity-bounded:
//! [`FixedFlatMap`] lives entirely inline, [`VecFlatMap`] grows.
//!
//! Keys are unique under the configured [`Order`]: two keys neither of
//! which sorts before the other are the same key, and inserting over an
//! existing key never touches the stored value.

use core::fmt;
use core::fmt::Debug;
use core::iter;
use core::marker::PhantomData;
use core::ops::Index;
use core::slice;

use keyx::Len;

use crate::err::{CapacityError, InsertError};
use crate::order::{ByKey, Natural, Order};
use crate::sort;
use crate::store::Storage;
use crate::vec::FixedVec;

/// A unique-key map kept sorted inside a contiguous backing.
///
/// `S` is the backing storage of `(K, V)` entries, `O` the ordering
/// policy on keys. A stateless ordering like the default [`Natural`] is
/// zero-sized, so the map is exactly the size of its backing.
///
/// # Examples
///
/// ```
/// use flatx::FixedFlatMap;
///
/// let mut map: FixedFlatMap<u32, &str, 8> = FixedFlatMap::new();
/// map.insert(3, "c").unwrap();
/// map.insert(1, "a").unwrap();
/// assert_eq!(map.get(&1), Some(&"a"));
/// let keys: Vec<u32> = map.keys().copied().collect();
/// assert_eq!(keys, [1, 3]);
/// ```
pub struct FlatMap<K, V, S, O = Natural> {
    /// The entries, always sorted ascending by key and duplicate-free.
    storage: S,
    /// The ordering policy applied to keys.
    order: O,
    /// Carries `K` and `V` without owning or dropping them.
    marker: PhantomData<fn() -> (K, V)>,
}

/// A [`FlatMap`] over a growable `Vec` backing.
pub type VecFlatMap<K, V, O = Natural> = FlatMap<K, V, Vec<(K, V)>, O>;

/// A [`FlatMap`] over a capacity-bounded inline backing.
pub type FixedFlatMap<K, V, const CAP: usize, O = Natural> = FlatMap<K, V, FixedVec<(K, V), CAP>, O>;

impl<K, V, S: Storage<(K, V)> + Default, O: Order<K>> FlatMap<K, V, S, O> {
    /// An empty map with the default ordering.
    pub fn new() -> Self
    where
        O: Default,
    {
        Self::with_order(O::default())
    }

    /// An empty map ordered by `order`.
    pub fn with_order(order: O) -> Self {
        Self {
            storage: S::default(),
            order,
            marker: PhantomData,
        }
    }
}

impl<K, V, S: Storage<(K, V)>, O: Order<K>> FlatMap<K, V, S, O> {
    /// Number of entries.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Whether the map holds no entries.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Upper bound on `len`; `usize::MAX` for growable backings.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.storage.clear();
    }

    /// The ordering policy in use.
    pub fn order(&self) -> &O {
        &self.order
    }

    /// The sorted entries as a slice.
    pub fn as_entries(&self) -> &[(K, V)] {
        self.storage.as_slice()
    }

    /// Consumes the map, returning the sorted backing.
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Index of the first entry whose key does not sort before `key`.
    fn lower_bound(&self, key: &K) -> usize {
        self.storage
            .as_slice()
            .partition_point(|(stored, _)| self.order.less(stored, key))
    }

    /// Position of the entry for `key`, or `None` when absent.
    ///
    /// Binary search; no side effects. The position indexes
    /// [`FlatMap::as_entries`] and stays valid until the map is mutated.
    pub fn find(&self, key: &K) -> Option<usize> {
        let index = self.lower_bound(key);
        let (stored, _) = self.storage.as_slice().get(index)?;
        self.order.equiv(stored, key).then_some(index)
    }

    /// Whether an entry for `key` is present.
    pub fn contains_key(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// The value stored for `key`, or `None` when absent.
    pub fn get(&self, key: &K) -> Option<&V> {
        let index = self.find(key)?;
        Some(&self.storage.as_slice()[index].1)
    }

    /// The value stored for `key`, mutably, or `None` when absent.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let index = self.find(key)?;
        Some(&mut self.storage.as_mut_slice()[index].1)
    }

    /// The stored key and value for `key`, or `None` when absent.
    pub fn get_key_value(&self, key: &K) -> Option<(&K, &V)> {
        let index = self.find(key)?;
        let (stored, value) = &self.storage.as_slice()[index];
        Some((stored, value))
    }

    /// Inserts `key -> value` at its sorted position.
    ///
    /// Returns the new entry's position. When an equivalent key is
    /// already present the map is unchanged, the stored value keeps its
    /// old contents, and [`InsertError::Occupied`] reports the existing
    /// position; when the backing is full [`InsertError::Full`] applies.
    /// Either error hands the rejected pair back.
    pub fn insert(&mut self, key: K, value: V) -> Result<usize, InsertError<K, V>> {
        let index = self.lower_bound(&key);
        if let Some((stored, _)) = self.storage.as_slice().get(index) {
            if self.order.equiv(stored, &key) {
                return Err(InsertError::Occupied { index, key, value });
            }
        }
        match self.storage.insert(index, (key, value)) {
            Ok(()) => Ok(index),
            Err(CapacityError { value: (key, value) }) => Err(InsertError::Full { key, value }),
        }
    }

    /// The value for `key`, inserting `make_value()` first when absent.
    ///
    /// Returns the key inside [`CapacityError`] when a new entry is
    /// needed but the backing is full; the map is unchanged and
    /// `make_value` is never called in that case.
    pub fn try_get_or_insert_with<F>(
        &mut self,
        key: K,
        make_value: F,
    ) -> Result<&mut V, CapacityError<K>>
    where
        F: FnOnce() -> V,
    {
        let index = self.lower_bound(&key);
        let occupied = match self.storage.as_slice().get(index) {
            Some((stored, _)) => self.order.equiv(stored, &key),
            None => false,
        };
        if !occupied {
            if self.storage.len() == self.storage.capacity() {
                return Err(CapacityError { value: key });
            }
            self.storage
                .insert(index, (key, make_value()))
                .expect("storage reported free capacity");
        }
        Ok(&mut self.storage.as_mut_slice()[index].1)
    }

    /// The value for `key`, inserting `make_value()` first when absent.
    ///
    /// Panics if a new entry is needed but the backing is full;
    /// [`FlatMap::try_get_or_insert_with`] is the non-panicking form.
    pub fn get_or_insert_with<F>(&mut self, key: K, make_value: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        let capacity = self.capacity();
        match self.try_get_or_insert_with(key, make_value) {
            Ok(value) => value,
            Err(_) => panic!("FlatMap storage is full (capacity {})", capacity),
        }
    }

    /// The value for `key`, inserting `V::default()` first when absent.
    ///
    /// Panics if a new entry is needed but the backing is full.
    pub fn get_or_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        self.get_or_insert_with(key, V::default)
    }

    /// Removes the entry for `key`, returning its key and value.
    ///
    /// `Some` means one entry was removed, `None` that the key was
    /// absent and nothing changed.
    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        let index = self.find(key)?;
        Some(self.storage.remove(index))
    }

    /// Removes the entry for `key`, returning its value.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Removes and returns the entry at `index` unconditionally.
    ///
    /// Panics if `index >= len`.
    pub fn remove_at(&mut self, index: usize) -> (K, V) {
        let len = self.len();
        assert!(index < len, "remove index {index} out of range (len {len})");
        self.storage.remove(index)
    }

    /// The entries in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.as_entries().iter().map(|(key, value)| (key, value))
    }

    /// The entries in ascending key order, values mutable.
    ///
    /// Keys stay immutable; mutating one could break the sorted
    /// invariant.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&K, &mut V)> {
        self.storage
            .as_mut_slice()
            .iter_mut()
            .map(|(key, value)| (&*key, value))
    }

    /// The keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.as_entries().iter().map(|(key, _)| key)
    }

    /// The values in ascending key order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.as_entries().iter().map(|(_, value)| value)
    }

    /// The values in ascending key order, mutably.
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut V> {
        self.storage.as_mut_slice().iter_mut().map(|(_, value)| value)
    }
}

impl<K, V, const CAP: usize, L: Len, O: Order<K>> FlatMap<K, V, FixedVec<(K, V), CAP, L>, O> {
    /// Builds a capacity-bounded map from a literal entry array.
    ///
    /// The array is moved into the backing and sorted in place with
    /// [`crate::sort::heapsort`] under the default ordering. Fixed lookup
    /// tables built this way carry no per-lookup cost beyond the binary
    /// search; a `OnceLock` makes the build itself a one-time step:
    ///
    /// ```
    /// use std::sync::OnceLock;
    /// use flatx::FixedFlatMap;
    ///
    /// static ERRNO: OnceLock<FixedFlatMap<u32, &'static str, 3>> = OnceLock::new();
    ///
    /// let table = ERRNO.get_or_init(|| {
    ///     FixedFlatMap::from_entries([(2, "ENOENT"), (1, "EPERM"), (13, "EACCES")])
    /// });
    /// assert_eq!(table.get(&2), Some(&"ENOENT"));
    /// assert_eq!(table.get(&5), None);
    /// ```
    ///
    /// Panics if the array exceeds `CAP` or two keys are equivalent;
    /// both are programmer errors in a fixed table.
    pub fn from_entries<const N: usize>(entries: [(K, V); N]) -> Self
    where
        O: Default,
    {
        Self::from_entries_with_order(O::default(), entries)
    }

    /// Builds a capacity-bounded map from a literal entry array under
    /// `order`.
    ///
    /// Panics if the array exceeds `CAP` or two keys are equivalent
    /// under `order`.
    pub fn from_entries_with_order<const N: usize>(order: O, entries: [(K, V); N]) -> Self {
        assert!(N <= CAP, "fixed table of {N} entries exceeds capacity {CAP}");
        let mut storage: FixedVec<(K, V), CAP, L> = FixedVec::new();
        for entry in entries {
            storage.push(entry);
        }
        let by_key = ByKey(&order);
        sort::heapsort(storage.as_mut_slice(), |a, b| by_key.less(a, b));
        for (index, pair) in storage.windows(2).enumerate() {
            if order.equiv(&pair[0].0, &pair[1].0) {
                panic!(
                    "duplicate key in fixed table at sorted positions {index} and {}",
                    index + 1
                );
            }
        }
        Self {
            storage,
            order,
            marker: PhantomData,
        }
    }
}

impl<K, V, S: Storage<(K, V)> + Default, O: Order<K> + Default> Default for FlatMap<K, V, S, O> {
    /// An empty map with the default ordering.
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S: Clone, O: Clone> Clone for FlatMap<K, V, S, O> {
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
            order: self.order.clone(),
            marker: PhantomData,
        }
    }
}

impl<K: Debug, V: Debug, S: Storage<(K, V)>, O: Order<K>> Debug for FlatMap<K, V, S, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: PartialEq, V: PartialEq, S: Storage<(K, V)>, O: Order<K>> PartialEq
    for FlatMap<K, V, S, O>
{
    fn eq(&self, other: &Self) -> bool {
        self.as_entries() == other.as_entries()
    }
}

impl<K: Eq, V: Eq, S: Storage<(K, V)>, O: Order<K>> Eq for FlatMap<K, V, S, O> {}

impl<K, V, S: Storage<(K, V)>, O: Order<K>> Index<&K> for FlatMap<K, V, S, O> {
    type Output = V;

    /// The value stored for `key`.
    ///
    /// Panics when the key is absent; [`FlatMap::get`] is the
    /// non-panicking form.
    fn index(&self, key: &K) -> &V {
        self.get(key).expect("no entry found for key")
    }
}

/// Borrows both halves of an entry.
fn entry_refs<K, V>(entry: &(K, V)) -> (&K, &V) {
    (&entry.0, &entry.1)
}

/// Borrows an entry with the value half mutable.
fn entry_refs_mut<K, V>(entry: &mut (K, V)) -> (&K, &mut V) {
    (&entry.0, &mut entry.1)
}

impl<'a, K, V, S: Storage<(K, V)>, O: Order<K>> IntoIterator for &'a FlatMap<K, V, S, O> {
    type Item = (&'a K, &'a V);
    type IntoIter = iter::Map<slice::Iter<'a, (K, V)>, fn(&'a (K, V)) -> (&'a K, &'a V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_entries()
            .iter()
            .map(entry_refs as fn(&'a (K, V)) -> (&'a K, &'a V))
    }
}

impl<'a, K, V, S: Storage<(K, V)>, O: Order<K>> IntoIterator for &'a mut FlatMap<K, V, S, O> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = iter::Map<slice::IterMut<'a, (K, V)>, fn(&'a mut (K, V)) -> (&'a K, &'a mut V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.storage
            .as_mut_slice()
            .iter_mut()
            .map(entry_refs_mut as fn(&'a mut (K, V)) -> (&'a K, &'a mut V))
    }
}

impl<K, V, S, O> IntoIterator for FlatMap<K, V, S, O>
where
    S: Storage<(K, V)> + IntoIterator<Item = (K, V)>,
    O: Order<K>,
{
    type Item = (K, V);
    type IntoIter = S::IntoIter;

    /// Consumes the map, yielding entries in ascending key order.
    fn into_iter(self) -> Self::IntoIter {
        self.storage.into_iter()
    }
}
