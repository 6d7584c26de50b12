//! Dense arrays indexed by field-less enums.

use core::array;
use core::fmt;
use core::fmt::Debug;
use core::marker::PhantomData;
use core::ops::{Index, IndexMut};
use core::slice;

use strum::{EnumCount, IntoEnumIterator};

/// A field-less enum usable as a dense array index.
///
/// Deriving [`strum::EnumCount`] supplies the variant count; `slot` maps
/// each variant to its position in `[0, Self::COUNT)`, in declaration
/// order. For the usual unit-variant enums that is just `self as usize`.
pub trait Slot: EnumCount + Copy {
    /// This variant's index in declaration order; must be below
    /// `Self::COUNT`.
    fn slot(self) -> usize;
}

/// A fixed array of `V` with one slot per variant of `E`.
///
/// `N` must equal `E::COUNT`; construction asserts it once (stable Rust
/// cannot use the associated count as the array length of a generic type,
/// so the length is repeated as a const parameter).
///
/// ```
/// use keyx::{EnumMap, Slot};
/// use strum::{EnumCount, EnumIter};
///
/// #[derive(Clone, Copy, EnumCount, EnumIter)]
/// enum Axis {
///     X,
///     Y,
///     Z,
/// }
///
/// impl Slot for Axis {
///     fn slot(self) -> usize {
///         self as usize
///     }
/// }
///
/// let mut extents: EnumMap<Axis, u32, 3> = EnumMap::new();
/// extents[Axis::Y] = 40;
/// assert_eq!(extents[Axis::Y], 40);
/// assert_eq!(extents[Axis::Z], 0);
/// ```
pub struct EnumMap<E: Slot, V, const N: usize> {
    /// One value per variant, in declaration order.
    slots: [V; N],
    /// Index discipline marker.
    tag: PhantomData<fn(E)>,
}

impl<E: Slot, V, const N: usize> EnumMap<E, V, N> {
    /// Checks the `N == E::COUNT` contract.
    fn check_count() {
        assert_eq!(N, E::COUNT, "EnumMap size must equal the enum's variant count");
    }

    /// A map with every slot default-initialized.
    pub fn new() -> Self
    where
        V: Default,
    {
        Self::check_count();
        Self {
            slots: array::from_fn(|_| V::default()),
            tag: PhantomData,
        }
    }

    /// Builds each slot from its variant, in declaration order.
    pub fn from_fn(mut init: impl FnMut(E) -> V) -> Self
    where
        E: IntoEnumIterator,
    {
        Self::check_count();
        let mut variants = E::iter();
        Self {
            slots: array::from_fn(|_| {
                let variant = variants.next().expect("variant count matches N");
                init(variant)
            }),
            tag: PhantomData,
        }
    }

    /// Shared access to one slot.
    #[inline(always)]
    pub fn get(&self, key: E) -> &V {
        &self.slots[key.slot()]
    }

    /// Mutable access to one slot.
    #[inline(always)]
    pub fn get_mut(&mut self, key: E) -> &mut V {
        &mut self.slots[key.slot()]
    }

    /// Variant/value pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (E, &V)>
    where
        E: IntoEnumIterator,
    {
        E::iter().zip(self.slots.iter())
    }

    /// Values in declaration order.
    pub fn values(&self) -> slice::Iter<'_, V> {
        self.slots.iter()
    }

    /// Mutable values in declaration order.
    pub fn values_mut(&mut self) -> slice::IterMut<'_, V> {
        self.slots.iter_mut()
    }

    /// The backing array as a slice, in declaration order.
    pub fn as_slice(&self) -> &[V] {
        &self.slots
    }
}

impl<E: Slot, V, const N: usize> Index<E> for EnumMap<E, V, N> {
    type Output = V;

    #[inline(always)]
    fn index(&self, key: E) -> &V {
        self.get(key)
    }
}

impl<E: Slot, V, const N: usize> IndexMut<E> for EnumMap<E, V, N> {
    #[inline(always)]
    fn index_mut(&mut self, key: E) -> &mut V {
        self.get_mut(key)
    }
}

impl<E: Slot, V: Default, const N: usize> Default for EnumMap<E, V, N> {
    /// A map with every slot default-initialized.
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Slot, V: Clone, const N: usize> Clone for EnumMap<E, V, N> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
            tag: PhantomData,
        }
    }
}

impl<E, V, const N: usize> Debug for EnumMap<E, V, N>
where
    E: Slot + IntoEnumIterator + Debug,
    V: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
