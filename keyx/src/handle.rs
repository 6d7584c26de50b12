//! Strong-typedef handles.
//!
//! A [`Handle`] wraps an integral identity value and ties it to a tag type,
//! so that identifiers of different kinds cannot be mixed up even when they
//! share a representation. Handles are only built and unwrapped explicitly;
//! there is no implicit conversion in either direction.
//!
//! ```
//! use keyx::{Handle, Tag};
//!
//! struct NodeTag;
//! impl Tag for NodeTag {
//!     type Repr = u32;
//! }
//!
//! struct PortTag;
//! impl Tag for PortTag {
//!     type Repr = u32;
//! }
//!
//! let node: Handle<NodeTag> = Handle::new(7);
//! let port: Handle<PortTag> = Handle::new(7);
//! assert_eq!(node.get(), port.get());
//! // `node == port` does not compile: the families are distinct types.
//! ```

use core::cmp::Ordering;
use core::fmt;
use core::fmt::Debug;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;

/// A marker type naming one handle family and its underlying representation.
pub trait Tag {
    /// Underlying value stored inside handles of this family.
    type Repr: Copy + Ord + Hash + Debug;
}

/// A [`Tag`] whose handles have a designated default identity.
///
/// Only tags implementing this make their [`Handle`] implement `Default`.
pub trait DefaultTag: Tag {
    /// Representation of the default handle.
    const DEFAULT: Self::Repr;
}

/// An opaque identity value backed by `T::Repr`.
///
/// Comparison, ordering and hashing delegate to the representation, so
/// handles work as map keys out of the box. The tag type parameter never
/// owns or references a `T`; it exists purely to keep families apart.
pub struct Handle<T: Tag> {
    /// Underlying identity value.
    repr: T::Repr,
    /// Ties the handle to its family without involving `T`'s own traits.
    tag: PhantomData<fn() -> T>,
}

impl<T: Tag> Handle<T> {
    /// Wraps an explicit representation value.
    #[inline(always)]
    pub const fn new(repr: T::Repr) -> Self {
        Self {
            repr,
            tag: PhantomData,
        }
    }

    /// Returns the underlying representation value.
    #[inline(always)]
    pub fn get(self) -> T::Repr {
        self.repr
    }
}

impl<T: Tag> Clone for Handle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Tag> Copy for Handle<T> {}

impl<T: Tag> PartialEq for Handle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.repr == other.repr
    }
}

impl<T: Tag> Eq for Handle<T> {}

impl<T: Tag> PartialOrd for Handle<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Tag> Ord for Handle<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.repr.cmp(&other.repr)
    }
}

impl<T: Tag> Hash for Handle<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.repr.hash(state);
    }
}

impl<T: Tag> Debug for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Handle").field(&self.repr).finish()
    }
}

impl<T: DefaultTag> Default for Handle<T> {
    /// The handle designated by [`DefaultTag::DEFAULT`].
    fn default() -> Self {
        Self::new(T::DEFAULT)
    }
}

#[cfg(feature = "serde")]
impl<T: Tag> serde::Serialize for Handle<T>
where
    T::Repr: serde::Serialize,
{
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.repr.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: Tag> serde::Deserialize<'de> for Handle<T>
where
    T::Repr: serde::Deserialize<'de>,
{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::Repr::deserialize(deserializer).map(Self::new)
    }
}

#[cfg(test)]
mod test {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    use super::*;

    /// Test tag without a default identity.
    struct NodeTag;

    impl Tag for NodeTag {
        type Repr = u32;
    }

    /// Test tag with a default identity.
    struct SlotTag;

    impl Tag for SlotTag {
        type Repr = u16;
    }

    impl DefaultTag for SlotTag {
        const DEFAULT: u16 = 0;
    }

    /// Hashes one value with the standard hasher.
    fn hash_one(value: &impl Hash) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn equality_and_ordering_follow_the_repr() {
        let a: Handle<NodeTag> = Handle::new(3);
        let b: Handle<NodeTag> = Handle::new(5);
        assert_eq!(a, Handle::new(3));
        assert_ne!(a, b);
        assert!(a < b);
        assert_eq!(a.max(b), b);
        assert_eq!(a.get(), 3);
    }

    #[test]
    fn hashing_matches_the_repr() {
        let handle: Handle<NodeTag> = Handle::new(42);
        assert_eq!(hash_one(&handle), hash_one(&42u32));
    }

    #[test]
    fn default_comes_from_the_tag() {
        let slot: Handle<SlotTag> = Handle::default();
        assert_eq!(slot.get(), 0);
    }

    #[test]
    fn debug_names_the_wrapper() {
        let handle: Handle<NodeTag> = Handle::new(7);
        assert_eq!(format!("{handle:?}"), "Handle(7)");
    }
}
