//! Error types for the `flatx` containers.
//!
//! Fallible operations hand the rejected values back inside their errors,
//! so nothing is lost when a capacity-bounded container says no. The types
//! deliberately avoid `Debug` bounds on their payloads: an error over a
//! non-`Debug` element type still formats and still implements
//! [`std::error::Error`].

use core::fmt;
use core::fmt::Debug;

use thiserror::Error;

/// An insertion did not fit in a capacity-bounded container.
///
/// Carries the rejected value; bulk operations that consume nothing on
/// failure use `CapacityError<()>`.
#[derive(Error, Copy, Clone, PartialEq, Eq)]
#[error("insufficient capacity")]
pub struct CapacityError<T = ()> {
    /// The value that could not be stored.
    pub value: T,
}

impl<T> Debug for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapacityError").finish_non_exhaustive()
    }
}

/// An insertion into a [`FlatMap`](crate::FlatMap) was rejected.
///
/// Either way the map is unchanged and the key/value pair comes back to the
/// caller through [`InsertError::into_pair`] or the variant fields.
#[derive(Error)]
#[non_exhaustive]
pub enum InsertError<K, V> {
    /// An equivalent key is already present; its value keeps its old
    /// contents.
    #[error("key already present at index {index}")]
    Occupied {
        /// Position of the existing entry.
        index: usize,
        /// The rejected key.
        key: K,
        /// The rejected value.
        value: V,
    },

    /// The backing storage is at capacity.
    #[error("map storage is full")]
    Full {
        /// The rejected key.
        key: K,
        /// The rejected value.
        value: V,
    },
}

impl<K, V> InsertError<K, V> {
    /// The rejected key/value pair.
    pub fn into_pair(self) -> (K, V) {
        match self {
            Self::Occupied { key, value, .. } | Self::Full { key, value } => (key, value),
        }
    }

    /// Position of the existing entry, for the occupied case.
    pub fn existing_index(&self) -> Option<usize> {
        match self {
            Self::Occupied { index, .. } => Some(*index),
            Self::Full { .. } => None,
        }
    }
}

impl<K, V> Debug for InsertError<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Occupied { index, .. } => f
                .debug_struct("Occupied")
                .field("index", index)
                .finish_non_exhaustive(),
            Self::Full { .. } => f.debug_struct("Full").finish_non_exhaustive(),
        }
    }
}
