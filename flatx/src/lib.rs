//! Capacity-bounded vectors and binary-search flat maps.
//!
//! `flatx` is a small family of contiguous containers for code that wants
//! its memory footprint decided up front:
//!
//! - [`FixedVec`], a vector storing at most `CAP` elements inline, with no
//!   reallocation ever;
//! - [`FlatMap`], a unique-key map kept sorted inside any [`Storage`]
//!   backing and located by binary search, with [`FixedFlatMap`] and
//!   [`VecFlatMap`] as the two ready-made backings;
//! - [`sort`], the in-place heap sort the map uses to build fixed lookup
//!   tables, exposed on plain slices;
//! - [`Order`], the comparator seam, with stateless policies costing zero
//!   bytes per container.
//!
//! Everything is single-threaded value-semantics code: no internal
//! allocation beyond the chosen backing, no threads, no I/O.
//!
//! ```
//! use flatx::FixedFlatMap;
//!
//! let map: FixedFlatMap<u32, &str, 4> =
//!     FixedFlatMap::from_entries([(3, "c"), (1, "a"), (2, "b")]);
//! assert_eq!(map.get(&2), Some(&"b"));
//! let keys: Vec<u32> = map.keys().copied().collect();
//! assert_eq!(keys, [1, 2, 3]);
//! ```

#![deny(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
#![warn(unreachable_pub)]

mod err;
mod map;
mod order;
pub mod sort;
mod store;
mod vec;

pub use err::{CapacityError, InsertError};
pub use map::{FixedFlatMap, FlatMap, VecFlatMap};
pub use order::{ByKey, Natural, Order, Reverse};
pub use store::Storage;
pub use vec::{FixedVec, IntoIter};
