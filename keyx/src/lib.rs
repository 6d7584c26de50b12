//! Key, index and identity primitives for capacity-bounded containers.
//!
//! `keyx` collects the building blocks the `flatx` containers consume but
//! that stand on their own:
//!
//! - [`Len`], the family of integer types usable as live-element counters,
//!   with [`bytes_for`] and friends to pick the smallest one for a given
//!   capacity;
//! - [`Handle`], a strong-typedef identity value distinguished by tag types;
//! - [`EnumMap`], a dense array indexed by the variants of a field-less enum.
//!
//! All of it is plain value-semantics code with no allocation and no
//! `unsafe`.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
#![warn(clippy::cast_lossless)]
#![warn(unreachable_pub)]

mod bits;
mod enum_map;
mod handle;
mod len;

pub use bits::{bit_ceil, bit_floor, bit_width, bits_for, bytes_for};
pub use enum_map::{EnumMap, Slot};
pub use handle::{DefaultTag, Handle, Tag};
pub use len::Len;
