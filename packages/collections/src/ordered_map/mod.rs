//! [`OrderedKeyMap`] and the types used to address its entries.
//!
//! Entries can be addressed three ways, spelled out by [`KeyRef`]:
//! - by key, with a hash lookup,
//! - by 1-based position in insertion order (negative positions count back from the end),
//! - by a closed range of positions, inclusive of both ends.
//!
//! The explicit [`get`](OrderedKeyMap::get) lookup takes a [`Selector`] instead, which can also
//! search by value.

mod key_ref;
mod map;
mod ops;

pub use key_ref::KeyRef;
pub use map::{Found, Lookup, OrderedKeyMap, Selector};
