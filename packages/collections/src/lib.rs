//! Container wrappers with positional conveniences.
//!
//! - [`OrderedKeyMap`]: an insertion-ordered map that can be addressed by key, by 1-based
//!   position, or by a closed range of positions.
//! - [`Stack`]: a vector-backed LIFO stack with element-wise arithmetic.
//! - [`SortedSet`]: an ordered set with union, difference, intersection, complement and
//!   implication.
//!
//! # Example
//!
//! ```rust
//! use utilkit_collections::{KeyRef, Lookup, OrderedKeyMap};
//!
//! let mut map: OrderedKeyMap<&str, i32> = [("hello", 1), ("hi", 2)].into_iter().collect();
//!
//! assert_eq!(map.get_item(&KeyRef::Index(1)).unwrap(), Lookup::One(Some(&1)));
//! assert_eq!(map.get_item(&KeyRef::Literal("hi")).unwrap(), Lookup::One(Some(&2)));
//!
//! map.set_items(KeyRef::range(1, 2), [7]).unwrap();
//! assert_eq!(map.values().copied().collect::<Vec<_>>(), vec![7, 7]);
//! ```

mod error;
pub mod ordered_map;
pub mod set;
pub mod stack;

pub use error::{MapError, StackError};
pub use ordered_map::{Found, KeyRef, Lookup, OrderedKeyMap, Selector};
pub use set::SortedSet;
pub use stack::Stack;
