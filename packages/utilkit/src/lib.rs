//! # utilkit
//!
//! Small convenience facades over standard containers and JSON files.
//!
//! - [`collections`]: [`OrderedKeyMap`], addressed by key, 1-based position or closed range,
//!   [`Stack`] and [`SortedSet`].
//! - [`json_store`]: [`PathJsonStore`], a JSON document addressed by `" / "`-separated key
//!   paths, with batched sessions.
//! - [`sequences`]: arithmetic and geometric progressions, the Fibonacci sequence and
//!   [`Interval`].
//!
//! ```rust
//! use utilkit::{KeyRef, OrderedKeyMap, PathJsonStore};
//!
//! let mut map: OrderedKeyMap<&str, i64> = [("hello", 1), ("hi", 2)].into_iter().collect();
//! map.set_item(KeyRef::Index(-1), 20).unwrap();
//!
//! let mut store = PathJsonStore::in_memory("");
//! store
//!     .with_session(|session| -> Result<(), utilkit::json_store::StoreError> {
//!         for (key, value) in &map {
//!             session.set(format!("greetings / {}", key).as_str(), *value)?;
//!         }
//!         Ok(())
//!     })
//!     .unwrap();
//!
//! assert_eq!(store.get("greetings / hi").unwrap(), serde_json::json!(20));
//! ```

pub use utilkit_collections as collections;
pub use utilkit_json_store as json_store;
pub use utilkit_sequences as sequences;

pub use utilkit_collections::{KeyRef, OrderedKeyMap, SortedSet, Stack};
pub use utilkit_json_store::{PathJsonStore, Session};
pub use utilkit_sequences::{
    ArithmeticProgression, Fibonacci, GeometricProgression, Interval, ProgressionBuilder,
    Sequence,
};
