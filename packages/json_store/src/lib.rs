//! Path-addressed access to JSON documents.
//!
//! A [`PathJsonStore`] wraps a JSON object document kept in a file or an in-memory buffer.
//! Values are addressed by a single string of keys joined by `" / "`:
//!
//! ```rust
//! use serde_json::json;
//! use utilkit_json_store::PathJsonStore;
//!
//! let store = PathJsonStore::in_memory(r#"{"test1": {"test2": 3}}"#);
//! assert_eq!(store.get("test1 / test2").unwrap(), json!(3));
//! ```
//!
//! Outside a session every access goes to storage. A [`Session`] loads the document once,
//! batches reads and writes in memory, and saves once when it ends.

mod error;
pub mod key_path;
mod session;
pub mod storage;
mod store;
pub mod tree;

pub use error::StoreError;
pub use key_path::KeyPath;
pub use session::Session;
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use store::{PathJsonStore, StoreOptions};
