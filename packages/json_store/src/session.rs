//! Batched access to a loaded document.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::storage::Storage;
use crate::{tree, KeyPath, PathJsonStore, StoreError};

/// A document loaded once from a [`PathJsonStore`] and saved once when the session ends.
///
/// Reads and writes only touch the loaded tree. The tree is saved by [`finish`](Session::finish),
/// which reports a failed save, or otherwise when the session is dropped, including while
/// unwinding from a panic. A failed save on drop is logged.
///
/// The session mutably borrows its store, so a store has at most one session at a time.
pub struct Session<'s, S: Storage> {
    store: &'s mut PathJsonStore<S>,
    tree: Map<String, Value>,
    saved: bool,
}

impl<'s, S: Storage> Session<'s, S> {
    pub(crate) fn new(store: &'s mut PathJsonStore<S>, tree: Map<String, Value>) -> Self {
        log::debug!("Session started on {}", store.storage().describe());
        Session {
            store,
            tree,
            saved: false,
        }
    }

    /// Read the value at `path`.
    pub fn get(&self, path: impl Into<KeyPath>) -> Result<&Value, StoreError> {
        tree::get_leaf(&self.tree, &path.into())
    }

    pub fn get_as<T: DeserializeOwned>(&self, path: impl Into<KeyPath>) -> Result<T, StoreError> {
        Ok(serde_json::from_value(self.get(path)?.clone())?)
    }

    /// Write `value` at `path`, creating missing parent objects. Returns the replaced value.
    pub fn set(
        &mut self,
        path: impl Into<KeyPath>,
        value: impl Into<Value>,
    ) -> Result<Option<Value>, StoreError> {
        tree::set_leaf(&mut self.tree, &path.into(), value.into())
    }

    pub fn set_as<T: Serialize + ?Sized>(
        &mut self,
        path: impl Into<KeyPath>,
        value: &T,
    ) -> Result<Option<Value>, StoreError> {
        let value = serde_json::to_value(value)?;
        self.set(path, value)
    }

    /// The loaded document.
    pub fn tree(&self) -> &Map<String, Value> {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.tree
    }

    /// End the session, saving the document.
    pub fn finish(mut self) -> Result<(), StoreError> {
        self.save()
    }

    fn save(&mut self) -> Result<(), StoreError> {
        // Set first: a failed save is not retried on drop.
        self.saved = true;
        log::debug!("Session ended on {}", self.store.storage().describe());
        self.store.save(&self.tree)
    }
}

impl<S: Storage> Drop for Session<'_, S> {
    fn drop(&mut self) {
        if self.saved {
            return;
        }
        if let Err(e) = self.save() {
            log::error!(
                "Failed to save session on {}: {}",
                self.store.storage().describe(),
                e
            );
        }
    }
}

/// Renders the loaded document the way it will be saved.
impl<S: Storage> fmt::Display for Session<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self.store.render_tree(&self.tree).map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}

impl<S: Storage> fmt::Debug for Session<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("storage", &self.store.storage().describe())
            .field("tree", &self.tree)
            .field("saved", &self.saved)
            .finish()
    }
}
