//! The path-addressed JSON store.

use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};

use crate::session::Session;
use crate::storage::{FileStorage, MemoryStorage, Storage};
use crate::{tree, KeyPath, StoreError};

/// Settings for a [`PathJsonStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreOptions {
    /// Spaces per indentation level when writing the document.
    pub indent: usize,
    /// Create a missing file holding `{}` when opening it.
    pub create_missing: bool,
}

impl Default for StoreOptions {
    fn default() -> Self {
        StoreOptions {
            indent: 4,
            create_missing: true,
        }
    }
}

/// A JSON object document addressed by `" / "`-separated key paths.
///
/// Outside a session, every [`get`](PathJsonStore::get) loads the document and every
/// [`set`](PathJsonStore::set) loads, updates and saves it. A [`Session`] loads once, works on
/// the loaded tree and saves once when it ends.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use utilkit_json_store::PathJsonStore;
///
/// let mut store = PathJsonStore::in_memory("{}");
/// {
///     let mut session = store.session().unwrap();
///     session.set("server / port", 8080).unwrap();
///     session.set("server / host", "localhost").unwrap();
/// }
/// assert_eq!(store.get("server / port").unwrap(), json!(8080));
/// ```
pub struct PathJsonStore<S: Storage = FileStorage> {
    storage: S,
    options: StoreOptions,
}

impl PathJsonStore<FileStorage> {
    /// Open the document in the file at `path` with the default options, creating the file if
    /// it does not exist.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        Self::open_with(path, StoreOptions::default())
    }

    pub fn open_with(path: impl Into<PathBuf>, options: StoreOptions) -> Result<Self, StoreError> {
        let storage = FileStorage::open(path, options.create_missing)?;
        Ok(PathJsonStore::new(storage, options))
    }
}

impl PathJsonStore<MemoryStorage> {
    /// A store over an in-memory document. Empty input reads as `{}`.
    pub fn in_memory(bytes: impl Into<Vec<u8>>) -> Self {
        PathJsonStore::new(MemoryStorage::new(bytes), StoreOptions::default())
    }
}

impl<S: Storage> PathJsonStore<S> {
    pub fn new(storage: S, options: StoreOptions) -> Self {
        PathJsonStore { storage, options }
    }

    pub fn options(&self) -> &StoreOptions {
        &self.options
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Read the value at `path` from a fresh load of the document.
    pub fn get(&self, path: impl Into<KeyPath>) -> Result<Value, StoreError> {
        let tree = self.load()?;
        tree::get_leaf(&tree, &path.into()).cloned()
    }

    /// Read the value at `path` and deserialize it.
    pub fn get_as<T: DeserializeOwned>(&self, path: impl Into<KeyPath>) -> Result<T, StoreError> {
        Ok(serde_json::from_value(self.get(path)?)?)
    }

    /// Write `value` at `path` and save the document. Missing parent objects are created.
    pub fn set(&mut self, path: impl Into<KeyPath>, value: impl Into<Value>) -> Result<(), StoreError> {
        let mut tree = self.load()?;
        tree::set_leaf(&mut tree, &path.into(), value.into())?;
        self.save(&tree)
    }

    /// Serialize `value` and write it at `path`.
    pub fn set_as<T: Serialize + ?Sized>(
        &mut self,
        path: impl Into<KeyPath>,
        value: &T,
    ) -> Result<(), StoreError> {
        let value = serde_json::to_value(value)?;
        self.set(path, value)
    }

    /// Load the document and start a session over it.
    pub fn session(&mut self) -> Result<Session<'_, S>, StoreError> {
        let tree = self.load()?;
        Ok(Session::new(self, tree))
    }

    /// Run `f` in a session. The session is saved whether or not `f` succeeds; an error from
    /// `f` takes precedence over an error from saving.
    pub fn with_session<R, E, F>(&mut self, f: F) -> Result<R, E>
    where
        F: FnOnce(&mut Session<'_, S>) -> Result<R, E>,
        E: From<StoreError>,
    {
        let mut session = self.session()?;
        let result = f(&mut session);
        let saved = session.finish();
        let value = result?;
        saved?;
        Ok(value)
    }

    /// The document as it would be written, from a fresh load.
    pub fn render(&self) -> Result<String, StoreError> {
        let tree = self.load()?;
        self.render_tree(&tree)
    }

    pub(crate) fn load(&self) -> Result<Map<String, Value>, StoreError> {
        let bytes = self.storage.load()?;
        if bytes.is_empty() {
            return Ok(Map::new());
        }

        let value: Value = serde_json::from_slice(&bytes).map_err(|source| StoreError::Parse {
            target: self.storage.describe(),
            source,
        })?;
        match value {
            Value::Object(map) => Ok(map),
            _ => Err(StoreError::RootNotObject {
                target: self.storage.describe(),
            }),
        }
    }

    pub(crate) fn save(&mut self, tree: &Map<String, Value>) -> Result<(), StoreError> {
        let bytes = self.encode(tree)?;
        self.storage.save(&bytes)
    }

    pub(crate) fn render_tree(&self, tree: &Map<String, Value>) -> Result<String, StoreError> {
        let bytes = self.encode(tree)?;
        // serde_json only ever writes UTF-8.
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn encode(&self, tree: &Map<String, Value>) -> Result<Vec<u8>, StoreError> {
        let indent = " ".repeat(self.options.indent);
        let mut bytes = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(
            &mut bytes,
            PrettyFormatter::with_indent(indent.as_bytes()),
        );
        tree.serialize(&mut serializer)?;
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_buffer_reads_as_empty_object() {
        let store = PathJsonStore::in_memory("");
        assert!(store.load().unwrap().is_empty());
        assert_eq!(store.render().unwrap(), "{}");
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let store = PathJsonStore::in_memory("{not json");
        assert!(matches!(
            store.get("a").unwrap_err(),
            StoreError::Parse { .. }
        ));
    }

    #[test]
    fn non_object_root_is_rejected() {
        let store = PathJsonStore::in_memory("[1, 2]");
        assert!(matches!(
            store.get("a").unwrap_err(),
            StoreError::RootNotObject { .. }
        ));
    }

    #[test]
    fn set_round_trips_outside_session() {
        let mut store = PathJsonStore::in_memory("{}");
        store.set("a / b", json!([1, 2])).unwrap();
        assert_eq!(store.get("a / b").unwrap(), json!([1, 2]));
        assert_eq!(store.get("a").unwrap(), json!({"b": [1, 2]}));
    }

    #[test]
    fn indent_is_configurable() {
        let options = StoreOptions {
            indent: 2,
            ..StoreOptions::default()
        };
        let mut store = PathJsonStore::new(MemoryStorage::default(), options);
        store.set("a / b", 1).unwrap();
        assert_eq!(store.render().unwrap(), "{\n  \"a\": {\n    \"b\": 1\n  }\n}");
    }

    #[test]
    fn default_indent_is_four_spaces() {
        let mut store = PathJsonStore::in_memory("");
        store.set("k", "v").unwrap();
        assert_eq!(
            String::from_utf8(store.into_storage().into_inner()).unwrap(),
            "{\n    \"k\": \"v\"\n}"
        );
    }

    #[test]
    fn non_ascii_is_written_verbatim() {
        let mut store = PathJsonStore::in_memory("{}");
        store.set("greeting", "привет").unwrap();
        assert!(store.render().unwrap().contains("привет"));
    }

    #[test]
    fn keys_keep_document_order() {
        let store = PathJsonStore::in_memory(r#"{"zeta": 1, "alpha": 2}"#);
        let rendered = store.render().unwrap();
        assert!(rendered.find("zeta").unwrap() < rendered.find("alpha").unwrap());
    }

    #[test]
    fn typed_access() {
        #[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq)]
        struct Server {
            host: String,
            port: u16,
        }

        let mut store = PathJsonStore::in_memory("{}");
        let server = Server {
            host: "localhost".to_string(),
            port: 8080,
        };
        store.set_as("servers / main", &server).unwrap();
        assert_eq!(store.get_as::<Server>("servers / main").unwrap(), server);
        assert_eq!(store.get_as::<u16>("servers / main / port").unwrap(), 8080);
        assert!(matches!(
            store.get_as::<u16>("servers / main / host"),
            Err(StoreError::Serialization(_))
        ));
    }
}
