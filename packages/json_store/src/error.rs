//! Error types for the JSON store.

use std::io;

/// Errors raised while loading, navigating or saving a JSON document.
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    /// Reading or writing the backing storage failed.
    #[error("I/O error on {target}: {source}")]
    Io {
        target: String,
        #[source]
        source: io::Error,
    },

    /// The stored bytes are not valid JSON.
    #[error("failed to parse {target} as JSON: {source}")]
    Parse {
        target: String,
        #[source]
        source: serde_json::Error,
    },

    /// A value could not be converted to or from JSON.
    #[error("failed to convert value: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A non-terminal path segment exists but does not hold an object.
    #[error("path component '{segment}' exists but is not an object")]
    NotAnObject { segment: String },

    /// A path segment is missing from the document.
    #[error("key '{segment}' of path '{path}' does not exist")]
    MissingKey { path: String, segment: String },

    /// The document root is valid JSON but not an object.
    #[error("the root of {target} is not a JSON object")]
    RootNotObject { target: String },
}

impl StoreError {
    pub(crate) fn io(target: impl Into<String>, source: io::Error) -> Self {
        StoreError::Io {
            target: target.into(),
            source,
        }
    }

    /// Returns true if the error comes from a missing path segment.
    pub fn is_missing_key(&self) -> bool {
        matches!(self, StoreError::MissingKey { .. })
    }
}
