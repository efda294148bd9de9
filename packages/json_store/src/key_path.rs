//! Paths into a JSON object tree.

use std::fmt;

/// The separator between path segments. The surrounding spaces are part of it, so keys may
/// contain a bare `/`.
pub const SEPARATOR: &str = " / ";

/// A path of object keys, outermost first.
///
/// A path always has at least one segment: the last one names the leaf, the others name the
/// nested objects leading to it.
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct KeyPath {
    segments: Vec<String>,
}

impl KeyPath {
    /// Parse a path string by splitting it on [`SEPARATOR`].
    ///
    /// Segments are taken verbatim. A string without the separator is a single key, and the
    /// empty string is the single key `""`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use utilkit_json_store::KeyPath;
    ///
    /// let path = KeyPath::parse("server / ports / http");
    /// assert_eq!(path.len(), 3);
    /// assert_eq!(path.leaf(), "http");
    ///
    /// // A slash without the surrounding spaces stays inside the key.
    /// assert_eq!(KeyPath::parse("a/b").len(), 1);
    /// ```
    pub fn parse(s: &str) -> Self {
        KeyPath {
            segments: s.split(SEPARATOR).map(str::to_string).collect(),
        }
    }

    /// The number of segments, at least 1.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false; kept for symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.segments.iter()
    }

    /// The segments naming the objects that contain the leaf.
    pub fn parents(&self) -> &[String] {
        &self.segments[..self.segments.len().saturating_sub(1)]
    }

    /// The last segment.
    pub fn leaf(&self) -> &str {
        self.segments.last().map_or("", String::as_str)
    }

    /// Returns this path extended by one segment.
    #[must_use]
    pub fn child(&self, segment: impl Into<String>) -> KeyPath {
        let mut segments = self.segments.clone();
        segments.push(segment.into());
        KeyPath { segments }
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join(SEPARATOR))
    }
}

impl std::ops::Index<usize> for KeyPath {
    type Output = String;

    fn index(&self, i: usize) -> &Self::Output {
        &self.segments[i]
    }
}

impl From<&str> for KeyPath {
    fn from(s: &str) -> Self {
        KeyPath::parse(s)
    }
}

impl From<&String> for KeyPath {
    fn from(s: &String) -> Self {
        KeyPath::parse(s)
    }
}

impl From<&KeyPath> for KeyPath {
    fn from(path: &KeyPath) -> Self {
        path.clone()
    }
}
