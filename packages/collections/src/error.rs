//! Error types for the collection wrappers.

/// Errors raised by [`OrderedKeyMap`](crate::OrderedKeyMap) lookups and updates.
///
/// Reads of a missing key never produce an error; they fall back to the map's default.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// Position 0 was used. Positions start at 1.
    #[error("position 0 is not valid, positions start at 1")]
    ZeroIndex,

    /// A position outside of the map was used.
    #[error("position {index} out of range for a map with {len} entries")]
    IndexOutOfRange { index: isize, len: usize },

    /// A lookup was given zero or several discriminators.
    #[error("invalid lookup: {message}")]
    Argument { message: String },

    /// An assignment was given an empty list of values.
    #[error("no values supplied for {targets} target key(s)")]
    NoValues { targets: usize },

    /// A per-key operand names a key the map does not contain.
    #[error("key {key} is not present in the map")]
    MissingKey { key: String },
}

impl MapError {
    /// Returns true for the positional errors, [`ZeroIndex`](MapError::ZeroIndex) and
    /// [`IndexOutOfRange`](MapError::IndexOutOfRange).
    pub fn is_range_error(&self) -> bool {
        matches!(self, MapError::ZeroIndex | MapError::IndexOutOfRange { .. })
    }
}

/// Errors raised by [`Stack`](crate::Stack).
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum StackError {
    #[error("stack is empty")]
    Empty,

    #[error("element {element} not found in stack")]
    NotFound { element: String },

    #[error("operand has {found} elements but the stack has {expected}")]
    LengthMismatch { expected: usize, found: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_errors_are_classified() {
        assert!(MapError::ZeroIndex.is_range_error());
        assert!(MapError::IndexOutOfRange { index: 4, len: 3 }.is_range_error());
        assert!(!MapError::NoValues { targets: 1 }.is_range_error());
    }

    #[test]
    fn display_mentions_position_and_length() {
        let display = MapError::IndexOutOfRange { index: -5, len: 2 }.to_string();
        assert!(display.contains("-5"));
        assert!(display.contains("2 entries"));
    }

    #[test]
    fn stack_error_display() {
        let e = StackError::LengthMismatch {
            expected: 3,
            found: 1,
        };
        assert_eq!(
            e.to_string(),
            "operand has 1 elements but the stack has 3"
        );
    }
}
