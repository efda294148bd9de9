/// Errors raised when building or evaluating a sequence.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SequenceError {
    /// Not enough information to determine a progression.
    #[error("a progression needs a step and one term, or two terms")]
    Underdetermined,

    /// More information than a progression can be built from without ambiguity.
    #[error("a progression takes a step and one term, or two terms, not both")]
    Overdetermined,

    /// A term index is below 1 or given twice.
    #[error("invalid term index {index}: {reason}")]
    InvalidTerm { index: i64, reason: &'static str },

    /// The given terms do not determine a finite progression, e.g. a geometric progression
    /// through a zero term.
    #[error("the given terms do not determine a finite progression")]
    Degenerate,

    /// A term does not fit the item type.
    #[error("term {index} overflows")]
    Overflow { index: i64 },
}
