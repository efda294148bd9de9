//! Number sequences addressed by 1-based term index, and intervals of an ordered line.
//!
//! ```rust
//! use utilkit_sequences::{Fibonacci, ProgressionBuilder, Sequence};
//!
//! let a = ProgressionBuilder::new().term(1, 1.0).term(2, 3.0).arithmetic().unwrap();
//! assert_eq!(a.terms(1, 4).unwrap(), vec![1.0, 3.0, 5.0, 7.0]);
//! assert_eq!(a.sum(1, 4).unwrap(), 16.0);
//!
//! assert_eq!(Fibonacci.terms(1, 7).unwrap(), vec![1, 1, 2, 3, 5, 8, 13]);
//! ```

mod error;
mod fibonacci;
mod interval;
mod progression;

pub use error::SequenceError;
pub use fibonacci::{Fibonacci, FibonacciIter};
pub use interval::Interval;
pub use progression::{ArithmeticProgression, GeometricProgression, ProgressionBuilder};

use std::iter::{Product, Sum};

/// A sequence of terms indexed from 1.
///
/// Ranges are closed: `terms(m, n)` returns the terms `m` to `n` inclusive, and nothing when
/// `m > n`.
pub trait Sequence {
    type Item;

    /// The `n`-th term.
    fn term(&self, n: i64) -> Result<Self::Item, SequenceError>;

    /// Terms `start` to `end`, inclusive.
    fn terms(&self, start: i64, end: i64) -> Result<Vec<Self::Item>, SequenceError> {
        (start..=end).map(|n| self.term(n)).collect()
    }

    /// Sum of terms `start` to `end`, inclusive.
    fn sum(&self, start: i64, end: i64) -> Result<Self::Item, SequenceError>
    where
        Self::Item: Sum,
    {
        Ok(self.terms(start, end)?.into_iter().sum())
    }

    /// Product of terms `start` to `end`, inclusive.
    fn product(&self, start: i64, end: i64) -> Result<Self::Item, SequenceError>
    where
        Self::Item: Product,
    {
        Ok(self.terms(start, end)?.into_iter().product())
    }
}
