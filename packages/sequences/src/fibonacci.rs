//! The Fibonacci sequence `1, 1, 2, 3, 5, 8, ...`.

use crate::{Sequence, SequenceError};

/// The Fibonacci sequence, with `F(1) = F(2) = 1`. Terms are `u128`; `F(186)` is the last one
/// that fits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fibonacci;

impl Fibonacci {
    /// Iterate the terms from `F(1)`, stopping at the last one that fits in a `u128`.
    pub fn iter(&self) -> FibonacciIter {
        FibonacciIter {
            current: Some(1),
            next: Some(1),
        }
    }

    fn first_terms(&self, start: i64, end: i64) -> Result<Vec<u128>, SequenceError> {
        if start > end {
            return Ok(Vec::new());
        }
        if start < 1 {
            return Err(SequenceError::InvalidTerm {
                index: start,
                reason: "term indices start at 1",
            });
        }

        let wanted = (end - start + 1) as usize;
        let terms: Vec<u128> = self.iter().skip((start - 1) as usize).take(wanted).collect();
        if terms.len() < wanted {
            return Err(SequenceError::Overflow {
                index: start + terms.len() as i64,
            });
        }
        Ok(terms)
    }

    /// Folds the terms of `start..=end` with `op`, naming the term that overflowed on failure.
    fn accumulate(
        &self,
        start: i64,
        end: i64,
        init: u128,
        op: fn(u128, u128) -> Option<u128>,
    ) -> Result<u128, SequenceError> {
        (start..)
            .zip(self.first_terms(start, end)?)
            .try_fold(init, |acc, (index, term)| {
                op(acc, term).ok_or(SequenceError::Overflow { index })
            })
    }
}

impl Sequence for Fibonacci {
    type Item = u128;

    fn term(&self, n: i64) -> Result<u128, SequenceError> {
        let mut terms = self.first_terms(n, n)?;
        terms.pop().ok_or(SequenceError::Overflow { index: n })
    }

    fn terms(&self, start: i64, end: i64) -> Result<Vec<u128>, SequenceError> {
        self.first_terms(start, end)
    }

    fn sum(&self, start: i64, end: i64) -> Result<u128, SequenceError> {
        self.accumulate(start, end, 0, u128::checked_add)
    }

    fn product(&self, start: i64, end: i64) -> Result<u128, SequenceError> {
        self.accumulate(start, end, 1, u128::checked_mul)
    }
}

impl IntoIterator for Fibonacci {
    type Item = u128;
    type IntoIter = FibonacciIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the Fibonacci terms that fit in a `u128`.
#[derive(Debug, Clone)]
pub struct FibonacciIter {
    current: Option<u128>,
    next: Option<u128>,
}

impl Iterator for FibonacciIter {
    type Item = u128;

    fn next(&mut self) -> Option<u128> {
        let current = self.current?;
        let following = self.next.and_then(|next| current.checked_add(next));
        self.current = self.next;
        self.next = following;
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_terms() {
        let expected = [1, 1, 2, 3, 5, 8, 13];
        assert!(Fibonacci.iter().zip(expected).all(|(term, e)| term == e));
    }

    #[test]
    fn iteration_stops_at_largest_term() {
        let terms: Vec<u128> = Fibonacci.iter().collect();
        assert_eq!(terms.len(), 186);
        assert_eq!(terms.last().copied(), Fibonacci.term(186).ok());
    }

    #[test]
    fn term_below_one_is_invalid() {
        assert!(matches!(
            Fibonacci.term(0),
            Err(SequenceError::InvalidTerm { index: 0, .. })
        ));
    }

    #[test]
    fn term_past_u128_overflows() {
        assert_eq!(Fibonacci.term(187), Err(SequenceError::Overflow { index: 187 }));
        assert_eq!(
            Fibonacci.terms(180, 190),
            Err(SequenceError::Overflow { index: 187 })
        );
    }

    #[test]
    fn product_overflow_names_the_overflowing_term() {
        assert_eq!(
            Fibonacci.product(1, 100),
            Err(SequenceError::Overflow { index: 21 })
        );
        assert_eq!(
            Fibonacci.product(5, 30),
            Err(SequenceError::Overflow { index: 21 })
        );
        assert!(Fibonacci.product(1, 20).is_ok());
    }

    #[test]
    fn sum_overflow_names_the_overflowing_term() {
        assert_eq!(
            Fibonacci.sum(1, 186),
            Err(SequenceError::Overflow { index: 185 })
        );
        assert_eq!(Fibonacci.sum(1, 184), Ok(Fibonacci.term(186).unwrap() - 1));
    }
}
