//! Arithmetic and geometric progressions over `f64`.

use crate::{Sequence, SequenceError};

/// `a_n = a_1 + d (n - 1)`.
///
/// Any integer index is accepted, so `term(0)` is `a_1 - d`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArithmeticProgression {
    first: f64,
    difference: f64,
}

impl ArithmeticProgression {
    pub fn new(first: f64, difference: f64) -> Self {
        ArithmeticProgression { first, difference }
    }

    pub fn builder() -> ProgressionBuilder {
        ProgressionBuilder::new()
    }

    pub fn first(&self) -> f64 {
        self.first
    }

    /// The common difference `d`.
    pub fn difference(&self) -> f64 {
        self.difference
    }
}

impl Sequence for ArithmeticProgression {
    type Item = f64;

    fn term(&self, n: i64) -> Result<f64, SequenceError> {
        Ok(self.first + self.difference * (n as f64 - 1.0))
    }
}

/// `b_n = b_1 q^(n - 1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometricProgression {
    first: f64,
    ratio: f64,
}

impl GeometricProgression {
    pub fn new(first: f64, ratio: f64) -> Self {
        GeometricProgression { first, ratio }
    }

    pub fn builder() -> ProgressionBuilder {
        ProgressionBuilder::new()
    }

    pub fn first(&self) -> f64 {
        self.first
    }

    /// The common ratio `q`.
    pub fn ratio(&self) -> f64 {
        self.ratio
    }
}

impl Sequence for GeometricProgression {
    type Item = f64;

    fn term(&self, n: i64) -> Result<f64, SequenceError> {
        let factor = match n.checked_sub(1) {
            Some(exponent) => power(self.ratio, exponent),
            None => self.ratio.powf(n as f64 - 1.0),
        };
        Ok(self.first * factor)
    }
}

fn power(base: f64, exponent: i64) -> f64 {
    match i32::try_from(exponent) {
        Ok(exponent) => base.powi(exponent),
        Err(_) => base.powf(exponent as f64),
    }
}

/// The real `gap`-th root of `ratio`. Odd roots keep the sign; an even root of a negative
/// ratio is NaN.
fn real_root(ratio: f64, gap: i64) -> f64 {
    let exponent = 1.0 / gap as f64;
    if ratio < 0.0 && gap % 2 != 0 {
        -(-ratio).powf(exponent)
    } else {
        ratio.powf(exponent)
    }
}

/// What a builder was given, once validated.
enum Known {
    Step { step: f64, term: (i64, f64) },
    Terms((i64, f64), (i64, f64)),
}

/// Builds a progression from a step and one known term, or from two known terms.
///
/// ```rust
/// use utilkit_sequences::{GeometricProgression, ProgressionBuilder};
///
/// let b = ProgressionBuilder::new().term(2, 2.0).step(2.0).geometric().unwrap();
/// assert_eq!(b, GeometricProgression::new(1.0, 2.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProgressionBuilder {
    step: Option<f64>,
    terms: Vec<(i64, f64)>,
}

impl ProgressionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that term `n` (1-based) equals `value`.
    #[must_use]
    pub fn term(mut self, n: i64, value: f64) -> Self {
        self.terms.push((n, value));
        self
    }

    /// Record the common difference or ratio.
    #[must_use]
    pub fn step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }

    pub fn arithmetic(&self) -> Result<ArithmeticProgression, SequenceError> {
        let (first, difference) = match self.known()? {
            Known::Step {
                step,
                term: (m, am),
            } => (am - step * (m - 1) as f64, step),
            Known::Terms((m, am), (n, an)) => {
                let step = (an - am) / (n - m) as f64;
                (am - step * (m - 1) as f64, step)
            }
        };
        finite(first, difference)?;
        Ok(ArithmeticProgression::new(first, difference))
    }

    pub fn geometric(&self) -> Result<GeometricProgression, SequenceError> {
        let (first, ratio) = match self.known()? {
            Known::Step {
                step,
                term: (m, bm),
            } => (bm / power(step, m - 1), step),
            Known::Terms((m, bm), (n, bn)) => {
                let ratio = real_root(bn / bm, n - m);
                (bm / power(ratio, m - 1), ratio)
            }
        };
        finite(first, ratio)?;
        Ok(GeometricProgression::new(first, ratio))
    }

    fn known(&self) -> Result<Known, SequenceError> {
        for (i, &(n, _)) in self.terms.iter().enumerate() {
            if n < 1 {
                return Err(SequenceError::InvalidTerm {
                    index: n,
                    reason: "term indices start at 1",
                });
            }
            if self.terms[..i].iter().any(|&(m, _)| m == n) {
                return Err(SequenceError::InvalidTerm {
                    index: n,
                    reason: "term given more than once",
                });
            }
        }

        match (self.step, self.terms.as_slice()) {
            (Some(step), &[term]) => Ok(Known::Step { step, term }),
            (None, &[a, b]) => Ok(Known::Terms(a, b)),
            (Some(_), []) | (None, [] | [_]) => Err(SequenceError::Underdetermined),
            _ => Err(SequenceError::Overdetermined),
        }
    }
}

fn finite(first: f64, step: f64) -> Result<(), SequenceError> {
    if first.is_finite() && step.is_finite() {
        Ok(())
    } else {
        Err(SequenceError::Degenerate)
    }
}
