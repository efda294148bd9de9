//! Intervals of an ordered line with closed, open or unbounded ends.

use std::fmt::{self, Display, Formatter};
use std::ops::{Bound, Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive};

/// An interval whose ends are each included, excluded or unbounded (at infinity).
///
/// Implements [`RangeBounds`](std::ops::RangeBounds), so it can select from ordered
/// collections directly.
///
/// ```rust
/// use utilkit_sequences::Interval;
///
/// let i = Interval::closed_open(1, 5);
/// assert!(i.contains(&1));
/// assert!(!i.contains(&5));
/// assert_eq!(i.to_string(), "u[1; 5)");
/// assert_eq!(Interval::greater_than(0).to_string(), "u(0; +∞)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval<T> {
    start: Bound<T>,
    end: Bound<T>,
}

impl<T> Interval<T> {
    pub fn new(start: Bound<T>, end: Bound<T>) -> Self {
        Interval { start, end }
    }

    /// `[start; end]`
    pub fn closed(start: T, end: T) -> Self {
        Interval::new(Bound::Included(start), Bound::Included(end))
    }

    /// `(start; end)`
    pub fn open(start: T, end: T) -> Self {
        Interval::new(Bound::Excluded(start), Bound::Excluded(end))
    }

    /// `[start; end)`
    pub fn closed_open(start: T, end: T) -> Self {
        Interval::new(Bound::Included(start), Bound::Excluded(end))
    }

    /// `(start; end]`
    pub fn open_closed(start: T, end: T) -> Self {
        Interval::new(Bound::Excluded(start), Bound::Included(end))
    }

    /// `(start; +∞)`
    pub fn greater_than(start: T) -> Self {
        Interval::new(Bound::Excluded(start), Bound::Unbounded)
    }

    /// `[start; +∞)`
    pub fn at_least(start: T) -> Self {
        Interval::new(Bound::Included(start), Bound::Unbounded)
    }

    /// `(-∞; end)`
    pub fn less_than(end: T) -> Self {
        Interval::new(Bound::Unbounded, Bound::Excluded(end))
    }

    /// `(-∞; end]`
    pub fn at_most(end: T) -> Self {
        Interval::new(Bound::Unbounded, Bound::Included(end))
    }

    /// `(-∞; +∞)`
    pub fn unbounded() -> Self {
        Interval::new(Bound::Unbounded, Bound::Unbounded)
    }

    pub fn start(&self) -> Bound<&T> {
        self.start.as_ref()
    }

    pub fn end(&self) -> Bound<&T> {
        self.end.as_ref()
    }

    pub fn set_start(&mut self, start: Bound<T>) {
        self.start = start;
    }

    pub fn set_end(&mut self, end: Bound<T>) {
        self.end = end;
    }
}

impl<T: PartialOrd> Interval<T> {
    /// Returns true if `value` lies within both ends. Values that do not compare (NaN) never
    /// do.
    pub fn contains(&self, value: &T) -> bool {
        let above_start = match &self.start {
            Bound::Included(start) => value >= start,
            Bound::Excluded(start) => value > start,
            Bound::Unbounded => true,
        };
        let below_end = match &self.end {
            Bound::Included(end) => value <= end,
            Bound::Excluded(end) => value < end,
            Bound::Unbounded => true,
        };
        above_start && below_end
    }

    /// Returns true if the ends leave no room between them, e.g. `[3; 1]` or `(2; 2]`.
    ///
    /// Only the ends are compared, so `(1; 2)` over integers is not reported as empty.
    pub fn is_empty(&self) -> bool {
        match (&self.start, &self.end) {
            (Bound::Included(start), Bound::Included(end)) => start > end,
            (Bound::Included(start), Bound::Excluded(end))
            | (Bound::Excluded(start), Bound::Included(end))
            | (Bound::Excluded(start), Bound::Excluded(end)) => start >= end,
            _ => false,
        }
    }
}

impl<T> std::ops::RangeBounds<T> for Interval<T> {
    fn start_bound(&self) -> Bound<&T> {
        self.start.as_ref()
    }

    fn end_bound(&self) -> Bound<&T> {
        self.end.as_ref()
    }
}

impl<T> From<Range<T>> for Interval<T> {
    fn from(range: Range<T>) -> Self {
        Interval::closed_open(range.start, range.end)
    }
}

impl<T> From<RangeInclusive<T>> for Interval<T> {
    fn from(range: RangeInclusive<T>) -> Self {
        let (start, end) = range.into_inner();
        Interval::closed(start, end)
    }
}

impl<T> From<RangeFrom<T>> for Interval<T> {
    fn from(range: RangeFrom<T>) -> Self {
        Interval::at_least(range.start)
    }
}

impl<T> From<RangeTo<T>> for Interval<T> {
    fn from(range: RangeTo<T>) -> Self {
        Interval::less_than(range.end)
    }
}

impl<T> From<RangeToInclusive<T>> for Interval<T> {
    fn from(range: RangeToInclusive<T>) -> Self {
        Interval::at_most(range.end)
    }
}

impl<T> From<RangeFull> for Interval<T> {
    fn from(_: RangeFull) -> Self {
        Interval::unbounded()
    }
}

/// Renders as `u[1; 5)`, with `-∞` and `+∞` for unbounded ends.
impl<T: Display> Display for Interval<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.start {
            Bound::Included(start) => write!(f, "u[{}; ", start)?,
            Bound::Excluded(start) => write!(f, "u({}; ", start)?,
            Bound::Unbounded => write!(f, "u(-∞; ")?,
        }
        match &self.end {
            Bound::Included(end) => write!(f, "{}]", end),
            Bound::Excluded(end) => write!(f, "{})", end),
            Bound::Unbounded => write!(f, "+∞)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_ends_include_their_values() {
        let i = Interval::closed(1, 5);
        assert!(i.contains(&1));
        assert!(i.contains(&5));
        assert!(!i.contains(&0));
        assert!(!i.contains(&6));
    }

    #[test]
    fn open_ends_exclude_their_values() {
        let i = Interval::open(1.0, 5.0);
        assert!(!i.contains(&1.0));
        assert!(i.contains(&1.5));
        assert!(!i.contains(&5.0));
    }

    #[test]
    fn unbounded_ends() {
        assert!(Interval::greater_than(0).contains(&i64::MAX));
        assert!(!Interval::greater_than(0).contains(&0));
        assert!(Interval::at_most(0).contains(&i64::MIN));
        assert!(Interval::<f64>::unbounded().contains(&f64::INFINITY));
        assert!(!Interval::<f64>::unbounded().contains(&f64::NAN));
    }

    #[test]
    fn emptiness_from_the_ends() {
        assert!(Interval::closed(3, 1).is_empty());
        assert!(Interval::open_closed(2, 2).is_empty());
        assert!(!Interval::closed(2, 2).is_empty());
        assert!(!Interval::open(1, 2).is_empty());
        assert!(!Interval::<i32>::unbounded().is_empty());
    }

    #[test]
    fn setters_change_inclusion() {
        let mut i = Interval::open(1, 5);
        i.set_start(Bound::Included(1));
        assert!(i.contains(&1));
        i.set_end(Bound::Unbounded);
        assert!(i.contains(&100));
        assert_eq!(i.start(), Bound::Included(&1));
        assert_eq!(i.end(), Bound::Unbounded);
    }

    #[test]
    fn display() {
        assert_eq!(Interval::closed(1, 2).to_string(), "u[1; 2]");
        assert_eq!(Interval::open_closed(1, 2).to_string(), "u(1; 2]");
        assert_eq!(Interval::at_most(2).to_string(), "u(-∞; 2]");
        assert_eq!(Interval::<i32>::unbounded().to_string(), "u(-∞; +∞)");
    }

    #[test]
    fn std_ranges_convert() {
        assert_eq!(Interval::from(1..3), Interval::closed_open(1, 3));
        assert_eq!(Interval::from(1..=3), Interval::closed(1, 3));
        assert_eq!(Interval::from(1..), Interval::at_least(1));
        assert_eq!(Interval::from(..3), Interval::less_than(3));
        assert_eq!(Interval::from(..=3), Interval::at_most(3));
        assert_eq!(Interval::<i32>::from(..), Interval::unbounded());
    }
}
