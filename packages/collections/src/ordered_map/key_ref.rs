//! Key references and their resolution against an ordered map.

use std::ops::{RangeFrom, RangeFull, RangeInclusive, RangeToInclusive};

use crate::MapError;

/// A reference to one or more entries of an [`OrderedKeyMap`](super::OrderedKeyMap).
///
/// Positions are 1-based. Ranges are closed: `Range { start: Some(1), end: Some(2) }` covers the
/// first and the second entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyRef<K> {
    /// A key, looked up by hash.
    Literal(K),

    /// A 1-based position. Negative values count back from the end, `-1` being the last entry.
    Index(isize),

    /// A closed range of positions. A missing bound means "from the first" / "to the last".
    /// Negative bounds count back from the end and out-of-range bounds are clamped.
    Range {
        start: Option<isize>,
        end: Option<isize>,
    },
}

impl<K> KeyRef<K> {
    /// The closed range `start..=end`.
    pub fn range(start: isize, end: isize) -> Self {
        KeyRef::Range {
            start: Some(start),
            end: Some(end),
        }
    }

    /// Every entry of the map.
    pub fn all() -> Self {
        KeyRef::Range {
            start: None,
            end: None,
        }
    }
}

impl<K> From<RangeInclusive<isize>> for KeyRef<K> {
    fn from(range: RangeInclusive<isize>) -> Self {
        let (start, end) = range.into_inner();
        KeyRef::range(start, end)
    }
}

impl<K> From<RangeFrom<isize>> for KeyRef<K> {
    fn from(range: RangeFrom<isize>) -> Self {
        KeyRef::Range {
            start: Some(range.start),
            end: None,
        }
    }
}

impl<K> From<RangeToInclusive<isize>> for KeyRef<K> {
    fn from(range: RangeToInclusive<isize>) -> Self {
        KeyRef::Range {
            start: None,
            end: Some(range.end),
        }
    }
}

impl<K> From<RangeFull> for KeyRef<K> {
    fn from(_: RangeFull) -> Self {
        KeyRef::all()
    }
}

/// Converts a 1-based (or negative, from the end) position to a 0-based offset.
pub(crate) fn offset_of(index: isize, len: usize) -> Result<usize, MapError> {
    if index == 0 {
        return Err(MapError::ZeroIndex);
    }

    let offset = if index > 0 {
        index - 1
    } else {
        len as isize + index
    };

    if offset < 0 || offset as usize >= len {
        return Err(MapError::IndexOutOfRange { index, len });
    }
    Ok(offset as usize)
}

/// Converts a closed range of positions to the 0-based offsets it covers, in order.
///
/// Bounds are resolved against `len + 1` the way slice bounds are, then a start of `0` becomes
/// `1` and an end of `len + 1` becomes `len`.
pub(crate) fn offsets_of(start: Option<isize>, end: Option<isize>, len: usize) -> Vec<usize> {
    let bound = len as isize + 1;
    let clamp = |value: isize| {
        if value < 0 {
            (value + bound).max(0)
        } else {
            value.min(bound)
        }
    };

    let mut first = start.map_or(0, clamp);
    let mut last = end.map_or(bound, clamp);
    if first == 0 {
        first = 1;
    }
    if last == bound {
        last = len as isize;
    }

    (first..=last).map(|position| (position - 1) as usize).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_positions_are_one_based() {
        assert_eq!(offset_of(1, 3), Ok(0));
        assert_eq!(offset_of(3, 3), Ok(2));
    }

    #[test]
    fn zero_is_rejected() {
        assert_eq!(offset_of(0, 3), Err(MapError::ZeroIndex));
    }

    #[test]
    fn negative_positions_count_from_the_end() {
        assert_eq!(offset_of(-1, 3), Ok(2));
        assert_eq!(offset_of(-3, 3), Ok(0));
        assert_eq!(
            offset_of(-4, 3),
            Err(MapError::IndexOutOfRange { index: -4, len: 3 })
        );
    }

    #[test]
    fn past_the_end_is_rejected() {
        assert_eq!(
            offset_of(4, 3),
            Err(MapError::IndexOutOfRange { index: 4, len: 3 })
        );
        assert!(offset_of(1, 0).is_err());
    }

    #[test]
    fn ranges_are_closed() {
        assert_eq!(offsets_of(Some(1), Some(2), 2), vec![0, 1]);
        assert_eq!(offsets_of(Some(2), Some(3), 4), vec![1, 2]);
        assert_eq!(offsets_of(Some(2), Some(2), 4), vec![1]);
    }

    #[test]
    fn open_bounds_cover_everything() {
        assert_eq!(offsets_of(None, None, 3), vec![0, 1, 2]);
        assert_eq!(offsets_of(Some(2), None, 3), vec![1, 2]);
        assert_eq!(offsets_of(None, Some(2), 3), vec![0, 1]);
    }

    #[test]
    fn negative_bounds_resolve_against_len_plus_one() {
        assert_eq!(offsets_of(Some(-2), None, 2), vec![0, 1]);
        assert_eq!(offsets_of(Some(1), Some(-1), 3), vec![0, 1, 2]);
        assert_eq!(offsets_of(Some(-100), Some(1), 3), vec![0]);
    }

    #[test]
    fn out_of_range_bounds_are_clamped() {
        assert_eq!(offsets_of(Some(0), Some(10), 2), vec![0, 1]);
        assert!(offsets_of(Some(5), Some(10), 2).is_empty());
    }

    #[test]
    fn inverted_ranges_are_empty() {
        assert!(offsets_of(Some(3), Some(1), 4).is_empty());
        assert!(offsets_of(None, None, 0).is_empty());
    }

    #[test]
    fn std_ranges_convert() {
        assert_eq!(KeyRef::<&str>::from(1isize..=2), KeyRef::range(1, 2));
        assert_eq!(
            KeyRef::<&str>::from(-2isize..),
            KeyRef::Range {
                start: Some(-2),
                end: None
            }
        );
        assert_eq!(
            KeyRef::<&str>::from(..=3isize),
            KeyRef::Range {
                start: None,
                end: Some(3)
            }
        );
        assert_eq!(KeyRef::<&str>::from(..), KeyRef::all());
    }
}
