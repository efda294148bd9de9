//! A sorted set with the operations of set algebra.

use std::collections::btree_set::{self, BTreeSet};
use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{Add, BitAnd, BitAndAssign, BitOr, BitOrAssign, Div, Mul, Sub, SubAssign};

/// A set whose elements iterate in ascending order.
///
/// Union is available as `|` and `+`, difference as `-` and `/`, intersection as `&` and `*`,
/// all on references. Complement and implication are taken against an explicit universal
/// set rather than a shared global one.
///
/// ```rust
/// use utilkit_collections::SortedSet;
///
/// let a: SortedSet<i32> = [3, 1, 2].into_iter().collect();
/// let b: SortedSet<i32> = [2, 4].into_iter().collect();
///
/// assert_eq!((&a | &b).to_string(), "u{1, 2, 3, 4}");
/// assert_eq!((&a & &b).to_string(), "u{2}");
/// assert_eq!((&a - &b).to_string(), "u{1, 3}");
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SortedSet<T> {
    elements: BTreeSet<T>,
}

impl<T: Ord> SortedSet<T> {
    pub fn new() -> Self {
        SortedSet {
            elements: BTreeSet::new(),
        }
    }

    /// Elements in ascending order.
    pub fn iter(&self) -> btree_set::Iter<'_, T> {
        self.elements.iter()
    }

    /// The underlying set.
    pub fn elements(&self) -> &BTreeSet<T> {
        &self.elements
    }

    /// Replaces every element. Duplicates collapse.
    pub fn set_elements(&mut self, elements: impl IntoIterator<Item = T>) {
        self.elements = elements.into_iter().collect();
    }

    pub fn into_elements(self) -> BTreeSet<T> {
        self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn contains(&self, element: &T) -> bool {
        self.elements.contains(element)
    }

    /// Adds `element`, returning false if it was already present.
    pub fn insert(&mut self, element: T) -> bool {
        self.elements.insert(element)
    }

    /// Removes `element`, returning false if it was absent.
    pub fn remove(&mut self, element: &T) -> bool {
        self.elements.remove(element)
    }

    pub fn is_subset(&self, other: &Self) -> bool {
        self.elements.is_subset(&other.elements)
    }
}

impl<T: Ord + Clone> SortedSet<T> {
    /// Elements in `self`, in `other`, or in both.
    #[must_use]
    pub fn union(&self, other: impl IntoIterator<Item = T>) -> Self {
        let mut result = self.clone();
        result.elements.extend(other);
        result
    }

    /// Elements of `self` that are not in `other`.
    #[must_use]
    pub fn difference(&self, other: impl IntoIterator<Item = T>) -> Self {
        let mut result = self.clone();
        for element in other {
            result.elements.remove(&element);
        }
        result
    }

    /// Elements in both `self` and `other`.
    #[must_use]
    pub fn intersection(&self, other: impl IntoIterator<Item = T>) -> Self {
        other
            .into_iter()
            .filter(|element| self.elements.contains(element))
            .collect()
    }

    /// Elements of `universe` that are not in `self`.
    #[must_use]
    pub fn complement(&self, universe: &Self) -> Self {
        universe - self
    }

    /// The implication `self -> other`: every element of `universe` outside `self`, together
    /// with `other`.
    #[must_use]
    pub fn implicate(&self, other: impl IntoIterator<Item = T>, universe: &Self) -> Self {
        self.complement(universe).union(other)
    }
}

impl<T: Ord> From<Vec<T>> for SortedSet<T> {
    fn from(elements: Vec<T>) -> Self {
        elements.into_iter().collect()
    }
}

impl<T: Ord> From<BTreeSet<T>> for SortedSet<T> {
    fn from(elements: BTreeSet<T>) -> Self {
        SortedSet { elements }
    }
}

impl<T: Ord> FromIterator<T> for SortedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        SortedSet {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T: Ord> Extend<T> for SortedSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl<T> IntoIterator for SortedSet<T> {
    type Item = T;
    type IntoIter = btree_set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a SortedSet<T> {
    type Item = &'a T;
    type IntoIter = btree_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T: Ord + Clone> BitOr for &SortedSet<T> {
    type Output = SortedSet<T>;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.elements.union(&rhs.elements).cloned().collect()
    }
}

impl<T: Ord + Clone> Add for &SortedSet<T> {
    type Output = SortedSet<T>;

    fn add(self, rhs: Self) -> Self::Output {
        self.bitor(rhs)
    }
}

impl<T: Ord> BitOrAssign for SortedSet<T> {
    fn bitor_assign(&mut self, rhs: Self) {
        self.elements.extend(rhs);
    }
}

impl<T: Ord + Clone> Sub for &SortedSet<T> {
    type Output = SortedSet<T>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.elements.difference(&rhs.elements).cloned().collect()
    }
}

impl<T: Ord + Clone> Div for &SortedSet<T> {
    type Output = SortedSet<T>;

    fn div(self, rhs: Self) -> Self::Output {
        self.sub(rhs)
    }
}

impl<T: Ord> SubAssign for SortedSet<T> {
    fn sub_assign(&mut self, rhs: Self) {
        for element in rhs {
            self.elements.remove(&element);
        }
    }
}

impl<T: Ord + Clone> BitAnd for &SortedSet<T> {
    type Output = SortedSet<T>;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.elements.intersection(&rhs.elements).cloned().collect()
    }
}

impl<T: Ord + Clone> Mul for &SortedSet<T> {
    type Output = SortedSet<T>;

    fn mul(self, rhs: Self) -> Self::Output {
        self.bitand(rhs)
    }
}

impl<T: Ord> BitAndAssign for SortedSet<T> {
    fn bitand_assign(&mut self, rhs: Self) {
        self.elements.retain(|element| rhs.elements.contains(element));
    }
}

impl<T: Debug> Debug for SortedSet<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "u")?;
        f.debug_set().entries(&self.elements).finish()
    }
}

/// Renders as `u{1, 2, 3}`.
impl<T: Display> Display for SortedSet<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "u{{")?;
        for (i, element) in self.elements.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", element)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(elements: &[i32]) -> SortedSet<i32> {
        elements.iter().copied().collect()
    }

    #[test]
    fn elements_are_sorted_and_unique() {
        let s = set(&[3, 1, 3, 2]);
        assert_eq!(s.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(s.len(), 3);
    }

    #[test]
    fn operator_aliases_agree() {
        let a = set(&[1, 2, 3]);
        let b = set(&[2, 3, 4]);
        assert_eq!(&a | &b, &a + &b);
        assert_eq!(&a - &b, &a / &b);
        assert_eq!(&a & &b, &a * &b);
    }

    #[test]
    fn methods_accept_plain_elements() {
        let a = set(&[1, 2]);
        assert_eq!(a.union([5]), set(&[1, 2, 5]));
        assert_eq!(a.difference([2, 9]), set(&[1]));
        assert_eq!(a.intersection(vec![2, 9]), set(&[2]));
    }

    #[test]
    fn assign_operators() {
        let mut a = set(&[1, 2, 3]);
        a |= set(&[4]);
        assert_eq!(a, set(&[1, 2, 3, 4]));
        a -= set(&[1]);
        assert_eq!(a, set(&[2, 3, 4]));
        a &= set(&[3, 4, 5]);
        assert_eq!(a, set(&[3, 4]));
    }

    #[test]
    fn display_and_debug() {
        assert_eq!(set(&[2, 1]).to_string(), "u{1, 2}");
        assert_eq!(format!("{:?}", set(&[2, 1])), "u{1, 2}");
        assert_eq!(SortedSet::<i32>::new().to_string(), "u{}");
    }
}
