//! Arithmetic, equality and ordering for [`OrderedKeyMap`].
//!
//! Every operation is available as a named method returning a new map; the operators are thin
//! wrappers around them.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::ops::{Add, Div, Mul, Neg, Sub};

use indexmap::IndexMap;

use super::OrderedKeyMap;
use crate::MapError;

impl<K: Hash + Eq + Clone, V: Clone> OrderedKeyMap<K, V> {
    /// Returns a copy with `other`'s entries written over this map's. On a key collision the
    /// value from `other` wins; the key keeps its position.
    #[must_use]
    pub fn merge(&self, other: impl IntoIterator<Item = (K, V)>) -> Self {
        let mut merged = self.clone();
        merged.entries.extend(other);
        merged
    }

    /// Returns a copy without the entries that `other` contains with the same key AND value.
    /// A key present with a different value is kept.
    #[must_use]
    pub fn difference(&self, other: impl IntoIterator<Item = (K, V)>) -> Self
    where
        V: PartialEq,
    {
        let mut remaining = self.clone();
        for (key, value) in other {
            if remaining.entries.get(&key) == Some(&value) {
                remaining.entries.shift_remove(&key);
            }
        }
        remaining
    }

    /// Returns a copy with every value multiplied by `factor`.
    #[must_use]
    pub fn scale<S: Clone>(&self, factor: S) -> Self
    where
        V: Mul<S, Output = V>,
    {
        self.map_values(|_, value| value.clone() * factor.clone())
    }

    /// Returns a copy with every value divided by `divisor`.
    ///
    /// Division follows the value type: integer division by zero panics, float division by
    /// zero yields an infinity or NaN.
    #[must_use]
    pub fn divide<S: Clone>(&self, divisor: S) -> Self
    where
        V: Div<S, Output = V>,
    {
        self.map_values(|_, value| value.clone() / divisor.clone())
    }

    /// Returns a copy with the value under each key of `factors` multiplied by the factor under
    /// the same key. Keys absent from `factors` are left as they are.
    pub fn scale_each<'o, S>(
        &self,
        factors: impl IntoIterator<Item = (&'o K, &'o S)>,
    ) -> Result<Self, MapError>
    where
        K: Debug + 'o,
        S: Clone + 'o,
        V: Mul<S, Output = V>,
    {
        self.combine_each(factors, |value, factor| value * factor)
    }

    /// Returns a copy with the value under each key of `divisors` divided by the divisor under
    /// the same key. Keys absent from `divisors` are left as they are.
    pub fn divide_each<'o, S>(
        &self,
        divisors: impl IntoIterator<Item = (&'o K, &'o S)>,
    ) -> Result<Self, MapError>
    where
        K: Debug + 'o,
        S: Clone + 'o,
        V: Div<S, Output = V>,
    {
        self.combine_each(divisors, |value, divisor| value / divisor)
    }

    fn combine_each<'o, S>(
        &self,
        operands: impl IntoIterator<Item = (&'o K, &'o S)>,
        op: impl Fn(V, S) -> V,
    ) -> Result<Self, MapError>
    where
        K: Debug + 'o,
        S: Clone + 'o,
    {
        let mut combined = self.clone();
        for (key, operand) in operands {
            let slot = combined
                .entries
                .get_mut(key)
                .ok_or_else(|| MapError::MissingKey {
                    key: format!("{:?}", key),
                })?;
            *slot = op(slot.clone(), operand.clone());
        }
        Ok(combined)
    }
}

impl<K: Hash + Eq + Clone, V: Clone> Add for OrderedKeyMap<K, V> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.merge(rhs)
    }
}

impl<K: Hash + Eq + Clone, V: Clone + PartialEq> Sub for OrderedKeyMap<K, V> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.difference(rhs)
    }
}

impl<K: Hash + Eq + Clone, V: Clone + Mul<S, Output = V>, S: Clone> Mul<S> for OrderedKeyMap<K, V> {
    type Output = Self;

    fn mul(self, rhs: S) -> Self::Output {
        self.scale(rhs)
    }
}

impl<K: Hash + Eq + Clone, V: Clone + Div<S, Output = V>, S: Clone> Div<S> for OrderedKeyMap<K, V> {
    type Output = Self;

    fn div(self, rhs: S) -> Self::Output {
        self.divide(rhs)
    }
}

impl<K: Hash + Eq + Clone, V: Clone + Neg<Output = V>> Neg for OrderedKeyMap<K, V> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.map_values(|_, value| -value.clone())
    }
}

impl<K: Hash + Eq, V: PartialEq> PartialEq for OrderedKeyMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Hash + Eq, V: Eq> Eq for OrderedKeyMap<K, V> {}

impl<K: Hash + Eq, V: PartialEq> PartialEq<IndexMap<K, V>> for OrderedKeyMap<K, V> {
    fn eq(&self, other: &IndexMap<K, V>) -> bool {
        self.entries == *other
    }
}

impl<K: Hash + Eq, V: PartialEq> PartialEq<HashMap<K, V>> for OrderedKeyMap<K, V> {
    fn eq(&self, other: &HashMap<K, V>) -> bool {
        self.len() == other.len()
            && self
                .entries
                .iter()
                .all(|(key, value)| other.get(key) == Some(value))
    }
}

/// Maps are ordered by their number of entries only. Two maps of the same length compare as
/// `Equal` even when `==` says they differ.
impl<K: Hash + Eq, V: PartialEq> PartialOrd for OrderedKeyMap<K, V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.len_cmp(other))
    }
}
