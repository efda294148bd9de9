use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::Hash;

use indexmap::IndexMap;

use super::key_ref::{offset_of, offsets_of, KeyRef};
use crate::MapError;

/// An insertion-ordered map that can also be addressed by 1-based position.
///
/// Besides plain key access, entries can be read, written and removed through a [`KeyRef`]:
/// a key, a position, or a closed range of positions. Reads of a missing key return the map's
/// default value (if any) instead of failing.
///
/// Equality compares the entries only, ignoring order and the default. Ordering (`<`, `>`,
/// ...) compares the number of entries only; see [`len_cmp`](OrderedKeyMap::len_cmp).
///
/// # Time Complexity
///
/// | Method | Complexity |
/// |-|-|
/// | `get_item` (key or position) | `O(1)` |
/// | `get_item` (range of `m` positions) | `O(m)` |
/// | `remove_item` | `O(n)` |
/// | `get` (by value) | `O(n)` |
/// | `sort` | `O(n log n)` |
#[derive(Clone)]
pub struct OrderedKeyMap<K, V> {
    pub(crate) entries: IndexMap<K, V>,
    pub(crate) default: Option<V>,
}

/// The result of [`OrderedKeyMap::get_item`].
///
/// A missing key resolves to the map's default, which is `None` when no default is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<'a, V> {
    /// The reference resolved to exactly one key.
    One(Option<&'a V>),
    /// The reference resolved to zero or several keys, in map order.
    Many(Vec<Option<&'a V>>),
}

impl<'a, V> Lookup<'a, V> {
    /// Returns every resolved value in order, whatever the number of keys.
    pub fn into_vec(self) -> Vec<Option<&'a V>> {
        match self {
            Lookup::One(value) => vec![value],
            Lookup::Many(values) => values,
        }
    }
}

/// What [`OrderedKeyMap::get`] looks for. Exactly one discriminator per lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector<K, V> {
    /// Value stored under a key.
    Key(K),
    /// Value stored at a 1-based position.
    Index(usize),
    /// First key whose value equals the given one.
    Value(V),
}

impl<K, V> Selector<K, V> {
    /// Builds a selector from optional discriminators, as collected from loosely typed input.
    ///
    /// Exactly one of `key`, `index` and `value` must be given.
    pub fn from_parts(
        key: Option<K>,
        index: Option<usize>,
        value: Option<V>,
    ) -> Result<Self, MapError> {
        match (key, index, value) {
            (Some(key), None, None) => Ok(Selector::Key(key)),
            (None, Some(index), None) => Ok(Selector::Index(index)),
            (None, None, Some(value)) => Ok(Selector::Value(value)),
            (None, None, None) => Err(MapError::Argument {
                message: "none of key, index and value was given; give exactly one".to_string(),
            }),
            (key, index, value) => {
                let given: Vec<&str> = [
                    key.is_some().then_some("key"),
                    index.is_some().then_some("index"),
                    value.is_some().then_some("value"),
                ]
                .into_iter()
                .flatten()
                .collect();
                let quantifier = if given.len() == 3 { "all " } else { "" };
                Err(MapError::Argument {
                    message: format!(
                        "{} were {}given; give exactly one",
                        given.join(", "),
                        quantifier
                    ),
                })
            }
        }
    }
}

/// A hit returned by [`OrderedKeyMap::get`]: a value for key and index lookups, a key for value
/// lookups, or whichever default applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Found<'a, K, V> {
    Value(&'a V),
    Key(&'a K),
}

/// Resolved targets of a [`KeyRef`].
enum Targets<'k, K> {
    Key(&'k K),
    Offsets(Vec<usize>),
}

impl<K, V> OrderedKeyMap<K, V> {
    /// Creates an empty map with no default.
    pub fn new() -> Self {
        OrderedKeyMap {
            entries: IndexMap::new(),
            default: None,
        }
    }

    /// Creates an empty map whose missing-key reads return `default`.
    pub fn with_default(default: V) -> Self {
        OrderedKeyMap {
            entries: IndexMap::new(),
            default: Some(default),
        }
    }

    /// Sets the default, builder style.
    #[must_use]
    pub fn default_value(mut self, default: V) -> Self {
        self.default = Some(default);
        self
    }

    /// The value returned for missing keys.
    pub fn default(&self) -> Option<&V> {
        self.default.as_ref()
    }

    pub fn set_default(&mut self, default: Option<V>) {
        self.default = default;
    }

    /// The underlying map.
    pub fn dictionary(&self) -> &IndexMap<K, V> {
        &self.entries
    }

    pub fn dictionary_mut(&mut self) -> &mut IndexMap<K, V> {
        &mut self.entries
    }

    /// Replaces every entry, keeping the default.
    pub fn set_dictionary(&mut self, entries: impl Into<IndexMap<K, V>>) {
        self.entries = entries.into();
    }

    pub fn into_dictionary(self) -> IndexMap<K, V> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, K, V> {
        self.entries.keys()
    }

    /// Values in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, K, V> {
        self.entries.values()
    }

    /// Key-value pairs in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, K, V> {
        self.entries.iter()
    }

    /// Compares the number of entries. This is the comparison behind `PartialOrd`.
    pub fn len_cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.len().cmp(&other.len())
    }
}

impl<K: Hash + Eq, V> OrderedKeyMap<K, V> {
    /// Inserts an entry. An existing key keeps its position and gets the new value.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.entries.insert(key, value)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.contains_key(key)
    }

    /// Returns true if `key` is present and holds `value`.
    pub fn contains_entry<Q>(&self, key: &Q, value: &V) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: PartialEq,
    {
        self.entries.get(key).is_some_and(|found| found == value)
    }

    /// Replaces the keys, pairing them with the current values in order. Extra keys or values
    /// are dropped.
    pub fn set_keys(&mut self, keys: impl IntoIterator<Item = K>) {
        let values = std::mem::take(&mut self.entries).into_values();
        self.entries = keys.into_iter().zip(values).collect();
    }

    /// Replaces the values, pairing them with the current keys in order. Extra keys or values
    /// are dropped.
    pub fn set_values(&mut self, values: impl IntoIterator<Item = V>) {
        let keys = std::mem::take(&mut self.entries).into_keys();
        self.entries = keys.zip(values).collect();
    }

    /// Replaces every entry with `items`, keeping the default.
    pub fn replace_items(&mut self, items: impl IntoIterator<Item = (K, V)>) {
        self.entries = items.into_iter().collect();
    }

    /// Resolves a key reference to the keys it covers, in map order.
    ///
    /// A literal key resolves to itself whether or not the map contains it.
    pub fn resolve<'a>(&'a self, key: &'a KeyRef<K>) -> Result<Vec<&'a K>, MapError> {
        match self.targets(key)? {
            Targets::Key(key) => Ok(vec![key]),
            Targets::Offsets(offsets) => Ok(offsets
                .into_iter()
                .filter_map(|offset| self.entries.get_index(offset).map(|(key, _)| key))
                .collect()),
        }
    }

    fn targets<'k>(&self, key: &'k KeyRef<K>) -> Result<Targets<'k, K>, MapError> {
        match key {
            KeyRef::Literal(key) => Ok(Targets::Key(key)),
            KeyRef::Index(index) => Ok(Targets::Offsets(vec![offset_of(*index, self.len())?])),
            KeyRef::Range { start, end } => {
                Ok(Targets::Offsets(offsets_of(*start, *end, self.len())))
            }
        }
    }

    /// Reads the entries covered by `key`, falling back to the default for missing keys.
    pub fn get_item(&self, key: &KeyRef<K>) -> Result<Lookup<'_, V>, MapError> {
        let mut values: Vec<Option<&V>> = match self.targets(key)? {
            Targets::Key(key) => vec![self.entries.get(key).or(self.default.as_ref())],
            Targets::Offsets(offsets) => offsets
                .into_iter()
                .map(|offset| self.entries.get_index(offset).map(|(_, value)| value))
                .collect(),
        };

        if values.len() == 1 {
            Ok(Lookup::One(values.remove(0)))
        } else {
            Ok(Lookup::Many(values))
        }
    }

    /// Assigns `value` to every entry covered by `key`. A new literal key is appended.
    pub fn set_item(&mut self, key: KeyRef<K>, value: V) -> Result<(), MapError>
    where
        V: Clone,
    {
        self.set_items(key, [value])
    }

    /// Assigns `values` to the entries covered by `key`, in order.
    ///
    /// If there are fewer values than keys, the last value fills the remaining keys; extra
    /// values are ignored.
    pub fn set_items(
        &mut self,
        key: KeyRef<K>,
        values: impl IntoIterator<Item = V>,
    ) -> Result<(), MapError>
    where
        V: Clone,
    {
        let values: Vec<V> = values.into_iter().collect();

        let offsets = match key {
            KeyRef::Literal(key) => {
                let value = values
                    .into_iter()
                    .next()
                    .ok_or(MapError::NoValues { targets: 1 })?;
                self.entries.insert(key, value);
                return Ok(());
            }
            KeyRef::Index(index) => vec![offset_of(index, self.len())?],
            KeyRef::Range { start, end } => offsets_of(start, end, self.len()),
        };
        if offsets.is_empty() {
            return Ok(());
        }

        let Some(last) = values.last() else {
            return Err(MapError::NoValues {
                targets: offsets.len(),
            });
        };

        for (i, offset) in offsets.into_iter().enumerate() {
            let value = values.get(i).unwrap_or(last).clone();
            if let Some((_, slot)) = self.entries.get_index_mut(offset) {
                *slot = value;
            }
        }
        Ok(())
    }

    /// Removes the entries covered by `key` and returns their values in map order. The order
    /// of the remaining entries is preserved.
    pub fn remove_item(&mut self, key: &KeyRef<K>) -> Result<Vec<V>, MapError> {
        match self.targets(key)? {
            Targets::Key(key) => Ok(self.entries.shift_remove(key).into_iter().collect()),
            Targets::Offsets(offsets) => {
                // Back to front so earlier offsets stay valid.
                let mut removed: Vec<V> = offsets
                    .into_iter()
                    .rev()
                    .filter_map(|offset| self.entries.shift_remove_index(offset))
                    .map(|(_, value)| value)
                    .collect();
                removed.reverse();
                Ok(removed)
            }
        }
    }

    /// Looks up a value by key or position, or a key by value, falling back to the map's
    /// default.
    pub fn get(&self, selector: &Selector<K, V>) -> Result<Option<Found<'_, K, V>>, MapError>
    where
        V: PartialEq,
    {
        self.get_or(selector, self.default.as_ref().map(Found::Value))
    }

    /// Like [`get`](OrderedKeyMap::get), with `default` overriding the map's default for this
    /// call only.
    pub fn get_or<'a>(
        &'a self,
        selector: &Selector<K, V>,
        default: Option<Found<'a, K, V>>,
    ) -> Result<Option<Found<'a, K, V>>, MapError>
    where
        V: PartialEq,
    {
        let found = match selector {
            Selector::Key(key) => self.entries.get(key).map(Found::Value),
            Selector::Index(0) => return Err(MapError::ZeroIndex),
            Selector::Index(index) => {
                let (_, value) = self.entries.get_index(index - 1).ok_or(
                    MapError::IndexOutOfRange {
                        index: *index as isize,
                        len: self.len(),
                    },
                )?;
                Some(Found::Value(value))
            }
            Selector::Value(value) => self
                .entries
                .iter()
                .find(|(_, candidate)| *candidate == value)
                .map(|(key, _)| Found::Key(key)),
        };
        Ok(found.or(default))
    }

    /// Returns a new map with `f(key, value)` as every value. The default is kept.
    pub fn map_values<F>(&self, mut f: F) -> Self
    where
        F: FnMut(&K, &V) -> V,
        K: Clone,
        V: Clone,
    {
        OrderedKeyMap {
            entries: self
                .entries
                .iter()
                .map(|(key, value)| (key.clone(), f(key, value)))
                .collect(),
            default: self.default.clone(),
        }
    }

    /// Reverses the entry order in place.
    pub fn reverse(&mut self) -> &mut Self {
        self.entries.reverse();
        self
    }

    /// Returns a copy with the entry order reversed.
    #[must_use]
    pub fn reversed(&self) -> Self
    where
        K: Clone,
        V: Clone,
    {
        let mut reversed = self.clone();
        reversed.reverse();
        reversed
    }

    /// Sorts the entries by key in place.
    pub fn sort(&mut self) -> &mut Self
    where
        K: Ord,
    {
        self.entries.sort_keys();
        self
    }

    /// Returns a copy with the entries sorted by key.
    #[must_use]
    pub fn sorted(&self) -> Self
    where
        K: Ord + Clone,
        V: Clone,
    {
        let mut sorted = self.clone();
        sorted.sort();
        sorted
    }
}

impl<K, V> Default for OrderedKeyMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Debug, V: Debug> Debug for OrderedKeyMap<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedKeyMap")
            .field("entries", &self.entries)
            .field("default", &self.default)
            .finish()
    }
}

/// Renders as `u{"hello": 1, "hi": 2}`.
impl<K: Debug, V: Debug> Display for OrderedKeyMap<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "u{{")?;
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:?}: {:?}", key, value)?;
        }
        write!(f, "}}")
    }
}

impl<K: Hash + Eq, V> From<IndexMap<K, V>> for OrderedKeyMap<K, V> {
    fn from(entries: IndexMap<K, V>) -> Self {
        OrderedKeyMap {
            entries,
            default: None,
        }
    }
}

impl<K: Hash + Eq, V> From<HashMap<K, V>> for OrderedKeyMap<K, V> {
    fn from(entries: HashMap<K, V>) -> Self {
        entries.into_iter().collect()
    }
}

impl<K: Hash + Eq, V> FromIterator<(K, V)> for OrderedKeyMap<K, V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        OrderedKeyMap {
            entries: IndexMap::from_iter(iter),
            default: None,
        }
    }
}

impl<K: Hash + Eq, V> Extend<(K, V)> for OrderedKeyMap<K, V> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        self.entries.extend(iter);
    }
}

impl<K, V> IntoIterator for OrderedKeyMap<K, V> {
    type Item = (K, V);
    type IntoIter = indexmap::map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a OrderedKeyMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = indexmap::map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
