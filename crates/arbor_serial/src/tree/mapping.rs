use alloc::string::{String, ToString};

use indexmap::IndexMap;

use super::Value;

/// An ordered mapping of string keys to [`Value`]s.
///
/// Equality compares entries in order, two mappings with the same entries in a
/// different order are not equal.
#[derive(Debug, Clone, Default)]
pub struct Mapping(IndexMap<String, Value>);

impl Mapping {
    #[inline]
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self(IndexMap::with_capacity(capacity))
    }

    /// Builds the positional mapping used for arrays and collections.
    ///
    /// # Examples
    ///
    /// ```
    /// use arbor_serial::{Mapping, Value};
    ///
    /// let mapping = Mapping::indexed(["a", "b", "c"]);
    /// let keys: Vec<&str> = mapping.keys().collect();
    ///
    /// assert_eq!(keys, ["1", "2", "3"]);
    /// assert_eq!(mapping.get("2"), Some(&Value::from("b")));
    /// ```
    pub fn indexed<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        values
            .into_iter()
            .enumerate()
            .map(|(index, value)| ((index + 1).to_string(), value.into()))
            .collect()
    }

    /// Inserts a key-value pair.
    ///
    /// An existing key keeps its position and gets the new value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    #[inline]
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.0.get_mut(key)
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Removes a key, keeping the order of the remaining entries.
    #[inline]
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl ExactSizeIterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &Value)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }
}

impl PartialEq for Mapping {
    fn eq(&self, other: &Self) -> bool {
        self.0.len() == other.0.len() && self.0.iter().eq(other.0.iter())
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Mapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl IntoIterator for Mapping {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Mapping {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::Mapping;
    use crate::Value;

    #[test]
    fn equality_respects_order() {
        let a: Mapping = [("x", 1), ("y", 2)].into_iter().collect();
        let b: Mapping = [("y", 2), ("x", 1)].into_iter().collect();
        let c: Mapping = [("x", 1), ("y", 2)].into_iter().collect();

        assert_ne!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn reinsert_keeps_position() {
        let mut mapping = Mapping::new();
        mapping.insert("a", 1);
        mapping.insert("b", 2);
        assert_eq!(mapping.insert("a", 3), Some(Value::from(1)));

        let keys: Vec<&str> = mapping.keys().collect();
        assert_eq!(keys, ["a", "b"]);
        assert_eq!(mapping.get("a"), Some(&Value::from(3)));
    }

    #[test]
    fn remove_keeps_order() {
        let mut mapping = Mapping::indexed([1, 2, 3]);
        mapping.remove("2");
        let keys: Vec<&str> = mapping.keys().collect();
        assert_eq!(keys, ["1", "3"]);
    }
}
