//! `hashbrown` containers with [`FixedHashState`] as the default hasher.
//!
//! Name lookups in the type registry must not depend on a random seed,
//! so every map here hashes with the same fixed state.

use super::FixedHashState;

/// A [`hashbrown::HashMap`] using [`FixedHashState`] by default.
///
/// # Examples
///
/// ```
/// use arbor_utils::hash::{FixedHashState, HashMap};
///
/// let mut map: HashMap<&str, u32> = HashMap::with_hasher(FixedHashState);
/// map.insert("pet", 1);
/// assert_eq!(map.get("pet"), Some(&1));
/// ```
pub type HashMap<K, V, S = FixedHashState> = hashbrown::HashMap<K, V, S>;

/// A [`hashbrown::HashSet`] using [`FixedHashState`] by default.
pub type HashSet<T, S = FixedHashState> = hashbrown::HashSet<T, S>;

#[cfg(test)]
mod tests {
    use super::{HashMap, HashSet};
    use crate::hash::FixedHashState;

    #[test]
    fn const_construction() {
        static EMPTY: HashMap<u8, u8> = HashMap::with_hasher(FixedHashState);
        assert!(EMPTY.is_empty());

        let mut set: HashSet<&str> = HashSet::with_hasher(FixedHashState);
        assert!(set.insert("a"));
        assert!(!set.insert("a"));
    }
}
