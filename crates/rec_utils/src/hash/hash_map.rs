//! Provide [`HashMap`] based on [hashbrown]'s implementation.

use hashbrown::hash_map as hb;

use crate::hash::FixedHashState;

// -----------------------------------------------------------------------------
// Re-Exports

pub use hb::{Entry, Iter, IterMut, Keys, OccupiedEntry, VacantEntry, Values};

// -----------------------------------------------------------------------------
// HashMap

/// A [`hashbrown::HashMap`] defaulting to [`FixedHashState`].
///
/// # Examples
///
/// ```
/// use rec_utils::hash::HashMap;
///
/// let mut map: HashMap<&'static str, usize> = HashMap::default();
/// map.insert("x", 0);
/// map.insert("y", 1);
///
/// assert_eq!(map.get("y"), Some(&1));
/// ```
pub type HashMap<K, V, S = FixedHashState> = hb::HashMap<K, V, S>;

#[cfg(test)]
mod tests {
    use super::HashMap;
    use crate::hash::FixedHashState;

    #[test]
    fn const_empty() {
        static EMPTY: HashMap<u32, u32> = HashMap::with_hasher(FixedHashState);
        assert!(EMPTY.is_empty());
    }

    #[test]
    fn collect_from_iter() {
        let map: HashMap<&str, usize> = ["a", "b", "c"]
            .into_iter()
            .enumerate()
            .map(|(i, k)| (k, i))
            .collect();

        assert_eq!(map.len(), 3);
        assert_eq!(map["c"], 2);
    }
}
