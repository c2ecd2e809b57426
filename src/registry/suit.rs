//! Suit registry.

use std::collections::HashMap;

use crate::models::{reversed_key, Suit};

use super::traits::Registry;

/// Registry of resolved suits keyed by display key.
///
/// Keys are the suit name for normal suits and `"<name> Reversed"` for their
/// reversed counterparts. Iteration follows insertion order, which is catalog
/// order with each normal suit immediately followed by its reversed copy.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SuitRegistry {
    entries: Vec<(String, Suit)>,
    index: HashMap<String, usize>,
}

impl SuitRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self { entries: Vec::new(), index: HashMap::new() }
    }

    /// Add a suit under `key`. Returns `false` and leaves the registry
    /// untouched if the key is already taken.
    pub(crate) fn insert(&mut self, key: String, suit: Suit) -> bool {
        if self.index.contains_key(&key) {
            return false;
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, suit));
        true
    }

    /// Iterate over `(key, suit)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Suit)> {
        self.entries.iter().map(|(key, suit)| (key.as_str(), suit))
    }

    /// Iterate over the normal (non-reversed) suits in catalog order.
    pub fn normal_suits(&self) -> impl Iterator<Item = &Suit> {
        self.entries.iter().map(|(_, suit)| suit).filter(|suit| !suit.reversed)
    }

    /// Look up the reversed counterpart of the suit called `name`.
    pub fn reversed_of(&self, name: &str) -> Option<&Suit> {
        self.get(&reversed_key(name))
    }
}

impl Registry<Suit> for SuitRegistry {
    fn get(&self, name: &str) -> Option<&Suit> {
        self.index.get(name).map(|&i| &self.entries[i].1)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn names(&self) -> Box<dyn Iterator<Item = &String> + '_> {
        Box::new(self.entries.iter().map(|(key, _)| key))
    }
}
