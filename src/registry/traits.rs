//! Common traits for read-only registries of named items.

use std::collections::HashMap;

use crate::models::Color;

/// Common trait for registries that map string names to values.
///
/// Registries are built once during startup and only read afterwards, so the
/// trait exposes lookups and iteration but no mutation.
///
/// # Type Parameters
///
/// * `V` - The type of value stored in the registry
///
/// # Example
///
/// ```
/// use hanabi_data::registry::Registry;
/// use hanabi_data::GameData;
///
/// let data = GameData::bundled().unwrap();
///
/// assert!(data.suits.contains("Red"));
/// assert!(data.suits.contains("Red Reversed"));
/// assert_eq!(data.suits.get("Red").unwrap().abbreviation, "R");
/// ```
pub trait Registry<V> {
    /// Check if an item with the given name exists in the registry.
    fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Get an item by name.
    ///
    /// Returns `None` if no item with the given name exists.
    fn get(&self, name: &str) -> Option<&V>;

    /// Get the number of items in the registry.
    fn len(&self) -> usize;

    /// Check if the registry is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get an iterator over all names in the registry, in insertion order.
    fn names(&self) -> Box<dyn Iterator<Item = &String> + '_>;
}

/// Read-only color lookup consumed by suit resolution.
///
/// [`ColorRegistry`](super::ColorRegistry) is the production implementation;
/// tests can hand in a plain map or slice of colors instead.
pub trait ColorLookup {
    /// Find a color by its exact name.
    fn lookup(&self, name: &str) -> Option<&Color>;
}

impl ColorLookup for HashMap<String, Color> {
    fn lookup(&self, name: &str) -> Option<&Color> {
        self.get(name)
    }
}

impl ColorLookup for [Color] {
    fn lookup(&self, name: &str) -> Option<&Color> {
        self.iter().find(|color| color.name == name)
    }
}

impl ColorLookup for Vec<Color> {
    fn lookup(&self, name: &str) -> Option<&Color> {
        self.as_slice().lookup(name)
    }
}

impl<T: ColorLookup + ?Sized> ColorLookup for &T {
    fn lookup(&self, name: &str) -> Option<&Color> {
        (**self).lookup(name)
    }
}
