//! Color registry.

use std::collections::HashMap;

use crate::models::Color;

use super::traits::{ColorLookup, Registry};

/// Registry of resolved colors, iterable in catalog order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorRegistry {
    colors: Vec<Color>,
    index: HashMap<String, usize>,
}

impl ColorRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self { colors: Vec::new(), index: HashMap::new() }
    }

    /// Add a color. Returns `false` and leaves the registry untouched if a
    /// color with the same name is already present.
    pub(crate) fn insert(&mut self, color: Color) -> bool {
        if self.index.contains_key(&color.name) {
            return false;
        }
        self.index.insert(color.name.clone(), self.colors.len());
        self.colors.push(color);
        true
    }

    /// Iterate over colors in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Color> {
        self.colors.iter()
    }
}

impl Registry<Color> for ColorRegistry {
    fn get(&self, name: &str) -> Option<&Color> {
        self.index.get(name).map(|&i| &self.colors[i])
    }

    fn len(&self) -> usize {
        self.colors.len()
    }

    fn names(&self) -> Box<dyn Iterator<Item = &String> + '_> {
        Box::new(self.colors.iter().map(|c| &c.name))
    }
}

impl ColorLookup for ColorRegistry {
    fn lookup(&self, name: &str) -> Option<&Color> {
        self.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_order_and_rejects_duplicates() {
        let mut registry = ColorRegistry::new();
        assert!(registry.insert(Color::new("Red", "R", "#aa0000", "#ff0000")));
        assert!(registry.insert(Color::new("Blue", "B", "#0044cc", "#0066ff")));
        assert!(!registry.insert(Color::new("Red", "X", "#000000", "#000000")));

        assert_eq!(registry.len(), 2);
        let names: Vec<&String> = registry.names().collect();
        assert_eq!(names, ["Red", "Blue"]);
        assert_eq!(registry.get("Red").unwrap().abbreviation, "R");
    }

    #[test]
    fn test_lookup_matches_get() {
        let mut registry = ColorRegistry::new();
        registry.insert(Color::new("Teal", "T", "#00cccc", "#00ffff"));
        assert_eq!(registry.lookup("Teal"), registry.get("Teal"));
        assert!(registry.lookup("teal").is_none());
        assert!(!registry.contains("Pink"));
    }
}
