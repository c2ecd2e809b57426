//! Color types: the raw catalog record and the resolved color.

use serde::{Deserialize, Serialize};

/// A color record as authored in the color catalog.
///
/// Only `name` and `fill` are required. The abbreviation falls back to the
/// first character of the name and the colorblind fill falls back to `fill`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ColorSpec {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub abbreviation: Option<String>,
    pub fill: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub fill_colorblind: Option<String>,
}

/// A fully resolved color.
///
/// `abbreviation` is a single uppercase character and both fills are non-empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Color {
    pub name: String,
    pub abbreviation: String,
    pub fill: String,
    pub fill_colorblind: String,
}

impl Color {
    /// Convenience constructor, mostly used to build synthetic registries.
    pub fn new(
        name: impl Into<String>,
        abbreviation: impl Into<String>,
        fill: impl Into<String>,
        fill_colorblind: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            abbreviation: abbreviation.into(),
            fill: fill.into(),
            fill_colorblind: fill_colorblind.into(),
        }
    }
}
