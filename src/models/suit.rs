//! Suit types: the raw catalog record, the opt-in flag type, and the resolved suit.

use serde::{Deserialize, Serialize};

use super::color::Color;
use crate::resolve::SuitError;

/// Suffix appended to a suit name to form the registry key of its reversed variant.
pub const SUIT_REVERSED_SUFFIX: &str = " Reversed";

/// Name of the placeholder suit shown for cards whose identity is not known.
///
/// It is the only suit allowed to have an empty pip and no clue colors.
pub const UNKNOWN_SUIT_NAME: &str = "Unknown";

/// A suit record as authored in the suit catalog.
///
/// Everything except `name` may be omitted. The boolean flags are opt-in only:
/// writing `"prism": false` is rejected during resolution, omit the field instead.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SuitSpec {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub abbreviation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub clue_colors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub fill: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub fill_colors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub one_of_each: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub pip: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub all_clue_colors: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub all_clue_ranks: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub no_clue_colors: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub no_clue_ranks: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub prism: Option<bool>,
}

impl SuitSpec {
    /// A record with only a name set.
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Default::default() }
    }
}

/// Presence of an opt-in catalog flag.
///
/// Catalog flags can only assert `true`, so there is no `False` state: an
/// explicit `false` never makes it past [`OptIn::from_field`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OptIn {
    #[default]
    Absent,
    True,
}

impl OptIn {
    /// Convert a raw catalog flag, rejecting an explicit `false`.
    pub fn from_field(suit: &str, field: &'static str, value: Option<bool>) -> Result<Self, SuitError> {
        match value {
            None => Ok(OptIn::Absent),
            Some(true) => Ok(OptIn::True),
            Some(false) => {
                Err(SuitError::RedundantFalseFlag { suit: suit.to_string(), field })
            }
        }
    }

    pub fn is_set(self) -> bool {
        self == OptIn::True
    }
}

impl From<OptIn> for bool {
    fn from(value: OptIn) -> Self {
        value.is_set()
    }
}

/// A fully resolved suit.
///
/// Two of these exist per catalog record: the normal suit and a reversed copy
/// that differs only in `reversed`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Suit {
    pub name: String,
    pub abbreviation: String,
    pub clue_colors: Vec<Color>,
    pub display_name: String,
    pub fill: String,
    pub fill_colorblind: String,
    pub fill_colors: Vec<String>,
    pub one_of_each: bool,
    pub pip: String,
    pub reversed: bool,

    pub all_clue_colors: bool,
    pub all_clue_ranks: bool,
    pub no_clue_colors: bool,
    pub no_clue_ranks: bool,
    pub prism: bool,
}

impl Suit {
    /// The registry key this suit is stored under.
    pub fn key(&self) -> String {
        if self.reversed {
            reversed_key(&self.name)
        } else {
            self.name.clone()
        }
    }

    /// A copy of this suit with the reversal flag set.
    pub fn to_reversed(&self) -> Suit {
        Suit { reversed: true, ..self.clone() }
    }
}

/// Registry key of the reversed variant of the suit called `name`.
pub fn reversed_key(name: &str) -> String {
    format!("{}{}", name, SUIT_REVERSED_SUFFIX)
}
