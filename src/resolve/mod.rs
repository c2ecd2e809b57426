//! Catalog resolution - turning raw catalog records into registries
//!
//! Colors are resolved first; suits are then resolved against any
//! [`ColorLookup`](crate::registry::ColorLookup), usually the resulting
//! [`ColorRegistry`](crate::registry::ColorRegistry).

mod abbreviation;
mod clue_colors;
mod colors;
mod error;
mod fill;
mod suits;

// Re-export public API
pub use clue_colors::{resolve_clue_colors, SpecialKinds};
pub use colors::resolve_colors;
pub use error::{AbbreviationProblem, ColorError, SuitError};
pub use fill::{resolve_fill, Fill};
pub use suits::{resolve_suit, resolve_suits};
