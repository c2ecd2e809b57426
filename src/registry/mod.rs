//! Registry traits and implementations for named items.
//!
//! This module provides:
//! - A read-only `Registry` trait shared by all registries
//! - `ColorLookup`, the color capability consumed by suit resolution
//! - `ColorRegistry` for resolved colors
//! - `SuitRegistry` for resolved suits and their reversed variants
//!
//! Registries are populated only by the resolvers in [`crate::resolve`].

mod color;
mod suit;
mod traits;

// Re-export all public items from submodules
pub use color::ColorRegistry;
pub use suit::SuitRegistry;
pub use traits::{ColorLookup, Registry};
