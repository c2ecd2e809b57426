//! Data models for catalog records and resolved colors and suits

mod color;
mod suit;

// Re-export all public types
pub use color::{Color, ColorSpec};
pub use suit::{
    reversed_key, OptIn, Suit, SuitSpec, SUIT_REVERSED_SUFFIX, UNKNOWN_SUIT_NAME,
};
