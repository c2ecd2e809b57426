//! hanabi-data - Suit and color registries for a Hanabi-style card game
//!
//! This library provides functionality to:
//! - Read the color and suit catalogs (JSON or JSON5)
//! - Resolve them into validated, immutable color and suit registries
//! - Derive every omitted suit field and the reversed variant of each suit
//!
//! ```
//! use hanabi_data::registry::Registry;
//! use hanabi_data::GameData;
//!
//! let data = GameData::bundled().unwrap();
//! let rainbow = data.suits.get("Rainbow Reversed").unwrap();
//! assert!(rainbow.reversed);
//! assert!(rainbow.all_clue_colors);
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod game_data;
pub mod models;
pub mod notes;
pub mod registry;
pub mod resolve;

pub use game_data::GameData;
