//! Startup context holding the resolved registries.
//!
//! The entry point builds a [`GameData`] once and passes it by reference to
//! whatever needs colors or suits. Nothing here is global.

use tracing::info;

use crate::catalog::{self, CatalogError};
use crate::config::Config;
use crate::models::{ColorSpec, SuitSpec};
use crate::notes::ReservedNotes;
use crate::registry::{ColorRegistry, Registry, SuitRegistry};
use crate::resolve::{resolve_colors, resolve_suits};

/// The resolved, read-only color and suit registries.
#[derive(Debug, Clone, PartialEq)]
pub struct GameData {
    pub colors: ColorRegistry,
    pub suits: SuitRegistry,
}

impl GameData {
    /// Resolve colors, then suits against those colors.
    ///
    /// Either both registries are returned or the first error is.
    pub fn build(
        colors: &[ColorSpec],
        suits: &[SuitSpec],
        reserved: &ReservedNotes,
    ) -> Result<Self, CatalogError> {
        let colors = resolve_colors(colors, reserved)?;
        let suits = resolve_suits(suits, &colors, reserved)?;
        info!(colors = colors.len(), suits = suits.len(), "game data ready");
        Ok(Self { colors, suits })
    }

    /// Build from the catalogs compiled into the crate and the builtin note words.
    pub fn bundled() -> Result<Self, CatalogError> {
        let colors = catalog::bundled_colors()?;
        let suits = catalog::bundled_suits()?;
        Self::build(&colors, &suits, &ReservedNotes::builtin())
    }

    /// Build from a configuration, falling back to the bundled catalog for any
    /// catalog path the configuration leaves unset.
    pub fn from_config(config: &Config) -> Result<Self, CatalogError> {
        let colors = match config.colors_path() {
            Some(path) => catalog::read_colors(&path)?,
            None => catalog::bundled_colors()?,
        };
        let suits = match config.suits_path() {
            Some(path) => catalog::read_suits(&path)?,
            None => catalog::bundled_suits()?,
        };
        Self::build(&colors, &suits, &config.reserved_notes())
    }
}
