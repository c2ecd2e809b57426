//! Catalog file loading
//!
//! Catalogs are JSON arrays of records. Files ending in `.json5` are parsed
//! with the more forgiving JSON5 grammar (comments, trailing commas), which is
//! handy for hand-maintained catalogs. The default catalogs are compiled into
//! the binary.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::models::{ColorSpec, SuitSpec};
use crate::resolve::{ColorError, SuitError};

const BUNDLED_COLORS: &str = include_str!("../data/colors.json");
const BUNDLED_SUITS: &str = include_str!("../data/suits.json");

/// Error when loading or resolving a catalog.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    /// Catalog file could not be read
    #[error("Failed to read catalog '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Catalog file is not a valid array of records
    #[error("Failed to parse catalog '{}': {message}", path.display())]
    Parse { path: PathBuf, message: String },
    /// Color catalog failed validation
    #[error(transparent)]
    Colors(#[from] ColorError),
    /// Suit catalog failed validation
    #[error(transparent)]
    Suits(#[from] SuitError),
}

/// Syntax a catalog is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Json5,
}

impl CatalogFormat {
    /// Pick the format from a file extension; anything but `.json5` is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json5") => CatalogFormat::Json5,
            _ => CatalogFormat::Json,
        }
    }
}

/// Parse catalog text into records.
pub fn parse_catalog<T: DeserializeOwned>(
    content: &str,
    format: CatalogFormat,
) -> Result<Vec<T>, String> {
    match format {
        CatalogFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        CatalogFormat::Json5 => json5::from_str(content).map_err(|e| e.to_string()),
    }
}

fn read_catalog<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, CatalogError> {
    let content = fs::read_to_string(path)
        .map_err(|source| CatalogError::Io { path: path.to_path_buf(), source })?;
    let records = parse_catalog(&content, CatalogFormat::from_path(path))
        .map_err(|message| CatalogError::Parse { path: path.to_path_buf(), message })?;
    debug!(path = %path.display(), records = records.len(), "read catalog");
    Ok(records)
}

/// Read a suit catalog file.
pub fn read_suits(path: &Path) -> Result<Vec<SuitSpec>, CatalogError> {
    read_catalog(path)
}

/// Read a color catalog file.
pub fn read_colors(path: &Path) -> Result<Vec<ColorSpec>, CatalogError> {
    read_catalog(path)
}

/// The suit catalog shipped with the crate.
pub fn bundled_suits() -> Result<Vec<SuitSpec>, CatalogError> {
    parse_catalog(BUNDLED_SUITS, CatalogFormat::Json).map_err(|message| CatalogError::Parse {
        path: PathBuf::from("data/suits.json"),
        message,
    })
}

/// The color catalog shipped with the crate.
pub fn bundled_colors() -> Result<Vec<ColorSpec>, CatalogError> {
    parse_catalog(BUNDLED_COLORS, CatalogFormat::Json).map_err(|message| CatalogError::Parse {
        path: PathBuf::from("data/colors.json"),
        message,
    })
}
