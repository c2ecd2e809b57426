//! Configuration schema types for `hanabi-data.toml`
//!
//! Defines where the catalogs live and which extra note words are reserved.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::notes::ReservedNotes;

use super::loader::resolve_path;

/// Catalog locations
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    /// Color catalog file; the bundled catalog is used when unset
    #[serde(default)]
    pub colors: Option<PathBuf>,
    /// Suit catalog file; the bundled catalog is used when unset
    #[serde(default)]
    pub suits: Option<PathBuf>,
}

/// Note word settings
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct NotesConfig {
    /// Words reserved in addition to the builtin note vocabulary
    #[serde(default)]
    pub reserved: Vec<String>,
}

/// Complete `hanabi-data.toml` configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub notes: NotesConfig,
    /// Directory relative catalog paths are resolved against; the directory
    /// of the config file when loaded from disk
    #[serde(skip)]
    pub base_dir: PathBuf,
}

/// Configuration validation error
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigValidationError {
    /// Path to the invalid field (e.g., "catalog.suits")
    pub field: String,
    /// Error message
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "hanabi-data.toml: '{}' {}", self.field, self.message)
    }
}

impl Config {
    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        let paths =
            [("catalog.colors", &self.catalog.colors), ("catalog.suits", &self.catalog.suits)];
        for (field, path) in paths {
            if path.as_ref().is_some_and(|p| p.as_os_str().is_empty()) {
                errors.push(ConfigValidationError {
                    field: field.to_string(),
                    message: "must be a non-empty path".to_string(),
                });
            }
        }

        for (i, word) in self.notes.reserved.iter().enumerate() {
            if word.trim().is_empty() {
                errors.push(ConfigValidationError {
                    field: format!("notes.reserved[{}]", i),
                    message: "must not be empty or whitespace".to_string(),
                });
            }
        }

        errors
    }

    /// The configured color catalog path, resolved against `base_dir`.
    pub fn colors_path(&self) -> Option<PathBuf> {
        self.catalog.colors.as_ref().map(|p| resolve_path(&self.base_dir, p))
    }

    /// The configured suit catalog path, resolved against `base_dir`.
    pub fn suits_path(&self) -> Option<PathBuf> {
        self.catalog.suits.as_ref().map(|p| resolve_path(&self.base_dir, p))
    }

    /// Builtin note words plus any configured extras.
    pub fn reserved_notes(&self) -> ReservedNotes {
        ReservedNotes::builtin().with_extra(&self.notes.reserved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config: Config = toml::from_str(
            r#"
[catalog]
colors = "data/colors.json"
suits = "data/suits.json5"

[notes]
reserved = ["zz", "Tempo"]
"#,
        )
        .unwrap();
        assert_eq!(config.catalog.suits, Some(PathBuf::from("data/suits.json5")));
        assert!(config.reserved_notes().contains("tempo"));
        assert!(config.reserved_notes().contains("kt"));
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert!(config.validate().is_empty());
        assert_eq!(config.suits_path(), None);
    }

    #[test]
    fn test_unknown_catalog_key_rejected() {
        let result: Result<Config, _> = toml::from_str("[catalog]\nsuit = \"suits.json\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_reports_fields() {
        let config = Config {
            catalog: CatalogConfig { colors: Some(PathBuf::new()), suits: None },
            notes: NotesConfig { reserved: vec!["ok".to_string(), "  ".to_string()] },
            ..Default::default()
        };
        let errors = config.validate();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["catalog.colors", "notes.reserved[1]"]);
        assert!(errors[1].to_string().starts_with("hanabi-data.toml: 'notes.reserved[1]'"));
    }

    #[test]
    fn test_relative_paths_resolve_against_base_dir() {
        let config = Config {
            catalog: CatalogConfig { colors: None, suits: Some(PathBuf::from("suits.json")) },
            base_dir: PathBuf::from("/srv/game"),
            ..Default::default()
        };
        assert_eq!(config.suits_path(), Some(PathBuf::from("/srv/game/suits.json")));
    }
}
