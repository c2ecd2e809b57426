//! Color catalog resolution.

use tracing::{debug, info};

use crate::models::{Color, ColorSpec};
use crate::notes::ReservedNotes;
use crate::registry::{ColorRegistry, Registry};

use super::abbreviation::{check_abbreviation, first_char};
use super::error::ColorError;

/// Build the color registry from a catalog.
///
/// Must run before suit resolution, which looks colors up by name.
pub fn resolve_colors(
    specs: &[ColorSpec],
    reserved: &ReservedNotes,
) -> Result<ColorRegistry, ColorError> {
    if specs.is_empty() {
        return Err(ColorError::EmptyCatalog);
    }

    let mut registry = ColorRegistry::new();
    for (index, spec) in specs.iter().enumerate() {
        let color = resolve_color(index, spec, reserved)?;
        debug!(color = %color.name, abbreviation = %color.abbreviation, "resolved color");
        if !registry.insert(color) {
            return Err(ColorError::DuplicateName { color: spec.name.clone() });
        }
    }

    info!(colors = registry.len(), "built color registry");
    Ok(registry)
}

fn resolve_color(
    index: usize,
    spec: &ColorSpec,
    reserved: &ReservedNotes,
) -> Result<Color, ColorError> {
    if spec.name.is_empty() {
        return Err(ColorError::EmptyName { index });
    }

    let abbreviation = spec.abbreviation.clone().unwrap_or_else(|| first_char(&spec.name));
    if let Err(problem) = check_abbreviation(&abbreviation, reserved) {
        return Err(ColorError::InvalidAbbreviation {
            color: spec.name.clone(),
            abbreviation,
            problem,
        });
    }

    if spec.fill.is_empty() {
        return Err(ColorError::EmptyFill { color: spec.name.clone() });
    }

    let fill_colorblind = match spec.fill_colorblind.as_deref() {
        Some("") => return Err(ColorError::EmptyFillColorblind { color: spec.name.clone() }),
        Some(fill_colorblind) => fill_colorblind.to_string(),
        None => spec.fill.clone(),
    };

    Ok(Color { name: spec.name.clone(), abbreviation, fill: spec.fill.clone(), fill_colorblind })
}
