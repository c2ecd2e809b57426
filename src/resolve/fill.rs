//! Fill derivation for a single suit.

use crate::models::{Color, SuitSpec};
use crate::registry::ColorLookup;

use super::error::SuitError;

/// Rendering fills for a suit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fill {
    pub fill: String,
    pub fill_colorblind: String,
}

impl From<&Color> for Fill {
    fn from(color: &Color) -> Self {
        Self { fill: color.fill.clone(), fill_colorblind: color.fill_colorblind.clone() }
    }
}

/// Derive the fill and colorblind fill of a suit.
///
/// An explicit fill is used for both outputs. Otherwise the color with the
/// same name as the suit is used, then the first clue color. Color fills are
/// already known to be non-empty.
pub fn resolve_fill<C: ColorLookup + ?Sized>(
    spec: &SuitSpec,
    colors: &C,
    clue_colors: &[Color],
) -> Result<Fill, SuitError> {
    match spec.fill.as_deref() {
        Some("") => return Err(SuitError::EmptyFill { suit: spec.name.clone() }),
        Some(fill) => {
            return Ok(Fill { fill: fill.to_string(), fill_colorblind: fill.to_string() });
        }
        None => {}
    }

    colors
        .lookup(&spec.name)
        .or_else(|| clue_colors.first())
        .map(Fill::from)
        .ok_or_else(|| SuitError::UnresolvableFill { suit: spec.name.clone() })
}
