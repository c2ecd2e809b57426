//! Clue color derivation for a single suit.

use crate::models::{Color, OptIn, SuitSpec, UNKNOWN_SUIT_NAME};
use crate::registry::ColorLookup;

use super::error::SuitError;

/// The already-validated flags that mark a suit as having no fixed clue colors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpecialKinds {
    pub all_clue_colors: OptIn,
    pub no_clue_colors: OptIn,
    pub prism: OptIn,
}

impl SpecialKinds {
    fn any(self) -> bool {
        self.all_clue_colors.is_set() || self.no_clue_colors.is_set() || self.prism.is_set()
    }
}

/// Derive the colors that touch cards of this suit when clued.
///
/// Resolution order (first match wins):
/// 1. Explicit `clueColors`, mapped through the color registry in order
/// 2. The "Unknown" suit has none
/// 3. Special kinds (all/no clue colors, prism) have none
/// 4. The color with the same name as the suit
///
/// Special kinds take precedence over the same-name color, so a "Prism" color
/// never turns a prism suit into a single-color suit.
pub fn resolve_clue_colors<C: ColorLookup + ?Sized>(
    spec: &SuitSpec,
    colors: &C,
    kinds: SpecialKinds,
) -> Result<Vec<Color>, SuitError> {
    if let Some(names) = &spec.clue_colors {
        return names
            .iter()
            .map(|color_name| {
                colors.lookup(color_name).cloned().ok_or_else(|| SuitError::UnknownClueColor {
                    suit: spec.name.clone(),
                    color: color_name.clone(),
                })
            })
            .collect();
    }

    if spec.name == UNKNOWN_SUIT_NAME || kinds.any() {
        return Ok(Vec::new());
    }

    match colors.lookup(&spec.name) {
        Some(color) => Ok(vec![color.clone()]),
        None => Err(SuitError::UnresolvableClueColors { suit: spec.name.clone() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette() -> Vec<Color> {
        vec![
            Color::new("Red", "R", "#aa0000", "#ff0000"),
            Color::new("Blue", "B", "#0044cc", "#0066ff"),
            Color::new("Prism", "I", "#cc00cc", "#ff00ff"),
        ]
    }

    #[test]
    fn test_explicit_colors_keep_order() {
        let spec = SuitSpec {
            clue_colors: Some(vec!["Blue".to_string(), "Red".to_string()]),
            ..SuitSpec::named("Mahogany")
        };
        let colors = resolve_clue_colors(&spec, &palette(), SpecialKinds::default()).unwrap();
        let names: Vec<&str> = colors.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Blue", "Red"]);
    }

    #[test]
    fn test_explicit_empty_list_is_allowed() {
        let spec = SuitSpec { clue_colors: Some(Vec::new()), ..SuitSpec::named("Gray") };
        let colors = resolve_clue_colors(&spec, &palette(), SpecialKinds::default()).unwrap();
        assert!(colors.is_empty());
    }

    #[test]
    fn test_unknown_color_names_suit_and_color() {
        let spec =
            SuitSpec { clue_colors: Some(vec!["Green".to_string()]), ..SuitSpec::named("Tomato") };
        let err = resolve_clue_colors(&spec, &palette(), SpecialKinds::default()).unwrap_err();
        assert_eq!(
            err,
            SuitError::UnknownClueColor { suit: "Tomato".to_string(), color: "Green".to_string() }
        );
        assert!(err.to_string().contains("Tomato"));
        assert!(err.to_string().contains("Green"));
    }

    #[test]
    fn test_unknown_suit_has_no_colors() {
        let colors =
            resolve_clue_colors(&SuitSpec::named("Unknown"), &palette(), SpecialKinds::default())
                .unwrap();
        assert!(colors.is_empty());
    }

    #[test]
    fn test_special_kind_beats_same_name_color() {
        let kinds = SpecialKinds { prism: OptIn::True, ..Default::default() };
        let colors = resolve_clue_colors(&SuitSpec::named("Prism"), &palette(), kinds).unwrap();
        assert!(colors.is_empty());
    }

    #[test]
    fn test_same_name_fallback() {
        let colors =
            resolve_clue_colors(&SuitSpec::named("Red"), &palette(), SpecialKinds::default())
                .unwrap();
        assert_eq!(colors.len(), 1);
        assert_eq!(colors[0].abbreviation, "R");
    }

    #[test]
    fn test_unresolvable() {
        let err =
            resolve_clue_colors(&SuitSpec::named("Rainbow"), &palette(), SpecialKinds::default())
                .unwrap_err();
        assert_eq!(err, SuitError::UnresolvableClueColors { suit: "Rainbow".to_string() });
    }
}
