//! Suit catalog resolution.
//!
//! Turns the loosely specified suit records into complete [`Suit`] values,
//! validating each field and filling in the derived ones. Every record yields
//! two registry entries: the suit itself and its reversed variant.

use tracing::{debug, info};

use crate::models::{OptIn, Suit, SuitSpec, UNKNOWN_SUIT_NAME};
use crate::notes::ReservedNotes;
use crate::registry::{ColorLookup, Registry, SuitRegistry};

use super::abbreviation::{check_abbreviation, first_char};
use super::clue_colors::{resolve_clue_colors, SpecialKinds};
use super::error::SuitError;
use super::fill::resolve_fill;

/// Build the suit registry from a catalog.
///
/// Records are processed in order and the first invalid one aborts the build.
pub fn resolve_suits<C: ColorLookup + ?Sized>(
    specs: &[SuitSpec],
    colors: &C,
    reserved: &ReservedNotes,
) -> Result<SuitRegistry, SuitError> {
    if specs.is_empty() {
        return Err(SuitError::EmptyCatalog);
    }

    let mut registry = SuitRegistry::new();
    for (index, spec) in specs.iter().enumerate() {
        let suit = resolve_suit(index, spec, colors, reserved)?;
        let reversed = suit.to_reversed();

        for entry in [suit, reversed] {
            let key = entry.key();
            if registry.contains(&key) {
                return Err(SuitError::DuplicateName { key });
            }
            registry.insert(key, entry);
        }
    }

    info!(suits = specs.len(), entries = registry.len(), "built suit registry");
    Ok(registry)
}

/// Resolve a single catalog record into a normal (non-reversed) suit.
///
/// `index` is the record's position in the catalog and only used to point at
/// records that have no name to report.
pub fn resolve_suit<C: ColorLookup + ?Sized>(
    index: usize,
    spec: &SuitSpec,
    colors: &C,
    reserved: &ReservedNotes,
) -> Result<Suit, SuitError> {
    if spec.name.is_empty() {
        return Err(SuitError::EmptyName { index });
    }
    let name = spec.name.as_str();

    let abbreviation = resolve_abbreviation(spec, colors, reserved)?;

    // Must happen before the clue colors, which depend on these flags.
    let all_clue_colors = OptIn::from_field(name, "allClueColors", spec.all_clue_colors)?;
    let all_clue_ranks = OptIn::from_field(name, "allClueRanks", spec.all_clue_ranks)?;
    let no_clue_colors = OptIn::from_field(name, "noClueColors", spec.no_clue_colors)?;
    let no_clue_ranks = OptIn::from_field(name, "noClueRanks", spec.no_clue_ranks)?;
    let prism = OptIn::from_field(name, "prism", spec.prism)?;

    let kinds = SpecialKinds { all_clue_colors, no_clue_colors, prism };
    let clue_colors = resolve_clue_colors(spec, colors, kinds)?;

    let display_name = match spec.display_name.as_deref() {
        Some("") => return Err(SuitError::EmptyDisplayName { suit: name.to_string() }),
        Some(display_name) => display_name.to_string(),
        None => name.to_string(),
    };

    let fill = resolve_fill(spec, colors, &clue_colors)?;

    let fill_colors = match &spec.fill_colors {
        Some(fill_colors) if fill_colors.is_empty() => {
            return Err(SuitError::EmptyFillColors { suit: name.to_string() });
        }
        Some(fill_colors) => fill_colors.clone(),
        None => Vec::new(),
    };

    let one_of_each = OptIn::from_field(name, "oneOfEach", spec.one_of_each)?;

    // A missing pip counts as empty.
    let pip = spec.pip.clone().unwrap_or_default();
    if pip.is_empty() && name != UNKNOWN_SUIT_NAME {
        return Err(SuitError::EmptyPip { suit: name.to_string() });
    }

    debug!(
        suit = name,
        abbreviation = %abbreviation,
        clue_colors = clue_colors.len(),
        "resolved suit"
    );

    Ok(Suit {
        name: name.to_string(),
        abbreviation,
        clue_colors,
        display_name,
        fill: fill.fill,
        fill_colorblind: fill.fill_colorblind,
        fill_colors,
        one_of_each: one_of_each.is_set(),
        pip,
        reversed: false,

        all_clue_colors: all_clue_colors.is_set(),
        all_clue_ranks: all_clue_ranks.is_set(),
        no_clue_colors: no_clue_colors.is_set(),
        no_clue_ranks: no_clue_ranks.is_set(),
        prism: prism.is_set(),
    })
}

/// Pick the abbreviation (explicit, same-name color, or first letter) and validate it.
fn resolve_abbreviation<C: ColorLookup + ?Sized>(
    spec: &SuitSpec,
    colors: &C,
    reserved: &ReservedNotes,
) -> Result<String, SuitError> {
    let abbreviation = match &spec.abbreviation {
        Some(abbreviation) => abbreviation.clone(),
        None => match colors.lookup(&spec.name) {
            Some(color) => color.abbreviation.clone(),
            None => first_char(&spec.name),
        },
    };

    check_abbreviation(&abbreviation, reserved).map_err(|problem| {
        SuitError::InvalidAbbreviation {
            suit: spec.name.clone(),
            abbreviation: abbreviation.clone(),
            problem,
        }
    })?;
    Ok(abbreviation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Color;
    use crate::resolve::AbbreviationProblem;

    fn colors() -> Vec<Color> {
        vec![
            Color::new("Red", "R", "red-fill", "red-colorblind"),
            Color::new("Blue", "B", "blue-fill", "blue-colorblind"),
            Color::new("Black", "K", "black-fill", "black-colorblind"),
        ]
    }

    fn suit(name: &str) -> SuitSpec {
        SuitSpec { pip: Some(name.to_lowercase()), ..SuitSpec::named(name) }
    }

    fn resolve_one(spec: SuitSpec) -> Result<Suit, SuitError> {
        resolve_suit(0, &spec, &colors(), &ReservedNotes::builtin())
    }

    #[test]
    fn test_defaults_from_same_name_color() {
        let red = resolve_one(suit("Red")).unwrap();
        assert_eq!(red.abbreviation, "R");
        assert_eq!(red.display_name, "Red");
        assert_eq!(red.fill, "red-fill");
        assert_eq!(red.fill_colorblind, "red-colorblind");
        assert_eq!(red.clue_colors.len(), 1);
        assert!(red.fill_colors.is_empty());
        assert!(!red.reversed);
        assert!(!red.one_of_each);
        assert!(!red.prism);
    }

    #[test]
    fn test_abbreviation_from_color_not_first_letter() {
        let black = resolve_one(suit("Black")).unwrap();
        assert_eq!(black.abbreviation, "K");
    }

    #[test]
    fn test_abbreviation_first_letter_fallback() {
        let rainbow = resolve_one(SuitSpec {
            all_clue_colors: Some(true),
            fill: Some("multi".to_string()),
            ..suit("Rainbow")
        })
        .unwrap();
        assert_eq!(rainbow.abbreviation, "R");
        assert!(rainbow.clue_colors.is_empty());
        assert!(rainbow.all_clue_colors);
    }

    #[test]
    fn test_abbreviation_errors_name_suit_and_value() {
        let spec = SuitSpec { abbreviation: Some("Rd".to_string()), ..suit("Red") };
        let err = resolve_one(spec).unwrap_err();
        assert_eq!(
            err,
            SuitError::InvalidAbbreviation {
                suit: "Red".to_string(),
                abbreviation: "Rd".to_string(),
                problem: AbbreviationProblem::WrongLength,
            }
        );
        let message = err.to_string();
        assert!(message.contains("\"Red\""));
        assert!(message.contains("\"Rd\""));
    }

    #[test]
    fn test_lowercase_abbreviation_rejected() {
        let spec = SuitSpec { abbreviation: Some("r".to_string()), ..suit("Red") };
        assert!(matches!(
            resolve_one(spec),
            Err(SuitError::InvalidAbbreviation { problem: AbbreviationProblem::NotUppercase, .. })
        ));
    }

    #[test]
    fn test_reserved_abbreviation_rejected() {
        let reserved = ReservedNotes::new().with_extra(["k"]);
        let err = resolve_suit(0, &suit("Black"), &colors(), &reserved).unwrap_err();
        assert!(matches!(
            err,
            SuitError::InvalidAbbreviation { problem: AbbreviationProblem::ReservedNote, .. }
        ));
    }

    #[test]
    fn test_each_flag_rejects_false() {
        let cases: [(&'static str, fn(&mut SuitSpec)); 6] = [
            ("allClueColors", |s| s.all_clue_colors = Some(false)),
            ("allClueRanks", |s| s.all_clue_ranks = Some(false)),
            ("noClueColors", |s| s.no_clue_colors = Some(false)),
            ("noClueRanks", |s| s.no_clue_ranks = Some(false)),
            ("prism", |s| s.prism = Some(false)),
            ("oneOfEach", |s| s.one_of_each = Some(false)),
        ];
        for (field, set_false) in cases {
            let mut spec = suit("Red");
            set_false(&mut spec);
            assert_eq!(
                resolve_one(spec),
                Err(SuitError::RedundantFalseFlag { suit: "Red".to_string(), field }),
                "{} = false should be rejected",
                field
            );
        }
    }

    #[test]
    fn test_flag_checked_before_clue_colors() {
        // No same-name color, so clue colors would fail too; the flag error comes first.
        let spec = SuitSpec { prism: Some(false), ..suit("Gold") };
        assert!(matches!(resolve_one(spec), Err(SuitError::RedundantFalseFlag { .. })));
    }

    #[test]
    fn test_empty_display_name_rejected() {
        let spec = SuitSpec { display_name: Some(String::new()), ..suit("Red") };
        assert_eq!(resolve_one(spec), Err(SuitError::EmptyDisplayName { suit: "Red".to_string() }));
    }

    #[test]
    fn test_explicit_display_name_kept() {
        let spec = SuitSpec { display_name: Some("Crimson".to_string()), ..suit("Red") };
        assert_eq!(resolve_one(spec).unwrap().display_name, "Crimson");
    }

    #[test]
    fn test_empty_fill_colors_rejected() {
        let spec = SuitSpec { fill_colors: Some(Vec::new()), ..suit("Red") };
        assert_eq!(resolve_one(spec), Err(SuitError::EmptyFillColors { suit: "Red".to_string() }));
    }

    #[test]
    fn test_fill_from_first_clue_color() {
        let spec = SuitSpec { clue_colors: Some(vec!["Blue".to_string()]), ..suit("Sapphire") };
        let sapphire = resolve_one(spec).unwrap();
        assert_eq!(sapphire.fill, "blue-fill");
        assert_eq!(sapphire.fill_colorblind, "blue-colorblind");
        assert_eq!(sapphire.abbreviation, "S");
    }

    #[test]
    fn test_empty_pip_rejected_except_unknown() {
        let spec = SuitSpec { pip: Some(String::new()), ..suit("Red") };
        assert_eq!(resolve_one(spec), Err(SuitError::EmptyPip { suit: "Red".to_string() }));

        let missing = SuitSpec::named("Red");
        assert_eq!(resolve_one(missing), Err(SuitError::EmptyPip { suit: "Red".to_string() }));
    }

    #[test]
    fn test_unknown_suit() {
        let spec = SuitSpec { fill: Some("#cccccc".to_string()), ..SuitSpec::named("Unknown") };
        let unknown = resolve_one(spec).unwrap();
        assert!(unknown.clue_colors.is_empty());
        assert_eq!(unknown.pip, "");
        assert_eq!(unknown.abbreviation, "U");
    }

    #[test]
    fn test_empty_name_reports_index() {
        let specs = vec![suit("Red"), SuitSpec::default()];
        let err = resolve_suits(&specs, &colors(), &ReservedNotes::builtin()).unwrap_err();
        assert_eq!(err, SuitError::EmptyName { index: 1 });
    }

    #[test]
    fn test_empty_catalog() {
        let err = resolve_suits(&[], &colors(), &ReservedNotes::builtin()).unwrap_err();
        assert_eq!(err, SuitError::EmptyCatalog);
    }

    #[test]
    fn test_registry_pairs_normal_and_reversed() {
        let specs = vec![suit("Red"), suit("Blue")];
        let registry = resolve_suits(&specs, &colors(), &ReservedNotes::builtin()).unwrap();

        let keys: Vec<&str> = registry.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, ["Red", "Red Reversed", "Blue", "Blue Reversed"]);

        let red = registry.get("Red").unwrap();
        let red_reversed = registry.get("Red Reversed").unwrap();
        assert!(red_reversed.reversed);
        assert_eq!(&Suit { reversed: false, ..red_reversed.clone() }, red);
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let specs = vec![suit("Red"), suit("Red")];
        let err = resolve_suits(&specs, &colors(), &ReservedNotes::builtin()).unwrap_err();
        assert_eq!(err, SuitError::DuplicateName { key: "Red".to_string() });
    }

    #[test]
    fn test_name_colliding_with_reversed_key_rejected() {
        let specs = vec![
            suit("Red"),
            SuitSpec { clue_colors: Some(vec!["Red".to_string()]), ..suit("Red Reversed") },
        ];
        let err = resolve_suits(&specs, &colors(), &ReservedNotes::builtin()).unwrap_err();
        assert_eq!(err, SuitError::DuplicateName { key: "Red Reversed".to_string() });
    }
}
