//! Error types for catalog resolution

use std::fmt;

use thiserror::Error;

/// Why an abbreviation was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbbreviationProblem {
    /// Not exactly one character long
    WrongLength,
    /// Differs from its own uppercase form
    NotUppercase,
    /// Collides with a reserved note word (case-insensitive)
    ReservedNote,
}

impl fmt::Display for AbbreviationProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbbreviationProblem::WrongLength => write!(f, "is not one letter long"),
            AbbreviationProblem::NotUppercase => write!(f, "is not an uppercase letter"),
            AbbreviationProblem::ReservedNote => {
                write!(f, "conflicts with a reserved note word")
            }
        }
    }
}

/// Error when resolving the suit catalog.
///
/// Any of these aborts the whole build; no partial registry is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SuitError {
    /// The catalog contains no records
    #[error("The suit catalog did not have any elements in it")]
    EmptyCatalog,
    /// A record has an empty name
    #[error("There is a suit with an empty name in the suit catalog (record {index})")]
    EmptyName { index: usize },
    /// The given or derived abbreviation is unusable
    #[error("The \"{suit}\" suit has an abbreviation of \"{abbreviation}\" that {problem}")]
    InvalidAbbreviation { suit: String, abbreviation: String, problem: AbbreviationProblem },
    /// An opt-in flag was written as `false`
    #[error(
        "The \"{field}\" property for the suit \"{suit}\" must be set to true. If it is intended to be false, then remove the property altogether"
    )]
    RedundantFalseFlag { suit: String, field: &'static str },
    /// An explicit clue color does not exist in the color registry
    #[error("The clue color \"{color}\" for the suit \"{suit}\" does not exist")]
    UnknownClueColor { suit: String, color: String },
    /// No clue colors given and nothing to derive them from
    #[error(
        "Failed to derive the clue colors for the \"{suit}\" suit (there is no corresponding color named \"{suit}\")"
    )]
    UnresolvableClueColors { suit: String },
    /// An explicit display name is empty
    #[error("The \"{suit}\" suit has an empty display name")]
    EmptyDisplayName { suit: String },
    /// An explicit fill is empty
    #[error("The fill property was empty for the \"{suit}\" suit; remove it to use the derived fill")]
    EmptyFill { suit: String },
    /// No fill given and nothing to derive it from
    #[error(
        "Failed to find the fill for the \"{suit}\" suit (there is no corresponding color named \"{suit}\" and this suit has no clue colors)"
    )]
    UnresolvableFill { suit: String },
    /// An explicit fill color list is empty
    #[error("The \"fillColors\" array for the suit \"{suit}\" is empty")]
    EmptyFillColors { suit: String },
    /// The pip is empty or missing on a suit other than "Unknown"
    #[error("The \"pip\" property for the suit \"{suit}\" is empty")]
    EmptyPip { suit: String },
    /// Two records would occupy the same registry key
    #[error("The suit key \"{key}\" is defined more than once")]
    DuplicateName { key: String },
}

/// Error when resolving the color catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ColorError {
    /// The catalog contains no records
    #[error("The color catalog did not have any elements in it")]
    EmptyCatalog,
    /// A record has an empty name
    #[error("There is a color with an empty name in the color catalog (record {index})")]
    EmptyName { index: usize },
    /// The given or derived abbreviation is unusable
    #[error("The \"{color}\" color has an abbreviation of \"{abbreviation}\" that {problem}")]
    InvalidAbbreviation { color: String, abbreviation: String, problem: AbbreviationProblem },
    /// The fill is empty
    #[error("The \"{color}\" color has an empty fill")]
    EmptyFill { color: String },
    /// An explicit colorblind fill is empty
    #[error("The \"{color}\" color has an empty \"fillColorblind\"; remove it to reuse the fill")]
    EmptyFillColorblind { color: String },
    /// Two records share a name
    #[error("The color \"{color}\" is defined more than once")]
    DuplicateName { color: String },
}
