//! Abbreviation rules shared by colors and suits.

use crate::notes::ReservedNotes;

use super::error::AbbreviationProblem;

/// Check that `abbreviation` is a single uppercase character that does not
/// collide with a reserved note word.
pub(crate) fn check_abbreviation(
    abbreviation: &str,
    reserved: &ReservedNotes,
) -> Result<(), AbbreviationProblem> {
    if abbreviation.chars().count() != 1 {
        return Err(AbbreviationProblem::WrongLength);
    }
    if abbreviation != abbreviation.to_uppercase() {
        return Err(AbbreviationProblem::NotUppercase);
    }
    if reserved.contains(abbreviation) {
        return Err(AbbreviationProblem::ReservedNote);
    }
    Ok(())
}

/// First character of `name` as a string, or empty when `name` is empty.
pub(crate) fn first_char(name: &str) -> String {
    name.chars().next().map(String::from).unwrap_or_default()
}
