//! Validate command implementation

use std::process::ExitCode;

use crate::game_data::GameData;
use crate::registry::Registry;

use super::EXIT_SUCCESS;

/// Execute the validate command.
///
/// Resolution errors are reported before this runs; reaching it means both
/// catalogs resolved cleanly.
pub fn run_validate(data: &GameData) -> ExitCode {
    let special = data
        .suits
        .normal_suits()
        .filter(|s| s.all_clue_colors || s.no_clue_colors || s.prism)
        .count();

    println!(
        "OK: {} colors, {} suits ({} registry entries, {} with dynamic clue colors)",
        data.colors.len(),
        data.suits.normal_suits().count(),
        data.suits.len(),
        special
    );

    ExitCode::from(EXIT_SUCCESS)
}
