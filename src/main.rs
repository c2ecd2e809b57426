//! hanabi-data - Command-line tool for validating suit and color catalogs

use std::process::ExitCode;

use hanabi_data::cli;

fn main() -> ExitCode {
    cli::run()
}
