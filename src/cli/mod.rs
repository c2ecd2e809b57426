//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod list;
mod validate;

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use crate::config::{load_config, merge_cli_overrides, CliOverrides, Config};
use crate::game_data::GameData;

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// hanabi-data - Validate and inspect suit and color catalogs
#[derive(Parser)]
#[command(name = "hanabi-data")]
#[command(about = "Validate and inspect the suit and color catalogs of a Hanabi-style game")]
#[command(version)]
pub struct Cli {
    /// Path to hanabi-data.toml (default: search upward from the current directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Catalog locations that override the configuration
#[derive(clap::Args, Debug, Default, Clone)]
pub struct CatalogArgs {
    /// Color catalog file (.json or .json5)
    #[arg(long)]
    pub colors: Option<PathBuf>,

    /// Suit catalog file (.json or .json5)
    #[arg(long)]
    pub suits: Option<PathBuf>,
}

impl From<&CatalogArgs> for CliOverrides {
    fn from(args: &CatalogArgs) -> Self {
        CliOverrides { colors: args.colors.clone(), suits: args.suits.clone() }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve both catalogs and report the first error, if any
    Validate {
        #[command(flatten)]
        catalogs: CatalogArgs,
    },

    /// List resolved suits in catalog order
    List {
        #[command(flatten)]
        catalogs: CatalogArgs,

        /// Include the reversed variant of every suit
        #[arg(long)]
        reversed: bool,

        /// Print full suits as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a single resolved suit by its registry key (e.g. "Red Reversed")
    Show {
        /// Registry key of the suit
        name: String,

        #[command(flatten)]
        catalogs: CatalogArgs,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// List resolved colors in catalog order
    Colors {
        #[command(flatten)]
        catalogs: CatalogArgs,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match &cli.command {
        Commands::Validate { catalogs } => {
            load_game_data(&cli, catalogs).map(|data| validate::run_validate(&data))
        }
        Commands::List { catalogs, reversed, json } => {
            load_game_data(&cli, catalogs).map(|data| list::run_list(&data, *reversed, *json))
        }
        Commands::Show { name, catalogs, json } => {
            load_game_data(&cli, catalogs).map(|data| list::run_show(&data, name, *json))
        }
        Commands::Colors { catalogs, json } => {
            load_game_data(&cli, catalogs).map(|data| list::run_colors(&data, *json))
        }
    };

    result.unwrap_or_else(|code| code)
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

/// Load configuration and build the registries, mapping failures to exit codes.
fn load_game_data(cli: &Cli, catalogs: &CatalogArgs) -> Result<GameData, ExitCode> {
    let mut config: Config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Err(ExitCode::from(EXIT_INVALID_ARGS));
        }
    };
    merge_cli_overrides(&mut config, &CliOverrides::from(catalogs));

    GameData::from_config(&config).map_err(|e| {
        eprintln!("Error: {}", e);
        ExitCode::from(EXIT_ERROR)
    })
}
