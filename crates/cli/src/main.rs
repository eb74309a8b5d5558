//! osm-cli - OpenStack cloud-config generator for node bootstrapping.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Resolve and render cloud-config files via the `osm-config` library.
//! - Report failures with structured exit codes.
//!
//! Does NOT handle:
//! - Field resolution rules (see `crates/config`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing so `.env` can provide clap
//!   defaults and `OS_*` fallbacks.
//! - Logs go to stderr; stdout carries only command output.

mod args;
mod commands;
mod error;

use args::Cli;
use clap::Parser;
use commands::run_command;
use error::{ExitCode, ExitCodeExt};
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    let dotenv_path = match osm_config::load_dotenv() {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Failed to load environment: {}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Some(path) = dotenv_path {
        debug!(path = %path.display(), "loaded .env file");
    }

    let exit_code = match run_command(cli) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
