//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and their environment variable defaults.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `commands` module).
//! - Does not read `OS_*` fallbacks (resolved inside `osm-config`).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "osm-cli")]
#[command(
    about = "Generate OpenStack cloud-config files for node bootstrapping",
    long_about = None
)]
#[command(version)]
#[command(
    after_help = "Examples:\n  osm-cli render -c provider.json -k v1.30.2\n  cat provider.json | osm-cli render -c - -k 1.30 -o cloud-config\n  OS_PASSWORD=secret osm-cli inspect -c provider.json\n"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the cloud-config file
    Render {
        /// Provider config JSON file, or `-` for stdin
        #[arg(short = 'c', long, env = "OSM_PROVIDER_CONFIG", value_name = "FILE")]
        provider_config: PathBuf,

        /// Kubelet version the config is generated for (e.g., v1.30.2)
        #[arg(short, long, env = "OSM_KUBELET_VERSION")]
        kubelet_version: String,

        /// Write the rendered config to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output_file: Option<PathBuf>,
    },

    /// Show how the configuration resolves, with secrets redacted
    Inspect {
        /// Provider config JSON file, or `-` for stdin
        #[arg(short = 'c', long, env = "OSM_PROVIDER_CONFIG", value_name = "FILE")]
        provider_config: PathBuf,
    },
}
