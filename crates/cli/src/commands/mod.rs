//! Command implementations and dispatch.

mod inspect;
mod render;

use anyhow::Result;
use osm_config::ProviderConfig;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::args::{Cli, Commands};

/// Errors reading the provider config document.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("failed to read provider config {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse provider config {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Run the parsed command.
pub fn run_command(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Render {
            provider_config,
            kubelet_version,
            output_file,
        } => render::run(&provider_config, &kubelet_version, output_file.as_deref()),
        Commands::Inspect { provider_config } => inspect::run(&provider_config),
    }
}

/// Read a provider config from `path`, or from stdin when `path` is `-`.
pub fn read_provider_config(path: &Path) -> Result<ProviderConfig, InputError> {
    let read_err = |source| InputError::Read {
        path: path.to_path_buf(),
        source,
    };

    let content = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(read_err)?;
        buf
    } else {
        std::fs::read_to_string(path).map_err(read_err)?
    };

    ProviderConfig::from_json(&content).map_err(|source| InputError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
