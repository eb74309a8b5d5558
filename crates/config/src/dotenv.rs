//! `.env` file loading.
//!
//! Responsibilities:
//! - Load `OS_*` fallbacks from a `.env` file into the process environment.
//! - Honour the `DOTENV_DISABLED` gate.
//!
//! Invariants:
//! - Missing `.env` files are not an error.
//! - Errors NEVER include raw `.env` line contents to prevent secret leakage.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

use crate::constants::DOTENV_DISABLED;
use crate::env::env_var_or_none;

/// Errors that can occur while loading a `.env` file.
#[derive(Error, Debug)]
pub enum DotenvError {
    /// SAFETY: only the byte index of the failure is kept, never the line.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    Parse { error_index: usize },

    #[error("Failed to read .env file: {kind}")]
    Io { kind: ErrorKind },

    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    Unknown,
}

/// Check if dotenv loading is disabled via environment variable.
pub fn dotenv_disabled() -> bool {
    matches!(
        env_var_or_none(DOTENV_DISABLED).as_deref(),
        Some("true") | Some("1")
    )
}

/// Load environment variables from a `.env` file if present.
///
/// Returns the path of the loaded file, or `None` when loading is disabled
/// or no file was found. Variables already set in the environment win.
pub fn load_dotenv() -> Result<Option<PathBuf>, DotenvError> {
    if dotenv_disabled() {
        return Ok(None);
    }

    match dotenvy::dotenv() {
        Ok(path) => Ok(Some(path)),
        Err(e) if is_not_found(&e) => Ok(None),
        Err(dotenvy::Error::LineParse(_, idx)) => Err(DotenvError::Parse { error_index: idx }),
        Err(dotenvy::Error::Io(io_err)) => Err(DotenvError::Io {
            kind: io_err.kind(),
        }),
        Err(_) => Err(DotenvError::Unknown),
    }
}

fn is_not_found(err: &dotenvy::Error) -> bool {
    matches!(
        err,
        dotenvy::Error::Io(io_err) if io_err.kind() == ErrorKind::NotFound
    )
}
