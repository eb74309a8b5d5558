//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that bootstrap scripts can branch on.
//! - Map `CloudConfigError`, `RenderError` and input errors to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-4 are reserved for specific error categories.

use osm_config::{CloudConfigError, RenderError, ResolveError};

use crate::commands::InputError;

/// Structured exit codes for osm-cli.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Invalid input - provider config missing, unreadable or malformed.
    InvalidInput = 2,

    /// Missing value - a mandatory field is set neither in the payload nor
    /// in the environment.
    ///
    /// Scripts should export the named `OS_*` variable and retry.
    MissingValue = 3,

    /// Invalid value - a boolean field or the kubelet version could not be parsed.
    InvalidValue = 4,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&CloudConfigError> for ExitCode {
    fn from(err: &CloudConfigError) -> Self {
        match err {
            CloudConfigError::MissingPayload | CloudConfigError::MalformedPayload(_) => {
                ExitCode::InvalidInput
            }
            CloudConfigError::Field { source, .. }
            | CloudConfigError::FieldWithLegacy { source, .. } => match source {
                ResolveError::NotFound { .. } => ExitCode::MissingValue,
                ResolveError::InvalidFormat { .. } => ExitCode::InvalidValue,
            },
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(config_err) = cause.downcast_ref::<CloudConfigError>() {
                return ExitCode::from(config_err);
            }
            if cause.downcast_ref::<RenderError>().is_some() {
                return ExitCode::InvalidValue;
            }
            if cause.downcast_ref::<InputError>().is_some() {
                return ExitCode::InvalidInput;
            }
        }

        ExitCode::GeneralError
    }
}
