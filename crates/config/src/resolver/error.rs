//! Error types for single-field resolution.
//!
//! Invariants:
//! - Every variant names both the payload field and its environment variable.
//! - `InvalidFormat` only carries values of boolean-typed fields, never secrets.

use thiserror::Error;

/// Errors that can occur while resolving one field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("\"{field}\" is not set in the payload and {env_var} is not set in the environment")]
    NotFound {
        field: &'static str,
        env_var: &'static str,
    },

    #[error("invalid boolean {value:?} for \"{field}\" (env {env_var}): must be true or false")]
    InvalidFormat {
        field: &'static str,
        env_var: &'static str,
        value: String,
    },
}

impl ResolveError {
    /// The payload field this error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::NotFound { field, .. } | Self::InvalidFormat { field, .. } => field,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
