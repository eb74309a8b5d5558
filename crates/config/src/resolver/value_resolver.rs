//! Payload-then-environment resolution for a single field.
//!
//! Invariants:
//! - A present payload literal is returned without consulting the environment.
//! - Resolved values are never logged; only the field name and winning source.

use tracing::{debug, trace};

use super::error::ResolveError;
use super::resolution::Resolution;
use super::value::{FieldKey, RawFieldValue, Scalar, parse_bool};
use crate::env::{EnvSource, ProcessEnv};

/// Resolves field values from a payload literal with an environment fallback.
#[derive(Debug, Clone, Default)]
pub struct ValueResolver<E = ProcessEnv> {
    env: E,
}

impl ValueResolver<ProcessEnv> {
    /// A resolver that falls back to the real process environment.
    pub fn from_process_env() -> Self {
        Self::new(ProcessEnv)
    }
}

impl<E: EnvSource> ValueResolver<E> {
    pub fn new(env: E) -> Self {
        Self { env }
    }

    pub fn env(&self) -> &E {
        &self.env
    }

    /// Resolve a string field.
    ///
    /// Returns the payload literal if present and non-empty, otherwise the
    /// value of `key.env_var`. Boolean literals resolve to `"true"`/`"false"`.
    ///
    /// # Errors
    ///
    /// `ResolveError::NotFound` when neither source has a value. Whether that
    /// is fatal is up to the caller.
    pub fn resolve_string(
        &self,
        raw: &RawFieldValue,
        key: FieldKey,
    ) -> Result<String, ResolveError> {
        match raw.present() {
            Some(Scalar::Text(value)) => {
                trace!(field = key.field, source = "payload", "resolved field");
                return Ok(value.clone());
            }
            Some(Scalar::Bool(value)) => {
                trace!(field = key.field, source = "payload", "resolved field");
                return Ok(value.to_string());
            }
            None => {}
        }

        match self.env.get(key.env_var) {
            Some(value) => {
                trace!(
                    field = key.field,
                    env_var = key.env_var,
                    source = "environment",
                    "resolved field"
                );
                Ok(value)
            }
            None => Err(ResolveError::NotFound {
                field: key.field,
                env_var: key.env_var,
            }),
        }
    }

    /// Resolve an optional boolean toggle.
    ///
    /// `Ok(None)` means neither source has a value; callers default to `false`.
    ///
    /// # Errors
    ///
    /// `ResolveError::InvalidFormat` when the winning source holds a string
    /// that is not a boolean literal.
    pub fn resolve_bool(
        &self,
        raw: &RawFieldValue,
        key: FieldKey,
    ) -> Result<Option<bool>, ResolveError> {
        let text = match raw.present() {
            Some(Scalar::Bool(value)) => {
                trace!(field = key.field, source = "payload", "resolved field");
                return Ok(Some(*value));
            }
            Some(Scalar::Text(value)) => {
                trace!(field = key.field, source = "payload", "resolved field");
                value.clone()
            }
            None => match self.env.get(key.env_var) {
                Some(value) => {
                    trace!(
                        field = key.field,
                        env_var = key.env_var,
                        source = "environment",
                        "resolved field"
                    );
                    value
                }
                None => return Ok(None),
            },
        };

        parse_bool(&text).map(Some).ok_or(ResolveError::InvalidFormat {
            field: key.field,
            env_var: key.env_var,
            value: text,
        })
    }

    /// Resolve a field that has a deprecated alias.
    ///
    /// Tries `primary` first; if that does not yield a non-empty value the
    /// outcome of resolving `legacy` is returned as-is.
    pub fn resolve_with_legacy(
        &self,
        primary: &RawFieldValue,
        primary_key: FieldKey,
        legacy: &RawFieldValue,
        legacy_key: FieldKey,
    ) -> Result<String, ResolveError> {
        match self.resolve_string(primary, primary_key) {
            Ok(value) if !value.is_empty() => Ok(value),
            _ => {
                debug!(
                    field = primary_key.field,
                    legacy = legacy_key.field,
                    "falling back to legacy field"
                );
                self.resolve_string(legacy, legacy_key)
            }
        }
    }

    /// Resolve a string field whose absence is not an error.
    pub fn resolve_advisory(&self, raw: &RawFieldValue, key: FieldKey) -> Resolution<String> {
        Resolution::best_effort(self.resolve_string(raw, key))
    }
}
