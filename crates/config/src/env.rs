//! Environment variable lookup capability.
//!
//! Responsibilities:
//! - Abstract environment variable reads behind the [`EnvSource`] trait.
//! - Provide the process-backed [`ProcessEnv`] and the map-backed [`MapEnv`].
//!
//! Does NOT handle:
//! - Deciding precedence between payload literals and environment values
//!   (see `resolver`).
//! - Loading `.env` files (see `dotenv`).
//!
//! Invariants:
//! - Empty or whitespace-only values are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Lookups never mutate the environment.

use std::collections::HashMap;

/// Read-only key/value lookup used in place of the process environment.
pub trait EnvSource {
    /// Return the value of `name`, or `None` if unset, empty or whitespace-only.
    fn get(&self, name: &str) -> Option<String>;
}

impl<E: EnvSource + ?Sized> EnvSource for &E {
    fn get(&self, name: &str) -> Option<String> {
        (**self).get(name)
    }
}

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(non_blank)
}

fn non_blank(s: String) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == s.len() {
        Some(s)
    } else {
        Some(trimmed.to_string())
    }
}

/// Reads from the real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        env_var_or_none(name)
    }
}

/// Environment backed by explicit key/value pairs.
///
/// Lets callers resolve against a fixed snapshot without touching
/// `std::env`, which keeps tests deterministic.
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    pub fn new(vars: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>) -> Self {
        Self {
            vars: vars
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// An environment with no variables set.
    pub fn empty() -> Self {
        Self::default()
    }
}

impl EnvSource for MapEnv {
    fn get(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned().and_then(non_blank)
    }
}
