//! Advisory resolution outcome.
//!
//! Fatal lookups use `Result<T, ResolveError>` and abort the pass. Advisory
//! lookups (region, domain name) convert that result into a [`Resolution`],
//! which always carries a usable value and keeps the failure as a diagnostic.

use super::error::ResolveError;

/// Outcome of a best-effort lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<T> {
    /// A value was found.
    Resolved(T),
    /// Nothing usable was found; `value` holds the zero value.
    Degraded { value: T, diagnostic: ResolveError },
}

impl<T: Default> Resolution<T> {
    /// Degrade any failure to the zero value of `T`.
    pub fn best_effort(result: Result<T, ResolveError>) -> Self {
        match result {
            Ok(value) => Self::Resolved(value),
            Err(diagnostic) => Self::Degraded {
                value: T::default(),
                diagnostic,
            },
        }
    }
}

impl<T: Default> From<Result<T, ResolveError>> for Resolution<T> {
    fn from(result: Result<T, ResolveError>) -> Self {
        Self::best_effort(result)
    }
}

impl<T> Resolution<T> {
    pub fn value(&self) -> &T {
        match self {
            Self::Resolved(value) | Self::Degraded { value, .. } => value,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Self::Resolved(value) | Self::Degraded { value, .. } => value,
        }
    }

    pub fn diagnostic(&self) -> Option<&ResolveError> {
        match self {
            Self::Resolved(_) => None,
            Self::Degraded { diagnostic, .. } => Some(diagnostic),
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded { .. })
    }
}
