//! Field value resolution with environment fallback.
//!
//! Responsibilities:
//! - Model optional payload literals (`RawFieldValue`).
//! - Resolve one field from the payload literal, falling back to a named
//!   environment variable (`ValueResolver`).
//! - Express the fatal vs. advisory error policy (`ResolveError`, `Resolution`).
//!
//! Does NOT handle:
//! - Knowing which fields are mandatory (see `assembler`).
//! - Reading the process environment directly (see `env`).
//!
//! Invariants / Assumptions:
//! - The payload literal always wins when it is present and non-empty.
//! - At most two keys are consulted per field (primary, then legacy).
//! - Resolution is a pure function of the payload and the `EnvSource`.

mod error;
mod resolution;
mod value;
mod value_resolver;

pub use error::ResolveError;
pub use resolution::Resolution;
pub use value::{FieldKey, RawFieldValue, Scalar, parse_bool};
pub use value_resolver::ValueResolver;
