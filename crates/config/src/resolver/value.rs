//! Payload literals and field keys.
//!
//! A payload field may be spelled as a bare scalar (`"RegionOne"`, `true`),
//! as an object carrying the scalar under `value` (`{"value": "RegionOne"}`),
//! or be `null` / missing. All of these collapse into [`RawFieldValue`].

use serde::{Deserialize, Deserializer};

/// Names a configuration field in both of its sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldKey {
    /// Key of the field in the provider payload.
    pub field: &'static str,
    /// Environment variable consulted when the payload has no value.
    pub env_var: &'static str,
}

impl FieldKey {
    pub const fn new(field: &'static str, env_var: &'static str) -> Self {
        Self { field, env_var }
    }
}

/// A literal scalar embedded in the payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scalar {
    Text(String),
    Bool(bool),
}

/// An optional payload literal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawFieldValue(Option<Scalar>);

impl RawFieldValue {
    /// No literal in the payload.
    pub const fn absent() -> Self {
        Self(None)
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self(Some(Scalar::Text(value.into())))
    }

    pub fn boolean(value: bool) -> Self {
        Self(Some(Scalar::Bool(value)))
    }

    /// The literal as written, including empty strings.
    pub fn literal(&self) -> Option<&Scalar> {
        self.0.as_ref()
    }

    /// The literal if it counts as present: booleans always do, strings only
    /// when non-empty.
    pub fn present(&self) -> Option<&Scalar> {
        match &self.0 {
            Some(Scalar::Text(s)) if s.is_empty() => None,
            other => other.as_ref(),
        }
    }
}

impl From<&str> for RawFieldValue {
    fn from(value: &str) -> Self {
        Self::text(value)
    }
}

impl From<String> for RawFieldValue {
    fn from(value: String) -> Self {
        Self::text(value)
    }
}

impl From<bool> for RawFieldValue {
    fn from(value: bool) -> Self {
        Self::boolean(value)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WireScalar {
    Bool(bool),
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WireField {
    Scalar(WireScalar),
    Object {
        #[serde(default)]
        value: Option<WireScalar>,
    },
}

impl From<WireScalar> for Scalar {
    fn from(wire: WireScalar) -> Self {
        match wire {
            WireScalar::Bool(b) => Scalar::Bool(b),
            WireScalar::Text(s) => Scalar::Text(s),
        }
    }
}

impl<'de> Deserialize<'de> for RawFieldValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let scalar = match Option::<WireField>::deserialize(deserializer)? {
            None => None,
            Some(WireField::Scalar(s)) => Some(s.into()),
            Some(WireField::Object { value }) => value.map(Scalar::from),
        };
        Ok(Self(scalar))
    }
}

/// Parse a boolean literal: `true`/`false`, `t`/`f` or `1`/`0`, case-insensitive.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "t" | "1" => Some(true),
        "false" | "f" | "0" => Some(false),
        _ => None,
    }
}
