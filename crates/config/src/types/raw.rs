//! Inbound payload types.
//!
//! Responsibilities:
//! - Deserialize the machine-level provider document (`ProviderConfig`).
//! - Deserialize the OpenStack-specific `cloudProviderSpec` (`RawConfig`).
//!
//! Does NOT handle:
//! - Environment fallback or mandatory-field checks (see `resolver`, `assembler`).
//!
//! Invariants:
//! - Unknown keys are ignored; the payload schema belongs to the machine controller.
//! - `Debug` output never includes the password or application-credential secret.

use serde::Deserialize;
use serde_json::Value;

use crate::resolver::RawFieldValue;

/// Provider document embedded in a machine specification.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderConfig {
    /// Cloud provider name, e.g. `openstack`.
    #[serde(default)]
    pub cloud_provider: Option<String>,
    /// Opaque provider-specific payload. `None` when absent or `null`.
    #[serde(default)]
    pub cloud_provider_spec: Option<Value>,
}

impl ProviderConfig {
    /// Wrap an OpenStack payload.
    pub fn with_spec(spec: Value) -> Self {
        Self {
            cloud_provider: Some("openstack".to_string()),
            cloud_provider_spec: Some(spec),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// OpenStack fields read from `cloudProviderSpec`.
#[derive(Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawConfig {
    pub identity_endpoint: RawFieldValue,
    #[serde(rename = "applicationCredentialID")]
    pub application_credential_id: RawFieldValue,
    pub application_credential_secret: RawFieldValue,
    pub username: RawFieldValue,
    pub password: RawFieldValue,
    pub domain_name: RawFieldValue,
    pub project_name: RawFieldValue,
    #[serde(rename = "projectID")]
    pub project_id: RawFieldValue,
    pub tenant_name: RawFieldValue,
    #[serde(rename = "tenantID")]
    pub tenant_id: RawFieldValue,
    pub region: RawFieldValue,
    pub trust_device_path: RawFieldValue,
    pub node_volume_attach_limit: Option<u64>,
}

impl RawConfig {
    /// Decode the payload value.
    pub fn from_spec(spec: &Value) -> Result<Self, serde_json::Error> {
        Self::deserialize(spec)
    }
}

impl std::fmt::Debug for RawConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let redact = |v: &RawFieldValue| v.present().map(|_| "[REDACTED]");
        f.debug_struct("RawConfig")
            .field("identity_endpoint", &self.identity_endpoint)
            .field("application_credential_id", &self.application_credential_id)
            .field(
                "application_credential_secret",
                &redact(&self.application_credential_secret),
            )
            .field("username", &self.username)
            .field("password", &redact(&self.password))
            .field("domain_name", &self.domain_name)
            .field("project_name", &self.project_name)
            .field("project_id", &self.project_id)
            .field("tenant_name", &self.tenant_name)
            .field("tenant_id", &self.tenant_id)
            .field("region", &self.region)
            .field("trust_device_path", &self.trust_device_path)
            .field("node_volume_attach_limit", &self.node_volume_attach_limit)
            .finish()
    }
}
