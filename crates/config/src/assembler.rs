//! Cloud-config assembly from a provider payload.
//!
//! Responsibilities:
//! - Check that the provider payload is present and decode it.
//! - Resolve every field through `ValueResolver`, applying the per-field
//!   policy (mandatory, advisory, optional toggle, legacy alias).
//! - Select exactly one credential mode.
//!
//! Does NOT handle:
//! - Reading files or the process environment (callers pass an `EnvSource`).
//! - Text rendering (see `render`).
//!
//! Invariants:
//! - A missing payload is reported before any field is resolved.
//! - The first fatal field error aborts the pass; no partial config escapes.
//! - Region and domain name never fail the pass.

use secrecy::SecretString;
use thiserror::Error;
use tracing::debug;

use crate::constants::{
    APPLICATION_CREDENTIAL_ID, APPLICATION_CREDENTIAL_SECRET, DOMAIN_NAME, IDENTITY_ENDPOINT,
    PASSWORD, PROJECT_ID, PROJECT_NAME, REGION, TENANT_ID, TENANT_NAME, TRUST_DEVICE_PATH,
    USERNAME,
};
use crate::env::EnvSource;
use crate::render::RenderError;
use crate::resolver::{FieldKey, ResolveError, ValueResolver};
use crate::types::{
    BlockStorageOpts, CloudConfig, Credentials, GlobalOpts, LoadBalancerOpts, ProviderConfig,
    RawConfig,
};

/// Errors that abort cloud-config generation.
#[derive(Error, Debug)]
pub enum CloudConfigError {
    #[error("cloudProviderSpec in the MachineDeployment cannot be empty")]
    MissingPayload,

    #[error("failed to decode cloudProviderSpec: {0}")]
    MalformedPayload(#[source] serde_json::Error),

    #[error("failed to get the value of \"{field}\" field: {source}")]
    Field {
        field: &'static str,
        #[source]
        source: ResolveError,
    },

    #[error(
        "failed to get the value of \"{field}\" field or fallback to \"{legacy}\" field: {source}"
    )]
    FieldWithLegacy {
        field: &'static str,
        legacy: &'static str,
        #[source]
        source: ResolveError,
    },
}

impl CloudConfigError {
    fn field(key: FieldKey) -> impl FnOnce(ResolveError) -> Self {
        move |source| Self::Field {
            field: key.field,
            source,
        }
    }

    fn legacy(primary: FieldKey, legacy: FieldKey) -> impl FnOnce(ResolveError) -> Self {
        move |source| Self::FieldWithLegacy {
            field: primary.field,
            legacy: legacy.field,
            source,
        }
    }

    /// The underlying field resolution error, if any.
    pub fn resolve_error(&self) -> Option<&ResolveError> {
        match self {
            Self::Field { source, .. } | Self::FieldWithLegacy { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Errors from [`render_cloud_config`], split by stage.
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("failed to parse config: {0}")]
    Parse(#[source] CloudConfigError),

    #[error("failed to convert cloud-config to string: {0}")]
    Render(#[source] RenderError),
}

impl GenerateError {
    /// The underlying field resolution error, if any.
    pub fn resolve_error(&self) -> Option<&ResolveError> {
        match self {
            Self::Parse(err) => err.resolve_error(),
            Self::Render(_) => None,
        }
    }
}

/// Resolve and render the cloud-config file for `provider`.
///
/// Environment fallbacks are read from `env`.
pub fn render_cloud_config<E: EnvSource>(
    provider: &ProviderConfig,
    kubelet_version: &str,
    env: E,
) -> Result<String, GenerateError> {
    let resolver = ValueResolver::new(env);
    let config =
        cloud_config(provider, kubelet_version, &resolver).map_err(GenerateError::Parse)?;
    config.to_ini().map_err(GenerateError::Render)
}

/// Resolve the structured cloud-config for `provider`.
pub fn cloud_config<E: EnvSource>(
    provider: &ProviderConfig,
    kubelet_version: &str,
    resolver: &ValueResolver<E>,
) -> Result<CloudConfig, CloudConfigError> {
    let spec = provider
        .cloud_provider_spec
        .as_ref()
        .ok_or(CloudConfigError::MissingPayload)?;
    let raw = RawConfig::from_spec(spec).map_err(CloudConfigError::MalformedPayload)?;
    assemble(&raw, kubelet_version, resolver)
}

/// Build a [`CloudConfig`] from an already decoded payload.
pub fn assemble<E: EnvSource>(
    raw: &RawConfig,
    kubelet_version: &str,
    resolver: &ValueResolver<E>,
) -> Result<CloudConfig, CloudConfigError> {
    let region = resolver.resolve_advisory(&raw.region, REGION);
    if region.is_degraded() {
        debug!(
            field = REGION.field,
            env_var = REGION.env_var,
            "region not found in payload or environment, leaving it empty"
        );
    }

    // Only required by Identity API v3.
    let domain_name = resolver
        .resolve_advisory(&raw.domain_name, DOMAIN_NAME)
        .into_value();

    let auth_url = resolver
        .resolve_string(&raw.identity_endpoint, IDENTITY_ENDPOINT)
        .map_err(CloudConfigError::field(IDENTITY_ENDPOINT))?;

    let trust_device_path = resolver
        .resolve_bool(&raw.trust_device_path, TRUST_DEVICE_PATH)
        .map_err(CloudConfigError::field(TRUST_DEVICE_PATH))?
        .unwrap_or(false);

    let credentials = select_credentials(raw, resolver)?;

    let mut block_storage = BlockStorageOpts {
        trust_device_path,
        ..BlockStorageOpts::default()
    };
    if let Some(limit) = raw.node_volume_attach_limit {
        block_storage.node_volume_attach_limit = limit;
    }

    Ok(CloudConfig {
        global: GlobalOpts {
            auth_url,
            credentials,
            domain_name,
            region: region.into_value(),
        },
        load_balancer: LoadBalancerOpts::default(),
        block_storage,
        version: kubelet_version.to_string(),
    })
}

/// Pick application-credential or username/password authentication.
fn select_credentials<E: EnvSource>(
    raw: &RawConfig,
    resolver: &ValueResolver<E>,
) -> Result<Credentials, CloudConfigError> {
    let application_credential_id = resolver
        .resolve_string(&raw.application_credential_id, APPLICATION_CREDENTIAL_ID)
        .unwrap_or_default();

    if !application_credential_id.is_empty() {
        debug!("applicationCredentialID found, using application credential authentication");
        let secret = resolver
            .resolve_string(
                &raw.application_credential_secret,
                APPLICATION_CREDENTIAL_SECRET,
            )
            .map_err(CloudConfigError::field(APPLICATION_CREDENTIAL_SECRET))?;
        return Ok(Credentials::ApplicationCredential {
            id: application_credential_id,
            secret: SecretString::new(secret.into()),
        });
    }

    debug!("no applicationCredentialID, using username/password authentication");
    let username = resolver
        .resolve_string(&raw.username, USERNAME)
        .map_err(CloudConfigError::field(USERNAME))?;
    let password = resolver
        .resolve_string(&raw.password, PASSWORD)
        .map_err(CloudConfigError::field(PASSWORD))?;
    let project_name = resolver
        .resolve_with_legacy(&raw.project_name, PROJECT_NAME, &raw.tenant_name, TENANT_NAME)
        .map_err(CloudConfigError::legacy(PROJECT_NAME, TENANT_NAME))?;
    let project_id = resolver
        .resolve_with_legacy(&raw.project_id, PROJECT_ID, &raw.tenant_id, TENANT_ID)
        .map_err(CloudConfigError::legacy(PROJECT_ID, TENANT_ID))?;

    Ok(Credentials::Password {
        username,
        password: SecretString::new(password.into()),
        project_name,
        project_id,
    })
}
