//! Centralized constants for the OpenStack cloud-config resolver.
//!
//! Field keys pair the payload field name with the environment variable
//! that backs it. The environment variable names are a compatibility
//! surface shared with node bootstrap tooling and must not change.

use crate::resolver::FieldKey;

// =============================================================================
// Identity & Location
// =============================================================================

/// Identity service endpoint (Keystone auth URL).
pub const IDENTITY_ENDPOINT: FieldKey = FieldKey::new("identityEndpoint", "OS_AUTH_URL");

/// Region name. Advisory: may be defaulted downstream.
pub const REGION: FieldKey = FieldKey::new("region", "OS_REGION_NAME");

/// Domain name. Advisory: only required by Identity API v3.
pub const DOMAIN_NAME: FieldKey = FieldKey::new("domainName", "OS_DOMAIN_NAME");

// =============================================================================
// Authentication
// =============================================================================

pub const APPLICATION_CREDENTIAL_ID: FieldKey =
    FieldKey::new("applicationCredentialID", "OS_APPLICATION_CREDENTIAL_ID");

pub const APPLICATION_CREDENTIAL_SECRET: FieldKey =
    FieldKey::new("applicationCredentialSecret", "OS_APPLICATION_CREDENTIAL_SECRET");

pub const USERNAME: FieldKey = FieldKey::new("username", "OS_USER_NAME");

pub const PASSWORD: FieldKey = FieldKey::new("password", "OS_PASSWORD");

pub const PROJECT_NAME: FieldKey = FieldKey::new("projectName", "OS_PROJECT_NAME");

pub const PROJECT_ID: FieldKey = FieldKey::new("projectID", "OS_PROJECT_ID");

/// Legacy alias for [`PROJECT_NAME`].
pub const TENANT_NAME: FieldKey = FieldKey::new("tenantName", "OS_TENANT_NAME");

/// Legacy alias for [`PROJECT_ID`].
pub const TENANT_ID: FieldKey = FieldKey::new("tenantID", "OS_TENANT_ID");

// =============================================================================
// Block Storage
// =============================================================================

pub const TRUST_DEVICE_PATH: FieldKey = FieldKey::new("trustDevicePath", "OS_TRUST_DEVICE_PATH");

/// Block storage API version selection.
pub const DEFAULT_BS_VERSION: &str = "auto";

// =============================================================================
// Dotenv
// =============================================================================

/// Setting this to `1` or `true` skips `.env` loading.
pub const DOTENV_DISABLED: &str = "DOTENV_DISABLED";
