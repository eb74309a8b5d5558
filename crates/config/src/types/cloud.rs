//! Resolved cloud-config record.
//!
//! Responsibilities:
//! - Define the `[Global]`, `[LoadBalancer]` and `[BlockStorage]` sections.
//! - Provide the fixed defaults applied to every generated config.
//!
//! Does NOT handle:
//! - Resolving values from payload or environment (see `assembler`).
//! - Rendering to text (see `render`).
//!
//! Invariants:
//! - A `CloudConfig` is built once per resolution pass and not mutated after.
//! - Absent optional values are zero values (empty string, `false`, `0`).

use crate::constants::DEFAULT_BS_VERSION;
use crate::types::auth::Credentials;

/// Complete cloud-config handed to the renderer.
#[derive(Debug, Clone)]
pub struct CloudConfig {
    pub global: GlobalOpts,
    pub load_balancer: LoadBalancerOpts,
    pub block_storage: BlockStorageOpts,
    /// Kubelet version the config is generated for.
    pub version: String,
}

/// `[Global]` section.
#[derive(Debug, Clone)]
pub struct GlobalOpts {
    pub auth_url: String,
    pub credentials: Credentials,
    /// Empty when unresolved.
    pub domain_name: String,
    /// Empty when unresolved; defaulted by the consumer.
    pub region: String,
}

/// `[LoadBalancer]` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadBalancerOpts {
    pub manage_security_groups: bool,
}

impl Default for LoadBalancerOpts {
    fn default() -> Self {
        Self {
            manage_security_groups: true,
        }
    }
}

/// `[BlockStorage]` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockStorageOpts {
    pub bs_version: String,
    pub trust_device_path: bool,
    pub ignore_volume_az: bool,
    /// `0` means "not set" and is omitted from the rendered file.
    pub node_volume_attach_limit: u64,
}

impl Default for BlockStorageOpts {
    fn default() -> Self {
        Self {
            bs_version: DEFAULT_BS_VERSION.to_string(),
            trust_device_path: false,
            ignore_volume_az: true,
            node_volume_attach_limit: 0,
        }
    }
}
