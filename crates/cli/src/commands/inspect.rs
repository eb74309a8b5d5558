//! Inspect command: print the resolved config as JSON with secrets redacted.

use anyhow::{Context, Result};
use osm_config::{CloudConfig, Credentials, ValueResolver, cloud_config};
use serde_json::{Value, json};
use std::path::Path;

use super::read_provider_config;

const REDACTED: &str = "[REDACTED]";

pub fn run(provider_config: &Path) -> Result<()> {
    let provider =
        read_provider_config(provider_config).context("failed to load provider config")?;

    let resolver = ValueResolver::from_process_env();
    let config = cloud_config(&provider, "", &resolver).context("failed to resolve cloud-config")?;

    println!("{}", serde_json::to_string_pretty(&summary(&config))?);
    Ok(())
}

fn summary(config: &CloudConfig) -> Value {
    let global = &config.global;
    let credentials = match &global.credentials {
        Credentials::ApplicationCredential { id, .. } => json!({
            "applicationCredentialID": id,
            "applicationCredentialSecret": REDACTED,
        }),
        Credentials::Password {
            username,
            project_name,
            project_id,
            ..
        } => json!({
            "username": username,
            "password": REDACTED,
            "projectName": project_name,
            "projectID": project_id,
        }),
    };

    let mut warnings = Vec::new();
    if global.region.is_empty() {
        warnings.push("region is not set; the cloud provider default applies");
    }
    if global.domain_name.is_empty() {
        warnings.push("domainName is not set; required for Identity API v3");
    }

    json!({
        "authMode": global.credentials.mode().as_str(),
        "authURL": global.auth_url,
        "region": global.region,
        "domainName": global.domain_name,
        "credentials": credentials,
        "loadBalancer": {
            "manageSecurityGroups": config.load_balancer.manage_security_groups,
        },
        "blockStorage": {
            "bsVersion": config.block_storage.bs_version,
            "trustDevicePath": config.block_storage.trust_device_path,
            "ignoreVolumeAZ": config.block_storage.ignore_volume_az,
            "nodeVolumeAttachLimit": config.block_storage.node_volume_attach_limit,
        },
        "warnings": warnings,
    })
}
