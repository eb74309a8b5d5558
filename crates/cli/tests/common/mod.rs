//! Shared test utilities for osm-cli integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Write provider config fixtures to temporary files.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper are hermetic: no `.env` file is
//!   loaded and no `OS_*` / `OSM_*` variables leak in from the host.

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Environment variables read by the resolver or by clap.
const HOST_VARS: &[&str] = &[
    "OS_REGION_NAME",
    "OS_DOMAIN_NAME",
    "OS_AUTH_URL",
    "OS_APPLICATION_CREDENTIAL_ID",
    "OS_APPLICATION_CREDENTIAL_SECRET",
    "OS_USER_NAME",
    "OS_PASSWORD",
    "OS_PROJECT_NAME",
    "OS_PROJECT_ID",
    "OS_TENANT_NAME",
    "OS_TENANT_ID",
    "OS_TRUST_DEVICE_PATH",
    "OSM_PROVIDER_CONFIG",
    "OSM_KUBELET_VERSION",
];

/// Returns a hermetic `osm-cli` command for integration testing.
pub fn osm_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("osm-cli");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    for var in HOST_VARS {
        cmd.env_remove(var);
    }

    cmd
}

/// Write `json` to `provider.json` inside a fresh temp dir.
///
/// The returned `TempDir` must be kept alive for the path to stay valid.
#[allow(dead_code)]
pub fn provider_file(json: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("provider.json");
    std::fs::write(&path, json).unwrap();
    (temp_dir, path)
}
