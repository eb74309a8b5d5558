//! Rendering of the cloud-config file.
//!
//! Responsibilities:
//! - Render a `CloudConfig` to the gcfg/INI dialect read by the OpenStack
//!   cloud provider.
//! - Validate the kubelet version the config is generated for.
//!
//! Does NOT handle:
//! - Resolving values (see `assembler`).
//! - Writing the file to disk (callers own the output).
//!
//! Invariants:
//! - String values are always quoted and escaped.
//! - The kubelet version must parse; rendering fails otherwise.
//! - `node-volume-attach-limit` is only emitted when non-zero.

use secrecy::ExposeSecret;
use semver::Version;
use std::fmt::Write;
use thiserror::Error;

use crate::types::{CloudConfig, Credentials};

/// Errors that can occur while rendering.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("invalid kubelet version {version:?}: {source}")]
    InvalidVersion {
        version: String,
        #[source]
        source: semver::Error,
    },

    #[error("failed to format cloud-config")]
    Format(#[from] std::fmt::Error),
}

/// Parse a kubelet version such as `v1.30.2`, `1.30` or `v1.8.0-rc.1`.
///
/// The `v` prefix is optional and missing minor/patch components are zero.
pub fn parse_kubelet_version(raw: &str) -> Result<Version, RenderError> {
    let trimmed = raw.trim();
    let unprefixed = trimmed.strip_prefix('v').unwrap_or(trimmed);
    let split = unprefixed.find(['-', '+']).unwrap_or(unprefixed.len());
    let (core, suffix) = unprefixed.split_at(split);

    let padded = match core.split('.').count() {
        1 => format!("{core}.0.0{suffix}"),
        2 => format!("{core}.0{suffix}"),
        _ => unprefixed.to_string(),
    };

    Version::parse(&padded).map_err(|source| RenderError::InvalidVersion {
        version: raw.to_string(),
        source,
    })
}

/// Quote a value for gcfg, escaping backslashes, quotes and control characters.
pub fn ini_escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            other => out.push(other),
        }
    }
    out.push('"');
    out
}

impl CloudConfig {
    /// Render the config file.
    ///
    /// # Errors
    ///
    /// `RenderError::InvalidVersion` if `version` cannot be parsed.
    pub fn to_ini(&self) -> Result<String, RenderError> {
        parse_kubelet_version(&self.version)?;
        let global = &self.global;
        let lb = &self.load_balancer;
        let bs = &self.block_storage;

        let mut out = String::new();

        writeln!(out, "[Global]")?;
        writeln!(out, "auth-url    = {}", ini_escape(&global.auth_url))?;
        match &global.credentials {
            Credentials::ApplicationCredential { id, secret } => {
                writeln!(out, "application-credential-id     = {}", ini_escape(id))?;
                writeln!(
                    out,
                    "application-credential-secret = {}",
                    ini_escape(secret.expose_secret())
                )?;
            }
            Credentials::Password {
                username,
                password,
                project_name,
                project_id,
            } => {
                writeln!(out, "username    = {}", ini_escape(username))?;
                writeln!(out, "password    = {}", ini_escape(password.expose_secret()))?;
                writeln!(out, "tenant-name = {}", ini_escape(project_name))?;
                writeln!(out, "tenant-id   = {}", ini_escape(project_id))?;
            }
        }
        writeln!(out, "domain-name = {}", ini_escape(&global.domain_name))?;
        writeln!(out, "region      = {}", ini_escape(&global.region))?;
        writeln!(out)?;

        writeln!(out, "[LoadBalancer]")?;
        writeln!(out, "manage-security-groups = {}", lb.manage_security_groups)?;
        writeln!(out)?;

        writeln!(out, "[BlockStorage]")?;
        writeln!(out, "trust-device-path = {}", bs.trust_device_path)?;
        writeln!(out, "ignore-volume-az  = {}", bs.ignore_volume_az)?;
        writeln!(out, "bs-version        = {}", ini_escape(&bs.bs_version))?;
        if bs.node_volume_attach_limit > 0 {
            writeln!(out, "node-volume-attach-limit = {}", bs.node_volume_attach_limit)?;
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BlockStorageOpts, GlobalOpts, LoadBalancerOpts};
    use secrecy::SecretString;

    fn config(credentials: Credentials, version: &str) -> CloudConfig {
        CloudConfig {
            global: GlobalOpts {
                auth_url: "https://keystone.example.com:5000/v3".to_string(),
                credentials,
                domain_name: "Default".to_string(),
                region: "RegionOne".to_string(),
            },
            load_balancer: LoadBalancerOpts::default(),
            block_storage: BlockStorageOpts::default(),
            version: version.to_string(),
        }
    }

    fn password() -> Credentials {
        Credentials::Password {
            username: "alice".to_string(),
            password: SecretString::new("p\"w\\d".to_string().into()),
            project_name: "proj1".to_string(),
            project_id: "id1".to_string(),
        }
    }

    #[test]
    fn test_parse_kubelet_version_variants() {
        assert_eq!(parse_kubelet_version("v1.30.2").unwrap(), Version::new(1, 30, 2));
        assert_eq!(parse_kubelet_version("1.30").unwrap(), Version::new(1, 30, 0));
        assert_eq!(parse_kubelet_version("v1").unwrap(), Version::new(1, 0, 0));
        let rc = parse_kubelet_version("v1.8-rc.1").unwrap();
        assert_eq!((rc.major, rc.minor, rc.patch), (1, 8, 0));
        assert!(!rc.pre.is_empty());
    }

    #[test]
    fn test_parse_kubelet_version_rejects_garbage() {
        for raw in ["", "latest", "v1.x.0"] {
            let err = parse_kubelet_version(raw).unwrap_err();
            assert!(matches!(err, RenderError::InvalidVersion { .. }), "{raw}");
        }
    }

    #[test]
    fn test_ini_escape() {
        assert_eq!(ini_escape("plain"), "\"plain\"");
        assert_eq!(ini_escape(r#"a"b\c"#), r#""a\"b\\c""#);
        assert_eq!(ini_escape("line\nbreak"), r#""line\nbreak""#);
    }

    #[test]
    fn test_renders_password_mode() {
        let ini = config(password(), "v1.30.2").to_ini().unwrap();

        let expected = r#"[Global]
auth-url    = "https://keystone.example.com:5000/v3"
username    = "alice"
password    = "p\"w\\d"
tenant-name = "proj1"
tenant-id   = "id1"
domain-name = "Default"
region      = "RegionOne"

[LoadBalancer]
manage-security-groups = true

[BlockStorage]
trust-device-path = false
ignore-volume-az  = true
bs-version        = "auto"
"#;
        assert_eq!(ini, expected);
    }

    #[test]
    fn test_renders_application_credentials() {
        let credentials = Credentials::ApplicationCredential {
            id: "cred-1".to_string(),
            secret: SecretString::new("s3cr3t".to_string().into()),
        };
        let ini = config(credentials, "v1.30.2").to_ini().unwrap();

        assert!(ini.contains("application-credential-id     = \"cred-1\"\n"));
        assert!(ini.contains("application-credential-secret = \"s3cr3t\"\n"));
        assert!(!ini.contains("username"));
        assert!(!ini.contains("tenant-name"));
    }

    #[test]
    fn test_trust_device_path_rendered_for_any_kubelet() {
        for version in ["v1.8.4", "v1.9.0", "v1.30.2"] {
            let mut cfg = config(password(), version);
            cfg.block_storage.trust_device_path = true;
            assert!(cfg.to_ini().unwrap().contains("trust-device-path = true\n"), "{version}");
        }
    }

    #[test]
    fn test_load_balancer_section_has_only_security_groups() {
        let ini = config(password(), "v1.30.2").to_ini().unwrap();
        let section = ini
            .split("[LoadBalancer]\n")
            .nth(1)
            .and_then(|rest| rest.split("\n\n").next())
            .unwrap();
        assert_eq!(section, "manage-security-groups = true");
    }

    #[test]
    fn test_node_volume_attach_limit_only_when_set() {
        let mut cfg = config(password(), "v1.30.2");
        assert!(!cfg.to_ini().unwrap().contains("node-volume-attach-limit"));

        cfg.block_storage.node_volume_attach_limit = 5;
        assert!(cfg.to_ini().unwrap().ends_with("node-volume-attach-limit = 5\n"));
    }

    #[test]
    fn test_invalid_version_fails_render() {
        let err = config(password(), "not-a-version").to_ini().unwrap_err();
        assert!(err.to_string().contains("not-a-version"));
    }
}
