//! Integration tests for cloud-config generation through the public API.
//!
//! These tests drive `render_cloud_config` end to end: provider JSON in,
//! rendered cloud-config text out, with environment fallbacks supplied by a
//! `MapEnv` so the process environment is never touched.

use osm_config::{
    AuthMode, CloudConfigError, GenerateError, MapEnv, ProviderConfig, ResolveError, ValueResolver,
    cloud_config, env_var_or_none, render_cloud_config,
};

const PASSWORD_PROVIDER: &str = r#"{
    "cloudProvider": "openstack",
    "cloudProviderSpec": {
        "identityEndpoint": "https://keystone.example.com:5000/v3",
        "username": "alice",
        "password": {"value": "pw"},
        "projectName": "proj1",
        "projectID": "id1",
        "region": "RegionOne",
        "flavor": "m1.small",
        "image": "ubuntu-24.04"
    }
}"#;

#[test]
fn test_render_from_provider_json() {
    let provider = ProviderConfig::from_json(PASSWORD_PROVIDER).unwrap();

    let ini = render_cloud_config(&provider, "v1.30.2", MapEnv::empty()).unwrap();

    assert!(ini.starts_with("[Global]\n"));
    assert!(ini.contains("username    = \"alice\"\n"));
    assert!(ini.contains("password    = \"pw\"\n"));
    assert!(ini.contains("tenant-name = \"proj1\"\n"));
    assert!(ini.contains("tenant-id   = \"id1\"\n"));
    assert!(ini.contains("region      = \"RegionOne\"\n"));
    assert!(ini.contains("domain-name = \"\"\n"));
}

/// Environment variables fill in whatever the payload leaves out.
#[test]
fn test_environment_completes_partial_payload() {
    let provider = ProviderConfig::from_json(
        r#"{"cloudProviderSpec": {"identityEndpoint": "https://keystone:5000/v3"}}"#,
    )
    .unwrap();
    let env = MapEnv::new([
        ("OS_APPLICATION_CREDENTIAL_ID", "cred-1"),
        ("OS_APPLICATION_CREDENTIAL_SECRET", "secret-1"),
        ("OS_DOMAIN_NAME", "Default"),
    ]);

    let resolver = ValueResolver::new(&env);
    let config = cloud_config(&provider, "1.29", &resolver).unwrap();
    assert_eq!(config.global.credentials.mode(), AuthMode::ApplicationCredential);
    assert_eq!(config.global.domain_name, "Default");

    let ini = render_cloud_config(&provider, "1.29", &env).unwrap();
    assert!(ini.contains("application-credential-id     = \"cred-1\""));
}

#[test]
fn test_missing_spec_is_reported() {
    let provider = ProviderConfig::from_json(r#"{"cloudProvider": "openstack"}"#).unwrap();
    let err = render_cloud_config(&provider, "v1.30.2", MapEnv::empty()).unwrap_err();
    assert!(matches!(err, GenerateError::Parse(CloudConfigError::MissingPayload)));
    assert!(err.to_string().starts_with("failed to parse config: "));
    assert!(err.to_string().contains("cannot be empty"));
}

#[test]
fn test_missing_secret_is_reported_by_field_name() {
    let provider = ProviderConfig::from_json(
        r#"{"cloudProviderSpec": {
            "identityEndpoint": "https://keystone:5000/v3",
            "applicationCredentialID": "cred-1"
        }}"#,
    )
    .unwrap();

    let err = render_cloud_config(&provider, "v1.30.2", MapEnv::empty()).unwrap_err();

    assert!(err.to_string().starts_with("failed to parse config: "));
    assert!(err.to_string().contains("applicationCredentialSecret"));
    assert!(matches!(
        err.resolve_error(),
        Some(ResolveError::NotFound {
            env_var: "OS_APPLICATION_CREDENTIAL_SECRET",
            ..
        })
    ));
}

#[test]
fn test_invalid_kubelet_version_is_render_error() {
    let provider = ProviderConfig::from_json(PASSWORD_PROVIDER).unwrap();
    let err = render_cloud_config(&provider, "latest", MapEnv::empty()).unwrap_err();
    assert!(matches!(err, GenerateError::Render(_)));
    assert!(err.to_string().starts_with("failed to convert cloud-config to string: "));
}

/// Test that env_var_or_none is exported and callable.
#[test]
fn test_env_var_or_none_exported() {
    let _result: Option<String> = env_var_or_none("OS_AUTH_URL");
}
