//! OpenStack cloud-config resolution for node bootstrapping.
//!
//! This crate resolves cloud-provider settings from a machine's
//! `cloudProviderSpec` payload, falling back to `OS_*` environment variables,
//! and renders the resulting cloud-config file.

mod assembler;
pub mod constants;
pub mod dotenv;
pub mod env;
pub mod render;
pub mod resolver;
pub mod types;

pub use assembler::{
    CloudConfigError, GenerateError, assemble, cloud_config, render_cloud_config,
};
pub use dotenv::{DotenvError, load_dotenv};
pub use env::{EnvSource, MapEnv, ProcessEnv, env_var_or_none};
pub use render::RenderError;
pub use resolver::{FieldKey, RawFieldValue, Resolution, ResolveError, ValueResolver};
pub use secrecy::{ExposeSecret, SecretString};
pub use types::{
    AuthMode, BlockStorageOpts, CloudConfig, Credentials, GlobalOpts, LoadBalancerOpts,
    ProviderConfig, RawConfig,
};
