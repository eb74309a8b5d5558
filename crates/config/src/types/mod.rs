//! Configuration types for OpenStack cloud-config generation.
//!
//! This module contains the inbound payload types (`ProviderConfig`,
//! `RawConfig`) and the resolved output record (`CloudConfig`).

pub mod auth;
pub mod cloud;
pub mod raw;

pub use auth::{AuthMode, Credentials};
pub use cloud::{BlockStorageOpts, CloudConfig, GlobalOpts, LoadBalancerOpts};
pub use raw::{ProviderConfig, RawConfig};
