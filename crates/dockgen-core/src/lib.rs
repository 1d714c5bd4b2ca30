//! Core types and configuration for dockgen.
//!
//! This crate defines the supported base-image [`Platform`]s, the answers
//! collected for one Dockerfile ([`AppMeta`]), the `dockgen.toml` schema
//! ([`DockgenConfig`]), and shared error types.

pub mod config;
pub mod error;
pub mod meta;
pub mod platform;

pub use config::{DockgenConfig, OutputConfig, TemplateConfig, UiConfig};
pub use error::{Error, Result};
pub use meta::AppMeta;
pub use platform::{Platform, is_valid_platform};
