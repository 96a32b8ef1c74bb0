//! Shared library for cross-cutting concerns in the contact-harness suites.
//!
//! This crate provides centralized implementations for:
//! - Error types with retryability classification
//! - HTTP client configuration and building
//! - Deployment host map and environment selection
//! - Tracing integration for test runs

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod hosts;
pub mod http;
pub mod tracing_config;

pub use error::HarnessError;
pub use hosts::{DeployEnv, base_url_from_env};
pub use http::{HttpConfig, build_http_client};
pub use tracing_config::{TracingConfig, init_tracing};
