//! Catalogo Config
//!
//! This crate contains the serializable client configuration for the catalog
//! API. Configuration can be loaded from:
//! - JSON files (via CLI with `--config=catalogo.json`)
//! - Defaults, pointing at the local API gateway
//!
//! The base URL can always be overridden after loading, so command-line flags
//! and environment variables win over the file.

mod api;
mod error;

pub use api::{ApiConfig, DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
pub use error::ConfigError;
