use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ConfigError;

/// Base URL of the API gateway when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// User agent sent with every request unless configured.
pub const DEFAULT_USER_AGENT: &str = concat!("catalogo/", env!("CARGO_PKG_VERSION"));

/// Settings for the catalog API client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
  /// Root every resource path is resolved against, e.g. "http://localhost:8080/api"
  #[serde(default = "default_base_url")]
  pub base_url: String,

  /// Optional per-request timeout.
  /// If not specified, requests wait for the transport to give up.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub timeout_ms: Option<u64>,

  #[serde(default = "default_user_agent")]
  pub user_agent: String,
}

fn default_base_url() -> String {
  DEFAULT_BASE_URL.to_string()
}

fn default_user_agent() -> String {
  DEFAULT_USER_AGENT.to_string()
}

impl Default for ApiConfig {
  fn default() -> Self {
    Self {
      base_url: default_base_url(),
      timeout_ms: None,
      user_agent: default_user_agent(),
    }
  }
}

impl ApiConfig {
  /// Parse a configuration from JSON text. Missing fields take their defaults.
  pub fn from_json(content: &str) -> Result<Self, ConfigError> {
    Ok(serde_json::from_str(content)?)
  }

  /// Read and parse a JSON configuration file.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
      path: path.to_path_buf(),
      source,
    })?;
    Self::from_json(&content)
  }

  /// Replace the base URL, keeping every other setting.
  pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
    self.base_url = base_url.into();
    self
  }

  /// The base URL, validated and normalized with a trailing slash so that
  /// resource paths join below it instead of replacing its last segment.
  pub fn resolved_base_url(&self) -> Result<Url, ConfigError> {
    let invalid = |message: String| ConfigError::InvalidBaseUrl {
      url: self.base_url.clone(),
      message,
    };

    let mut url = Url::parse(self.base_url.trim()).map_err(|e| invalid(e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
      return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    if url.cannot_be_a_base() {
      return Err(invalid("url cannot be used as a base".to_string()));
    }

    if !url.path().ends_with('/') {
      let path = format!("{}/", url.path());
      url.set_path(&path);
    }

    Ok(url)
  }
}
