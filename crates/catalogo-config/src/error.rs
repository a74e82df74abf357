use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading or interpreting client configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
  /// The configuration file could not be read.
  #[error("failed to read config file {path}: {source}")]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  /// The configuration file is not valid JSON for [`crate::ApiConfig`].
  #[error("invalid config: {0}")]
  Parse(#[from] serde_json::Error),

  /// The base URL is not an absolute http(s) URL.
  #[error("invalid base url '{url}': {message}")]
  InvalidBaseUrl { url: String, message: String },
}
