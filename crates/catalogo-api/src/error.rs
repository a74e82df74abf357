use catalogo_config::ConfigError;
use thiserror::Error;

/// Errors that can occur when talking to the catalog API.
#[derive(Debug, Error)]
pub enum ApiError {
  /// The server answered with a non-success status.
  #[error("http error: {status} {status_text}")]
  Status { status: u16, status_text: String },

  /// The request never produced a response (connection refused, timeout, ...).
  #[error("transport error: {0}")]
  Transport(#[from] reqwest::Error),

  /// The body could not be encoded or decoded as JSON.
  #[error("invalid json: {0}")]
  Json(#[from] serde_json::Error),

  /// A record was expected but the server sent no content.
  #[error("empty response from {path}")]
  MissingBody { path: String },

  /// The request URL could not be built.
  #[error("invalid request url: {0}")]
  InvalidUrl(#[from] url::ParseError),

  /// The client configuration is unusable.
  #[error(transparent)]
  Config(#[from] ConfigError),
}

impl ApiError {
  /// HTTP status code, when the failure came from a response.
  pub fn status(&self) -> Option<u16> {
    match self {
      ApiError::Status { status, .. } => Some(*status),
      _ => None,
    }
  }
}
