use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Turn a status and raw body into a decoded value.
///
/// - non-success status → [`ApiError::Status`], body ignored
/// - `204 No Content` or a blank body → `None`
/// - anything else is decoded as JSON
pub(crate) fn interpret<T: DeserializeOwned>(
  status: StatusCode,
  body: &[u8],
) -> Result<Option<T>, ApiError> {
  if !status.is_success() {
    return Err(ApiError::Status {
      status: status.as_u16(),
      status_text: status.canonical_reason().unwrap_or_default().to_string(),
    });
  }

  if status == StatusCode::NO_CONTENT || body.iter().all(u8::is_ascii_whitespace) {
    return Ok(None);
  }

  Ok(Some(serde_json::from_slice(body)?))
}
