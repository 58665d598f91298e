//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! Every error renders as the `{success: false, message}` envelope the
//! frontend branches on. Database failures are logged with context and
//! surface as a generic 500.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use biasboard_core::Error as CoreError;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("{0}")]
  BadRequest(String),

  #[error("Invalid credentials")]
  Unauthorized,

  #[error("{0}")]
  NotFound(String),

  #[error("{0}")]
  Conflict(String),

  #[error("server error: {0}")]
  Internal(String),
}

impl ApiError {
  /// Classify a store failure into the HTTP taxonomy. Accepts any store
  /// error via its `Into<CoreError>` bound.
  pub fn from_store<E: Into<CoreError>>(e: E) -> Self {
    match e.into() {
      CoreError::UserNotFound(_) => ApiError::NotFound("User not found".into()),
      CoreError::BiasNotFound(_) | CoreError::RequestNotFound(_) => {
        ApiError::NotFound("Bias not found".into())
      }
      e @ CoreError::DuplicateUser(_) => ApiError::Conflict(e.to_string()),
      e @ CoreError::DuplicateBias => ApiError::Conflict(e.to_string()),
      // Enum text failing to decode out of storage is corrupt data, not a
      // caller mistake.
      e @ (CoreError::UnknownSeverity(_)
      | CoreError::UnknownSourceKind(_)
      | CoreError::Storage(_)) => ApiError::Internal(e.to_string()),
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match self {
      ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m),
      ApiError::Unauthorized => {
        (StatusCode::UNAUTHORIZED, "Invalid credentials".to_owned())
      }
      ApiError::NotFound(m) => (StatusCode::NOT_FOUND, m),
      ApiError::Conflict(m) => (StatusCode::CONFLICT, m),
      ApiError::Internal(detail) => {
        tracing::warn!(%detail, "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "Server error".to_owned())
      }
    };
    (status, Json(json!({ "success": false, "message": message })))
      .into_response()
  }
}
