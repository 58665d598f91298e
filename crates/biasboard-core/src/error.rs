//! Error types for `biasboard-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("user not found: {0}")]
  UserNotFound(i64),

  #[error("User name already exists, try another name")]
  DuplicateUser(String),

  #[error("bias record not found: {0}")]
  BiasNotFound(i64),

  #[error("pending request not found: {0}")]
  RequestNotFound(i64),

  #[error("Bias already exists!")]
  DuplicateBias,

  #[error("unknown severity: {0:?}")]
  UnknownSeverity(String),

  #[error("unknown source kind: {0:?}")]
  UnknownSourceKind(String),

  #[error("storage error: {0}")]
  Storage(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
