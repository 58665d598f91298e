//! Error type for `biasboard-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] biasboard_core::Error),

  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("date/time parse error: {0}")]
  DateParse(String),
}

/// Collapse backend detail into the domain taxonomy so the HTTP layer can
/// classify errors without depending on this crate.
impl From<Error> for biasboard_core::Error {
  fn from(e: Error) -> Self {
    match e {
      Error::Core(inner) => inner,
      other => biasboard_core::Error::Storage(other.to_string()),
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
