//! Error type for `padron-store-sqlite`.

use padron_core::{ErrorKind, ValidationError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("validation error: {0}")]
  Validation(#[from] ValidationError),

  /// The connection thread is gone or could not be reached.
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  /// The engine rejected a statement (constraint, trigger, I/O).
  #[error("sqlite error: {0}")]
  Sqlite(#[from] rusqlite::Error),

  #[error("empresa not found: {0}")]
  EmpresaNotFound(i64),

  #[error("domicilio fiscal not found: {0}")]
  DomicilioNotFound(i64),

  #[error("empresa {0} already has a domicilio fiscal")]
  DomicilioAlreadyLinked(i64),
}

impl Error {
  pub fn kind(&self) -> ErrorKind {
    match self {
      Self::Validation(_) => ErrorKind::Validation,
      Self::EmpresaNotFound(_) | Self::DomicilioNotFound(_) => ErrorKind::NotFound,
      Self::Database(_) | Self::Sqlite(_) | Self::DomicilioAlreadyLinked(_) => {
        ErrorKind::Storage
      }
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
