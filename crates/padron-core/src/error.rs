//! Error types for `padron-core`.

use thiserror::Error;

/// Why a field was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
  #[error("is required")]
  Required,

  #[error("exceeds {max} characters")]
  TooLong { max: usize },

  #[error("has an invalid format")]
  InvalidFormat,

  #[error("{value:?} already exists")]
  Duplicate { value: String },
}

/// Client-supplied data failed a validation rule. Never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field} {violation}")]
pub struct ValidationError {
  pub field:     &'static str,
  pub violation: Violation,
}

impl ValidationError {
  pub fn new(field: &'static str, violation: Violation) -> Self {
    Self { field, violation }
  }

  pub fn required(field: &'static str) -> Self {
    Self::new(field, Violation::Required)
  }

  pub fn duplicate(field: &'static str, value: impl Into<String>) -> Self {
    Self::new(field, Violation::Duplicate { value: value.into() })
  }
}

/// Coarse classification of a failure, shared by every backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
  /// Invalid input, including duplicate unique keys.
  Validation,
  /// The update or delete target does not exist (or is soft-deleted).
  NotFound,
  /// Connectivity or engine-level failure.
  Storage,
}

pub type Result<T, E = ValidationError> = std::result::Result<T, E>;
