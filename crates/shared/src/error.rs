use thiserror::Error;

/// Every failure a run can end with. None of them are retried.
#[derive(Debug, Error)]
pub enum AppError {
  /// Missing or invalid configuration: credential, env value, sentence set.
  #[error("configuration error: {0}")]
  Configuration(String),
  /// The embedding service failed, timed out, or answered with a response
  /// whose shape does not match the request.
  #[error("embedding provider error: {0}")]
  Provider(String),
  /// Two vectors of unequal length were compared.
  #[error("dimension mismatch: expected {expected}, got {actual}")]
  DimensionMismatch { expected: usize, actual: usize },
  /// The caller broke the provider's input contract.
  #[error("invalid input: {0}")]
  InvalidInput(String),
}

impl AppError {
  /// Collapse any error (and its context chain) into a `Provider` error.
  pub fn provider<E: Into<anyhow::Error>>(err: E) -> Self {
    Self::Provider(format!("{:#}", err.into()))
  }

  #[must_use]
  pub const fn is_configuration(&self) -> bool {
    matches!(self, Self::Configuration(_))
  }
}
