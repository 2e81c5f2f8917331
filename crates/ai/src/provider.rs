use std::future::Future;

use simrank_shared::{AppError, Embedding};

/// Largest batch a single request may carry (the OpenAI per-request limit).
pub const MAX_BATCH_SIZE: usize = 2048;

/// Turns a batch of texts into one vector per text.
///
/// Implementations must return vectors in input order, exactly one per input,
/// all of the same length. A mismatch is reported as [`AppError::Provider`],
/// never passed through.
pub trait EmbeddingProvider: Send + Sync {
  /// Model identifier sent with each request.
  fn model(&self) -> &str;

  fn embed_many(
    &self,
    texts: &[String],
  ) -> impl Future<Output = Result<Vec<Embedding>, AppError>> + Send;
}

/// Check the input side of the provider contract before anything goes out
/// on the wire.
pub fn check_batch(texts: &[String]) -> Result<(), AppError> {
  if texts.is_empty() {
    return Err(AppError::InvalidInput(
      "embedding batch must contain at least one text".to_owned(),
    ));
  }
  if texts.len() > MAX_BATCH_SIZE {
    return Err(AppError::InvalidInput(format!(
      "embedding batch of {} exceeds the limit of {MAX_BATCH_SIZE}",
      texts.len()
    )));
  }
  if let Some(i) = texts.iter().position(|t| t.trim().is_empty()) {
    return Err(AppError::InvalidInput(format!("text at index {i} is empty")));
  }
  Ok(())
}
