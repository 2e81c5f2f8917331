use crate::AppError;

/// Compute cosine similarity between two embedding vectors.
///
/// Returns a value in [-1.0, 1.0] where 1.0 means identical direction.
/// If either vector has zero magnitude the result is exactly `0.0`.
/// Vectors of different length are rejected with [`AppError::DimensionMismatch`].
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32, AppError> {
  if a.len() != b.len() {
    return Err(AppError::DimensionMismatch {
      expected: a.len(),
      actual: b.len(),
    });
  }

  let mut dot = 0.0_f64;
  let mut norm_a = 0.0_f64;
  let mut norm_b = 0.0_f64;

  for (&x, &y) in a.iter().zip(b.iter()) {
    let x = f64::from(x);
    let y = f64::from(y);
    dot = x.mul_add(y, dot);
    norm_a = x.mul_add(x, norm_a);
    norm_b = y.mul_add(y, norm_b);
  }

  let denom = norm_a.sqrt() * norm_b.sqrt();
  if denom == 0.0 {
    return Ok(0.0);
  }

  Ok((dot / denom).clamp(-1.0, 1.0) as f32)
}
