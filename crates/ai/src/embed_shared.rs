use simrank_shared::{AppError, Embedding};

/// Put `(index, vector)` pairs from a response back into input order and
/// verify the response has the same shape as the request.
///
/// - one vector per input, indices exactly `0..expected`
/// - no empty vectors
/// - every vector has the same dimensionality
pub fn order_embeddings(
  expected: usize,
  mut data: Vec<(u32, Embedding)>,
) -> Result<Vec<Embedding>, AppError> {
  if data.len() != expected {
    return Err(AppError::Provider(format!(
      "embedding count mismatch: expected {expected}, got {}",
      data.len()
    )));
  }

  // Sort by index to ensure ordering matches input
  data.sort_by_key(|(index, _)| *index);

  let mut dimensions = None;
  let mut ordered = Vec::with_capacity(expected);
  for (position, (index, embedding)) in data.into_iter().enumerate() {
    if index as usize != position {
      return Err(AppError::Provider(format!(
        "embedding index {index} does not match any input (expected {position})"
      )));
    }
    if embedding.is_empty() {
      return Err(AppError::Provider(format!("embedding {index} is empty")));
    }
    match dimensions {
      None => dimensions = Some(embedding.len()),
      Some(d) if d != embedding.len() => {
        return Err(AppError::Provider(format!(
          "embedding {index} has {} dimensions, expected {d}",
          embedding.len()
        )));
      }
      Some(_) => {}
    }
    ordered.push(embedding);
  }

  Ok(ordered)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn restores_input_order() {
    let data = vec![(2, vec![3.0, 3.0]), (0, vec![1.0, 1.0]), (1, vec![2.0, 2.0])];
    let ordered = order_embeddings(3, data).unwrap();
    assert_eq!(ordered, vec![vec![1.0, 1.0], vec![2.0, 2.0], vec![3.0, 3.0]]);
  }

  #[test]
  fn count_mismatch_is_provider_error() {
    let err = order_embeddings(3, vec![(0, vec![1.0]), (1, vec![1.0])]).unwrap_err();
    assert!(matches!(err, AppError::Provider(_)));
    assert!(err.to_string().contains("expected 3, got 2"));
  }

  #[test]
  fn duplicate_index_is_provider_error() {
    let err = order_embeddings(2, vec![(0, vec![1.0]), (0, vec![1.0])]).unwrap_err();
    assert!(matches!(err, AppError::Provider(_)));
  }

  #[test]
  fn out_of_range_index_is_provider_error() {
    let err = order_embeddings(2, vec![(0, vec![1.0]), (5, vec![1.0])]).unwrap_err();
    assert!(matches!(err, AppError::Provider(_)));
  }

  #[test]
  fn ragged_dimensions_are_provider_error() {
    let err = order_embeddings(2, vec![(0, vec![1.0, 0.0]), (1, vec![1.0])]).unwrap_err();
    assert!(err.to_string().contains("has 1 dimensions, expected 2"));
  }

  #[test]
  fn empty_vector_is_provider_error() {
    let err = order_embeddings(1, vec![(0, vec![])]).unwrap_err();
    assert!(matches!(err, AppError::Provider(_)));
  }
}
