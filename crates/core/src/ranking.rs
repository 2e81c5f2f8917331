use std::cmp::Ordering;

use simrank_shared::{AppError, cosine_similarity};

/// A sentence to score against the base vector.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
  pub index: usize,
  pub text: &'a str,
  pub embedding: &'a [f32],
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityResult {
  /// Position of the sentence in the original set.
  pub index: usize,
  pub text: String,
  pub score: f32,
}

/// Score every candidate against `base` and order by score, highest first.
///
/// The sort is stable: candidates with exactly equal scores keep their input
/// order. Any candidate whose length differs from `base` fails the whole call
/// with [`AppError::DimensionMismatch`].
pub fn rank<'a, I>(base: &[f32], candidates: I) -> Result<Vec<SimilarityResult>, AppError>
where
  I: IntoIterator<Item = Candidate<'a>>,
{
  let mut results = candidates
    .into_iter()
    .map(|c| {
      cosine_similarity(base, c.embedding).map(|score| SimilarityResult {
        index: c.index,
        text: c.text.to_owned(),
        score,
      })
    })
    .collect::<Result<Vec<_>, AppError>>()?;

  // Stable sort: equal scores keep input order.
  results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

  Ok(results)
}
