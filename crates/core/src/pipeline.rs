use simrank_ai::EmbeddingProvider;
use simrank_shared::{AppError, Embedding};

use crate::ranking::{Candidate, SimilarityResult, rank};
use crate::sentences::SentenceSet;

/// The reference sentence and every candidate ordered by similarity to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking {
  pub reference: String,
  pub results: Vec<SimilarityResult>,
}

/// Embed the whole set in one request, then rank every candidate against the
/// reference.
pub async fn rank_sentences<P>(
  provider: &P,
  sentences: &SentenceSet,
) -> Result<Ranking, AppError>
where
  P: EmbeddingProvider,
{
  let embeddings = embed_all(provider, sentences).await?;

  let Some((base, rest)) = embeddings.split_first() else {
    return Err(AppError::Provider(
      "no embedding for the reference sentence".to_owned(),
    ));
  };

  if rest.is_empty() {
    tracing::warn!("Sentence set has no candidates to compare against the reference");
  }

  let candidates = sentences
    .candidates()
    .zip(rest)
    .map(|((index, text), embedding)| Candidate {
      index,
      text,
      embedding: embedding.as_slice(),
    });
  let results = rank(base, candidates)?;

  tracing::info!(
    model = provider.model(),
    candidates = results.len(),
    top_score = results.first().map(|r| r.score),
    "Ranked sentences"
  );

  Ok(Ranking {
    reference: sentences.reference().to_owned(),
    results,
  })
}

/// Embed the whole set in one request and pair each vector with its sentence.
pub async fn embed_sentences<P>(
  provider: &P,
  sentences: &SentenceSet,
) -> Result<Vec<(usize, String, Embedding)>, AppError>
where
  P: EmbeddingProvider,
{
  let embeddings = embed_all(provider, sentences).await?;

  Ok(
    sentences
      .as_slice()
      .iter()
      .cloned()
      .zip(embeddings)
      .enumerate()
      .map(|(i, (text, embedding))| (i, text, embedding))
      .collect(),
  )
}

async fn embed_all<P>(provider: &P, sentences: &SentenceSet) -> Result<Vec<Embedding>, AppError>
where
  P: EmbeddingProvider,
{
  let embeddings = provider.embed_many(sentences.as_slice()).await?;
  // Providers are checked at their own boundary too; this guards the split below.
  if embeddings.len() != sentences.len() {
    return Err(AppError::Provider(format!(
      "embedding count mismatch: expected {}, got {}",
      sentences.len(),
      embeddings.len()
    )));
  }
  Ok(embeddings)
}
