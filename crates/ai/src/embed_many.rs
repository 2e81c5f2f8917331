use std::time::Duration;

use anyhow::Context;
use async_openai::{Client, config::OpenAIConfig, types::embeddings::CreateEmbeddingRequestArgs};
use simrank_shared::{AppEnv, AppError, Embedding};

use crate::embed_shared::order_embeddings;
use crate::provider::{EmbeddingProvider, check_batch};

/// Embedding provider backed by an OpenAI-compatible `/embeddings` endpoint.
pub struct OpenAiEmbedder {
  client: Client<OpenAIConfig>,
  model: String,
  dimensions: Option<u32>,
  timeout: Duration,
}

impl OpenAiEmbedder {
  pub fn new(env: &AppEnv) -> Self {
    let config = OpenAIConfig::new()
      .with_api_key(&env.openai_api_key)
      .with_api_base(&env.openai_base_url);

    Self {
      client: Client::with_config(config),
      model: env.openai_embedding_model.clone(),
      dimensions: env.openai_embedding_dimensions,
      timeout: env.embedding_timeout,
    }
  }
}

impl EmbeddingProvider for OpenAiEmbedder {
  fn model(&self) -> &str {
    &self.model
  }

  /// Embed multiple texts in a single API call.
  ///
  /// Returns one vector per input, in the same order.
  async fn embed_many(&self, texts: &[String]) -> Result<Vec<Embedding>, AppError> {
    check_batch(texts)?;

    let mut args = CreateEmbeddingRequestArgs::default();
    args.model(&self.model).input(texts.to_vec());
    if let Some(dimensions) = self.dimensions {
      args.dimensions(dimensions);
    }
    let request = args.build().map_err(AppError::provider)?;

    tracing::debug!(
      model = %self.model,
      inputs = texts.len(),
      "Requesting embeddings"
    );

    let response = tokio::time::timeout(self.timeout, self.client.embeddings().create(request))
      .await
      .map_err(|_| {
        AppError::Provider(format!(
          "embedding request timed out after {}s",
          self.timeout.as_secs_f32()
        ))
      })?
      .with_context(|| format!("creating embeddings with {}", self.model))
      .map_err(AppError::provider)?;

    let data = response
      .data
      .into_iter()
      .map(|e| (e.index, e.embedding))
      .collect();
    let embeddings = order_embeddings(texts.len(), data)?;

    tracing::debug!(
      count = embeddings.len(),
      dimensions = embeddings.first().map_or(0, Vec::len),
      "Received embeddings"
    );

    Ok(embeddings)
  }
}
