mod error;
pub use error::AppError;

mod env;
pub use env::{
  AppEnv, DEFAULT_EMBEDDING_MODEL, DEFAULT_EMBEDDING_TIMEOUT, DEFAULT_OPENAI_BASE_URL,
};

pub mod similarity;
pub use similarity::cosine_similarity;

/// One vector per input text, as returned by the embedding model.
pub type Embedding = Vec<f32>;
