mod embed_many;
pub use embed_many::OpenAiEmbedder;

mod embed_shared;
pub use embed_shared::order_embeddings;

mod provider;
pub use provider::{EmbeddingProvider, MAX_BATCH_SIZE, check_batch};
