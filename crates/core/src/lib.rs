mod pipeline;
pub use pipeline::{Ranking, embed_sentences, rank_sentences};

mod ranking;
pub use ranking::{Candidate, SimilarityResult, rank};

mod report;
pub use report::{DEFAULT_VECTOR_PRECISION, render_embeddings, render_ranking};

mod sentences;
pub use sentences::{DEFAULT_SENTENCES, SentenceSet};
