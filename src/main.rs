use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use simrank_ai::OpenAiEmbedder;
use simrank_core::{
  DEFAULT_VECTOR_PRECISION, SentenceSet, embed_sentences, rank_sentences, render_embeddings,
  render_ranking,
};
use simrank_shared::{AppEnv, AppError};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
  name = "simrank",
  version,
  about = "Rank sentences by embedding similarity to a reference sentence"
)]
struct Cli {
  /// Text file with one sentence per line; the first line is the reference.
  /// Defaults to the built-in sentence list.
  #[arg(long, global = true, value_name = "FILE")]
  sentences: Option<PathBuf>,

  #[command(subcommand)]
  command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Commands {
  /// Rank every candidate by cosine similarity to the reference (default)
  Rank,
  /// Print the embedding vector of every sentence
  Embeddings {
    /// Decimal places per vector component
    #[arg(long, default_value_t = DEFAULT_VECTOR_PRECISION)]
    precision: usize,
  },
}

fn log_subscriber() -> impl tracing::Subscriber + Send + Sync + 'static {
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!(
          "{}=info,simrank_core=info,simrank_ai=info",
          env!("CARGO_CRATE_NAME")
        )
        .into()
      }),
    )
    .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
    .with(tracing_error::ErrorLayer::default())
}

#[tokio::main]
async fn main() -> ExitCode {
  log_subscriber().init();
  dotenvy::dotenv().ok();

  let cli = Cli::parse();

  match run(cli).await {
    Ok(output) => {
      print!("{output}");
      ExitCode::SUCCESS
    }
    Err(err) => {
      eprintln!("error: {err}");
      ExitCode::FAILURE
    }
  }
}

async fn run(cli: Cli) -> Result<String, AppError> {
  // Configuration is read before anything touches the network.
  let env = AppEnv::from_env()?;
  let sentences = match &cli.sentences {
    Some(path) => SentenceSet::from_file(path)?,
    None => SentenceSet::default(),
  };
  tracing::debug!(
    sentences = sentences.len(),
    model = %env.openai_embedding_model,
    timeout_secs = env.embedding_timeout.as_secs(),
    "Configuration loaded"
  );
  let embedder = OpenAiEmbedder::new(&env);

  match cli.command.unwrap_or(Commands::Rank) {
    Commands::Rank => {
      let ranking = rank_sentences(&embedder, &sentences).await?;
      Ok(render_ranking(&ranking))
    }
    Commands::Embeddings { precision } => {
      let rows = embed_sentences(&embedder, &sentences).await?;
      Ok(render_embeddings(&rows, precision))
    }
  }
}

#[cfg(test)]
mod tests {
  use clap::CommandFactory;

  use super::*;

  #[test]
  fn cli_definition_is_valid() {
    Cli::command().debug_assert();
  }

  #[test]
  fn rank_is_the_default() {
    let cli = Cli::try_parse_from(["simrank"]).unwrap();
    assert_eq!(cli.command, None);
    assert_eq!(cli.sentences, None);
  }

  #[test]
  fn sentences_flag_works_after_subcommand() {
    let cli = Cli::try_parse_from(["simrank", "embeddings", "--sentences", "s.txt"]).unwrap();
    assert_eq!(
      cli.command,
      Some(Commands::Embeddings {
        precision: DEFAULT_VECTOR_PRECISION
      })
    );
    assert_eq!(cli.sentences, Some(PathBuf::from("s.txt")));
  }

  #[test]
  fn subscriber_captures_span_traces() {
    let trace = tracing::subscriber::with_default(log_subscriber(), || {
      let span = tracing::error_span!("rank_request");
      let _entered = span.enter();
      tracing_error::SpanTrace::capture().to_string()
    });
    assert!(trace.contains("rank_request"), "{trace}");
  }

  #[test]
  fn precision_is_configurable() {
    let cli = Cli::try_parse_from(["simrank", "embeddings", "--precision", "2"]).unwrap();
    assert_eq!(cli.command, Some(Commands::Embeddings { precision: 2 }));
  }
}
