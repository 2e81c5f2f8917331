use std::fmt::Write;

use crate::pipeline::Ranking;

/// Decimal places used for vector components in [`render_embeddings`].
pub const DEFAULT_VECTOR_PRECISION: usize = 4;

/// Header echoing the reference, a blank line, then one line per result:
/// `[<index>] similarity=<score> : <text>` with the score to 3 decimals.
#[must_use]
pub fn render_ranking(ranking: &Ranking) -> String {
  let mut out = String::new();

  let _ = writeln!(out, "Reference: {}", ranking.reference);
  let _ = writeln!(out);

  for result in &ranking.results {
    let _ = writeln!(
      out,
      "[{}] similarity={:.3} : {}",
      result.index, result.score, result.text
    );
  }

  out
}

/// A header, a blank line, then each sentence followed by its vector with
/// components at `precision` places.
#[must_use]
pub fn render_embeddings(rows: &[(usize, String, Vec<f32>)], precision: usize) -> String {
  let mut out = String::new();

  let _ = writeln!(out, "Embeddings: {} sentences", rows.len());
  let _ = writeln!(out);

  for (index, text, embedding) in rows {
    let _ = writeln!(out, "[{index}] {text}");
    let _ = writeln!(out, "{}", format_vector(embedding, precision));
    let _ = writeln!(out);
  }

  out
}

fn format_vector(vector: &[f32], precision: usize) -> String {
  let components: Vec<String> = vector.iter().map(|v| format!("{v:.precision$}")).collect();
  format!("[{}]", components.join(", "))
}
