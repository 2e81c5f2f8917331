use std::path::Path;

use simrank_shared::AppError;

/// Built-in sentences. Index 0 is the reference, the rest are paraphrases of
/// "I woke up in a very good mood this morning".
pub const DEFAULT_SENTENCES: [&str; 11] = [
  "今朝、わたしはとても機嫌よく起床しました。",
  "今朝は、気分爽快で目を覚ますことができました。",
  "今朝の目覚めはとてもよく、すっきりと起きられました。",
  "今日は朝から気持ちよく起床できました。",
  "目が覚めた瞬間から、今朝はとても晴れやかな気分でした。",
  "今朝は、心が軽くなるような良い気分で起きました。",
  "今日は、いつもより機嫌よく朝を迎えました。",
  "今朝の私は、とても清々しい気持ちで布団から出られました。",
  "朝起きたとき、自然と笑顔になるくらい気分がよかったです。",
  "今朝は、とても快適な気分で目を覚ましました。",
  "今日は、気持ちが明るいまま心地よく起床しました。",
];

/// Ordered, immutable list of sentences. Element 0 is the reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceSet {
  sentences: Vec<String>,
}

impl SentenceSet {
  pub fn new(sentences: Vec<String>) -> Result<Self, AppError> {
    if sentences.is_empty() {
      return Err(AppError::Configuration(
        "sentence set must contain at least a reference sentence".to_owned(),
      ));
    }
    if let Some(i) = sentences.iter().position(|s| s.trim().is_empty()) {
      return Err(AppError::Configuration(format!("sentence {i} is blank")));
    }
    Ok(Self { sentences })
  }

  /// Load one sentence per line. Blank lines and `#` comments are skipped.
  pub fn from_file(path: &Path) -> Result<Self, AppError> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
      AppError::Configuration(format!("reading sentences from {}: {e}", path.display()))
    })?;

    let sentences: Vec<String> = contents
      .lines()
      .map(str::trim)
      .filter(|line| !line.is_empty() && !line.starts_with('#'))
      .map(str::to_owned)
      .collect();

    if sentences.is_empty() {
      return Err(AppError::Configuration(format!(
        "{} contains no sentences",
        path.display()
      )));
    }

    tracing::debug!(path = %path.display(), count = sentences.len(), "Loaded sentences");
    Self::new(sentences)
  }

  #[must_use]
  pub fn reference(&self) -> &str {
    &self.sentences[0]
  }

  /// Every sentence after the reference, with its position in the set.
  pub fn candidates(&self) -> impl Iterator<Item = (usize, &str)> {
    self
      .sentences
      .iter()
      .enumerate()
      .skip(1)
      .map(|(i, s)| (i, s.as_str()))
  }

  #[must_use]
  pub fn as_slice(&self) -> &[String] {
    &self.sentences
  }

  #[must_use]
  pub fn len(&self) -> usize {
    self.sentences.len()
  }

  /// Never true; a set always holds its reference.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.sentences.is_empty()
  }
}

impl Default for SentenceSet {
  fn default() -> Self {
    Self {
      sentences: DEFAULT_SENTENCES.iter().map(|s| (*s).to_owned()).collect(),
    }
  }
}
