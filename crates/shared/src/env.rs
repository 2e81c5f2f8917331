use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::AppError;

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-3-small";
pub const DEFAULT_EMBEDDING_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings read once at startup and handed to whatever needs them.
#[derive(Debug, Clone)]
pub struct AppEnv {
  pub openai_base_url: String,
  pub openai_api_key: String,
  pub openai_embedding_model: String,
  /// Requested output size for models that support shortening.
  pub openai_embedding_dimensions: Option<u32>,
  /// Upper bound on a single embedding request.
  pub embedding_timeout: Duration,
}

impl AppEnv {
  /// Read from the process environment. Call `dotenvy::dotenv()` first to
  /// pick up a `.env` file.
  pub fn from_env() -> Result<Self, AppError> {
    Self::from_lookup(|key| env::var(key).ok())
  }

  pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
  where
    F: Fn(&str) -> Option<String>,
  {
    let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    let openai_api_key = var("OPENAI_API_KEY").ok_or_else(|| {
      AppError::Configuration(
        "OPENAI_API_KEY is not set. Run `export OPENAI_API_KEY=...` (or add it to .env) and try again."
          .to_owned(),
      )
    })?;

    let embedding_timeout =
      parse_var::<u64>("EMBEDDING_TIMEOUT_SECS", var("EMBEDDING_TIMEOUT_SECS"))?
        .map_or(DEFAULT_EMBEDDING_TIMEOUT, Duration::from_secs);
    if embedding_timeout.is_zero() {
      return Err(AppError::Configuration(
        "EMBEDDING_TIMEOUT_SECS must be greater than zero".to_owned(),
      ));
    }

    Ok(Self {
      openai_base_url: var("OPENAI_BASE_URL")
        .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_owned()),
      openai_api_key,
      openai_embedding_model: var("OPENAI_EMBEDDING_MODEL")
        .unwrap_or_else(|| DEFAULT_EMBEDDING_MODEL.to_owned()),
      openai_embedding_dimensions: parse_var(
        "OPENAI_EMBEDDING_DIMENSIONS",
        var("OPENAI_EMBEDDING_DIMENSIONS"),
      )?,
      embedding_timeout,
    })
  }
}

fn parse_var<T: FromStr>(key: &str, value: Option<String>) -> Result<Option<T>, AppError>
where
  T::Err: std::fmt::Display,
{
  value
    .map(|v| {
      v.trim()
        .parse::<T>()
        .map_err(|e| AppError::Configuration(format!("{key}={v:?} is invalid: {e}")))
    })
    .transpose()
}

#[cfg(test)]
mod tests {
  use std::collections::HashMap;

  use super::*;

  fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
      .iter()
      .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
      .collect();
    move |key: &str| map.get(key).cloned()
  }

  #[test]
  fn missing_api_key_is_configuration_error() {
    let err = AppEnv::from_lookup(lookup(&[])).unwrap_err();
    assert!(err.is_configuration());
    assert!(err.to_string().contains("export OPENAI_API_KEY"));
  }

  #[test]
  fn blank_api_key_counts_as_missing() {
    let err = AppEnv::from_lookup(lookup(&[("OPENAI_API_KEY", "   ")])).unwrap_err();
    assert!(err.is_configuration());
  }

  #[test]
  fn defaults_apply() {
    let env = AppEnv::from_lookup(lookup(&[("OPENAI_API_KEY", "sk-test")])).unwrap();
    assert_eq!(env.openai_api_key, "sk-test");
    assert_eq!(env.openai_base_url, DEFAULT_OPENAI_BASE_URL);
    assert_eq!(env.openai_embedding_model, DEFAULT_EMBEDDING_MODEL);
    assert_eq!(env.openai_embedding_dimensions, None);
    assert_eq!(env.embedding_timeout, DEFAULT_EMBEDDING_TIMEOUT);
  }

  #[test]
  fn overrides_apply() {
    let env = AppEnv::from_lookup(lookup(&[
      ("OPENAI_API_KEY", "sk-test"),
      ("OPENAI_BASE_URL", "http://localhost:8080/v1"),
      ("OPENAI_EMBEDDING_MODEL", "text-embedding-3-large"),
      ("OPENAI_EMBEDDING_DIMENSIONS", "256"),
      ("EMBEDDING_TIMEOUT_SECS", "5"),
    ]))
    .unwrap();
    assert_eq!(env.openai_base_url, "http://localhost:8080/v1");
    assert_eq!(env.openai_embedding_model, "text-embedding-3-large");
    assert_eq!(env.openai_embedding_dimensions, Some(256));
    assert_eq!(env.embedding_timeout, Duration::from_secs(5));
  }

  #[test]
  fn malformed_numbers_are_rejected() {
    let err = AppEnv::from_lookup(lookup(&[
      ("OPENAI_API_KEY", "sk-test"),
      ("OPENAI_EMBEDDING_DIMENSIONS", "wide"),
    ]))
    .unwrap_err();
    assert!(err.is_configuration());
    assert!(err.to_string().contains("OPENAI_EMBEDDING_DIMENSIONS"));

    let err = AppEnv::from_lookup(lookup(&[
      ("OPENAI_API_KEY", "sk-test"),
      ("EMBEDDING_TIMEOUT_SECS", "0"),
    ]))
    .unwrap_err();
    assert!(err.is_configuration());
  }
}
