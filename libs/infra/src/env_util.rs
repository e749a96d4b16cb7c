use std::fmt::Display;
use std::str::FromStr;

use anyhow::Context;

pub fn get_env_var(key: &str, default: &str) -> String {
  std::env::var(key).unwrap_or_else(|e| {
    tracing::debug!(
      "failed to read environment variable:{}:{}, using default value: {}",
      e,
      key,
      default
    );
    default.to_owned()
  })
}

/// Optionally get an environment variable.
/// if value is empty, return None.
pub fn get_env_var_opt(key: &str) -> Option<String> {
  match std::env::var(key) {
    Ok(val) => {
      let val = val.trim();
      if val.is_empty() {
        None
      } else {
        Some(val.to_owned())
      }
    },
    Err(e) => {
      tracing::warn!("failed to read environment variable: {}: {}, None set", key, e);
      None
    },
  }
}

/// Read an environment variable and parse it, falling back to `default` when unset.
pub fn parse_env_var<T>(key: &str, default: &str) -> Result<T, anyhow::Error>
where
  T: FromStr,
  T::Err: Display,
{
  let value = get_env_var(key, default);
  value
    .parse::<T>()
    .map_err(|e| anyhow::anyhow!("{}", e))
    .with_context(|| format!("fail to get {}", key))
}
