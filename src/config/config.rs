use std::str::FromStr;
use std::time::Duration;

use anyhow::Context;
use infra::env_util::{get_env_var, get_env_var_opt, parse_env_var};
use secrecy::Secret;
use text_analytics_client::summarizer::LanguageSetting;
use text_analytics_client::translator::TranslatorSetting;

#[derive(Clone, Debug)]
pub struct Config {
  pub app_env: Environment,
  pub application: ApplicationSetting,
  pub translator: TranslatorSetting,
  pub language: LanguageSetting,
}

// Bind to 0.0.0.0 so the server is reachable from outside a container.
// Use 127.0.0.1 to restrict it to the local machine.
#[derive(Clone, Debug)]
pub struct ApplicationSetting {
  pub port: u16,
  pub host: String,
  /// Directory holding the stylesheet served under `/assets`.
  pub assets_dir: String,
}

// Default values favor local development. Azure credentials have no default:
// a missing key surfaces as an error on the page instead of a startup failure.
pub fn get_configuration() -> Result<Config, anyhow::Error> {
  let config = Config {
    app_env: get_env_var("AI_SUM_ENVIRONMENT", "local")
      .parse()
      .context("fail to get AI_SUM_ENVIRONMENT")?,
    application: ApplicationSetting {
      port: parse_env_var("AI_SUM_APPLICATION_PORT", "8501")?,
      host: get_env_var("AI_SUM_APPLICATION_HOST", "0.0.0.0"),
      assets_dir: get_env_var("AI_SUM_ASSETS_DIR", "assets"),
    },
    translator: TranslatorSetting {
      endpoint: get_env_var_opt("AZURE_TRANSLATOR_ENDPOINT"),
      key: get_env_var_opt("AZURE_TRANSLATOR_KEY").map(Secret::new),
      region: get_env_var_opt("AZURE_TRANSLATOR_REGION"),
    },
    language: LanguageSetting {
      endpoint: get_env_var_opt("AZURE_LANGUAGE_ENDPOINT"),
      key: get_env_var_opt("AZURE_LANGUAGE_KEY").map(Secret::new),
      document_language: get_env_var("AZURE_LANGUAGE_DOCUMENT_LANGUAGE", "en"),
      poll_interval: Duration::from_millis(parse_env_var(
        "AZURE_LANGUAGE_POLL_INTERVAL_MS",
        "1000",
      )?),
      max_poll_attempts: parse_env_var("AZURE_LANGUAGE_MAX_POLL_ATTEMPTS", "60")?,
    },
  };
  Ok(config)
}

/// The possible runtime environment for our application.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Environment {
  Local,
  Production,
}

impl Environment {
  pub fn as_str(&self) -> &'static str {
    match self {
      Environment::Local => "local",
      Environment::Production => "production",
    }
  }
}

impl FromStr for Environment {
  type Err = anyhow::Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "local" => Ok(Self::Local),
      "production" => Ok(Self::Production),
      other => anyhow::bail!(
        "{} is not a supported environment. Use either `local` or `production`.",
        other
      ),
    }
  }
}
