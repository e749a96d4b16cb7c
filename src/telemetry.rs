use infra::env_util::get_env_var;
use tracing::subscriber::set_global_default;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::{layer::SubscriberExt, EnvFilter};

use crate::config::config::Environment;

/// Register a subscriber as global default to process span data.
///
/// It should only be called once!
pub fn init_subscriber(app_env: &Environment, filters: Vec<String>) -> Result<(), anyhow::Error> {
  let name = "ai_sum".to_string();
  let env_filter = EnvFilter::new(filters.join(","));

  let builder = tracing_subscriber::fmt()
    .with_target(true)
    .with_max_level(tracing::Level::TRACE)
    .with_thread_ids(false)
    .with_file(false);

  match app_env {
    Environment::Local => {
      let subscriber = builder
        .with_ansi(true)
        .with_target(false)
        .pretty()
        .finish()
        .with(env_filter);
      set_global_default(subscriber)?;
    },
    Environment::Production => {
      let formatting_layer = BunyanFormattingLayer::new(name, std::io::stdout);
      let subscriber = builder
        .json()
        .finish()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(formatting_layer);
      set_global_default(subscriber)?;
    },
  }
  Ok(())
}

const LOG_TARGETS: [&str; 4] = ["ai_sum", "text_analytics_client", "infra", "tower_http"];

/// Per-crate filter directives at the `RUST_LOG` level, defaulting to `info`.
pub fn default_filters() -> Vec<String> {
  filters_for_level(&get_env_var("RUST_LOG", "info"))
}

fn filters_for_level(level: &str) -> Vec<String> {
  LOG_TARGETS
    .iter()
    .map(|target| format!("{}={}", target, level))
    .collect()
}
