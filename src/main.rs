use ai_sum::application::{init_state, Application};
use ai_sum::config::config::get_configuration;
use ai_sum::telemetry::{default_filters, init_subscriber};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  dotenvy::dotenv().ok();
  let conf =
    get_configuration().map_err(|e| anyhow::anyhow!("Failed to read configuration: {:#}", e))?;
  init_subscriber(&conf.app_env, default_filters())?;
  info!(
    "AI Sum starting, environment: {}, translator configured: {}, language configured: {}",
    conf.app_env.as_str(),
    conf.translator.is_configured(),
    conf.language.is_configured()
  );

  let state = init_state(&conf);
  let application = Application::build(conf, state).await?;
  info!("serving on port {}", application.port());
  application.run_until_stopped().await?;
  Ok(())
}
