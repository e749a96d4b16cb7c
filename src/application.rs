use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use text_analytics_client::client::TextAnalyticsClient;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::config::Config;
use crate::session::SessionStorage;
use crate::state::AppState;
use crate::{assets, web_api, web_app};

pub struct Application {
  port: u16,
  listener: TcpListener,
  router: Router,
}

impl Application {
  pub async fn build(config: Config, state: AppState) -> Result<Self, anyhow::Error> {
    let address = format!("{}:{}", config.application.host, config.application.port);
    let listener = TcpListener::bind(&address).await?;
    let port = listener.local_addr()?.port();
    info!("ai-sum listening on {}", listener.local_addr()?);
    let router = create_router(state);
    Ok(Self {
      port,
      listener,
      router,
    })
  }

  pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
    axum::serve(self.listener, self.router)
      .with_graceful_shutdown(shutdown_signal())
      .await
  }

  pub fn port(&self) -> u16 {
    self.port
  }
}

pub fn init_state(config: &Config) -> AppState {
  let text_analytics = TextAnalyticsClient::new(&config.translator, &config.language);
  AppState {
    config: Arc::new(config.clone()),
    text_analytics: Arc::new(text_analytics),
    session_store: SessionStorage::new(),
  }
}

pub fn create_router(state: AppState) -> Router {
  let assets_dir = state.config.application.assets_dir.clone();
  Router::new()
    .merge(web_app::router())
    .nest("/web-api", web_api::router())
    .route("/health", get(|| async { "OK" }))
    .nest_service("/assets", assets::router(&assets_dir))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

async fn shutdown_signal() {
  if let Err(err) = tokio::signal::ctrl_c().await {
    tracing::error!("failed to listen for shutdown signal: {}", err);
    std::future::pending::<()>().await;
  }
  info!("shutdown signal received");
}
