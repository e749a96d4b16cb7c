use std::sync::Arc;

use text_analytics_client::client::TextAnalytics;

use crate::config::config::Config;
use crate::session::SessionStorage;

#[derive(Clone)]
pub struct AppState {
  pub config: Arc<Config>,
  pub text_analytics: Arc<dyn TextAnalytics>,
  pub session_store: SessionStorage,
}
