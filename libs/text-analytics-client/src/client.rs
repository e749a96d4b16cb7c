use crate::dto::{LanguageCode, RemoteErrorBody, SummaryMode};
use crate::error::{Operation, TextServiceError};
use crate::summarizer::{LanguageClient, LanguageSetting};
use crate::translator::{TranslatorClient, TranslatorSetting};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::info;

pub(crate) const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

/// The two remote text operations the web frontend dispatches to.
#[async_trait]
pub trait TextAnalytics: Send + Sync {
  async fn translate(
    &self,
    text: &str,
    target_language: LanguageCode,
    source_language: Option<LanguageCode>,
  ) -> Result<String, TextServiceError>;

  async fn summarize(&self, text: &str, mode: SummaryMode) -> Result<String, TextServiceError>;
}

#[derive(Clone, Debug)]
pub struct TextAnalyticsClient {
  translator: TranslatorClient,
  language: LanguageClient,
}

impl TextAnalyticsClient {
  pub fn new(translator: &TranslatorSetting, language: &LanguageSetting) -> Self {
    info!(
      "Creating TextAnalyticsClient, translator configured: {}, language configured: {}",
      translator.is_configured(),
      language.is_configured()
    );
    Self {
      translator: TranslatorClient::new(translator),
      language: LanguageClient::new(language),
    }
  }
}

#[async_trait]
impl TextAnalytics for TextAnalyticsClient {
  async fn translate(
    &self,
    text: &str,
    target_language: LanguageCode,
    source_language: Option<LanguageCode>,
  ) -> Result<String, TextServiceError> {
    self
      .translator
      .translate(text, target_language, source_language)
      .await
  }

  async fn summarize(&self, text: &str, mode: SummaryMode) -> Result<String, TextServiceError> {
    self.language.summarize(text, mode).await
  }
}

/// Fail with a transport error unless the response carries a 2xx status.
pub(crate) async fn check_response(
  resp: reqwest::Response,
  operation: Operation,
) -> Result<reqwest::Response, TextServiceError> {
  let status_code = resp.status();
  if status_code.is_success() {
    return Ok(resp);
  }

  let body = resp
    .text()
    .await
    .map_err(|err| TextServiceError::transport(operation, err))?;
  let message = match serde_json::from_str::<RemoteErrorBody>(&body) {
    Ok(remote) => format!(
      "({}) {}: {}",
      status_code.as_u16(),
      remote.error.code_str(),
      remote.error.message
    ),
    Err(_) => format!("error code: {}, {}", status_code, body),
  };
  Err(TextServiceError::Transport { operation, message })
}

pub(crate) async fn from_json_response<T>(
  resp: reqwest::Response,
  operation: Operation,
) -> Result<T, TextServiceError>
where
  T: DeserializeOwned,
{
  let resp = check_response(resp, operation).await?;
  let bytes = resp
    .bytes()
    .await
    .map_err(|err| TextServiceError::transport(operation, err))?;
  serde_json::from_slice(&bytes).map_err(|err| {
    TextServiceError::transport(
      operation,
      format!(
        "deserialize error: {}, body: {}",
        err,
        String::from_utf8_lossy(&bytes)
      ),
    )
  })
}
