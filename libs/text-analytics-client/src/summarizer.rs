use std::time::Duration;

use crate::client::{check_response, from_json_response, SUBSCRIPTION_KEY_HEADER};
use crate::dto::{sentence_budget, AnalyzeTextJobRequest, AnalyzeTextJobState, SummaryMode};
use crate::error::{Operation, ServiceKind, TextServiceError};

use reqwest::Method;
use secrecy::{ExposeSecret, Secret};
use tracing::{debug, instrument, trace, warn};

const LANGUAGE_API_VERSION: &str = "2023-04-01";
const OPERATION_LOCATION_HEADER: &str = "operation-location";

#[derive(Clone, Debug)]
pub struct LanguageSetting {
  pub endpoint: Option<String>,
  pub key: Option<Secret<String>>,
  /// Language hint attached to the submitted document.
  pub document_language: String,
  pub poll_interval: Duration,
  pub max_poll_attempts: u32,
}

impl Default for LanguageSetting {
  fn default() -> Self {
    Self {
      endpoint: None,
      key: None,
      document_language: "en".to_string(),
      poll_interval: Duration::from_millis(1000),
      max_poll_attempts: 60,
    }
  }
}

impl LanguageSetting {
  pub fn is_configured(&self) -> bool {
    self.endpoint.is_some() && self.key.is_some()
  }
}

#[derive(Clone, Debug)]
pub struct LanguageClient {
  client: reqwest::Client,
  setting: LanguageSetting,
}

impl LanguageClient {
  pub fn new(setting: &LanguageSetting) -> Self {
    Self {
      client: reqwest::Client::new(),
      setting: setting.clone(),
    }
  }

  /// Run one summarization job over `text` and wait for its result.
  ///
  /// The job is submitted once and then polled until it reaches a terminal
  /// state or `max_poll_attempts` is exhausted.
  #[instrument(level = "debug", skip(self, text), fields(text_len = text.len()), err(Display))]
  pub async fn summarize(&self, text: &str, mode: SummaryMode) -> Result<String, TextServiceError> {
    if text.trim().is_empty() {
      return Err(TextServiceError::InvalidInput("Empty text".to_string()));
    }

    let (endpoint, key) = match (&self.setting.endpoint, &self.setting.key) {
      (Some(endpoint), Some(key)) => (endpoint.trim_end_matches('/'), key),
      _ => {
        warn!("language service endpoint or key is missing, skip summarization");
        return Err(TextServiceError::NotConfigured(ServiceKind::Language));
      },
    };

    let sentence_count = sentence_budget(text);
    let request = AnalyzeTextJobRequest::summarization(
      text,
      &self.setting.document_language,
      mode,
      sentence_count,
    );
    let url = format!("{}/language/analyze-text/jobs", endpoint);
    trace!("submit summarization job: {}, sentence count: {}", url, sentence_count);
    let resp = self
      .client
      .request(Method::POST, &url)
      .query(&[("api-version", LANGUAGE_API_VERSION)])
      .header(SUBSCRIPTION_KEY_HEADER, key.expose_secret())
      .json(&request)
      .send()
      .await
      .map_err(|err| TextServiceError::transport(Operation::Summarization, err))?;
    let resp = check_response(resp, Operation::Summarization).await?;

    let job_url = resp
      .headers()
      .get(OPERATION_LOCATION_HEADER)
      .and_then(|value| value.to_str().ok())
      .map(ToString::to_string)
      .ok_or_else(|| {
        TextServiceError::transport(
          Operation::Summarization,
          "missing operation-location header in job response",
        )
      })?;

    let state = self.wait_for_job(&job_url, key).await?;
    collect_summary(state, mode)
  }

  async fn wait_for_job(
    &self,
    job_url: &str,
    key: &Secret<String>,
  ) -> Result<AnalyzeTextJobState, TextServiceError> {
    for attempt in 1..=self.setting.max_poll_attempts {
      let resp = self
        .client
        .request(Method::GET, job_url)
        .header(SUBSCRIPTION_KEY_HEADER, key.expose_secret())
        .send()
        .await
        .map_err(|err| TextServiceError::transport(Operation::Summarization, err))?;
      let state =
        from_json_response::<AnalyzeTextJobState>(resp, Operation::Summarization).await?;
      debug!("summarization job poll {}: {:?}", attempt, state.status);

      if state.status.has_results() {
        return Ok(state);
      }
      if state.status.is_failed() {
        let message = state
          .errors
          .first()
          .map(|err| format!("{}: {}", err.code, err.message))
          .unwrap_or_else(|| format!("summarization job ended with status {:?}", state.status));
        return Err(TextServiceError::Transport {
          operation: Operation::Summarization,
          message,
        });
      }
      if attempt < self.setting.max_poll_attempts {
        tokio::time::sleep(self.setting.poll_interval).await;
      }
    }

    Err(TextServiceError::transport(
      Operation::Summarization,
      format!(
        "summarization job did not finish after {} polls",
        self.setting.max_poll_attempts
      ),
    ))
  }
}

/// Join the document's sentences (extractive) or summaries (abstractive).
fn collect_summary(
  state: AnalyzeTextJobState,
  mode: SummaryMode,
) -> Result<String, TextServiceError> {
  let results = state
    .tasks
    .and_then(|tasks| tasks.items.into_iter().next())
    .and_then(|item| item.results)
    .ok_or(TextServiceError::EmptyResult(Operation::Summarization))?;

  if let Some(failed) = results.errors.into_iter().next() {
    return Err(TextServiceError::Document {
      code: failed.error.code,
      message: failed.error.message,
    });
  }

  let mut summary = String::new();
  for document in results.documents {
    match mode {
      SummaryMode::Extractive => {
        for sentence in document.sentences {
          summary.push_str(&sentence.text);
          summary.push(' ');
        }
      },
      SummaryMode::Abstractive => {
        for paragraph in document.summaries {
          summary.push_str(&paragraph.text);
          summary.push('\n');
        }
      },
    }
  }
  Ok(summary.trim_end().to_string())
}
