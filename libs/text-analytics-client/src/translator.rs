use crate::client::{from_json_response, SUBSCRIPTION_KEY_HEADER};
use crate::dto::{LanguageCode, TranslateItemResult, TranslateTextItem};
use crate::error::{Operation, ServiceKind, TextServiceError};

use reqwest::Method;
use secrecy::{ExposeSecret, Secret};
use tracing::{instrument, trace, warn};

pub const DEFAULT_TRANSLATOR_ENDPOINT: &str = "https://api.cognitive.microsofttranslator.com";
const TRANSLATOR_API_VERSION: &str = "3.0";
const SUBSCRIPTION_REGION_HEADER: &str = "Ocp-Apim-Subscription-Region";

#[derive(Clone, Debug, Default)]
pub struct TranslatorSetting {
  /// Falls back to [DEFAULT_TRANSLATOR_ENDPOINT] when unset.
  pub endpoint: Option<String>,
  pub key: Option<Secret<String>>,
  pub region: Option<String>,
}

impl TranslatorSetting {
  pub fn is_configured(&self) -> bool {
    self.key.is_some() && self.region.is_some()
  }

  fn endpoint(&self) -> &str {
    self
      .endpoint
      .as_deref()
      .unwrap_or(DEFAULT_TRANSLATOR_ENDPOINT)
      .trim_end_matches('/')
  }
}

#[derive(Clone, Debug)]
pub struct TranslatorClient {
  client: reqwest::Client,
  setting: TranslatorSetting,
}

impl TranslatorClient {
  pub fn new(setting: &TranslatorSetting) -> Self {
    Self {
      client: reqwest::Client::new(),
      setting: setting.clone(),
    }
  }

  /// Translate `text` and return the first candidate of the first result item.
  #[instrument(level = "debug", skip(self, text), fields(text_len = text.len()), err(Display))]
  pub async fn translate(
    &self,
    text: &str,
    target_language: LanguageCode,
    source_language: Option<LanguageCode>,
  ) -> Result<String, TextServiceError> {
    if text.trim().is_empty() {
      return Err(TextServiceError::InvalidInput("Empty text".to_string()));
    }

    let (key, region) = match (&self.setting.key, &self.setting.region) {
      (Some(key), Some(region)) => (key, region),
      _ => {
        warn!("translator key or region is missing, skip translation");
        return Err(TextServiceError::NotConfigured(ServiceKind::Translator));
      },
    };

    let mut query = vec![
      ("api-version", TRANSLATOR_API_VERSION),
      ("to", target_language.as_str()),
    ];
    if let Some(source_language) = source_language {
      query.push(("from", source_language.as_str()));
    }

    let url = format!("{}/translate", self.setting.endpoint());
    trace!("translate url: {}", url);
    let resp = self
      .client
      .request(Method::POST, &url)
      .query(&query)
      .header(SUBSCRIPTION_KEY_HEADER, key.expose_secret())
      .header(SUBSCRIPTION_REGION_HEADER, region)
      .json(&[TranslateTextItem { text }])
      .send()
      .await
      .map_err(|err| TextServiceError::transport(Operation::Translation, err))?;

    let items = from_json_response::<Vec<TranslateItemResult>>(resp, Operation::Translation).await?;
    first_translation(items)
  }
}

fn first_translation(items: Vec<TranslateItemResult>) -> Result<String, TextServiceError> {
  items
    .into_iter()
    .next()
    .and_then(|item| item.translations.into_iter().next())
    .map(|candidate| candidate.text)
    .ok_or(TextServiceError::EmptyResult(Operation::Translation))
}
