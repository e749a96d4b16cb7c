use serde::{Deserialize, Serialize};
use text_analytics_client::dto::{LanguageCode, SummaryMode};
use text_analytics_client::error::TextServiceError;

/// Body of the translate/summarize form and of the matching JSON endpoints.
/// Values are validated by [Submission::try_from].
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct WebFormRequest {
  #[serde(default)]
  pub text: String,
  #[serde(default)]
  pub source_language: Option<String>,
  #[serde(default)]
  pub target_language: Option<String>,
  #[serde(default)]
  pub summary_type: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
  pub text: String,
  pub source_language: Option<LanguageCode>,
  pub target_language: LanguageCode,
  pub summary_type: SummaryMode,
}

impl Default for Submission {
  fn default() -> Self {
    Self {
      text: String::new(),
      source_language: Some(LanguageCode::English),
      target_language: LanguageCode::English,
      summary_type: SummaryMode::Extractive,
    }
  }
}

impl TryFrom<WebFormRequest> for Submission {
  type Error = String;

  fn try_from(value: WebFormRequest) -> Result<Self, Self::Error> {
    let source_language = match value.source_language.as_deref() {
      None | Some("") => None,
      Some(code) => {
        let code = code.parse::<LanguageCode>()?;
        if !code.is_source() {
          return Err(format!("unsupported source language: {}", code));
        }
        Some(code)
      },
    };
    let target_language = match value.target_language.as_deref() {
      None | Some("") => LanguageCode::English,
      Some(code) => code.parse()?,
    };
    let summary_type = match value.summary_type.as_deref() {
      None | Some("") => SummaryMode::default(),
      Some(mode) => mode.parse()?,
    };
    Ok(Self {
      text: value.text,
      source_language,
      target_language,
      summary_type,
    })
  }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResultKind {
  Translation,
  Summary { mode: SummaryMode },
}

impl ResultKind {
  pub fn label(&self) -> String {
    match self {
      ResultKind::Translation => "Tradução".to_string(),
      ResultKind::Summary { mode } => format!("Resumo ({})", mode.label()),
    }
  }
}

/// Outcome of the last action, kept until the next one replaces it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResultRecord {
  pub kind: ResultKind,
  pub label: String,
  pub text: String,
  pub is_error: bool,
}

impl ResultRecord {
  pub fn new(kind: ResultKind, result: Result<String, TextServiceError>) -> Self {
    let (text, is_error) = match result {
      Ok(text) => (text, false),
      Err(err) => (err.to_string(), true),
    };
    Self {
      kind,
      label: kind.label(),
      text,
      is_error,
    }
  }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SelectOption {
  pub value: &'static str,
  pub label: &'static str,
  pub selected: bool,
}

impl SelectOption {
  pub fn languages(codes: &[LanguageCode], selected: Option<LanguageCode>) -> Vec<Self> {
    codes
      .iter()
      .map(|code| Self {
        value: code.as_str(),
        label: code.label(),
        selected: Some(*code) == selected,
      })
      .collect()
  }

  pub fn summary_types(selected: SummaryMode) -> Vec<Self> {
    SummaryMode::ALL
      .iter()
      .map(|mode| Self {
        value: mode.as_str(),
        label: mode.label(),
        selected: *mode == selected,
      })
      .collect()
  }
}

#[derive(Clone, Debug, Serialize)]
pub struct SupportedOptions {
  pub source_languages: Vec<SelectOption>,
  pub target_languages: Vec<SelectOption>,
  pub summary_types: Vec<SelectOption>,
}

impl SupportedOptions {
  pub fn new() -> Self {
    let defaults = Submission::default();
    Self {
      source_languages: SelectOption::languages(&LanguageCode::SOURCES, defaults.source_language),
      target_languages: SelectOption::languages(
        &LanguageCode::TARGETS,
        Some(defaults.target_language),
      ),
      summary_types: SelectOption::summary_types(defaults.summary_type),
    }
  }
}

impl Default for SupportedOptions {
  fn default() -> Self {
    Self::new()
  }
}
