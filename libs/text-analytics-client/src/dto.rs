use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Languages offered by the form. Only `en` and `pt` are offered as a source language.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LanguageCode {
  #[serde(rename = "en")]
  English,
  #[serde(rename = "pt")]
  Portuguese,
  #[serde(rename = "es")]
  Spanish,
  #[serde(rename = "fr")]
  French,
  #[serde(rename = "de")]
  German,
  #[serde(rename = "it")]
  Italian,
  #[serde(rename = "ja")]
  Japanese,
  #[serde(rename = "zh-Hans")]
  ChineseSimplified,
}

impl LanguageCode {
  pub const SOURCES: [LanguageCode; 2] = [LanguageCode::English, LanguageCode::Portuguese];

  pub const TARGETS: [LanguageCode; 8] = [
    LanguageCode::English,
    LanguageCode::Portuguese,
    LanguageCode::Spanish,
    LanguageCode::French,
    LanguageCode::German,
    LanguageCode::Italian,
    LanguageCode::Japanese,
    LanguageCode::ChineseSimplified,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      LanguageCode::English => "en",
      LanguageCode::Portuguese => "pt",
      LanguageCode::Spanish => "es",
      LanguageCode::French => "fr",
      LanguageCode::German => "de",
      LanguageCode::Italian => "it",
      LanguageCode::Japanese => "ja",
      LanguageCode::ChineseSimplified => "zh-Hans",
    }
  }

  /// Label shown in the language pickers.
  pub fn label(&self) -> &'static str {
    match self {
      LanguageCode::English => "Inglês",
      LanguageCode::Portuguese => "Português",
      LanguageCode::Spanish => "Espanhol",
      LanguageCode::French => "Francês",
      LanguageCode::German => "Alemão",
      LanguageCode::Italian => "Italiano",
      LanguageCode::Japanese => "Japonês",
      LanguageCode::ChineseSimplified => "Chinês (Simplificado)",
    }
  }

  pub fn is_source(&self) -> bool {
    Self::SOURCES.contains(self)
  }
}

impl Display for LanguageCode {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for LanguageCode {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::TARGETS
      .iter()
      .find(|code| code.as_str() == s)
      .copied()
      .ok_or_else(|| format!("unsupported language code: {}", s))
  }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SummaryMode {
  #[default]
  Extractive,
  Abstractive,
}

impl SummaryMode {
  pub const ALL: [SummaryMode; 2] = [SummaryMode::Extractive, SummaryMode::Abstractive];

  pub fn as_str(&self) -> &'static str {
    match self {
      SummaryMode::Extractive => "Extractive",
      SummaryMode::Abstractive => "Abstractive",
    }
  }

  pub fn label(&self) -> &'static str {
    match self {
      SummaryMode::Extractive => "Extrativo",
      SummaryMode::Abstractive => "Abstrativo",
    }
  }

  pub fn task_kind(&self) -> &'static str {
    match self {
      SummaryMode::Extractive => "ExtractiveSummarization",
      SummaryMode::Abstractive => "AbstractiveSummarization",
    }
  }
}

impl Display for SummaryMode {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for SummaryMode {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "Extractive" => Ok(SummaryMode::Extractive),
      "Abstractive" => Ok(SummaryMode::Abstractive),
      other => Err(format!("unsupported summary type: {}", other)),
    }
  }
}

/// Number of summary sentences to request for `text`, counted in characters.
pub fn sentence_budget(text: &str) -> u8 {
  match text.chars().count() {
    len if len < 500 => 1,
    len if len < 1000 => 2,
    _ => 3,
  }
}

// Translator v3 wire types

#[derive(Clone, Debug, Serialize)]
pub struct TranslateTextItem<'a> {
  #[serde(rename = "Text")]
  pub text: &'a str,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateItemResult {
  #[serde(default)]
  pub detected_language: Option<DetectedLanguage>,
  #[serde(default)]
  pub translations: Vec<TranslationCandidate>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct DetectedLanguage {
  pub language: String,
  pub score: f32,
}

#[derive(Clone, Debug, Deserialize)]
pub struct TranslationCandidate {
  pub text: String,
  pub to: String,
}

/// Error envelope shared by the Translator and Language endpoints.
#[derive(Clone, Debug, Deserialize)]
pub struct RemoteErrorBody {
  pub error: RemoteError,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RemoteError {
  /// Translator sends a numeric code, Language sends a string.
  pub code: serde_json::Value,
  pub message: String,
}

impl RemoteError {
  pub fn code_str(&self) -> String {
    match &self.code {
      serde_json::Value::String(code) => code.clone(),
      other => other.to_string(),
    }
  }
}

// Language analyze-text job wire types

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeTextJobRequest<'a> {
  pub display_name: &'static str,
  pub analysis_input: AnalysisInput<'a>,
  pub tasks: Vec<SummarizationTask>,
}

impl<'a> AnalyzeTextJobRequest<'a> {
  pub fn summarization(
    text: &'a str,
    language: &'a str,
    mode: SummaryMode,
    sentence_count: u8,
  ) -> Self {
    Self {
      display_name: "ai-sum summarization",
      analysis_input: AnalysisInput {
        documents: vec![TextDocument {
          id: "1",
          language,
          text,
        }],
      },
      tasks: vec![SummarizationTask {
        kind: mode.task_kind(),
        task_name: mode.as_str(),
        parameters: SummarizationParameters { sentence_count },
      }],
    }
  }
}

#[derive(Clone, Debug, Serialize)]
pub struct AnalysisInput<'a> {
  pub documents: Vec<TextDocument<'a>>,
}

#[derive(Clone, Debug, Serialize)]
pub struct TextDocument<'a> {
  pub id: &'static str,
  pub language: &'a str,
  pub text: &'a str,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarizationTask {
  pub kind: &'static str,
  pub task_name: &'static str,
  pub parameters: SummarizationParameters,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarizationParameters {
  pub sentence_count: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum JobStatus {
  NotStarted,
  Running,
  Succeeded,
  PartiallyCompleted,
  Failed,
  Cancelled,
  Cancelling,
  #[serde(other)]
  Unknown,
}

impl JobStatus {
  pub fn has_results(&self) -> bool {
    matches!(self, JobStatus::Succeeded | JobStatus::PartiallyCompleted)
  }

  pub fn is_failed(&self) -> bool {
    matches!(self, JobStatus::Failed | JobStatus::Cancelled)
  }
}

#[derive(Clone, Debug, Deserialize)]
pub struct AnalyzeTextJobState {
  pub status: JobStatus,
  #[serde(default)]
  pub errors: Vec<JobError>,
  #[serde(default)]
  pub tasks: Option<JobTasks>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct JobError {
  pub code: String,
  pub message: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct JobTasks {
  #[serde(default)]
  pub items: Vec<SummarizationTaskResult>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SummarizationTaskResult {
  pub kind: String,
  #[serde(default)]
  pub results: Option<SummarizationResults>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarizationResults {
  #[serde(default)]
  pub documents: Vec<SummaryDocument>,
  #[serde(default)]
  pub errors: Vec<DocumentError>,
  #[serde(default)]
  pub model_version: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SummaryDocument {
  pub id: String,
  /// Filled by extractive summarization.
  #[serde(default)]
  pub sentences: Vec<SummaryText>,
  /// Filled by abstractive summarization.
  #[serde(default)]
  pub summaries: Vec<SummaryText>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SummaryText {
  pub text: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct DocumentError {
  pub id: String,
  pub error: JobError,
}
