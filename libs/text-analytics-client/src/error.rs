use std::fmt::Display;

/// Remote service a credential set belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {
  Translator,
  Language,
}

impl Display for ServiceKind {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      ServiceKind::Translator => f.write_str("Translator"),
      ServiceKind::Language => f.write_str("Language Service"),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
  Translation,
  Summarization,
}

impl Operation {
  fn result_noun(&self) -> &'static str {
    match self {
      Operation::Translation => "translation",
      Operation::Summarization => "summary",
    }
  }
}

impl Display for Operation {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Operation::Translation => f.write_str("translation"),
      Operation::Summarization => f.write_str("summarization"),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
  Configuration,
  Transport,
  EmptyResult,
  Document,
  InvalidInput,
}

/// Failure of a translate or summarize call.
///
/// The `Display` form is the message shown to the user verbatim, so every
/// variant renders with an `Error` prefix.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TextServiceError {
  #[error("Error: {0} keys not configured. Please check your .env file.")]
  NotConfigured(ServiceKind),

  #[error("Error during {operation}: {message}")]
  Transport {
    operation: Operation,
    message: String,
  },

  #[error("Error: No {} returned.", .0.result_noun())]
  EmptyResult(Operation),

  #[error("Error: {code} - {message}")]
  Document { code: String, message: String },

  #[error("Error: {0}")]
  InvalidInput(String),
}

impl TextServiceError {
  pub fn transport(operation: Operation, err: impl Display) -> Self {
    TextServiceError::Transport {
      operation,
      message: err.to_string(),
    }
  }

  pub fn kind(&self) -> ErrorKind {
    match self {
      TextServiceError::NotConfigured(_) => ErrorKind::Configuration,
      TextServiceError::Transport { .. } => ErrorKind::Transport,
      TextServiceError::EmptyResult(_) => ErrorKind::EmptyResult,
      TextServiceError::Document { .. } => ErrorKind::Document,
      TextServiceError::InvalidInput(_) => ErrorKind::InvalidInput,
    }
  }
}
