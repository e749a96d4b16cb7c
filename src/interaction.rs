use tracing::{info, instrument, warn};

use crate::models::{ResultKind, ResultRecord, Submission};
use crate::session::Flash;
use crate::state::AppState;

pub const EMPTY_INPUT_WARNING: &str = "Por favor, digite algum texto primeiro.";
pub const PENDING_WARNING: &str = "Aguarde: uma solicitação já está em andamento.";
pub const TRANSLATION_DONE: &str = "Tradução Concluída!";
pub const SUMMARY_DONE: &str = "Sumarização Concluída!";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
  Translate,
  Summarize,
}

/// Where a submission came from. Only page submissions touch the form state
/// and flash messages rendered by `GET /`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
  Page,
  Api,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
  Completed(ResultRecord),
  /// Nothing was sent and the previous result is kept.
  EmptyInput,
  /// Another request of the same session is still in flight.
  Pending,
}

/// Dispatch one submission. Page submissions also record their outcome in the session.
#[instrument(level = "debug", skip(state, submission), fields(text_len = submission.text.len()))]
pub async fn submit(
  state: &AppState,
  session_id: &str,
  channel: Channel,
  action: Action,
  submission: Submission,
) -> Outcome {
  let session_store = &state.session_store;
  if submission.text.trim().is_empty() {
    if channel == Channel::Page {
      session_store.update(session_id, |session| {
        session.form = submission;
        session.flash = Some(Flash::warning(EMPTY_INPUT_WARNING));
      });
    }
    return Outcome::EmptyInput;
  }

  let Some(_pending) = session_store.try_begin(session_id) else {
    warn!("refuse {:?}: session {} has a request in flight", action, session_id);
    if channel == Channel::Page {
      session_store.update(session_id, |session| {
        session.flash = Some(Flash::warning(PENDING_WARNING));
      });
    }
    return Outcome::Pending;
  };

  let (record, done) = match action {
    Action::Translate => {
      let result = state
        .text_analytics
        .translate(
          &submission.text,
          submission.target_language,
          submission.source_language,
        )
        .await;
      (ResultRecord::new(ResultKind::Translation, result), TRANSLATION_DONE)
    },
    Action::Summarize => {
      let mode = submission.summary_type;
      let result = state
        .text_analytics
        .summarize(&submission.text, mode)
        .await;
      (ResultRecord::new(ResultKind::Summary { mode }, result), SUMMARY_DONE)
    },
  };
  info!(
    "{:?} finished for session {}, error: {}",
    action, session_id, record.is_error
  );

  if channel == Channel::Page {
    let flash = (!record.is_error).then(|| Flash::success(done));
    session_store.update(session_id, |session| {
      session.form = submission;
      session.result = Some(record.clone());
      session.flash = flash;
    });
  }
  Outcome::Completed(record)
}
