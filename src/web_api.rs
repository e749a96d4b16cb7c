use axum::extract::State;
use axum::http::status;
use axum::response::Result;
use axum::routing::{get, post};
use axum::{Json, Router};
use axum_extra::extract::CookieJar;

use crate::error::WebApiError;
use crate::interaction::{
  self, Action, Channel, Outcome, EMPTY_INPUT_WARNING, PENDING_WARNING,
};
use crate::models::{ResultRecord, Submission, SupportedOptions, WebFormRequest};
use crate::response::WebApiResponse;
use crate::session::WebSession;
use crate::AppState;

pub fn router() -> Router<AppState> {
  Router::new()
    .route("/translate", post(translate_handler))
    .route("/summarize", post(summarize_handler))
    .route("/languages", get(languages_handler))
}

pub async fn translate_handler(
  State(state): State<AppState>,
  session: WebSession,
  Json(param): Json<WebFormRequest>,
) -> Result<(CookieJar, WebApiResponse<ResultRecord>), WebApiError<'static>> {
  submit_json(state, session, Action::Translate, param).await
}

pub async fn summarize_handler(
  State(state): State<AppState>,
  session: WebSession,
  Json(param): Json<WebFormRequest>,
) -> Result<(CookieJar, WebApiResponse<ResultRecord>), WebApiError<'static>> {
  submit_json(state, session, Action::Summarize, param).await
}

pub async fn languages_handler() -> WebApiResponse<SupportedOptions> {
  SupportedOptions::new().into()
}

async fn submit_json(
  state: AppState,
  session: WebSession,
  action: Action,
  param: WebFormRequest,
) -> Result<(CookieJar, WebApiResponse<ResultRecord>), WebApiError<'static>> {
  let submission = Submission::try_from(param).map_err(WebApiError::bad_request)?;
  let outcome = interaction::submit(
    &state,
    &session.session_id,
    Channel::Api,
    action,
    submission,
  )
  .await;
  match outcome {
    Outcome::Completed(record) => Ok((session.cookie_jar, record.into())),
    Outcome::EmptyInput => Err(WebApiError::bad_request(EMPTY_INPUT_WARNING)),
    Outcome::Pending => Err(WebApiError::new(
      status::StatusCode::CONFLICT,
      PENDING_WARNING,
    )),
  }
}
