use axum::extract::State;
use axum::response::{Html, Redirect, Result};
use axum::routing::{get, post};
use axum::{Form, Router};
use axum_extra::extract::CookieJar;
use askama::Template;
use tracing::instrument;

use crate::error::{RenderError, WebApiError};
use crate::interaction::{self, Action, Channel};
use crate::models::{Submission, WebFormRequest};
use crate::session::WebSession;
use crate::{templates, AppState};

pub fn router() -> Router<AppState> {
  Router::new()
    .route("/", get(home_handler))
    .route("/home", get(home_handler))
    .route("/translate", post(translate_handler))
    .route("/summarize", post(summarize_handler))
}

pub async fn home_handler(
  State(state): State<AppState>,
  session: WebSession,
) -> Result<(CookieJar, Html<String>), RenderError> {
  let user_session = state.session_store.take_view(&session.session_id);
  let s = templates::Home::from_session(&user_session).render()?;
  Ok((session.cookie_jar, Html(s)))
}

#[instrument(level = "debug", skip_all)]
pub async fn translate_handler(
  State(state): State<AppState>,
  session: WebSession,
  Form(param): Form<WebFormRequest>,
) -> Result<(CookieJar, Redirect), WebApiError<'static>> {
  submit_form(state, session, Action::Translate, param).await
}

#[instrument(level = "debug", skip_all)]
pub async fn summarize_handler(
  State(state): State<AppState>,
  session: WebSession,
  Form(param): Form<WebFormRequest>,
) -> Result<(CookieJar, Redirect), WebApiError<'static>> {
  submit_form(state, session, Action::Summarize, param).await
}

// Every outcome, including refusals, is rendered by the page the browser is sent back to.
async fn submit_form(
  state: AppState,
  session: WebSession,
  action: Action,
  param: WebFormRequest,
) -> Result<(CookieJar, Redirect), WebApiError<'static>> {
  let submission = Submission::try_from(param).map_err(WebApiError::bad_request)?;
  interaction::submit(
    &state,
    &session.session_id,
    Channel::Page,
    action,
    submission,
  )
  .await;
  Ok((session.cookie_jar, Redirect::to("/")))
}
