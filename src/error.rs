use std::borrow::Cow;

use axum::{http::status, response::IntoResponse};

pub struct WebApiError<'a> {
  pub status_code: status::StatusCode,
  pub payload: Cow<'a, str>,
}

impl<'a> WebApiError<'a> {
  pub fn new<S>(status_code: status::StatusCode, payload: S) -> Self
  where
    S: Into<Cow<'a, str>>,
  {
    WebApiError {
      status_code,
      payload: payload.into(),
    }
  }

  pub fn bad_request<S>(payload: S) -> Self
  where
    S: Into<Cow<'a, str>>,
  {
    Self::new(status::StatusCode::BAD_REQUEST, payload)
  }
}

impl IntoResponse for WebApiError<'_> {
  fn into_response(self) -> axum::response::Response {
    tracing::warn!("web api error: {} {}", self.status_code, self.payload);
    (self.status_code, self.payload.into_owned()).into_response()
  }
}

pub struct RenderError(pub askama::Error);

impl From<askama::Error> for RenderError {
  fn from(value: askama::Error) -> Self {
    Self(value)
  }
}

impl IntoResponse for RenderError {
  fn into_response(self) -> axum::response::Response {
    tracing::error!("failed to render template: {}", self.0);
    (
      status::StatusCode::INTERNAL_SERVER_ERROR,
      self.0.to_string(),
    )
      .into_response()
  }
}
