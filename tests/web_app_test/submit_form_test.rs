use crate::test_util::{
  body_string, form_post, get, session_cookie, session_id, FakeTextAnalytics, TestApp,
};

use ai_sum::models::ResultKind;
use ai_sum::templates::EMPTY_INPUT_INFO;
use axum::http::{header, StatusCode};
use text_analytics_client::dto::{LanguageCode, SummaryMode};
use text_analytics_client::error::{Operation, ServiceKind, TextServiceError};

const TRANSLATE_FORM: &str =
  "text=Hello+world&source_language=en&target_language=pt&summary_type=Extractive";

#[tokio::test]
async fn translate_form_stores_result_and_redirects_test() {
  let app = TestApp::new(FakeTextAnalytics::ok());
  let response = app.send(form_post("/translate", TRANSLATE_FORM, None)).await;
  assert_eq!(response.status(), StatusCode::SEE_OTHER);
  assert_eq!(response.headers()[header::LOCATION], "/");
  let cookie = session_cookie(&response).unwrap();

  assert_eq!(app.fake.translate_calls(), 1);
  assert_eq!(
    app.fake.last_translate().unwrap(),
    (
      "Hello world".to_string(),
      LanguageCode::Portuguese,
      Some(LanguageCode::English)
    )
  );

  let body = body_string(app.send(get("/", Some(&cookie))).await).await;
  assert!(body.contains("Tradução Concluída!"));
  assert!(body.contains("<strong>Tradução:</strong>"));
  assert!(body.contains("Olá mundo"));
  // the form keeps the submitted values
  assert!(body.contains(r#"<option value="pt" selected>"#));

  // the success message is shown once
  let body = body_string(app.send(get("/", Some(&cookie))).await).await;
  assert!(!body.contains("Tradução Concluída!"));
  assert!(body.contains("Olá mundo"));
}

#[tokio::test]
async fn summarize_form_labels_result_with_mode_test() {
  let app = TestApp::new(FakeTextAnalytics::ok());
  let response = app
    .send(form_post(
      "/summarize",
      "text=Some+long+text&source_language=pt&target_language=en&summary_type=Abstractive",
      Some("session_id=summary"),
    ))
    .await;
  assert_eq!(response.status(), StatusCode::SEE_OTHER);
  assert_eq!(
    app.fake.last_summarize().unwrap(),
    ("Some long text".to_string(), SummaryMode::Abstractive)
  );
  assert_eq!(app.fake.translate_calls(), 0);

  let body = body_string(app.send(get("/", Some("session_id=summary"))).await).await;
  assert!(body.contains("Sumarização Concluída!"));
  assert!(body.contains("<strong>Resumo (Abstrativo):</strong>"));
  assert!(body.contains("This is key."));
}

#[tokio::test]
async fn empty_text_warns_and_keeps_previous_result_test() {
  let app = TestApp::new(FakeTextAnalytics::ok());
  let response = app.send(form_post("/translate", TRANSLATE_FORM, None)).await;
  let cookie = session_cookie(&response).unwrap();

  let response = app
    .send(form_post(
      "/summarize",
      "text=++&source_language=en&target_language=pt&summary_type=Extractive",
      Some(&cookie),
    ))
    .await;
  assert_eq!(response.status(), StatusCode::SEE_OTHER);
  assert_eq!(app.fake.summarize_calls(), 0);
  assert_eq!(app.fake.translate_calls(), 1);

  let session = app
    .state
    .session_store
    .get_user_session(session_id(&cookie))
    .unwrap();
  let result = session.result.unwrap();
  assert_eq!(result.kind, ResultKind::Translation);
  assert_eq!(result.text, "Olá mundo");

  let body = body_string(app.send(get("/", Some(&cookie))).await).await;
  assert!(body.contains("Por favor, digite algum texto primeiro."));
  // a blank text box hides the kept result behind the info message
  assert!(body.contains(EMPTY_INPUT_INFO));
  assert!(!body.contains("Olá mundo"));
  assert!(!body.contains("<strong>Tradução:</strong>"));
}

#[tokio::test]
async fn error_result_is_shown_verbatim_test() {
  let app = TestApp::new(FakeTextAnalytics::new(
    Err(TextServiceError::NotConfigured(ServiceKind::Translator)),
    Err(TextServiceError::EmptyResult(Operation::Summarization)),
  ));
  let response = app.send(form_post("/translate", TRANSLATE_FORM, None)).await;
  let cookie = session_cookie(&response).unwrap();

  let body = body_string(app.send(get("/", Some(&cookie))).await).await;
  assert!(body.contains("<strong>Tradução:</strong>"));
  assert!(body.contains("Error: Translator keys not configured. Please check your .env file."));
  assert!(!body.contains("Tradução Concluída!"));
}

#[tokio::test]
async fn unsupported_language_is_rejected_test() {
  let app = TestApp::new(FakeTextAnalytics::ok());
  let response = app
    .send(form_post(
      "/translate",
      "text=Hello&source_language=ja&target_language=pt",
      None,
    ))
    .await;
  assert_eq!(response.status(), StatusCode::BAD_REQUEST);
  assert_eq!(app.fake.translate_calls(), 0);
}

#[tokio::test]
async fn second_submit_while_pending_is_refused_test() {
  let app = TestApp::new(FakeTextAnalytics::gated());
  let cookie = "session_id=busy";
  let first = tokio::spawn({
    let router = app.router.clone();
    let request = form_post("/translate", TRANSLATE_FORM, Some(cookie));
    async move {
      use tower::ServiceExt;
      router.oneshot(request).await.unwrap()
    }
  });
  app.fake.gate().entered.notified().await;
  assert!(app
    .state
    .session_store
    .get_user_session("busy")
    .unwrap()
    .is_pending());

  let second = app.send(form_post("/summarize", TRANSLATE_FORM, Some(cookie))).await;
  assert_eq!(second.status(), StatusCode::SEE_OTHER);
  assert_eq!(app.fake.summarize_calls(), 0);

  app.fake.gate().release.notify_one();
  let first = first.await.unwrap();
  assert_eq!(first.status(), StatusCode::SEE_OTHER);
  assert_eq!(app.fake.translate_calls(), 1);
  assert!(!app
    .state
    .session_store
    .get_user_session("busy")
    .unwrap()
    .is_pending());
}
