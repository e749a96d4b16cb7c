use crate::test_util::{body_string, get, session_cookie, FakeTextAnalytics, TestApp};

use axum::http::StatusCode;

#[tokio::test]
async fn home_page_renders_form_and_mints_session_test() {
  let app = TestApp::new(FakeTextAnalytics::ok());
  let response = app.send(get("/", None)).await;
  assert_eq!(response.status(), StatusCode::OK);
  assert!(session_cookie(&response).is_some());

  let body = body_string(response).await;
  assert!(body.contains("Traduzir Texto"));
  assert!(body.contains("Sumarizar Texto"));
  assert!(body.contains("Chinês (Simplificado)"));
  assert!(body.contains("Por favor, digite um texto na caixa de entrada para ver os resultados."));
  assert_eq!(app.fake.translate_calls(), 0);
  assert_eq!(app.fake.summarize_calls(), 0);
}

#[tokio::test]
async fn existing_session_cookie_is_reused_test() {
  let app = TestApp::new(FakeTextAnalytics::ok());
  let response = app.send(get("/home", Some("session_id=known"))).await;
  assert_eq!(response.status(), StatusCode::OK);
  assert!(session_cookie(&response).is_none());
}

#[tokio::test]
async fn page_views_do_not_store_sessions_test() {
  let app = TestApp::new(FakeTextAnalytics::ok());
  for _ in 0..5 {
    let response = app.send(get("/", None)).await;
    assert_eq!(response.status(), StatusCode::OK);
  }
  let response = app.send(get("/", Some("session_id=made-up"))).await;
  assert_eq!(response.status(), StatusCode::OK);
  assert!(app.state.session_store.is_empty());
}

#[tokio::test]
async fn health_and_assets_are_served_test() {
  let app = TestApp::new(FakeTextAnalytics::ok());
  let response = app.send(get("/health", None)).await;
  assert_eq!(response.status(), StatusCode::OK);
  assert_eq!(body_string(response).await, "OK");

  let response = app.send(get("/assets/style.css", None)).await;
  assert_eq!(response.status(), StatusCode::OK);
}
