use crate::{translator_client, TEST_KEY};

use mockito::Matcher;
use secrecy::Secret;
use serde_json::json;
use text_analytics_client::dto::LanguageCode;
use text_analytics_client::error::{ErrorKind, Operation, TextServiceError};
use text_analytics_client::translator::{TranslatorClient, TranslatorSetting};

#[tokio::test]
async fn translate_returns_first_candidate_test() {
  let mut server = mockito::Server::new_async().await;
  let mock = server
    .mock("POST", "/translate")
    .match_query(Matcher::AllOf(vec![
      Matcher::UrlEncoded("api-version".into(), "3.0".into()),
      Matcher::UrlEncoded("to".into(), "pt".into()),
      Matcher::UrlEncoded("from".into(), "en".into()),
    ]))
    .match_header("Ocp-Apim-Subscription-Key", TEST_KEY)
    .match_header("Ocp-Apim-Subscription-Region", "westeurope")
    .match_body(Matcher::Json(json!([{"Text": "Hello world"}])))
    .with_status(200)
    .with_header("content-type", "application/json")
    .with_body(
      json!([{"translations": [{"text": "Olá mundo", "to": "pt"}]}]).to_string(),
    )
    .expect(1)
    .create_async()
    .await;

  let client = translator_client(&server.url());
  let result = client
    .translate(
      "Hello world",
      LanguageCode::Portuguese,
      Some(LanguageCode::English),
    )
    .await
    .unwrap();
  assert_eq!(result, "Olá mundo");
  mock.assert_async().await;
}

#[tokio::test]
async fn translate_without_source_omits_from_param_test() {
  let mut server = mockito::Server::new_async().await;
  let mock = server
    .mock("POST", "/translate")
    .match_query(Matcher::Exact("api-version=3.0&to=zh-Hans".into()))
    .with_status(200)
    .with_body(
      json!([{
        "detectedLanguage": {"language": "en", "score": 1.0},
        "translations": [{"text": "你好世界", "to": "zh-Hans"}]
      }])
      .to_string(),
    )
    .create_async()
    .await;

  let client = translator_client(&server.url());
  let result = client
    .translate("Hello world", LanguageCode::ChineseSimplified, None)
    .await
    .unwrap();
  assert_eq!(result, "你好世界");
  mock.assert_async().await;
}

#[tokio::test]
async fn translate_without_credentials_makes_no_call_test() {
  let mut server = mockito::Server::new_async().await;
  let mock = server
    .mock("POST", Matcher::Any)
    .expect(0)
    .create_async()
    .await;

  let client = TranslatorClient::new(&TranslatorSetting {
    endpoint: Some(server.url()),
    key: Some(Secret::new(TEST_KEY.to_string())),
    region: None,
  });
  let err = client
    .translate("Hello world", LanguageCode::Portuguese, None)
    .await
    .unwrap_err();
  assert_eq!(err.kind(), ErrorKind::Configuration);
  assert!(err.to_string().starts_with("Error:"));
  mock.assert_async().await;
}

#[tokio::test]
async fn translate_empty_text_makes_no_call_test() {
  let mut server = mockito::Server::new_async().await;
  let mock = server
    .mock("POST", Matcher::Any)
    .expect(0)
    .create_async()
    .await;

  let client = translator_client(&server.url());
  let err = client
    .translate("   ", LanguageCode::Portuguese, None)
    .await
    .unwrap_err();
  assert_eq!(err.kind(), ErrorKind::InvalidInput);
  mock.assert_async().await;
}

#[tokio::test]
async fn translate_remote_error_is_reported_as_text_test() {
  let mut server = mockito::Server::new_async().await;
  let _mock = server
    .mock("POST", "/translate")
    .match_query(Matcher::Any)
    .with_status(401)
    .with_body(
      json!({"error": {"code": 401000, "message": "The request is not authorized because credentials are missing or invalid."}})
        .to_string(),
    )
    .create_async()
    .await;

  let client = translator_client(&server.url());
  let err = client
    .translate("Hello world", LanguageCode::Portuguese, None)
    .await
    .unwrap_err();
  assert_eq!(
    err.to_string(),
    "Error during translation: (401) 401000: The request is not authorized because credentials are missing or invalid."
  );
}

#[tokio::test]
async fn translate_empty_response_test() {
  let mut server = mockito::Server::new_async().await;
  let _mock = server
    .mock("POST", "/translate")
    .match_query(Matcher::Any)
    .with_status(200)
    .with_body("[]")
    .create_async()
    .await;

  let client = translator_client(&server.url());
  let err = client
    .translate("Hello world", LanguageCode::Spanish, None)
    .await
    .unwrap_err();
  assert_eq!(err, TextServiceError::EmptyResult(Operation::Translation));
}

#[tokio::test]
async fn translate_unreachable_endpoint_test() {
  // nothing listens on port 9 of the loopback interface
  let client = translator_client("http://127.0.0.1:9");
  let err = client
    .translate("Hello world", LanguageCode::French, None)
    .await
    .unwrap_err();
  assert_eq!(err.kind(), ErrorKind::Transport);
  assert!(err.to_string().starts_with("Error during translation:"));
}
