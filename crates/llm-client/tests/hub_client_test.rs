//! Integration tests for [`llm_client::HubInferenceClient`] against a local mockito server.
//!
//! Covers: request shape (auth header, inputs, decoding parameters), output extraction,
//! API error propagation, and the startup readiness probe. No real network calls.

use llm_client::{GenerationClient, GenerationParams, HubInferenceClient};
use mockito::Matcher;
use serde_json::json;

const MODEL: &str = "test-org/agri-t5";
const TOKEN: &str = "hf_test_token_123456";

fn client_for(server: &mockito::ServerGuard) -> HubInferenceClient {
    HubInferenceClient::with_base_url(TOKEN.to_string(), MODEL.to_string(), server.url())
}

/// **Test: generate posts prompt and answer parameters with bearer auth, returns generated_text.**
///
/// **Setup:** Mock POST /models/{model} expecting auth header and partial JSON body.
/// **Action:** `client.generate(prompt, &GenerationParams::answer())`.
/// **Expected:** Returns the raw generated text; mock was hit once.
#[tokio::test]
async fn generate_sends_parameters_and_returns_text() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/models/test-org/agri-t5")
        .match_header("authorization", format!("Bearer {}", TOKEN).as_str())
        .match_body(Matcher::PartialJson(json!({
            "inputs": "question: What is mulching? context: Mulching covers soil.",
            "parameters": {
                "max_length": 200,
                "num_beams": 4,
                "early_stopping": true,
                "truncate": 512
            },
            "options": { "wait_for_model": true }
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"generated_text": "Mulching covers the soil surface."}]"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let out = client
        .generate(
            "question: What is mulching? context: Mulching covers soil.",
            &GenerationParams::answer(),
        )
        .await
        .unwrap();

    assert_eq!(out, "Mulching covers the soil surface.");
    mock.assert_async().await;
}

/// **Test: question-generation parameters are forwarded (64 tokens, 5 beams, truncate 128).**
#[tokio::test]
async fn generate_question_parameters_forwarded() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/models/test-org/agri-t5")
        .match_body(Matcher::PartialJson(json!({
            "parameters": { "max_length": 64, "num_beams": 5, "truncate": 128 }
        })))
        .with_status(200)
        .with_body(r#"[{"generated_text": "What is land drainage?"}]"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let out = client
        .generate(
            "generate question: Land drainage removes excess water from soil.",
            &GenerationParams::question(),
        )
        .await
        .unwrap();

    assert_eq!(out, "What is land drainage?");
    mock.assert_async().await;
}

/// **Test: API error body is surfaced in the error message.**
///
/// **Setup:** Mock returns 503 with `{"error": "Model is currently loading"}`.
/// **Expected:** `generate` returns Err containing the API message.
#[tokio::test]
async fn generate_propagates_api_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/models/test-org/agri-t5")
        .with_status(503)
        .with_body(r#"{"error": "Model is currently loading"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client
        .generate("question: x context: y", &GenerationParams::answer())
        .await
        .unwrap_err();

    assert!(err.to_string().contains("Model is currently loading"));
}

/// **Test: Empty output list is an error, not an empty answer.**
#[tokio::test]
async fn generate_empty_output_is_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/models/test-org/agri-t5")
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let client = client_for(&server);
    let result = client
        .generate("question: x context: y", &GenerationParams::answer())
        .await;

    assert!(result.is_err());
}

/// **Test: ensure_ready succeeds on 200 and fails on 401 (bad token).**
#[tokio::test]
async fn ensure_ready_checks_status_endpoint() {
    let mut server = mockito::Server::new_async().await;
    let ok = server
        .mock("GET", "/status/test-org/agri-t5")
        .match_header("authorization", format!("Bearer {}", TOKEN).as_str())
        .with_status(200)
        .with_body(r#"{"loaded": true, "state": "Loadable"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    assert!(client.ensure_ready().await.is_ok());
    ok.assert_async().await;

    let mut denied_server = mockito::Server::new_async().await;
    denied_server
        .mock("GET", "/status/test-org/agri-t5")
        .with_status(401)
        .with_body(r#"{"error": "Invalid credentials"}"#)
        .create_async()
        .await;

    let client = client_for(&denied_server);
    let err = client.ensure_ready().await.unwrap_err();
    assert!(err.to_string().contains("unavailable"));
}
