use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use httpmock::prelude::*;
use refactor_relay::{build_router, RefactorService, RelayConfig, ServiceMode};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

const GENERATE_PATH: &str = "/v1beta/models/gemini-2.5-flash:generateContent";

fn config_for(server: &MockServer) -> RelayConfig {
    let mut config = RelayConfig::default();
    config.provider.api_key = Some("integration-key".to_string());
    config.provider.base_url = server.base_url();
    config.provider.timeout_seconds = 5;
    config
}

fn refactor_request(user_code: &str, refactor_request: &str) -> Request<Body> {
    let body = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("user_code", user_code)
        .append_pair("refactor_request", refactor_request)
        .finish();
    Request::builder()
        .method("POST")
        .uri("/refactor")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_end_to_end_live_refactor() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path(GENERATE_PATH)
            .header("x-goog-api-key", "integration-key")
            .body_contains("world-class code refactoring agent")
            .body_contains("Refactoring Request: add type hints")
            .body_contains("def f(x):");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "candidates": [{
                    "content": {
                        "role": "model",
                        "parts": [{"text": "```python\ndef f(x: int) -> int:\n    return x + 1\n```\n"}]
                    },
                    "finishReason": "STOP"
                }]
            }));
    });

    let config = config_for(&server);
    let service = RefactorService::from_config(&config);
    assert_eq!(service.mode(), ServiceMode::Live);

    let app = build_router(Arc::new(service), &config.cors);
    let response = app
        .oneshot(refactor_request("def f(x):\n    return x+1", "add type hints"))
        .await
        .unwrap();

    api_mock.assert();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(
        body["refactored_code"],
        "```python\ndef f(x: int) -> int:\n    return x + 1\n```"
    );
}

#[tokio::test]
async fn test_end_to_end_provider_rejection() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path(GENERATE_PATH);
        then.status(403).json_body(serde_json::json!({
            "error": {
                "code": 403,
                "message": "Method doesn't allow unregistered callers.",
                "status": "PERMISSION_DENIED"
            }
        }));
    });

    let config = config_for(&server);
    let app = build_router(Arc::new(RefactorService::from_config(&config)), &config.cors);
    let response = app.oneshot(refactor_request("x = 1", "inline")).await.unwrap();

    api_mock.assert();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await["detail"],
        "AI Service Error: Failed to process request due to API error. Details: 403 PERMISSION_DENIED. Method doesn't allow unregistered callers."
    );
}

#[tokio::test]
async fn test_end_to_end_empty_candidate_is_unexpected() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path(GENERATE_PATH);
        then.status(200).json_body(serde_json::json!({
            "candidates": [{"finishReason": "MAX_TOKENS"}]
        }));
    });

    let config = config_for(&server);
    let app = build_router(Arc::new(RefactorService::from_config(&config)), &config.cors);
    let response = app.oneshot(refactor_request("x = 1", "inline")).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let detail = body_json(response).await["detail"]
        .as_str()
        .unwrap()
        .to_string();
    assert!(detail.starts_with("An unexpected server error occurred: "));
    assert!(detail.contains("MAX_TOKENS"));
}

#[tokio::test]
async fn test_mock_mode_makes_no_provider_calls() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path(GENERATE_PATH);
        then.status(200);
    });

    let mut config = RelayConfig::default();
    config.provider.base_url = server.base_url();
    config.provider.api_key_env = "RELAY_INTEGRATION_ABSENT_KEY".to_string();
    config.mock.delay_ms = 0;

    let service = RefactorService::from_config(&config);
    assert_eq!(service.mode(), ServiceMode::Mock);

    let app = build_router(Arc::new(service), &config.cors);
    let response = app
        .oneshot(refactor_request("console.log(1)", "use const"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await["refactored_code"]
        .as_str()
        .unwrap()
        .contains("MOCK RESPONSE"));
    api_mock.assert_hits(0);
}
