//! Integration tests for the calculation endpoints.

use abacus_api::config::AbacusConfig;
use abacus_api::create_app;
use abacus_api::error::ApiErrorResponse;
use abacus_api::handlers::{HealthResponse, OperationsResponse};
use abacus_types::{CalculationResponse, ErrorCode, Operation};
use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::json;

/// Helper function to create a test server
fn create_test_server() -> TestServer {
    create_test_server_with(AbacusConfig::default())
}

fn create_test_server_with(config: AbacusConfig) -> TestServer {
    TestServer::new(create_app(&config)).expect("Failed to create test server")
}

async fn post_calculation(server: &TestServer, a: &str, b: &str, op: &str) -> (StatusCode, CalculationResponse) {
    let response = server
        .post("/api/v1/calculate")
        .json(&json!({ "a": a, "b": b, "operation": op }))
        .await;
    (response.status_code(), response.json::<CalculationResponse>())
}

#[tokio::test]
async fn health_reports_version() {
    let server = create_test_server();
    let response = server.get("/health").await;
    response.assert_status_ok();

    let health: HealthResponse = response.json();
    assert_eq!(health.status, "healthy");
    assert_eq!(health.version, env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn operations_lists_all_tags() {
    let server = create_test_server();
    let response = server.get("/api/v1/operations").await;
    response.assert_status_ok();

    let body: OperationsResponse = response.json();
    assert_eq!(body.operations, Operation::ALL.to_vec());
    response.assert_json(&json!({
        "operations": ["add", "subtract", "multiply", "divide"]
    }));
}

#[tokio::test]
async fn adds_two_numbers() {
    let server = create_test_server();
    let (status, body) = post_calculation(&server, "3", "4", "add").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, CalculationResponse::Success { value: 7.0, display: "Result: 7".to_string() });
}

#[tokio::test]
async fn divides_two_numbers() {
    let server = create_test_server();
    let (status, body) = post_calculation(&server, "3", "4", "divide").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.display(), "Result: 0.75");
}

#[tokio::test]
async fn division_by_zero_is_unprocessable() {
    let server = create_test_server();
    let (status, body) = post_calculation(&server, "10", "0", "divide").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body,
        CalculationResponse::Failure {
            code: ErrorCode::DivisionByZero,
            message: "Division by zero is not allowed.".to_string(),
            display: "Division by zero is not allowed.".to_string(),
        }
    );
}

#[tokio::test]
async fn invalid_input_is_unprocessable() {
    let server = create_test_server();
    let (status, body) = post_calculation(&server, "abc", "4", "add").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body.display(), "Please enter valid numbers.");
}

#[tokio::test]
async fn invalid_operation_is_unprocessable() {
    let server = create_test_server();
    let (status, body) = post_calculation(&server, "3", "4", "modulo").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(matches!(
        body,
        CalculationResponse::Failure { code: ErrorCode::InvalidOperation, .. }
    ));
    assert_eq!(body.display(), "Invalid operation.");
}

#[tokio::test]
async fn malformed_body_is_rejected_with_error_envelope() {
    let server = create_test_server();
    let response = server.post("/api/v1/calculate").json(&json!({ "a": "3" })).await;

    assert!(response.status_code().is_client_error());
    let body: ApiErrorResponse = response.json();
    assert_eq!(body.error.code, "INVALID_BODY");
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let mut config = AbacusConfig::default();
    config.limits.max_body_size_kb = 1;
    let server = create_test_server_with(config);

    let huge = "9".repeat(4 * 1024);
    let response = server
        .post("/api/v1/calculate")
        .json(&json!({ "a": huge, "b": "1", "operation": "add" }))
        .await;

    response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn repeated_requests_are_identical() {
    let server = create_test_server();
    let first = post_calculation(&server, "1.5", "-2", "multiply").await;
    let second = post_calculation(&server, "1.5", "-2", "multiply").await;

    assert_eq!(first, second);
    assert_eq!(first.1.display(), "Result: -3");
}
