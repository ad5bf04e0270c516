//! HTTP client and controller tests against a mock calculator API.

use httpmock::prelude::*;
use serde_json::json;
use tally::core::{CalculationRequest, Input, Operation};
use tally::service::UNREACHABLE_MESSAGE;
use tally::{Calculator, CalculatorService, EvaluateError, HttpCalculatorService, ServiceError};

fn service_for(server: &MockServer) -> HttpCalculatorService {
    HttpCalculatorService::new(server.base_url()).unwrap()
}

fn history_body() -> serde_json::Value {
    json!([
        {
            "id": 2,
            "num1": 5.0,
            "num2": 3.0,
            "operation": "add",
            "result": 8.0,
            "timestamp": "2024-06-01T10:15:30.500000",
            "expression": "5.0 + 3.0 = 8.0"
        },
        {
            "id": 1,
            "num1": 6.0,
            "num2": 2.0,
            "operation": "divide",
            "result": 3.0,
            "timestamp": "2024-06-01T10:14:00",
            "expression": "6.0 ÷ 2.0 = 3.0"
        }
    ])
}

#[tokio::test]
async fn calculate_posts_operands_and_returns_result() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/calculate")
            .header("content-type", "application/json")
            .json_body(json!({"num1": 5.0, "num2": 3.0, "operation": "add"}));
        then.status(200).json_body(json!({"result": 8.0}));
    });

    let service = service_for(&server);
    let result = service
        .calculate(&CalculationRequest::new(5.0, 3.0, Operation::Add))
        .await
        .unwrap();

    assert_eq!(result, 8.0);
    assert_eq!(mock.calls(), 1);
}

#[tokio::test]
async fn calculate_surfaces_error_payload() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/calculate");
        then.status(400)
            .json_body(json!({"error": "Division by zero is not allowed"}));
    });

    let service = service_for(&server);
    let err = service
        .calculate(&CalculationRequest::new(1.0, 0.0, Operation::Divide))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ServiceError::Rejected {
            status: 400,
            message: "Division by zero is not allowed".to_string()
        }
    );
}

#[tokio::test]
async fn calculate_without_error_payload_is_unexpected_status() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/calculate");
        then.status(502).body("Bad Gateway");
    });

    let err = service_for(&server)
        .calculate(&CalculationRequest::new(1.0, 2.0, Operation::Add))
        .await
        .unwrap_err();

    assert_eq!(err, ServiceError::UnexpectedStatus { status: 502 });
}

#[tokio::test]
async fn calculate_with_malformed_success_body_is_decode_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/calculate");
        then.status(200).json_body(json!({"answer": 3.0}));
    });

    let err = service_for(&server)
        .calculate(&CalculationRequest::new(1.0, 2.0, Operation::Add))
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::Decode(_)));
}

#[tokio::test]
async fn unreachable_service_is_transport_error() {
    let service = HttpCalculatorService::new("http://127.0.0.1:1").unwrap();

    let err = service
        .calculate(&CalculationRequest::new(1.0, 2.0, Operation::Add))
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::Transport(_)));
}

#[tokio::test]
async fn history_is_returned_in_store_order() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/history");
        then.status(200).json_body(history_body());
    });

    let entries = service_for(&server).history().await.unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].id, 2);
    assert_eq!(entries[0].expression, "5.0 + 3.0 = 8.0");
    assert_eq!(entries[1].expression, "6.0 ÷ 2.0 = 3.0");
    assert!(entries[0].timestamp > entries[1].timestamp);
}

#[tokio::test]
async fn history_error_status_is_reported() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/history");
        then.status(500).json_body(json!({"error": "database unavailable"}));
    });

    let err = service_for(&server).history().await.unwrap_err();
    assert_eq!(err, ServiceError::UnexpectedStatus { status: 500 });
}

#[tokio::test]
async fn clear_history_sends_delete() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(DELETE).path("/api/history");
        then.status(200)
            .json_body(json!({"message": "History cleared successfully"}));
    });

    service_for(&server).clear_history().await.unwrap();
    assert_eq!(mock.calls(), 1);
}

#[tokio::test]
async fn health_reports_status() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/health");
        then.status(200)
            .json_body(json!({"status": "Calculator API is running"}));
    });

    let status = service_for(&server).health().await.unwrap();
    assert_eq!(status, "Calculator API is running");
}

#[tokio::test]
async fn calculator_adds_and_refreshes_history() {
    let server = MockServer::start();
    let calculate = server.mock(|when, then| {
        when.method(POST)
            .path("/api/calculate")
            .json_body(json!({"num1": 5.0, "num2": 3.0, "operation": "add"}));
        then.status(200).json_body(json!({"result": 8.0}));
    });
    let history = server.mock(|when, then| {
        when.method(GET).path("/api/history");
        then.status(200).json_body(history_body());
    });

    let mut calc = Calculator::new(service_for(&server));
    let errors = calc
        .press_all(Input::parse_sequence("5+3=").unwrap())
        .await;

    assert!(errors.is_empty());
    assert_eq!(calc.display(), "8");
    assert_eq!(calculate.calls(), 1);
    assert_eq!(history.calls(), 1);
    assert_eq!(calc.history().log().len(), 2);
}

#[tokio::test]
async fn calculator_surfaces_division_by_zero_once() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/calculate");
        then.status(400).json_body(json!({"error": "Division by zero"}));
    });
    let history = server.mock(|when, then| {
        when.method(GET).path("/api/history");
        then.status(200).json_body(json!([]));
    });

    let mut calc = Calculator::new(service_for(&server));
    let errors = calc
        .press_all(Input::parse_sequence("9/0=").unwrap())
        .await;

    assert_eq!(
        errors,
        vec![EvaluateError::Rejected("Division by zero".to_string())]
    );
    assert_eq!(errors[0].to_string(), "Division by zero");
    assert_eq!(calc.display(), "9");
    assert_eq!(history.calls(), 0);
}

#[tokio::test]
async fn calculator_reports_generic_message_when_offline() {
    let mut calc = Calculator::new(HttpCalculatorService::new("http://127.0.0.1:1").unwrap());

    let errors = calc
        .press_all(Input::parse_sequence("4*2=").unwrap())
        .await;

    assert_eq!(errors, vec![EvaluateError::Unreachable]);
    assert_eq!(errors[0].to_string(), UNREACHABLE_MESSAGE);
    assert_eq!(calc.display(), "4");
}

#[tokio::test]
async fn failed_clear_keeps_stale_history() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/history");
        then.status(200).json_body(history_body());
    });
    server.mock(|when, then| {
        when.method(DELETE).path("/api/history");
        then.status(500).json_body(json!({"error": "boom"}));
    });

    let mut calc = Calculator::new(service_for(&server));
    calc.mount().await;
    assert_eq!(calc.history().log().len(), 2);

    calc.clear_history().await;
    assert_eq!(calc.history().log().len(), 2);
}
