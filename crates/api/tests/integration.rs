//! Integration tests for API routes.
//!
//! Uses `tower::ServiceExt` to test Axum routes without a real HTTP
//! server. The pipeline is pure computation, so no external services
//! are needed:
//!
//! ```bash
//! cargo test -p cheifs-api --test integration
//! ```

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use cheifs_api::routes::create_router;
use cheifs_api::state::AppState;
use cheifs_common::config::AppConfig;
use cheifs_common::types::SizingPolicy;

// ============================================================
// Helpers
// ============================================================

fn test_config() -> AppConfig {
    AppConfig {
        valuation_source: "ZILLOW".to_string(),
        sizing_policy: SizingPolicy::ScaledDebtRatio,
        coverage_amount: 225_000.0,
        strict_leverage: false,
    }
}

fn test_app() -> Router {
    create_router(AppState::new(test_config()))
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

async fn post_json(
    app: Router,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_string(&body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

// ============================================================
// Routes
// ============================================================

#[tokio::test]
async fn test_health_endpoint() {
    let (status, json) = get_json(test_app(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["service"], "cheifs-report-api");
}

#[tokio::test]
async fn test_create_report_default_policy() {
    let body = serde_json::json!({
        "home_value": 550000.0,
        "mortgage_balance": 83000.0,
        "equity_loan_balance": 10000.0
    });
    let (status, json) = post_json(test_app(), "/api/reports", body).await;

    assert_eq!(status, StatusCode::OK);
    assert!(json["report_id"].is_string());
    assert!(json["generated_at"].is_string());

    assert_eq!(json["equity"]["stated_debt"].as_f64().unwrap(), 93_000.0);
    assert_eq!(
        json["equity"]["estimated_home_equity"].as_f64().unwrap(),
        457_000.0
    );
    assert_eq!(json["equity"]["source"], "ZILLOW");

    assert_eq!(json["investment"]["policy"], "scaled_debt_ratio");
    assert_eq!(json["investment"]["ratio_kind"], "debt_to_value");
    assert_eq!(
        json["investment"]["max_equity_share_cap"].as_f64().unwrap(),
        0.5
    );
    assert_eq!(
        round2(json["investment"]["cheifs_investment_in_home"].as_f64().unwrap()),
        80_080.0
    );
    assert_eq!(
        json["investment"]["proceeds_to_homeowner"],
        json["investment"]["cheifs_investment_in_home"]
    );

    assert_eq!(
        json["funds"]["approx_coverage_amount"].as_f64().unwrap(),
        225_000.0
    );
    assert_eq!(round2(json["funds"]["leverage"].as_f64().unwrap()), 2.81);
}

#[tokio::test]
async fn test_create_report_policy_override() {
    let body = serde_json::json!({
        "home_value": 550000.0,
        "mortgage_balance": 83000.0,
        "equity_loan_balance": 10000.0,
        "policy": "equity_ratio"
    });
    let (status, json) = post_json(test_app(), "/api/reports", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["investment"]["policy"], "equity_ratio");
    assert_eq!(json["investment"]["ratio_kind"], "equity_to_value");
    assert_eq!(
        round2(json["investment"]["cheifs_investment_in_home"].as_f64().unwrap()),
        -182_000.0
    );
}

#[tokio::test]
async fn test_create_report_coverage_override() {
    let body = serde_json::json!({
        "home_value": 550000.0,
        "mortgage_balance": 83000.0,
        "equity_loan_balance": 10000.0,
        "coverage_amount": 500000.0
    });
    let (status, json) = post_json(test_app(), "/api/reports", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["funds"]["approx_coverage_amount"].as_f64().unwrap(),
        500_000.0
    );
}

#[tokio::test]
async fn test_zero_home_value_returns_422() {
    let body = serde_json::json!({
        "home_value": 0.0,
        "mortgage_balance": 0.0,
        "equity_loan_balance": 0.0
    });
    let (status, json) = post_json(test_app(), "/api/reports", body).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(
        json["error"]
            .as_str()
            .unwrap()
            .contains("Division by zero")
    );
}

#[tokio::test]
async fn test_defaults_endpoint() {
    let (status, json) = get_json(test_app(), "/api/reports/defaults").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["valuation_source"], "ZILLOW");
    assert_eq!(json["sizing_policy"], "scaled_debt_ratio");
    assert_eq!(json["coverage_amount"].as_f64().unwrap(), 225_000.0);
    assert_eq!(json["strict_leverage"], false);
}
