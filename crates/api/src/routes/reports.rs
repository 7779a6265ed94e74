//! Preliminary report routes.

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use cheifs_common::error::AppError;
use cheifs_common::types::{EquitySnapshot, FundsUsage, InvestmentSizing};
use cheifs_engine::pipeline::ReportRequest;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/reports", post(create_report))
        .route("/api/reports/defaults", get(report_defaults))
}

/// Envelope around one computed report.
///
/// `report_id` and `generated_at` exist for export collaborators —
/// they identify which run produced a given rendered report and carry
/// no calculation semantics.
#[derive(Debug, Clone, Serialize)]
pub struct ReportEnvelope {
    pub report_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub equity: EquitySnapshot,
    pub investment: InvestmentSizing,
    pub funds: FundsUsage,
}

/// POST /api/reports — Compute a preliminary report.
async fn create_report(
    State(state): State<AppState>,
    Json(request): Json<ReportRequest>,
) -> Result<Json<ReportEnvelope>, AppError> {
    let report = state.pipeline.run(&request)?;

    let envelope = ReportEnvelope {
        report_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        equity: report.equity,
        investment: report.investment,
        funds: report.funds,
    };

    tracing::info!(
        report_id = %envelope.report_id,
        policy = %envelope.investment.policy,
        home_value = request.home_value,
        "Report computed"
    );

    Ok(Json(envelope))
}

/// GET /api/reports/defaults — The configured defaults in effect.
///
/// Lets a form renderer label its output without hardcoding the
/// valuation source, policy, or coverage amount.
async fn report_defaults(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "valuation_source": state.config.valuation_source,
        "sizing_policy": state.config.sizing_policy,
        "coverage_amount": state.config.coverage_amount,
        "strict_leverage": state.config.strict_leverage,
    }))
}
