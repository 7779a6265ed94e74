//! Report pipeline.
//!
//! Runs the three calculation stages in order:
//! 1. Assess equity (`EquityAssessor`)
//! 2. Size the CHEIFS investment (`InvestmentSizer`)
//! 3. Size funds usage from the proceeds (`FundsUsageSizer`)
//!
//! Data flows strictly forward — no stage reads back from a later
//! stage — and each stage is a pure function of its inputs, so the
//! pipeline is safe to share across concurrent callers without
//! locking. Per-request overrides travel in the request record, never
//! in ambient process state.

use serde::{Deserialize, Serialize};

use cheifs_common::config::AppConfig;
use cheifs_common::error::AppError;
use cheifs_common::types::{
    EquitySnapshot, FundsUsage, InvestmentSizing, LeverageMode, PropertyInputs, SizingPolicy,
};

use crate::assessor::EquityAssessor;
use crate::funds::FundsUsageSizer;
use crate::investment::InvestmentSizer;

/// Parameters for computing one preliminary report.
///
/// `policy` and `coverage_amount` override the configured defaults for
/// this request only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRequest {
    pub home_value: f64,
    pub mortgage_balance: f64,
    pub equity_loan_balance: f64,
    pub policy: Option<SizingPolicy>,
    pub coverage_amount: Option<f64>,
}

impl ReportRequest {
    /// The property inputs this request carries.
    pub fn property_inputs(&self) -> PropertyInputs {
        PropertyInputs {
            home_value: self.home_value,
            mortgage_balance: self.mortgage_balance,
            equity_loan_balance: self.equity_loan_balance,
        }
    }
}

/// The three records a preliminary report is made of, consumed
/// verbatim by rendering and export collaborators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreliminaryReport {
    pub equity: EquitySnapshot,
    pub investment: InvestmentSizing,
    pub funds: FundsUsage,
}

/// Central pipeline that orchestrates the three calculation stages.
#[derive(Debug, Clone)]
pub struct ReportPipeline {
    assessor: EquityAssessor,
    default_policy: SizingPolicy,
    default_coverage_amount: f64,
    leverage_mode: LeverageMode,
}

impl ReportPipeline {
    pub fn new(
        valuation_source: impl Into<String>,
        default_policy: SizingPolicy,
        default_coverage_amount: f64,
        leverage_mode: LeverageMode,
    ) -> Self {
        Self {
            assessor: EquityAssessor::new(valuation_source),
            default_policy,
            default_coverage_amount,
            leverage_mode,
        }
    }

    /// Build a pipeline from the loaded application config.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.valuation_source.clone(),
            config.sizing_policy,
            config.coverage_amount,
            config.leverage_mode(),
        )
    }

    /// Compute one preliminary report.
    ///
    /// Deterministic: identical inputs and policy yield byte-identical
    /// serialized records.
    pub fn run(&self, request: &ReportRequest) -> Result<PreliminaryReport, AppError> {
        let equity = self.assessor.assess(&request.property_inputs());

        let policy = request.policy.unwrap_or(self.default_policy);
        let investment = InvestmentSizer::size(&equity, policy)?;

        let coverage = request
            .coverage_amount
            .unwrap_or(self.default_coverage_amount);
        let funds = FundsUsageSizer::new(coverage, self.leverage_mode)
            .size_funds(investment.proceeds_to_homeowner)?;

        tracing::debug!(
            policy = %policy,
            home_value = request.home_value,
            investment = investment.cheifs_investment_in_home,
            "Report computed"
        );

        Ok(PreliminaryReport {
            equity,
            investment,
            funds,
        })
    }
}
