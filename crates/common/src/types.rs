//! Value objects shared across the calculation pipeline and its consumers.
//!
//! Currency values are decimal dollars (`f64`); ratios are unitless
//! fractions, never pre-multiplied by 100. All records are created fresh
//! per calculation request and carry no identity or lifecycle.

use serde::{Deserialize, Serialize};

/// Which investment-sizing formula is in effect.
///
/// Two incompatible formulas circulated as "the" formula across
/// revisions of the CHEIFS worksheet. Both are kept as named policies,
/// and every sizing record reports which one produced it — the 0.44
/// scale changes investor proceeds materially, so the choice must stay
/// auditable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SizingPolicy {
    /// share = 0.5 − equity/value; investment = share × value
    EquityRatio,
    /// share = 0.5 − debt/value; investment = 0.44 × share × value
    #[default]
    ScaledDebtRatio,
}

impl std::fmt::Display for SizingPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SizingPolicy::EquityRatio => write!(f, "equity_ratio"),
            SizingPolicy::ScaledDebtRatio => write!(f, "scaled_debt_ratio"),
        }
    }
}

impl std::str::FromStr for SizingPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "equity_ratio" => Ok(SizingPolicy::EquityRatio),
            "scaled_debt_ratio" => Ok(SizingPolicy::ScaledDebtRatio),
            other => Err(anyhow::anyhow!(
                "unknown sizing policy '{}'. Valid policies: equity_ratio, scaled_debt_ratio",
                other
            )),
        }
    }
}

/// What the intermediate `ratio` in an `InvestmentSizing` measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatioKind {
    EquityToValue,
    DebtToValue,
}

impl std::fmt::Display for RatioKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RatioKind::EquityToValue => write!(f, "equity_to_value"),
            RatioKind::DebtToValue => write!(f, "debt_to_value"),
        }
    }
}

/// How the funds-usage sizer treats a zero premium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LeverageMode {
    /// Report leverage = 0 on a zero premium. Matches all historical
    /// reports; kept as the default for compatibility.
    #[default]
    ZeroFallback,
    /// Fail with `DivisionByZero` on a zero premium.
    Strict,
}

/// Raw property/debt inputs as collected by the upstream form.
///
/// All amounts are non-negative by the upstream contract (the form
/// clamps ranges); the pipeline tolerates out-of-range values without
/// panicking but does not re-validate them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyInputs {
    pub home_value: f64,
    pub mortgage_balance: f64,
    pub equity_loan_balance: f64,
}

/// Stage-1 output: the homeowner's equity position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquitySnapshot {
    pub estimated_home_value: f64,
    /// Provenance label for the valuation (e.g. "ZILLOW").
    pub source: String,
    /// mortgage_balance + equity_loan_balance
    pub stated_debt: f64,
    /// estimated_home_value − stated_debt; negative when over-leveraged.
    pub estimated_home_equity: f64,
}

/// Stage-2 output: the CHEIFS equity-share investment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestmentSizing {
    /// The formula that produced this record.
    pub policy: SizingPolicy,
    /// Always 0.5 — the program never takes more than half the home.
    pub max_equity_share_cap: f64,
    /// What `ratio` measures under the active policy.
    pub ratio_kind: RatioKind,
    pub ratio: f64,
    /// max_equity_share_cap − ratio; negative when over-leveraged.
    pub cheifs_equity_share: f64,
    pub cheifs_investment_in_home: f64,
    /// Same value as `cheifs_investment_in_home`, under its own label.
    /// The business rule has never made them differ, but that is not
    /// assumed permanent.
    pub proceeds_to_homeowner: f64,
}

/// Stage-3 output: how the proceeds fund the desired product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FundsUsage {
    pub premium_amount: f64,
    pub approx_coverage_amount: f64,
    /// approx_coverage_amount / premium_amount; 0 on a zero premium
    /// under `LeverageMode::ZeroFallback`.
    pub leverage: f64,
}
