use serde::Deserialize;

use crate::types::{LeverageMode, SizingPolicy};

/// Global application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Provenance label attached to every equity snapshot (default: "ZILLOW")
    pub valuation_source: String,

    /// Investment-sizing formula used when a request names none
    pub sizing_policy: SizingPolicy,

    /// Coverage face amount the proceeds are priced against (default: 225000)
    pub coverage_amount: f64,

    /// Fail on a zero premium instead of reporting zero leverage
    pub strict_leverage: bool,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            valuation_source: std::env::var("VALUATION_SOURCE")
                .unwrap_or_else(|_| "ZILLOW".to_string()),
            sizing_policy: std::env::var("SIZING_POLICY")
                .unwrap_or_else(|_| "scaled_debt_ratio".to_string())
                .parse()
                .map_err(|_| {
                    anyhow::anyhow!(
                        "SIZING_POLICY must be one of: equity_ratio, scaled_debt_ratio"
                    )
                })?,
            coverage_amount: std::env::var("COVERAGE_AMOUNT")
                .unwrap_or_else(|_| "225000".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("COVERAGE_AMOUNT must be a valid amount"))?,
            strict_leverage: std::env::var("STRICT_LEVERAGE")
                .unwrap_or_else(|_| "false".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("STRICT_LEVERAGE must be true or false"))?,
        })
    }

    /// The leverage mode implied by `strict_leverage`.
    pub fn leverage_mode(&self) -> LeverageMode {
        if self.strict_leverage {
            LeverageMode::Strict
        } else {
            LeverageMode::ZeroFallback
        }
    }
}
