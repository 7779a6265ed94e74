//! Funds-usage sizer — third stage of the report pipeline.
//!
//! Prices the desired product against the investment proceeds: the
//! whole proceeds become the premium, and leverage is the coverage
//! face amount over that premium.
//!
//! A zero premium reports leverage = 0 by default even though the
//! ratio is undefined there — all historical reports behave this way,
//! so the fallback stays for compatibility; flagged for product-owner
//! review. `LeverageMode::Strict` fails with `DivisionByZero` instead.

use cheifs_common::error::AppError;
use cheifs_common::types::{FundsUsage, LeverageMode};

/// Default coverage face amount in dollars.
pub const DEFAULT_COVERAGE_AMOUNT: f64 = 225_000.0;

/// Third pipeline stage: sizes premium, coverage, and leverage.
#[derive(Debug, Clone)]
pub struct FundsUsageSizer {
    coverage_amount: f64,
    mode: LeverageMode,
}

impl FundsUsageSizer {
    pub fn new(coverage_amount: f64, mode: LeverageMode) -> Self {
        Self {
            coverage_amount,
            mode,
        }
    }

    /// Size funds usage from the proceeds of the equity-share investment.
    pub fn size_funds(&self, proceeds: f64) -> Result<FundsUsage, AppError> {
        let leverage = if proceeds == 0.0 {
            match self.mode {
                LeverageMode::ZeroFallback => 0.0,
                LeverageMode::Strict => {
                    return Err(AppError::DivisionByZero(
                        "premium_amount is zero; leverage is undefined".to_string(),
                    ));
                }
            }
        } else {
            self.coverage_amount / proceeds
        };

        Ok(FundsUsage {
            premium_amount: proceeds,
            approx_coverage_amount: self.coverage_amount,
            leverage,
        })
    }
}

impl Default for FundsUsageSizer {
    fn default() -> Self {
        Self::new(DEFAULT_COVERAGE_AMOUNT, LeverageMode::ZeroFallback)
    }
}
