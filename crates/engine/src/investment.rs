//! Investment sizer — second stage of the report pipeline.
//!
//! Sizes the CHEIFS equity-share investment from an equity snapshot:
//! 1. Compute the policy's intermediate ratio against home value
//! 2. share = 0.5 − ratio
//! 3. investment = share × value (scaled by 0.44 under the debt-ratio
//!    policy); proceeds = investment
//!
//! A negative share or investment propagates unclamped — it is the
//! valid signal that the property is over-leveraged.

use cheifs_common::error::AppError;
use cheifs_common::types::{EquitySnapshot, InvestmentSizing, RatioKind, SizingPolicy};

/// Maximum fraction of the home the program will ever own.
pub const MAX_EQUITY_SHARE_CAP: f64 = 0.5;

/// Scale applied to the investment under `SizingPolicy::ScaledDebtRatio`.
pub const SCALED_INVESTMENT_FACTOR: f64 = 0.44;

/// Second pipeline stage: sizes the equity-share investment.
pub struct InvestmentSizer;

impl InvestmentSizer {
    /// Size the investment under the given policy.
    ///
    /// A zero `estimated_home_value` is malformed upstream input and
    /// fails with `AppError::DivisionByZero` — never a silent zero,
    /// NaN, or infinity.
    pub fn size(
        snapshot: &EquitySnapshot,
        policy: SizingPolicy,
    ) -> Result<InvestmentSizing, AppError> {
        if snapshot.estimated_home_value == 0.0 {
            return Err(AppError::DivisionByZero(
                "estimated_home_value is zero; cannot compute an equity-share ratio".to_string(),
            ));
        }

        let (ratio_kind, ratio) = match policy {
            SizingPolicy::EquityRatio => (
                RatioKind::EquityToValue,
                snapshot.estimated_home_equity / snapshot.estimated_home_value,
            ),
            SizingPolicy::ScaledDebtRatio => (
                RatioKind::DebtToValue,
                snapshot.stated_debt / snapshot.estimated_home_value,
            ),
        };

        let share = MAX_EQUITY_SHARE_CAP - ratio;
        let investment = match policy {
            SizingPolicy::EquityRatio => share * snapshot.estimated_home_value,
            SizingPolicy::ScaledDebtRatio => {
                SCALED_INVESTMENT_FACTOR * share * snapshot.estimated_home_value
            }
        };

        Ok(InvestmentSizing {
            policy,
            max_equity_share_cap: MAX_EQUITY_SHARE_CAP,
            ratio_kind,
            ratio,
            cheifs_equity_share: share,
            cheifs_investment_in_home: investment,
            proceeds_to_homeowner: investment,
        })
    }
}
