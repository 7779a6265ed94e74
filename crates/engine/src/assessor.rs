//! Equity assessor — first stage of the report pipeline.
//!
//! Turns raw property/debt inputs into an equity snapshot:
//! 1. stated_debt = mortgage_balance + equity_loan_balance
//! 2. estimated_home_equity = home_value − stated_debt
//!
//! Purely arithmetic and total over all real inputs: negative equity is
//! a valid business outcome (over-leveraged property) and is never
//! clamped. No rounding happens here; callers format for display.

use cheifs_common::types::{EquitySnapshot, PropertyInputs};

/// First pipeline stage: assesses the homeowner's equity position.
#[derive(Debug, Clone)]
pub struct EquityAssessor {
    /// Provenance label attached to every snapshot (e.g. "ZILLOW").
    source: String,
}

impl EquityAssessor {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Assess equity from raw inputs.
    ///
    /// Amounts are caller-validated; ranges are not re-checked here.
    pub fn assess(&self, inputs: &PropertyInputs) -> EquitySnapshot {
        let stated_debt = inputs.mortgage_balance + inputs.equity_loan_balance;

        EquitySnapshot {
            estimated_home_value: inputs.home_value,
            source: self.source.clone(),
            stated_debt,
            estimated_home_equity: inputs.home_value - stated_debt,
        }
    }
}
