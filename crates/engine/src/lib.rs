//! Calculation engine for preliminary CHEIFS home-equity reports.
//!
//! Three pure stages wired in order by `pipeline::ReportPipeline`:
//! equity assessment → investment sizing → funds-usage sizing.

pub mod assessor;
pub mod funds;
pub mod investment;
pub mod pipeline;
