//! Shared application state for the Axum API server.

use cheifs_common::config::AppConfig;
use cheifs_engine::pipeline::ReportPipeline;

/// Application state shared across all route handlers via Axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: ReportPipeline,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            pipeline: ReportPipeline::from_config(&config),
            config,
        }
    }
}
