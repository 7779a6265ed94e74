//! Axum API server for the CHEIFS report engine.
//!
//! Endpoints:
//! - GET  /health — liveness
//! - POST /api/reports — compute a preliminary report
//! - GET  /api/reports/defaults — configured defaults in effect

pub mod routes;
pub mod state;
