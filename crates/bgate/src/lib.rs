//! B-GATE: a benchmark scoring blockchain deployment scenarios for
//! governance and adoption readiness.
//!
//! The core is a pure scoring transform: a [`scoring::ScoringEngine`] maps
//! each [`scenario::ScenarioRecord`] through a [`rubric::Rubric`] into a
//! [`scoring::ScoreRecord`] with three weighted sub-indices, a penalized
//! composite index, and a rating band. Around it sit synthetic scenario
//! generation, CSV dataset I/O, and Markdown/PDF report rendering.

pub mod config;
pub mod dataset;
pub mod error;
pub mod report;
pub mod rubric;
pub mod scenario;
pub mod scoring;
pub mod telemetry;

pub use error::AppError;
pub use rubric::Rubric;
pub use scenario::{generate_scenarios, ScenarioRecord};
pub use scoring::{Rating, ScoreRecord, ScoringEngine};
