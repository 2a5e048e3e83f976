//! # settle-risk
//!
//! Deadline analysis over settle projects.
//!
//! - [`evaluator`]: the risk-detection pass that turns projects, tasks, and
//!   contacts into severity-ranked [`ProjectRisk`](settle_core::findings::ProjectRisk) records
//! - [`rules`]: thresholds and the loan-task matching heuristic
//! - [`alerts`]: merges human-readable alerts alongside the top risks
//! - [`calendar`]: milestone events for the transaction calendar
//!
//! Everything here is synchronous and pure. The evaluation date is always
//! passed in; nothing reads the clock.

pub mod alerts;
pub mod calendar;
pub mod evaluator;
pub mod rules;

pub use alerts::{AlertError, AlertGenerator, FallbackAlerts, attach_alerts};
pub use evaluator::{RiskEvaluator, evaluate};
pub use rules::RiskRules;
