//! paperlens-scoring — Tiered integrity-risk scoring engine.
//!
//! Three interchangeable tiers produce the same assessment shape: an ML tier
//! driven by an injected predictive model, an advanced heuristic tier over the
//! typed feature record, and a basic tier over display-level paper info. The
//! selector always returns an assessment; degraded inputs change the tier,
//! never the contract.

pub mod assessment;
pub mod heuristic;
pub mod mock;
pub mod model;
pub mod selector;

#[cfg(test)]
mod test_fixtures;

pub use assessment::{ModelTier, RiskAssessment, RiskLevel};
pub use model::RiskModel;
pub use selector::assess;
