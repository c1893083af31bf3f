//! Predictive-model contract and test doubles.

use anyhow::Result;
use paperlens_extract::features::FeatureRecord;

/// Contract an externally supplied predictive model must satisfy: one
/// tabular row in, a pair of class probabilities out, where index 1 is
/// "risk present".
///
/// Loading and deserializing such a model is outside this crate. Callers
/// inject an implementation once at process start and never mutate it;
/// concurrent reads are safe by construction.
pub trait RiskModel: Send + Sync {
    fn predict_probability(&self, row: &FeatureRecord) -> Result<[f64; 2]>;
}

/// Fixed-probability stub for tests and local development.
#[derive(Debug, Clone)]
pub struct StubRiskModel {
    p_risk: f64,
}

impl StubRiskModel {
    pub fn new(p_risk: f64) -> Self {
        Self { p_risk }
    }
}

impl RiskModel for StubRiskModel {
    fn predict_probability(&self, _row: &FeatureRecord) -> Result<[f64; 2]> {
        Ok([1.0 - self.p_risk, self.p_risk])
    }
}

/// Stub that always errors, for exercising the fallback path.
#[derive(Debug, Clone, Default)]
pub struct FailingRiskModel;

impl RiskModel for FailingRiskModel {
    fn predict_probability(&self, _row: &FeatureRecord) -> Result<[f64; 2]> {
        anyhow::bail!("model backend unavailable")
    }
}
