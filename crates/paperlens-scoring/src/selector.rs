//! Tier selection.
//!
//! Each request starts at the highest tier its inputs permit and degrades
//! one way only: model + features + successful prediction → ML; features
//! without a working model → advanced heuristic; no features → basic mock.
//! Whatever tier runs, the caller gets a complete assessment, never an error.

use tracing::warn;

use paperlens_extract::features::FeatureRecord;
use paperlens_extract::models::PaperInfo;

use crate::assessment::{ModelTier, RiskAssessment};
use crate::heuristic::{advanced_heuristic, ml_risk_factors};
use crate::mock::basic_mock;
use crate::model::RiskModel;

pub fn assess(
    features: Option<&FeatureRecord>,
    paper: &PaperInfo,
    model: Option<&dyn RiskModel>,
    current_year: i32,
) -> RiskAssessment {
    let Some(features) = features else {
        return basic_mock(paper);
    };

    if let Some(model) = model {
        match model.predict_probability(features) {
            Ok([_, p_risk]) => {
                let raw = (p_risk * 100.0).round() as i64;
                return RiskAssessment::from_raw_score(raw, ml_risk_factors(features), ModelTier::Ml);
            }
            Err(e) => {
                // Model failure is never surfaced to the caller; it only
                // shows up as model_used = advanced_heuristic.
                warn!(error = %e, "predictive model failed, falling back to heuristic tier");
            }
        }
    }

    advanced_heuristic(features, current_year)
}
