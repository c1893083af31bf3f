//! Risk assessment API — fetches provider metadata and runs the scoring
//! pipeline. Pipeline failures degrade tier by tier; the only errors this
//! handler returns are "no DOI given" and "provider found nothing".

use axum::extract::State;
use axum::Json;
use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use paperlens_extract::features::{extract_from_document, FeatureRecord};
use paperlens_extract::models::PaperInfo;
use paperlens_extract::normalise::basic_paper_info;
use paperlens_scoring::assessment::{ModelTier, RiskLevel};
use paperlens_scoring::model::RiskModel;
use paperlens_scoring::selector;

use crate::error::ApiError;
use crate::state::SharedState;

#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    pub doi: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub status: &'static str,
    pub risk_score: u8,
    pub risk_level: RiskLevel,
    pub risk_color: String,
    pub risk_factors: Vec<String>,
    pub paper_info: PaperInfo,
    pub model_used: ModelTier,
    pub features_extracted: bool,
}

/// POST /predict — retraction-risk assessment for a DOI.
pub async fn predict(
    State(state): State<SharedState>,
    Json(req): Json<PredictRequest>,
) -> Result<Json<PredictResponse>, ApiError> {
    let doi = req
        .doi
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .ok_or_else(|| ApiError::bad_request("Valid DOI is required"))?;

    info!(doi, "Prediction requested");

    let doc = match state.provider.fetch_work(doi).await {
        Ok(Some(doc)) => doc,
        Ok(None) => {
            return Err(ApiError::not_found(
                "Could not fetch paper metadata. Please verify the DOI is valid.",
            ))
        }
        Err(e) => {
            warn!(error = %e, "metadata provider call failed");
            return Err(ApiError::not_found(
                "Could not fetch paper metadata. Please verify the DOI is valid.",
            ));
        }
    };

    let current_year = Utc::now().year();
    Ok(Json(run_pipeline(doi, &doc, state.model.as_deref(), current_year)))
}

/// Document → assessment, once the provider document is in hand. Split out
/// of the handler so the whole degradation ladder is testable without I/O.
fn run_pipeline(
    doi: &str,
    doc: &Value,
    model: Option<&dyn RiskModel>,
    current_year: i32,
) -> PredictResponse {
    let extracted = extract_from_document(doc);

    let (paper_info, features): (PaperInfo, Option<&FeatureRecord>) = match &extracted {
        Some((work, features)) => (PaperInfo::from_features(work, features), Some(features)),
        None => (basic_paper_info(doi, doc), None),
    };

    let assessment = selector::assess(features, &paper_info, model, current_year);

    PredictResponse {
        status: "success",
        risk_score: assessment.risk_score,
        risk_level: assessment.risk_level,
        risk_color: assessment.risk_color,
        risk_factors: assessment.risk_factors,
        paper_info,
        model_used: assessment.model_used,
        features_extracted: features.is_some(),
    }
}
