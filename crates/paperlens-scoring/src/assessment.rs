//! Risk assessment output types shared by all scoring tiers.

use serde::{Deserialize, Serialize};

/// Risk bucket. Boundaries are identical across tiers: a score below 30 is
/// Low, below 70 Moderate, otherwise High.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    #[serde(rename = "Low Risk")]
    Low,
    #[serde(rename = "Moderate Risk")]
    Moderate,
    #[serde(rename = "High Risk")]
    High,
}

impl RiskLevel {
    pub fn from_score(score: u8) -> Self {
        if score < 30 {
            RiskLevel::Low
        } else if score < 70 {
            RiskLevel::Moderate
        } else {
            RiskLevel::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low      => "Low Risk",
            RiskLevel::Moderate => "Moderate Risk",
            RiskLevel::High     => "High Risk",
        }
    }

    /// Display color tag associated with the bucket.
    pub fn color(&self) -> &'static str {
        match self {
            RiskLevel::Low      => "#28a745",
            RiskLevel::Moderate => "#ffc107",
            RiskLevel::High     => "#dc3545",
        }
    }
}

/// Which scoring tier produced an assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelTier {
    Ml,
    AdvancedHeuristic,
    BasicMock,
}

impl ModelTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelTier::Ml                => "ml",
            ModelTier::AdvancedHeuristic => "advanced_heuristic",
            ModelTier::BasicMock         => "basic_mock",
        }
    }
}

/// The explainable assessment every tier produces: a clamped score, its
/// bucket and color, and the ordered factor strings that contributed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub risk_score: u8,
    pub risk_level: RiskLevel,
    pub risk_color: String,
    pub risk_factors: Vec<String>,
    pub model_used: ModelTier,
}

impl RiskAssessment {
    /// Clamp a raw additive score into [0, 100] and bucket it. Factor order
    /// is preserved as given; it is part of the display contract.
    pub fn from_raw_score(raw: i64, risk_factors: Vec<String>, model_used: ModelTier) -> Self {
        let risk_score = raw.clamp(0, 100) as u8;
        let risk_level = RiskLevel::from_score(risk_score);
        Self {
            risk_score,
            risk_level,
            risk_color: risk_level.color().to_string(),
            risk_factors,
            model_used,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_boundaries() {
        assert_eq!(RiskLevel::from_score(0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(29), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(30), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_score(69), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_score(70), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(100), RiskLevel::High);
    }

    #[test]
    fn test_raw_score_clamped() {
        let high = RiskAssessment::from_raw_score(160, vec![], ModelTier::AdvancedHeuristic);
        assert_eq!(high.risk_score, 100);
        assert_eq!(high.risk_level, RiskLevel::High);
        assert_eq!(high.risk_color, "#dc3545");

        let low = RiskAssessment::from_raw_score(-10, vec![], ModelTier::Ml);
        assert_eq!(low.risk_score, 0);
        assert_eq!(low.risk_level, RiskLevel::Low);
    }

    #[test]
    fn test_tier_labels() {
        assert_eq!(ModelTier::Ml.as_str(), "ml");
        assert_eq!(ModelTier::AdvancedHeuristic.as_str(), "advanced_heuristic");
        assert_eq!(ModelTier::BasicMock.as_str(), "basic_mock");
        assert_eq!(
            serde_json::to_value(ModelTier::AdvancedHeuristic).unwrap(),
            serde_json::json!("advanced_heuristic")
        );
    }

    #[test]
    fn test_level_serializes_display_label() {
        assert_eq!(
            serde_json::to_value(RiskLevel::Moderate).unwrap(),
            serde_json::json!("Moderate Risk")
        );
    }
}
