//! Advanced heuristic tier, plus the fixed rule set that explains ML scores.
//!
//! Scoring policy: start from a base score, add a point penalty for each
//! detected integrity indicator, pair each penalty with a human-readable
//! factor string, clamp to [0, 100]. Factors are appended in evaluation
//! order; that order is part of the observable contract.

use paperlens_extract::features::FeatureRecord;

use crate::assessment::{ModelTier, RiskAssessment};

const BASE_SCORE: i64 = 20;

/// Score a feature record without a predictive model.
///
/// `current_year` anchors the "no citations after 2+ years" rule; callers
/// pass the wall-clock year so the rule stays testable.
pub fn advanced_heuristic(features: &FeatureRecord, current_year: i32) -> RiskAssessment {
    let mut score = BASE_SCORE;
    let mut factors = Vec::new();

    if features.publication_year.is_some_and(|y| y < 2010) {
        score += 15;
        factors.push("Older publication (pre-2010)".to_string());
    }

    if features.author_count == 1 {
        score += 20;
        factors.push("Single-author paper".to_string());
    } else if features.author_count > 20 {
        score += 10;
        factors.push("Unusually large author list".to_string());
    }

    if !features.is_international_collaboration {
        score += 5;
        factors.push("No international collaboration".to_string());
    }

    if features.is_publisher_missing {
        score += 25;
        factors.push("Publisher information missing".to_string());
    }

    if features.is_abstract_missing {
        score += 20;
        factors.push("Abstract not available".to_string());
    }

    if features.title_length < 10 {
        score += 15;
        factors.push("Unusually short title".to_string());
    } else if features.title_length > 200 {
        score += 10;
        factors.push("Unusually long title".to_string());
    }

    if features.citations_in_first_2_years == 0
        && features.publication_year.is_some_and(|y| current_year - y > 2)
    {
        score += 15;
        factors.push("No citations after 2+ years".to_string());
    }

    if features.n_references < 5 {
        score += 15;
        factors.push("Very few references".to_string());
    } else if features.n_references > 200 {
        score += 5;
        factors.push("Unusually high number of references".to_string());
    }

    if features.n_concepts == 0 {
        score += 10;
        factors.push("No subject classification".to_string());
    }

    RiskAssessment::from_raw_score(score, factors, ModelTier::AdvancedHeuristic)
}

/// Fixed explanation rules for the ML tier. The opaque model supplies the
/// score; re-inspecting the same record against these rules supplies the
/// factor strings.
pub fn ml_risk_factors(features: &FeatureRecord) -> Vec<String> {
    let mut factors = Vec::new();

    if features.is_publisher_missing {
        factors.push("Publisher information missing".to_string());
    }
    if features.is_abstract_missing {
        factors.push("Abstract not available".to_string());
    }
    if features.title_length < 10 {
        factors.push("Unusually short title".to_string());
    }
    if features.author_count == 1 {
        factors.push("Single author paper".to_string());
    }
    if features.citations_in_first_2_years == 0 {
        factors.push("No citations in first 2 years".to_string());
    }
    if features.n_references < 5 {
        factors.push("Low number of references".to_string());
    }

    factors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::RiskLevel;
    use crate::test_fixtures::{clean_record, worst_case_record};

    #[test]
    fn test_clean_record_stays_at_base() {
        let assessment = advanced_heuristic(&clean_record(), 2024);
        assert_eq!(assessment.risk_score, BASE_SCORE as u8);
        assert_eq!(assessment.risk_level, RiskLevel::Low);
        assert!(assessment.risk_factors.is_empty());
    }

    #[test]
    fn test_worst_case_clamps_to_high() {
        // 20 + 15 + 20 + 5 + 25 + 20 + 15 + 15 + 15 + 10 = 160, clamped.
        let assessment = advanced_heuristic(&worst_case_record(), 2024);
        assert_eq!(assessment.risk_score, 100);
        assert_eq!(assessment.risk_level, RiskLevel::High);
        assert_eq!(
            assessment.risk_factors,
            vec![
                "Older publication (pre-2010)",
                "Single-author paper",
                "No international collaboration",
                "Publisher information missing",
                "Abstract not available",
                "Unusually short title",
                "No citations after 2+ years",
                "Very few references",
                "No subject classification",
            ]
        );
    }

    #[test]
    fn test_citation_rule_needs_paper_age() {
        // Zero citations alone is not penalised for a fresh paper.
        let mut features = clean_record();
        features.publication_year = Some(2023);
        features.citations_in_first_2_years = 0;
        let assessment = advanced_heuristic(&features, 2024);
        assert!(!assessment
            .risk_factors
            .iter()
            .any(|f| f.contains("citations")));

        // The same record three years later is penalised.
        let assessment = advanced_heuristic(&features, 2026);
        assert!(assessment
            .risk_factors
            .iter()
            .any(|f| f == "No citations after 2+ years"));
    }

    #[test]
    fn test_large_author_list_penalty() {
        let mut features = clean_record();
        features.author_count = 35;
        let assessment = advanced_heuristic(&features, 2024);
        assert_eq!(assessment.risk_score, (BASE_SCORE + 10) as u8);
        assert_eq!(assessment.risk_factors, vec!["Unusually large author list"]);
    }

    #[test]
    fn test_long_title_and_many_references() {
        let mut features = clean_record();
        features.title_length = 250;
        features.n_references = 300;
        let assessment = advanced_heuristic(&features, 2024);
        assert_eq!(assessment.risk_score, (BASE_SCORE + 10 + 5) as u8);
        assert_eq!(
            assessment.risk_factors,
            vec!["Unusually long title", "Unusually high number of references"]
        );
    }

    #[test]
    fn test_ml_factors_rule_set() {
        let factors = ml_risk_factors(&worst_case_record());
        assert_eq!(
            factors,
            vec![
                "Publisher information missing",
                "Abstract not available",
                "Unusually short title",
                "Single author paper",
                "No citations in first 2 years",
                "Low number of references",
            ]
        );
        assert!(ml_risk_factors(&clean_record()).is_empty());
    }
}
