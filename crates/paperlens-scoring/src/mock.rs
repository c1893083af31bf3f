//! Basic display-level tier.
//!
//! Used when even feature extraction failed and all that exists is the
//! display summary. Missingness is keyed off the display sentinels rather
//! than typed flags, and the penalty weights differ from the heuristic
//! tier's — the two are intentionally separate fallback behaviors.

use paperlens_extract::models::{PaperInfo, AUTHORS_UNAVAILABLE, JOURNAL_UNAVAILABLE, TITLE_UNAVAILABLE};

use crate::assessment::{ModelTier, RiskAssessment};

const BASE_SCORE: i64 = 25;

pub fn basic_mock(paper: &PaperInfo) -> RiskAssessment {
    let mut score = BASE_SCORE;
    let mut factors = Vec::new();

    if paper.title == TITLE_UNAVAILABLE {
        score += 30;
        factors.push("Title information missing".to_string());
    }

    if paper.authors == AUTHORS_UNAVAILABLE {
        score += 25;
        factors.push("Author information missing".to_string());
    }

    if paper.journal == JOURNAL_UNAVAILABLE {
        score += 35;
        factors.push("Publisher information missing".to_string());
    }

    if paper.publication_year.is_some_and(|y| y < 2010) {
        score += 20;
        factors.push("Relatively old publication".to_string());
    }

    if paper.citations < 5 && paper.publication_year.is_some_and(|y| y < 2022) {
        score += 15;
        factors.push("Low citation count for publication age".to_string());
    }

    RiskAssessment::from_raw_score(score, factors, ModelTier::BasicMock)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::RiskLevel;

    fn complete_info() -> PaperInfo {
        PaperInfo {
            doi: "10.1/mock".to_string(),
            title: "An Ordinary Paper".to_string(),
            authors: "A One, B Two".to_string(),
            journal: "Plain Journal".to_string(),
            publication_year: Some(2023),
            citations: 40,
            is_open_access: false,
        }
    }

    #[test]
    fn test_complete_info_is_low_risk() {
        let assessment = basic_mock(&complete_info());
        assert_eq!(assessment.risk_score, BASE_SCORE as u8);
        assert_eq!(assessment.risk_level, RiskLevel::Low);
        assert!(assessment.risk_factors.is_empty());
        assert_eq!(assessment.model_used, ModelTier::BasicMock);
    }

    #[test]
    fn test_all_sentinels_clamp_high() {
        let paper = PaperInfo {
            doi: "10.1/ghost".to_string(),
            title: TITLE_UNAVAILABLE.to_string(),
            authors: AUTHORS_UNAVAILABLE.to_string(),
            journal: JOURNAL_UNAVAILABLE.to_string(),
            publication_year: Some(2004),
            citations: 0,
            is_open_access: false,
        };
        // 25 + 30 + 25 + 35 + 20 + 15 = 150, clamped.
        let assessment = basic_mock(&paper);
        assert_eq!(assessment.risk_score, 100);
        assert_eq!(assessment.risk_level, RiskLevel::High);
        assert_eq!(
            assessment.risk_factors,
            vec![
                "Title information missing",
                "Author information missing",
                "Publisher information missing",
                "Relatively old publication",
                "Low citation count for publication age",
            ]
        );
    }

    #[test]
    fn test_low_citations_only_penalised_for_older_papers() {
        let mut paper = complete_info();
        paper.citations = 1;
        paper.publication_year = Some(2023);
        assert!(basic_mock(&paper).risk_factors.is_empty());

        paper.publication_year = Some(2021);
        assert_eq!(
            basic_mock(&paper).risk_factors,
            vec!["Low citation count for publication age"]
        );
    }

    #[test]
    fn test_unknown_year_skips_year_rules() {
        let mut paper = complete_info();
        paper.publication_year = None;
        paper.citations = 0;
        let assessment = basic_mock(&paper);
        assert!(assessment.risk_factors.is_empty());
    }
}
