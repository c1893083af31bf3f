//! Shared feature-record fixtures for the scoring tests.

use paperlens_extract::features::FeatureRecord;

/// A well-formed, well-cited, internationally co-authored paper: triggers no
/// penalty in any tier.
pub(crate) fn clean_record() -> FeatureRecord {
    FeatureRecord {
        publication_year: Some(2020),
        author_count: 4,
        institution_count: 3,
        country_count: 2,
        title_length: 84,
        abstract_length: 180,
        n_concepts: 5,
        top_concept_level: Some(0),
        citations_in_first_2_years: 12,
        n_references: 42,
        is_open_access: true,
        is_international_collaboration: true,
        is_publisher_missing: false,
        is_abstract_missing: false,
        is_title_missing: false,
        is_publication_year_missing: false,
        is_author_count_missing: false,
        article_type: Some("article".to_string()),
        first_author_country: Some("US".to_string()),
        journal_name: Some("Journal of Cell Biology".to_string()),
        publisher: Some("Rockefeller University Press".to_string()),
    }
}

/// Old single-author paper with every missingness signal set: trips every
/// heuristic penalty at once.
pub(crate) fn worst_case_record() -> FeatureRecord {
    FeatureRecord {
        publication_year: Some(2005),
        author_count: 1,
        institution_count: 1,
        country_count: 1,
        title_length: 8,
        abstract_length: 0,
        n_concepts: 0,
        top_concept_level: None,
        citations_in_first_2_years: 0,
        n_references: 3,
        is_open_access: false,
        is_international_collaboration: false,
        is_publisher_missing: true,
        is_abstract_missing: true,
        is_title_missing: false,
        is_publication_year_missing: false,
        is_author_count_missing: false,
        article_type: None,
        first_author_country: None,
        journal_name: None,
        publisher: None,
    }
}
