//! Feature Extractor — derives the flat, typed feature record from a Work.
//!
//! Pure and total: a `Work` with every optional field empty still yields a
//! fully populated record (counts default to 0, missingness flags computed).
//! The record serializes to a single flat row, the shape the predictive
//! model expects.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::abstract_index;
use crate::models::{PaperInfo, Work, YearCount, AUTHORS_UNAVAILABLE, JOURNAL_UNAVAILABLE, TITLE_UNAVAILABLE};
use crate::normalise::work_from_json;

/// Width of the early-reception citation window, in years from publication.
pub const CITATION_WINDOW_YEARS: i32 = 2;

/// Flat feature record: all keys always present, one row per work.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureRecord {
    // numeric
    pub publication_year: Option<i32>,
    pub author_count: i64,
    pub institution_count: i64,
    pub country_count: i64,
    pub title_length: i64,
    pub abstract_length: i64,
    pub n_concepts: i64,
    pub top_concept_level: Option<i64>,
    pub citations_in_first_2_years: i64,
    pub n_references: i64,
    // boolean
    pub is_open_access: bool,
    pub is_international_collaboration: bool,
    pub is_publisher_missing: bool,
    pub is_abstract_missing: bool,
    pub is_title_missing: bool,
    pub is_publication_year_missing: bool,
    pub is_author_count_missing: bool,
    // categorical
    pub article_type: Option<String>,
    pub first_author_country: Option<String>,
    pub journal_name: Option<String>,
    pub publisher: Option<String>,
}

/// Sum of citations in the half-open window
/// `publication_year <= year < publication_year + n`. Zero when the
/// publication year is unknown or the series is empty.
pub fn citations_in_first_n_years(counts: &[YearCount], pub_year: Option<i32>, n: i32) -> i64 {
    let Some(pub_year) = pub_year else {
        return 0;
    };
    counts
        .iter()
        .filter(|entry| pub_year <= entry.year && entry.year < pub_year + n)
        .map(|entry| entry.cited_by_count)
        .sum()
}

/// Derive the feature record from a normalized work.
pub fn extract_features(work: &Work) -> FeatureRecord {
    let authorships = work.authorships.as_deref().unwrap_or(&[]);

    let institution_ids: HashSet<&str> = authorships
        .iter()
        .flat_map(|a| a.institution_ids.iter())
        .map(String::as_str)
        .collect();
    let countries: HashSet<&str> = authorships
        .iter()
        .flat_map(|a| a.countries.iter())
        .map(String::as_str)
        .collect();
    let first_author_country = authorships
        .first()
        .and_then(|a| a.countries.first())
        .cloned();

    let index = work.raw_abstract_inverted_index.as_ref();
    let abstract_length = abstract_index::index_length(index);
    // Missingness follows the redacted text: a retraction notice counts as
    // missing even though abstract_length keeps the pre-redaction size.
    let clean_abstract = abstract_index::redact(abstract_index::reconstruct_abstract(index));

    let title_length = work.title.as_deref().map_or(0, |t| t.chars().count() as i64);

    FeatureRecord {
        publication_year: work.publication_year,
        author_count: authorships.len() as i64,
        institution_count: institution_ids.len() as i64,
        country_count: countries.len() as i64,
        title_length,
        abstract_length,
        n_concepts: work.concepts.len() as i64,
        top_concept_level: work.concepts.first().and_then(|c| c.level),
        citations_in_first_2_years: citations_in_first_n_years(
            &work.counts_by_year,
            work.publication_year,
            CITATION_WINDOW_YEARS,
        ),
        n_references: work.referenced_works_count,
        is_open_access: work.is_open_access,
        is_international_collaboration: countries.len() > 1,
        is_publisher_missing: work.publisher.is_none(),
        is_abstract_missing: clean_abstract.is_empty(),
        is_title_missing: title_length == 0,
        is_publication_year_missing: work.publication_year.is_none(),
        is_author_count_missing: work.authorships.is_none(),
        article_type: work.article_type.clone(),
        first_author_country,
        journal_name: work.journal_name.clone(),
        publisher: work.publisher.clone(),
    }
}

/// Full extraction pass over a raw provider document.
///
/// Returns `None` when the document cannot support typed extraction at all
/// (not a JSON object); the caller then degrades to a display-only
/// assessment built with [`crate::normalise::basic_paper_info`].
pub fn extract_from_document(doc: &Value) -> Option<(Work, FeatureRecord)> {
    if !doc.is_object() {
        return None;
    }
    let work = work_from_json(doc);
    let features = extract_features(&work);
    Some((work, features))
}

impl PaperInfo {
    /// Display summary for the advanced path, derived from typed features.
    /// Citations shown are the early-reception window, not lifetime totals.
    pub fn from_features(work: &Work, features: &FeatureRecord) -> Self {
        PaperInfo {
            doi: work.doi.clone(),
            title: work
                .title
                .clone()
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| TITLE_UNAVAILABLE.to_string()),
            authors: if features.is_author_count_missing {
                AUTHORS_UNAVAILABLE.to_string()
            } else {
                format!("{} authors", features.author_count)
            },
            journal: work
                .journal_name
                .clone()
                .unwrap_or_else(|| JOURNAL_UNAVAILABLE.to_string()),
            publication_year: features.publication_year,
            citations: features.citations_in_first_2_years,
            is_open_access: features.is_open_access,
        }
    }
}
