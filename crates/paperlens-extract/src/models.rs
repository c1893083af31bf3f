//! Data models for the extraction pipeline.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Display sentinel used when a paper has no usable title.
pub const TITLE_UNAVAILABLE: &str = "Title not available";
/// Display sentinel used when no author names could be extracted.
pub const AUTHORS_UNAVAILABLE: &str = "Authors not available";
/// Display sentinel used when no journal/source could be extracted.
pub const JOURNAL_UNAVAILABLE: &str = "Journal not available";

/// A normalized scholarly work. Every field the provider did not supply is an
/// explicit `None`/empty value, never absent, so downstream feature extraction
/// can never fail on a missing field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Work {
    pub doi: String,
    pub title: Option<String>,
    pub publication_year: Option<i32>,
    pub article_type: Option<String>,
    pub is_open_access: bool,
    /// `None` when the source document carried no `authorships` key at all;
    /// an empty vec means the key was present but listed nobody.
    pub authorships: Option<Vec<Authorship>>,
    pub journal_name: Option<String>,
    pub publisher: Option<String>,
    pub source_id: Option<String>,
    /// Kept as raw JSON: provider indexes are occasionally malformed and the
    /// abstract reconstructor is the component that decides how to degrade.
    pub raw_abstract_inverted_index: Option<Map<String, Value>>,
    pub concepts: Vec<Concept>,
    pub counts_by_year: Vec<YearCount>,
    pub referenced_works_count: i64,
    pub cited_by_count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Authorship {
    pub countries: Vec<String>,
    pub institution_ids: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Concept {
    pub level: Option<i64>,
}

/// One entry of the provider's citation time series.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct YearCount {
    pub year: i32,
    pub cited_by_count: i64,
}

/// Display-level paper summary returned to the caller alongside the risk
/// assessment. When feature extraction fails this is all the scorer gets,
/// so missing fields are encoded with the display sentinels above.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaperInfo {
    pub doi: String,
    pub title: String,
    pub authors: String,
    pub journal: String,
    pub publication_year: Option<i32>,
    pub citations: i64,
    pub is_open_access: bool,
}
