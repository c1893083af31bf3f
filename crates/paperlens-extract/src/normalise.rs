//! Work Normalizer — maps a raw provider document into the canonical [`Work`]
//! record. Tolerant of absent or null nested objects at every level: the
//! contract is that this never fails, it only defaults.

use serde_json::Value;

use crate::models::{
    Authorship, Concept, PaperInfo, Work, YearCount, AUTHORS_UNAVAILABLE, JOURNAL_UNAVAILABLE,
    TITLE_UNAVAILABLE,
};

const DOI_RESOLVER_PREFIX: &str = "https://doi.org/";

/// Strip a leading resolver URL and surrounding whitespace from a DOI.
pub fn normalise_doi(doi: &str) -> String {
    let doi = doi.trim();
    doi.strip_prefix(DOI_RESOLVER_PREFIX).unwrap_or(doi).to_string()
}

/// Normalize a raw work document. Total: any subset of keys may be absent or
/// null and every such gap becomes an explicit `None`/empty field.
pub fn work_from_json(doc: &Value) -> Work {
    // primary_location and source may each be null independently
    let source = &doc["primary_location"]["source"];
    let journal_name = source["display_name"].as_str().map(String::from);
    let publisher = source["host_organization_name"].as_str().map(String::from);
    let source_id = source["id"].as_str().map(String::from);

    let authorships = doc
        .get("authorships")
        .and_then(Value::as_array)
        .map(|entries| entries.iter().map(authorship_from_json).collect());

    let concepts = doc["concepts"]
        .as_array()
        .unwrap_or(&vec![])
        .iter()
        .map(|c| Concept { level: c["level"].as_i64() })
        .collect();

    let counts_by_year = doc["counts_by_year"]
        .as_array()
        .unwrap_or(&vec![])
        .iter()
        .filter_map(|entry| {
            Some(YearCount {
                year: entry["year"].as_i64()? as i32,
                cited_by_count: entry["cited_by_count"].as_i64().unwrap_or(0),
            })
        })
        .collect();

    Work {
        doi: normalise_doi(doc["doi"].as_str().unwrap_or("")),
        title: doc["title"].as_str().map(String::from),
        publication_year: doc["publication_year"].as_i64().map(|y| y as i32),
        article_type: doc["type"].as_str().map(String::from),
        is_open_access: doc["open_access"]["is_oa"].as_bool().unwrap_or(false),
        authorships,
        journal_name,
        publisher,
        source_id,
        raw_abstract_inverted_index: doc["abstract_inverted_index"].as_object().cloned(),
        concepts,
        counts_by_year,
        referenced_works_count: doc["referenced_works_count"].as_i64().unwrap_or(0),
        cited_by_count: doc["cited_by_count"].as_i64().unwrap_or(0),
    }
}

fn authorship_from_json(entry: &Value) -> Authorship {
    let countries = entry["countries"]
        .as_array()
        .unwrap_or(&vec![])
        .iter()
        .filter_map(|c| c.as_str())
        .map(String::from)
        .collect();

    let institution_ids = entry["institutions"]
        .as_array()
        .unwrap_or(&vec![])
        .iter()
        .filter_map(|inst| inst["id"].as_str())
        .map(String::from)
        .collect();

    Authorship { countries, institution_ids }
}

/// Display-level extraction used when typed feature extraction is not
/// possible: joins author display names and reads counts straight off the
/// raw document, substituting sentinels for anything absent.
pub fn basic_paper_info(doi: &str, doc: &Value) -> PaperInfo {
    PaperInfo {
        doi: normalise_doi(doi),
        title: doc["title"]
            .as_str()
            .filter(|t| !t.is_empty())
            .unwrap_or(TITLE_UNAVAILABLE)
            .to_string(),
        authors: display_authors(doc),
        journal: doc["primary_location"]["source"]["display_name"]
            .as_str()
            .unwrap_or(JOURNAL_UNAVAILABLE)
            .to_string(),
        publication_year: doc["publication_year"].as_i64().map(|y| y as i32),
        citations: doc["cited_by_count"].as_i64().unwrap_or(0),
        is_open_access: doc["open_access"]["is_oa"].as_bool().unwrap_or(false),
    }
}

/// Join author display names, truncating with `et al.` after three.
fn display_authors(doc: &Value) -> String {
    let empty = vec![];
    let names: Vec<&str> = doc["authorships"]
        .as_array()
        .unwrap_or(&empty)
        .iter()
        .filter_map(|a| a["author"]["display_name"].as_str())
        .collect();

    if names.is_empty() {
        AUTHORS_UNAVAILABLE.to_string()
    } else if names.len() <= 3 {
        names.join(", ")
    } else {
        format!("{}, et al.", names[..2].join(", "))
    }
}
