//! Abstract reconstruction from word → position inverted indexes.
//!
//! OpenAlex encodes abstracts compactly as a mapping from each distinct word
//! to the zero-based token positions it occupies. Reconstruction inverts that
//! mapping and emits words in position order. All failure modes degrade to an
//! empty string by design; an empty abstract is a feature value, not an error.

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

lazy_static! {
    /// Whole-word vocabulary marking a retraction notice rather than a real
    /// abstract. A notice's own text must not leak as the paper's abstract.
    static ref RETRACTION_VOCAB: Regex =
        Regex::new(r"(?i)\b(retracted|retraction|withdrawn)\b").unwrap();
}

/// Rebuild the plain-text abstract from an inverted index.
///
/// Returns the space-joined words in ascending position order, or an empty
/// string for a null/empty/malformed index (non-array positions, non-integer
/// position values).
pub fn reconstruct_abstract(index: Option<&Map<String, Value>>) -> String {
    let Some(index) = index else {
        return String::new();
    };

    let mut by_position: BTreeMap<i64, &str> = BTreeMap::new();
    for (word, positions) in index {
        let Some(positions) = positions.as_array() else {
            return String::new();
        };
        for pos in positions {
            let Some(pos) = pos.as_i64() else {
                return String::new();
            };
            by_position.insert(pos, word.as_str());
        }
    }

    by_position.values().copied().collect::<Vec<_>>().join(" ")
}

/// Whole-word, case-insensitive match against the retraction vocabulary.
pub fn is_retraction_notice(text: &str) -> bool {
    RETRACTION_VOCAB.is_match(text)
}

/// Redaction rule: a reconstructed abstract that matches the retraction
/// vocabulary is treated as empty.
pub fn redact(text: String) -> String {
    if is_retraction_notice(&text) {
        String::new()
    } else {
        text
    }
}

/// Abstract length in tokens: the maximum position + 1 observed across all
/// words, 0 when no index exists. Computed on the raw index, before any
/// redaction, so a redacted notice still reports its true length.
pub fn index_length(index: Option<&Map<String, Value>>) -> i64 {
    let Some(index) = index else {
        return 0;
    };

    let mut max_pos: Option<i64> = None;
    for positions in index.values() {
        if let Some(positions) = positions.as_array() {
            for pos in positions {
                if let Some(pos) = pos.as_i64() {
                    max_pos = Some(max_pos.map_or(pos, |m| m.max(pos)));
                }
            }
        }
    }

    max_pos.map_or(0, |m| (m + 1).max(0))
}
