//! paperlens-extract — Feature extraction pipeline.
//!
//! Turns a raw, partially-missing provider document into a canonical [`models::Work`]
//! record and from there into a flat [`features::FeatureRecord`] ready for scoring.
//! Every step is total: missing or malformed provider data degrades to explicit
//! defaults instead of errors.

pub mod abstract_index;
pub mod features;
pub mod models;
pub mod normalise;
pub mod sources;
