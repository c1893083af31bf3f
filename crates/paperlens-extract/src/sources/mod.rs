//! Metadata provider clients.
//!
//! The pipeline consumes a single raw work document per request; where that
//! document comes from is behind the [`MetadataProvider`] seam so the web
//! layer and tests can swap in stubs.

use async_trait::async_trait;
use serde_json::Value;

pub mod openalex;

pub use openalex::OpenAlexClient;

/// A DOI-addressable bibliographic metadata provider.
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Fetch the raw work document for a DOI.
    /// `Ok(None)` means the provider does not know the DOI.
    async fn fetch_work(&self, doi: &str) -> anyhow::Result<Option<Value>>;
}
