//! OpenAlex works client.
//!
//! API: https://api.openalex.org/works/doi:{doi}
//! Polite pool: set User-Agent with mailto (see OpenAlex etiquette)

use async_trait::async_trait;
use paperlens_common::sandbox::SandboxClient;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument};

use super::MetadataProvider;
use crate::normalise::normalise_doi;

const OA_API_BASE: &str = "https://api.openalex.org/works";

pub struct OpenAlexClient {
    client: SandboxClient,
    user_agent: String,
}

impl OpenAlexClient {
    pub fn new(mailto: &str, timeout: Duration) -> paperlens_common::Result<Self> {
        let client = SandboxClient::new(timeout)?;
        Ok(Self {
            client,
            user_agent: format!("PaperLens/0.1 (mailto:{})", mailto),
        })
    }

    fn work_url(doi: &str) -> String {
        format!("{}/doi:{}", OA_API_BASE, doi)
    }
}

#[async_trait]
impl MetadataProvider for OpenAlexClient {
    /// Resolve a single DOI → raw work document.
    #[instrument(skip(self))]
    async fn fetch_work(&self, doi: &str) -> anyhow::Result<Option<Value>> {
        let doi = normalise_doi(doi);
        if doi.is_empty() {
            return Ok(None);
        }

        let url = Self::work_url(&doi);
        let resp = self
            .client
            .get(&url)?
            .header(reqwest::header::USER_AGENT, &self.user_agent)
            .send()
            .await?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !resp.status().is_success() {
            anyhow::bail!("OpenAlex returned {} for doi {}", resp.status(), doi);
        }

        let body: Value = resp.json().await?;
        debug!(%doi, "fetched work document");
        Ok(Some(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_work_url_uses_doi_filter() {
        assert_eq!(
            OpenAlexClient::work_url("10.1000/x1"),
            "https://api.openalex.org/works/doi:10.1000/x1"
        );
    }

    #[test]
    fn test_client_sandbox_permits_endpoint() {
        let client = OpenAlexClient::new("test@example.com", Duration::from_secs(5)).unwrap();
        assert!(client.client.is_allowed(&OpenAlexClient::work_url("10.1/x")));
    }

    #[tokio::test]
    async fn test_blank_doi_short_circuits() {
        let client = OpenAlexClient::new("test@example.com", Duration::from_secs(5)).unwrap();
        let result = client.fetch_work("   ").await.unwrap();
        assert!(result.is_none());
    }
}
