use reqwest::{Client, ClientBuilder};
use std::collections::HashSet;
use std::time::Duration;
use url::Url;

use crate::error::PaperlensError;

/// A sandbox-capped HTTP client that only allows requests to approved domains.
/// PaperLens talks to exactly one external service (the metadata provider), so
/// the default allowlist is short.
#[derive(Debug, Clone)]
pub struct SandboxClient {
    client: Client,
    allowlist: HashSet<String>,
}

impl SandboxClient {
    pub fn new(timeout: Duration) -> Result<Self, PaperlensError> {
        let mut allowlist = HashSet::new();
        let domains = vec![
            "api.openalex.org", // OpenAlex works API
            "doi.org",          // DOI resolver
            "localhost",        // local stubs in development
            "127.0.0.1",
        ];
        for d in domains {
            allowlist.insert(d.to_string());
        }

        let client = ClientBuilder::new()
            .timeout(timeout)
            .build()
            .map_err(|e| PaperlensError::Provider(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, allowlist })
    }

    /// Appends an exact hostname to the allowlist.
    pub fn allow_domain(&mut self, domain: &str) {
        self.allowlist.insert(domain.to_string());
    }

    /// Validates if a URL is permitted under the current sandbox policy.
    pub fn is_allowed(&self, url: &str) -> bool {
        if let Ok(parsed) = Url::parse(url) {
            if let Some(host) = parsed.host_str() {
                // Exact match or subdomain of an allowed domain
                for allowed in &self.allowlist {
                    if host == allowed || host.ends_with(&format!(".{}", allowed)) {
                        return true;
                    }
                }
            }
        }
        false
    }

    /// Exposes the inner `reqwest::Client` builder pattern safely for GET requests.
    pub fn get(&self, url: &str) -> Result<reqwest::RequestBuilder, PaperlensError> {
        if !self.is_allowed(url) {
            return Err(PaperlensError::Security(format!(
                "Network capabilities capped: domain not in allowlist for URL {}",
                url
            )));
        }
        Ok(self.client.get(url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openalex_allowed() {
        let client = SandboxClient::new(Duration::from_secs(5)).unwrap();
        assert!(client.is_allowed("https://api.openalex.org/works/doi:10.1000/x"));
        assert!(client.is_allowed("https://doi.org/10.1000/x"));
    }

    #[test]
    fn test_unlisted_domain_rejected() {
        let client = SandboxClient::new(Duration::from_secs(5)).unwrap();
        assert!(!client.is_allowed("https://example.com/anything"));
        assert!(client.get("https://example.com/anything").is_err());
    }

    #[test]
    fn test_allow_domain_extends_policy() {
        let mut client = SandboxClient::new(Duration::from_secs(5)).unwrap();
        assert!(!client.is_allowed("https://api.crossref.org/works"));
        client.allow_domain("api.crossref.org");
        assert!(client.is_allowed("https://api.crossref.org/works"));
    }
}
