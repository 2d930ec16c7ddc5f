//! GitHub tags API registry implementation

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::REQUEST_TIMEOUT;
use crate::version::error::RegistryError;
use crate::version::registries::{build_client, check_status};
use crate::version::registry::TagSource;

/// Tags requested in the single page we fetch (GitHub's maximum)
const TAGS_PER_PAGE: &str = "100";

/// Entry of the GitHub tags API response
#[derive(Debug, Deserialize)]
struct Tag {
    name: String,
}

/// Registry implementation for the GitHub tags API
pub struct GitHubRegistry {
    client: Client,
    base_url: String,
    token: String,
}

impl GitHubRegistry {
    /// Creates a new GitHubRegistry authenticating with a bearer token
    pub fn new(base_url: &str, token: &str) -> Result<Self, RegistryError> {
        Self::with_timeout(base_url, token, REQUEST_TIMEOUT)
    }

    pub(crate) fn with_timeout(
        base_url: &str,
        token: &str,
        timeout: Duration,
    ) -> Result<Self, RegistryError> {
        Ok(Self {
            client: build_client(timeout)?,
            base_url: base_url.to_string(),
            token: token.to_string(),
        })
    }
}

#[async_trait::async_trait]
impl TagSource for GitHubRegistry {
    async fn fetch_tags(&self, repository: &str) -> Result<Vec<String>, RegistryError> {
        let url = format!(
            "{}/repos/{}/tags?per_page={}",
            self.base_url, repository, TAGS_PER_PAGE
        );
        debug!("Fetching GitHub tags: {}", url);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .header("Accept", "application/vnd.github+json")
            .send()
            .await
            .map_err(RegistryError::transport)?;

        let response = check_status(response, repository)?;

        let tags: Vec<Tag> = response.json().await.map_err(|e| {
            warn!("Failed to parse GitHub tags response: {}", e);
            RegistryError::InvalidResponse(e.to_string())
        })?;

        debug!("Found {} tags for repository {}", tags.len(), repository);

        Ok(tags.into_iter().map(|t| t.name).collect())
    }
}
