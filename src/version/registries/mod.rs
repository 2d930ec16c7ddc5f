//! Registry implementations for fetching versions

pub mod github;
pub mod pypi;

pub use github::GitHubRegistry;
pub use pypi::PypiRegistry;

use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use tracing::warn;

use crate::config::USER_AGENT;
use crate::version::error::RegistryError;

/// Builds the HTTP client shared by all registries
fn build_client(timeout: Duration) -> Result<Client, RegistryError> {
    Ok(Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()?)
}

/// Maps a non-success response to the matching `RegistryError`
fn check_status(response: Response, name: &str) -> Result<Response, RegistryError> {
    let status = response.status();

    if status == StatusCode::NOT_FOUND {
        return Err(RegistryError::NotFound(name.to_string()));
    }

    if status == StatusCode::TOO_MANY_REQUESTS {
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok());
        return Err(RegistryError::RateLimited {
            retry_after_secs: retry_after,
        });
    }

    if !status.is_success() {
        warn!("Upstream returned status {}: {}", status, response.url());
        return Err(RegistryError::Status {
            status,
            url: response.url().to_string(),
        });
    }

    Ok(response)
}
