use std::time::Duration;

use thiserror::Error;

// =============================================================================
// Request-related constants
// =============================================================================

/// Timeout for every upstream request (10 seconds)
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Default base URL for the GitHub REST API
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

/// Default base URL for the PyPI JSON API
pub const DEFAULT_PYPI_URL: &str = "https://pypi.org";

/// User agent sent with every request. GitHub rejects requests without one.
pub const USER_AGENT: &str = concat!("version-checker/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),
}

/// Inputs for resolving the latest tag of a GitHub repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagResolverConfig {
    /// Repository in `owner/name` form
    pub repository: String,
    /// Bearer token sent in the `Authorization` header
    pub token: String,
    /// GitHub API base URL, without a trailing slash
    pub api_url: String,
}

impl TagResolverConfig {
    pub fn new(
        repository: Option<String>,
        token: Option<String>,
        api_url: String,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            repository: required("repository", repository)?,
            token: required("token", token)?,
            api_url: trim_base_url(api_url),
        })
    }
}

/// Inputs for resolving the published version of a PyPI package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageResolverConfig {
    /// Package name as published on the index
    pub package: String,
    /// Package index base URL, without a trailing slash
    pub index_url: String,
}

impl PackageResolverConfig {
    pub fn new(package: Option<String>, index_url: String) -> Result<Self, ConfigError> {
        Ok(Self {
            package: required("package", package)?,
            index_url: trim_base_url(index_url),
        })
    }
}

fn required(name: &'static str, value: Option<String>) -> Result<String, ConfigError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::Missing(name))
}

fn trim_base_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}
