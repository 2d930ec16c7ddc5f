//! Registry traits for fetching version data from remote sources

#[cfg(test)]
use mockall::automock;

use crate::version::error::RegistryError;

/// Trait for listing the tags of a source-code repository
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait TagSource: Send + Sync {
    /// Fetches the raw tag names of a repository
    ///
    /// # Arguments
    /// * `repository` - The repository in `owner/name` form (e.g., "rust-lang/cargo")
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Tag names exactly as reported by the host
    /// * `Err(RegistryError)` - If the fetch fails
    async fn fetch_tags(&self, repository: &str) -> Result<Vec<String>, RegistryError>;
}

/// Trait for looking up the currently published version of a package
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait PackageIndex: Send + Sync {
    /// Fetches the version the index reports as current for a package
    async fn fetch_current_version(&self, package_name: &str) -> Result<String, RegistryError>;
}
