//! Latest version resolution
//!
//! Entry points that combine a registry with the version reduction:
//! - Tag resolver: highest semantic version among a repository's tags
//! - Package resolver: version the package index reports as current

use semver::Version;
use tracing::debug;

use crate::config::{PackageResolverConfig, TagResolverConfig};
use crate::version::error::RegistryError;
use crate::version::registries::{GitHubRegistry, PypiRegistry};
use crate::version::registry::{PackageIndex, TagSource};
use crate::version::semver::latest_version;

/// Resolves the highest semantic version tag of a GitHub repository.
///
/// Returns `0.0.0` when the repository has no tag that parses as a version.
pub async fn latest_tag(config: &TagResolverConfig) -> Result<Version, RegistryError> {
    let registry = GitHubRegistry::new(&config.api_url, &config.token)?;
    latest_tag_from(&registry, &config.repository).await
}

/// Resolves the highest semantic version tag using any tag source.
pub async fn latest_tag_from<S>(source: &S, repository: &str) -> Result<Version, RegistryError>
where
    S: TagSource + ?Sized,
{
    let tags = source.fetch_tags(repository).await?;
    let latest = latest_version(&tags);
    debug!(
        "Resolved {} from {} tags of {}",
        latest,
        tags.len(),
        repository
    );
    Ok(latest)
}

/// Resolves the version PyPI currently publishes for a package.
pub async fn latest_package_version(
    config: &PackageResolverConfig,
) -> Result<String, RegistryError> {
    let registry = PypiRegistry::new(&config.index_url)?;
    latest_package_version_from(&registry, &config.package).await
}

/// Resolves the current version of a package using any package index.
pub async fn latest_package_version_from<I>(
    index: &I,
    package_name: &str,
) -> Result<String, RegistryError>
where
    I: PackageIndex + ?Sized,
{
    index.fetch_current_version(package_name).await
}
