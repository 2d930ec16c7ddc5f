//! PyPI registry client for looking up the published version of a package

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::config::REQUEST_TIMEOUT;
use crate::version::error::RegistryError;
use crate::version::registries::{build_client, check_status};
use crate::version::registry::PackageIndex;

/// PyPI registry client
pub struct PypiRegistry {
    client: Client,
    base_url: String,
}

impl PypiRegistry {
    pub fn new(base_url: &str) -> Result<Self, RegistryError> {
        Self::with_timeout(base_url, REQUEST_TIMEOUT)
    }

    pub(crate) fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, RegistryError> {
        Ok(Self {
            client: build_client(timeout)?,
            base_url: base_url.to_string(),
        })
    }
}

/// PyPI JSON API response structure
#[derive(Debug, Deserialize)]
struct PypiResponse {
    info: PypiInfo,
}

/// Package information from PyPI
#[derive(Debug, Deserialize)]
struct PypiInfo {
    /// Latest version (according to PyPI)
    version: String,
}

#[async_trait::async_trait]
impl PackageIndex for PypiRegistry {
    async fn fetch_current_version(&self, package_name: &str) -> Result<String, RegistryError> {
        let url = format!("{}/pypi/{}/json", self.base_url, package_name);
        debug!("Fetching PyPI package: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(RegistryError::transport)?;

        let response = check_status(response, package_name)?;

        let pypi_response: PypiResponse = response
            .json()
            .await
            .map_err(|e| RegistryError::InvalidResponse(e.to_string()))?;

        debug!(
            "PyPI reports version {} for package {}",
            pypi_response.info.version, package_name
        );

        Ok(pypi_response.info.version)
    }
}
