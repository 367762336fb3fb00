//! GitHub release API client.
//!
//! Resolves the latest published release of the target repository to a
//! semantic version and a direct download URL for its APK asset. The asset
//! list returned by the latest-release endpoint carries API resource URLs,
//! not downloadable files, so resolving the real location takes a second
//! fetch of the asset's own metadata. That two-hop shape is part of the
//! GitHub asset model and is kept as an explicit two-step fetch here.

use crate::libs::error::UpdateError;
use crate::msg_debug;
use reqwest::Client;
use semver::Version;
use serde::Deserialize;

/// Default base URL of the release API.
pub const GITHUB_API_URL: &str = "https://api.github.com";

/// File extension of the installable artifact.
pub const APK_EXTENSION: &str = ".apk";

/// Latest-release payload, reduced to the fields the update check reads.
#[derive(Debug, Deserialize)]
pub struct Release {
    pub name: String,
    pub assets: Vec<Asset>,
}

/// A release asset: display name plus its API resource URL.
#[derive(Debug, Deserialize)]
pub struct Asset {
    pub name: String,
    pub url: String,
}

/// Asset metadata fetched from the asset's API URL.
#[derive(Debug, Deserialize)]
struct AssetDetails {
    browser_download_url: String,
}

/// The latest published release, resolved to its installable form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteRelease {
    pub version: Version,
    pub download_url: String,
}

/// Client for the latest-release endpoint of a single repository.
#[derive(Debug)]
pub struct ReleaseClient {
    client: Client,
    base_url: String,
    repo: String,
}

impl ReleaseClient {
    /// Creates a client for `repo` (an `owner/name` slug) against the given
    /// API base URL.
    pub fn new(base_url: &str, repo: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            repo: repo.to_string(),
        }
    }

    /// Fetches the latest release and resolves its APK download URL.
    pub async fn latest(&self) -> Result<RemoteRelease, UpdateError> {
        let url = format!("{}/repos/{}/releases/latest", self.base_url, self.repo);
        msg_debug!(format!("Fetching latest release from {}", url));

        let release = self
            .get(&url)
            .await?
            .json::<Release>()
            .await
            .map_err(|e| UpdateError::RemoteFetch(e.to_string()))?;

        let version = release_version(&release.name)?;
        let asset = find_apk_asset(&release.assets)
            .ok_or_else(|| UpdateError::RemoteFetch(format!("release {} has no {} asset", release.name, APK_EXTENSION)))?;

        // Second hop: the asset's `url` is an API resource, not the file.
        msg_debug!(format!("Resolving download URL for asset {}", asset.name));
        let details = self
            .get(&asset.url)
            .await?
            .json::<AssetDetails>()
            .await
            .map_err(|e| UpdateError::RemoteFetch(e.to_string()))?;

        Ok(RemoteRelease {
            version,
            download_url: details.browser_download_url,
        })
    }

    /// Starts a download of the given URL, following redirects.
    ///
    /// Failures here are install-stage failures: the URL comes from release
    /// metadata that already fetched successfully.
    pub async fn download(&self, url: &str) -> Result<reqwest::Response, UpdateError> {
        self.client
            .get(url)
            .header(reqwest::header::USER_AGENT, env!("CARGO_PKG_NAME"))
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            .map_err(|e| UpdateError::Install(e.to_string()))
    }

    async fn get(&self, url: &str) -> Result<reqwest::Response, UpdateError> {
        // GitHub rejects requests without a User-Agent header.
        self.client
            .get(url)
            .header(reqwest::header::USER_AGENT, env!("CARGO_PKG_NAME"))
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            .map_err(|e| UpdateError::RemoteFetch(e.to_string()))
    }
}

/// Parses the release version out of a release name.
///
/// Upstream names releases with a fixed single-character tag prefix
/// ("v0.27.2"), so the first character is stripped before semver parsing.
/// TODO: this breaks if upstream drops the "v" prefix; revisit if the
/// naming convention changes.
pub fn release_version(name: &str) -> Result<Version, UpdateError> {
    let stripped = name.get(1..).unwrap_or("");
    Version::parse(stripped).map_err(|e| UpdateError::RemoteFetch(format!("release name {:?}: {}", name, e)))
}

/// Returns the first asset whose name ends in the APK extension.
pub fn find_apk_asset(assets: &[Asset]) -> Option<&Asset> {
    assets.iter().find(|asset| asset.name.ends_with(APK_EXTENSION))
}
