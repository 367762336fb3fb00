//! Update check orchestration.
//!
//! Ties the device query, the release lookup, and the install together into
//! the single linear run the tool performs: read the installed version,
//! fetch the latest release, compare, and install when the device is
//! behind. Each run is stateless; nothing is cached between invocations.

use crate::libs::adb::Adb;
use crate::libs::error::UpdateError;
use crate::libs::messages::Message;
use crate::libs::release::{ReleaseClient, GITHUB_API_URL};
use crate::{msg_debug, msg_info, msg_success, msg_warning};
use anyhow::Result;
use semver::Version;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// The application a run checks and updates.
#[derive(Debug, Clone)]
pub struct Target {
    /// Human-readable name used in status messages.
    pub app_name: String,
    /// Android package id queried on the device.
    pub package: String,
    /// GitHub `owner/name` slug of the release repository.
    pub repo: String,
}

impl Target {
    /// The default target: the NewPipe media player.
    pub fn newpipe() -> Self {
        Self {
            app_name: "NewPipe".to_string(),
            package: "org.schabi.newpipe".to_string(),
            repo: "TeamNewPipe/NewPipe".to_string(),
        }
    }
}

/// Performs one update check against the connected device.
#[derive(Debug)]
pub struct Updater {
    adb: Adb,
    releases: ReleaseClient,
    target: Target,
}

impl Updater {
    /// Creates an updater for the default target against the public GitHub API.
    pub fn new() -> Self {
        Self::with_target(Target::newpipe(), GITHUB_API_URL)
    }

    /// Creates an updater for an arbitrary target and API base URL.
    pub fn with_target(target: Target, api_base_url: &str) -> Self {
        Self {
            adb: Adb::new(),
            releases: ReleaseClient::new(api_base_url, &target.repo),
            target,
        }
    }

    /// Runs the full check: query, fetch, compare, and install if needed.
    ///
    /// Prints exactly one status line on success. Any stage failure
    /// propagates as an error and terminates the run.
    pub async fn run(&self) -> Result<()> {
        let installed = self.installed_version()?;
        let remote = self.releases.latest().await?;

        if needs_update(installed.as_ref(), &remote.version) {
            self.install_from_url(&remote.download_url).await?;
            msg_success!(Message::Upgraded {
                app: self.target.app_name.clone(),
                from: installed.map_or_else(|| "None".to_string(), |v| v.to_string()),
                to: remote.version.to_string(),
            });
        } else if let Some(version) = installed {
            msg_info!(Message::AlreadyUpToDate {
                app: self.target.app_name.clone(),
                version: version.to_string(),
            });
        }

        Ok(())
    }

    /// Reads and parses the installed version from the device.
    ///
    /// A `versionName` that is not a semantic version is treated as "not
    /// installed" so the run falls through to the install path rather than
    /// failing on a string the comparison cannot order.
    fn installed_version(&self) -> Result<Option<Version>, UpdateError> {
        let raw = self.adb.package_version(&self.target.package)?;
        Ok(raw.and_then(|value| match Version::parse(&value) {
            Ok(version) => Some(version),
            Err(_) => {
                msg_warning!(Message::InstalledVersionNotSemver(value));
                None
            }
        }))
    }

    /// Downloads the APK into a scoped temporary directory and installs it.
    ///
    /// The directory is removed on every exit path, including download and
    /// install failures, when the `TempDir` guard drops.
    pub async fn install_from_url(&self, download_url: &str) -> Result<(), UpdateError> {
        self.install_from_url_in(download_url, &std::env::temp_dir()).await
    }

    /// Same as [`Updater::install_from_url`], with the parent of the scoped
    /// download directory made explicit so its removal is observable.
    pub async fn install_from_url_in(&self, download_url: &str, parent: &Path) -> Result<(), UpdateError> {
        let tmp_dir = tempfile::tempdir_in(parent).map_err(|e| UpdateError::Install(e.to_string()))?;
        let local_path = tmp_dir.path().join(filename_from_url(download_url));

        msg_debug!(format!("Downloading {} to {}", download_url, local_path.display()));
        let mut response = self.releases.download(download_url).await?;
        let mut file = File::create(&local_path).map_err(|e| UpdateError::Install(e.to_string()))?;
        while let Some(chunk) = response.chunk().await.map_err(|e| UpdateError::Install(e.to_string()))? {
            file.write_all(&chunk).map_err(|e| UpdateError::Install(e.to_string()))?;
        }

        self.adb.install(&local_path)
    }
}

impl Default for Updater {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns true when the remote release should be installed.
///
/// Installs when nothing is installed or the installed version orders
/// strictly below the remote one under semver rules (a pre-release sorts
/// below its release).
pub fn needs_update(installed: Option<&Version>, remote: &Version) -> bool {
    match installed {
        Some(version) => version < remote,
        None => true,
    }
}

/// Derives the local file name from the final path segment of a URL.
pub fn filename_from_url(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}
