//! Device-control interface wrapper.
//!
//! All interaction with the connected Android device goes through the `adb`
//! binary: one command to query installed-package metadata and one to
//! install a local APK. Both calls block until the tool exits. Parsing of
//! the `dumpsys` output is kept in a standalone function so it can be unit
//! tested against captured sample output without a real device.

use crate::libs::error::UpdateError;
use crate::msg_debug;
use std::path::Path;
use std::process::Command;

/// Thin wrapper around the `adb` command-line tool.
#[derive(Debug, Default)]
pub struct Adb;

impl Adb {
    pub fn new() -> Self {
        Self
    }

    /// Queries the device for the installed `versionName` of a package.
    ///
    /// Runs `adb shell dumpsys package <package>` and scans the output for
    /// a `versionName=` field. Returns `Ok(None)` when the package is not
    /// installed or the field is absent; a failing adb invocation surfaces
    /// [`UpdateError::DeviceQuery`] instead.
    pub fn package_version(&self, package: &str) -> Result<Option<String>, UpdateError> {
        msg_debug!(format!("Querying installed version of {}", package));
        let output = Command::new("adb")
            .arg("shell")
            .arg("dumpsys")
            .arg("package")
            .arg(package)
            .output()
            .map_err(|e| UpdateError::DeviceQuery(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(UpdateError::DeviceQuery(stderr));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(parse_version_name(&stdout))
    }

    /// Installs a local APK file on the device.
    ///
    /// Runs `adb install <path>` and treats a non-success exit status as
    /// [`UpdateError::Install`] carrying the tool's stderr.
    pub fn install(&self, apk: &Path) -> Result<(), UpdateError> {
        msg_debug!(format!("Installing {}", apk.display()));
        let output = Command::new("adb")
            .arg("install")
            .arg(apk)
            .output()
            .map_err(|e| UpdateError::Install(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(UpdateError::Install(stderr));
        }

        Ok(())
    }
}

/// Extracts the first `versionName=` value from `dumpsys package` output.
///
/// The output is line-oriented text; the field appears indented inside the
/// package section, e.g. `    versionName=0.27.2`. Returns `None` when no
/// line carries the field.
pub fn parse_version_name(output: &str) -> Option<String> {
    output.lines().find_map(|line| {
        line.split_once("versionName=")
            .map(|(_, value)| value.trim().to_string())
            .filter(|value| !value.is_empty())
    })
}
