//! Error taxonomy for the update pipeline.
//!
//! Each stage of a run can fail in exactly one way from the caller's point
//! of view, and none of the failures are retried or recovered locally. The
//! variants keep the stages distinct so tests and callers can tell a device
//! problem from a release-feed problem from a failed install.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum UpdateError {
    /// The device-control command could not be executed or returned a
    /// failure status. Distinct from "package not installed", which is not
    /// an error.
    #[error("Device query failed: {0}")]
    DeviceQuery(String),

    /// The release API was unreachable, returned malformed JSON, or exposed
    /// no installable asset.
    #[error("Failed to fetch latest release: {0}")]
    RemoteFetch(String),

    /// The artifact download or the device install command failed.
    #[error("Install failed: {0}")]
    Install(String),
}
