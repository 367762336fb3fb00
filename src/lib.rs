//! # Droidup - Android App Update Checker
//!
//! A command-line utility that keeps a target application on a connected
//! Android device in sync with its latest GitHub release.
//!
//! ## How it works
//!
//! - **Device Query**: Reads the installed `versionName` over adb
//! - **Release Lookup**: Fetches the latest release and its APK asset from
//!   the GitHub release API
//! - **Version Comparison**: Semantic-version ordering decides whether an
//!   update is needed
//! - **Install**: Downloads the APK into a scoped temporary directory and
//!   installs it over adb
//!
//! ## Usage
//!
//! ```rust,no_run
//! use droidup::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod libs;
