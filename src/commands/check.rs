use crate::libs::updater::Updater;
use anyhow::Result;

/// Executes the device update check.
///
/// This function initializes the `Updater` for the default target
/// application, compares the installed version against the latest GitHub
/// release, and installs the release APK when the device is behind.
pub async fn cmd() -> Result<()> {
    let updater = Updater::new();

    updater.run().await?;

    Ok(())
}
