//! Display implementation for droidup application messages.
//!
//! Converts structured `Message` values into the human-readable lines the
//! tool prints. Keeping all text here gives a single source of truth for
//! wording and makes the output testable without running a device or
//! hitting the network.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let message = match self {
            // === UPDATE MESSAGES ===
            Message::AlreadyUpToDate { app, version } => format!("{} is already up to date (v{})", app, version),
            Message::Upgraded { app, from, to } => format!("Upgraded {} from {} to {}", app, from, to),
            Message::InstalledVersionNotSemver(value) => {
                format!("Installed versionName '{}' is not a semantic version, treating as not installed", value)
            }
        };
        write!(f, "{}", message)
    }
}
