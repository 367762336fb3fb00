/// All user-facing messages, defined in one place so the text lives apart
/// from the logic that emits it.
#[derive(Debug, Clone)]
pub enum Message {
    // === UPDATE MESSAGES ===
    AlreadyUpToDate { app: String, version: String },
    Upgraded { app: String, from: String, to: String },
    InstalledVersionNotSemver(String),
}
