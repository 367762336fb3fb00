#[cfg(test)]
mod tests {
    use droidup::libs::error::UpdateError;
    use droidup::libs::messages::Message;
    use droidup::libs::updater::{filename_from_url, needs_update, Target, Updater};
    use semver::Version;
    use test_context::{test_context, TestContext};

    /// Shared version fixtures for the decision-rule scenarios.
    struct UpdaterTestContext {
        older: Version,
        current: Version,
        remote: Version,
    }

    impl TestContext for UpdaterTestContext {
        fn setup() -> Self {
            UpdaterTestContext {
                older: Version::parse("2.4.0").unwrap(),
                current: Version::parse("2.5.0").unwrap(),
                remote: Version::parse("2.5.0").unwrap(),
            }
        }
    }

    #[test_context(UpdaterTestContext)]
    #[test]
    fn test_install_when_nothing_installed(ctx: &mut UpdaterTestContext) {
        // Scenario A: no installed version detected.
        assert!(needs_update(None, &ctx.remote));
    }

    #[test_context(UpdaterTestContext)]
    #[test]
    fn test_no_install_when_current(ctx: &mut UpdaterTestContext) {
        // Scenario B: device already runs the remote version.
        assert!(!needs_update(Some(&ctx.current), &ctx.remote));
    }

    #[test_context(UpdaterTestContext)]
    #[test]
    fn test_install_when_behind(ctx: &mut UpdaterTestContext) {
        // Scenario C: device is one release behind.
        assert!(needs_update(Some(&ctx.older), &ctx.remote));
    }

    #[test]
    fn test_semver_ordering_is_numeric_not_lexicographic() {
        let low = Version::parse("1.2.0").unwrap();
        let high = Version::parse("1.10.0").unwrap();
        assert!(low < high);
        assert!(needs_update(Some(&low), &high));
    }

    #[test]
    fn test_prerelease_orders_below_release() {
        let prerelease = Version::parse("1.0.0-beta").unwrap();
        let release = Version::parse("1.0.0").unwrap();
        assert!(prerelease < release);
        // A device on the release never "updates" to its own pre-release.
        assert!(!needs_update(Some(&release), &prerelease));
        assert!(needs_update(Some(&prerelease), &release));
    }

    #[test]
    fn test_equal_versions_do_not_update() {
        let version = Version::parse("1.0.0").unwrap();
        assert!(!needs_update(Some(&version), &version));
    }

    #[test]
    fn test_filename_from_url_takes_last_segment() {
        let url = "https://github.com/TeamNewPipe/NewPipe/releases/download/v0.27.2/NewPipe_v0.27.2.apk";
        assert_eq!(filename_from_url(url), "NewPipe_v0.27.2.apk");
    }

    #[test]
    fn test_filename_from_url_without_slashes() {
        assert_eq!(filename_from_url("NewPipe.apk"), "NewPipe.apk");
    }

    #[test]
    fn test_upgrade_message_reports_none_when_not_installed() {
        let message = Message::Upgraded {
            app: "NewPipe".to_string(),
            from: "None".to_string(),
            to: "2.5.0".to_string(),
        };
        assert_eq!(message.to_string(), "Upgraded NewPipe from None to 2.5.0");
    }

    #[test]
    fn test_upgrade_message_reports_both_versions() {
        let message = Message::Upgraded {
            app: "NewPipe".to_string(),
            from: "2.4.0".to_string(),
            to: "2.5.0".to_string(),
        };
        assert_eq!(message.to_string(), "Upgraded NewPipe from 2.4.0 to 2.5.0");
    }

    #[test]
    fn test_up_to_date_message() {
        let message = Message::AlreadyUpToDate {
            app: "NewPipe".to_string(),
            version: "2.5.0".to_string(),
        };
        assert_eq!(message.to_string(), "NewPipe is already up to date (v2.5.0)");
    }

    /// Serves a single HTTP response on an ephemeral local port.
    async fn serve_once(body: &'static str, content_type: &'static str) -> std::net::SocketAddr {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            if let Ok((mut stream, _)) = listener.accept().await {
                use tokio::io::{AsyncReadExt, AsyncWriteExt};
                let mut buf = [0u8; 1024];
                let _ = stream.read(&mut buf).await;
                let response = format!(
                    "HTTP/1.1 200 OK\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    content_type,
                    body.len(),
                    body
                );
                let _ = stream.write_all(response.as_bytes()).await;
            }
        });
        addr
    }

    #[tokio::test]
    async fn test_install_from_unreachable_url_is_install_error() {
        // Port 1 refuses the connection; the failure must surface as the
        // install stage.
        let updater = Updater::with_target(Target::newpipe(), "http://127.0.0.1:1");
        let err = updater.install_from_url("http://127.0.0.1:1/NewPipe.apk").await.unwrap_err();
        assert!(matches!(err, UpdateError::Install(_)));
    }

    #[tokio::test]
    async fn test_download_failure_removes_scoped_directory() {
        let parent = tempfile::tempdir().unwrap();
        let updater = Updater::with_target(Target::newpipe(), "http://127.0.0.1:1");

        let err = updater
            .install_from_url_in("http://127.0.0.1:1/NewPipe.apk", parent.path())
            .await
            .unwrap_err();

        assert!(matches!(err, UpdateError::Install(_)));
        assert_eq!(std::fs::read_dir(parent.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_scoped_directory_removed_after_download() {
        // Serve the artifact locally so the download succeeds and the scoped
        // directory actually holds a file before the device install runs.
        let addr = serve_once("apk-bytes", "application/vnd.android.package-archive").await;
        let parent = tempfile::tempdir().unwrap();
        let updater = Updater::with_target(Target::newpipe(), "http://127.0.0.1:1");

        // The device install step has no device to talk to on a test runner;
        // directory removal must not depend on how the run ends.
        let _ = updater
            .install_from_url_in(&format!("http://{}/NewPipe.apk", addr), parent.path())
            .await;

        assert_eq!(std::fs::read_dir(parent.path()).unwrap().count(), 0);
    }
}
