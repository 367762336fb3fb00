//! Command-line interface definition and dispatch.
//!
//! Droidup exposes a single operation, so the CLI carries no subcommands or
//! flags beyond the standard `--help` and `--version` that clap provides.
//! Running the binary performs one update check against the connected device.

pub mod check;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {}

impl Cli {
    /// Parses the command line and runs the update check.
    ///
    /// When `RUST_LOG` or `DROIDUP_DEBUG` is set, a tracing subscriber is
    /// installed first so the `msg_*` macros route through structured logging
    /// instead of plain console output.
    pub async fn menu() -> anyhow::Result<()> {
        let _cli = Self::parse();

        if crate::libs::messages::macros::is_debug_mode() {
            let filter = tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug"));
            tracing_subscriber::fmt().with_env_filter(filter).init();
        }

        check::cmd().await
    }
}
