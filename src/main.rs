//! Starts the i3fox daemon.

use anyhow::{Context, Result};
use clap::Parser;
use i3fox::{Config, I3Gateway, Manager, SnapshotFile};

/// Keeps Firefox windows on their i3 workspaces. Runs for the lifetime of
/// the window manager session; stop it with SIGTERM or SIGINT.
#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let Cli {} = Cli::parse();
    setup_logging();

    let config = Config::load().context("loading configuration")?;
    let store = SnapshotFile::place().context("placing the state file")?;
    let wm = I3Gateway::connect(&config)
        .await
        .context("connecting to the window manager")?;

    let mut manager = Manager::new(config, wm);
    manager
        .reconcile_startup(&store)
        .await
        .context("reconciling startup state")?;
    manager
        .event_loop(&store)
        .await
        .context("processing window events")?;
    Ok(())
}

fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}
