//! Offline front-end for the weekly delivery tracker.
//!
//! Replays captured live-state files through a session and prints the
//! delivery tables, the automation plan, or the sample check.

mod commands;
mod logging;
mod render;
mod replay;

use anyhow::Result;
use clap::Parser;
use commands::{Plan, Settings, Show, Verify};
use satisfy_bootstrap::ClientConfig;

/// Weekly custom delivery tracker
#[derive(Parser)]
#[command(name = "satisfy")]
#[command(about = "Inspect custom deliveries from captured game state", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Render the delivery and currency tables
    Show(Show),

    /// Check validation samples against the reconstruction
    Verify(Verify),

    /// Print the delivery plan for one NPC
    Plan(Plan),

    /// Print the effective settings
    Settings(Settings),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = ClientConfig::from_env();
    let _guard = logging::init(config.session_id.as_deref())?;

    match cli.command {
        Command::Show(cmd) => cmd.execute(config),
        Command::Verify(cmd) => cmd.execute(config),
        Command::Plan(cmd) => cmd.execute(config).await,
        Command::Settings(cmd) => cmd.execute(config),
    }
}
