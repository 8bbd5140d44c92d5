//! Banter CLI entry point.
//!
//! Binary name: `banter`
//!
//! Parses CLI arguments, loads configuration, then dispatches to the
//! interactive chat loop or one of the utility commands.

mod cli;
mod state;

use clap::Parser;
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,banter=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    // Shell completions don't need app state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "banter", &mut std::io::stdout());
        return Ok(());
    }

    // Resolve the data directory and load configuration
    let state = AppState::init().await?;

    match cli.command {
        Commands::Chat => {
            cli::chat::loop_runner::run_chat_loop(state).await?;
        }

        Commands::Status => {
            cli::status::status(&state, cli.json).await?;
        }

        Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}
