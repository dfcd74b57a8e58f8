use anyhow::Result;
use clap::Parser;
use tracing::debug;

use envlink_cli::cli::{Commands, Envlink};
use envlink_cli::commands::{generate_command, list_command};

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Envlink::parse();
    match cli.command {
        Commands::Generate {
            profile,
            overrides,
            output,
            force,
        } => {
            debug!("Generating env file from profile: {:?}", profile);
            generate_command(&profile, overrides.as_deref(), output.as_deref(), force)
        }
        Commands::List {
            profile,
            overrides,
            json,
        } => list_command(&profile, overrides.as_deref(), json),
    }
}
