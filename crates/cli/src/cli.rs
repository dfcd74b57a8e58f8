use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// A tool for generating the `.env` file a headless frontend needs to talk
/// to its backend
#[derive(Parser)]
#[command(name = "envlink")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Envlink {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the env file for a backend profile
    Generate {
        /// Path to the backend profile JSON
        #[arg(short = 'p', long = "profile")]
        profile: PathBuf,

        /// Path to a variable overrides JSON
        #[arg(long = "overrides")]
        overrides: Option<PathBuf>,

        /// Write to this file instead of stdout
        #[arg(short = 'o', long = "output")]
        output: Option<PathBuf>,

        /// Overwrite the output file if it already exists
        #[arg(short = 'f', long = "force")]
        force: bool,
    },
    /// List every variable with its resolved value
    List {
        /// Path to the backend profile JSON
        #[arg(short = 'p', long = "profile")]
        profile: PathBuf,

        /// Path to a variable overrides JSON
        #[arg(long = "overrides")]
        overrides: Option<PathBuf>,

        /// Show verbose JSON output
        #[arg(short = 'j', long = "json")]
        json: bool,
    },
}
