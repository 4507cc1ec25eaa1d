// SPDX-License-Identifier: GPL-3.0-only

use clap::{Parser, Subcommand};

mod cli;

#[derive(Parser)]
#[command(name = "scanshot")]
#[command(about = "Capture and barcode-scan history utility")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the persisted photo and barcode history
    History,

    /// Clear the barcode scan history
    Clear {
        /// Also clear the captured photo history (requires
        /// allow_photo_clear in the config)
        #[arg(long)]
        photos: bool,
    },

    /// Resolve a barcode payload to the URL that would be opened
    Resolve {
        /// The decoded barcode payload
        payload: String,

        /// Launch the resolved URL with the system handler
        #[arg(short, long)]
        open: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    // Set RUST_LOG environment variable to control log level
    // Examples: RUST_LOG=debug, RUST_LOG=scanshot=debug, RUST_LOG=info
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(true)
        .with_level(true)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::History => cli::show_history(),
        Commands::Clear { photos } => cli::clear_history(photos),
        Commands::Resolve { payload, open } => cli::resolve_payload(&payload, open),
    }
}
