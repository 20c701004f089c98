use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use pelagic_config::FileFormat;

mod commands;
mod utils;
use commands::{SeedArgs, cmd_init, cmd_middleware, cmd_preview, cmd_seed, cmd_status};

/// pelagic command-line interface.
#[derive(Parser, Debug)]
#[command(name = "pelagic", author, version, about)]
struct Cli {
    /// Log at debug level.
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Initialize pelagic.json with defaults.
    Init,
    /// Import the seed fixture into the content store, once per store.
    Seed {
        /// Seed into a throwaway in-memory store.
        #[arg(long)]
        dry_run: bool,
        /// Fixture file, overriding pelagic.json.
        #[arg(long)]
        fixture: Option<PathBuf>,
        /// Fixture format, overriding the file extension.
        #[arg(long, value_enum)]
        format: Option<FileFormat>,
    },
    /// Show configuration, fixture and store state.
    Status,
    /// Print the draft-preview URL of a document.
    Preview {
        /// Content type UID, e.g. api::home-page.home-page.
        #[arg(long)]
        uid: String,
        #[arg(long)]
        document_id: String,
    },
    /// Show the HTTP middleware stack and its Content-Security-Policy.
    Middleware,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    utils::init_tracing(cli.verbose);

    match cli.command {
        Commands::Init => cmd_init(),
        Commands::Seed {
            dry_run,
            fixture,
            format,
        } => {
            cmd_seed(SeedArgs {
                dry_run,
                fixture,
                format,
            })
            .await
        }
        Commands::Status => cmd_status().await,
        Commands::Preview { uid, document_id } => cmd_preview(&uid, &document_id).await,
        Commands::Middleware => cmd_middleware(),
    }
}
