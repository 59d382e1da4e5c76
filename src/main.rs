//! Summa View CLI - front-end for a summarisation endpoint
//!
//! The application logic is contained in lib.rs, and this file is responsible
//! for parsing arguments and handling top-level errors.

use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use summa_view::{logging, oneshot, ui, Config, HttpSummaryService, SummarizeRequest};

#[derive(Parser)]
#[command(name = "summa-view")]
#[command(author, version, about = "TUI front-end for a summarisation endpoint", long_about = None)]
struct Cli {
    /// Path to a config file instead of the default lookup
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Base URL of the summarisation server
    #[arg(long, global = true)]
    endpoint: Option<String>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Send one summarize request and print the result
    Summarise {
        /// Article text to summarise
        #[arg(long, default_value = "")]
        text: String,
        /// Article URL for the server to fetch
        #[arg(long, default_value = "")]
        url: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(endpoint) = cli.endpoint {
        config.endpoint.base_url = endpoint;
    }

    match cli.command {
        Some(Commands::Summarise { text, url }) => {
            logging::init_stderr(&config.log)?;
            let service = HttpSummaryService::new(&config.endpoint)?;
            let printed = oneshot::summarise_once(
                &service,
                &SummarizeRequest::new(text, url),
                &mut io::stdout(),
                &mut io::stderr(),
            )
            .await?;
            Ok(printed.into())
        }
        None => {
            // Default: Launch the TUI
            let _guard = logging::init_file(&config.log)?;
            ui::run(&config).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
