//! Copydesk CLI binary.

mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use copydesk::{CopydeskConfig, CopydeskResult, LogConfig, Settings, init_logging};
use std::path::PathBuf;

/// Log file used by the studio when `--log-file` is not given.
const STUDIO_LOG_FILE: &str = "copydesk.log";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // The studio owns the terminal, so its logs always go to a file
    let log_file = match (&cli.command, cli.log_file.clone()) {
        (_, Some(path)) => Some(path),
        (Commands::Studio, None) => Some(PathBuf::from(STUDIO_LOG_FILE)),
        _ => None,
    };
    init_logging(
        &LogConfig::for_verbosity(cli.verbose)
            .with_json_logs(cli.json_logs)
            .with_log_file(log_file),
    )?;

    if let Err(e) = run(cli).await {
        tracing::error!(error = %e, "Command failed");
        return Err(e.into());
    }
    Ok(())
}

async fn run(cli: Cli) -> CopydeskResult<()> {
    let settings = Settings::from_env();
    let config = match &cli.config {
        Some(path) => CopydeskConfig::from_file(path)?,
        None => CopydeskConfig::load()?,
    };

    match cli.command {
        Commands::Studio => cli::launch_studio(&settings, &config).await,
        Commands::Generate(args) => cli::handle_generate(args, &settings, &config).await,
        Commands::History { limit, json } => {
            cli::handle_history(limit, json, &settings, &config).await
        }
        Commands::CheckSheet { append_test_row } => {
            cli::handle_check_sheet(append_test_row, &settings).await
        }
    }
}
