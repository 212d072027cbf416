//! bscscan-logs CLI - BscScan event log queries

use bscscan_logs::cli::{config, logs, Cli, Commands};
use bscscan_logs::{ConfigFile, Network};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(EnvFilter::new(filter))
        .init();

    match &cli.command {
        Commands::Query(args) => logs::handle_query(args),

        Commands::Fetch(args) => {
            let file = ConfigFile::load_default()?.unwrap_or_default();

            let mut settings = file.settings;
            if let Some(network) = &cli.network {
                settings.network = network.parse::<Network>()?;
            }

            // Flag and environment take precedence over the file
            let api_key = cli.api_key.clone().or(file.api_key);

            logs::handle_fetch(args, &settings, api_key, cli.quiet).await
        }

        Commands::Config { action } => config::handle(action),
    }
}
