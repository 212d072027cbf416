//! CLI command modules
//!
//! Each subcommand has its own module with argument definitions and handlers.

pub mod config;
pub mod logs;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bscscan-logs")]
#[command(version, about = "Query BNB Smart Chain event logs through the BscScan API")]
#[command(after_help = r#"EXAMPLES:
    # Print the query string for Transfer events from one sender
    bscscan-logs query -a 0xe561479bebee0e606c19bb1973fc4761613e3c42 \
                       -f 4993830 -t 4993832 \
                       --topic0 0xddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef \
                       --topic1 0x000000000000000000000000730e2065b9daee84c3003c05bf6d2b3a08e55667 \
                       --topic0-1-opr and

    # Fetch the same logs as JSON
    bscscan-logs fetch -a 0xe561... -f 4993830 -t 4993832 --output json

ENVIRONMENT VARIABLES:
    BSCSCAN_API_KEY    BscScan API key

CONFIG FILE:
    Default: ~/.config/bscscan-logs/config.toml
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Network to query (mainnet, testnet); overrides the config file
    #[arg(long, global = true)]
    pub network: Option<String>,

    /// BscScan API key
    #[arg(long, env = "BSCSCAN_API_KEY", global = true, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the getLogs query string without sending it
    Query(logs::LogsArgs),

    /// Fetch event logs from BscScan
    Fetch(logs::FetchArgs),

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: config::ConfigCommands,
    },
}
