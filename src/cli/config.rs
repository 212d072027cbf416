//! Configuration management commands

use crate::config::ConfigFile;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show config file path
    Path,

    /// Set BscScan API key
    SetApiKey {
        /// API key
        key: String,
    },

    /// Show current config
    Show,
}

pub fn handle(action: &ConfigCommands) -> anyhow::Result<()> {
    match action {
        ConfigCommands::Path => {
            println!("{}", ConfigFile::default_path().display());
        }

        ConfigCommands::SetApiKey { key } => {
            let mut config = ConfigFile::load_default()?.unwrap_or_default();
            config.set_api_key(key.clone())?;
            println!("API key saved to {}", ConfigFile::default_path().display());
        }

        ConfigCommands::Show => match ConfigFile::load_default()? {
            Some(config) => {
                println!("Network:   {}", config.settings.network);
                println!("Endpoint:  {}", config.settings.base_url());
                println!("Timeout:   {}s", config.settings.timeout_seconds);
                println!(
                    "API key:   {}",
                    if config.api_key.is_some() { "set" } else { "not set" }
                );
            }
            None => {
                println!(
                    "No config file at {}",
                    ConfigFile::default_path().display()
                );
            }
        },
    }

    Ok(())
}
