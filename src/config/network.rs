//! Explorer networks

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// BscScan deployments the client can talk to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Mainnet,
    Testnet,
}

impl Network {
    /// API endpoint for this network
    pub fn base_url(&self) -> &'static str {
        match self {
            Network::Mainnet => "https://api.bscscan.com/api",
            Network::Testnet => "https://api-testnet.bscscan.com/api",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Network::Mainnet => "BNB Smart Chain",
            Network::Testnet => "BNB Smart Chain Testnet",
        }
    }
}

impl FromStr for Network {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mainnet" | "bsc" | "main" => Ok(Network::Mainnet),
            "testnet" | "bsc-testnet" | "test" => Ok(Network::Testnet),
            _ => Err(ConfigError::UnknownNetwork(s.to_string())),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
