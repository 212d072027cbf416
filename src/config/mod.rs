//! Configuration management

mod file;
mod network;

pub use file::{ConfigFile, Settings};
pub use network::Network;
