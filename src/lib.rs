//! bscscan-logs - Typed client for the BscScan event log API
//!
//! Builds `module=logs&action=getLogs` query strings with a fixed field
//! order and validated block bounds, and sends them to the explorer.
//!
//! # Example
//!
//! ```rust
//! use bscscan_logs::{LogQueryRequest, Topic, TopicPair};
//!
//! let query = LogQueryRequest::new(4_993_830u64, 4_993_832u64)
//!     .with_address("0xe561479bebee0e606c19bb1973fc4761613e3c42")
//!     .with_topic(Topic::T0, "0xddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef")
//!     .with_topic(Topic::T1, "0x000000000000000000000000730e2065b9daee84c3003c05bf6d2b3a08e55667")
//!     .with_operator(TopicPair::T0T1, "and")
//!     .build()?;
//!
//! assert!(query.to_string().starts_with("module=logs&action=getLogs&address="));
//! # Ok::<(), bscscan_logs::QueryError>(())
//! ```

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod query;

// Re-exports for convenience
pub use client::{parse_logs_response, Client, LogEntry};
pub use config::{ConfigFile, Network, Settings};
pub use error::{ApiError, ConfigError, Error, QueryError, Result};
pub use query::{
    build, Action, BlockSpecifier, FieldKey, LogQueryRequest, Module, QueryString, Topic,
    TopicOperator, TopicPair,
};
