//! Block specifiers for `fromBlock` / `toBlock`

use super::FieldKey;
use crate::error::QueryError;
use std::fmt;

/// A validated block bound: a block number or the chain head
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockSpecifier {
    Number(u64),
    Latest,
}

impl BlockSpecifier {
    /// Validate a raw block specifier for `field`.
    ///
    /// Accepts plain decimal digits or the exact literal `latest`. Signs,
    /// whitespace, fractions and other casings are rejected.
    pub fn parse(field: FieldKey, value: &str) -> Result<Self, QueryError> {
        if value == "latest" {
            return Ok(BlockSpecifier::Latest);
        }

        let invalid = || QueryError::InvalidBlockSpecifier {
            field,
            value: value.to_string(),
        };

        if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        value
            .parse::<u64>()
            .map(BlockSpecifier::Number)
            .map_err(|_| invalid())
    }
}

impl From<u64> for BlockSpecifier {
    fn from(n: u64) -> Self {
        BlockSpecifier::Number(n)
    }
}

impl fmt::Display for BlockSpecifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockSpecifier::Number(n) => write!(f, "{}", n),
            BlockSpecifier::Latest => f.write_str("latest"),
        }
    }
}
