//! Log query parameters

use super::{build, QueryString, Topic, TopicPair};
use crate::error::QueryError;

/// Parameters of one `getLogs` call.
///
/// Block bounds and operators are kept as the caller supplied them and are
/// only checked when the query is built. A bad block bound fails the build;
/// an operator other than `and` / `or` is dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogQueryRequest {
    /// Start block: decimal number or `latest`
    pub from_block: String,
    /// End block: decimal number or `latest`
    pub to_block: String,
    /// Contract address, passed through unchecked
    pub address: String,
    /// Indexed by [`Topic::index`]; `None` leaves the topic out of the filter
    pub topics: [Option<String>; 4],
    /// Operators indexed by [`TopicPair::index`]
    pub operators: [Option<String>; 6],
}

impl LogQueryRequest {
    /// Create a request for the given block range
    pub fn new(from_block: impl ToString, to_block: impl ToString) -> Self {
        Self {
            from_block: from_block.to_string(),
            to_block: to_block.to_string(),
            ..Default::default()
        }
    }

    /// Builder-style setter for address
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Builder-style setter for a topic
    pub fn with_topic(mut self, topic: Topic, value: impl Into<String>) -> Self {
        self.topics[topic.index()] = Some(value.into());
        self
    }

    /// Topic value, if one was supplied
    pub fn topic(&self, topic: Topic) -> Option<&str> {
        self.topics[topic.index()].as_deref()
    }

    /// Builder-style setter for the operator between two topics
    pub fn with_operator(mut self, pair: TopicPair, operator: impl Into<String>) -> Self {
        self.operators[pair.index()] = Some(operator.into());
        self
    }

    /// Raw operator value for a pair, if one was supplied
    pub fn operator(&self, pair: TopicPair) -> Option<&str> {
        self.operators[pair.index()].as_deref()
    }

    /// Assemble the query string for this request
    pub fn build(&self) -> Result<QueryString, QueryError> {
        build(self)
    }
}
