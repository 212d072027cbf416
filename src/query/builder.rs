//! Canonical query string assembly

use super::{
    Action, BlockSpecifier, FieldKey, LogQueryRequest, Module, Topic, TopicOperator, TopicPair,
};
use crate::error::QueryError;
use std::fmt;

/// Ordered `key=value` pairs for one request.
///
/// Values are not percent-encoded; that is left to the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryString {
    pairs: Vec<(FieldKey, String)>,
}

impl QueryString {
    /// Pairs in emission order
    pub fn pairs(&self) -> &[(FieldKey, String)] {
        &self.pairs
    }

    /// Value emitted for `key`, if present
    pub fn get(&self, key: FieldKey) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, key: FieldKey) -> bool {
        self.get(key).is_some()
    }
}

impl fmt::Display for QueryString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.pairs.iter().enumerate() {
            if i > 0 {
                f.write_str("&")?;
            }
            write!(f, "{}={}", key, value)?;
        }
        Ok(())
    }
}

/// Build the canonical query string for a `logs/getLogs` request.
///
/// Field order: module, action, address, fromBlock, toBlock, topic0..3, then
/// the six operators from 0-1 to 2-3. Unset topics and operators other than
/// `and` / `or` are left out. Fails on the first block bound that is neither
/// a decimal number nor `latest`. Block numbers are written in canonical
/// decimal form, so `007` goes out as `7`.
pub fn build(request: &LogQueryRequest) -> Result<QueryString, QueryError> {
    let from_block = BlockSpecifier::parse(FieldKey::FromBlock, &request.from_block)?;
    let to_block = BlockSpecifier::parse(FieldKey::ToBlock, &request.to_block)?;

    let mut candidates: Vec<(FieldKey, Option<String>)> = vec![
        (FieldKey::Module, Some(Module::Logs.as_str().to_string())),
        (FieldKey::Action, Some(Action::GetLogs.as_str().to_string())),
        (FieldKey::Address, Some(request.address.clone())),
        (FieldKey::FromBlock, Some(from_block.to_string())),
        (FieldKey::ToBlock, Some(to_block.to_string())),
    ];

    candidates.extend(
        Topic::ALL
            .iter()
            .map(|topic| (topic.field(), request.topic(*topic).map(String::from))),
    );

    candidates.extend(TopicPair::ALL.iter().map(|pair| {
        let operator = request.operator(*pair).and_then(|raw| {
            let parsed = TopicOperator::parse(raw);
            if parsed.is_none() {
                tracing::debug!("Dropping {} value {:?}: not \"and\" or \"or\"", pair.field(), raw);
            }
            parsed
        });
        (pair.field(), operator.map(|op| op.as_str().to_string()))
    }));

    let pairs = candidates
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key, v)))
        .collect();

    Ok(QueryString { pairs })
}
