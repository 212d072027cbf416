//! Wire vocabulary of the logs endpoint

use std::fmt;

/// Query string keys understood by the explorer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    Module,
    Action,
    Address,
    FromBlock,
    ToBlock,
    Topic0,
    Topic1,
    Topic2,
    Topic3,
    Topic0_1Opr,
    Topic0_2Opr,
    Topic0_3Opr,
    Topic1_2Opr,
    Topic1_3Opr,
    Topic2_3Opr,
    /// Appended by the transport, never by the query builder
    ApiKey,
}

impl FieldKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKey::Module => "module",
            FieldKey::Action => "action",
            FieldKey::Address => "address",
            FieldKey::FromBlock => "fromBlock",
            FieldKey::ToBlock => "toBlock",
            FieldKey::Topic0 => "topic0",
            FieldKey::Topic1 => "topic1",
            FieldKey::Topic2 => "topic2",
            FieldKey::Topic3 => "topic3",
            FieldKey::Topic0_1Opr => "topic0_1opr",
            FieldKey::Topic0_2Opr => "topic0_2opr",
            FieldKey::Topic0_3Opr => "topic0_3opr",
            FieldKey::Topic1_2Opr => "topic1_2opr",
            FieldKey::Topic1_3Opr => "topic1_3opr",
            FieldKey::Topic2_3Opr => "topic2_3opr",
            FieldKey::ApiKey => "apikey",
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Explorer module selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Module {
    Logs,
}

impl Module {
    pub fn as_str(&self) -> &'static str {
        match self {
            Module::Logs => "logs",
        }
    }
}

/// Explorer action selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    GetLogs,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::GetLogs => "getLogs",
        }
    }
}

/// Logical operator joining two topic filters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopicOperator {
    And,
    Or,
}

impl TopicOperator {
    /// Parse an operator value. Matching is exact and case-sensitive:
    /// anything other than `and` or `or` yields `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "and" => Some(TopicOperator::And),
            "or" => Some(TopicOperator::Or),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TopicOperator::And => "and",
            TopicOperator::Or => "or",
        }
    }
}

impl fmt::Display for TopicOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the four indexed log topics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    T0,
    T1,
    T2,
    T3,
}

impl Topic {
    /// All topics in the order they are written to the query string
    pub const ALL: [Topic; 4] = [Topic::T0, Topic::T1, Topic::T2, Topic::T3];

    /// Position of this topic in [`Topic::ALL`]
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn field(&self) -> FieldKey {
        match self {
            Topic::T0 => FieldKey::Topic0,
            Topic::T1 => FieldKey::Topic1,
            Topic::T2 => FieldKey::Topic2,
            Topic::T3 => FieldKey::Topic3,
        }
    }
}

/// A pair of topic indices that an operator can join
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TopicPair {
    T0T1,
    T0T2,
    T0T3,
    T1T2,
    T1T3,
    T2T3,
}

impl TopicPair {
    /// All pairs in the order they are written to the query string
    pub const ALL: [TopicPair; 6] = [
        TopicPair::T0T1,
        TopicPair::T0T2,
        TopicPair::T0T3,
        TopicPair::T1T2,
        TopicPair::T1T3,
        TopicPair::T2T3,
    ];

    /// Position of this pair in [`TopicPair::ALL`]
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn field(&self) -> FieldKey {
        match self {
            TopicPair::T0T1 => FieldKey::Topic0_1Opr,
            TopicPair::T0T2 => FieldKey::Topic0_2Opr,
            TopicPair::T0T3 => FieldKey::Topic0_3Opr,
            TopicPair::T1T2 => FieldKey::Topic1_2Opr,
            TopicPair::T1T3 => FieldKey::Topic1_3Opr,
            TopicPair::T2T3 => FieldKey::Topic2_3Opr,
        }
    }
}
