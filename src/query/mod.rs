//! Query string assembly for the `logs/getLogs` endpoint
//!
//! Turns a [`LogQueryRequest`] into a [`QueryString`] whose field order is
//! fixed. The explorer applies topic operators by position, so the order
//! emitted here is part of the wire format.

mod block;
mod builder;
mod fields;
mod request;

pub use block::BlockSpecifier;
pub use builder::{build, QueryString};
pub use fields::{Action, FieldKey, Module, Topic, TopicOperator, TopicPair};
pub use request::LogQueryRequest;
