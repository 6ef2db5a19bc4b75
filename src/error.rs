//! Error types for the negotiation engine.
//!
//! Only protocol defects are errors. Conceding and silently refusing are
//! ordinary outcomes of a negotiation and never surface here.

use thiserror::Error;

use crate::message::Performative;
use crate::preferences::CriterionName;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NegotiationError {
    /// A message arrived for an item the agent never built an argument for.
    #[error("{agent} received {performative} for '{item}' before any argument existed")]
    ProtocolOrdering {
        agent: String,
        performative: Performative,
        item: String,
    },

    #[error("{agent} was asked why '{item}' but holds no supporting premise")]
    NoSupportingPremise { agent: String, item: String },

    #[error("{performative} message carries content of the wrong shape")]
    MalformedContent { performative: Performative },

    #[error("no rating for criterion {criterion} on item '{item}'")]
    MissingRating { item: String, criterion: CriterionName },

    #[error("unknown agent '{0}'")]
    UnknownAgent(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, NegotiationError>;
