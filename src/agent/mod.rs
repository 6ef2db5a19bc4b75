//! Agent Module
//!
//! Provides the negotiation state machine and the capability trait the
//! scheduler drives it through.

mod argument_agent;
pub mod strength;

pub use argument_agent::ArgumentAgent;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{NegotiationError, Result};
use crate::message::Message;

/// How an agent answers an ARGUE message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArgumentMode {
    /// Always answer with the next best premise
    #[default]
    Classic,
    /// Compare premise strength; a weaker attacker concedes
    Short,
}

impl fmt::Display for ArgumentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgumentMode::Classic => write!(f, "classic"),
            ArgumentMode::Short => write!(f, "short"),
        }
    }
}

impl FromStr for ArgumentMode {
    type Err = NegotiationError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "classic" => Ok(ArgumentMode::Classic),
            "short" => Ok(ArgumentMode::Short),
            other => Err(NegotiationError::Config(format!("unknown argument mode '{}'", other))),
        }
    }
}

/// Anything that takes part in a negotiation turn.
pub trait Negotiator: Send {
    /// Name other agents address messages to
    fn name(&self) -> &str;

    /// React to one inbound message, producing at most one reply.
    fn handle(&mut self, message: &Message) -> Result<Option<Message>>;

    /// Process a turn's inbound batch in arrival order.
    ///
    /// A protocol defect only ends the thread its message belongs to: the
    /// failing message gets no reply and is returned alongside the error,
    /// while the rest of the batch is still handled.
    fn step(&mut self, inbox: Vec<Message>) -> TurnOutcome {
        let mut outcome = TurnOutcome::default();
        for message in inbox {
            match self.handle(&message) {
                Ok(Some(reply)) => outcome.replies.push(reply),
                Ok(None) => {}
                Err(err) => outcome.defects.push((message, err)),
            }
        }
        outcome
    }
}

/// What an agent produced while draining its mailbox
#[derive(Debug, Default)]
pub struct TurnOutcome {
    /// Replies in the order their triggering messages arrived
    pub replies: Vec<Message>,
    /// Messages that broke the protocol, with the reason
    pub defects: Vec<(Message, NegotiationError)>,
}
