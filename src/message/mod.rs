//! Message Module
//!
//! The envelope agents exchange and the speech acts it can carry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::arguments::CoupleValue;
use crate::error::{NegotiationError, Result};
use crate::preferences::Item;

/// Speech-act tag of a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Performative {
    Propose,
    AskWhy,
    Argue,
    Accept,
    Commit,
}

impl fmt::Display for Performative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Performative::Propose => write!(f, "PROPOSE"),
            Performative::AskWhy => write!(f, "ASK_WHY"),
            Performative::Argue => write!(f, "ARGUE"),
            Performative::Accept => write!(f, "ACCEPT"),
            Performative::Commit => write!(f, "COMMIT"),
        }
    }
}

/// Payload of a message. Only ARGUE carries a premise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Content {
    Item(Item),
    Argument {
        item: Item,
        premise: Option<CoupleValue>,
    },
}

impl Content {
    pub fn item(&self) -> &Item {
        match self {
            Content::Item(item) => item,
            Content::Argument { item, .. } => item,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub sender: String,
    pub receiver: String,
    pub performative: Performative,
    pub content: Content,
    pub sent_at: DateTime<Utc>,
}

impl Message {
    fn new(
        sender: impl Into<String>,
        receiver: impl Into<String>,
        performative: Performative,
        content: Content,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            sender: sender.into(),
            receiver: receiver.into(),
            performative,
            content,
            sent_at: Utc::now(),
        }
    }

    pub fn propose(sender: impl Into<String>, receiver: impl Into<String>, item: Item) -> Self {
        Self::new(sender, receiver, Performative::Propose, Content::Item(item))
    }

    pub fn ask_why(sender: impl Into<String>, receiver: impl Into<String>, item: Item) -> Self {
        Self::new(sender, receiver, Performative::AskWhy, Content::Item(item))
    }

    pub fn argue(
        sender: impl Into<String>,
        receiver: impl Into<String>,
        item: Item,
        premise: Option<CoupleValue>,
    ) -> Self {
        Self::new(sender, receiver, Performative::Argue, Content::Argument { item, premise })
    }

    pub fn accept(sender: impl Into<String>, receiver: impl Into<String>, item: Item) -> Self {
        Self::new(sender, receiver, Performative::Accept, Content::Item(item))
    }

    pub fn commit(sender: impl Into<String>, receiver: impl Into<String>, item: Item) -> Self {
        Self::new(sender, receiver, Performative::Commit, Content::Item(item))
    }

    pub fn item(&self) -> &Item {
        self.content.item()
    }

    /// The premise cited by an ARGUE message.
    ///
    /// Fails when the message is not an ARGUE or its content has the wrong shape.
    pub fn premise(&self) -> Result<Option<CoupleValue>> {
        match (&self.performative, &self.content) {
            (Performative::Argue, Content::Argument { premise, .. }) => Ok(*premise),
            _ => Err(NegotiationError::MalformedContent {
                performative: self.performative,
            }),
        }
    }

    /// Check the content shape matches the performative.
    pub fn validate(&self) -> Result<()> {
        let fits = match self.performative {
            Performative::Argue => matches!(self.content, Content::Argument { .. }),
            _ => matches!(self.content, Content::Item(_)),
        };
        if fits {
            Ok(())
        } else {
            Err(NegotiationError::MalformedContent {
                performative: self.performative,
            })
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}: {}(", self.sender, self.receiver, self.performative)?;
        match &self.content {
            Content::Item(item) => write!(f, "{})", item.name),
            Content::Argument { item, premise: Some(p) } => write!(f, "{}, {})", item.name, p),
            Content::Argument { item, premise: None } => write!(f, "{}, none)", item.name),
        }
    }
}
