//! Negotiation Event Bus
//!
//! Broadcasts what happens during a run so observers (the CLI, tests) can
//! follow a negotiation without reaching into the agents.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::broadcast;

use crate::message::Performative;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum NegotiationEvent {
    /// A scheduler round began
    RoundStarted { round: usize },
    /// A message reached its receiver's mailbox
    MessageDelivered {
        sender: String,
        receiver: String,
        performative: Performative,
        item: String,
    },
    /// A COMMIT was sent for an item
    ItemCommitted { item: String, by: String },
    /// A message broke the protocol; its thread gets no reply
    ProtocolDefect {
        agent: String,
        item: String,
        error: String,
    },
}

pub struct EventBus {
    tx: broadcast::Sender<NegotiationEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1024);
        Self { tx }
    }

    /// Publish an event to all subscribers
    pub fn publish(&self, event: NegotiationEvent) {
        // no subscribers is fine
        let _ = self.tx.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<NegotiationEvent> {
        self.tx.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

lazy_static::lazy_static! {
    /// Process-wide bus used when a model is not given its own
    pub static ref NEGOTIATION_EVENT_BUS: Arc<EventBus> = Arc::new(EventBus::new());
}
