//! Message Service
//!
//! Holds messages sent during a round and hands them to their receivers at
//! the start of the next one. Delivery is FIFO per receiver.

use std::collections::{HashMap, VecDeque};
use tracing::warn;

use crate::error::{NegotiationError, Result};
use crate::message::Message;

#[derive(Debug, Default)]
pub struct MessageService {
    outbox: Vec<Message>,
    mailboxes: HashMap<String, VecDeque<Message>>,
}

impl MessageService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a receiver. Messages addressed to unknown names are rejected at dispatch.
    pub fn register(&mut self, name: impl Into<String>) {
        self.mailboxes.entry(name.into()).or_default();
    }

    /// Queue a message for the next dispatch
    pub fn send(&mut self, message: Message) {
        self.outbox.push(message);
    }

    /// Move every queued message into its receiver's mailbox.
    ///
    /// Returns the delivered messages in send order. Messages addressed to an
    /// unregistered name are dropped and reported; the rest stay queued for
    /// the next dispatch.
    pub fn dispatch(&mut self) -> Result<Vec<Message>> {
        if let Some(stray) = self.outbox.iter().find(|m| !self.mailboxes.contains_key(&m.receiver)) {
            let receiver = stray.receiver.clone();
            let mailboxes = &self.mailboxes;
            self.outbox.retain(|m| mailboxes.contains_key(&m.receiver));
            warn!(%receiver, "Dropped messages for unknown receiver");
            return Err(NegotiationError::UnknownAgent(receiver));
        }
        let delivered = std::mem::take(&mut self.outbox);
        for message in &delivered {
            if let Some(mailbox) = self.mailboxes.get_mut(&message.receiver) {
                mailbox.push_back(message.clone());
            }
        }
        Ok(delivered)
    }

    /// Take everything waiting for `name`, oldest first
    pub fn drain(&mut self, name: &str) -> Vec<Message> {
        self.mailboxes
            .get_mut(name)
            .map(|mailbox| mailbox.drain(..).collect())
            .unwrap_or_default()
    }

    /// Nothing queued and nothing waiting in any mailbox
    pub fn is_idle(&self) -> bool {
        self.outbox.is_empty() && self.mailboxes.values().all(VecDeque::is_empty)
    }
}
