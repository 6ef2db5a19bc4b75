//! Argument Model
//!
//! Round-based scheduler for a negotiation: delivers last round's messages,
//! activates every agent once in a shuffled order, and collects what they
//! send for the next round.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, error, info};

use super::config::{NegotiationConfig, Opening};
use super::event_bus::{EventBus, NegotiationEvent, NEGOTIATION_EVENT_BUS};
use super::mailbox::MessageService;
use crate::agent::{ArgumentAgent, Negotiator};
use crate::error::{NegotiationError, Result};
use crate::message::{Message, Performative};
use crate::preferences::{CriterionName, Item, Preferences};

/// Summary of a run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NegotiationReport {
    pub rounds: usize,
    pub messages: usize,
    /// Items a COMMIT was sent for, in order
    pub committed: Vec<String>,
    /// No message left in flight. A quiet run without a commitment ended in silent refusal.
    pub quiescent: bool,
    /// Threads ended by a protocol defect
    pub defects: Vec<ThreadDefect>,
}

/// A negotiation thread stopped because a message broke the protocol
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThreadDefect {
    pub round: usize,
    pub agent: String,
    pub item: String,
    pub performative: Performative,
    pub error: String,
}

pub struct ArgumentModel {
    agents: Vec<Box<dyn Negotiator>>,
    items: Vec<Item>,
    service: MessageService,
    rng: StdRng,
    transcript: Vec<Message>,
    round: usize,
    defects: Vec<ThreadDefect>,
    bus: Arc<EventBus>,
}

impl ArgumentModel {
    /// Build `config.agents` agents with random preferences over the catalogue.
    pub fn new(config: &NegotiationConfig) -> Result<Self> {
        config.validate()?;
        let mut rng = StdRng::seed_from_u64(config.seed);
        let mut agents: Vec<Box<dyn Negotiator>> = Vec::with_capacity(config.agents);
        for i in 0..config.agents {
            let prefs = Preferences::random(&config.items, CriterionName::ALL.to_vec(), &mut rng);
            agents.push(Box::new(ArgumentAgent::new(
                format!("agent_{}", i + 1),
                config.mode,
                Arc::new(prefs),
                config.items.clone(),
            )));
        }
        Ok(Self::with_agents(agents, config.items.clone(), rng))
    }

    /// Schedule pre-built agents.
    pub fn with_agents(agents: Vec<Box<dyn Negotiator>>, items: Vec<Item>, rng: StdRng) -> Self {
        let mut service = MessageService::new();
        for agent in &agents {
            service.register(agent.name());
        }
        Self {
            agents,
            items,
            service,
            rng,
            transcript: Vec::new(),
            round: 0,
            defects: Vec::new(),
            bus: NEGOTIATION_EVENT_BUS.clone(),
        }
    }

    pub fn with_event_bus(mut self, bus: Arc<EventBus>) -> Self {
        self.bus = bus;
        self
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn agent_names(&self) -> Vec<&str> {
        self.agents.iter().map(|a| a.name()).collect()
    }

    /// Every message sent so far, in send order
    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    pub fn round(&self) -> usize {
        self.round
    }

    /// Protocol defects seen so far, one per failed thread message
    pub fn defects(&self) -> &[ThreadDefect] {
        &self.defects
    }

    fn send(&mut self, message: Message) {
        debug!(round = self.round, %message, "Queued message");
        self.transcript.push(message.clone());
        self.service.send(message);
    }

    /// Queue a PROPOSE from `proposer` to `responder`, delivered next round.
    ///
    /// Both names must belong to scheduled agents.
    pub fn propose(&mut self, proposer: &str, responder: &str, item: Item) -> Result<()> {
        for name in [proposer, responder] {
            if !self.agents.iter().any(|a| a.name() == name) {
                return Err(NegotiationError::UnknownAgent(name.to_string()));
            }
        }
        self.send(Message::propose(proposer, responder, item));
        Ok(())
    }

    /// Queue the configured opening move.
    pub fn open(&mut self, opening: &Opening) -> Result<()> {
        let name = |idx: usize| {
            self.agents
                .get(idx)
                .map(|a| a.name().to_string())
                .ok_or_else(|| NegotiationError::Config(format!("no agent at index {}", idx)))
        };
        let proposer = name(opening.proposer)?;
        let responder = name(opening.responder)?;
        let item = self
            .items
            .get(opening.item)
            .cloned()
            .ok_or_else(|| NegotiationError::Config(format!("no item at index {}", opening.item)))?;
        self.propose(&proposer, &responder, item)
    }

    /// Run one round.
    ///
    /// A protocol defect ends only the thread of the offending message; it is
    /// logged, published and kept for the report while other threads go on.
    pub fn step(&mut self) -> Result<()> {
        self.round += 1;
        self.bus.publish(NegotiationEvent::RoundStarted { round: self.round });

        for message in self.service.dispatch()? {
            self.bus.publish(NegotiationEvent::MessageDelivered {
                sender: message.sender.clone(),
                receiver: message.receiver.clone(),
                performative: message.performative,
                item: message.item().name.clone(),
            });
        }

        let mut order: Vec<usize> = (0..self.agents.len()).collect();
        order.shuffle(&mut self.rng);

        for idx in order {
            let name = self.agents[idx].name().to_string();
            let inbox = self.service.drain(&name);
            if inbox.is_empty() {
                continue;
            }
            let outcome = self.agents[idx].step(inbox);
            for (message, err) in outcome.defects {
                error!(round = self.round, agent = %name, %message, %err, "Protocol defect");
                let defect = ThreadDefect {
                    round: self.round,
                    agent: name.clone(),
                    item: message.item().name.clone(),
                    performative: message.performative,
                    error: err.to_string(),
                };
                self.bus.publish(NegotiationEvent::ProtocolDefect {
                    agent: defect.agent.clone(),
                    item: defect.item.clone(),
                    error: defect.error.clone(),
                });
                self.defects.push(defect);
            }
            for message in outcome.replies {
                if message.performative == Performative::Commit {
                    self.bus.publish(NegotiationEvent::ItemCommitted {
                        item: message.item().name.clone(),
                        by: name.clone(),
                    });
                }
                self.send(message);
            }
        }
        Ok(())
    }

    /// Run a fixed round budget.
    pub fn run(&mut self, steps: usize) -> Result<NegotiationReport> {
        for _ in 0..steps {
            self.step()?;
        }
        let report = self.report();
        info!(
            rounds = report.rounds,
            messages = report.messages,
            committed = ?report.committed,
            quiescent = report.quiescent,
            defects = report.defects.len(),
            "Negotiation finished"
        );
        Ok(report)
    }

    pub fn report(&self) -> NegotiationReport {
        NegotiationReport {
            rounds: self.round,
            messages: self.transcript.len(),
            committed: self
                .transcript
                .iter()
                .filter(|m| m.performative == Performative::Commit)
                .map(|m| m.item().name.clone())
                .collect(),
            quiescent: self.service.is_idle(),
            defects: self.defects.clone(),
        }
    }
}
