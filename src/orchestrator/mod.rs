//! Orchestrator Module
//!
//! Scheduling, transport and configuration around the negotiating agents.

pub mod config;
pub mod event_bus;
pub mod mailbox;
pub mod model;

pub use config::{ConfigManager, NegotiationConfig, Opening};
pub use event_bus::{EventBus, NegotiationEvent, NEGOTIATION_EVENT_BUS};
pub use mailbox::MessageService;
pub use model::{ArgumentModel, NegotiationReport};
