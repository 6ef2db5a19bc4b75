//! Argumentation-based Negotiation Agency
//!
//! Two agents negotiate whether to adopt an item, justifying their positions
//! with premises drawn from multi-criteria qualitative preferences:
//! - Preference store and domain vocabulary
//! - Strength-ordered arguments built from premises
//! - Message-driven negotiation state machine (classic and short modes)
//! - Round-based scheduler with FIFO message delivery

pub mod error;
pub mod preferences;
pub mod arguments;
pub mod message;
pub mod agent;
pub mod orchestrator;
pub mod utils;

// Re-exports for convenience
pub use agent::{ArgumentAgent, ArgumentMode, Negotiator, TurnOutcome};
pub use arguments::{Argument, Comparison, CoupleValue};
pub use error::{NegotiationError, Result};
pub use message::{Content, Message, Performative};
pub use orchestrator::{ArgumentModel, NegotiationConfig, NegotiationReport};
pub use preferences::{CriterionName, Item, PreferenceStore, Preferences, Value};
