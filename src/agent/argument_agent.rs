use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::strength::at_least_as_strong;
use super::{ArgumentMode, Negotiator};
use crate::arguments::{Argument, CoupleValue};
use crate::error::{NegotiationError, Result};
use crate::message::{Message, Performative};
use crate::preferences::{Item, PreferenceStore, Value};

/// Negotiating agent that justifies its position with premises drawn from
/// its own preferences.
///
/// Holds at most one [`Argument`] per item, built the first time it has to
/// defend or attack that item.
pub struct ArgumentAgent {
    name: String,
    mode: ArgumentMode,
    preferences: Arc<dyn PreferenceStore>,
    catalogue: Vec<Item>,
    arguments: HashMap<String, Argument>,
    closed: HashSet<String>,
}

impl ArgumentAgent {
    pub fn new(
        name: impl Into<String>,
        mode: ArgumentMode,
        preferences: Arc<dyn PreferenceStore>,
        catalogue: Vec<Item>,
    ) -> Self {
        Self {
            name: name.into(),
            mode,
            preferences,
            catalogue,
            arguments: HashMap::new(),
            closed: HashSet::new(),
        }
    }

    /// The argument this agent holds for `item`, if it ever needed one.
    pub fn argument(&self, item: &str) -> Option<&Argument> {
        self.arguments.get(item)
    }

    /// Whether a COMMIT has been sent or received for `item`.
    pub fn is_closed(&self, item: &str) -> bool {
        self.closed.contains(item)
    }

    /// Fail if this agent already argues the other side of `item`.
    ///
    /// A responder holding an attacking argument must never be asked why,
    /// and a proposer holding a supporting one must never be proposed to.
    fn check_stance(&self, item: &Item, stance: bool, performative: Performative) -> Result<()> {
        match self.arguments.get(&item.name) {
            Some(existing) if existing.stance() != stance => Err(NegotiationError::ProtocolOrdering {
                agent: self.name.clone(),
                performative,
                item: item.name.clone(),
            }),
            _ => Ok(()),
        }
    }

    /// Build and store the argument for `item` unless one already exists.
    fn ensure_argument(&mut self, item: &Item, stance: bool) -> Result<&mut Argument> {
        match self.arguments.entry(item.name.clone()) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let mut argument = Argument::new(stance, item.name.clone());
                for premise in premises(self.preferences.as_ref(), item, stance)? {
                    argument.add_premise(premise);
                }
                debug!(
                    agent = %self.name,
                    item = %item.name,
                    stance,
                    premises = argument.pending().count(),
                    "Built argument"
                );
                Ok(entry.insert(argument))
            }
        }
    }

    fn on_propose(&mut self, message: &Message) -> Result<Option<Message>> {
        let item = message.item().clone();
        self.check_stance(&item, false, Performative::Propose)?;
        if self.preferences.is_top_decile(&item, &self.catalogue) {
            info!(agent = %self.name, item = %item.name, "Item is among top 10%, accepting");
            return Ok(Some(Message::accept(&self.name, &message.sender, item)));
        }
        self.ensure_argument(&item, false)?;
        Ok(Some(Message::ask_why(&self.name, &message.sender, item)))
    }

    fn on_ask_why(&mut self, message: &Message) -> Result<Option<Message>> {
        let item = message.item().clone();
        self.check_stance(&item, true, Performative::AskWhy)?;
        let premise = self.ensure_argument(&item, true)?.pick_best_premise();
        match premise {
            Some(premise) => Ok(Some(Message::argue(&self.name, &message.sender, item, Some(premise)))),
            None => Err(NegotiationError::NoSupportingPremise {
                agent: self.name.clone(),
                item: item.name,
            }),
        }
    }

    fn on_argue(&mut self, message: &Message) -> Result<Option<Message>> {
        let opponent = message.premise()?.map(|p| p.value());
        let item = message.item().clone();
        let argument = self
            .arguments
            .get_mut(&item.name)
            .ok_or_else(|| NegotiationError::ProtocolOrdering {
                agent: self.name.clone(),
                performative: Performative::Argue,
                item: item.name.clone(),
            })?;
        let stance = argument.stance();

        let reply = match argument.pick_best_premise() {
            Some(own) => {
                if self.presses_on(own.value(), opponent, stance) {
                    Some(Message::argue(&self.name, &message.sender, item, Some(own)))
                } else {
                    info!(agent = %self.name, item = %item.name, "Premise judged weaker, conceding");
                    Some(Message::accept(&self.name, &message.sender, item))
                }
            }
            None if !stance => {
                info!(agent = %self.name, item = %item.name, "No attacking premise left, conceding");
                Some(Message::accept(&self.name, &message.sender, item))
            }
            None => {
                warn!(agent = %self.name, item = %item.name, "No supporting premise left, refusing silently");
                None
            }
        };
        Ok(reply)
    }

    fn presses_on(&self, own: Value, opponent: Option<Value>, stance: bool) -> bool {
        match self.mode {
            ArgumentMode::Classic => true,
            ArgumentMode::Short => at_least_as_strong(own, opponent) || stance,
        }
    }
}

/// Premises for (`stance == true`) or against the item, in criterion importance order.
fn premises(prefs: &dyn PreferenceStore, item: &Item, stance: bool) -> Result<Vec<CoupleValue>> {
    let mut premises = Vec::new();
    for criterion in prefs.ordered_criteria() {
        let value = prefs.rating_of(item, *criterion)?;
        let fits = if stance {
            value.is_favourable()
        } else {
            value.is_unfavourable()
        };
        if fits {
            premises.push(CoupleValue::new(*criterion, value));
        }
    }
    Ok(premises)
}

impl Negotiator for ArgumentAgent {
    fn name(&self) -> &str {
        &self.name
    }

    fn handle(&mut self, message: &Message) -> Result<Option<Message>> {
        message.validate()?;
        debug!(agent = %self.name, %message, "Handling message");

        match message.performative {
            Performative::Propose => self.on_propose(message),
            Performative::AskWhy => self.on_ask_why(message),
            Performative::Argue => self.on_argue(message),
            Performative::Accept => {
                let item = message.item().clone();
                self.closed.insert(item.name.clone());
                Ok(Some(Message::commit(&self.name, &message.sender, item)))
            }
            Performative::Commit => {
                info!(agent = %self.name, item = %message.item().name, "Negotiation committed");
                self.closed.insert(message.item().name.clone());
                Ok(None)
            }
        }
    }
}
