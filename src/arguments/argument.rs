use std::collections::BTreeMap;
use tracing::warn;

use super::{Comparison, CoupleValue};
use crate::preferences::Value;

/// Pending premises are keyed by (strength rank, insertion sequence):
/// rank 0 is the strongest premise for the holder's side, and the sequence
/// keeps equally strong premises in the order they were added.
type PremiseKey = (u8, u64);

/// A per-item justification held by one agent.
///
/// Supporting arguments (`stance == true`) cite favourable ratings,
/// strongest (`VeryGood`) first. Attacking arguments cite unfavourable
/// ratings, strongest (`VeryBad`) first.
#[derive(Debug, Clone)]
pub struct Argument {
    stance: bool,
    item: String,
    pending: BTreeMap<PremiseKey, CoupleValue>,
    used: Vec<CoupleValue>,
    comparisons: Vec<Comparison>,
    next_seq: u64,
}

impl Argument {
    pub fn new(stance: bool, item: impl Into<String>) -> Self {
        Self {
            stance,
            item: item.into(),
            pending: BTreeMap::new(),
            used: Vec::new(),
            comparisons: Vec::new(),
            next_seq: 0,
        }
    }

    /// `true` when the argument supports adopting the item.
    pub fn stance(&self) -> bool {
        self.stance
    }

    pub fn item(&self) -> &str {
        &self.item
    }

    fn rank(&self, value: Value) -> u8 {
        if self.stance {
            Value::VeryGood.ordinal() - value.ordinal()
        } else {
            value.ordinal()
        }
    }

    /// Add a premise, keeping pending premises strongest-first.
    ///
    /// Callers only pass ratings that fit the stance; a misfit is traced and
    /// still ranked.
    pub fn add_premise(&mut self, premise: CoupleValue) {
        let fits = if self.stance {
            premise.value().is_favourable()
        } else {
            premise.value().is_unfavourable()
        };
        if !fits {
            warn!(item = %self.item, stance = self.stance, %premise, "Premise does not fit argument stance");
        }
        let key = (self.rank(premise.value()), self.next_seq);
        self.next_seq += 1;
        self.pending.insert(key, premise);
    }

    /// Take the strongest unused premise. Returns `None` once exhausted.
    pub fn pick_best_premise(&mut self) -> Option<CoupleValue> {
        let (_, best) = self.pending.pop_first()?;
        self.used.push(best);
        Some(best)
    }

    pub fn add_comparison(&mut self, comparison: Comparison) {
        self.comparisons.push(comparison);
    }

    pub fn comparisons(&self) -> &[Comparison] {
        &self.comparisons
    }

    /// Remaining premises, strongest first.
    pub fn pending(&self) -> impl Iterator<Item = &CoupleValue> + '_ {
        self.pending.values()
    }

    /// Premises already offered, in the order they were offered.
    pub fn used(&self) -> &[CoupleValue] {
        &self.used
    }

    pub fn is_exhausted(&self) -> bool {
        self.pending.is_empty()
    }
}
