use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{CriterionName, CriterionValue, Item, Value};
use crate::error::{NegotiationError, Result};

/// Read-only view of an agent's private preferences.
///
/// The negotiation engine never computes preferences itself; it only asks
/// for ratings and for the top-decile verdict.
pub trait PreferenceStore: Send + Sync {
    /// The rating this agent holds for `item` on `criterion`.
    fn rating_of(&self, item: &Item, criterion: CriterionName) -> Result<Value>;

    /// Whether `item` ranks among the best tenth of `items`.
    fn is_top_decile(&self, item: &Item, items: &[Item]) -> bool;

    /// Criteria from most to least important.
    fn ordered_criteria(&self) -> &[CriterionName];
}

/// Multi-criteria preferences over a catalogue of items.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Preferences {
    criteria: Vec<CriterionName>,
    values: Vec<CriterionValue>,
}

impl Preferences {
    pub fn new(criteria: Vec<CriterionName>) -> Self {
        Self {
            criteria,
            values: Vec::new(),
        }
    }

    /// Draw one rating per (item, criterion) from `rng`.
    pub fn random<R: Rng + ?Sized>(items: &[Item], criteria: Vec<CriterionName>, rng: &mut R) -> Self {
        let mut prefs = Self::new(criteria);
        for item in items {
            prefs.randomize_item(item, rng);
        }
        prefs
    }

    /// Replace every rating for `item` with a fresh uniform draw.
    pub fn randomize_item<R: Rng + ?Sized>(&mut self, item: &Item, rng: &mut R) {
        let criteria = self.criteria.clone();
        for criterion in criteria {
            if let Some(value) = Value::ALL.choose(rng) {
                self.add_criterion_value(CriterionValue::new(item, criterion, *value));
            }
        }
    }

    pub fn with_rating(mut self, item: &Item, criterion: CriterionName, value: Value) -> Self {
        self.add_criterion_value(CriterionValue::new(item, criterion, value));
        self
    }

    /// Record a rating, replacing any earlier one for the same (item, criterion).
    pub fn add_criterion_value(&mut self, rating: CriterionValue) {
        self.values
            .retain(|v| !(v.item == rating.item && v.criterion == rating.criterion));
        self.values.push(rating);
    }

    pub fn criterion_values(&self) -> &[CriterionValue] {
        &self.values
    }

    fn lookup(&self, item: &str, criterion: CriterionName) -> Option<Value> {
        self.values
            .iter()
            .find(|v| v.item == item && v.criterion == criterion)
            .map(|v| v.value)
    }

    /// Weighted score: the most important criterion weighs `n`, the least weighs 1.
    /// Unrated criteria contribute nothing.
    pub fn item_score(&self, item: &Item) -> u32 {
        let n = self.criteria.len() as u32;
        self.criteria
            .iter()
            .enumerate()
            .filter_map(|(rank, c)| {
                self.lookup(&item.name, *c)
                    .map(|v| v.ordinal() as u32 * (n - rank as u32))
            })
            .sum()
    }

    /// Highest scoring item. The first listed wins ties.
    pub fn most_preferred<'a>(&self, items: &'a [Item]) -> Option<&'a Item> {
        let mut best: Option<(&Item, u32)> = None;
        for item in items {
            let score = self.item_score(item);
            match best {
                Some((_, top)) if top >= score => {}
                _ => best = Some((item, score)),
            }
        }
        best.map(|(item, _)| item)
    }
}

impl PreferenceStore for Preferences {
    fn rating_of(&self, item: &Item, criterion: CriterionName) -> Result<Value> {
        self.lookup(&item.name, criterion)
            .ok_or_else(|| NegotiationError::MissingRating {
                item: item.name.clone(),
                criterion,
            })
    }

    fn is_top_decile(&self, item: &Item, items: &[Item]) -> bool {
        if !items.iter().any(|i| i.name == item.name) {
            return false;
        }
        let mut scores: Vec<u32> = items.iter().map(|i| self.item_score(i)).collect();
        scores.sort_unstable_by(|a, b| b.cmp(a));
        let keep = items.len().div_ceil(10).max(1);
        let cutoff = scores[keep - 1];
        self.item_score(item) >= cutoff
    }

    fn ordered_criteria(&self) -> &[CriterionName] {
        &self.criteria
    }
}
