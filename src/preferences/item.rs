use serde::{Deserialize, Serialize};
use std::fmt;

use super::Value;

/// Criteria an item is rated on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CriterionName {
    ProductionCost,
    EnvironmentImpact,
    Consumption,
    Durability,
    Noise,
}

impl CriterionName {
    pub const ALL: [CriterionName; 5] = [
        CriterionName::ProductionCost,
        CriterionName::EnvironmentImpact,
        CriterionName::Consumption,
        CriterionName::Durability,
        CriterionName::Noise,
    ];
}

impl fmt::Display for CriterionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CriterionName::ProductionCost => write!(f, "PRODUCTION_COST"),
            CriterionName::EnvironmentImpact => write!(f, "ENVIRONMENT_IMPACT"),
            CriterionName::Consumption => write!(f, "CONSUMPTION"),
            CriterionName::Durability => write!(f, "DURABILITY"),
            CriterionName::Noise => write!(f, "NOISE"),
        }
    }
}

/// Something the agents can negotiate over. Identified by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub description: String,
}

impl Item {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.description)
    }
}

/// A rating one agent holds for an item on a single criterion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriterionValue {
    pub item: String,
    pub criterion: CriterionName,
    pub value: Value,
}

impl CriterionValue {
    pub fn new(item: &Item, criterion: CriterionName, value: Value) -> Self {
        Self {
            item: item.name.clone(),
            criterion,
            value,
        }
    }
}
