use serde::{Deserialize, Serialize};
use std::fmt;

use crate::preferences::{CriterionName, Value};

/// A single premise: a criterion and the rating cited for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CoupleValue {
    criterion: CriterionName,
    value: Value,
}

impl CoupleValue {
    pub fn new(criterion: CriterionName, value: Value) -> Self {
        Self { criterion, value }
    }

    pub fn criterion(&self) -> CriterionName {
        self.criterion
    }

    pub fn value(&self) -> Value {
        self.value
    }
}

impl fmt::Display for CoupleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CoupleValue({}: {})", self.criterion, self.value)
    }
}

/// "`best` outranks `worst`". Stored on arguments but not yet consulted
/// when choosing what to say.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Comparison {
    best: CriterionName,
    worst: CriterionName,
}

impl Comparison {
    pub fn new(best: CriterionName, worst: CriterionName) -> Self {
        Self { best, worst }
    }

    pub fn best(&self) -> CriterionName {
        self.best
    }

    pub fn worst(&self) -> CriterionName {
        self.worst
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Comparison({} > {})", self.best, self.worst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_couple_value_display() {
        let cv = CoupleValue::new(CriterionName::Noise, Value::VeryGood);
        assert_eq!(cv.to_string(), "CoupleValue(NOISE: VERY_GOOD)");
    }

    #[test]
    fn test_comparison_accessors() {
        let cmp = Comparison::new(CriterionName::Noise, CriterionName::ProductionCost);
        assert_eq!(cmp.best(), CriterionName::Noise);
        assert_eq!(cmp.worst(), CriterionName::ProductionCost);
        assert_eq!(cmp.to_string(), "Comparison(NOISE > PRODUCTION_COST)");
    }
}
