use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative rating on a 4-point scale, ascending.
///
/// The derived ordering follows declaration order, so
/// `VeryBad < Bad < Good < VeryGood`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Value {
    VeryBad,
    Bad,
    Good,
    VeryGood,
}

impl Value {
    pub const ALL: [Value; 4] = [Value::VeryBad, Value::Bad, Value::Good, Value::VeryGood];

    pub fn ordinal(self) -> u8 {
        match self {
            Value::VeryBad => 0,
            Value::Bad => 1,
            Value::Good => 2,
            Value::VeryGood => 3,
        }
    }

    /// Ratings that can back a supporting argument
    pub fn is_favourable(self) -> bool {
        matches!(self, Value::Good | Value::VeryGood)
    }

    /// Ratings that can back an attacking argument
    pub fn is_unfavourable(self) -> bool {
        matches!(self, Value::VeryBad | Value::Bad)
    }

    /// Whether the rating carries the "very" qualifier.
    pub fn has_intensifier(self) -> bool {
        matches!(self, Value::VeryBad | Value::VeryGood)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::VeryBad => write!(f, "VERY_BAD"),
            Value::Bad => write!(f, "BAD"),
            Value::Good => write!(f, "GOOD"),
            Value::VeryGood => write!(f, "VERY_GOOD"),
        }
    }
}
