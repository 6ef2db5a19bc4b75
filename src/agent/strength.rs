//! Premise strength comparison used by short-mode negotiators.

use crate::preferences::Value;

/// Whether `own` may be answered back against `opponent`.
///
/// Only a pair of intensified ratings ("very" on both sides) counts as
/// at-least-as-strong; every other pairing, including an intensified own
/// rating against a plain opponent rating, does not. A missing opponent
/// premise is treated as plain.
pub fn at_least_as_strong(own: Value, opponent: Option<Value>) -> bool {
    match opponent {
        Some(other) => other.has_intensifier() && own.has_intensifier(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_intensified() {
        assert!(at_least_as_strong(Value::VeryBad, Some(Value::VeryGood)));
        assert!(at_least_as_strong(Value::VeryGood, Some(Value::VeryBad)));
    }

    #[test]
    fn test_only_opponent_intensified() {
        assert!(!at_least_as_strong(Value::Bad, Some(Value::VeryGood)));
        assert!(!at_least_as_strong(Value::Good, Some(Value::VeryBad)));
    }

    #[test]
    fn test_only_own_intensified() {
        assert!(!at_least_as_strong(Value::VeryBad, Some(Value::Good)));
        assert!(!at_least_as_strong(Value::VeryGood, Some(Value::Bad)));
    }

    #[test]
    fn test_neither_intensified() {
        for own in [Value::Bad, Value::Good] {
            for other in [Value::Bad, Value::Good] {
                assert!(!at_least_as_strong(own, Some(other)));
            }
        }
    }

    #[test]
    fn test_missing_opponent_premise() {
        for own in Value::ALL {
            assert!(!at_least_as_strong(own, None));
        }
    }
}
