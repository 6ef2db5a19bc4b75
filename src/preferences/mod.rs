//! Preferences Module
//!
//! Domain vocabulary (items, criteria, qualitative ratings) and the
//! per-agent preference store consulted during negotiation.

mod item;
mod store;
mod value;

pub use item::{CriterionName, CriterionValue, Item};
pub use store::{PreferenceStore, Preferences};
pub use value::Value;
