//! Arguments Module
//!
//! Premises and the per-item arguments agents build from them.

mod argument;
mod premise;

pub use argument::Argument;
pub use premise::{Comparison, CoupleValue};
