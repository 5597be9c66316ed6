//! Integer minor-unit amounts as stored in the catalog.
//!
//! The catalog keeps every cost in cents while the engine works in decimal
//! currency units. `Cents` is the only path between the two, so a catalog
//! amount can't be passed to a solver without converting it first.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An amount in the smallest currency unit (cents).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cents(i64);

impl Cents {
    /// Zero cents.
    pub const ZERO: Cents = Cents(0);

    /// Creates an amount from a number of cents.
    pub const fn new(cents: i64) -> Self {
        Cents(cents)
    }

    /// Rounds a decimal currency amount to the nearest cent.
    pub fn from_dollars(amount: f64) -> Self {
        Cents((amount * 100.0).round() as i64)
    }

    /// Converts to decimal currency units for the pricing engine.
    pub fn to_dollars(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.to_dollars())
    }
}
