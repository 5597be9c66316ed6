//! Charm pricing: every published price ends in `.99`.
//!
//! Prices whose whole part ends in zero (20, 30, 100, ...) are pulled down to
//! the previous `.99` so the listing never shows a "round ten" price like
//! 30.99. Every other price is pushed up to the next `.99`.

use super::error::PricingError;

/// How close a fractional part must be to `.99` to count as already charmed.
const CHARM_TOLERANCE: f64 = 1e-6;

const CHARM_CENTS: f64 = 0.99;

/// Rounds a raw computed price to a `.99` charm price.
///
/// `amount` must be positive and finite.
pub fn round_to_charm_price(amount: f64) -> Result<f64, PricingError> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(PricingError::invalid("price to round", amount));
    }

    if is_charm_price(amount) {
        return Ok(amount);
    }

    let whole = amount.floor();

    // Below 1.00 there is no lower .99 to fall back to.
    if whole as i64 % 10 == 0 && whole >= 1.0 {
        Ok(whole - 0.01)
    } else {
        Ok(whole + CHARM_CENTS)
    }
}

/// Returns true if the fractional part of `amount` is `.99`.
pub fn is_charm_price(amount: f64) -> bool {
    (amount - amount.floor() - CHARM_CENTS).abs() < CHARM_TOLERANCE
}
