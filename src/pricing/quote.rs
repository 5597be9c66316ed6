//! Price solvers: from production cost to a published list price.

use super::charm::round_to_charm_price;
use super::error::{ensure_non_negative, PricingError};
use super::fees::{compute_fee_pass, FeePass, PlatformFeeConfig};
use super::money::Cents;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Everything a solver needs besides the platform's fee constants.
///
/// Percentages are whole numbers (`50.0` is 50%). `shipping_cost` only
/// matters when `free_shipping` is set, in which case the seller absorbs it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingInput {
    pub production_cost: f64,
    pub profit_percentage: f64,
    pub discount_percentage: f64,
    pub run_ads: bool,
    pub free_shipping: bool,
    pub shipping_cost: f64,
}

impl PricingInput {
    /// Creates an input with no profit, discount, ads or absorbed shipping.
    pub fn new(production_cost: f64) -> Self {
        Self {
            production_cost,
            profit_percentage: 0.0,
            discount_percentage: 0.0,
            run_ads: false,
            free_shipping: false,
            shipping_cost: 0.0,
        }
    }

    /// Creates an input from catalog amounts stored in cents.
    pub fn from_cents(production_cost: Cents, shipping_cost: Cents) -> Self {
        Self::new(production_cost.to_dollars()).shipping_cost(shipping_cost.to_dollars())
    }

    pub fn profit(mut self, percentage: f64) -> Self {
        self.profit_percentage = percentage;
        self
    }

    pub fn discount(mut self, percentage: f64) -> Self {
        self.discount_percentage = percentage;
        self
    }

    pub fn run_ads(mut self, enabled: bool) -> Self {
        self.run_ads = enabled;
        self
    }

    pub fn free_shipping(mut self, enabled: bool) -> Self {
        self.free_shipping = enabled;
        self
    }

    pub fn shipping_cost(mut self, amount: f64) -> Self {
        self.shipping_cost = amount;
        self
    }

    /// Shipping the seller pays for, or zero without free shipping.
    fn absorbed_shipping(&self) -> f64 {
        if self.free_shipping {
            self.shipping_cost
        } else {
            0.0
        }
    }

    fn validate(&self) -> Result<(), PricingError> {
        ensure_non_negative("production cost", self.production_cost)?;
        ensure_non_negative("profit percentage", self.profit_percentage)?;
        ensure_non_negative("discount percentage", self.discount_percentage)?;
        if self.free_shipping {
            ensure_non_negative("shipping cost", self.shipping_cost)?;
        }
        if self.discount_percentage >= 100.0 {
            return Err(PricingError::InvalidDiscount { discount: self.discount_percentage });
        }
        Ok(())
    }
}

/// A fully itemized price for one unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub production_cost: f64,
    pub profit_amount: f64,
    /// Absorbed shipping, zero without free shipping.
    pub shipping_cost: f64,
    /// Production, absorbed shipping and platform fees.
    pub net_cost: f64,
    /// Charm price the buyer pays at checkout.
    pub after_discount_price: f64,
    /// List price to publish before the storefront discount.
    pub final_price: f64,
    pub breakdown: Breakdown,
}

impl PriceQuote {
    /// Profit left after fees at the buyer's price.
    pub fn realized_profit(&self) -> f64 {
        self.after_discount_price - self.net_cost
    }
}

/// Whether a quote carries the itemized fee math.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "lowercase")]
pub enum Breakdown {
    /// No fee model was applied.
    None,
    Detailed(FeeBreakdown),
}

impl Breakdown {
    pub fn detailed(&self) -> Option<&FeeBreakdown> {
        match self {
            Breakdown::None => None,
            Breakdown::Detailed(breakdown) => Some(breakdown),
        }
    }
}

/// Itemized fees behind a quote.
///
/// `first_pass` is what the published price is built from. `second_pass`
/// charges the same fees again on top of the first pass fees to show how fees
/// compound; it never feeds back into the price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeBreakdown {
    pub production_cost: f64,
    pub shipping_cost: f64,
    pub profit_amount: f64,
    pub first_pass: FeePass,
    pub second_pass: FeePass,
    pub net_cost: f64,
}

/// Etsy price carrying the configured profit target.
pub fn calculate_etsy_price(
    input: &PricingInput,
    fees: &PlatformFeeConfig,
) -> Result<PriceQuote, PricingError> {
    solve(input, input.profit_percentage, Some(fees))
}

/// Cheapest Etsy price that still covers production, shipping and fees.
pub fn calculate_etsy_price_without_profit(
    input: &PricingInput,
    fees: &PlatformFeeConfig,
) -> Result<PriceQuote, PricingError> {
    solve(input, 0.0, Some(fees))
}

/// Shopify price carrying the configured profit target. No fees are modelled.
pub fn calculate_shopify_price(input: &PricingInput) -> Result<PriceQuote, PricingError> {
    solve(&input.run_ads(false), input.profit_percentage, None)
}

/// Break-even Shopify price.
pub fn calculate_shopify_price_without_profit(
    input: &PricingInput,
) -> Result<PriceQuote, PricingError> {
    solve(&input.run_ads(false), 0.0, None)
}

fn solve(
    input: &PricingInput,
    profit_percentage: f64,
    fees: Option<&PlatformFeeConfig>,
) -> Result<PriceQuote, PricingError> {
    input.validate()?;

    let production_cost = input.production_cost;
    let shipping_cost = input.absorbed_shipping();
    let profit_amount = production_cost * profit_percentage / 100.0;
    let base_amount = production_cost + shipping_cost + profit_amount;

    let first_pass = fees.map(|f| compute_fee_pass(base_amount, f, input.run_ads));
    let total_fees = first_pass.as_ref().map_or(0.0, |pass| pass.total_fees);

    let net_cost = production_cost + shipping_cost + total_fees;
    let after_discount_price = round_to_charm_price(base_amount + total_fees)?;
    let final_price = invert_discount(after_discount_price, input.discount_percentage)?;

    let breakdown = match (fees, first_pass) {
        (Some(f), Some(first_pass)) => Breakdown::Detailed(FeeBreakdown {
            production_cost,
            shipping_cost,
            profit_amount,
            second_pass: compute_fee_pass(first_pass.total_amount, f, input.run_ads),
            first_pass,
            net_cost,
        }),
        _ => Breakdown::None,
    };

    debug!(production_cost, total_fees, after_discount_price, final_price, "Solved price");

    Ok(PriceQuote {
        production_cost,
        profit_amount,
        shipping_cost,
        net_cost,
        after_discount_price,
        final_price,
        breakdown,
    })
}

/// List price that shows `discounted` once the storefront takes `discount`% off.
pub fn invert_discount(discounted: f64, discount: f64) -> Result<f64, PricingError> {
    if !(0.0..100.0).contains(&discount) {
        return Err(PricingError::InvalidDiscount { discount });
    }
    Ok(discounted / (1.0 - discount / 100.0))
}
