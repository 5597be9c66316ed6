//! Pricing engine: fee-inclusive listing prices with charm rounding.
//!
//! Every solver follows the same shape: add profit and any absorbed shipping
//! to the production cost, add the platform's fees on that base, round the
//! result to a `.99` charm price (what the buyer pays), then divide out the
//! storefront discount to get the list price to publish.

pub mod charm;
pub mod error;
pub mod fees;
pub mod money;
pub mod platform;
pub mod quote;
pub mod table;

pub use charm::round_to_charm_price;
pub use error::PricingError;
pub use fees::{compute_fee_pass, FeePass, PlatformFeeConfig};
pub use money::Cents;
pub use platform::{Platform, ProfitMode};
pub use quote::{
    calculate_etsy_price, calculate_etsy_price_without_profit, calculate_shopify_price,
    calculate_shopify_price_without_profit, Breakdown, FeeBreakdown, PriceQuote, PricingInput,
};
pub use table::{PricingRow, PricingTable, TableError, ZERO_PROFIT_ROW};
