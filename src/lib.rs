//! pod-pricer - Listing price calculator for print-on-demand sellers
//!
//! Works out Etsy and Shopify list prices from a garment's production cost
//! and rounds them to `.99` charm prices.

pub mod catalog;
pub mod commands;
pub mod config;
pub mod format;
pub mod pricing;

pub use catalog::{CatalogStore, GarmentType, JsonCatalog, SizeVariant};
pub use config::Config;
pub use pricing::{
    Breakdown, Cents, FeeBreakdown, FeePass, Platform, PlatformFeeConfig, PriceQuote,
    PricingError, PricingInput, PricingTable, ProfitMode,
};
