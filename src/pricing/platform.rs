//! Supported marketplaces and dispatch to their solvers.

use super::error::PricingError;
use super::fees::PlatformFeeConfig;
use super::quote::{
    calculate_etsy_price, calculate_etsy_price_without_profit, calculate_shopify_price,
    calculate_shopify_price_without_profit, PriceQuote, PricingInput,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A storefront the seller lists on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Etsy,
    Shopify,
}

/// Whether a quote should carry the profit target or only break even.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfitMode {
    #[default]
    Target,
    BreakEven,
}

impl Platform {
    /// Display name for this platform.
    pub fn name(&self) -> &'static str {
        match self {
            Platform::Etsy => "Etsy",
            Platform::Shopify => "Shopify",
        }
    }

    /// Fee schedule applied to prices, if the platform has one.
    ///
    /// Shopify's own processing costs are absorbed outside this tool, so
    /// Shopify prices are built without a fee model.
    pub fn fee_config(&self) -> Option<PlatformFeeConfig> {
        match self {
            Platform::Etsy => Some(PlatformFeeConfig::ETSY),
            Platform::Shopify => None,
        }
    }

    /// Whether the platform charges extra for advertising.
    pub fn supports_ads(&self) -> bool {
        self.fee_config().is_some_and(|f| f.ads_markup_percent > 0.0)
    }

    /// Quotes `input` with this platform's solver for `mode`.
    pub fn quote(&self, input: &PricingInput, mode: ProfitMode) -> Result<PriceQuote, PricingError> {
        match (self, mode) {
            (Platform::Etsy, ProfitMode::Target) => {
                calculate_etsy_price(input, &PlatformFeeConfig::ETSY)
            }
            (Platform::Etsy, ProfitMode::BreakEven) => {
                calculate_etsy_price_without_profit(input, &PlatformFeeConfig::ETSY)
            }
            (Platform::Shopify, ProfitMode::Target) => calculate_shopify_price(input),
            (Platform::Shopify, ProfitMode::BreakEven) => {
                calculate_shopify_price_without_profit(input)
            }
        }
    }

    /// Returns all supported platforms.
    pub fn all() -> &'static [Platform] {
        &[Platform::Etsy, Platform::Shopify]
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Platform::Etsy => "etsy",
            Platform::Shopify => "shopify",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "etsy" => Ok(Platform::Etsy),
            "shopify" => Ok(Platform::Shopify),
            _ => Err(format!("Unknown platform: {}. Use: etsy, shopify", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::quote::Breakdown;

    #[test]
    fn test_platform_parsing() {
        assert_eq!("etsy".parse::<Platform>().unwrap(), Platform::Etsy);
        assert_eq!("ETSY".parse::<Platform>().unwrap(), Platform::Etsy);
        assert_eq!("Shopify".parse::<Platform>().unwrap(), Platform::Shopify);

        let err = "ebay".parse::<Platform>().unwrap_err();
        assert!(err.contains("Unknown platform"));
    }

    #[test]
    fn test_platform_display_roundtrip() {
        for platform in Platform::all() {
            assert_eq!(platform.to_string().parse::<Platform>().unwrap(), *platform);
        }
    }

    #[test]
    fn test_fee_config() {
        assert_eq!(Platform::Etsy.fee_config(), Some(PlatformFeeConfig::ETSY));
        assert!(Platform::Shopify.fee_config().is_none());
        assert!(Platform::Etsy.supports_ads());
        assert!(!Platform::Shopify.supports_ads());
    }

    #[test]
    fn test_dispatch() {
        let input = PricingInput::new(10.0).profit(50.0);

        let etsy = Platform::Etsy.quote(&input, ProfitMode::Target).unwrap();
        assert!(matches!(etsy.breakdown, Breakdown::Detailed(_)));
        assert!((etsy.profit_amount - 5.0).abs() < 1e-9);

        let floor = Platform::Etsy.quote(&input, ProfitMode::BreakEven).unwrap();
        assert_eq!(floor.profit_amount, 0.0);

        let shopify = Platform::Shopify.quote(&input, ProfitMode::Target).unwrap();
        assert_eq!(shopify.breakdown, Breakdown::None);
        assert!((shopify.final_price - 15.99).abs() < 1e-9);

        let floor = Platform::Shopify.quote(&input, ProfitMode::BreakEven).unwrap();
        assert!((floor.final_price - 9.99).abs() < 1e-9);
    }

    #[test]
    fn test_serde() {
        assert_eq!(serde_json::to_string(&Platform::Shopify).unwrap(), "\"shopify\"");
        let parsed: Platform = serde_json::from_str("\"etsy\"").unwrap();
        assert_eq!(parsed, Platform::Etsy);
    }
}
