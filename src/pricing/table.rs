//! Per-size pricing tables for a garment type.

use super::error::PricingError;
use super::platform::{Platform, ProfitMode};
use super::quote::{PriceQuote, PricingInput};
use crate::catalog::models::{cheapest, SizeVariant};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Row name of the break-even price for the cheapest size.
pub const ZERO_PROFIT_ROW: &str = "0% profit option";

/// A size variant that could not be priced.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Failed to price variant '{variant}': {source}")]
pub struct TableError {
    pub variant: String,
    #[source]
    pub source: PricingError,
}

/// One line of a pricing table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingRow {
    /// Size variant name, or [`ZERO_PROFIT_ROW`].
    pub name: String,
    pub quote: PriceQuote,
}

/// Quotes for every size of a garment on one platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingTable {
    pub platform: Platform,
    /// Rows in catalog order, then the zero-profit row.
    pub rows: Vec<PricingRow>,
}

impl PricingTable {
    /// Prices each variant with the settings in `template`.
    ///
    /// The template's cost and shipping are replaced by each variant's. A
    /// break-even row for the cheapest variant is appended after the sizes.
    pub fn build(
        platform: Platform,
        variants: &[SizeVariant],
        template: &PricingInput,
    ) -> Result<Self, TableError> {
        let mut rows = Vec::with_capacity(variants.len() + 1);

        for variant in variants {
            let quote = quote_variant(platform, variant, template, ProfitMode::Target)?;
            rows.push(PricingRow { name: variant.name.clone(), quote });
        }

        if let Some(variant) = cheapest(variants) {
            debug!("Break-even row priced from {}", variant.name);
            let quote = quote_variant(platform, variant, template, ProfitMode::BreakEven)?;
            rows.push(PricingRow { name: ZERO_PROFIT_ROW.to_string(), quote });
        }

        debug!("Built {} pricing table with {} rows", platform, rows.len());
        Ok(Self { platform, rows })
    }

    /// Finds a row by variant name.
    pub fn row(&self, name: &str) -> Option<&PricingRow> {
        self.rows.iter().find(|r| r.name == name)
    }

    /// Returns true if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the number of rows, including the zero-profit row.
    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

fn quote_variant(
    platform: Platform,
    variant: &SizeVariant,
    template: &PricingInput,
    mode: ProfitMode,
) -> Result<PriceQuote, TableError> {
    let input = PricingInput {
        production_cost: variant.price.to_dollars(),
        shipping_cost: variant.shipping_cost.to_dollars(),
        ..*template
    };

    platform
        .quote(&input, mode)
        .map_err(|source| TableError { variant: variant.name.clone(), source })
}
