//! Catalog documents: categories, brands and garment types.

use crate::pricing::Cents;
use serde::{Deserialize, Serialize};

/// Top-level product category (e.g. "T-Shirts").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}

/// A blank manufacturer within a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub id: String,
    pub name: String,
    pub category_id: String,
}

/// A specific blank garment with its size ladder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GarmentType {
    pub id: String,
    pub name: String,
    pub category_id: String,
    pub brand_id: String,
    #[serde(default)]
    pub size_variants: Vec<SizeVariant>,
}

impl GarmentType {
    /// Size variant with the lowest production cost. The first one wins ties.
    pub fn cheapest_variant(&self) -> Option<&SizeVariant> {
        cheapest(&self.size_variants)
    }
}

/// One size of a garment and what it costs to produce and ship.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeVariant {
    pub id: String,
    pub name: String,
    /// Production cost
    pub price: Cents,
    #[serde(default)]
    pub shipping_cost: Cents,
}

/// Lowest-priced variant in `variants`, first one on ties.
pub fn cheapest(variants: &[SizeVariant]) -> Option<&SizeVariant> {
    variants.iter().reduce(|best, v| if v.price < best.price { v } else { best })
}
