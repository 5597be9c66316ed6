//! Garment type listing and maintenance against the catalog file.

use super::table::{catalog_path, load_catalog};
use crate::catalog::{CatalogStore, GarmentType, JsonCatalog, SizeVariant};
use crate::config::Config;
use crate::pricing::Cents;
use anyhow::{bail, Result};
use tracing::{info, warn};

/// Lists, adds and removes garment types.
pub struct TypesCommand {
    config: Config,
}

impl TypesCommand {
    /// Creates a new types command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Lists every garment type in the configured catalog.
    pub fn list(&self) -> Result<String> {
        let catalog = load_catalog(&self.config)?;
        Ok(Self::list_with_store(&catalog))
    }

    /// Lists every garment type in `store` as category, brand and type.
    pub fn list_with_store(store: &impl CatalogStore) -> String {
        let mut lines = Vec::new();

        lines.push(format!(
            "{:<16} {:<16} {:<20} {:>8} {:>5}",
            "Category", "Brand", "Type ID", "From", "Sizes"
        ));
        lines.push(format!("{:-<16} {:-<16} {:-<20} {:->8} {:->5}", "", "", "", "", ""));

        for category in store.categories() {
            for brand in store.brands(&category.id) {
                for garment in store.types(&brand.id) {
                    let from = garment
                        .cheapest_variant()
                        .map_or_else(|| "-".to_string(), |v| v.price.to_string());

                    lines.push(format!(
                        "{:<16} {:<16} {:<20} {:>8} {:>5}",
                        category.name,
                        brand.name,
                        garment.id,
                        from,
                        garment.size_variants.len()
                    ));
                }
            }
        }

        lines.join("\n")
    }

    /// Adds `garment` to the catalog file, or replaces it when `replace` is set.
    pub fn add(&self, garment: GarmentType, replace: bool) -> Result<String> {
        let path = catalog_path(&self.config)?;
        let mut catalog = JsonCatalog::from_file(path)?;

        let message = Self::add_to_store(&mut catalog, garment, replace)?;
        catalog.save(path)?;

        Ok(message)
    }

    /// Adds or replaces `garment` in `store`.
    pub fn add_to_store(
        store: &mut impl CatalogStore,
        garment: GarmentType,
        replace: bool,
    ) -> Result<String> {
        let brand_known =
            store.brands(&garment.category_id).iter().any(|brand| brand.id == garment.brand_id);
        if !brand_known {
            bail!(
                "Unknown brand '{}' in category '{}'",
                garment.brand_id,
                garment.category_id
            );
        }

        if garment.size_variants.is_empty() {
            warn!("{} has no size variants", garment.id);
        }

        let id = garment.id.clone();
        let sizes = garment.size_variants.len();

        let verb = if replace {
            store.update_type(garment)?;
            "Updated"
        } else {
            store.create_type(garment)?;
            "Added"
        };

        info!("{} garment type {}", verb, id);
        Ok(format!("{} {} ({} sizes)", verb, id, sizes))
    }

    /// Removes a garment type from the catalog file.
    pub fn remove(&self, id: &str) -> Result<String> {
        let path = catalog_path(&self.config)?;
        let mut catalog = JsonCatalog::from_file(path)?;

        let message = Self::remove_from_store(&mut catalog, id)?;
        catalog.save(path)?;

        Ok(message)
    }

    /// Removes a garment type from `store`.
    pub fn remove_from_store(store: &mut impl CatalogStore, id: &str) -> Result<String> {
        let removed = store.delete_type(id)?;
        info!("Removed garment type {}", removed.id);
        Ok(format!("Removed {} ({})", removed.id, removed.name))
    }
}

/// Parses a `NAME=COST` or `NAME=COST:SHIPPING` size in currency units.
pub fn parse_size_variant(spec: &str) -> Result<SizeVariant, String> {
    let (name, costs) =
        spec.split_once('=').ok_or_else(|| format!("Invalid size '{}'. Use NAME=COST[:SHIPPING]", spec))?;

    let name = name.trim();
    if name.is_empty() {
        return Err(format!("Invalid size '{}': missing name", spec));
    }

    let (price, shipping) = match costs.split_once(':') {
        Some((price, shipping)) => (price, Some(shipping)),
        None => (costs, None),
    };

    let parse_amount = |field: &str, text: &str| -> Result<Cents, String> {
        let amount: f64 = text
            .trim()
            .parse()
            .map_err(|_| format!("Invalid {} '{}' for size {}", field, text, name))?;
        if !amount.is_finite() || amount < 0.0 {
            return Err(format!("Invalid {} '{}' for size {}", field, text, name));
        }
        Ok(Cents::from_dollars(amount))
    };

    Ok(SizeVariant {
        id: name.to_lowercase(),
        name: name.to_string(),
        price: parse_amount("cost", price)?,
        shipping_cost: match shipping {
            Some(shipping) => parse_amount("shipping", shipping)?,
            None => Cents::ZERO,
        },
    })
}
