//! Per-size pricing tables for catalog garment types.

use crate::catalog::{CatalogStore, JsonCatalog};
use crate::config::Config;
use crate::format::Formatter;
use crate::pricing::{Platform, PricingTable};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::{info, warn};

/// Catalog file named in the config.
pub fn catalog_path(config: &Config) -> Result<&Path> {
    config.catalog.as_deref().context("No catalog configured. Pass --catalog or set POD_CATALOG")
}

/// Loads the catalog named in the config.
pub fn load_catalog(config: &Config) -> Result<JsonCatalog> {
    JsonCatalog::from_file(catalog_path(config)?)
}

/// Prices every size of a garment type.
pub struct TableCommand {
    config: Config,
}

impl TableCommand {
    /// Creates a new table command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Builds the pricing table for `type_id` from the configured catalog.
    pub fn execute(&self, type_id: &str, platform: Platform) -> Result<String> {
        let catalog = load_catalog(&self.config)?;
        self.execute_with_store(&catalog, type_id, platform)
    }

    /// Builds the pricing table against a provided store (for testing).
    pub fn execute_with_store(
        &self,
        store: &impl CatalogStore,
        type_id: &str,
        platform: Platform,
    ) -> Result<String> {
        let garment = store
            .get_type(type_id)
            .with_context(|| format!("Unknown garment type: '{}'", type_id))?;

        if garment.size_variants.is_empty() {
            warn!("{} has no size variants", garment.name);
        }

        info!("Pricing {} sizes of {} on {}", garment.size_variants.len(), garment.name, platform);

        // The table replaces the cost and shipping per variant.
        let template = self.config.pricing_input(platform, 0.0);
        let table = PricingTable::build(platform, &garment.size_variants, &template)?;

        let formatter = Formatter::new(self.config.format);
        Ok(formatter.format_table(&garment.name, &table))
    }
}
