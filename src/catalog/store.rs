//! Catalog storage keyed by document ID, backed by a JSON file.

use super::models::{Brand, Category, GarmentType};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Failures from catalog writes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Type already exists: {0}")]
    DuplicateType(String),

    #[error("Type not found: {0}")]
    TypeNotFound(String),
}

/// Document store for catalog data - enables swapping the backing store.
pub trait CatalogStore {
    /// All categories.
    fn categories(&self) -> Vec<Category>;

    /// Brands within a category.
    fn brands(&self, category_id: &str) -> Vec<Brand>;

    /// Garment types made by a brand.
    fn types(&self, brand_id: &str) -> Vec<GarmentType>;

    /// Looks up a garment type by ID.
    fn get_type(&self, id: &str) -> Option<GarmentType>;

    /// Adds a new garment type.
    fn create_type(&mut self, garment: GarmentType) -> Result<(), CatalogError>;

    /// Replaces an existing garment type with the same ID.
    fn update_type(&mut self, garment: GarmentType) -> Result<(), CatalogError>;

    /// Removes a garment type, returning it.
    fn delete_type(&mut self, id: &str) -> Result<GarmentType, CatalogError>;
}

/// Catalog kept in a single JSON document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JsonCatalog {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub brands: Vec<Brand>,
    #[serde(default)]
    pub types: Vec<GarmentType>,
}

impl JsonCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a catalog from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse catalog JSON")
    }

    /// Loads a catalog from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading catalog from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse catalog file: {}", path.display()))
    }

    /// Writes the catalog to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = serde_json::to_string_pretty(self).context("Failed to serialize catalog")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write catalog file: {}", path.display()))
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.types.iter().position(|t| t.id == id)
    }
}

impl CatalogStore for JsonCatalog {
    fn categories(&self) -> Vec<Category> {
        self.categories.clone()
    }

    fn brands(&self, category_id: &str) -> Vec<Brand> {
        self.brands.iter().filter(|b| b.category_id == category_id).cloned().collect()
    }

    fn types(&self, brand_id: &str) -> Vec<GarmentType> {
        self.types.iter().filter(|t| t.brand_id == brand_id).cloned().collect()
    }

    fn get_type(&self, id: &str) -> Option<GarmentType> {
        self.position(id).map(|i| self.types[i].clone())
    }

    fn create_type(&mut self, garment: GarmentType) -> Result<(), CatalogError> {
        if self.position(&garment.id).is_some() {
            return Err(CatalogError::DuplicateType(garment.id));
        }
        self.types.push(garment);
        Ok(())
    }

    fn update_type(&mut self, garment: GarmentType) -> Result<(), CatalogError> {
        let index =
            self.position(&garment.id).ok_or_else(|| CatalogError::TypeNotFound(garment.id.clone()))?;
        self.types[index] = garment;
        Ok(())
    }

    fn delete_type(&mut self, id: &str) -> Result<GarmentType, CatalogError> {
        let index = self.position(id).ok_or_else(|| CatalogError::TypeNotFound(id.to_string()))?;
        Ok(self.types.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::models::SizeVariant;
    use crate::pricing::Cents;
    use tempfile::NamedTempFile;

    fn garment(id: &str, brand_id: &str) -> GarmentType {
        GarmentType {
            id: id.to_string(),
            name: format!("Garment {}", id),
            category_id: "tshirts".to_string(),
            brand_id: brand_id.to_string(),
            size_variants: vec![SizeVariant {
                id: "m".to_string(),
                name: "M".to_string(),
                price: Cents::new(1250),
                shipping_cost: Cents::new(475),
            }],
        }
    }

    fn sample_catalog() -> JsonCatalog {
        JsonCatalog {
            categories: vec![
                Category { id: "tshirts".to_string(), name: "T-Shirts".to_string() },
                Category { id: "hoodies".to_string(), name: "Hoodies".to_string() },
            ],
            brands: vec![
                Brand {
                    id: "bella".to_string(),
                    name: "Bella+Canvas".to_string(),
                    category_id: "tshirts".to_string(),
                },
                Brand {
                    id: "gildan".to_string(),
                    name: "Gildan".to_string(),
                    category_id: "hoodies".to_string(),
                },
            ],
            types: vec![garment("bella-3001", "bella"), garment("gildan-18500", "gildan")],
        }
    }

    #[test]
    fn test_queries() {
        let catalog = sample_catalog();
        assert_eq!(catalog.categories().len(), 2);
        assert_eq!(catalog.brands("tshirts").len(), 1);
        assert_eq!(catalog.brands("mugs").len(), 0);
        assert_eq!(catalog.types("gildan")[0].id, "gildan-18500");
        assert!(catalog.get_type("bella-3001").is_some());
        assert!(catalog.get_type("missing").is_none());
    }

    #[test]
    fn test_create_update_delete() {
        let mut catalog = sample_catalog();

        catalog.create_type(garment("comfort-1717", "comfort")).unwrap();
        assert_eq!(catalog.types.len(), 3);

        let err = catalog.create_type(garment("comfort-1717", "comfort")).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateType("comfort-1717".to_string()));

        let mut updated = garment("comfort-1717", "comfort");
        updated.name = "Comfort Colors 1717".to_string();
        catalog.update_type(updated).unwrap();
        assert_eq!(catalog.get_type("comfort-1717").unwrap().name, "Comfort Colors 1717");

        let removed = catalog.delete_type("comfort-1717").unwrap();
        assert_eq!(removed.name, "Comfort Colors 1717");
        assert_eq!(catalog.types.len(), 2);

        assert!(matches!(catalog.delete_type("comfort-1717"), Err(CatalogError::TypeNotFound(_))));
        assert!(matches!(
            catalog.update_type(garment("ghost", "bella")),
            Err(CatalogError::TypeNotFound(_))
        ));
    }

    #[test]
    fn test_save_and_load() {
        let catalog = sample_catalog();
        let file = NamedTempFile::new().unwrap();

        catalog.save(file.path()).unwrap();
        let loaded = JsonCatalog::from_file(file.path()).unwrap();
        assert_eq!(loaded, catalog);
    }

    #[test]
    fn test_from_file_not_found() {
        let err = JsonCatalog::from_file("/nonexistent/catalog.json").unwrap_err();
        assert!(err.to_string().contains("Failed to read catalog file"));
    }

    #[test]
    fn test_from_json_missing_sections() {
        let catalog = JsonCatalog::from_json(r#"{ "categories": [] }"#).unwrap();
        assert!(catalog.types.is_empty());
        assert!(JsonCatalog::from_json("not json").is_err());
    }
}
