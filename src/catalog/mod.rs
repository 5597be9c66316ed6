//! Garment catalog: the size variants and costs prices are computed from.

pub mod models;
pub mod store;

pub use models::{Brand, Category, GarmentType, SizeVariant};
pub use store::{CatalogError, CatalogStore, JsonCatalog};
