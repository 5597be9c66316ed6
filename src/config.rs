//! Configuration management with TOML, environment variables, and CLI overrides.

use crate::pricing::{Platform, PricingInput};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Application configuration with layered loading.
///
/// The percentage fields are the seller's pricing defaults; every command
/// starts from them and lets flags override per run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Catalog file with garment types and size variants
    #[serde(default)]
    pub catalog: Option<PathBuf>,

    /// Default profit target, as a percentage of production cost
    #[serde(default = "default_profit_percentage")]
    pub profit_percentage: f64,

    /// Default storefront sale on Etsy
    #[serde(default)]
    pub etsy_discount_percentage: f64,

    /// Default storefront sale on Shopify
    #[serde(default)]
    pub shopify_discount_percentage: f64,

    /// Run Etsy ads by default
    #[serde(default)]
    pub run_ads: bool,

    /// Absorb shipping into the price by default
    #[serde(default)]
    pub free_shipping: bool,
}

fn default_profit_percentage() -> f64 {
    30.0
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::Table,
            catalog: None,
            profit_percentage: default_profit_percentage(),
            etsy_discount_percentage: 0.0,
            shopify_discount_percentage: 0.0,
            run_ads: false,
            free_shipping: false,
        }
    }
}

impl Config {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading config from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Loads configuration with fallback to default locations.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit_path {
            return Self::from_file(path);
        }

        let local_config = Path::new("pod-pricer.toml");
        if local_config.exists() {
            debug!("Found pod-pricer.toml in current directory");
            return Self::from_file(local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("pod-pricer").join("config.toml");
            if xdg_config.exists() {
                debug!("Found config in XDG config directory");
                return Self::from_file(xdg_config);
            }
        }

        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Applies environment variable overrides.
    pub fn with_env(mut self) -> Self {
        if let Ok(profit) = std::env::var("POD_PROFIT") {
            if let Ok(p) = profit.parse() {
                self.profit_percentage = p;
            }
        }

        if let Ok(discount) = std::env::var("POD_ETSY_DISCOUNT") {
            if let Ok(d) = discount.parse() {
                self.etsy_discount_percentage = d;
            }
        }

        if let Ok(discount) = std::env::var("POD_SHOPIFY_DISCOUNT") {
            if let Ok(d) = discount.parse() {
                self.shopify_discount_percentage = d;
            }
        }

        if let Ok(catalog) = std::env::var("POD_CATALOG") {
            self.catalog = Some(PathBuf::from(catalog));
        }

        if let Ok(format) = std::env::var("POD_FORMAT") {
            if let Ok(f) = format.parse() {
                self.format = f;
            }
        }

        self
    }

    /// Default sale percentage for a platform.
    pub fn discount_for(&self, platform: Platform) -> f64 {
        match platform {
            Platform::Etsy => self.etsy_discount_percentage,
            Platform::Shopify => self.shopify_discount_percentage,
        }
    }

    /// Pricing input for `platform` seeded with these defaults.
    pub fn pricing_input(&self, platform: Platform, production_cost: f64) -> PricingInput {
        PricingInput::new(production_cost)
            .profit(self.profit_percentage)
            .discount(self.discount_for(platform))
            .run_ads(self.run_ads && platform.supports_ads())
            .free_shipping(self.free_shipping)
    }
}

/// Output format for results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Markdown,
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Unknown format: {}. Use: table, json, markdown, csv", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}
