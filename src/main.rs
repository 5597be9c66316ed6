//! pod-pricer - Listing price calculator for print-on-demand sellers

use anyhow::Result;
use clap::{Parser, Subcommand};
use pod_pricer::catalog::{GarmentType, SizeVariant};
use pod_pricer::commands::{
    parse_size_variant, QuoteCommand, QuoteOptions, TableCommand, TypesCommand,
};
use pod_pricer::config::{Config, OutputFormat};
use pod_pricer::pricing::{Platform, ProfitMode};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "pod-pricer",
    version,
    about = "Listing price calculator for print-on-demand sellers",
    long_about = "Works out Etsy and Shopify list prices from production cost, profit target, \
                  marketplace fees, ads, free shipping and storefront discounts."
)]
struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true)]
    format: Option<OutputFormat>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Pricing flags shared by `quote` and `table`.
#[derive(clap::Args)]
struct PricingArgs {
    /// Marketplace to price for
    #[arg(short, long, default_value = "etsy")]
    platform: Platform,

    /// Profit target as a percentage of production cost
    #[arg(long)]
    profit: Option<f64>,

    /// Storefront sale percentage
    #[arg(long)]
    discount: Option<f64>,

    /// Include the Etsy ads markup
    #[arg(long)]
    ads: bool,

    /// Absorb shipping into the price
    #[arg(long)]
    free_shipping: bool,
}

impl PricingArgs {
    fn apply(&self, config: &mut Config) {
        if let Some(profit) = self.profit {
            config.profit_percentage = profit;
        }
        if let Some(discount) = self.discount {
            match self.platform {
                Platform::Etsy => config.etsy_discount_percentage = discount,
                Platform::Shopify => config.shopify_discount_percentage = discount,
            }
        }
        config.run_ads |= self.ads;
        config.free_shipping |= self.free_shipping;
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Price a single production cost
    #[command(alias = "q")]
    Quote {
        /// Production cost per unit
        cost: f64,

        #[command(flatten)]
        pricing: PricingArgs,

        /// Shipping cost (absorbed with --free-shipping)
        #[arg(long, default_value = "0")]
        shipping: f64,

        /// Price at zero profit
        #[arg(long)]
        break_even: bool,

        /// Show the itemized fee math
        #[arg(short, long)]
        explain: bool,
    },

    /// Price every size of a garment type from the catalog
    #[command(alias = "t")]
    Table {
        /// Garment type ID
        type_id: String,

        #[command(flatten)]
        pricing: PricingArgs,

        /// Catalog JSON file
        #[arg(long, env = "POD_CATALOG")]
        catalog: Option<PathBuf>,
    },

    /// List or edit garment types in the catalog
    Types {
        #[command(subcommand)]
        action: Option<TypesAction>,

        /// Catalog JSON file
        #[arg(long, env = "POD_CATALOG", global = true)]
        catalog: Option<PathBuf>,
    },

    /// Show platform fee schedules
    Platforms,
}

#[derive(Subcommand)]
enum TypesAction {
    /// Add a garment type (or replace one with --replace)
    Add {
        /// Garment type ID
        id: String,

        /// Display name
        #[arg(long)]
        name: String,

        /// Category ID
        #[arg(long)]
        category: String,

        /// Brand ID
        #[arg(long)]
        brand: String,

        /// Size as NAME=COST or NAME=COST:SHIPPING (repeatable)
        #[arg(long = "size", value_parser = parse_size_variant)]
        sizes: Vec<SizeVariant>,

        /// Replace an existing type with the same ID
        #[arg(long)]
        replace: bool,
    },

    /// Remove a garment type
    #[command(alias = "rm")]
    Remove {
        /// Garment type ID
        id: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    // Load config with layered overrides
    let mut config = Config::load(cli.config.as_deref())?.with_env();

    if let Some(format) = cli.format {
        config.format = format;
    }

    match cli.command {
        Commands::Quote { cost, pricing, shipping, break_even, explain } => {
            pricing.apply(&mut config);

            let options = QuoteOptions {
                platform: pricing.platform,
                mode: if break_even { ProfitMode::BreakEven } else { ProfitMode::Target },
                shipping_cost: shipping,
                explain,
            };

            let output = QuoteCommand::new(config).execute(cost, options)?;
            println!("{}", output);
        }

        Commands::Table { type_id, pricing, catalog } => {
            pricing.apply(&mut config);
            if catalog.is_some() {
                config.catalog = catalog;
            }

            let output = TableCommand::new(config).execute(&type_id, pricing.platform)?;
            println!("{}", output);
        }

        Commands::Types { action, catalog } => {
            if catalog.is_some() {
                config.catalog = catalog;
            }

            let cmd = TypesCommand::new(config);
            let output = match action {
                None => cmd.list()?,
                Some(TypesAction::Add { id, name, category, brand, sizes, replace }) => {
                    let garment = GarmentType {
                        id,
                        name,
                        category_id: category,
                        brand_id: brand,
                        size_variants: sizes,
                    };
                    cmd.add(garment, replace)?
                }
                Some(TypesAction::Remove { id }) => cmd.remove(&id)?,
            };
            println!("{}", output);
        }

        Commands::Platforms => {
            println!("Supported platforms:\n");
            println!(
                "{:<10} {:>10} {:>10} {:>10} {:>10}",
                "Platform", "Fee %", "Flat fee", "Tax %", "Effective"
            );
            println!("{:-<10} {:->10} {:->10} {:->10} {:->10}", "", "", "", "", "");

            for platform in Platform::all() {
                match platform.fee_config() {
                    Some(fees) => println!(
                        "{:<10} {:>9.2}% {:>10.2} {:>9.2}% {:>9.2}%",
                        platform.to_string(),
                        fees.fee_percent() * 100.0,
                        fees.total_flat_fee(),
                        fees.tax_rate_percent * 100.0,
                        fees.effective_fee_percent(false) * 100.0
                    ),
                    None => println!("{:<10} {:>10}", platform.to_string(), "no fees"),
                }
            }
        }
    }

    Ok(())
}
