//! Single-cost quote command implementation.

use crate::config::{Config, OutputFormat};
use crate::format::Formatter;
use crate::pricing::{Breakdown, Platform, ProfitMode};
use anyhow::{bail, Result};
use tracing::info;

/// Prices one production cost on one platform.
pub struct QuoteCommand {
    config: Config,
}

/// Per-run quote options not covered by [`Config`].
#[derive(Debug, Clone, Copy, Default)]
pub struct QuoteOptions {
    pub platform: Platform,
    pub mode: ProfitMode,
    /// Shipping cost, absorbed only with free shipping
    pub shipping_cost: f64,
    /// Append the itemized fee math (JSON output always carries it)
    pub explain: bool,
}

impl QuoteCommand {
    /// Creates a new quote command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Prices `production_cost` and returns formatted output.
    pub fn execute(&self, production_cost: f64, options: QuoteOptions) -> Result<String> {
        if options.explain && self.config.format == OutputFormat::Csv {
            bail!("--explain is not available with CSV output. Use table, markdown or json");
        }

        let input = self
            .config
            .pricing_input(options.platform, production_cost)
            .shipping_cost(options.shipping_cost);

        info!("Quoting {:.2} on {} ({:?})", production_cost, options.platform, options.mode);

        let quote = options.platform.quote(&input, options.mode)?;
        let formatter = Formatter::new(self.config.format);
        let mut output = formatter.format_quote(options.platform, &quote);

        // The JSON quote already embeds the breakdown.
        if options.explain && self.config.format != OutputFormat::Json {
            match &quote.breakdown {
                Breakdown::Detailed(breakdown) => {
                    output.push_str("\n\n");
                    output.push_str(&formatter.format_breakdown(breakdown));
                }
                Breakdown::None => {
                    output.push_str(&format!(
                        "\n\n{} prices carry no platform fees to explain.",
                        options.platform.name()
                    ));
                }
            }
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use crate::pricing::PricingError;

    fn make_test_config() -> Config {
        Config { profit_percentage: 50.0, ..Config::default() }
    }

    #[test]
    fn test_quote_etsy() {
        let cmd = QuoteCommand::new(make_test_config());
        let output = cmd.execute(10.0, QuoteOptions::default()).unwrap();

        assert!(output.contains("Etsy"));
        assert!(output.contains("List price:      17.99"));
        assert!(!output.contains("First pass"));
    }

    #[test]
    fn test_quote_explain() {
        let cmd = QuoteCommand::new(make_test_config());
        let options = QuoteOptions { explain: true, ..QuoteOptions::default() };
        let output = cmd.execute(10.0, options).unwrap();

        assert!(output.contains("First pass (on 15.00)"));
        assert!(output.contains("Second pass"));
    }

    #[test]
    fn test_quote_explain_shopify() {
        let cmd = QuoteCommand::new(make_test_config());
        let options =
            QuoteOptions { platform: Platform::Shopify, explain: true, ..QuoteOptions::default() };
        let output = cmd.execute(10.0, options).unwrap();

        assert!(output.contains("List price:      15.99"));
        assert!(output.contains("Shopify prices carry no platform fees to explain."));
    }

    #[test]
    fn test_quote_explain_json_is_one_document() {
        let config = Config { format: OutputFormat::Json, ..make_test_config() };
        let cmd = QuoteCommand::new(config);
        let options = QuoteOptions { explain: true, ..QuoteOptions::default() };
        let output = cmd.execute(10.0, options).unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["breakdown"]["kind"], "detailed");
        assert!(value["breakdown"]["detail"]["second_pass"].is_object());
    }

    #[test]
    fn test_quote_explain_json_shopify() {
        let config = Config { format: OutputFormat::Json, ..make_test_config() };
        let cmd = QuoteCommand::new(config);
        let options =
            QuoteOptions { platform: Platform::Shopify, explain: true, ..QuoteOptions::default() };
        let output = cmd.execute(10.0, options).unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["breakdown"]["kind"], "none");
    }

    #[test]
    fn test_quote_explain_rejects_csv() {
        let config = Config { format: OutputFormat::Csv, ..make_test_config() };
        let cmd = QuoteCommand::new(config);
        let options = QuoteOptions { explain: true, ..QuoteOptions::default() };
        let err = cmd.execute(10.0, options).unwrap_err();

        assert!(err.to_string().contains("CSV"));
    }

    #[test]
    fn test_quote_break_even() {
        let cmd = QuoteCommand::new(make_test_config());
        let options = QuoteOptions {
            platform: Platform::Shopify,
            mode: ProfitMode::BreakEven,
            ..QuoteOptions::default()
        };
        let output = cmd.execute(10.0, options).unwrap();
        assert!(output.contains("Profit:          0.00"));
        assert!(output.contains("List price:      9.99"));
    }

    #[test]
    fn test_quote_free_shipping_from_config() {
        let config = Config { free_shipping: true, format: OutputFormat::Csv, ..make_test_config() };
        let cmd = QuoteCommand::new(config);
        let options =
            QuoteOptions { platform: Platform::Shopify, shipping_cost: 4.0, ..QuoteOptions::default() };
        let output = cmd.execute(10.0, options).unwrap();

        // 10.00 + 4.00 shipping + 5.00 profit = 19.00
        assert!(output.ends_with("shopify,10.00,5.00,4.00,14.00,19.99,19.99"));
    }

    #[test]
    fn test_quote_invalid_discount() {
        let config = Config { etsy_discount_percentage: 100.0, ..make_test_config() };
        let cmd = QuoteCommand::new(config);
        let err = cmd.execute(10.0, QuoteOptions::default()).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<PricingError>(),
            Some(PricingError::InvalidDiscount { .. })
        ));
    }
}
