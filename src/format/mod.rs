//! Output formatting for quotes, pricing tables and fee breakdowns
//! (table, JSON, markdown, CSV).

use crate::config::OutputFormat;
use crate::pricing::{FeeBreakdown, FeePass, Platform, PriceQuote, PricingTable};

/// Formats pricing results for output.
pub struct Formatter {
    format: OutputFormat,
}

/// One fee line of a pass: name, fee amount, tax on the fee.
fn fee_lines(pass: &FeePass) -> [(&'static str, f64, f64); 5] {
    [
        ("Etsy Fees", pass.etsy_fees, pass.etsy_taxes),
        ("Payment Processing Fees", pass.payment_processing_fees, pass.payment_processing_taxes),
        (
            "Regulatory Operating Fees",
            pass.regulatory_operating_fees,
            pass.regulatory_operating_taxes,
        ),
        ("Flat Fee", pass.flat_fee, pass.flat_fee_taxes),
        ("Listing Fee", pass.listing_fee, pass.listing_fee_taxes),
    ]
}

impl Formatter {
    /// Creates a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats a single quote.
    pub fn format_quote(&self, platform: Platform, quote: &PriceQuote) -> String {
        match self.format {
            OutputFormat::Json => self.json(quote),
            OutputFormat::Table => self.table_quote(platform, quote),
            OutputFormat::Markdown => self.markdown_quote(platform, quote),
            OutputFormat::Csv => {
                let mut lines = vec![self.csv_header()];
                lines.push(self.csv_row(&platform.to_string(), quote));
                lines.join("\n")
            }
        }
    }

    /// Formats a per-size pricing table.
    pub fn format_table(&self, title: &str, table: &PricingTable) -> String {
        if table.is_empty() {
            return match self.format {
                OutputFormat::Json => self.json(table),
                OutputFormat::Csv => self.csv_header(),
                _ => "No size variants to price.".to_string(),
            };
        }

        match self.format {
            OutputFormat::Json => self.json(table),
            OutputFormat::Table => self.table_rows(title, table),
            OutputFormat::Markdown => self.markdown_rows(title, table),
            OutputFormat::Csv => {
                let mut lines = vec![self.csv_header()];
                lines.extend(table.rows.iter().map(|r| self.csv_row(&r.name, &r.quote)));
                lines.join("\n")
            }
        }
    }

    /// Formats the fee math behind a quote.
    pub fn format_breakdown(&self, breakdown: &FeeBreakdown) -> String {
        match self.format {
            OutputFormat::Json => self.json(breakdown),
            OutputFormat::Table => self.table_breakdown(breakdown),
            OutputFormat::Markdown => self.markdown_breakdown(breakdown),
            OutputFormat::Csv => self.csv_breakdown(breakdown),
        }
    }

    // JSON formatting

    fn json<T: serde::Serialize>(&self, value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    // Table formatting

    fn table_quote(&self, platform: Platform, quote: &PriceQuote) -> String {
        let mut lines = Vec::new();

        lines.push(format!("Platform:        {}", platform.name()));
        lines.push(format!("Production cost: {:.2}", quote.production_cost));
        if quote.shipping_cost > 0.0 {
            lines.push(format!("Shipping:        {:.2}", quote.shipping_cost));
        }
        lines.push(format!("Profit:          {:.2}", quote.profit_amount));
        lines.push(format!("Net cost:        {:.2}", quote.net_cost));
        lines.push(format!("Buyer pays:      {:.2}", quote.after_discount_price));
        lines.push(format!("List price:      {:.2}", quote.final_price));
        lines.push(format!("Realized profit: {:.2}", quote.realized_profit()));

        lines.join("\n")
    }

    fn table_rows(&self, title: &str, table: &PricingTable) -> String {
        let name_width = 18;
        let money_width = 10;

        let mut lines = Vec::new();

        lines.push(format!("{} ({})", title, table.platform.name()));
        lines.push(String::new());
        lines.push(format!(
            "{:<name_width$}  {:>money_width$}  {:>money_width$}  {:>money_width$}  {:>money_width$}  {:>money_width$}",
            "Variant", "Cost", "Profit", "Net cost", "Sale", "List"
        ));
        lines.push(format!(
            "{:-<name_width$}  {:-<money_width$}  {:-<money_width$}  {:-<money_width$}  {:-<money_width$}  {:-<money_width$}",
            "", "", "", "", "", ""
        ));

        for row in &table.rows {
            let q = &row.quote;
            lines.push(format!(
                "{:<name_width$}  {:>money_width$.2}  {:>money_width$.2}  {:>money_width$.2}  {:>money_width$.2}  {:>money_width$.2}",
                row.name, q.production_cost, q.profit_amount, q.net_cost, q.after_discount_price, q.final_price
            ));
        }

        lines.join("\n")
    }

    fn table_breakdown(&self, breakdown: &FeeBreakdown) -> String {
        let mut lines = Vec::new();

        lines.push(format!("Production cost:       {:.2}", breakdown.production_cost));
        lines.push(format!("Shipping cost:         {:.2}", breakdown.shipping_cost));
        lines.push(format!(
            "Total production cost: {:.2}",
            breakdown.production_cost + breakdown.shipping_cost
        ));
        lines.push(format!("Profit:                {:.2}", breakdown.profit_amount));

        for (title, pass) in
            [("First pass", &breakdown.first_pass), ("Second pass", &breakdown.second_pass)]
        {
            lines.push(String::new());
            lines.push(format!("{} (on {:.2})", title, pass.base_amount));
            lines.push(format!("{:<27}  {:>8}  {:>8}  {:>8}", "Fee", "Amount", "Tax", "Total"));
            lines.push(format!("{:-<27}  {:-<8}  {:-<8}  {:-<8}", "", "", "", ""));
            for (name, fee, tax) in fee_lines(pass) {
                lines.push(format!("{:<27}  {:>8.2}  {:>8.2}  {:>8.2}", name, fee, tax, fee + tax));
            }
            lines.push(format!(
                "{:<27}  {:>8.2}  {:>8.2}  {:>8.2}",
                "Totals", pass.total_base_fees, pass.total_taxes, pass.total_fees
            ));
            lines.push(format!(
                "Amount after fees: {:.2} + {:.2} = {:.2}",
                pass.base_amount, pass.total_fees, pass.total_amount
            ));
        }

        lines.push(String::new());
        lines.push(format!("Total net cost: {:.2}", breakdown.net_cost));

        lines.join("\n")
    }

    // Markdown formatting

    fn markdown_quote(&self, platform: Platform, quote: &PriceQuote) -> String {
        let mut lines = Vec::new();

        lines.push(format!("## {} price", platform.name()));
        lines.push(String::new());
        lines.push(format!("- **Production cost:** {:.2}", quote.production_cost));
        if quote.shipping_cost > 0.0 {
            lines.push(format!("- **Shipping:** {:.2}", quote.shipping_cost));
        }
        lines.push(format!("- **Profit:** {:.2}", quote.profit_amount));
        lines.push(format!("- **Net cost:** {:.2}", quote.net_cost));
        lines.push(format!("- **Buyer pays:** {:.2}", quote.after_discount_price));
        lines.push(format!("- **List price:** {:.2}", quote.final_price));

        lines.join("\n")
    }

    fn markdown_rows(&self, title: &str, table: &PricingTable) -> String {
        let mut lines = Vec::new();

        lines.push(format!("## {} ({})", title, table.platform.name()));
        lines.push(String::new());
        lines.push("| Variant | Cost | Profit | Net cost | Sale | List |".to_string());
        lines.push("|---------|------|--------|----------|------|------|".to_string());

        for row in &table.rows {
            let q = &row.quote;
            lines.push(format!(
                "| {} | {:.2} | {:.2} | {:.2} | {:.2} | {:.2} |",
                row.name,
                q.production_cost,
                q.profit_amount,
                q.net_cost,
                q.after_discount_price,
                q.final_price
            ));
        }

        lines.join("\n")
    }

    fn markdown_breakdown(&self, breakdown: &FeeBreakdown) -> String {
        let mut lines = Vec::new();

        lines.push("## Net cost breakdown".to_string());
        lines.push(String::new());
        lines.push(format!("- **Production cost:** {:.2}", breakdown.production_cost));
        lines.push(format!("- **Shipping cost:** {:.2}", breakdown.shipping_cost));
        lines.push(format!("- **Profit:** {:.2}", breakdown.profit_amount));

        for (title, pass) in
            [("First pass", &breakdown.first_pass), ("Second pass", &breakdown.second_pass)]
        {
            lines.push(String::new());
            lines.push(format!("### {} (on {:.2})", title, pass.base_amount));
            lines.push(String::new());
            lines.push("| Fee | Amount | Tax | Total |".to_string());
            lines.push("|-----|--------|-----|-------|".to_string());
            for (name, fee, tax) in fee_lines(pass) {
                lines.push(format!("| {} | {:.2} | {:.2} | {:.2} |", name, fee, tax, fee + tax));
            }
            lines.push(format!(
                "| **Totals** | **{:.2}** | **{:.2}** | **{:.2}** |",
                pass.total_base_fees, pass.total_taxes, pass.total_fees
            ));
        }

        lines.push(String::new());
        lines.push(format!("**Total net cost:** {:.2}", breakdown.net_cost));

        lines.join("\n")
    }

    // CSV formatting

    fn csv_header(&self) -> String {
        "name,production_cost,profit_amount,shipping_cost,net_cost,after_discount_price,final_price"
            .to_string()
    }

    fn csv_row(&self, name: &str, quote: &PriceQuote) -> String {
        format!(
            "{},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2}",
            Self::csv_escape(name),
            quote.production_cost,
            quote.profit_amount,
            quote.shipping_cost,
            quote.net_cost,
            quote.after_discount_price,
            quote.final_price
        )
    }

    fn csv_breakdown(&self, breakdown: &FeeBreakdown) -> String {
        let mut lines = vec!["pass,fee,amount,tax,total".to_string()];

        for (pass_name, pass) in [("first", &breakdown.first_pass), ("second", &breakdown.second_pass)]
        {
            for (name, fee, tax) in fee_lines(pass) {
                lines.push(format!("{},{},{:.4},{:.4},{:.4}", pass_name, name, fee, tax, fee + tax));
            }
        }

        lines.join("\n")
    }

    fn csv_escape(s: &str) -> String {
        if s.contains(',') || s.contains('"') || s.contains('\n') {
            format!("\"{}\"", s.replace('"', "\"\""))
        } else {
            s.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SizeVariant;
    use crate::pricing::{calculate_etsy_price, Cents, PlatformFeeConfig, PricingInput};

    fn make_quote() -> PriceQuote {
        calculate_etsy_price(&PricingInput::new(10.0).profit(50.0), &PlatformFeeConfig::ETSY)
            .unwrap()
    }

    fn make_table(platform: Platform) -> PricingTable {
        let variants = vec![
            SizeVariant {
                id: "s".to_string(),
                name: "S".to_string(),
                price: Cents::new(1000),
                shipping_cost: Cents::new(400),
            },
            SizeVariant {
                id: "xl".to_string(),
                name: "XL, tall".to_string(),
                price: Cents::new(1200),
                shipping_cost: Cents::new(400),
            },
        ];
        PricingTable::build(platform, &variants, &PricingInput::new(0.0).profit(50.0)).unwrap()
    }

    #[test]
    fn test_table_quote() {
        let output = Formatter::new(OutputFormat::Table).format_quote(Platform::Etsy, &make_quote());

        assert!(output.contains("Platform:        Etsy"));
        assert!(output.contains("Production cost: 10.00"));
        assert!(output.contains("Net cost:        12.48"));
        assert!(output.contains("Buyer pays:      17.99"));
        assert!(output.contains("List price:      17.99"));
        // no shipping line without free shipping
        assert!(!output.contains("Shipping"));
    }

    #[test]
    fn test_json_quote() {
        let output = Formatter::new(OutputFormat::Json).format_quote(Platform::Etsy, &make_quote());

        assert!(output.starts_with('{'));
        assert!(output.contains("\"final_price\""));
        assert!(output.contains("\"first_pass\""));

        let parsed: PriceQuote = serde_json::from_str(&output).unwrap();
        assert!((parsed.final_price - 17.99).abs() < 1e-9);
        assert!(parsed.breakdown.detailed().is_some());
    }

    #[test]
    fn test_markdown_quote() {
        let output =
            Formatter::new(OutputFormat::Markdown).format_quote(Platform::Shopify, &make_quote());
        assert!(output.contains("## Shopify price"));
        assert!(output.contains("- **List price:** 17.99"));
    }

    #[test]
    fn test_csv_quote() {
        let output = Formatter::new(OutputFormat::Csv).format_quote(Platform::Etsy, &make_quote());
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("name,production_cost"));
        assert_eq!(lines[1], "etsy,10.00,5.00,0.00,12.48,17.99,17.99");
    }

    #[test]
    fn test_table_rows() {
        let output =
            Formatter::new(OutputFormat::Table).format_table("Bella 3001", &make_table(Platform::Etsy));

        assert!(output.starts_with("Bella 3001 (Etsy)"));
        assert!(output.contains("Variant"));
        assert!(output.contains("0% profit option"));
        assert!(output.contains("XL, tall"));
    }

    #[test]
    fn test_markdown_rows() {
        let output = Formatter::new(OutputFormat::Markdown)
            .format_table("Bella 3001", &make_table(Platform::Shopify));

        assert!(output.contains("## Bella 3001 (Shopify)"));
        assert!(output.contains("| S | 10.00 | 5.00 | 10.00 | 15.99 | 15.99 |"));
        assert!(output.contains("| 0% profit option | 10.00 | 0.00 | 10.00 | 9.99 | 9.99 |"));
    }

    #[test]
    fn test_csv_rows_escape_names() {
        let output = Formatter::new(OutputFormat::Csv).format_table("x", &make_table(Platform::Etsy));
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[2].starts_with("\"XL, tall\","));
        assert!(lines[3].starts_with("0% profit option,"));
    }

    #[test]
    fn test_empty_table() {
        let empty = PricingTable { platform: Platform::Etsy, rows: Vec::new() };
        assert_eq!(
            Formatter::new(OutputFormat::Table).format_table("x", &empty),
            "No size variants to price."
        );
        assert!(Formatter::new(OutputFormat::Csv).format_table("x", &empty).starts_with("name,"));
        assert!(Formatter::new(OutputFormat::Json).format_table("x", &empty).contains("\"rows\": []"));
    }

    #[test]
    fn test_table_breakdown() {
        let quote = make_quote();
        let breakdown = quote.breakdown.detailed().unwrap();
        let output = Formatter::new(OutputFormat::Table).format_breakdown(breakdown);

        assert!(output.contains("First pass (on 15.00)"));
        assert!(output.contains("Second pass (on 17.48)"));
        assert!(output.contains("Listing Fee"));
        assert!(output.contains("Amount after fees: 15.00 + 2.48 = 17.48"));
        assert!(output.contains("Total net cost: 12.48"));
    }

    #[test]
    fn test_markdown_breakdown() {
        let quote = make_quote();
        let output =
            Formatter::new(OutputFormat::Markdown).format_breakdown(quote.breakdown.detailed().unwrap());

        assert!(output.contains("## Net cost breakdown"));
        assert!(output.contains("### First pass (on 15.00)"));
        assert!(output.contains("| Flat Fee | 0.25 | 0.03 | 0.28 |"));
    }

    #[test]
    fn test_csv_breakdown() {
        let quote = make_quote();
        let output =
            Formatter::new(OutputFormat::Csv).format_breakdown(quote.breakdown.detailed().unwrap());
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "pass,fee,amount,tax,total");
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[4], "first,Flat Fee,0.2500,0.0325,0.2825");
    }
}
