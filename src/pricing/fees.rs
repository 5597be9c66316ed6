//! Marketplace fee structures and single-pass fee computation.

use serde::{Deserialize, Serialize};

/// Fee constants for one marketplace.
///
/// Rates are ratios (`0.065` is 6.5%). Every fee amount attracts
/// `tax_rate_percent` on top, which models VAT/GST charged on marketplace fees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlatformFeeConfig {
    /// Transaction fee on the order total.
    pub transaction_fee_percent: f64,
    /// Payment processing fee on the order total.
    pub payment_processing_fee_percent: f64,
    /// Regulatory operating fee on the order total.
    pub regulatory_operating_fee_percent: f64,
    /// Fixed per-order processing fee.
    pub flat_fee: f64,
    /// Fixed per-listing fee.
    pub listing_fee: f64,
    /// Extra ad-valorem fee charged when advertising is enabled.
    pub ads_markup_percent: f64,
    /// Tax charged on every fee amount.
    pub tax_rate_percent: f64,
}

impl PlatformFeeConfig {
    /// Etsy's fee schedule.
    pub const ETSY: PlatformFeeConfig = PlatformFeeConfig {
        transaction_fee_percent: 0.065,
        payment_processing_fee_percent: 0.04,
        regulatory_operating_fee_percent: 0.0115,
        flat_fee: 0.25,
        listing_fee: 0.20,
        ads_markup_percent: 0.15,
        tax_rate_percent: 0.13,
    };

    /// Sum of the ad-valorem components, before tax and without ads.
    pub fn fee_percent(&self) -> f64 {
        self.transaction_fee_percent
            + self.payment_processing_fee_percent
            + self.regulatory_operating_fee_percent
    }

    /// Sum of the fixed components, before tax.
    pub fn total_flat_fee(&self) -> f64 {
        self.flat_fee + self.listing_fee
    }

    /// Combined taxed ad-valorem rate, grossed up for fees charged on fees.
    ///
    /// For Etsy this is the familiar 15.16%: 11.65% plus 13% tax is 13.16%,
    /// and charging that again on itself converges to `r / (1 - r)`.
    pub fn effective_fee_percent(&self, ads_enabled: bool) -> f64 {
        let rate = self.ad_valorem_percent(ads_enabled) * (1.0 + self.tax_rate_percent);
        rate / (1.0 - rate)
    }

    /// Fixed components including their tax.
    pub fn effective_flat_fee(&self) -> f64 {
        self.total_flat_fee() * (1.0 + self.tax_rate_percent)
    }

    fn ad_valorem_percent(&self, ads_enabled: bool) -> f64 {
        self.fee_percent() + if ads_enabled { self.ads_markup_percent } else { 0.0 }
    }
}

/// Every fee charged against one base amount, with its tax.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeePass {
    /// Amount the ad-valorem fees were charged on.
    pub base_amount: f64,
    /// Transaction fee, plus the ads markup when advertising.
    pub etsy_fees: f64,
    pub etsy_taxes: f64,
    pub payment_processing_fees: f64,
    pub payment_processing_taxes: f64,
    pub regulatory_operating_fees: f64,
    pub regulatory_operating_taxes: f64,
    pub flat_fee: f64,
    pub flat_fee_taxes: f64,
    pub listing_fee: f64,
    pub listing_fee_taxes: f64,
    pub total_base_fees: f64,
    pub total_taxes: f64,
    pub total_fees: f64,
    /// `base_amount + total_fees`
    pub total_amount: f64,
}

/// Charges every fee in `fees` against `base_amount`.
pub fn compute_fee_pass(base_amount: f64, fees: &PlatformFeeConfig, ads_enabled: bool) -> FeePass {
    let tax = |amount: f64| amount * fees.tax_rate_percent;

    let etsy_percent = fees.transaction_fee_percent
        + if ads_enabled { fees.ads_markup_percent } else { 0.0 };

    let etsy_fees = base_amount * etsy_percent;
    let payment_processing_fees = base_amount * fees.payment_processing_fee_percent;
    let regulatory_operating_fees = base_amount * fees.regulatory_operating_fee_percent;

    let total_base_fees = etsy_fees
        + payment_processing_fees
        + regulatory_operating_fees
        + fees.flat_fee
        + fees.listing_fee;

    let etsy_taxes = tax(etsy_fees);
    let payment_processing_taxes = tax(payment_processing_fees);
    let regulatory_operating_taxes = tax(regulatory_operating_fees);
    let flat_fee_taxes = tax(fees.flat_fee);
    let listing_fee_taxes = tax(fees.listing_fee);

    let total_taxes = etsy_taxes
        + payment_processing_taxes
        + regulatory_operating_taxes
        + flat_fee_taxes
        + listing_fee_taxes;

    let total_fees = total_base_fees + total_taxes;

    FeePass {
        base_amount,
        etsy_fees,
        etsy_taxes,
        payment_processing_fees,
        payment_processing_taxes,
        regulatory_operating_fees,
        regulatory_operating_taxes,
        flat_fee: fees.flat_fee,
        flat_fee_taxes,
        listing_fee: fees.listing_fee,
        listing_fee_taxes,
        total_base_fees,
        total_taxes,
        total_fees,
        total_amount: base_amount + total_fees,
    }
}
