//! Errors returned by the pricing engine.

use thiserror::Error;

/// Reasons a price quote cannot be computed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    /// The discount would make the list price infinite (or negative).
    #[error("Invalid discount: {discount}% (must be below 100%)")]
    InvalidDiscount { discount: f64 },

    /// A negative or non-finite amount or percentage.
    #[error("Invalid {field}: {value}")]
    InvalidInput { field: &'static str, value: f64 },
}

impl PricingError {
    pub(crate) fn invalid(field: &'static str, value: f64) -> Self {
        PricingError::InvalidInput { field, value }
    }
}

/// Rejects negative, NaN and infinite values.
pub(crate) fn ensure_non_negative(field: &'static str, value: f64) -> Result<f64, PricingError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(PricingError::invalid(field, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = PricingError::InvalidDiscount { discount: 100.0 };
        assert_eq!(err.to_string(), "Invalid discount: 100% (must be below 100%)");

        let err = PricingError::invalid("production cost", -1.5);
        assert_eq!(err.to_string(), "Invalid production cost: -1.5");
    }

    #[test]
    fn test_ensure_non_negative() {
        assert_eq!(ensure_non_negative("cost", 0.0), Ok(0.0));
        assert_eq!(ensure_non_negative("cost", 12.5), Ok(12.5));
        assert!(ensure_non_negative("cost", -0.01).is_err());
        assert!(ensure_non_negative("cost", f64::NAN).is_err());
        assert!(ensure_non_negative("cost", f64::INFINITY).is_err());
    }
}
