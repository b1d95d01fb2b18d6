//! Booking rules configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::stats::DEFAULT_UNIT_PRICE;

/// Booking configuration
#[derive(Debug, Clone, Deserialize)]
pub struct BookingConfig {
    /// Estimated spend per confirmed guest, used for dashboard revenue
    #[serde(default = "default_unit_price")]
    pub unit_price: i64,
}

impl BookingConfig {
    /// Validate booking configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.unit_price < 0 {
            return Err(ValidationError::NegativeUnitPrice);
        }
        Ok(())
    }
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            unit_price: default_unit_price(),
        }
    }
}

fn default_unit_price() -> i64 {
    DEFAULT_UNIT_PRICE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booking_config_defaults() {
        assert_eq!(BookingConfig::default().unit_price, 250);
    }

    #[test]
    fn test_validation_negative_price() {
        let config = BookingConfig { unit_price: -1 };
        assert!(config.validate().is_err());
        assert!(BookingConfig { unit_price: 0 }.validate().is_ok());
    }
}
