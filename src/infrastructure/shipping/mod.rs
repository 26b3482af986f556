pub mod carrier;
pub mod flat_rate;
pub mod same_day;
pub mod weight_based;

use crate::domain::shipping::ShippingStrategyBox;
use crate::error::{PaymentError, Result};

/// Resolves a shipping strategy by name, case-insensitively.
pub fn strategy_for(name: &str) -> Result<ShippingStrategyBox> {
    match name.to_lowercase().as_str() {
        "flat" => Ok(Box::new(flat_rate::FlatRateStrategy::new())),
        "weight" => Ok(Box::new(weight_based::WeightBasedStrategy::new())),
        "same-day" => Ok(Box::new(same_day::SameDayStrategy::new())),
        "carrier" => Ok(Box::new(carrier::CarrierRateStrategy::new())),
        _ => Err(PaymentError::UnknownProvider(name.into())),
    }
}
