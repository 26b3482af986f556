use crate::error::{PaymentError, Result};
use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A priced shipping option for a given parcel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingQuote {
    pub strategy: String,
    pub cost: Decimal,
    pub message: String,
}

/// Computes a shipping cost from parcel weight and order value.
///
/// Variants differ in pricing formula; the carrier-backed variant is the only
/// one with latency (a simulated rate lookup).
#[async_trait]
pub trait ShippingStrategy: Send + Sync {
    fn name(&self) -> &str;
    async fn quote(&self, weight: Decimal, order_value: Decimal) -> Result<ShippingQuote>;
}

pub type ShippingStrategyBox = Box<dyn ShippingStrategy>;

/// Shared precondition for all strategies: positive weight, non-negative value.
pub fn validate_parcel(weight: Decimal, order_value: Decimal) -> Result<()> {
    if weight <= Decimal::ZERO {
        return Err(PaymentError::InvalidAmount(format!(
            "weight must be positive, got {weight}"
        )));
    }
    if order_value < Decimal::ZERO {
        return Err(PaymentError::InvalidAmount(format!(
            "order value must not be negative, got {order_value}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parcel_validation() {
        assert!(validate_parcel(dec!(1.0), dec!(0)).is_ok());
        assert!(matches!(
            validate_parcel(dec!(0), dec!(10)),
            Err(PaymentError::InvalidAmount(_))
        ));
        assert!(matches!(
            validate_parcel(dec!(-2), dec!(10)),
            Err(PaymentError::InvalidAmount(_))
        ));
        assert!(matches!(
            validate_parcel(dec!(1), dec!(-0.01)),
            Err(PaymentError::InvalidAmount(_))
        ));
    }
}
