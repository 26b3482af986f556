use crate::domain::shipping::{ShippingQuote, ShippingStrategy, validate_parcel};
use crate::error::{PaymentError, Result};
use async_trait::async_trait;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const BASE: Decimal = dec!(14.99);
const PER_UNIT: Decimal = dec!(1.00);
/// Same-day couriers do not carry parcels at or above this weight.
const MAX_WEIGHT_EXCLUSIVE: Decimal = dec!(10);

/// Premium same-day delivery, limited to light parcels.
#[derive(Default)]
pub struct SameDayStrategy;

impl SameDayStrategy {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ShippingStrategy for SameDayStrategy {
    fn name(&self) -> &str {
        "same-day"
    }

    async fn quote(&self, weight: Decimal, order_value: Decimal) -> Result<ShippingQuote> {
        validate_parcel(weight, order_value)?;
        if weight >= MAX_WEIGHT_EXCLUSIVE {
            return Err(PaymentError::UnsupportedOperation(format!(
                "same-day delivery is not available for parcels of {MAX_WEIGHT_EXCLUSIVE} \
                 weight units or more (got {weight})"
            )));
        }
        let cost = (BASE + PER_UNIT * weight).round_dp(2);
        Ok(ShippingQuote {
            strategy: self.name().into(),
            cost,
            message: format!("same-day courier for {weight} units"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_succeeds_strictly_below_threshold() {
        let quote = SameDayStrategy::new()
            .quote(dec!(9.99), dec!(10))
            .await
            .unwrap();
        assert_eq!(quote.cost, dec!(24.98));
    }

    #[tokio::test]
    async fn test_fails_exactly_at_threshold() {
        let err = SameDayStrategy::new()
            .quote(dec!(10), dec!(10))
            .await
            .unwrap_err();
        assert!(matches!(err, PaymentError::UnsupportedOperation(_)));
    }

    #[tokio::test]
    async fn test_fails_above_threshold() {
        let err = SameDayStrategy::new()
            .quote(dec!(10.5), dec!(10))
            .await
            .unwrap_err();
        assert!(matches!(err, PaymentError::UnsupportedOperation(_)));
    }
}
