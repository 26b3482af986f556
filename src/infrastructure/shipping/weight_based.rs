use crate::domain::shipping::{ShippingQuote, ShippingStrategy, validate_parcel};
use crate::error::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const BASE: Decimal = dec!(2.00);
const PER_UNIT: Decimal = dec!(1.10);

/// Base price plus a per-weight-unit rate.
#[derive(Default)]
pub struct WeightBasedStrategy;

impl WeightBasedStrategy {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ShippingStrategy for WeightBasedStrategy {
    fn name(&self) -> &str {
        "weight"
    }

    async fn quote(&self, weight: Decimal, order_value: Decimal) -> Result<ShippingQuote> {
        validate_parcel(weight, order_value)?;
        let cost = (BASE + PER_UNIT * weight).round_dp(2);
        Ok(ShippingQuote {
            strategy: self.name().into(),
            cost,
            message: format!("{BASE} base + {PER_UNIT}/unit for {weight} units"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_cost_scales_with_weight() {
        let strategy = WeightBasedStrategy::new();
        let light = strategy.quote(dec!(1), dec!(10)).await.unwrap();
        let heavy = strategy.quote(dec!(10), dec!(10)).await.unwrap();

        assert_eq!(light.cost, dec!(3.10));
        assert_eq!(heavy.cost, dec!(13.00));
    }

    #[tokio::test]
    async fn test_rejects_non_positive_weight() {
        let err = WeightBasedStrategy::new()
            .quote(dec!(0), dec!(10))
            .await
            .unwrap_err();
        assert!(matches!(err, crate::error::PaymentError::InvalidAmount(_)));
    }
}
