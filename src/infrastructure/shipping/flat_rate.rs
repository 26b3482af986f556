use crate::domain::shipping::{ShippingQuote, ShippingStrategy, validate_parcel};
use crate::error::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const RATE: Decimal = dec!(5.99);
const FREE_SHIPPING_THRESHOLD: Decimal = dec!(50);

/// One price for any parcel, waived above an order-value threshold.
#[derive(Default)]
pub struct FlatRateStrategy;

impl FlatRateStrategy {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ShippingStrategy for FlatRateStrategy {
    fn name(&self) -> &str {
        "flat"
    }

    async fn quote(&self, weight: Decimal, order_value: Decimal) -> Result<ShippingQuote> {
        validate_parcel(weight, order_value)?;
        let (cost, message) = if order_value >= FREE_SHIPPING_THRESHOLD {
            (Decimal::ZERO, "free shipping for qualifying order".into())
        } else {
            (RATE, format!("flat rate {RATE}"))
        };
        Ok(ShippingQuote {
            strategy: self.name().into(),
            cost,
            message,
        })
    }
}
