use crate::domain::shipping::{ShippingQuote, ShippingStrategy, validate_parcel};
use crate::error::{PaymentError, Result};
use async_trait::async_trait;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::time::Duration;
use tracing::debug;

const BASE: Decimal = dec!(4.50);
const PER_UNIT: Decimal = dec!(0.85);
const LOOKUP_LATENCY: Duration = Duration::from_millis(50);

/// Quotes from a (simulated) remote carrier rate API.
///
/// The lookup has fixed latency and can be bounded with a deadline; on expiry
/// the quote fails with `Timeout` instead of hanging the caller.
pub struct CarrierRateStrategy {
    deadline: Option<Duration>,
}

impl CarrierRateStrategy {
    pub fn new() -> Self {
        Self { deadline: None }
    }

    pub fn with_deadline(deadline: Duration) -> Self {
        Self {
            deadline: Some(deadline),
        }
    }

    async fn fetch_rate(&self, weight: Decimal) -> Decimal {
        debug!(%weight, "fetching carrier rate");
        tokio::time::sleep(LOOKUP_LATENCY).await;
        (BASE + PER_UNIT * weight).round_dp(2)
    }
}

impl Default for CarrierRateStrategy {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ShippingStrategy for CarrierRateStrategy {
    fn name(&self) -> &str {
        "carrier"
    }

    async fn quote(&self, weight: Decimal, order_value: Decimal) -> Result<ShippingQuote> {
        validate_parcel(weight, order_value)?;

        let cost = match self.deadline {
            Some(deadline) => tokio::time::timeout(deadline, self.fetch_rate(weight))
                .await
                .map_err(|_| PaymentError::Timeout(deadline))?,
            None => self.fetch_rate(weight).await,
        };

        Ok(ShippingQuote {
            strategy: self.name().into(),
            cost,
            message: format!("negotiated carrier rate for {weight} units"),
        })
    }
}
