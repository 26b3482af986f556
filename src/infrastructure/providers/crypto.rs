use crate::domain::payment::{
    Amount, PaymentDetails, PaymentResult, Receipt, ReceiptFormat, RefundResult,
};
use crate::domain::ports::{
    IdGeneratorArc, PaymentProcessor, ProviderFamily, ReceiptGenerator, RefundHandler,
};
use crate::error::Result;
use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use serde_json::json;

const PROVIDER: &str = "Crypto";

/// Charges with no fee; the network cost is borne by the customer wallet.
pub struct CryptoProcessor {
    ids: IdGeneratorArc,
}

#[async_trait]
impl PaymentProcessor for CryptoProcessor {
    fn provider(&self) -> &str {
        PROVIDER
    }

    async fn process(&self, amount: Amount, details: &PaymentDetails) -> Result<PaymentResult> {
        Ok(PaymentResult {
            success: true,
            transaction_id: self.ids.next_id("0x"),
            amount: amount.value(),
            fee: Decimal::ZERO,
            message: format!(
                "Settled {} for customer {} on-chain",
                amount.value(),
                details.customer_id
            ),
        })
    }
}

/// Renders receipts as tagged data (a JSON document).
pub struct CryptoReceiptGenerator {
    ids: IdGeneratorArc,
}

impl ReceiptGenerator for CryptoReceiptGenerator {
    fn provider(&self) -> &str {
        PROVIDER
    }

    fn generate(&self, result: &PaymentResult) -> Result<Receipt> {
        let receipt_id = self.ids.next_id("0xr");
        let content = serde_json::to_string_pretty(&json!({
            "receipt_id": receipt_id,
            "provider": PROVIDER,
            "transaction_id": result.transaction_id,
            "amount": result.amount,
            "fee": result.fee,
        }))?;
        Ok(Receipt {
            receipt_id,
            format: ReceiptFormat::TaggedData,
            content,
            created_at: Utc::now(),
        })
    }
}

/// Refunds the full amount; nothing is withheld on-chain.
pub struct CryptoRefundHandler {
    ids: IdGeneratorArc,
}

#[async_trait]
impl RefundHandler for CryptoRefundHandler {
    fn provider(&self) -> &str {
        PROVIDER
    }

    async fn refund(&self, transaction_id: &str, amount: Amount) -> Result<RefundResult> {
        Ok(RefundResult {
            success: true,
            refund_id: self.ids.next_id("0xf"),
            refunded_amount: amount.value(),
            message: format!("Reversed {} for {transaction_id}", amount.value()),
        })
    }
}

pub fn family(ids: IdGeneratorArc) -> Result<ProviderFamily> {
    ProviderFamily::new(
        PROVIDER,
        Box::new(CryptoProcessor { ids: ids.clone() }),
        Box::new(CryptoReceiptGenerator { ids: ids.clone() }),
        Box::new(CryptoRefundHandler { ids }),
    )
}
