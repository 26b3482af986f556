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
use rust_decimal_macros::dec;

const PROVIDER: &str = "PayPal";
const FLAT_FEE: Decimal = dec!(0.50);
const REFUND_FEE: Decimal = dec!(0.25);

/// Charges with a flat per-transaction fee regardless of amount.
pub struct PayPalProcessor {
    ids: IdGeneratorArc,
}

#[async_trait]
impl PaymentProcessor for PayPalProcessor {
    fn provider(&self) -> &str {
        PROVIDER
    }

    async fn process(&self, amount: Amount, details: &PaymentDetails) -> Result<PaymentResult> {
        Ok(PaymentResult {
            success: true,
            transaction_id: self.ids.next_id("PAY-"),
            amount: amount.value(),
            fee: FLAT_FEE,
            message: format!(
                "Charged {} to customer {} via PayPal",
                amount.value(),
                details.customer_id
            ),
        })
    }
}

/// Renders receipts as a plain-text key/value block.
pub struct PayPalReceiptGenerator {
    ids: IdGeneratorArc,
}

impl ReceiptGenerator for PayPalReceiptGenerator {
    fn provider(&self) -> &str {
        PROVIDER
    }

    fn generate(&self, result: &PaymentResult) -> Result<Receipt> {
        let receipt_id = self.ids.next_id("RCPT-");
        let content = format!(
            "{PROVIDER} receipt {receipt_id}\n\
             transaction: {}\n\
             amount:      {}\n\
             fee:         {}",
            result.transaction_id, result.amount, result.fee
        );
        Ok(Receipt {
            receipt_id,
            format: ReceiptFormat::PlainText,
            content,
            created_at: Utc::now(),
        })
    }
}

/// Refunds the amount minus a flat refund fee, clamped at zero.
pub struct PayPalRefundHandler {
    ids: IdGeneratorArc,
}

#[async_trait]
impl RefundHandler for PayPalRefundHandler {
    fn provider(&self) -> &str {
        PROVIDER
    }

    async fn refund(&self, transaction_id: &str, amount: Amount) -> Result<RefundResult> {
        let refunded = (amount.value() - REFUND_FEE).max(Decimal::ZERO);
        Ok(RefundResult {
            success: true,
            refund_id: self.ids.next_id("REF-"),
            refunded_amount: refunded,
            message: format!(
                "Refunded {refunded} for {transaction_id} ({REFUND_FEE} refund fee withheld)"
            ),
        })
    }
}

pub fn family(ids: IdGeneratorArc) -> Result<ProviderFamily> {
    ProviderFamily::new(
        PROVIDER,
        Box::new(PayPalProcessor { ids: ids.clone() }),
        Box::new(PayPalReceiptGenerator { ids: ids.clone() }),
        Box::new(PayPalRefundHandler { ids }),
    )
}
