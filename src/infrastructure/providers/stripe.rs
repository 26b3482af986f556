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

const PROVIDER: &str = "Stripe";
const PERCENTAGE_FEE: Decimal = dec!(0.02);
const FLAT_FEE: Decimal = dec!(0.30);

/// Charges with a percentage-plus-flat fee, Stripe's card pricing shape.
pub struct StripeProcessor {
    ids: IdGeneratorArc,
}

#[async_trait]
impl PaymentProcessor for StripeProcessor {
    fn provider(&self) -> &str {
        PROVIDER
    }

    async fn process(&self, amount: Amount, details: &PaymentDetails) -> Result<PaymentResult> {
        let fee = (amount.value() * PERCENTAGE_FEE + FLAT_FEE).round_dp(2);
        Ok(PaymentResult {
            success: true,
            transaction_id: self.ids.next_id("ch_"),
            amount: amount.value(),
            fee,
            message: format!(
                "Charged {} to customer {} via Stripe",
                amount.value(),
                details.customer_id
            ),
        })
    }
}

/// Renders receipts as a structured-markup block.
pub struct StripeReceiptGenerator {
    ids: IdGeneratorArc,
}

impl ReceiptGenerator for StripeReceiptGenerator {
    fn provider(&self) -> &str {
        PROVIDER
    }

    fn generate(&self, result: &PaymentResult) -> Result<Receipt> {
        let receipt_id = self.ids.next_id("rcpt_");
        let content = format!(
            "<receipt id=\"{receipt_id}\" provider=\"{PROVIDER}\">\n\
             \x20 <transaction>{}</transaction>\n\
             \x20 <amount>{}</amount>\n\
             \x20 <fee>{}</fee>\n\
             </receipt>",
            result.transaction_id, result.amount, result.fee
        );
        Ok(Receipt {
            receipt_id,
            format: ReceiptFormat::StructuredMarkup,
            content,
            created_at: Utc::now(),
        })
    }
}

/// Refunds the full amount; Stripe returns its processing fee.
pub struct StripeRefundHandler {
    ids: IdGeneratorArc,
}

#[async_trait]
impl RefundHandler for StripeRefundHandler {
    fn provider(&self) -> &str {
        PROVIDER
    }

    async fn refund(&self, transaction_id: &str, amount: Amount) -> Result<RefundResult> {
        Ok(RefundResult {
            success: true,
            refund_id: self.ids.next_id("re_"),
            refunded_amount: amount.value(),
            message: format!("Refunded {} for {transaction_id}", amount.value()),
        })
    }
}

pub fn family(ids: IdGeneratorArc) -> Result<ProviderFamily> {
    ProviderFamily::new(
        PROVIDER,
        Box::new(StripeProcessor { ids: ids.clone() }),
        Box::new(StripeReceiptGenerator { ids: ids.clone() }),
        Box::new(StripeRefundHandler { ids }),
    )
}
