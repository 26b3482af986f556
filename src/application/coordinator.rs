use crate::application::registry::ProviderRegistry;
use crate::domain::payment::{Amount, PaymentDetails, PaymentResult, Receipt, RefundResult};
use crate::domain::ports::ProviderFamily;
use crate::error::{PaymentError, Result};
use std::sync::Arc;
use tracing::{debug, info};

/// Lifecycle of a single transaction record.
///
/// `Processing` is transient; `Failed` and `Refunded` are terminal;
/// `ReceiptGenerated` is the only state from which a refund may start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionState {
    Processing,
    Failed,
    ReceiptGenerated,
    Refunded,
}

/// The outcome of one coordinated transaction.
///
/// A record keeps the `ProviderFamily` it was created with, so a later refund
/// is guaranteed to run against the same provider that processed the payment.
/// Components from another family can never be substituted mid-transaction.
#[derive(Debug)]
pub struct TransactionRecord {
    family: Arc<ProviderFamily>,
    state: TransactionState,
    result: PaymentResult,
    receipt: Option<Receipt>,
    refund: Option<RefundResult>,
}

impl TransactionRecord {
    pub fn provider(&self) -> &str {
        self.family.provider()
    }

    pub fn state(&self) -> TransactionState {
        self.state
    }

    pub fn result(&self) -> &PaymentResult {
        &self.result
    }

    /// The receipt, present in `ReceiptGenerated` and `Refunded` states.
    pub fn receipt(&self) -> Option<&Receipt> {
        self.receipt.as_ref()
    }

    pub fn refund_result(&self) -> Option<&RefundResult> {
        self.refund.as_ref()
    }

    /// Refunds the full processed amount through the family that processed it.
    ///
    /// Only valid once, from the `ReceiptGenerated` state. A failed or already
    /// refunded transaction cannot be refunded.
    pub async fn refund(&mut self) -> Result<&RefundResult> {
        if self.state != TransactionState::ReceiptGenerated {
            return Err(PaymentError::UnsupportedOperation(format!(
                "refund requires a receipted transaction, current state is {:?}",
                self.state
            )));
        }

        let amount = Amount::new(self.result.amount)?;
        let refund = self
            .family
            .refund_handler()
            .refund(&self.result.transaction_id, amount)
            .await?;

        info!(
            provider = self.family.provider(),
            transaction_id = %self.result.transaction_id,
            refunded = %refund.refunded_amount,
            "refund completed"
        );

        self.state = TransactionState::Refunded;
        Ok(&*self.refund.insert(refund))
    }
}

/// Drives process -> receipt -> optional refund against exactly one resolved
/// provider family per transaction.
pub struct TransactionCoordinator {
    registry: ProviderRegistry,
}

impl TransactionCoordinator {
    pub fn new(registry: ProviderRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    /// Resolves the named family, processes the amount and, on success,
    /// generates the receipt. Returns the record in `ReceiptGenerated` or
    /// `Failed` state; both carry the processor's `PaymentResult`.
    pub async fn run_transaction(
        &self,
        provider: &str,
        amount: Amount,
        details: &PaymentDetails,
    ) -> Result<TransactionRecord> {
        let family = self.registry.resolve(provider)?;
        debug!(provider = family.provider(), amount = %amount.value(), "processing payment");

        let result = family.processor().process(amount, details).await?;
        if !result.success {
            info!(
                provider = family.provider(),
                transaction_id = %result.transaction_id,
                "payment declined"
            );
            return Ok(TransactionRecord {
                family,
                state: TransactionState::Failed,
                result,
                receipt: None,
                refund: None,
            });
        }

        let receipt = family.generator().generate(&result)?;
        info!(
            provider = family.provider(),
            transaction_id = %result.transaction_id,
            receipt_id = %receipt.receipt_id,
            "payment receipted"
        );

        Ok(TransactionRecord {
            family,
            state: TransactionState::ReceiptGenerated,
            result,
            receipt: Some(receipt),
            refund: None,
        })
    }
}
