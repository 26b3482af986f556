use super::payment::{Amount, PaymentDetails, PaymentResult, Receipt, RefundResult};
use crate::error::Result;
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

/// Charges an amount and produces a `PaymentResult` with a provider-scoped
/// transaction id. Variants differ only in their fee formula.
#[async_trait]
pub trait PaymentProcessor: Send + Sync {
    fn provider(&self) -> &str;
    async fn process(&self, amount: Amount, details: &PaymentDetails) -> Result<PaymentResult>;
}

/// Renders a `PaymentResult` into a provider-specific textual receipt.
///
/// Pure apart from the embedded receipt id and generation timestamp. Every
/// rendering must contain the provider name, transaction id, amount and fee.
pub trait ReceiptGenerator: Send + Sync {
    fn provider(&self) -> &str;
    fn generate(&self, result: &PaymentResult) -> Result<Receipt>;
}

/// Computes a refunded amount for a previously processed transaction.
#[async_trait]
pub trait RefundHandler: Send + Sync {
    fn provider(&self) -> &str;
    async fn refund(&self, transaction_id: &str, amount: Amount) -> Result<RefundResult>;
}

/// Source of transaction/receipt/refund identifiers.
///
/// Abstracted so tests can supply deterministic ids; production wiring uses
/// random uuid suffixes.
pub trait IdGenerator: Send + Sync {
    /// Returns a fresh identifier of the form `<prefix><suffix>`.
    fn next_id(&self, prefix: &str) -> String;
}

pub type ProcessorBox = Box<dyn PaymentProcessor>;
pub type GeneratorBox = Box<dyn ReceiptGenerator>;
pub type RefundHandlerBox = Box<dyn RefundHandler>;
pub type IdGeneratorArc = Arc<dyn IdGenerator>;

/// A named triple of mutually-compatible capabilities for one provider.
///
/// Construction asserts that all three members report the same provider name,
/// so a family can never mix implementations from different providers. The
/// coordinator only ever receives a whole family, never individual members.
pub struct ProviderFamily {
    name: String,
    processor: ProcessorBox,
    generator: GeneratorBox,
    refund_handler: RefundHandlerBox,
}

impl ProviderFamily {
    pub fn new(
        name: impl Into<String>,
        processor: ProcessorBox,
        generator: GeneratorBox,
        refund_handler: RefundHandlerBox,
    ) -> Result<Self> {
        let name = name.into();
        for member in [
            processor.provider(),
            generator.provider(),
            refund_handler.provider(),
        ] {
            if !member.eq_ignore_ascii_case(&name) {
                return Err(crate::error::PaymentError::UnsupportedOperation(format!(
                    "family '{name}' cannot include a component from provider '{member}'"
                )));
            }
        }
        Ok(Self {
            name,
            processor,
            generator,
            refund_handler,
        })
    }

    pub fn provider(&self) -> &str {
        &self.name
    }

    pub fn processor(&self) -> &dyn PaymentProcessor {
        self.processor.as_ref()
    }

    pub fn generator(&self) -> &dyn ReceiptGenerator {
        self.generator.as_ref()
    }

    pub fn refund_handler(&self) -> &dyn RefundHandler {
        self.refund_handler.as_ref()
    }
}

// Members are trait objects, so only the provider name is printable.
impl fmt::Debug for ProviderFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderFamily")
            .field("provider", &self.name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::payment::ReceiptFormat;
    use crate::error::PaymentError;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    struct Fake(&'static str);

    #[async_trait]
    impl PaymentProcessor for Fake {
        fn provider(&self) -> &str {
            self.0
        }
        async fn process(&self, amount: Amount, _: &PaymentDetails) -> Result<PaymentResult> {
            Ok(PaymentResult {
                success: true,
                transaction_id: "t-1".into(),
                amount: amount.value(),
                fee: dec!(0),
                message: String::new(),
            })
        }
    }

    impl ReceiptGenerator for Fake {
        fn provider(&self) -> &str {
            self.0
        }
        fn generate(&self, result: &PaymentResult) -> Result<Receipt> {
            Ok(Receipt {
                receipt_id: "r-1".into(),
                format: ReceiptFormat::PlainText,
                content: result.transaction_id.clone(),
                created_at: Utc::now(),
            })
        }
    }

    #[async_trait]
    impl RefundHandler for Fake {
        fn provider(&self) -> &str {
            self.0
        }
        async fn refund(&self, _: &str, amount: Amount) -> Result<RefundResult> {
            Ok(RefundResult {
                success: true,
                refund_id: "f-1".into(),
                refunded_amount: amount.value(),
                message: String::new(),
            })
        }
    }

    #[test]
    fn test_family_accepts_matching_members() {
        let family = ProviderFamily::new(
            "Acme",
            Box::new(Fake("Acme")),
            Box::new(Fake("acme")),
            Box::new(Fake("ACME")),
        );
        assert!(family.is_ok());
    }

    #[test]
    fn test_family_debug_names_provider() {
        let family = ProviderFamily::new(
            "Acme",
            Box::new(Fake("Acme")),
            Box::new(Fake("Acme")),
            Box::new(Fake("Acme")),
        )
        .unwrap();
        // Families must be printable in assertion failures (`Result::unwrap_err`
        // requires the Ok side to implement Debug).
        assert!(format!("{family:?}").contains("Acme"));
    }

    #[test]
    fn test_family_rejects_mixed_members() {
        let result = ProviderFamily::new(
            "Acme",
            Box::new(Fake("Acme")),
            Box::new(Fake("Other")),
            Box::new(Fake("Acme")),
        );
        assert!(matches!(
            result,
            Err(PaymentError::UnsupportedOperation(_))
        ));
    }
}
