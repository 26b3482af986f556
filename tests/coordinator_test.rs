use provider_rail::application::coordinator::{TransactionCoordinator, TransactionState};
use provider_rail::domain::payment::{Amount, PaymentDetails, ReceiptFormat};
use provider_rail::error::PaymentError;
use provider_rail::infrastructure::id::SequentialIdGenerator;
use provider_rail::infrastructure::providers;
use rust_decimal_macros::dec;
use std::sync::Arc;

fn coordinator() -> TransactionCoordinator {
    let ids = Arc::new(SequentialIdGenerator::new());
    TransactionCoordinator::new(providers::builtin_registry(ids).unwrap())
}

#[tokio::test]
async fn test_stripe_scenario() {
    let coordinator = coordinator();
    let details = PaymentDetails::new("cust-1").with_email("c@example.com");

    let record = coordinator
        .run_transaction("Stripe", Amount::new(dec!(100.00)).unwrap(), &details)
        .await
        .unwrap();

    let result = record.result();
    assert!(result.success);
    assert_eq!(result.fee, dec!(2.30));

    let receipt = record.receipt().unwrap();
    assert_eq!(receipt.format, ReceiptFormat::StructuredMarkup);
    assert!(receipt.content.contains(&result.transaction_id));
    assert!(receipt.content.contains("100.00"));
}

#[tokio::test]
async fn test_unknown_provider_scenario() {
    let coordinator = coordinator();
    let details = PaymentDetails::new("cust-1");

    let err = coordinator
        .run_transaction(
            "unknown-provider",
            Amount::new(dec!(1.00)).unwrap(),
            &details,
        )
        .await
        .unwrap_err();

    assert!(matches!(err, PaymentError::UnknownProvider(name) if name == "unknown-provider"));
}

#[tokio::test]
async fn test_full_lifecycle_with_refund() {
    let coordinator = coordinator();
    let details = PaymentDetails::new("cust-2");

    let mut record = coordinator
        .run_transaction("crypto", Amount::new(dec!(250.00)).unwrap(), &details)
        .await
        .unwrap();
    assert_eq!(record.state(), TransactionState::ReceiptGenerated);

    let refund = record.refund().await.unwrap();
    assert!(refund.success);
    assert_eq!(refund.refunded_amount, dec!(250.00));
    assert_eq!(record.state(), TransactionState::Refunded);
}

#[tokio::test]
async fn test_every_family_renders_its_transaction_id() {
    let coordinator = coordinator();
    let details = PaymentDetails::new("cust-3");

    for provider in coordinator.registry().providers() {
        let record = coordinator
            .run_transaction(&provider, Amount::new(dec!(42.00)).unwrap(), &details)
            .await
            .unwrap();

        let receipt = record.receipt().unwrap();
        assert!(
            receipt.content.contains(&record.result().transaction_id),
            "{provider} receipt must embed the transaction id"
        );
        assert!(
            receipt.content.contains(record.provider()),
            "{provider} receipt must name the provider"
        );
    }
}

#[tokio::test]
async fn test_deterministic_ids_with_injected_generator() {
    let coordinator = coordinator();
    let details = PaymentDetails::new("cust-4");

    let record = coordinator
        .run_transaction("stripe", Amount::new(dec!(1.00)).unwrap(), &details)
        .await
        .unwrap();

    // Sequential generator: first id goes to the charge, second to the receipt.
    assert_eq!(record.result().transaction_id, "ch_00000001");
    assert_eq!(record.receipt().unwrap().receipt_id, "rcpt_00000002");
}
