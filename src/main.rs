use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use provider_rail::application::coordinator::{TransactionCoordinator, TransactionState};
use provider_rail::domain::payment::{Amount, PaymentDetails};
use provider_rail::infrastructure::id::UuidIdGenerator;
use provider_rail::infrastructure::providers;
use provider_rail::infrastructure::shipping::strategy_for;
use provider_rail::interfaces::csv::payment_reader::PaymentReader;
use provider_rail::interfaces::report::ReportWriter;
use rust_decimal::Decimal;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Process a CSV batch of payments through the builtin provider families
    Process {
        /// Input payments CSV file (provider, customer, amount, refund)
        input: PathBuf,

        /// Refund every receipted payment, regardless of the CSV refund column
        #[arg(long)]
        refund: bool,
    },
    /// Quote a shipping cost with the named strategy
    Quote {
        /// Strategy name: flat, weight, same-day or carrier
        strategy: String,
        /// Parcel weight in weight units
        weight: Decimal,
        /// Order value, used by value-dependent strategies
        order_value: Decimal,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Process { input, refund } => process_batch(input, refund).await,
        Command::Quote {
            strategy,
            weight,
            order_value,
        } => quote_shipping(&strategy, weight, order_value).await,
    }
}

async fn process_batch(input: PathBuf, refund_all: bool) -> Result<()> {
    let registry =
        providers::builtin_registry(Arc::new(UuidIdGenerator::new())).into_diagnostic()?;
    let coordinator = TransactionCoordinator::new(registry);

    let file = File::open(input).into_diagnostic()?;
    let reader = PaymentReader::new(file);

    let stdout = io::stdout();
    let mut writer = ReportWriter::new(stdout.lock());

    for request in reader.requests() {
        let request = match request {
            Ok(request) => request,
            Err(e) => {
                eprintln!("Error reading payment request: {e}");
                continue;
            }
        };

        let outcome = async {
            let amount = Amount::new(request.amount)?;
            let details = PaymentDetails::new(&request.customer);
            let mut record = coordinator
                .run_transaction(&request.provider, amount, &details)
                .await?;

            if (refund_all || request.refund)
                && record.state() == TransactionState::ReceiptGenerated
            {
                record.refund().await?;
            }
            Ok::<_, provider_rail::error::PaymentError>(record)
        }
        .await;

        match outcome {
            Ok(record) => writer.write_transaction(&record).into_diagnostic()?,
            Err(e) => eprintln!("Error processing payment: {e}"),
        }
    }

    Ok(())
}

async fn quote_shipping(strategy: &str, weight: Decimal, order_value: Decimal) -> Result<()> {
    let strategy = strategy_for(strategy).into_diagnostic()?;
    let quote = strategy.quote(weight, order_value).await.into_diagnostic()?;

    let stdout = io::stdout();
    let mut writer = ReportWriter::new(stdout.lock());
    writer.write_quote(&quote).into_diagnostic()?;
    Ok(())
}
