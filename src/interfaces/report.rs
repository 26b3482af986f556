use crate::application::coordinator::{TransactionRecord, TransactionState};
use crate::domain::shipping::ShippingQuote;
use crate::error::Result;
use std::io::Write;

/// Writes transaction outcomes and shipping quotes as human-readable text.
pub struct ReportWriter<W: Write> {
    out: W,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn write_transaction(&mut self, record: &TransactionRecord) -> Result<()> {
        match record.state() {
            TransactionState::Failed => {
                writeln!(
                    self.out,
                    "[{}] {} FAILED: {}",
                    record.provider(),
                    record.result().transaction_id,
                    record.result().message
                )?;
            }
            _ => {
                if let Some(receipt) = record.receipt() {
                    writeln!(self.out, "{}", receipt.content)?;
                }
                if let Some(refund) = record.refund_result() {
                    writeln!(
                        self.out,
                        "[{}] refund {}: {}",
                        record.provider(),
                        refund.refund_id,
                        refund.message
                    )?;
                }
                writeln!(self.out)?;
            }
        }
        Ok(())
    }

    pub fn write_quote(&mut self, quote: &ShippingQuote) -> Result<()> {
        writeln!(
            self.out,
            "[{}] shipping cost: {} ({})",
            quote.strategy, quote.cost, quote.message
        )?;
        Ok(())
    }
}
