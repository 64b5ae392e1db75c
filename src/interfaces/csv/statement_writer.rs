use crate::domain::amount::Amount;
use crate::domain::bank::Bank;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct StatementRow<'a> {
    branch: &'a str,
    customer: &'a str,
    transaction: usize,
    amount: Amount,
}

/// Writes every transaction of a bank as CSV rows of
/// `branch,customer,transaction,amount`, where `transaction` is the
/// 1-based position in the customer's history.
pub struct StatementWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> StatementWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_statement(&mut self, bank: &Bank) -> Result<()> {
        let mut wrote_any = false;
        for branch in bank.branches() {
            for customer in branch.customers() {
                for (index, amount) in customer.transactions().enumerate() {
                    self.writer.serialize(StatementRow {
                        branch: branch.name(),
                        customer: customer.name(),
                        transaction: index + 1,
                        amount,
                    })?;
                    wrote_any = true;
                }
            }
        }
        if !wrote_any {
            self.writer
                .write_record(["branch", "customer", "transaction", "amount"])?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
