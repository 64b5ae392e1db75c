use super::amount::Amount;
use super::name;
use crate::error::{BankError, EntityKind, Result};
use rust_decimal::Decimal;
use serde::Serialize;

/// An account holder with an ordered transaction history.
///
/// A customer is always created with an initial transaction; further
/// transactions are appended and only the most recent one can be removed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Customer {
    name: String,
    transactions: Vec<Amount>,
}

impl Customer {
    pub fn new(name: &str, initial_amount: Decimal) -> Result<Self> {
        let name = name::validate(EntityKind::Customer, name)?;
        let initial = Amount::new(initial_amount)?;
        Ok(Self {
            name,
            transactions: vec![initial],
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Appends a transaction to the history.
    pub fn add_transaction(&mut self, amount: Decimal) -> Result<Amount> {
        let amount = Amount::new(amount)?;
        self.transactions.push(amount);
        Ok(amount)
    }

    /// Removes and returns the most recently added transaction.
    pub fn remove_last_transaction(&mut self) -> Result<Amount> {
        self.transactions
            .pop()
            .ok_or(BankError::EmptyCollection(EntityKind::Transaction))
    }

    /// Transactions, oldest first. Each call starts a fresh iteration.
    pub fn transactions(&self) -> impl Iterator<Item = Amount> + '_ {
        self.transactions.iter().copied()
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    pub fn balance(&self) -> Decimal {
        self.transactions().sum()
    }
}
