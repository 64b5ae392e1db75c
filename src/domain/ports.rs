use crate::error::Result;
use async_trait::async_trait;

/// Identifies one persisted list of values.
///
/// Keys carry the canonical names stored in the bank; mapping them onto a
/// concrete location is left to each `RecordStore` implementation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RecordKey {
    /// Customer names of a branch.
    Customers { branch: String },
    /// Formatted transaction amounts of one customer.
    Transactions { branch: String, customer: String },
}

impl RecordKey {
    pub fn customers(branch: &str) -> Self {
        Self::Customers {
            branch: branch.to_string(),
        }
    }

    pub fn transactions(branch: &str, customer: &str) -> Self {
        Self::Transactions {
            branch: branch.to_string(),
            customer: customer.to_string(),
        }
    }
}

/// A flat, line-oriented store for customer and transaction lists.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Replaces the record with `lines`.
    async fn write_lines(&self, key: &RecordKey, lines: Vec<String>) -> Result<()>;
    /// Returns the lines last written under `key`.
    async fn read_lines(&self, key: &RecordKey) -> Result<Vec<String>>;
    /// Deletes the record. Removing a branch's `Customers` record also drops
    /// the `Transactions` records of that branch. Missing records are ignored.
    async fn remove(&self, key: &RecordKey) -> Result<()>;
}

pub type RecordStoreBox = Box<dyn RecordStore>;
