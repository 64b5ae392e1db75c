use crate::domain::ports::{RecordKey, RecordStore};
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::io;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory record store.
///
/// Uses `Arc<RwLock<HashMap<RecordKey, Vec<String>>>>` to allow shared
/// concurrent access. Used when no data directory is configured, and in tests.
#[derive(Default, Clone)]
pub struct InMemoryRecordStore {
    records: Arc<RwLock<HashMap<RecordKey, Vec<String>>>>,
}

impl InMemoryRecordStore {
    /// Creates a new, empty in-memory record store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn write_lines(&self, key: &RecordKey, lines: Vec<String>) -> Result<()> {
        let mut records = self.records.write().await;
        records.insert(key.clone(), lines);
        Ok(())
    }

    async fn read_lines(&self, key: &RecordKey) -> Result<Vec<String>> {
        let records = self.records.read().await;
        records.get(key).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("no record for {key:?}")).into()
        })
    }

    async fn remove(&self, key: &RecordKey) -> Result<()> {
        let mut records = self.records.write().await;
        records.remove(key);
        if let RecordKey::Customers { branch } = key {
            records.retain(|k, _| {
                !matches!(k, RecordKey::Transactions { branch: b, .. } if b == branch)
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BankError;

    fn lines(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[tokio::test]
    async fn test_write_then_read_back() {
        let store = InMemoryRecordStore::new();
        let key = RecordKey::customers("Central");

        store.write_lines(&key, lines(&["Alice", "Bob"])).await.unwrap();
        assert_eq!(store.read_lines(&key).await.unwrap(), lines(&["Alice", "Bob"]));

        store.write_lines(&key, lines(&["Bob"])).await.unwrap();
        assert_eq!(store.read_lines(&key).await.unwrap(), lines(&["Bob"]));
    }

    #[tokio::test]
    async fn test_read_missing_record() {
        let store = InMemoryRecordStore::new();
        let result = store.read_lines(&RecordKey::customers("Nowhere")).await;
        assert!(matches!(result, Err(BankError::PersistenceIo(_))));
    }

    #[tokio::test]
    async fn test_remove_branch_cascades_to_transactions() {
        let store = InMemoryRecordStore::new();
        let customers = RecordKey::customers("North");
        let alice = RecordKey::transactions("North", "Alice");
        let other = RecordKey::transactions("South", "Alice");

        store.write_lines(&customers, lines(&["Alice"])).await.unwrap();
        store.write_lines(&alice, lines(&["£1.00"])).await.unwrap();
        store.write_lines(&other, lines(&["£2.00"])).await.unwrap();

        store.remove(&customers).await.unwrap();

        assert!(store.read_lines(&customers).await.is_err());
        assert!(store.read_lines(&alice).await.is_err());
        assert_eq!(store.read_lines(&other).await.unwrap(), lines(&["£2.00"]));

        // Removing again is not an error.
        store.remove(&customers).await.unwrap();
    }
}
