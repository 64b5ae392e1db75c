use crate::domain::amount::{Amount, format_gbp};
use crate::domain::bank::Bank;
use crate::domain::customer::Customer;
use crate::domain::ports::{RecordKey, RecordStore, RecordStoreBox};
use crate::error::Result;
use rust_decimal::Decimal;
use tokio::sync::RwLock;

/// Shared access to a `Bank` with its records kept in a `RecordStore`.
///
/// All mutations go through a single write lock, so the case-insensitive
/// duplicate check and the insert that follows it are atomic with respect
/// to concurrent callers. Records are written while the lock is held, which
/// keeps the store in mutation order.
///
/// A persistence failure is returned to the caller but does not roll back
/// the in-memory mutation.
pub struct BankService {
    bank: RwLock<Bank>,
    store: RecordStoreBox,
}

impl BankService {
    /// Creates a new `BankService`.
    ///
    /// # Arguments
    ///
    /// * `bank` - The bank to serve, usually empty.
    /// * `store` - Where customer and transaction lists are written.
    pub fn new(bank: Bank, store: RecordStoreBox) -> Self {
        Self {
            bank: RwLock::new(bank),
            store,
        }
    }

    pub async fn brand_name(&self) -> String {
        self.bank.read().await.brand_name().to_string()
    }

    /// Adds a branch and returns its name.
    pub async fn add_branch(&self, branch: &str) -> Result<String> {
        let mut bank = self.bank.write().await;
        let name = bank.add_branch(branch)?.name().to_string();
        log::debug!("added branch '{name}'");
        Ok(name)
    }

    /// Removes a branch, its customers and all of their records.
    pub async fn remove_branch(&self, branch: &str) -> Result<String> {
        let mut bank = self.bank.write().await;
        let removed = bank.remove_branch(branch)?;
        log::debug!(
            "removed branch '{}' with {} customer(s)",
            removed.name(),
            removed.customer_count()
        );
        self.forget(&RecordKey::customers(removed.name())).await?;
        Ok(removed.name().to_string())
    }

    pub async fn branch_names(&self) -> Vec<String> {
        let bank = self.bank.read().await;
        bank.branch_names().map(String::from).collect()
    }

    /// Adds a customer with an initial transaction and returns its name.
    pub async fn add_customer(
        &self,
        branch: &str,
        customer: &str,
        amount: Decimal,
    ) -> Result<String> {
        let mut bank = self.bank.write().await;
        let customer = bank.add_customer(branch, customer, amount)?.name().to_string();
        let branch = bank.find_branch(branch)?.name().to_string();
        log::debug!("added customer '{customer}' to branch '{branch}'");

        self.save_customers(&bank, &branch).await?;
        self.save_transactions(&bank, &branch, &customer).await?;
        Ok(customer)
    }

    pub async fn remove_customer(&self, branch: &str, customer: &str) -> Result<String> {
        let mut bank = self.bank.write().await;
        let removed = bank.remove_customer(branch, customer)?;
        let branch = bank.find_branch(branch)?.name().to_string();
        log::debug!("removed customer '{}' from branch '{branch}'", removed.name());

        self.save_customers(&bank, &branch).await?;
        self.forget(&RecordKey::transactions(&branch, removed.name()))
            .await?;
        Ok(removed.name().to_string())
    }

    pub async fn find_customer(&self, branch: &str, customer: &str) -> Result<Customer> {
        let bank = self.bank.read().await;
        bank.find_customer(branch, customer).cloned()
    }

    pub async fn customer_names(&self, branch: &str) -> Result<Vec<String>> {
        let bank = self.bank.read().await;
        Ok(bank.customer_names(branch)?.map(String::from).collect())
    }

    pub async fn add_transaction(
        &self,
        branch: &str,
        customer: &str,
        amount: Decimal,
    ) -> Result<Amount> {
        let mut bank = self.bank.write().await;
        let added = bank.add_transaction(branch, customer, amount)?;
        let (branch, customer) = canonical_names(&bank, branch, customer)?;
        log::debug!("added transaction {added} for '{customer}' at '{branch}'");

        self.save_transactions(&bank, &branch, &customer).await?;
        Ok(added)
    }

    /// Removes the most recent transaction of a customer.
    pub async fn remove_transaction(&self, branch: &str, customer: &str) -> Result<Amount> {
        let mut bank = self.bank.write().await;
        let removed = bank.remove_transaction(branch, customer)?;
        let (branch, customer) = canonical_names(&bank, branch, customer)?;
        log::debug!("removed transaction {removed} for '{customer}' at '{branch}'");

        self.save_transactions(&bank, &branch, &customer).await?;
        Ok(removed)
    }

    pub async fn transactions(&self, branch: &str, customer: &str) -> Result<Vec<Amount>> {
        let bank = self.bank.read().await;
        Ok(bank.transactions(branch, customer)?.collect())
    }

    /// Writes the customer list of a branch and returns the branch name
    /// together with the list as read back.
    pub async fn export_customers(&self, branch: &str) -> Result<(String, Vec<String>)> {
        let bank = self.bank.read().await;
        let branch = bank.find_branch(branch)?.name().to_string();
        let key = self.save_customers(&bank, &branch).await?;
        let names = self.store.read_lines(&key).await?;
        Ok((branch, names))
    }

    /// Writes the transaction list of a customer and returns it as read back.
    pub async fn export_transactions(&self, branch: &str, customer: &str) -> Result<Vec<String>> {
        let bank = self.bank.read().await;
        let (branch, customer) = canonical_names(&bank, branch, customer)?;
        let key = self.save_transactions(&bank, &branch, &customer).await?;
        self.store.read_lines(&key).await
    }

    /// A copy of the current state of the bank.
    pub async fn snapshot(&self) -> Bank {
        self.bank.read().await.clone()
    }

    async fn save_customers(&self, bank: &Bank, branch: &str) -> Result<RecordKey> {
        let key = RecordKey::customers(branch);
        let lines = bank.customer_names(branch)?.map(String::from).collect();
        self.write(&key, lines).await?;
        Ok(key)
    }

    async fn save_transactions(
        &self,
        bank: &Bank,
        branch: &str,
        customer: &str,
    ) -> Result<RecordKey> {
        let key = RecordKey::transactions(branch, customer);
        let lines = bank.transactions(branch, customer)?.map(format_gbp).collect();
        self.write(&key, lines).await?;
        Ok(key)
    }

    async fn write(&self, key: &RecordKey, lines: Vec<String>) -> Result<()> {
        self.store.write_lines(key, lines).await.inspect_err(|e| {
            log::warn!("failed to write {key:?}: {e}");
        })
    }

    async fn forget(&self, key: &RecordKey) -> Result<()> {
        self.store.remove(key).await.inspect_err(|e| {
            log::warn!("failed to remove {key:?}: {e}");
        })
    }
}

fn canonical_names(bank: &Bank, branch: &str, customer: &str) -> Result<(String, String)> {
    let found = bank.find_branch(branch)?;
    let customer = found.find_customer(customer)?.name().to_string();
    Ok((found.name().to_string(), customer))
}
