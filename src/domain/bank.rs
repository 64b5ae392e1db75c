use super::amount::Amount;
use super::branch::Branch;
use super::customer::Customer;
use super::name::names_match;
use crate::error::{BankError, EntityKind, Result};
use rust_decimal::Decimal;
use serde::Serialize;

/// The root of the ownership tree: a brand owning a set of branches.
///
/// Every customer and transaction operation is addressed by an explicit
/// branch name and customer name. Lookups ignore case; names are kept as
/// they were first given.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bank {
    brand_name: String,
    branches: Vec<Branch>,
}

impl Bank {
    pub fn new(brand_name: impl Into<String>) -> Self {
        Self {
            brand_name: brand_name.into(),
            branches: Vec::new(),
        }
    }

    pub fn brand_name(&self) -> &str {
        &self.brand_name
    }

    fn position(&self, branch_name: &str) -> Option<usize> {
        self.branches
            .iter()
            .position(|b| names_match(b.name(), branch_name))
    }

    pub fn has_branch(&self, branch_name: &str) -> bool {
        self.position(branch_name).is_some()
    }

    pub fn add_branch(&mut self, branch_name: &str) -> Result<&Branch> {
        if self.has_branch(branch_name) {
            return Err(BankError::duplicate(EntityKind::Branch, branch_name));
        }
        self.branches.push(Branch::new(branch_name)?);
        Ok(&self.branches[self.branches.len() - 1])
    }

    /// Removes a branch together with all of its customers.
    pub fn remove_branch(&mut self, branch_name: &str) -> Result<Branch> {
        if self.branches.is_empty() {
            return Err(BankError::EmptyCollection(EntityKind::Branch));
        }
        let index = self
            .position(branch_name)
            .ok_or_else(|| BankError::not_found(EntityKind::Branch, branch_name))?;
        Ok(self.branches.remove(index))
    }

    pub fn find_branch(&self, branch_name: &str) -> Result<&Branch> {
        self.branches
            .iter()
            .find(|b| names_match(b.name(), branch_name))
            .ok_or_else(|| BankError::not_found(EntityKind::Branch, branch_name))
    }

    fn find_branch_mut(&mut self, branch_name: &str) -> Result<&mut Branch> {
        self.branches
            .iter_mut()
            .find(|b| names_match(b.name(), branch_name))
            .ok_or_else(|| BankError::not_found(EntityKind::Branch, branch_name))
    }

    /// Branch names in insertion order.
    pub fn branch_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.branches.iter().map(Branch::name)
    }

    pub fn branches(&self) -> impl Iterator<Item = &Branch> + '_ {
        self.branches.iter()
    }

    pub fn add_customer(
        &mut self,
        branch_name: &str,
        customer_name: &str,
        initial_amount: Decimal,
    ) -> Result<&Customer> {
        self.find_branch_mut(branch_name)?
            .add_customer(customer_name, initial_amount)
    }

    pub fn remove_customer(&mut self, branch_name: &str, customer_name: &str) -> Result<Customer> {
        self.find_branch_mut(branch_name)?
            .remove_customer(customer_name)
    }

    pub fn find_customer(&self, branch_name: &str, customer_name: &str) -> Result<&Customer> {
        self.find_branch(branch_name)?.find_customer(customer_name)
    }

    pub fn customer_names(&self, branch_name: &str) -> Result<impl Iterator<Item = &str> + '_> {
        Ok(self.find_branch(branch_name)?.customer_names())
    }

    pub fn add_transaction(
        &mut self,
        branch_name: &str,
        customer_name: &str,
        amount: Decimal,
    ) -> Result<Amount> {
        self.find_branch_mut(branch_name)?
            .add_transaction(customer_name, amount)
    }

    /// Removes the most recent transaction of a customer.
    pub fn remove_transaction(&mut self, branch_name: &str, customer_name: &str) -> Result<Amount> {
        self.find_branch_mut(branch_name)?
            .remove_transaction(customer_name)
    }

    pub fn transactions(
        &self,
        branch_name: &str,
        customer_name: &str,
    ) -> Result<impl Iterator<Item = Amount> + '_> {
        self.find_branch(branch_name)?.transactions(customer_name)
    }
}
