use super::amount::Amount;
use super::customer::Customer;
use super::name::{self, names_match};
use crate::error::{BankError, EntityKind, Result};
use rust_decimal::Decimal;
use serde::Serialize;

/// A named group of customers.
///
/// Customers are kept in insertion order and addressed by name, ignoring
/// case. A branch owns its customers outright: removing a customer drops
/// its whole transaction history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Branch {
    name: String,
    customers: Vec<Customer>,
}

impl Branch {
    pub fn new(name: &str) -> Result<Self> {
        Ok(Self {
            name: name::validate(EntityKind::Branch, name)?,
            customers: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn position(&self, customer_name: &str) -> Option<usize> {
        self.customers
            .iter()
            .position(|c| names_match(c.name(), customer_name))
    }

    pub fn has_customer(&self, customer_name: &str) -> bool {
        self.position(customer_name).is_some()
    }

    /// Admits a new customer with an initial transaction.
    pub fn add_customer(
        &mut self,
        customer_name: &str,
        initial_amount: Decimal,
    ) -> Result<&Customer> {
        if self.has_customer(customer_name) {
            return Err(BankError::duplicate(EntityKind::Customer, customer_name));
        }
        let customer = Customer::new(customer_name, initial_amount)?;
        self.customers.push(customer);
        Ok(&self.customers[self.customers.len() - 1])
    }

    pub fn remove_customer(&mut self, customer_name: &str) -> Result<Customer> {
        if self.customers.is_empty() {
            return Err(BankError::EmptyCollection(EntityKind::Customer));
        }
        let index = self
            .position(customer_name)
            .ok_or_else(|| BankError::not_found(EntityKind::Customer, customer_name))?;
        Ok(self.customers.remove(index))
    }

    pub fn find_customer(&self, customer_name: &str) -> Result<&Customer> {
        self.customers
            .iter()
            .find(|c| names_match(c.name(), customer_name))
            .ok_or_else(|| BankError::not_found(EntityKind::Customer, customer_name))
    }

    fn find_customer_mut(&mut self, customer_name: &str) -> Result<&mut Customer> {
        self.customers
            .iter_mut()
            .find(|c| names_match(c.name(), customer_name))
            .ok_or_else(|| BankError::not_found(EntityKind::Customer, customer_name))
    }

    /// Customer names in insertion order.
    pub fn customer_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.customers.iter().map(Customer::name)
    }

    pub fn customers(&self) -> impl Iterator<Item = &Customer> + '_ {
        self.customers.iter()
    }

    pub fn customer_count(&self) -> usize {
        self.customers.len()
    }

    pub fn add_transaction(&mut self, customer_name: &str, amount: Decimal) -> Result<Amount> {
        self.find_customer_mut(customer_name)?.add_transaction(amount)
    }

    pub fn remove_transaction(&mut self, customer_name: &str) -> Result<Amount> {
        self.find_customer_mut(customer_name)?
            .remove_last_transaction()
    }

    pub fn transactions(&self, customer_name: &str) -> Result<impl Iterator<Item = Amount> + '_> {
        Ok(self.find_customer(customer_name)?.transactions())
    }
}
