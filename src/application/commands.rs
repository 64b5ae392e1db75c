use super::service::BankService;
use crate::domain::amount::format_gbp;
use crate::error::{BankError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::fmt;

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum CommandType {
    AddBranch,
    RemoveBranch,
    ListBranches,
    AddCustomer,
    RemoveCustomer,
    SearchCustomer,
    ListCustomers,
    AddTransaction,
    RemoveTransaction,
}

/// One request against the bank, as read from a command script.
///
/// Which of `branch`, `customer` and `amount` are required depends on the
/// command type.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct Command {
    pub command: CommandType,
    pub branch: Option<String>,
    pub customer: Option<String>,
    pub amount: Option<Decimal>,
}

impl Command {
    fn branch(&self) -> Result<&str> {
        self.branch.as_deref().ok_or(BankError::MissingField("branch"))
    }

    fn customer(&self) -> Result<&str> {
        self.customer
            .as_deref()
            .ok_or(BankError::MissingField("customer"))
    }

    fn amount(&self) -> Result<Decimal> {
        self.amount.ok_or(BankError::MissingField("amount"))
    }
}

/// What a successfully executed command has to show.
#[derive(Debug, PartialEq, Clone)]
pub enum Outcome {
    Done,
    Branches {
        bank: String,
        names: Vec<String>,
    },
    Customers {
        branch: String,
        names: Vec<String>,
    },
    Customer {
        name: String,
        transactions: Vec<String>,
        balance: String,
    },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Done => Ok(()),
            Outcome::Branches { bank, names } => {
                writeln!(f, "Branches at '{bank}':")?;
                names.iter().try_for_each(|name| writeln!(f, "{name}"))
            }
            Outcome::Customers { branch, names } => {
                writeln!(f, "Customers at '{branch}' branch:")?;
                names.iter().try_for_each(|name| writeln!(f, "{name}"))
            }
            Outcome::Customer {
                name,
                transactions,
                balance,
            } => {
                writeln!(f, "Name: {name}")?;
                writeln!(f, "Transactions:")?;
                transactions
                    .iter()
                    .try_for_each(|line| writeln!(f, "{line}"))?;
                writeln!(f, "Balance: {balance}")
            }
        }
    }
}

/// Runs a single command against the service.
pub async fn execute(service: &BankService, command: &Command) -> Result<Outcome> {
    match command.command {
        CommandType::AddBranch => {
            service.add_branch(command.branch()?).await?;
            Ok(Outcome::Done)
        }
        CommandType::RemoveBranch => {
            service.remove_branch(command.branch()?).await?;
            Ok(Outcome::Done)
        }
        CommandType::ListBranches => Ok(Outcome::Branches {
            bank: service.brand_name().await,
            names: service.branch_names().await,
        }),
        CommandType::AddCustomer => {
            service
                .add_customer(command.branch()?, command.customer()?, command.amount()?)
                .await?;
            Ok(Outcome::Done)
        }
        CommandType::RemoveCustomer => {
            service
                .remove_customer(command.branch()?, command.customer()?)
                .await?;
            Ok(Outcome::Done)
        }
        CommandType::SearchCustomer => {
            let branch = command.branch()?;
            let customer = service.find_customer(branch, command.customer()?).await?;
            let transactions = service.export_transactions(branch, customer.name()).await?;
            Ok(Outcome::Customer {
                name: customer.name().to_string(),
                transactions,
                balance: format_gbp(customer.balance()),
            })
        }
        CommandType::ListCustomers => {
            let (branch, names) = service.export_customers(command.branch()?).await?;
            Ok(Outcome::Customers { branch, names })
        }
        CommandType::AddTransaction => {
            service
                .add_transaction(command.branch()?, command.customer()?, command.amount()?)
                .await?;
            Ok(Outcome::Done)
        }
        CommandType::RemoveTransaction => {
            service
                .remove_transaction(command.branch()?, command.customer()?)
                .await?;
            Ok(Outcome::Done)
        }
    }
}
