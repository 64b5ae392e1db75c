use rust_decimal::Decimal;
use std::fmt;
use thiserror::Error;

/// The kind of entity an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Branch,
    Customer,
    Transaction,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Branch => f.write_str("branch"),
            EntityKind::Customer => f.write_str("customer"),
            EntityKind::Transaction => f.write_str("transaction"),
        }
    }
}

#[derive(Error, Debug)]
pub enum BankError {
    #[error("{kind} '{name}' already exists")]
    DuplicateName { kind: EntityKind, name: String },
    #[error("{kind} '{name}' not found")]
    NotFound { kind: EntityKind, name: String },
    #[error("invalid amount {0}: must be greater than 0.00 with at most two decimal places")]
    InvalidAmount(Decimal),
    #[error("{0} name must not be blank")]
    InvalidName(EntityKind),
    #[error("{0} list is empty")]
    EmptyCollection(EntityKind),
    #[error("Persistence error: {0}")]
    PersistenceIo(#[from] std::io::Error),
    #[error("missing field '{0}'")]
    MissingField(&'static str),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BankError {
    pub(crate) fn not_found(kind: EntityKind, name: &str) -> Self {
        Self::NotFound {
            kind,
            name: name.to_string(),
        }
    }

    pub(crate) fn duplicate(kind: EntityKind, name: &str) -> Self {
        Self::DuplicateName {
            kind,
            name: name.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BankError>;
