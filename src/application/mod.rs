//! Application layer orchestrating the domain.
//!
//! `BankService` wraps a `Bank` behind a single lock and keeps the record
//! store in step with every mutation. `commands` maps script commands onto
//! service calls.

pub mod commands;
pub mod service;
