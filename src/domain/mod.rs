pub mod amount;
pub mod bank;
pub mod branch;
pub mod customer;
pub mod name;
pub mod ports;
