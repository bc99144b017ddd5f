//! Core data models for Tally
//!
//! This module contains the data structures that represent the tracking
//! domain: users, transactions, budgets, monetary amounts, and periods.

pub mod budget;
pub mod money;
pub mod period;
pub mod transaction;
pub mod user;

pub use budget::Budget;
pub use money::Money;
pub use period::Period;
pub use transaction::{NewTransaction, Transaction, TransactionKind};
pub use user::User;
