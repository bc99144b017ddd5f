//! Display formatting for terminal output
//!
//! Provides utilities for formatting data models for terminal display.

pub mod summary;
pub mod transaction;

pub use summary::{format_budget_list, format_monthly_summary};
pub use transaction::format_transaction_table;
