//! Transaction model
//!
//! Represents a single income or expense entry belonging to one user.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Whether a transaction adds to or subtracts from the user's funds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// Parse a kind from user input
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Some(Self::Income),
            "expense" => Some(Self::Expense),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored transaction row
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Transaction {
    /// Unique identifier
    pub id: i64,

    /// The user this transaction belongs to
    pub user_id: i64,

    /// Income or expense
    pub kind: TransactionKind,

    /// Transaction date
    pub date: NaiveDate,

    /// Free-form category label
    pub category: String,

    /// Non-negative amount
    #[sqlx(rename = "amount_cents")]
    pub amount: Money,

    /// Optional note
    pub note: Option<String>,
}

/// Input for creating a new transaction
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub kind: TransactionKind,
    pub date: NaiveDate,
    pub category: String,
    pub amount: Money,
    pub note: Option<String>,
}
