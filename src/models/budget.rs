//! Budget model
//!
//! A monthly spending limit for one category, unique per
//! (user, period, category).

use serde::{Deserialize, Serialize};

use super::money::Money;

/// A stored budget row
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Budget {
    /// Unique identifier
    pub id: i64,

    /// The user this budget belongs to
    pub user_id: i64,

    /// Year-month period in `YYYY-MM` form
    pub period: String,

    /// Category label the limit applies to
    pub category: String,

    /// Non-negative spending limit
    #[sqlx(rename = "limit_cents")]
    pub limit: Money,
}
