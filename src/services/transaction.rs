//! Transaction service
//!
//! Records income/expense entries and lists them by month. Input validation
//! (kind, date format, non-negative amount) happens at the calling layer;
//! here the storage constraints are the backstop.

use tracing::debug;

use crate::db::Database;
use crate::error::TallyResult;
use crate::models::{NewTransaction, Period, Transaction};

/// Service for transaction management
pub struct TransactionService<'a> {
    db: &'a Database,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Record a transaction for a user and return the stored row
    pub async fn add(&self, user_id: i64, input: NewTransaction) -> TallyResult<Transaction> {
        let done = sqlx::query(
            "INSERT INTO transactions (user_id, kind, date, category, amount_cents, note) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(user_id)
        .bind(input.kind)
        .bind(input.date)
        .bind(&input.category)
        .bind(input.amount)
        .bind(&input.note)
        .execute(self.db.pool())
        .await?;

        let id = done.last_insert_rowid();
        debug!(
            user_id,
            id,
            kind = %input.kind,
            category = %input.category,
            "recorded transaction"
        );

        Ok(Transaction {
            id,
            user_id,
            kind: input.kind,
            date: input.date,
            category: input.category,
            amount: input.amount,
            note: input.note,
        })
    }

    /// List a user's transactions for one month, oldest first
    ///
    /// The filter compares dates against the month's first and last calendar
    /// day. Same-day entries keep insertion order via the id tie-break.
    pub async fn list_for_period(
        &self,
        user_id: i64,
        period: &Period,
    ) -> TallyResult<Vec<Transaction>> {
        let transactions = sqlx::query_as::<_, Transaction>(
            "SELECT id, user_id, kind, date, category, amount_cents, note \
             FROM transactions \
             WHERE user_id = ? AND date >= ? AND date <= ? \
             ORDER BY date ASC, id ASC",
        )
        .bind(user_id)
        .bind(period.start_date())
        .bind(period.end_date())
        .fetch_all(self.db.pool())
        .await?;

        Ok(transactions)
    }
}
