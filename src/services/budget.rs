//! Budget service
//!
//! Monthly budget limits, aggregation, and threshold-based alerting. All
//! sums are computed by the storage engine; this layer shapes the results
//! and applies the alert rules.

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use crate::db::Database;
use crate::error::TallyResult;
use crate::models::{Budget, Money, Period};

/// Aggregates for one user's month
#[derive(Debug, Clone)]
pub struct MonthlySummary {
    pub income: Money,
    pub expense: Money,
    pub net: Money,
    /// Expense totals grouped by category, largest first; equal totals are
    /// ordered by category name
    pub by_category: Vec<(String, Money)>,
}

/// Service for budget management and monthly reporting
pub struct BudgetService<'a> {
    db: &'a Database,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Set (or replace) the limit for one category in one month
    ///
    /// Upsert keyed on the (user, period, category) uniqueness constraint;
    /// the previous limit is overwritten, not kept as history.
    pub async fn set_budget(
        &self,
        user_id: i64,
        period: &Period,
        category: &str,
        limit: Money,
    ) -> TallyResult<()> {
        sqlx::query(
            "INSERT INTO budgets (user_id, period, category, limit_cents) \
             VALUES (?, ?, ?, ?) \
             ON CONFLICT (user_id, period, category) \
             DO UPDATE SET limit_cents = excluded.limit_cents",
        )
        .bind(user_id)
        .bind(period.to_string())
        .bind(category)
        .bind(limit)
        .execute(self.db.pool())
        .await?;

        debug!(user_id, %period, category, limit = %limit, "set budget");
        Ok(())
    }

    /// Get all category limits for one month, keyed by category
    pub async fn get_budgets(
        &self,
        user_id: i64,
        period: &Period,
    ) -> TallyResult<BTreeMap<String, Money>> {
        let rows = sqlx::query_as::<_, Budget>(
            "SELECT id, user_id, period, category, limit_cents FROM budgets \
             WHERE user_id = ? AND period = ?",
        )
        .bind(user_id)
        .bind(period.to_string())
        .fetch_all(self.db.pool())
        .await?;

        Ok(rows.into_iter().map(|b| (b.category, b.limit)).collect())
    }

    /// Compute income, expense, net, and the per-category expense breakdown
    /// for one month
    ///
    /// A month with no transactions yields zeros and an empty breakdown.
    pub async fn monthly_summary(
        &self,
        user_id: i64,
        period: &Period,
    ) -> TallyResult<MonthlySummary> {
        let start = period.start_date();
        let end = period.end_date();

        let income: i64 = sqlx::query_scalar(
            "SELECT COALESCE(SUM(amount_cents), 0) FROM transactions \
             WHERE user_id = ? AND date >= ? AND date <= ? AND kind = 'income'",
        )
        .bind(user_id)
        .bind(start)
        .bind(end)
        .fetch_one(self.db.pool())
        .await?;

        let expense: i64 = sqlx::query_scalar(
            "SELECT COALESCE(SUM(amount_cents), 0) FROM transactions \
             WHERE user_id = ? AND date >= ? AND date <= ? AND kind = 'expense'",
        )
        .bind(user_id)
        .bind(start)
        .bind(end)
        .fetch_one(self.db.pool())
        .await?;

        let by_category = sqlx::query_as::<_, (String, i64)>(
            "SELECT category, COALESCE(SUM(amount_cents), 0) AS total FROM transactions \
             WHERE user_id = ? AND date >= ? AND date <= ? AND kind = 'expense' \
             GROUP BY category \
             ORDER BY total DESC, category ASC",
        )
        .bind(user_id)
        .bind(start)
        .bind(end)
        .fetch_all(self.db.pool())
        .await?;

        let income = Money::from_cents(income);
        let expense = Money::from_cents(expense);

        Ok(MonthlySummary {
            income,
            expense,
            net: income - expense,
            by_category: by_category
                .into_iter()
                .map(|(category, total)| (category, Money::from_cents(total)))
                .collect(),
        })
    }

    /// Compute overspend alerts for one month
    ///
    /// For each budgeted category with a positive limit, compares that
    /// category's expense total against the limit. At or past the limit the
    /// category is OVER BUDGET; at or past `threshold` (a spend/limit ratio,
    /// typically 0.8) it gets a WARNING. Categories without a budget row
    /// never alert, and limits of zero are treated as unbounded and skipped.
    /// Messages come back in category order.
    pub async fn budget_alerts(
        &self,
        user_id: i64,
        period: &Period,
        threshold: f64,
    ) -> TallyResult<Vec<String>> {
        let budgets = self.get_budgets(user_id, period).await?;
        if budgets.is_empty() {
            return Ok(Vec::new());
        }

        let summary = self.monthly_summary(user_id, period).await?;
        let spent_by_category: HashMap<&str, Money> = summary
            .by_category
            .iter()
            .map(|(category, total)| (category.as_str(), *total))
            .collect();

        let mut alerts = Vec::new();
        for (category, limit) in &budgets {
            if limit.cents() <= 0 {
                continue;
            }

            let spent = spent_by_category
                .get(category.as_str())
                .copied()
                .unwrap_or_else(Money::zero);
            let ratio = spent.cents() as f64 / limit.cents() as f64;

            if ratio >= 1.0 {
                alerts.push(format!(
                    "OVER BUDGET: {} spent {} / limit {}",
                    category,
                    spent.format_plain(),
                    limit.format_plain()
                ));
            } else if ratio >= threshold {
                alerts.push(format!(
                    "WARNING: {} spent {} / limit {} ({:.0}%)",
                    category,
                    spent.format_plain(),
                    limit.format_plain(),
                    ratio * 100.0
                ));
            }
        }

        debug!(user_id, %period, count = alerts.len(), "computed alerts");
        Ok(alerts)
    }
}
