//! Budget, summary, and alert CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::db::Database;
use crate::display::{format_budget_list, format_monthly_summary};
use crate::error::{TallyError, TallyResult};
use crate::models::{Money, Period};
use crate::services::{BudgetService, Session};

/// Budget subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum BudgetCommands {
    /// Set (or replace) a category limit for a month
    Set {
        /// Month the limit applies to (YYYY-MM)
        period: String,
        /// Category name
        category: String,
        /// Limit amount (e.g., "200" or "200.00")
        limit: String,
    },

    /// List category limits for a month
    List {
        /// Month to list (YYYY-MM)
        period: String,
    },
}

/// Handle a budget command
pub async fn handle_budget_command(
    db: &Database,
    settings: &Settings,
    session: &Session,
    cmd: BudgetCommands,
) -> TallyResult<()> {
    let service = BudgetService::new(db);

    match cmd {
        BudgetCommands::Set {
            period,
            category,
            limit,
        } => {
            let period =
                Period::parse(&period).map_err(|e| TallyError::Validation(e.to_string()))?;

            let limit =
                Money::parse(&limit).map_err(|e| TallyError::Validation(e.to_string()))?;
            if limit.is_negative() {
                return Err(TallyError::Validation("Limit must not be negative".into()));
            }

            let category = category.trim().to_string();
            if category.is_empty() {
                return Err(TallyError::Validation("Category must not be empty".into()));
            }

            service
                .set_budget(session.user_id, &period, &category, limit)
                .await?;

            println!(
                "Budget for {} in {} set to {}.",
                category,
                period,
                limit.format_with_symbol(&settings.currency_symbol)
            );
        }

        BudgetCommands::List { period } => {
            let period =
                Period::parse(&period).map_err(|e| TallyError::Validation(e.to_string()))?;

            let budgets = service.get_budgets(session.user_id, &period).await?;

            println!("Budgets for {}", period);
            print!(
                "{}",
                format_budget_list(&budgets, &settings.currency_symbol)
            );
        }
    }

    Ok(())
}

/// Handle the summary command
pub async fn handle_summary(
    db: &Database,
    settings: &Settings,
    session: &Session,
    period: &str,
) -> TallyResult<()> {
    let period = Period::parse(period).map_err(|e| TallyError::Validation(e.to_string()))?;

    let summary = BudgetService::new(db)
        .monthly_summary(session.user_id, &period)
        .await?;

    println!("Summary for {}", period);
    print!(
        "{}",
        format_monthly_summary(&summary, &settings.currency_symbol)
    );
    Ok(())
}

/// Handle the alerts command
pub async fn handle_alerts(
    db: &Database,
    settings: &Settings,
    session: &Session,
    period: &str,
    threshold: Option<f64>,
) -> TallyResult<()> {
    let period = Period::parse(period).map_err(|e| TallyError::Validation(e.to_string()))?;
    let threshold = threshold.unwrap_or(settings.alert_threshold);

    if !(0.0..=1.0).contains(&threshold) {
        return Err(TallyError::Validation(
            "Threshold must be between 0.0 and 1.0".into(),
        ));
    }

    let alerts = BudgetService::new(db)
        .budget_alerts(session.user_id, &period, threshold)
        .await?;

    if alerts.is_empty() {
        println!("No alerts for {}. Spending is within budget.", period);
    } else {
        for alert in alerts {
            println!("{}", alert);
        }
    }

    Ok(())
}
