//! Add and show CLI commands

use chrono::NaiveDate;
use clap::Args;

use crate::config::settings::Settings;
use crate::db::Database;
use crate::display::format_transaction_table;
use crate::error::{TallyError, TallyResult};
use crate::models::{Money, NewTransaction, Period, TransactionKind};
use crate::services::{Session, TransactionService};

/// Arguments for the add command
#[derive(Args, Debug, Clone)]
pub struct AddArgs {
    /// Transaction kind: income or expense
    #[arg(short, long)]
    pub kind: String,

    /// Transaction date (YYYY-MM-DD, defaults to today)
    #[arg(short, long)]
    pub date: Option<String>,

    /// Category name (e.g., Food, Rent)
    #[arg(short, long)]
    pub category: String,

    /// Amount (e.g., "50" or "50.00")
    #[arg(short, long)]
    pub amount: String,

    /// Optional note
    #[arg(short, long)]
    pub note: Option<String>,
}

/// Handle the add command
pub async fn handle_add(db: &Database, session: &Session, args: AddArgs) -> TallyResult<()> {
    let kind = TransactionKind::parse(&args.kind).ok_or_else(|| {
        TallyError::Validation(format!(
            "Invalid transaction kind: '{}'. Valid kinds: income, expense",
            args.kind
        ))
    })?;

    let date = match args.date.as_deref() {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
            TallyError::Validation(format!("Invalid date: '{}'. Use YYYY-MM-DD", raw))
        })?,
        None => chrono::Local::now().date_naive(),
    };

    let amount = Money::parse(&args.amount).map_err(|e| TallyError::Validation(e.to_string()))?;
    if amount.is_negative() {
        return Err(TallyError::Validation(
            "Amount must not be negative".into(),
        ));
    }

    let category = args.category.trim().to_string();
    if category.is_empty() {
        return Err(TallyError::Validation("Category must not be empty".into()));
    }

    TransactionService::new(db)
        .add(
            session.user_id,
            NewTransaction {
                kind,
                date,
                category,
                amount,
                note: args.note,
            },
        )
        .await?;

    println!("Saved transaction.");
    Ok(())
}

/// Handle the show command
pub async fn handle_show(
    db: &Database,
    settings: &Settings,
    session: &Session,
    period: &str,
) -> TallyResult<()> {
    let period = Period::parse(period).map_err(|e| TallyError::Validation(e.to_string()))?;

    let transactions = TransactionService::new(db)
        .list_for_period(session.user_id, &period)
        .await?;

    println!("Transactions for {}", period);
    print!(
        "{}",
        format_transaction_table(&transactions, &settings.currency_symbol)
    );
    Ok(())
}
