//! Transaction display formatting

use crate::models::Transaction;

/// Format a single transaction as a table row
pub fn format_transaction_row(txn: &Transaction, symbol: &str) -> String {
    format!(
        "{} {:7} {:20} {:>12} {}",
        txn.date.format("%Y-%m-%d"),
        txn.kind.to_string(),
        truncate(&txn.category, 20),
        txn.amount.format_with_symbol(symbol),
        txn.note.as_deref().unwrap_or("")
    )
}

/// Format a list of transactions as a table
pub fn format_transaction_table(transactions: &[Transaction], symbol: &str) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:10} {:7} {:20} {:>12} {}\n",
        "Date", "Kind", "Category", "Amount", "Note"
    ));
    output.push_str(&"-".repeat(58));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn, symbol));
        output.push('\n');
    }

    output
}

/// Truncate a string to a maximum length
fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        format!("{}...", &s[..max_len - 3])
    }
}
