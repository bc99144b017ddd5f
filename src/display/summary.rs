//! Summary and budget display formatting

use std::collections::BTreeMap;

use crate::models::Money;
use crate::services::MonthlySummary;

/// Format a monthly summary block
pub fn format_monthly_summary(summary: &MonthlySummary, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Income:  {:>12}\n",
        summary.income.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Expense: {:>12}\n",
        summary.expense.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Net:     {:>12}\n",
        summary.net.format_with_symbol(symbol)
    ));

    if !summary.by_category.is_empty() {
        output.push('\n');
        output.push_str("Spending by category:\n");
        for (category, total) in &summary.by_category {
            output.push_str(&format!(
                "  {:20} {:>12}\n",
                category,
                total.format_with_symbol(symbol)
            ));
        }
    }

    output
}

/// Format the category limits set for a month
pub fn format_budget_list(budgets: &BTreeMap<String, Money>, symbol: &str) -> String {
    if budgets.is_empty() {
        return "No budgets set.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!("{:20} {:>12}\n", "Category", "Limit"));
    output.push_str(&"-".repeat(33));
    output.push('\n');

    for (category, limit) in budgets {
        output.push_str(&format!(
            "{:20} {:>12}\n",
            category,
            limit.format_with_symbol(symbol)
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_summary() {
        let summary = MonthlySummary {
            income: Money::from_cents(100_000),
            expense: Money::from_cents(11000),
            net: Money::from_cents(89000),
            by_category: vec![("Food".to_string(), Money::from_cents(11000))],
        };

        let text = format_monthly_summary(&summary, "$");
        assert!(text.contains("Income:"));
        assert!(text.contains("$1000.00"));
        assert!(text.contains("$890.00"));
        assert!(text.contains("Spending by category:"));
        assert!(text.contains("Food"));
    }

    #[test]
    fn test_empty_summary_has_no_category_section() {
        let summary = MonthlySummary {
            income: Money::zero(),
            expense: Money::zero(),
            net: Money::zero(),
            by_category: Vec::new(),
        };

        let text = format_monthly_summary(&summary, "$");
        assert!(!text.contains("Spending by category:"));
    }

    #[test]
    fn test_format_budget_list() {
        let mut budgets = BTreeMap::new();
        budgets.insert("Food".to_string(), Money::from_cents(10000));
        budgets.insert("Rent".to_string(), Money::from_cents(90000));

        let text = format_budget_list(&budgets, "$");
        assert!(text.contains("Food"));
        assert!(text.contains("$100.00"));
        assert!(text.contains("Rent"));
    }

    #[test]
    fn test_empty_budget_list() {
        assert_eq!(format_budget_list(&BTreeMap::new(), "$"), "No budgets set.\n");
    }
}
