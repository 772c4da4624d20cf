//! Budget display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::models::Budget;

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Category")]
    category: String,
}

/// Format budgets as a table
pub fn format_budget_list(budgets: &[Budget], settings: &Settings) -> String {
    if budgets.is_empty() {
        return "No budgets found.\n\nRun 'paisa budget add' to create one.".to_string();
    }

    let rows: Vec<BudgetRow> = budgets
        .iter()
        .map(|b| BudgetRow {
            id: b.id.to_string(),
            name: b.name.clone(),
            amount: settings.format_amount(b.amount),
            category: b.category.clone(),
        })
        .collect();

    Table::new(rows).with(Style::sharp()).to_string()
}

/// Format a single budget's details
pub fn format_budget_details(budget: &Budget, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Budget: {}\n", budget.name));
    output.push_str(&format!("  ID:       {}\n", budget.id));
    output.push_str(&format!(
        "  Amount:   {}\n",
        settings.format_amount(budget.amount)
    ));
    output.push_str(&format!("  Category: {}\n", budget.category));
    output.push('\n');
    output.push_str(&format!(
        "  Created:  {}\n",
        budget.created_at.format("%Y-%m-%d %H:%M UTC")
    ));
    output.push_str(&format!(
        "  Modified: {}\n",
        budget.updated_at.format("%Y-%m-%d %H:%M UTC")
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BudgetId;

    #[test]
    fn test_format_empty_list() {
        let output = format_budget_list(&[], &Settings::default());
        assert!(output.contains("No budgets found"));
    }

    #[test]
    fn test_format_budget_list() {
        let budgets = vec![
            Budget::new(BudgetId::from_raw(1), "Food".into(), 5000.0, "Food".into()),
            Budget::new(
                BudgetId::from_raw(2),
                "Rent".into(),
                12000.0,
                "Housing".into(),
            ),
        ];

        let output = format_budget_list(&budgets, &Settings::default());
        assert!(output.contains("Food"));
        assert!(output.contains("Rent"));
        assert!(output.contains("Rs. 5000"));
        assert!(output.contains("bud-2"));
    }

    #[test]
    fn test_format_budget_details() {
        let budget = Budget::new(BudgetId::from_raw(1), "Food".into(), 5000.0, "Food".into());

        let output = format_budget_details(&budget, &Settings::default());
        assert!(output.contains("Budget: Food"));
        assert!(output.contains("bud-1"));
        assert!(output.contains("Rs. 5000"));
    }
}
