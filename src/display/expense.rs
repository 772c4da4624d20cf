//! Expense display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::models::Expense;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Date")]
    date: String,
}

/// Format expenses as a table
pub fn format_expense_list(expenses: &[Expense], settings: &Settings) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n\nRun 'paisa expense add' to record one.".to_string();
    }

    let rows: Vec<ExpenseRow> = expenses
        .iter()
        .map(|e| ExpenseRow {
            id: e.id.to_string(),
            name: e.name.clone(),
            amount: settings.format_amount(e.amount),
            category: e.category.clone(),
            date: e.date.format(&settings.date_format).to_string(),
        })
        .collect();

    Table::new(rows).with(Style::sharp()).to_string()
}

/// Format a single expense's details
pub fn format_expense_details(expense: &Expense, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense: {}\n", expense.name));
    output.push_str(&format!("  ID:       {}\n", expense.id));
    output.push_str(&format!(
        "  Amount:   {}\n",
        settings.format_amount(expense.amount)
    ));
    output.push_str(&format!("  Category: {}\n", expense.category));
    output.push_str(&format!(
        "  Date:     {}\n",
        expense.date.format(&settings.date_format)
    ));
    output.push('\n');
    output.push_str(&format!(
        "  Created:  {}\n",
        expense.created_at.format("%Y-%m-%d %H:%M UTC")
    ));
    output.push_str(&format!(
        "  Modified: {}\n",
        expense.updated_at.format("%Y-%m-%d %H:%M UTC")
    ));

    output
}
