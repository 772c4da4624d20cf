//! Expense CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display;
use crate::error::PaisaResult;
use crate::forms::ExpenseForm;
use crate::models::ExpenseId;
use crate::services::{CategoryService, ExpenseService};
use crate::store::RecordStore;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Expense name
        name: String,
        /// Amount (e.g., "300" or "300.50")
        amount: String,
        /// Category name (created if it doesn't exist)
        category: String,
        /// Date (YYYY-MM-DD)
        date: String,
    },

    /// List all expenses
    List,

    /// Show an expense's details
    Show {
        /// Expense ID (e.g., "exp-1" or "1")
        id: ExpenseId,
    },

    /// Edit an existing expense
    Edit {
        /// Expense ID
        id: ExpenseId,
        /// New name
        #[arg(long)]
        name: String,
        /// New amount
        #[arg(long)]
        amount: String,
        /// New category
        #[arg(long)]
        category: String,
        /// New date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
    },

    /// Delete an expense
    Delete {
        /// Expense ID
        id: ExpenseId,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    store: &RecordStore,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> PaisaResult<()> {
    let service = ExpenseService::new(store);

    match cmd {
        ExpenseCommands::Add {
            name,
            amount,
            category,
            date,
        } => {
            let category = CategoryService::new(store).resolve_or_create(&category)?;

            let form = ExpenseForm {
                name,
                amount,
                category: category.name,
                date,
            };
            let expense = service.create(&form)?;

            println!("Recorded expense {}:", expense.id);
            println!("{}", display::format_expense_details(&expense, settings));
        }

        ExpenseCommands::List => {
            let expenses = service.list()?;
            println!("{}", display::format_expense_list(&expenses, settings));
        }

        ExpenseCommands::Show { id } => {
            let expense = service
                .get(id)?
                .ok_or_else(|| crate::error::PaisaError::expense_not_found(id.to_string()))?;
            println!("{}", display::format_expense_details(&expense, settings));
        }

        ExpenseCommands::Edit {
            id,
            name,
            amount,
            category,
            date,
        } => {
            let category = CategoryService::new(store).resolve_or_create(&category)?;

            let form = ExpenseForm {
                name,
                amount,
                category: category.name,
                date,
            };
            let expense = service.update(id, &form)?;

            println!("Updated expense {}:", expense.id);
            println!("{}", display::format_expense_details(&expense, settings));
        }

        ExpenseCommands::Delete { id } => {
            service.delete(id)?;
            println!("Deleted expense {}", id);
        }
    }

    Ok(())
}
