//! Budget CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display;
use crate::error::PaisaResult;
use crate::forms::BudgetForm;
use crate::models::BudgetId;
use crate::services::{BudgetService, CategoryService};
use crate::store::RecordStore;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Create a new budget
    Add {
        /// Budget name
        name: String,
        /// Amount (e.g., "5000" or "5000.50")
        amount: String,
        /// Category name (created if it doesn't exist)
        category: String,
    },

    /// List all budgets
    List,

    /// Show a budget's details
    Show {
        /// Budget ID (e.g., "bud-1" or "1")
        id: BudgetId,
    },

    /// Edit an existing budget
    Edit {
        /// Budget ID
        id: BudgetId,
        /// New name
        #[arg(long)]
        name: String,
        /// New amount
        #[arg(long)]
        amount: String,
        /// New category
        #[arg(long)]
        category: String,
    },

    /// Delete a budget
    Delete {
        /// Budget ID
        id: BudgetId,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    store: &RecordStore,
    settings: &Settings,
    cmd: BudgetCommands,
) -> PaisaResult<()> {
    let service = BudgetService::new(store);

    match cmd {
        BudgetCommands::Add {
            name,
            amount,
            category,
        } => {
            let category = CategoryService::new(store).resolve_or_create(&category)?;

            let form = BudgetForm {
                name,
                amount,
                category: category.name,
            };
            let budget = service.create(&form)?;

            println!("Created budget {}:", budget.id);
            println!("{}", display::format_budget_details(&budget, settings));
        }

        BudgetCommands::List => {
            let budgets = service.list()?;
            println!("{}", display::format_budget_list(&budgets, settings));
        }

        BudgetCommands::Show { id } => {
            let budget = service
                .get(id)?
                .ok_or_else(|| crate::error::PaisaError::budget_not_found(id.to_string()))?;
            println!("{}", display::format_budget_details(&budget, settings));
        }

        BudgetCommands::Edit {
            id,
            name,
            amount,
            category,
        } => {
            let category = CategoryService::new(store).resolve_or_create(&category)?;

            let form = BudgetForm {
                name,
                amount,
                category: category.name,
            };
            let budget = service.update(id, &form)?;

            println!("Updated budget {}:", budget.id);
            println!("{}", display::format_budget_details(&budget, settings));
        }

        BudgetCommands::Delete { id } => {
            service.delete(id)?;
            println!("Deleted budget {}", id);
        }
    }

    Ok(())
}
