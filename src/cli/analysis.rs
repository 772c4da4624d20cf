//! Analysis CLI commands
//!
//! Builds and prints a budget-vs-expense comparison for a selection
//! given on the command line.

use clap::Subcommand;

use crate::analysis::{self, Selection};
use crate::config::Settings;
use crate::display;
use crate::error::PaisaResult;
use crate::models::{BudgetId, ExpenseId};
use crate::store::RecordStore;

/// Analysis subcommands
#[derive(Subcommand)]
pub enum AnalysisCommands {
    /// Compare one budget against one expense
    Pair {
        /// Budget ID
        #[arg(long)]
        budget: Option<BudgetId>,
        /// Expense ID
        #[arg(long)]
        expense: Option<ExpenseId>,
    },

    /// Compare any number of budgets and expenses side by side
    Multi {
        /// Budget IDs (comma-separated)
        #[arg(long, value_delimiter = ',')]
        budgets: Vec<BudgetId>,
        /// Expense IDs (comma-separated)
        #[arg(long, value_delimiter = ',')]
        expenses: Vec<ExpenseId>,
    },
}

/// Handle an analysis command
pub fn handle_analysis_command(
    store: &RecordStore,
    settings: &Settings,
    cmd: AnalysisCommands,
) -> PaisaResult<()> {
    let budgets = store.budgets.get_all()?;
    let expenses = store.expenses.get_all()?;

    let selection = match cmd {
        AnalysisCommands::Pair { budget, expense } => Selection::Pair { budget, expense },
        AnalysisCommands::Multi {
            budgets: b,
            expenses: e,
        } => Selection::Multi {
            budgets: b,
            expenses: e,
        },
    };

    let series = analysis::build(&selection, &budgets, &expenses)?;
    println!("{}", display::format_series(&series, settings));

    Ok(())
}
