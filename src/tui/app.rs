//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! Record lists are cached and refreshed as a whole; every refresh bumps a
//! generation counter, and a built chart is only shown while its generation
//! matches, so a stale chart can never outlive the data it was built from.

use crate::analysis::{self, ChartSeries, Selection};
use crate::config::paths::PaisaPaths;
use crate::config::settings::Settings;
use crate::error::PaisaError;
use crate::models::{Budget, BudgetId, Category, Expense, ExpenseId};
use crate::store::RecordStore;

use super::dialogs::budget_form::BudgetFormState;
use super::dialogs::category_form::CategoryFormState;
use super::dialogs::expense_form::ExpenseFormState;

/// Which view is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Budgets,
    Expenses,
    AnalysisPair,
    AnalysisMulti,
}

/// Which pane has focus in the analysis views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnalysisPane {
    #[default]
    Budgets,
    Expenses,
}

/// What a confirmation dialog is about to delete
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteTarget {
    Budget(BudgetId),
    Expense(ExpenseId),
}

/// Severity of a message dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

/// Contents of the message dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageDialog {
    pub kind: MessageKind,
    pub message: String,
}

/// Currently active dialog (if any)
///
/// Exactly one dialog can be open at a time by construction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    /// Budget form; Some(id) means editing
    BudgetForm(Option<BudgetId>),
    /// Expense form; Some(id) means editing
    ExpenseForm(Option<ExpenseId>),
    /// Ad-hoc category creation
    CategoryForm,
    /// Delete confirmation
    ConfirmDelete(DeleteTarget),
    /// Success or error message
    Message(MessageDialog),
}

/// Main application state
pub struct App<'a> {
    /// The storage layer
    pub store: &'a RecordStore,

    /// Application settings
    pub settings: &'a Settings,

    /// Paths configuration
    pub paths: &'a PaisaPaths,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active view
    pub active_view: ActiveView,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Cached budget list
    pub budgets: Vec<Budget>,

    /// Cached expense list
    pub expenses: Vec<Expense>,

    /// Cached category list
    pub categories: Vec<Category>,

    /// Bumped on every reload; charts built under an older generation
    /// are discarded
    pub data_generation: u64,

    /// Selected row in the budgets view
    pub budget_index: usize,

    /// Selected row in the expenses view
    pub expense_index: usize,

    /// Focused pane in the analysis views
    pub analysis_pane: AnalysisPane,

    /// Cursor in the analysis budget list
    pub analysis_budget_index: usize,

    /// Cursor in the analysis expense list
    pub analysis_expense_index: usize,

    /// Chosen budget for the pair comparison
    pub pair_budget: Option<BudgetId>,

    /// Chosen expense for the pair comparison
    pub pair_expense: Option<ExpenseId>,

    /// Chosen budgets for the multi comparison
    pub multi_budgets: Vec<BudgetId>,

    /// Chosen expenses for the multi comparison
    pub multi_expenses: Vec<ExpenseId>,

    /// The built chart, if any
    pub chart: Option<ChartSeries>,

    /// Generation the chart was built under
    chart_generation: u64,

    /// Status message to display
    pub status_message: Option<String>,

    /// Budget form dialog state
    pub budget_form: BudgetFormState,

    /// Expense form dialog state
    pub expense_form: ExpenseFormState,

    /// Category form dialog state
    pub category_form: CategoryFormState,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(store: &'a RecordStore, settings: &'a Settings, paths: &'a PaisaPaths) -> Self {
        Self {
            store,
            settings,
            paths,
            should_quit: false,
            active_view: ActiveView::default(),
            active_dialog: ActiveDialog::default(),
            budgets: Vec::new(),
            expenses: Vec::new(),
            categories: Vec::new(),
            data_generation: 0,
            budget_index: 0,
            expense_index: 0,
            analysis_pane: AnalysisPane::default(),
            analysis_budget_index: 0,
            analysis_expense_index: 0,
            pair_budget: None,
            pair_expense: None,
            multi_budgets: Vec::new(),
            multi_expenses: Vec::new(),
            chart: None,
            chart_generation: 0,
            status_message: None,
            budget_form: BudgetFormState::new(),
            expense_form: ExpenseFormState::new(),
            category_form: CategoryFormState::new(),
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Refresh the cached record lists from the store
    ///
    /// Any built chart is discarded; selections pointing at deleted
    /// records are pruned.
    pub fn reload(&mut self) -> Result<(), PaisaError> {
        self.budgets = self.store.budgets.get_all()?;
        self.expenses = self.store.expenses.get_all()?;
        self.categories = self.store.categories.get_all()?;
        self.data_generation += 1;
        self.chart = None;

        self.budget_index = clamp_index(self.budget_index, self.budgets.len());
        self.expense_index = clamp_index(self.expense_index, self.expenses.len());
        self.analysis_budget_index = clamp_index(self.analysis_budget_index, self.budgets.len());
        self.analysis_expense_index = clamp_index(self.analysis_expense_index, self.expenses.len());

        if let Some(id) = self.pair_budget {
            if !self.budgets.iter().any(|b| b.id == id) {
                self.pair_budget = None;
            }
        }
        if let Some(id) = self.pair_expense {
            if !self.expenses.iter().any(|e| e.id == id) {
                self.pair_expense = None;
            }
        }
        self.multi_budgets
            .retain(|id| self.budgets.iter().any(|b| b.id == *id));
        self.multi_expenses
            .retain(|id| self.expenses.iter().any(|e| e.id == *id));

        Ok(())
    }

    /// Switch to a different view
    pub fn switch_view(&mut self, view: ActiveView) {
        if self.active_view != view {
            self.active_view = view;
            self.chart = None;
        }
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        match &dialog {
            ActiveDialog::BudgetForm(editing) => {
                let category_names: Vec<String> =
                    self.categories.iter().map(|c| c.name.clone()).collect();
                match editing.and_then(|id| self.budgets.iter().find(|b| b.id == id)) {
                    Some(budget) => self.budget_form.init_for_edit(budget, category_names),
                    None => self.budget_form.init(category_names),
                }
            }
            ActiveDialog::ExpenseForm(editing) => {
                let category_names: Vec<String> =
                    self.categories.iter().map(|c| c.name.clone()).collect();
                match editing.and_then(|id| self.expenses.iter().find(|e| e.id == id)) {
                    Some(expense) => self.expense_form.init_for_edit(expense, category_names),
                    None => self.expense_form.init(category_names),
                }
            }
            ActiveDialog::CategoryForm => {
                self.category_form.init();
            }
            _ => {}
        }
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    /// Show a message dialog
    pub fn show_message(&mut self, kind: MessageKind, message: impl Into<String>) {
        self.active_dialog = ActiveDialog::Message(MessageDialog {
            kind,
            message: message.into(),
        });
    }

    /// Whether the chart is current for the displayed data
    pub fn chart_is_current(&self) -> bool {
        self.chart.is_some() && self.chart_generation == self.data_generation
    }

    /// Pick the budget under the cursor for the pair comparison
    pub fn choose_pair_budget(&mut self) {
        if let Some(budget) = self.budgets.get(self.analysis_budget_index) {
            self.pair_budget = Some(budget.id);
            self.chart = None;
        }
    }

    /// Pick the expense under the cursor for the pair comparison
    pub fn choose_pair_expense(&mut self) {
        if let Some(expense) = self.expenses.get(self.analysis_expense_index) {
            self.pair_expense = Some(expense.id);
            self.chart = None;
        }
    }

    /// Toggle the record under the cursor in the multi selection
    pub fn toggle_multi_selection(&mut self) {
        match self.analysis_pane {
            AnalysisPane::Budgets => {
                if let Some(budget) = self.budgets.get(self.analysis_budget_index) {
                    toggle(&mut self.multi_budgets, budget.id);
                    self.chart = None;
                }
            }
            AnalysisPane::Expenses => {
                if let Some(expense) = self.expenses.get(self.analysis_expense_index) {
                    toggle(&mut self.multi_expenses, expense.id);
                    self.chart = None;
                }
            }
        }
    }

    /// Build the chart for the current view's selection
    ///
    /// An invalid selection opens an error dialog and leaves no chart.
    pub fn show_analysis(&mut self) {
        let selection = match self.active_view {
            ActiveView::AnalysisPair => Selection::Pair {
                budget: self.pair_budget,
                expense: self.pair_expense,
            },
            ActiveView::AnalysisMulti => Selection::Multi {
                budgets: self.multi_budgets.clone(),
                expenses: self.multi_expenses.clone(),
            },
            _ => return,
        };

        match analysis::build(&selection, &self.budgets, &self.expenses) {
            Ok(series) => {
                self.chart = Some(series);
                self.chart_generation = self.data_generation;
            }
            Err(PaisaError::Selection(e)) => {
                self.chart = None;
                self.show_message(MessageKind::Error, e.to_string());
            }
            Err(e) => {
                self.chart = None;
                self.show_message(MessageKind::Error, e.to_string());
            }
        }
    }

    /// Move the cursor up in the focused list
    pub fn move_up(&mut self) {
        match self.active_view {
            ActiveView::Budgets => {
                self.budget_index = self.budget_index.saturating_sub(1);
            }
            ActiveView::Expenses => {
                self.expense_index = self.expense_index.saturating_sub(1);
            }
            ActiveView::AnalysisPair | ActiveView::AnalysisMulti => match self.analysis_pane {
                AnalysisPane::Budgets => {
                    self.analysis_budget_index = self.analysis_budget_index.saturating_sub(1);
                }
                AnalysisPane::Expenses => {
                    self.analysis_expense_index = self.analysis_expense_index.saturating_sub(1);
                }
            },
        }
    }

    /// Move the cursor down in the focused list
    pub fn move_down(&mut self) {
        match self.active_view {
            ActiveView::Budgets => {
                self.budget_index = next_index(self.budget_index, self.budgets.len());
            }
            ActiveView::Expenses => {
                self.expense_index = next_index(self.expense_index, self.expenses.len());
            }
            ActiveView::AnalysisPair | ActiveView::AnalysisMulti => match self.analysis_pane {
                AnalysisPane::Budgets => {
                    self.analysis_budget_index =
                        next_index(self.analysis_budget_index, self.budgets.len());
                }
                AnalysisPane::Expenses => {
                    self.analysis_expense_index =
                        next_index(self.analysis_expense_index, self.expenses.len());
                }
            },
        }
    }

    /// Toggle focus between the analysis panes
    pub fn toggle_analysis_pane(&mut self) {
        self.analysis_pane = match self.analysis_pane {
            AnalysisPane::Budgets => AnalysisPane::Expenses,
            AnalysisPane::Expenses => AnalysisPane::Budgets,
        };
    }
}

fn clamp_index(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        index.min(len - 1)
    }
}

fn next_index(index: usize, len: usize) -> usize {
    if index + 1 < len {
        index + 1
    } else {
        index
    }
}

fn toggle<T: PartialEq + Copy>(items: &mut Vec<T>, item: T) {
    if let Some(pos) = items.iter().position(|i| *i == item) {
        items.remove(pos);
    } else {
        items.push(item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::BudgetForm;
    use crate::services::BudgetService;
    use tempfile::TempDir;

    fn create_test_env() -> (TempDir, RecordStore, Settings, PaisaPaths) {
        let temp_dir = TempDir::new().unwrap();
        let paths = PaisaPaths::with_base_dir(temp_dir.path().to_path_buf());
        let store = RecordStore::new(paths.clone()).unwrap();
        store.load_all().unwrap();
        (temp_dir, store, Settings::default(), paths)
    }

    #[test]
    fn test_reload_discards_chart() {
        let (_temp, store, settings, paths) = create_test_env();
        let mut app = App::new(&store, &settings, &paths);

        app.chart = Some(ChartSeries {
            labels: vec!["x".into()],
            budget_values: vec![Some(1.0)],
            expense_values: vec![Some(2.0)],
        });

        app.reload().unwrap();
        assert!(app.chart.is_none());
        assert_eq!(app.data_generation, 1);
    }

    #[test]
    fn test_selection_change_discards_chart() {
        let (_temp, store, settings, paths) = create_test_env();

        BudgetService::new(&store)
            .create(&BudgetForm {
                name: "Food".into(),
                amount: "5000".into(),
                category: "Food".into(),
            })
            .unwrap();

        let mut app = App::new(&store, &settings, &paths);
        app.reload().unwrap();
        app.switch_view(ActiveView::AnalysisPair);

        app.chart = Some(ChartSeries {
            labels: vec!["x".into()],
            budget_values: vec![Some(1.0)],
            expense_values: vec![Some(2.0)],
        });
        app.choose_pair_budget();
        assert!(app.chart.is_none());
        assert!(app.pair_budget.is_some());
    }

    #[test]
    fn test_invalid_pair_selection_opens_error_dialog() {
        let (_temp, store, settings, paths) = create_test_env();
        let mut app = App::new(&store, &settings, &paths);
        app.reload().unwrap();
        app.switch_view(ActiveView::AnalysisPair);

        app.show_analysis();

        assert!(app.chart.is_none());
        assert!(matches!(app.active_dialog, ActiveDialog::Message(_)));
    }

    #[test]
    fn test_multi_toggle() {
        let (_temp, store, settings, paths) = create_test_env();

        let service = BudgetService::new(&store);
        service
            .create(&BudgetForm {
                name: "Food".into(),
                amount: "5000".into(),
                category: "Food".into(),
            })
            .unwrap();

        let mut app = App::new(&store, &settings, &paths);
        app.reload().unwrap();
        app.switch_view(ActiveView::AnalysisMulti);

        app.toggle_multi_selection();
        assert_eq!(app.multi_budgets.len(), 1);

        app.toggle_multi_selection();
        assert!(app.multi_budgets.is_empty());
    }

    #[test]
    fn test_reload_prunes_stale_selection() {
        let (_temp, store, settings, paths) = create_test_env();

        let service = BudgetService::new(&store);
        let budget = service
            .create(&BudgetForm {
                name: "Food".into(),
                amount: "5000".into(),
                category: "Food".into(),
            })
            .unwrap();

        let mut app = App::new(&store, &settings, &paths);
        app.reload().unwrap();
        app.pair_budget = Some(budget.id);
        app.multi_budgets.push(budget.id);

        service.delete(budget.id).unwrap();
        app.reload().unwrap();

        assert!(app.pair_budget.is_none());
        assert!(app.multi_budgets.is_empty());
    }
}
