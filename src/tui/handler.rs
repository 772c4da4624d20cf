//! Key event handling
//!
//! An open dialog owns all key input. Otherwise keys are global
//! (quit, view switching, list movement) or view-specific.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{ActiveDialog, ActiveView, App, DeleteTarget};
use super::dialogs;
use super::event::Event;

/// Handle a terminal event
pub fn handle_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Resize(_, _) | Event::Tick => {}
    }
}

/// Handle a key press
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    // Status messages are transient
    app.status_message = None;

    if app.has_dialog() {
        dialogs::handle_key(app, key);
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('1') => app.switch_view(ActiveView::Budgets),
        KeyCode::Char('2') => app.switch_view(ActiveView::Expenses),
        KeyCode::Char('3') => app.switch_view(ActiveView::AnalysisPair),
        KeyCode::Char('4') => app.switch_view(ActiveView::AnalysisMulti),
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        _ => handle_view_key(app, key),
    }
}

fn handle_view_key(app: &mut App, key: KeyEvent) {
    match app.active_view {
        ActiveView::Budgets => match key.code {
            KeyCode::Char('a') => app.open_dialog(ActiveDialog::BudgetForm(None)),
            KeyCode::Char('e') | KeyCode::Enter => {
                if let Some(budget) = app.budgets.get(app.budget_index) {
                    app.open_dialog(ActiveDialog::BudgetForm(Some(budget.id)));
                }
            }
            KeyCode::Char('d') => {
                if let Some(budget) = app.budgets.get(app.budget_index) {
                    app.open_dialog(ActiveDialog::ConfirmDelete(DeleteTarget::Budget(budget.id)));
                }
            }
            KeyCode::Char('c') => app.open_dialog(ActiveDialog::CategoryForm),
            _ => {}
        },
        ActiveView::Expenses => match key.code {
            KeyCode::Char('a') => app.open_dialog(ActiveDialog::ExpenseForm(None)),
            KeyCode::Char('e') | KeyCode::Enter => {
                if let Some(expense) = app.expenses.get(app.expense_index) {
                    app.open_dialog(ActiveDialog::ExpenseForm(Some(expense.id)));
                }
            }
            KeyCode::Char('d') => {
                if let Some(expense) = app.expenses.get(app.expense_index) {
                    app.open_dialog(ActiveDialog::ConfirmDelete(DeleteTarget::Expense(
                        expense.id,
                    )));
                }
            }
            KeyCode::Char('c') => app.open_dialog(ActiveDialog::CategoryForm),
            _ => {}
        },
        ActiveView::AnalysisPair => match key.code {
            KeyCode::Tab => app.toggle_analysis_pane(),
            KeyCode::Enter => match app.analysis_pane {
                super::app::AnalysisPane::Budgets => app.choose_pair_budget(),
                super::app::AnalysisPane::Expenses => app.choose_pair_expense(),
            },
            KeyCode::Char('s') => app.show_analysis(),
            _ => {}
        },
        ActiveView::AnalysisMulti => match key.code {
            KeyCode::Tab => app.toggle_analysis_pane(),
            KeyCode::Char(' ') => app.toggle_multi_selection(),
            KeyCode::Char('s') => app.show_analysis(),
            _ => {}
        },
    }
}
