//! Multi analysis view
//!
//! Any number of budgets and expenses are toggled with Space; 's' builds
//! the grouped chart for the whole selection.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};
use ratatui::Frame;

use super::super::app::{AnalysisPane, App};
use super::super::layout::AnalysisLayout;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let layout = AnalysisLayout::new(area);

    render_budget_list(frame, app, layout.budgets);
    render_expense_list(frame, app, layout.expenses);
    super::render_chart(frame, app, layout.chart);
}

fn render_budget_list(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.analysis_pane == AnalysisPane::Budgets;
    let items: Vec<ListItem> = app
        .budgets
        .iter()
        .map(|budget| {
            let marker = if app.multi_budgets.contains(&budget.id) {
                "[x] "
            } else {
                "[ ] "
            };
            ListItem::new(format!("{}{}", marker, budget.name))
        })
        .collect();

    let title = format!(" Budgets ({} selected) ", app.multi_budgets.len());
    let list = List::new(items)
        .block(pane_block(&title, focused))
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(Some(app.analysis_budget_index));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_expense_list(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.analysis_pane == AnalysisPane::Expenses;
    let items: Vec<ListItem> = app
        .expenses
        .iter()
        .map(|expense| {
            let marker = if app.multi_expenses.contains(&expense.id) {
                "[x] "
            } else {
                "[ ] "
            };
            ListItem::new(format!("{}{}", marker, expense.name))
        })
        .collect();

    let title = format!(" Expenses ({} selected) ", app.multi_expenses.len());
    let list = List::new(items)
        .block(pane_block(&title, focused))
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(Some(app.analysis_expense_index));
    frame.render_stateful_widget(list, area, &mut state);
}

fn pane_block(title: &str, focused: bool) -> Block<'static> {
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title.to_string())
}
