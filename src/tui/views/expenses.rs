//! Expenses table view

use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table, TableState};
use ratatui::Frame;

use super::super::app::App;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Expenses ({}) ", app.expenses.len()));

    if app.expenses.is_empty() {
        frame.render_widget(
            Paragraph::new("No expenses yet. Press 'a' to add one.")
                .block(block)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray)),
            area,
        );
        return;
    }

    let header = Row::new(["ID", "Name", "Amount", "Category", "Date"])
        .style(Style::default().add_modifier(Modifier::BOLD))
        .bottom_margin(1);

    let rows: Vec<Row> = app
        .expenses
        .iter()
        .map(|expense| {
            Row::new(vec![
                expense.id.to_string(),
                expense.name.clone(),
                app.settings.format_amount(expense.amount),
                expense.category.clone(),
                expense.date.format(&app.settings.date_format).to_string(),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(8),
            Constraint::Min(16),
            Constraint::Length(14),
            Constraint::Min(12),
            Constraint::Length(12),
        ],
    )
    .header(header)
    .block(block)
    .highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("> ");

    let mut state = TableState::default().with_selected(Some(app.expense_index));
    frame.render_stateful_widget(table, area, &mut state);
}
