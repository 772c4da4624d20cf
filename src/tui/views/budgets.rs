//! Budgets table view

use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table, TableState};
use ratatui::Frame;

use super::super::app::App;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Budgets ({}) ", app.budgets.len()));

    if app.budgets.is_empty() {
        frame.render_widget(
            Paragraph::new("No budgets yet. Press 'a' to add one.")
                .block(block)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray)),
            area,
        );
        return;
    }

    let header = Row::new(["ID", "Name", "Amount", "Category", "Created"])
        .style(Style::default().add_modifier(Modifier::BOLD))
        .bottom_margin(1);

    let rows: Vec<Row> = app
        .budgets
        .iter()
        .map(|budget| {
            Row::new(vec![
                budget.id.to_string(),
                budget.name.clone(),
                app.settings.format_amount(budget.amount),
                budget.category.clone(),
                budget.created_at.format("%Y-%m-%d").to_string(),
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

    let mut state = TableState::default().with_selected(Some(app.budget_index));
    frame.render_stateful_widget(table, area, &mut state);
}
