//! Delete confirmation dialog

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::services::{BudgetService, ExpenseService};

use super::super::app::{ActiveDialog, App, DeleteTarget, MessageKind};
use super::super::layout::centered_rect_fixed;
use super::reload_or_report;

fn describe(app: &App, target: DeleteTarget) -> String {
    match target {
        DeleteTarget::Budget(id) => {
            let name = app
                .budgets
                .iter()
                .find(|b| b.id == id)
                .map(|b| b.name.as_str())
                .unwrap_or("this budget");
            format!("Delete budget '{}'?", name)
        }
        DeleteTarget::Expense(id) => {
            let name = app
                .expenses
                .iter()
                .find(|e| e.id == id)
                .map(|e| e.name.as_str())
                .unwrap_or("this expense");
            format!("Delete expense '{}'?", name)
        }
    }
}

pub fn render(frame: &mut Frame, app: &App, target: DeleteTarget) {
    let area = centered_rect_fixed(50, 7, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(" Confirm Delete ");

    let lines = vec![
        Line::from(describe(app, target)),
        Line::from("This cannot be undone."),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Y]es", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
            Span::raw("   "),
            Span::styled("[N]o", Style::default().add_modifier(Modifier::BOLD)),
        ]),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}

pub fn handle_key(app: &mut App, key: KeyEvent) {
    let target = match app.active_dialog {
        ActiveDialog::ConfirmDelete(target) => target,
        _ => return,
    };

    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            let result = match target {
                DeleteTarget::Budget(id) => BudgetService::new(app.store).delete(id),
                DeleteTarget::Expense(id) => ExpenseService::new(app.store).delete(id),
            };
            app.close_dialog();
            match result {
                Ok(()) => {
                    reload_or_report(app);
                    app.set_status(match target {
                        DeleteTarget::Budget(_) => "Budget deleted",
                        DeleteTarget::Expense(_) => "Expense deleted",
                    });
                }
                Err(e) => app.show_message(MessageKind::Error, e.to_string()),
            }
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.close_dialog(),
        _ => {}
    }
}
