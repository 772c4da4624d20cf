//! Dialog overlays
//!
//! Exactly one dialog is open at a time, tracked by [`ActiveDialog`] on the
//! App. While a dialog is open it owns all key input.

pub mod budget_form;
pub mod category_form;
pub mod confirm;
pub mod expense_form;
pub mod message;

use crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use super::app::{ActiveDialog, App, MessageKind};
use super::widgets::TextInput;

/// Render the active dialog, if any
pub fn render(frame: &mut Frame, app: &App) {
    match &app.active_dialog {
        ActiveDialog::None => {}
        ActiveDialog::BudgetForm(editing) => budget_form::render(frame, app, editing.is_some()),
        ActiveDialog::ExpenseForm(editing) => expense_form::render(frame, app, editing.is_some()),
        ActiveDialog::CategoryForm => category_form::render(frame, app),
        ActiveDialog::ConfirmDelete(target) => confirm::render(frame, app, *target),
        ActiveDialog::Message(dialog) => message::render(frame, dialog),
    }
}

/// Route a key event to the active dialog
pub fn handle_key(app: &mut App, key: KeyEvent) {
    match app.active_dialog {
        ActiveDialog::None => {}
        ActiveDialog::BudgetForm(_) => budget_form::handle_key(app, key),
        ActiveDialog::ExpenseForm(_) => expense_form::handle_key(app, key),
        ActiveDialog::CategoryForm => category_form::handle_key(app, key),
        ActiveDialog::ConfirmDelete(_) => confirm::handle_key(app, key),
        ActiveDialog::Message(_) => message::handle_key(app, key),
    }
}

/// Reload the cached lists, surfacing any failure as an error dialog
pub(crate) fn reload_or_report(app: &mut App) {
    if let Err(e) = app.reload() {
        app.show_message(MessageKind::Error, e.to_string());
    }
}

/// Render a single bordered text field
///
/// The focused field gets a yellow border and a visible cursor; a field
/// with a validation error gets a red border.
pub(crate) fn render_text_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    input: &TextInput,
    focused: bool,
    has_error: bool,
) {
    let border_style = if has_error {
        Style::default().fg(Color::Red)
    } else if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!(" {} ", label));

    let line = if input.content.is_empty() && !focused {
        Line::from(Span::styled(
            input.placeholder.clone(),
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        let (before, after) = input.content.split_at(input.cursor);
        let mut spans = vec![Span::raw(before.to_string())];
        if focused {
            let mut chars = after.chars();
            match chars.next() {
                Some(c) => {
                    spans.push(Span::styled(
                        c.to_string(),
                        Style::default().add_modifier(Modifier::REVERSED),
                    ));
                    spans.push(Span::raw(chars.as_str().to_string()));
                }
                None => {
                    spans.push(Span::styled(
                        " ",
                        Style::default().add_modifier(Modifier::REVERSED),
                    ));
                }
            }
        } else {
            spans.push(Span::raw(after.to_string()));
        }
        Line::from(spans)
    };

    frame.render_widget(Paragraph::new(line).block(block), area);
}
