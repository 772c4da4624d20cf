//! Category creation dialog

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::services::CategoryService;

use super::super::app::App;
use super::super::layout::centered_rect_fixed;
use super::super::widgets::TextInput;
use super::{reload_or_report, render_text_field};

/// State of the category form dialog
#[derive(Debug, Clone, Default)]
pub struct CategoryFormState {
    pub name: TextInput,
    pub error: Option<String>,
}

impl CategoryFormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset for a new category
    pub fn init(&mut self) {
        *self = Self {
            name: TextInput::new().placeholder("e.g. Transport"),
            error: None,
        };
    }
}

pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(50, 9, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Add Category ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Name
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Help
        ])
        .split(inner);

    let form = &app.category_form;
    render_text_field(
        frame,
        chunks[0],
        "Name",
        &form.name,
        true,
        form.error.is_some(),
    );

    if let Some(error) = &form.error {
        frame.render_widget(
            Paragraph::new(error.clone()).style(Style::default().fg(Color::Red)),
            chunks[2],
        );
    }

    frame.render_widget(
        Paragraph::new("Enter: save | Esc: cancel")
            .style(Style::default().fg(Color::DarkGray)),
        chunks[3],
    );
}

pub fn handle_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Enter => save(app),
        KeyCode::Backspace => app.category_form.name.backspace(),
        KeyCode::Delete => app.category_form.name.delete(),
        KeyCode::Left => app.category_form.name.move_left(),
        KeyCode::Right => app.category_form.name.move_right(),
        KeyCode::Home => app.category_form.name.move_start(),
        KeyCode::End => app.category_form.name.move_end(),
        KeyCode::Char(c) => app.category_form.name.insert(c),
        _ => {}
    }
}

fn save(app: &mut App) {
    let name = app.category_form.name.value().to_string();
    match CategoryService::new(app.store).create(&name) {
        Ok(category) => {
            app.close_dialog();
            reload_or_report(app);
            app.set_status(format!("Created category '{}'", category.name));
        }
        Err(e) => {
            app.category_form.error = Some(e.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_clears_previous_state() {
        let mut state = CategoryFormState::new();
        state.name.insert('x');
        state.error = Some("old".into());

        state.init();

        assert_eq!(state.name.value(), "");
        assert!(state.error.is_none());
    }
}
