//! Expense add/edit form dialog

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::error::PaisaError;
use crate::forms::{ExpenseForm, FieldErrors};
use crate::models::{Expense, ExpenseId};
use crate::services::{CategoryService, ExpenseService};

use super::super::app::{ActiveDialog, App, MessageKind};
use super::super::layout::centered_rect_fixed;
use super::super::widgets::TextInput;
use super::{reload_or_report, render_text_field};

/// Fields of the expense form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpenseField {
    #[default]
    Name,
    Amount,
    Category,
    Date,
}

/// State of the expense form dialog
#[derive(Debug, Clone, Default)]
pub struct ExpenseFormState {
    pub name: TextInput,
    pub amount: TextInput,
    pub category: TextInput,
    pub date: TextInput,
    pub focused: ExpenseField,
    pub errors: FieldErrors,
    pub error: Option<String>,
    /// Existing category names, shown as a hint
    pub category_hint: Vec<String>,
}

impl ExpenseFormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset for a new expense, defaulting the date to today
    pub fn init(&mut self, category_hint: Vec<String>) {
        let today = chrono::Local::now().date_naive().format("%Y-%m-%d");
        *self = Self {
            name: TextInput::new().placeholder("e.g. Lunch"),
            amount: TextInput::new().placeholder("e.g. 300"),
            category: TextInput::new().placeholder("e.g. Food"),
            date: TextInput::new().content(today.to_string()),
            category_hint,
            ..Self::default()
        };
    }

    /// Pre-fill from an existing expense
    pub fn init_for_edit(&mut self, expense: &Expense, category_hint: Vec<String>) {
        *self = Self {
            name: TextInput::new().content(expense.name.clone()),
            amount: TextInput::new().content(format_amount_input(expense.amount)),
            category: TextInput::new().content(expense.category.clone()),
            date: TextInput::new().content(expense.date.format("%Y-%m-%d").to_string()),
            category_hint,
            ..Self::default()
        };
    }

    pub fn next_field(&mut self) {
        self.focused = match self.focused {
            ExpenseField::Name => ExpenseField::Amount,
            ExpenseField::Amount => ExpenseField::Category,
            ExpenseField::Category => ExpenseField::Date,
            ExpenseField::Date => ExpenseField::Name,
        };
    }

    pub fn prev_field(&mut self) {
        self.focused = match self.focused {
            ExpenseField::Name => ExpenseField::Date,
            ExpenseField::Amount => ExpenseField::Name,
            ExpenseField::Category => ExpenseField::Amount,
            ExpenseField::Date => ExpenseField::Category,
        };
    }

    pub fn focused_input_mut(&mut self) -> &mut TextInput {
        match self.focused {
            ExpenseField::Name => &mut self.name,
            ExpenseField::Amount => &mut self.amount,
            ExpenseField::Category => &mut self.category,
            ExpenseField::Date => &mut self.date,
        }
    }

    /// Build the raw form from the current inputs
    pub fn to_form(&self) -> ExpenseForm {
        ExpenseForm {
            name: self.name.value().to_string(),
            amount: self.amount.value().to_string(),
            category: self.category.value().to_string(),
            date: self.date.value().to_string(),
        }
    }

    fn error_line(&self) -> Option<String> {
        if let Some(error) = &self.error {
            return Some(error.clone());
        }
        if self.errors.is_empty() {
            return None;
        }
        Some(
            self.errors
                .iter()
                .map(|(_, message)| message)
                .collect::<Vec<_>>()
                .join("; "),
        )
    }
}

fn format_amount_input(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{}", amount as i64)
    } else {
        format!("{}", amount)
    }
}

pub fn render(frame: &mut Frame, app: &App, editing: bool) {
    let area = centered_rect_fixed(60, 20, frame.area());
    frame.render_widget(Clear, area);

    let title = if editing { " Edit Expense " } else { " Add Expense " };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Name
            Constraint::Length(3), // Amount
            Constraint::Length(3), // Category
            Constraint::Length(3), // Date
            Constraint::Length(1), // Category hint
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Help
        ])
        .split(inner);

    let form = &app.expense_form;
    render_text_field(
        frame,
        chunks[0],
        "Name",
        &form.name,
        form.focused == ExpenseField::Name,
        form.errors.get("name").is_some(),
    );
    render_text_field(
        frame,
        chunks[1],
        "Amount",
        &form.amount,
        form.focused == ExpenseField::Amount,
        form.errors.get("amount").is_some(),
    );
    render_text_field(
        frame,
        chunks[2],
        "Category",
        &form.category,
        form.focused == ExpenseField::Category,
        form.errors.get("category").is_some(),
    );
    render_text_field(
        frame,
        chunks[3],
        "Date (YYYY-MM-DD)",
        &form.date,
        form.focused == ExpenseField::Date,
        form.errors.get("date").is_some(),
    );

    if !form.category_hint.is_empty() {
        let hint = format!("Categories: {}", form.category_hint.join(", "));
        frame.render_widget(
            Paragraph::new(hint).style(Style::default().fg(Color::DarkGray)),
            chunks[4],
        );
    }

    if let Some(error) = form.error_line() {
        frame.render_widget(
            Paragraph::new(error).style(Style::default().fg(Color::Red)),
            chunks[6],
        );
    }

    frame.render_widget(
        Paragraph::new("Tab: next field | Enter: save | Esc: cancel")
            .style(Style::default().fg(Color::DarkGray)),
        chunks[7],
    );
}

pub fn handle_key(app: &mut App, key: KeyEvent) {
    let editing = match app.active_dialog {
        ActiveDialog::ExpenseForm(editing) => editing,
        _ => return,
    };

    match key.code {
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Tab | KeyCode::Down => app.expense_form.next_field(),
        KeyCode::BackTab | KeyCode::Up => app.expense_form.prev_field(),
        KeyCode::Enter => save(app, editing),
        KeyCode::Backspace => app.expense_form.focused_input_mut().backspace(),
        KeyCode::Delete => app.expense_form.focused_input_mut().delete(),
        KeyCode::Left => app.expense_form.focused_input_mut().move_left(),
        KeyCode::Right => app.expense_form.focused_input_mut().move_right(),
        KeyCode::Home => app.expense_form.focused_input_mut().move_start(),
        KeyCode::End => app.expense_form.focused_input_mut().move_end(),
        KeyCode::Char(c) => app.expense_form.focused_input_mut().insert(c),
        _ => {}
    }
}

fn save(app: &mut App, editing: Option<ExpenseId>) {
    let mut form = app.expense_form.to_form();

    let payload = match form.validate() {
        Ok(payload) => payload,
        Err(errors) => {
            app.expense_form.errors = errors;
            return;
        }
    };

    // Store the canonical casing of an existing category
    match CategoryService::new(app.store).resolve_or_create(&payload.category) {
        Ok(category) => form.category = category.name,
        Err(e) => {
            app.expense_form.error = Some(e.to_string());
            return;
        }
    }

    let service = ExpenseService::new(app.store);
    let result = match editing {
        Some(id) => service.update(id, &form),
        None => service.create(&form),
    };

    match result {
        Ok(expense) => {
            app.close_dialog();
            reload_or_report(app);
            app.set_status(format!("Saved expense '{}'", expense.name));
        }
        Err(PaisaError::Validation(errors)) => app.expense_form.errors = errors,
        Err(e) => app.show_message(MessageKind::Error, e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_field_cycle_includes_date() {
        let mut state = ExpenseFormState::new();
        state.next_field();
        state.next_field();
        state.next_field();
        assert_eq!(state.focused, ExpenseField::Date);

        state.next_field();
        assert_eq!(state.focused, ExpenseField::Name);
    }

    #[test]
    fn test_init_defaults_date_to_today() {
        let mut state = ExpenseFormState::new();
        state.init(Vec::new());

        let today = chrono::Local::now().date_naive().format("%Y-%m-%d").to_string();
        assert_eq!(state.date.value(), today);
    }

    #[test]
    fn test_init_for_edit_prefills_date() {
        let expense = Expense::new(
            ExpenseId::from_raw(1),
            "Lunch".into(),
            300.0,
            "Food".into(),
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
        );

        let mut state = ExpenseFormState::new();
        state.init_for_edit(&expense, Vec::new());

        assert_eq!(state.date.value(), "2025-01-15");
        assert_eq!(state.amount.value(), "300");
    }
}
