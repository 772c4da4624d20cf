//! Budget add/edit form dialog

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::error::PaisaError;
use crate::forms::{BudgetForm, FieldErrors};
use crate::models::{Budget, BudgetId};
use crate::services::{BudgetService, CategoryService};

use super::super::app::{ActiveDialog, App, MessageKind};
use super::super::layout::centered_rect_fixed;
use super::super::widgets::TextInput;
use super::{reload_or_report, render_text_field};

/// Fields of the budget form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BudgetField {
    #[default]
    Name,
    Amount,
    Category,
}

/// State of the budget form dialog
#[derive(Debug, Clone, Default)]
pub struct BudgetFormState {
    pub name: TextInput,
    pub amount: TextInput,
    pub category: TextInput,
    pub focused: BudgetField,
    pub errors: FieldErrors,
    pub error: Option<String>,
    /// Existing category names, shown as a hint
    pub category_hint: Vec<String>,
}

impl BudgetFormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset for a new budget
    pub fn init(&mut self, category_hint: Vec<String>) {
        *self = Self {
            name: TextInput::new().placeholder("e.g. Groceries"),
            amount: TextInput::new().placeholder("e.g. 5000"),
            category: TextInput::new().placeholder("e.g. Food"),
            category_hint,
            ..Self::default()
        };
    }

    /// Pre-fill from an existing budget
    pub fn init_for_edit(&mut self, budget: &Budget, category_hint: Vec<String>) {
        *self = Self {
            name: TextInput::new().content(budget.name.clone()),
            amount: TextInput::new().content(format_amount_input(budget.amount)),
            category: TextInput::new().content(budget.category.clone()),
            category_hint,
            ..Self::default()
        };
    }

    pub fn next_field(&mut self) {
        self.focused = match self.focused {
            BudgetField::Name => BudgetField::Amount,
            BudgetField::Amount => BudgetField::Category,
            BudgetField::Category => BudgetField::Name,
        };
    }

    pub fn prev_field(&mut self) {
        self.focused = match self.focused {
            BudgetField::Name => BudgetField::Category,
            BudgetField::Amount => BudgetField::Name,
            BudgetField::Category => BudgetField::Amount,
        };
    }

    pub fn focused_input_mut(&mut self) -> &mut TextInput {
        match self.focused {
            BudgetField::Name => &mut self.name,
            BudgetField::Amount => &mut self.amount,
            BudgetField::Category => &mut self.category,
        }
    }

    /// Build the raw form from the current inputs
    pub fn to_form(&self) -> BudgetForm {
        BudgetForm {
            name: self.name.value().to_string(),
            amount: self.amount.value().to_string(),
            category: self.category.value().to_string(),
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

/// Keep whole amounts free of a trailing ".0" when editing
fn format_amount_input(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{}", amount as i64)
    } else {
        format!("{}", amount)
    }
}

pub fn render(frame: &mut Frame, app: &App, editing: bool) {
    let area = centered_rect_fixed(60, 17, frame.area());
    frame.render_widget(Clear, area);

    let title = if editing { " Edit Budget " } else { " Add Budget " };
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
            Constraint::Length(1), // Category hint
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Help
        ])
        .split(inner);

    let form = &app.budget_form;
    render_text_field(
        frame,
        chunks[0],
        "Name",
        &form.name,
        form.focused == BudgetField::Name,
        form.errors.get("name").is_some(),
    );
    render_text_field(
        frame,
        chunks[1],
        "Amount",
        &form.amount,
        form.focused == BudgetField::Amount,
        form.errors.get("amount").is_some(),
    );
    render_text_field(
        frame,
        chunks[2],
        "Category",
        &form.category,
        form.focused == BudgetField::Category,
        form.errors.get("category").is_some(),
    );

    if !form.category_hint.is_empty() {
        let hint = format!("Categories: {}", form.category_hint.join(", "));
        frame.render_widget(
            Paragraph::new(hint).style(Style::default().fg(Color::DarkGray)),
            chunks[3],
        );
    }

    if let Some(error) = form.error_line() {
        frame.render_widget(
            Paragraph::new(error).style(Style::default().fg(Color::Red)),
            chunks[5],
        );
    }

    frame.render_widget(
        Paragraph::new("Tab: next field | Enter: save | Esc: cancel")
            .style(Style::default().fg(Color::DarkGray)),
        chunks[6],
    );
}

pub fn handle_key(app: &mut App, key: KeyEvent) {
    let editing = match app.active_dialog {
        ActiveDialog::BudgetForm(editing) => editing,
        _ => return,
    };

    match key.code {
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Tab | KeyCode::Down => app.budget_form.next_field(),
        KeyCode::BackTab | KeyCode::Up => app.budget_form.prev_field(),
        KeyCode::Enter => save(app, editing),
        KeyCode::Backspace => app.budget_form.focused_input_mut().backspace(),
        KeyCode::Delete => app.budget_form.focused_input_mut().delete(),
        KeyCode::Left => app.budget_form.focused_input_mut().move_left(),
        KeyCode::Right => app.budget_form.focused_input_mut().move_right(),
        KeyCode::Home => app.budget_form.focused_input_mut().move_start(),
        KeyCode::End => app.budget_form.focused_input_mut().move_end(),
        KeyCode::Char(c) => app.budget_form.focused_input_mut().insert(c),
        _ => {}
    }
}

fn save(app: &mut App, editing: Option<BudgetId>) {
    let mut form = app.budget_form.to_form();

    let payload = match form.validate() {
        Ok(payload) => payload,
        Err(errors) => {
            app.budget_form.errors = errors;
            return;
        }
    };

    // Store the canonical casing of an existing category
    match CategoryService::new(app.store).resolve_or_create(&payload.category) {
        Ok(category) => form.category = category.name,
        Err(e) => {
            app.budget_form.error = Some(e.to_string());
            return;
        }
    }

    let service = BudgetService::new(app.store);
    let result = match editing {
        Some(id) => service.update(id, &form),
        None => service.create(&form),
    };

    match result {
        Ok(budget) => {
            app.close_dialog();
            reload_or_report(app);
            app.set_status(format!("Saved budget '{}'", budget.name));
        }
        Err(PaisaError::Validation(errors)) => app.budget_form.errors = errors,
        Err(e) => app.show_message(MessageKind::Error, e.to_string()),
    }
}
