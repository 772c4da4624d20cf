//! Success and error message dialog

use crossterm::event::KeyEvent;
use ratatui::layout::Alignment;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use super::super::app::{App, MessageDialog, MessageKind};
use super::super::layout::centered_rect_fixed;

pub fn render(frame: &mut Frame, dialog: &MessageDialog) {
    let (title, color) = match dialog.kind {
        MessageKind::Success => (" Success ", Color::Green),
        MessageKind::Error => (" Error ", Color::Red),
    };

    // Grow with the message so long dialog text stays readable
    let width = 56u16;
    let text_lines = (dialog.message.len() as u16 / (width - 4)) + 1;
    let area = centered_rect_fixed(width, text_lines + 5, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(title);

    let mut lines = vec![Line::from(dialog.message.clone())];
    lines.push(Line::from(""));
    lines.push(Line::from("Press any key to continue").style(Style::default().fg(Color::DarkGray)));

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}

pub fn handle_key(app: &mut App, _key: KeyEvent) {
    app.close_dialog();
}
