//! View rendering
//!
//! Renders the active view, the tab bar, the status bar, and any open
//! dialog on top.

pub mod analysis_multi;
pub mod analysis_pair;
pub mod budgets;
pub mod expenses;

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph, Tabs};
use ratatui::Frame;

use super::app::{ActiveView, App};
use super::dialogs;
use super::layout::AppLayout;

/// Render the whole UI
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    render_tabs(frame, app, layout.tabs);

    match app.active_view {
        ActiveView::Budgets => budgets::render(frame, app, layout.main),
        ActiveView::Expenses => expenses::render(frame, app, layout.main),
        ActiveView::AnalysisPair => analysis_pair::render(frame, app, layout.main),
        ActiveView::AnalysisMulti => analysis_multi::render(frame, app, layout.main),
    }

    render_status_bar(frame, app, layout.status_bar);

    dialogs::render(frame, app);
}

fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles = ["Budgets [1]", "Expenses [2]", "Analysis [3]", "Multi Analysis [4]"];
    let selected = match app.active_view {
        ActiveView::Budgets => 0,
        ActiveView::Expenses => 1,
        ActiveView::AnalysisPair => 2,
        ActiveView::AnalysisMulti => 3,
    };

    let tabs = Tabs::new(titles.to_vec())
        .block(Block::default().borders(Borders::ALL).title(" paisa "))
        .select(selected)
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(tabs, area);
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let text = match &app.status_message {
        Some(message) => message.clone(),
        None => match app.active_view {
            ActiveView::Budgets | ActiveView::Expenses => {
                "a: add | e: edit | d: delete | c: new category | 1-4: switch view | q: quit".into()
            }
            ActiveView::AnalysisPair => {
                "Tab: switch pane | Enter: choose | s: show analysis | 1-4: switch view | q: quit"
                    .into()
            }
            ActiveView::AnalysisMulti => {
                "Tab: switch pane | Space: toggle | s: show analysis | 1-4: switch view | q: quit"
                    .into()
            }
        },
    };

    frame.render_widget(
        Paragraph::new(text).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

/// Render the budget-vs-expense bar chart, or a hint when no current
/// chart exists
///
/// A missing side of a group simply has no bar, so one-sided rows in a
/// multi comparison show a visible gap.
pub(super) fn render_chart(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Budget vs Expenses ");

    let series = match &app.chart {
        Some(series) if app.chart_is_current() => series,
        _ => {
            frame.render_widget(
                Paragraph::new("Make a selection, then press 's' to show the analysis.")
                    .block(block)
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(Color::DarkGray)),
                area,
            );
            return;
        }
    };

    let mut chart = BarChart::default()
        .block(block)
        .bar_width(10)
        .bar_gap(1)
        .group_gap(3);

    for (i, label) in series.labels.iter().enumerate() {
        let mut bars = Vec::new();
        if let Some(value) = series.budget_values.get(i).copied().flatten() {
            bars.push(
                Bar::default()
                    .value(value.max(0.0) as u64)
                    .text_value(app.settings.format_amount(value))
                    .style(Style::default().fg(Color::Green)),
            );
        }
        if let Some(value) = series.expense_values.get(i).copied().flatten() {
            bars.push(
                Bar::default()
                    .value(value.max(0.0) as u64)
                    .text_value(app.settings.format_amount(value))
                    .style(Style::default().fg(Color::Red)),
            );
        }
        chart = chart.data(
            BarGroup::default()
                .label(Line::from(label.as_str()))
                .bars(&bars),
        );
    }

    frame.render_widget(chart, area);
}
