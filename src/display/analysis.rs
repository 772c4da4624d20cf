//! Chart series display formatting
//!
//! Renders a built series as a plain-text table for the CLI. Positions
//! with no value on one side show a dash.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::analysis::ChartSeries;
use crate::config::Settings;

#[derive(Tabled)]
struct SeriesRow {
    #[tabled(rename = "Item")]
    label: String,
    #[tabled(rename = "Budget")]
    budget: String,
    #[tabled(rename = "Expense")]
    expense: String,
}

/// Format a chart series as a table
pub fn format_series(series: &ChartSeries, settings: &Settings) -> String {
    if series.is_empty() {
        return "Nothing selected.".to_string();
    }

    let rows: Vec<SeriesRow> = (0..series.len())
        .map(|i| SeriesRow {
            label: series.labels[i].clone(),
            budget: format_value(series.budget_values[i], settings),
            expense: format_value(series.expense_values[i], settings),
        })
        .collect();

    Table::new(rows).with(Style::sharp()).to_string()
}

fn format_value(value: Option<f64>, settings: &Settings) -> String {
    match value {
        Some(v) => settings.format_amount(v),
        None => "-".to_string(),
    }
}
