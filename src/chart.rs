//! Horizontal bar charts for the terminal.
//!
//! Each chart scales its bars to the largest value in the series and prints
//! one row per category: label, bar, formatted currency.

use crate::format::{format_currency, CURRENCY_SYMBOL};
use colored::Colorize;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

const BAR_WIDTH: usize = 40;
const LABEL_WIDTH: usize = 28;

/// Render one bar chart to a string.
///
/// An empty series renders the title and a placeholder note instead of bars.
#[must_use]
pub fn render_bar_chart(title: &str, rows: &[(String, Decimal)]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", title.bold()));

    if rows.is_empty() {
        out.push_str(&format!(
            "   {}\n",
            "(no data for the current selection)".dimmed()
        ));
        return out;
    }

    let max = rows
        .iter()
        .map(|(_, value)| *value)
        .max()
        .unwrap_or(Decimal::ZERO);

    for (label, value) in rows {
        out.push_str(&format!(
            "   {:<width$} {} {}\n",
            clip_label(label),
            bar(*value, max).cyan(),
            format_currency(*value, CURRENCY_SYMBOL).green(),
            width = LABEL_WIDTH,
        ));
    }
    out
}

fn clip_label(label: &str) -> String {
    let chars: Vec<char> = label.chars().collect();
    if chars.len() <= LABEL_WIDTH {
        label.to_string()
    } else {
        let mut clipped: String = chars[..LABEL_WIDTH - 1].iter().collect();
        clipped.push('…');
        clipped
    }
}

fn bar(value: Decimal, max: Decimal) -> String {
    if max <= Decimal::ZERO || value <= Decimal::ZERO {
        return String::new();
    }
    let ratio = (value / max).to_f64().unwrap_or(0.0).clamp(0.0, 1.0);
    let mut len = (ratio * BAR_WIDTH as f64).round() as usize;
    if len == 0 {
        // Keep small positive values visible.
        len = 1;
    }
    "█".repeat(len)
}
