use chrono::NaiveDate;

use crate::config::Config;
use crate::ledger::{Category, Percentage};

const UNDEFINED_PERCENTAGE: &str = "---";

/// Separators used when rendering amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    pub grouping_separator: char,
    pub decimal_separator: char,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            grouping_separator: ',',
            decimal_separator: '.',
        }
    }
}

impl From<&Config> for NumberFormat {
    fn from(config: &Config) -> Self {
        Self {
            grouping_separator: config.grouping_separator,
            decimal_separator: config.decimal_separator,
        }
    }
}

impl NumberFormat {
    /// Absolute value with two decimals and grouped thousands, prefixed with
    /// `+` for income and `-` for expense.
    pub fn format(&self, value: f64, category: Category) -> String {
        let fixed = format!("{:.2}", value.abs());
        let (int_part, dec_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
        let sign = match category {
            Category::Income => '+',
            Category::Expense => '-',
        };
        format!(
            "{}{}{}{}",
            sign,
            group_digits(int_part, self.grouping_separator),
            self.decimal_separator,
            dec_part
        )
    }

    /// Budget labels read as income only when strictly positive, so a zero
    /// budget renders as `-0.00`.
    pub fn format_budget(&self, budget: f64) -> String {
        let category = if budget > 0.0 {
            Category::Income
        } else {
            Category::Expense
        };
        self.format(budget, category)
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

pub fn format_number(value: f64, category: Category) -> String {
    NumberFormat::default().format(value, category)
}

/// `N%` for a positive share, `---` for zero or the undefined sentinel.
pub fn format_percentage(percentage: Percentage) -> String {
    match percentage.get() {
        Some(value) if value > 0 => format!("{}%", value),
        _ => UNDEFINED_PERCENTAGE.to_string(),
    }
}

/// Title shown above the summary, e.g. `October 2026`.
pub fn month_label(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}
