use chrono::NaiveDate;
use colored::Colorize;

use super::format::{format_percentage, month_label, NumberFormat};
use super::Presenter;
use crate::config::Config;
use crate::core::ItemKey;
use crate::ledger::{BudgetSnapshot, Category, EntryKind, Percentage};

/// One rendered list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub key: ItemKey,
    pub description: String,
    pub value_label: String,
    /// Only expense rows carry a percentage annotation.
    pub percentage_label: Option<String>,
}

/// Everything currently on screen, kept as plain strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetView {
    pub month: Option<String>,
    pub budget_label: String,
    pub income_label: String,
    pub expenses_label: String,
    pub percentage_label: String,
    pub income_rows: Vec<RowView>,
    pub expense_rows: Vec<RowView>,
}

impl Default for BudgetView {
    fn default() -> Self {
        let format = NumberFormat::default();
        Self {
            month: None,
            budget_label: format.format_budget(0.0),
            income_label: format.format(0.0, Category::Income),
            expenses_label: format.format(0.0, Category::Expense),
            percentage_label: format_percentage(Percentage::UNDEFINED),
            income_rows: Vec::new(),
            expense_rows: Vec::new(),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Style {
    Header,
    Income,
    Expense,
    Detail,
}

/// Presenter that keeps a [`BudgetView`] and renders it as terminal lines.
pub struct TerminalPresenter {
    format: NumberFormat,
    plain_mode: bool,
    high_contrast_mode: bool,
    show_month: bool,
    view: BudgetView,
}

impl Default for TerminalPresenter {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl TerminalPresenter {
    pub fn new(config: &Config) -> Self {
        let mut presenter = Self {
            format: NumberFormat::default(),
            plain_mode: false,
            high_contrast_mode: false,
            show_month: true,
            view: BudgetView::default(),
        };
        presenter.apply_config(config);
        presenter
    }

    /// Switches preferences; labels already rendered keep their old format
    /// until the next cycle redraws them.
    pub fn apply_config(&mut self, config: &Config) {
        self.format = NumberFormat::from(config);
        self.plain_mode = config.plain_mode;
        self.high_contrast_mode = config.high_contrast_mode;
        self.show_month = config.show_month;
    }

    pub fn view(&self) -> &BudgetView {
        &self.view
    }

    pub fn row(&self, key: ItemKey) -> Option<&RowView> {
        self.rows(key.category).iter().find(|row| row.key == key)
    }

    pub fn render_summary(&self) -> Vec<String> {
        let title = match (&self.view.month, self.show_month) {
            (Some(month), true) => format!("Available budget in {}", month),
            _ => "Available budget".to_string(),
        };
        let budget_style = if self.view.budget_label.starts_with('+') {
            Style::Income
        } else {
            Style::Expense
        };
        vec![
            self.style(Style::Header, format!("=== {} ===", title)),
            self.style(budget_style, format!("  {}", self.view.budget_label)),
            self.style(
                Style::Income,
                format!("  {:<10}{}", "Income", self.view.income_label),
            ),
            self.style(
                Style::Expense,
                format!(
                    "  {:<10}{}  {}",
                    "Expenses", self.view.expenses_label, self.view.percentage_label
                ),
            ),
        ]
    }

    pub fn render_list(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for (category, rows) in [
            (Category::Income, &self.view.income_rows),
            (Category::Expense, &self.view.expense_rows),
        ] {
            lines.push(self.style(Style::Header, format!("=== {} ===", category.label())));
            if rows.is_empty() {
                lines.push(self.style(Style::Detail, "  (none)"));
                continue;
            }
            let width = rows
                .iter()
                .map(|row| row.description.chars().count())
                .max()
                .unwrap_or(0);
            let style = match category {
                Category::Income => Style::Income,
                Category::Expense => Style::Expense,
            };
            for row in rows {
                let mut line = format!(
                    "  {:<7} {:<width$}  {:>14}",
                    row.key.to_string(),
                    row.description,
                    row.value_label,
                    width = width
                );
                if let Some(percentage) = &row.percentage_label {
                    line.push_str(&format!("  {:>4}", percentage));
                }
                lines.push(self.style(style, line));
            }
        }
        lines
    }

    fn rows(&self, category: Category) -> &[RowView] {
        match category {
            Category::Income => &self.view.income_rows,
            Category::Expense => &self.view.expense_rows,
        }
    }

    fn rows_mut(&mut self, category: Category) -> &mut Vec<RowView> {
        match category {
            Category::Income => &mut self.view.income_rows,
            Category::Expense => &mut self.view.expense_rows,
        }
    }

    fn style(&self, style: Style, text: impl Into<String>) -> String {
        let text = text.into();
        if self.plain_mode {
            return text;
        }
        if self.high_contrast_mode {
            return text.bold().to_string();
        }
        match style {
            Style::Header => text.bold().to_string(),
            Style::Income => text.green().to_string(),
            Style::Expense => text.red().to_string(),
            Style::Detail => text.dimmed().to_string(),
        }
    }
}

impl Presenter for TerminalPresenter {
    fn display_month(&mut self, today: NaiveDate) {
        self.view.month = Some(month_label(today));
    }

    fn add_list_item(&mut self, entry: &EntryKind) {
        let category = entry.category();
        let row = RowView {
            key: ItemKey::from(entry),
            description: entry.description().to_string(),
            value_label: self.format.format(entry.value(), category),
            percentage_label: match entry {
                EntryKind::Income(_) => None,
                EntryKind::Expense(expense) => Some(format_percentage(expense.percentage())),
            },
        };
        self.rows_mut(category).push(row);
    }

    fn delete_list_item(&mut self, key: ItemKey) {
        let rows = self.rows_mut(key.category);
        if let Some(index) = rows.iter().position(|row| row.key == key) {
            rows.remove(index);
        }
    }

    fn display_budget(&mut self, snapshot: &BudgetSnapshot) {
        self.view.budget_label = self.format.format_budget(snapshot.budget);
        self.view.income_label = self.format.format(snapshot.total_income, Category::Income);
        self.view.expenses_label = self
            .format
            .format(snapshot.total_expense, Category::Expense);
        self.view.percentage_label = format_percentage(snapshot.overall_percentage);
    }

    fn display_percentages(&mut self, percentages: &[Percentage]) {
        for (row, percentage) in self.view.expense_rows.iter_mut().zip(percentages) {
            row.percentage_label = Some(format_percentage(*percentage));
        }
    }
}
