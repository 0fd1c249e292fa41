//! Rendering of ledger results: the [`Presenter`] seam used by the
//! coordinator, number formatting, and the terminal implementation.

pub mod format;
pub mod terminal;

use chrono::NaiveDate;

use crate::core::ItemKey;
use crate::ledger::{BudgetSnapshot, EntryKind, Percentage};

pub use format::{format_number, format_percentage, month_label, NumberFormat};
pub use terminal::{BudgetView, RowView, TerminalPresenter};

/// Receives the results of each coordinator cycle.
pub trait Presenter {
    fn display_month(&mut self, today: NaiveDate);

    /// Renders a freshly added entry as a new row at the end of its list.
    fn add_list_item(&mut self, entry: &EntryKind);

    /// Removes a row; unknown keys are ignored.
    fn delete_list_item(&mut self, key: ItemKey);

    /// Resets pending input after a successful add.
    fn clear_fields(&mut self) {}

    fn display_budget(&mut self, snapshot: &BudgetSnapshot);

    /// Annotates expense rows, in list order, with their share of income.
    fn display_percentages(&mut self, percentages: &[Percentage]);
}
