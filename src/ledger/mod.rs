//! Income/expense ledger: entry types, identity assignment and derived totals.

pub mod entry;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod percentage;

pub use entry::{Category, Entry, EntryKind, ExpenseEntry};
pub use ledger::{BudgetSnapshot, Ledger, Totals};
pub use percentage::Percentage;
