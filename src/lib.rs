#![doc(test(attr(deny(warnings))))]

//! Budgety tracks income and expense entries in memory and derives running
//! totals, the net budget, and each expense's share of income.
//!
//! ```
//! use budgety::ledger::{Category, Ledger};
//!
//! let mut ledger = Ledger::new();
//! ledger.add_entry(Category::Income, "Salary", 1000.0);
//! ledger.add_entry(Category::Expense, "Rent", 300.0);
//! ledger.calculate_budget();
//! ledger.calculate_percentages();
//!
//! assert_eq!(ledger.budget_snapshot().budget, 700.0);
//! assert_eq!(ledger.percentages()[0].get(), Some(30));
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod ledger;
pub mod presenter;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Budgety tracing initialized.");
    });
}
