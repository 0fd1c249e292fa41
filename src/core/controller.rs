//! Runs the add/delete update cycle between the ledger and a presenter.

use chrono::NaiveDate;
use serde::Serialize;

use super::input::{EntryInput, ItemKey};
use crate::errors::Result;
use crate::ledger::{BudgetSnapshot, EntryKind, Ledger, Percentage};
use crate::presenter::Presenter;

/// What a single cycle produced, as handed to the presenter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CycleReport {
    /// The entry added or removed; `None` when a delete matched nothing.
    pub entry: Option<EntryKind>,
    pub snapshot: BudgetSnapshot,
    pub percentages: Vec<Percentage>,
}

/// Owns the ledger and drives a presenter through the fixed sequence
/// mutate, budget pass, percentage pass.
pub struct Coordinator<P: Presenter> {
    ledger: Ledger,
    presenter: P,
}

impl<P: Presenter> Coordinator<P> {
    pub fn new(presenter: P) -> Self {
        Self::with_ledger(Ledger::new(), presenter)
    }

    pub fn with_ledger(ledger: Ledger, presenter: P) -> Self {
        Self { ledger, presenter }
    }

    /// Shows the month title and an all-zero summary.
    pub fn init(&mut self, today: NaiveDate) {
        tracing::info!("Budgety coordinator started.");
        self.presenter.display_month(today);
        self.presenter.display_budget(&BudgetSnapshot::default());
    }

    /// Validates the input, records it and refreshes the presenter.
    /// Rejected input leaves both the ledger and the presenter untouched.
    pub fn add_item(&mut self, input: EntryInput) -> Result<CycleReport> {
        if let Err(err) = input.validate() {
            tracing::warn!(error = %err, "rejected entry input");
            return Err(err);
        }

        let entry = self
            .ledger
            .add_entry(input.category, input.description, input.value);
        self.presenter.add_list_item(&entry);
        self.presenter.clear_fields();

        let snapshot = self.update_budget();
        let percentages = self.update_percentages();
        tracing::info!(item = %ItemKey::from(&entry), "entry added");

        Ok(CycleReport {
            entry: Some(entry),
            snapshot,
            percentages,
        })
    }

    /// Removes the keyed entry, if present, and refreshes the presenter.
    pub fn delete_item(&mut self, key: ItemKey) -> CycleReport {
        let removed = self.ledger.delete_entry(key.category, key.id);
        self.presenter.delete_list_item(key);

        let snapshot = self.update_budget();
        let percentages = self.update_percentages();
        match &removed {
            Some(_) => tracing::info!(item = %key, "entry deleted"),
            None => tracing::info!(item = %key, "delete matched no entry"),
        }

        CycleReport {
            entry: removed,
            snapshot,
            percentages,
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    fn update_budget(&mut self) -> BudgetSnapshot {
        self.ledger.calculate_budget();
        let snapshot = self.ledger.budget_snapshot();
        self.presenter.display_budget(&snapshot);
        snapshot
    }

    fn update_percentages(&mut self) -> Vec<Percentage> {
        self.ledger.calculate_percentages();
        let percentages = self.ledger.percentages();
        self.presenter.display_percentages(&percentages);
        percentages
    }
}
