#![allow(dead_code)]

use budgety::{
    core::ItemKey,
    ledger::{BudgetSnapshot, EntryKind, Percentage},
    presenter::Presenter,
};
use chrono::NaiveDate;

/// Presenter calls in the order the coordinator made them.
#[derive(Debug, Clone, PartialEq)]
pub enum PresenterCall {
    Month(NaiveDate),
    AddItem(ItemKey),
    DeleteItem(ItemKey),
    ClearFields,
    Budget(BudgetSnapshot),
    Percentages(Vec<Percentage>),
}

#[derive(Debug, Default)]
pub struct RecordingPresenter {
    pub calls: Vec<PresenterCall>,
}

impl RecordingPresenter {
    pub fn take(&mut self) -> Vec<PresenterCall> {
        std::mem::take(&mut self.calls)
    }
}

impl Presenter for RecordingPresenter {
    fn display_month(&mut self, today: NaiveDate) {
        self.calls.push(PresenterCall::Month(today));
    }

    fn add_list_item(&mut self, entry: &EntryKind) {
        self.calls.push(PresenterCall::AddItem(ItemKey::from(entry)));
    }

    fn delete_list_item(&mut self, key: ItemKey) {
        self.calls.push(PresenterCall::DeleteItem(key));
    }

    fn clear_fields(&mut self) {
        self.calls.push(PresenterCall::ClearFields);
    }

    fn display_budget(&mut self, snapshot: &BudgetSnapshot) {
        self.calls.push(PresenterCall::Budget(*snapshot));
    }

    fn display_percentages(&mut self, percentages: &[Percentage]) {
        self.calls.push(PresenterCall::Percentages(percentages.to_vec()));
    }
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
