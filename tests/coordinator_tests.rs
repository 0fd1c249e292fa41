mod common;

use budgety::{
    core::{Coordinator, EntryInput, ItemKey},
    ledger::{BudgetSnapshot, Category, Percentage},
    presenter::{format_percentage, TerminalPresenter},
};
use chrono::NaiveDate;
use common::{PresenterCall, RecordingPresenter};

fn income(description: &str, value: f64) -> EntryInput {
    EntryInput::new(Category::Income, description, value)
}

fn expense(description: &str, value: f64) -> EntryInput {
    EntryInput::new(Category::Expense, description, value)
}

#[test]
fn init_shows_month_then_zero_budget() {
    let mut coordinator = Coordinator::new(RecordingPresenter::default());
    let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
    coordinator.init(today);
    assert_eq!(
        coordinator.presenter_mut().take(),
        vec![
            PresenterCall::Month(today),
            PresenterCall::Budget(BudgetSnapshot::default()),
        ]
    );
}

#[test]
fn add_cycle_runs_in_fixed_order() {
    let mut coordinator = Coordinator::new(RecordingPresenter::default());
    coordinator.add_item(income("Salary", 1000.0)).unwrap();
    coordinator.presenter_mut().take();

    let report = coordinator.add_item(expense("Rent", 300.0)).unwrap();
    let key = ItemKey::new(Category::Expense, 0);
    assert_eq!(
        coordinator.presenter_mut().take(),
        vec![
            PresenterCall::AddItem(key),
            PresenterCall::ClearFields,
            PresenterCall::Budget(report.snapshot),
            PresenterCall::Percentages(vec![Percentage::of(300.0, 1000.0)]),
        ]
    );
    assert_eq!(report.snapshot.budget, 700.0);
}

#[test]
fn delete_cycle_runs_in_fixed_order() {
    let mut coordinator = Coordinator::new(RecordingPresenter::default());
    coordinator.add_item(income("Salary", 1000.0)).unwrap();
    coordinator.add_item(expense("Rent", 300.0)).unwrap();
    coordinator.presenter_mut().take();

    let key = ItemKey::new(Category::Income, 0);
    let report = coordinator.delete_item(key);
    assert_eq!(report.entry.map(|entry| entry.value()), Some(1000.0));
    assert_eq!(
        coordinator.presenter_mut().take(),
        vec![
            PresenterCall::DeleteItem(key),
            PresenterCall::Budget(report.snapshot),
            PresenterCall::Percentages(vec![Percentage::UNDEFINED]),
        ]
    );
}

#[test]
fn rejected_input_reaches_neither_ledger_nor_presenter() {
    let mut coordinator = Coordinator::new(RecordingPresenter::default());
    for input in [
        income("", 10.0),
        income("  ", 10.0),
        expense("Rent", 0.0),
        expense("Rent", -1.0),
        expense("Rent", f64::NAN),
        expense("Rent", f64::INFINITY),
    ] {
        assert!(coordinator.add_item(input).is_err());
    }
    assert!(coordinator.ledger().is_empty());
    assert!(coordinator.presenter().calls.is_empty());
}

#[test]
fn terminal_rows_track_ledger_entries() {
    let mut coordinator = Coordinator::new(TerminalPresenter::default());
    coordinator.add_item(income("Salary", 2500.0)).unwrap();
    coordinator.add_item(expense("Rent", 900.0)).unwrap();
    coordinator.add_item(expense("Food", 250.0)).unwrap();
    coordinator.add_item(expense("Gym", 40.0)).unwrap();
    coordinator.delete_item(ItemKey::new(Category::Expense, 1));
    coordinator.add_item(income("Bonus", 500.0)).unwrap();

    let ledger = coordinator.ledger();
    let view = coordinator.presenter().view();

    let ledger_keys: Vec<_> = ledger
        .expenses()
        .iter()
        .map(|expense| ItemKey::new(Category::Expense, expense.entry.id))
        .collect();
    let row_keys: Vec<_> = view.expense_rows.iter().map(|row| row.key).collect();
    assert_eq!(row_keys, ledger_keys);
    assert_eq!(view.income_rows.len(), ledger.income().len());

    for (row, percentage) in view.expense_rows.iter().zip(ledger.percentages()) {
        assert_eq!(
            row.percentage_label.as_deref(),
            Some(format_percentage(percentage).as_str())
        );
    }
    assert_eq!(view.budget_label, "+2,060.00");
    assert_eq!(view.percentage_label, "31%");
}

#[test]
fn readding_after_tail_delete_reuses_row_key() {
    let mut coordinator = Coordinator::new(TerminalPresenter::default());
    coordinator.add_item(expense("A", 1.0)).unwrap();
    coordinator.add_item(expense("B", 1.0)).unwrap();
    coordinator.delete_item(ItemKey::new(Category::Expense, 1));
    let report = coordinator.add_item(expense("C", 1.0)).unwrap();
    let key = ItemKey::from(report.entry.as_ref().unwrap());
    assert_eq!(key.to_string(), "exp-1");
    let row = coordinator.presenter().row(key).unwrap();
    assert_eq!(row.description, "C");
}

#[test]
fn zero_shares_render_as_dashes() {
    let mut coordinator = Coordinator::new(TerminalPresenter::default());
    let report = coordinator.add_item(income("Salary", 1000.0)).unwrap();
    assert_eq!(report.snapshot.overall_percentage, Percentage::of(0.0, 1000.0));
    assert_eq!(coordinator.presenter().view().percentage_label, "---");

    coordinator.add_item(expense("Gum", 1.0)).unwrap();
    let view = coordinator.presenter().view();
    assert_eq!(view.percentage_label, "---");
    assert_eq!(view.expense_rows[0].percentage_label.as_deref(), Some("---"));
}
