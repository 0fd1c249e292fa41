mod common;

use budgety::ledger::{BudgetSnapshot, Category, Ledger, Percentage};
use common::assert_close;

fn pct(value: i32) -> Percentage {
    Percentage::of(f64::from(value), 100.0)
}

fn recalc(ledger: &mut Ledger) {
    ledger.calculate_budget();
    ledger.calculate_percentages();
}

#[test]
fn salary_rent_food_walkthrough() {
    let mut ledger = Ledger::new();

    let salary = ledger.add_entry(Category::Income, "Salary", 1000.0);
    assert_eq!(salary.id(), 0);
    ledger.calculate_budget();
    assert_eq!(
        ledger.budget_snapshot(),
        BudgetSnapshot {
            budget: 1000.0,
            total_income: 1000.0,
            total_expense: 0.0,
            // Income is positive, so the share is a defined 0%, not the sentinel.
            overall_percentage: pct(0),
        }
    );

    let rent = ledger.add_entry(Category::Expense, "Rent", 300.0);
    assert_eq!(rent.id(), 0);
    recalc(&mut ledger);
    let snapshot = ledger.budget_snapshot();
    assert_close(snapshot.budget, 700.0);
    assert_close(snapshot.total_expense, 300.0);
    assert_eq!(snapshot.overall_percentage, pct(30));
    assert_eq!(ledger.percentages(), vec![pct(30)]);

    let food = ledger.add_entry(Category::Expense, "Food", 200.0);
    assert_eq!(food.id(), 1);
    recalc(&mut ledger);
    let snapshot = ledger.budget_snapshot();
    assert_close(snapshot.total_expense, 500.0);
    assert_close(snapshot.budget, 500.0);
    assert_eq!(snapshot.overall_percentage, pct(50));
    assert_eq!(ledger.percentages(), vec![pct(30), pct(20)]);

    ledger.delete_entry(Category::Expense, 0);
    recalc(&mut ledger);
    let after_delete = ledger.budget_snapshot();
    assert_close(after_delete.total_expense, 200.0);
    assert_close(after_delete.budget, 800.0);
    assert_eq!(ledger.percentages(), vec![pct(20)]);
    assert_eq!(ledger.expenses()[0].entry.description, "Food");

    assert!(ledger.delete_entry(Category::Expense, 0).is_none());
    recalc(&mut ledger);
    assert_eq!(ledger.budget_snapshot(), after_delete);
    assert_eq!(ledger.percentages(), vec![pct(20)]);
}

#[test]
fn fresh_ledger_reports_zero_budget() {
    let mut ledger = Ledger::new();
    ledger.calculate_budget();
    assert_eq!(
        ledger.budget_snapshot(),
        BudgetSnapshot {
            budget: 0.0,
            total_income: 0.0,
            total_expense: 0.0,
            overall_percentage: Percentage::UNDEFINED,
        }
    );
}

#[test]
fn totals_match_sums_after_mixed_operations() {
    let mut ledger = Ledger::new();
    let values = [12.5, 0.1, 0.2, 99.99, 1500.0, 3.3];
    for (idx, value) in values.iter().enumerate() {
        let category = if idx % 2 == 0 {
            Category::Income
        } else {
            Category::Expense
        };
        ledger.add_entry(category, format!("item {idx}"), *value);
    }
    ledger.delete_entry(Category::Income, 1);
    ledger.delete_entry(Category::Expense, 0);
    ledger.calculate_budget();

    let income: f64 = ledger.income().iter().map(|entry| entry.value).sum();
    let expense: f64 = ledger
        .expenses()
        .iter()
        .map(|expense| expense.entry.value)
        .sum();
    let totals = ledger.totals();
    assert_close(totals.income, income);
    assert_close(totals.expense, expense);
    assert_close(ledger.budget_snapshot().budget, income - expense);
}

#[test]
fn income_and_expense_ids_are_independent() {
    let mut ledger = Ledger::new();
    for _ in 0..3 {
        ledger.add_entry(Category::Income, "Gig", 10.0);
    }
    let first_expense = ledger.add_entry(Category::Expense, "Bus", 2.0);
    let fourth_income = ledger.add_entry(Category::Income, "Gig", 10.0);
    assert_eq!(first_expense.id(), 0);
    assert_eq!(fourth_income.id(), 3);
}

#[test]
fn zero_income_marks_every_percentage_undefined() {
    let mut ledger = Ledger::new();
    ledger.add_entry(Category::Expense, "Rent", 300.0);
    ledger.add_entry(Category::Expense, "Food", 200.0);
    recalc(&mut ledger);
    assert_eq!(ledger.budget_snapshot().overall_percentage, Percentage::UNDEFINED);
    assert!(ledger.percentages().iter().all(|p| !p.is_defined()));
}

#[test]
fn percentage_pass_reads_last_budget_totals() {
    let mut ledger = Ledger::new();
    ledger.add_entry(Category::Income, "Salary", 1000.0);
    ledger.add_entry(Category::Expense, "Rent", 300.0);

    // No budget pass yet: income total is still the initial zero.
    ledger.calculate_percentages();
    assert_eq!(ledger.percentages(), vec![Percentage::UNDEFINED]);

    ledger.calculate_budget();
    ledger.delete_entry(Category::Income, 0);
    ledger.calculate_percentages();
    assert_eq!(ledger.percentages(), vec![pct(30)]);
}
