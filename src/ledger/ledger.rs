use serde::{Deserialize, Serialize};

use super::{
    entry::{Category, Entry, EntryKind, ExpenseEntry},
    percentage::Percentage,
};

/// Sums of entry values per category, as of the last budget pass.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Totals {
    pub income: f64,
    pub expense: f64,
}

/// Derived summary handed to presenters after a budget pass.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BudgetSnapshot {
    pub budget: f64,
    pub total_income: f64,
    pub total_expense: f64,
    pub overall_percentage: Percentage,
}

impl Default for BudgetSnapshot {
    fn default() -> Self {
        Self {
            budget: 0.0,
            total_income: 0.0,
            total_expense: 0.0,
            overall_percentage: Percentage::UNDEFINED,
        }
    }
}

/// In-memory income/expense ledger.
///
/// Derived state (totals, budget, percentages) is recomputed only when the
/// caller asks for it: mutate first, then [`Ledger::calculate_budget`], then
/// [`Ledger::calculate_percentages`]. Between passes the derived values are
/// stale by contract.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ledger {
    income: Vec<Entry>,
    expenses: Vec<ExpenseEntry>,
    totals: Totals,
    budget: f64,
    overall_percentage: Percentage,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new entry and returns it with its assigned id.
    ///
    /// The id is the last entry's id in the same category plus one, or `0`
    /// for an empty category. Ids are therefore only unique among entries
    /// currently present: deleting the tail and re-adding can hand out an id
    /// that an earlier, since-deleted entry used.
    pub fn add_entry(
        &mut self,
        category: Category,
        description: impl Into<String>,
        value: f64,
    ) -> EntryKind {
        let id = self.next_id(category);
        let entry = Entry::new(id, description, value);
        tracing::debug!(category = %category, id, value, "adding ledger entry");
        match category {
            Category::Income => {
                self.income.push(entry.clone());
                EntryKind::Income(entry)
            }
            Category::Expense => {
                let expense = ExpenseEntry::new(entry);
                self.expenses.push(expense.clone());
                EntryKind::Expense(expense)
            }
        }
    }

    /// Removes the entry matching `(category, id)`; unknown ids are ignored.
    pub fn delete_entry(&mut self, category: Category, id: u32) -> Option<EntryKind> {
        let removed = match category {
            Category::Income => self
                .income
                .iter()
                .position(|entry| entry.id == id)
                .map(|index| EntryKind::Income(self.income.remove(index))),
            Category::Expense => self
                .expenses
                .iter()
                .position(|expense| expense.entry.id == id)
                .map(|index| EntryKind::Expense(self.expenses.remove(index))),
        };
        match &removed {
            Some(_) => tracing::debug!(category = %category, id, "deleted ledger entry"),
            None => tracing::debug!(category = %category, id, "delete ignored, no such entry"),
        }
        removed
    }

    /// Full recompute of totals, budget and the overall expense share.
    pub fn calculate_budget(&mut self) {
        self.totals = Totals {
            income: self.income.iter().map(|entry| entry.value).sum(),
            expense: self.expenses.iter().map(|expense| expense.entry.value).sum(),
        };
        self.budget = self.totals.income - self.totals.expense;
        self.overall_percentage = Percentage::of(self.totals.expense, self.totals.income);
        tracing::debug!(
            income = self.totals.income,
            expense = self.totals.expense,
            budget = self.budget,
            "budget recalculated"
        );
    }

    /// Updates every expense share against the income total of the last
    /// budget pass. Income is not re-summed here.
    pub fn calculate_percentages(&mut self) {
        let total_income = self.totals.income;
        for expense in &mut self.expenses {
            expense.calc_percentage(total_income);
        }
    }

    /// Expense shares in list order, as of the last percentage pass.
    pub fn percentages(&self) -> Vec<Percentage> {
        self.expenses
            .iter()
            .map(ExpenseEntry::percentage)
            .collect()
    }

    pub fn budget_snapshot(&self) -> BudgetSnapshot {
        BudgetSnapshot {
            budget: self.budget,
            total_income: self.totals.income,
            total_expense: self.totals.expense,
            overall_percentage: self.overall_percentage,
        }
    }

    pub fn income(&self) -> &[Entry] {
        &self.income
    }

    pub fn expenses(&self) -> &[ExpenseEntry] {
        &self.expenses
    }

    pub fn totals(&self) -> Totals {
        self.totals
    }

    pub fn entry(&self, category: Category, id: u32) -> Option<EntryKind> {
        match category {
            Category::Income => self
                .income
                .iter()
                .find(|entry| entry.id == id)
                .cloned()
                .map(EntryKind::Income),
            Category::Expense => self
                .expenses
                .iter()
                .find(|expense| expense.entry.id == id)
                .cloned()
                .map(EntryKind::Expense),
        }
    }

    pub fn len(&self, category: Category) -> usize {
        match category {
            Category::Income => self.income.len(),
            Category::Expense => self.expenses.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.income.is_empty() && self.expenses.is_empty()
    }

    fn next_id(&self, category: Category) -> u32 {
        let last = match category {
            Category::Income => self.income.last().map(|entry| entry.id),
            Category::Expense => self.expenses.last().map(|expense| expense.entry.id),
        };
        last.map_or(0, |id| id + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn salary_and_rent() -> Ledger {
        let mut ledger = Ledger::new();
        ledger.add_entry(Category::Income, "Salary", 1000.0);
        ledger.add_entry(Category::Expense, "Rent", 300.0);
        ledger
    }

    #[test]
    fn first_entry_in_category_gets_id_zero() {
        let mut ledger = Ledger::new();
        let income = ledger.add_entry(Category::Income, "Salary", 1000.0);
        let expense = ledger.add_entry(Category::Expense, "Rent", 300.0);
        assert_eq!(income.id(), 0);
        assert_eq!(expense.id(), 0);
        assert_eq!(income.category(), Category::Income);
        assert_eq!(expense.category(), Category::Expense);
    }

    #[test]
    fn ids_follow_last_entry() {
        let mut ledger = Ledger::new();
        for value in [10.0, 20.0, 30.0] {
            ledger.add_entry(Category::Income, "Gig", value);
        }
        ledger.delete_entry(Category::Income, 1);
        let next = ledger.add_entry(Category::Income, "Bonus", 5.0);
        assert_eq!(next.id(), 3);
    }

    #[test]
    fn deleting_tail_reuses_its_id() {
        let mut ledger = Ledger::new();
        ledger.add_entry(Category::Expense, "A", 1.0);
        ledger.add_entry(Category::Expense, "B", 1.0);
        ledger.add_entry(Category::Expense, "C", 1.0);
        ledger.delete_entry(Category::Expense, 1);
        ledger.delete_entry(Category::Expense, 2);
        // Only id 0 remains, so the sequence resumes at 1 even though 1 and 2 were used.
        let reused = ledger.add_entry(Category::Expense, "D", 1.0);
        assert_eq!(reused.id(), 1);
    }

    #[test]
    fn categories_number_independently() {
        let mut ledger = Ledger::new();
        ledger.add_entry(Category::Income, "A", 1.0);
        ledger.add_entry(Category::Income, "B", 1.0);
        let expense = ledger.add_entry(Category::Expense, "C", 1.0);
        assert_eq!(expense.id(), 0);
        assert_eq!(ledger.len(Category::Income), 2);
        assert_eq!(ledger.len(Category::Expense), 1);
    }

    #[test]
    fn mutations_leave_derived_state_stale() {
        let mut ledger = salary_and_rent();
        assert_eq!(ledger.budget_snapshot(), BudgetSnapshot::default());
        ledger.calculate_budget();
        ledger.add_entry(Category::Income, "Bonus", 500.0);
        assert!((ledger.totals().income - 1000.0).abs() < EPSILON);
    }

    #[test]
    fn budget_pass_sums_and_subtracts() {
        let mut ledger = salary_and_rent();
        ledger.add_entry(Category::Expense, "Food", 0.1);
        ledger.add_entry(Category::Expense, "Bus", 0.2);
        ledger.calculate_budget();
        let snapshot = ledger.budget_snapshot();
        assert!((snapshot.total_income - 1000.0).abs() < EPSILON);
        assert!((snapshot.total_expense - 300.3).abs() < EPSILON);
        assert!(
            (snapshot.budget - (snapshot.total_income - snapshot.total_expense)).abs() < EPSILON
        );
        assert_eq!(snapshot.overall_percentage.value(), 30);
    }

    #[test]
    fn zero_income_yields_sentinels() {
        let mut ledger = Ledger::new();
        ledger.add_entry(Category::Expense, "Rent", 300.0);
        ledger.calculate_budget();
        ledger.calculate_percentages();
        let snapshot = ledger.budget_snapshot();
        assert_eq!(snapshot.overall_percentage, Percentage::UNDEFINED);
        assert!((snapshot.budget + 300.0).abs() < EPSILON);
        assert_eq!(ledger.percentages(), vec![Percentage::UNDEFINED]);
    }

    #[test]
    fn percentages_without_budget_pass_use_stale_income() {
        let mut ledger = salary_and_rent();
        ledger.calculate_percentages();
        assert_eq!(ledger.percentages(), vec![Percentage::UNDEFINED]);

        ledger.calculate_budget();
        ledger.add_entry(Category::Income, "Bonus", 1000.0);
        ledger.calculate_percentages();
        assert_eq!(ledger.percentages()[0].value(), 30);
    }

    #[test]
    fn missing_delete_is_a_no_op() {
        let mut ledger = salary_and_rent();
        ledger.calculate_budget();
        let before = ledger.budget_snapshot();
        assert!(ledger.delete_entry(Category::Expense, 7).is_none());
        assert!(ledger.delete_entry(Category::Income, 1).is_none());
        ledger.calculate_budget();
        assert_eq!(ledger.budget_snapshot(), before);
        assert_eq!(ledger.len(Category::Expense), 1);
        assert_eq!(ledger.len(Category::Income), 1);
    }

    #[test]
    fn delete_returns_removed_entry() {
        let mut ledger = salary_and_rent();
        let removed = ledger
            .delete_entry(Category::Expense, 0)
            .expect("rent is present");
        assert_eq!(removed.description(), "Rent");
        assert!(ledger.entry(Category::Expense, 0).is_none());
        assert!(ledger.entry(Category::Income, 0).is_some());
    }

    #[test]
    fn fresh_ledger_budget_is_zero() {
        let mut ledger = Ledger::new();
        assert!(ledger.is_empty());
        ledger.calculate_budget();
        assert_eq!(ledger.budget_snapshot(), BudgetSnapshot::default());
        assert!(ledger.percentages().is_empty());
    }
}
