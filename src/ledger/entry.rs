use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::percentage::Percentage;
use crate::errors::BudgetError;

/// The two disjoint entry collections held by a ledger.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Income,
    Expense,
}

impl Category {
    /// Short code used in item keys and CLI arguments.
    pub fn code(self) -> &'static str {
        match self {
            Category::Income => "inc",
            Category::Expense => "exp",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Income => "Income",
            Category::Expense => "Expense",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Category {
    type Err = BudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "inc" | "income" => Ok(Category::Income),
            "exp" | "expense" => Ok(Category::Expense),
            other => Err(BudgetError::InvalidInput(format!(
                "unknown category `{}` (use inc or exp)",
                other
            ))),
        }
    }
}

/// A single recorded line: identity, free-form description and amount.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Entry {
    pub id: u32,
    pub description: String,
    pub value: f64,
}

impl Entry {
    pub fn new(id: u32, description: impl Into<String>, value: f64) -> Self {
        Self {
            id,
            description: description.into(),
            value,
        }
    }
}

/// An expense line together with its share of total income.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpenseEntry {
    #[serde(flatten)]
    pub entry: Entry,
    pub percentage: Percentage,
}

impl ExpenseEntry {
    pub fn new(entry: Entry) -> Self {
        Self {
            entry,
            percentage: Percentage::UNDEFINED,
        }
    }

    /// Recomputes the share of `total_income`; leaves the sentinel when income is zero.
    pub fn calc_percentage(&mut self, total_income: f64) {
        self.percentage = Percentage::of(self.entry.value, total_income);
    }

    pub fn percentage(&self) -> Percentage {
        self.percentage
    }
}

/// Tagged view of an entry as returned by ledger mutations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "category", rename_all = "lowercase")]
pub enum EntryKind {
    Income(Entry),
    Expense(ExpenseEntry),
}

impl EntryKind {
    pub fn category(&self) -> Category {
        match self {
            EntryKind::Income(_) => Category::Income,
            EntryKind::Expense(_) => Category::Expense,
        }
    }

    pub fn entry(&self) -> &Entry {
        match self {
            EntryKind::Income(entry) => entry,
            EntryKind::Expense(expense) => &expense.entry,
        }
    }

    pub fn id(&self) -> u32 {
        self.entry().id
    }

    pub fn description(&self) -> &str {
        &self.entry().description
    }

    pub fn value(&self) -> f64 {
        self.entry().value
    }
}
