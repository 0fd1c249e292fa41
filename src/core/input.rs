//! Validated user input and row keys passed between the shell, the
//! coordinator and presenters.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::{BudgetError, Result};
use crate::ledger::{Category, EntryKind};

/// Raw add-form values. The ledger trusts its caller, so [`EntryInput::validate`]
/// is the only gate between user text and ledger state.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryInput {
    pub category: Category,
    pub description: String,
    pub value: f64,
}

impl EntryInput {
    pub fn new(category: Category, description: impl Into<String>, value: f64) -> Self {
        Self {
            category,
            description: description.into(),
            value,
        }
    }

    /// Builds an input from form text, parsing the amount.
    pub fn parse(category: &str, description: &str, raw_value: &str) -> Result<Self> {
        let category = category.parse::<Category>()?;
        let value = raw_value.trim().parse::<f64>().map_err(|_| {
            BudgetError::InvalidInput(format!("`{}` is not a number", raw_value.trim()))
        })?;
        Ok(Self::new(category, description.trim(), value))
    }

    pub fn validate(&self) -> Result<()> {
        if self.description.trim().is_empty() {
            return Err(BudgetError::InvalidInput(
                "description must not be empty".into(),
            ));
        }
        if !self.value.is_finite() {
            return Err(BudgetError::InvalidInput(format!(
                "value must be a finite number, got {}",
                self.value
            )));
        }
        if self.value <= 0.0 {
            return Err(BudgetError::InvalidInput(format!(
                "value must be positive, got {}",
                self.value
            )));
        }
        Ok(())
    }
}

/// Identifies a rendered row as `inc-<id>` or `exp-<id>`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ItemKey {
    pub category: Category,
    pub id: u32,
}

impl ItemKey {
    pub fn new(category: Category, id: u32) -> Self {
        Self { category, id }
    }
}

impl From<&EntryKind> for ItemKey {
    fn from(entry: &EntryKind) -> Self {
        Self::new(entry.category(), entry.id())
    }
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.category.code(), self.id)
    }
}

impl FromStr for ItemKey {
    type Err = BudgetError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid =
            || BudgetError::InvalidInput(format!("invalid item `{}` (use inc-N or exp-N)", s));
        let (category, id) = s.trim().split_once('-').ok_or_else(invalid)?;
        let category = match category {
            "inc" => Category::Income,
            "exp" => Category::Expense,
            _ => return Err(invalid()),
        };
        let id = id.parse::<u32>().map_err(|_| invalid())?;
        Ok(Self::new(category, id))
    }
}
