use std::fmt;

use serde::{Deserialize, Serialize};

/// Rounded integer share of income, or `-1` when income is zero or not yet computed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Percentage(i32);

impl Percentage {
    pub const UNDEFINED: Percentage = Percentage(-1);

    /// `round(part / total * 100)`, or the sentinel when `total` is not positive.
    pub fn of(part: f64, total: f64) -> Self {
        if total > 0.0 {
            Percentage((part / total * 100.0).round() as i32)
        } else {
            Self::UNDEFINED
        }
    }

    pub fn value(self) -> i32 {
        self.0
    }

    pub fn is_defined(self) -> bool {
        self.0 != Self::UNDEFINED.0
    }

    pub fn get(self) -> Option<u32> {
        if self.is_defined() {
            u32::try_from(self.0).ok()
        } else {
            None
        }
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::UNDEFINED
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
