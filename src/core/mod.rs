//! Coordination between user input, the ledger and presenters.

pub mod controller;
pub mod input;

pub use controller::{Coordinator, CycleReport};
pub use input::{EntryInput, ItemKey};
