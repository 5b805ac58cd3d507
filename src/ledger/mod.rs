//! Ledger domain models, persistence-friendly types, and helpers.

#[allow(clippy::module_inception)]
pub mod ledger;
pub mod summary;
pub mod transaction;

pub use ledger::Ledger;
pub use summary::{MonthKey, MonthlySummary};
pub use transaction::{Transaction, TransactionKind};
