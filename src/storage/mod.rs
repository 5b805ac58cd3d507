pub mod json_backend;

use crate::{errors::LedgerError, ledger::Ledger};

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Abstraction over persistence backends capable of storing one ledger.
pub trait StorageBackend: Send + Sync {
    fn save(&self, ledger: &Ledger) -> Result<()>;
    fn load(&self) -> Result<Ledger>;
}

pub use json_backend::{load_ledger_from_path, save_ledger_to_path, JsonStore};
