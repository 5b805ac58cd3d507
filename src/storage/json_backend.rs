use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::ledger::Ledger;

use super::{Result, StorageBackend};

/// Whole-file JSON persistence for a single ledger.
///
/// Every save rewrites the file in place. No rename dance, no backup chain:
/// one process owns the file for its lifetime.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageBackend for JsonStore {
    fn save(&self, ledger: &Ledger) -> Result<()> {
        save_ledger_to_path(ledger, &self.path)
    }

    fn load(&self) -> Result<Ledger> {
        load_ledger_from_path(&self.path)
    }
}

pub fn save_ledger_to_path(ledger: &Ledger, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(ledger)?;
    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())?;
    file.flush()?;
    tracing::debug!(
        path = %path.display(),
        transactions = ledger.transaction_count(),
        "ledger saved"
    );
    Ok(())
}

/// A missing file reads as an empty ledger; an existing file that is not
/// valid JSON propagates the error.
pub fn load_ledger_from_path(path: &Path) -> Result<Ledger> {
    if !path.exists() {
        return Ok(Ledger::default());
    }
    let data = fs::read_to_string(path)?;
    let ledger: Ledger = serde_json::from_str(&data)?;
    tracing::debug!(
        path = %path.display(),
        transactions = ledger.transaction_count(),
        "ledger loaded"
    );
    Ok(ledger)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{Transaction, TransactionKind};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn store_with_temp_dir() -> (JsonStore, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let store = JsonStore::new(temp.path().join("finance_data.json"));
        (store, temp)
    }

    fn sample_ledger() -> Ledger {
        let mut ledger = Ledger::new();
        ledger.add_transaction(Transaction::new(
            NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
            TransactionKind::Income,
            150000.50,
            "salary",
        ));
        ledger
    }

    #[test]
    fn save_and_load_roundtrip() {
        let (store, _guard) = store_with_temp_dir();
        let ledger = sample_ledger();
        store.save(&ledger).expect("save ledger");
        let loaded = store.load().expect("load ledger");
        assert_eq!(loaded, ledger);
    }

    #[test]
    fn missing_file_loads_as_empty() {
        let (store, _guard) = store_with_temp_dir();
        let loaded = store.load().expect("load absent file");
        assert!(loaded.is_empty());
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let (store, _guard) = store_with_temp_dir();
        fs::write(store.path(), "{not json").expect("write corrupt data");
        assert!(store.load().is_err());
    }

    #[test]
    fn save_overwrites_previous_contents() {
        let (store, _guard) = store_with_temp_dir();
        let mut ledger = sample_ledger();
        store.save(&ledger).expect("first save");
        ledger.delete_last();
        store.save(&ledger).expect("second save");

        let raw = fs::read_to_string(store.path()).expect("read data file");
        assert!(!raw.contains("salary"));
        let loaded = store.load().expect("reload");
        assert!(loaded.is_empty());
    }
}
