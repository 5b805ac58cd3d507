mod common;

use chrono::NaiveDate;
use ledger_core::{
    ledger::{Ledger, Transaction, TransactionKind},
    storage::{load_ledger_from_path, save_ledger_to_path, JsonStore, StorageBackend},
};
use std::fs;

fn sample_ledger() -> Ledger {
    let mut ledger = Ledger::new();
    ledger.add_transaction(Transaction::new(
        NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
        TransactionKind::Income,
        150000.50,
        "salary",
    ));
    ledger.add_transaction(Transaction::new(
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
        TransactionKind::Expense,
        50000.0,
        "rent",
    ));
    ledger
}

#[test]
fn save_then_load_produces_identical_ledger() {
    let path = common::temp_data_file();
    let store = JsonStore::new(&path);
    let ledger = sample_ledger();

    store.save(&ledger).expect("save ledger");
    let loaded = store.load().expect("load ledger");
    assert_eq!(loaded, ledger);
}

#[test]
fn absent_file_loads_as_empty_ledger() {
    let path = common::temp_data_file();
    let loaded = JsonStore::new(&path).load().expect("load absent file");
    assert!(loaded.is_empty());
    assert!(!path.exists(), "load must not create the file");
}

#[test]
fn structurally_invalid_file_fails_to_load() {
    let path = common::temp_data_file();
    fs::write(&path, "{\"transactions\": [oops").expect("write corrupt file");
    assert!(JsonStore::new(&path).load().is_err());
}

#[test]
fn each_save_rewrites_the_whole_file() {
    let path = common::temp_data_file();
    let store = JsonStore::new(&path);
    let mut ledger = sample_ledger();

    store.save(&ledger).expect("first save");
    ledger.delete_last();
    store.save(&ledger).expect("second save");

    let loaded = load_ledger_from_path(&path).expect("reload");
    assert_eq!(loaded.transaction_count(), 1);
    let raw = fs::read_to_string(&path).expect("read data file");
    assert!(!raw.contains("rent"));
}

#[test]
fn disk_format_uses_external_field_names() {
    let path = common::temp_data_file();
    save_ledger_to_path(&sample_ledger(), &path).expect("save ledger");

    let raw = fs::read_to_string(&path).expect("read data file");
    assert!(raw.contains("\"transactions\""));
    assert!(raw.contains("\"type\": \"income\""));
    assert!(raw.contains("\"type\": \"expense\""));
    assert!(raw.contains("\"desc\": \"salary\""));
    assert!(raw.contains("\"date\": \"2025-01-10\""));
}

#[test]
fn rows_with_unparseable_dates_survive_a_roundtrip() {
    let path = common::temp_data_file();
    let raw = r#"{
  "transactions": [
    { "date": "someday", "type": "expense", "amount": 12.5, "desc": "mystery" }
  ]
}"#;
    fs::write(&path, raw).expect("write hand-edited file");

    let loaded = load_ledger_from_path(&path).expect("structurally valid file loads");
    assert_eq!(loaded.transaction_count(), 1);
    assert_eq!(loaded.transactions[0].parsed_date(), None);

    save_ledger_to_path(&loaded, &path).expect("save back");
    let reloaded = load_ledger_from_path(&path).expect("reload");
    assert_eq!(reloaded, loaded);
}
