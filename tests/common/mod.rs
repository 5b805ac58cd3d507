use std::path::PathBuf;
use std::sync::Mutex;

use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the
/// test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Returns a data-file path inside a fresh temporary directory.
pub fn temp_data_file() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().join("finance_data.json");
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    path
}
