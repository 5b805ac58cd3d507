use std::{env, path::PathBuf};

/// Default data file name, resolved against the working directory.
pub const DATA_FILE_NAME: &str = "finance_data.json";

const DATA_FILE_ENV: &str = "LEDGER_CORE_DATA_FILE";

/// Returns the path of the ledger data file, honoring the environment
/// override used by scripted runs and tests.
pub fn data_file_path() -> PathBuf {
    if let Some(custom) = env::var_os(DATA_FILE_ENV) {
        return PathBuf::from(custom);
    }
    PathBuf::from(DATA_FILE_NAME)
}
