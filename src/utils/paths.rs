use dirs::home_dir;
use std::{env, path::PathBuf};

const DEFAULT_DIR_NAME: &str = ".books_core";
const SNAPSHOT_FILE: &str = "books.json";

/// Returns the application-specific data directory, defaulting to `~/.books_core`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("BOOKS_CORE_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Path to the managed snapshot file.
pub fn snapshot_file() -> PathBuf {
    app_data_dir().join(SNAPSHOT_FILE)
}
