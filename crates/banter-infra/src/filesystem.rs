//! Filesystem helpers for Banter.

use std::path::{Path, PathBuf};

/// Resolve the data directory from environment or platform defaults.
///
/// Priority:
/// 1. `BANTER_DATA_DIR` environment variable
/// 2. `~/.banter`
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("BANTER_DATA_DIR") {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".banter");
    }

    // Last resort: current directory
    PathBuf::from(".banter")
}

/// Compute the config file path: `{data_dir}/config.toml`.
pub fn config_path(data_dir: &Path) -> PathBuf {
    data_dir.join("config.toml")
}
