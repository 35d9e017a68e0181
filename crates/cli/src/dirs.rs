//! Platform-specific directory utilities

use std::path::PathBuf;

/// Get the platform-specific data directory for the roster
///
/// Follows platform conventions:
/// - macOS: `~/Library/Application Support/roster`
/// - Linux: `~/.local/share/roster` (or `$XDG_DATA_HOME/roster`)
/// - Windows: `%APPDATA%\roster`
/// - Fallback: `./data`
pub fn data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "roster")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./data"))
}

/// Default roster document path.
pub fn default_data_file() -> PathBuf {
    data_dir().join("characters.json")
}
