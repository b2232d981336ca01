//! Application settings and path constants.

use std::path::PathBuf;


/// Refresh interval for `show --live` (seconds).
pub const DEFAULT_REFRESH_INTERVAL: u64 = 5;

/// Environment variable overriding the library location.
pub const DB_PATH_ENV: &str = "EQV_DB";


/// Directory holding the dataset library and exports.
pub fn get_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".equipment-viz")
}


/// Default path of the dataset library.
pub fn get_db_path() -> PathBuf {
    get_data_dir().join("library.db")
}


/// Library path from the command line or environment, else the default.
pub fn resolve_db_path(explicit: Option<PathBuf>) -> PathBuf {
    explicit.unwrap_or_else(get_db_path)
}


/// Whether terminal output should carry ANSI colors.
///
/// `NO_COLOR` (any value) disables colors like `--plain` does.
pub fn use_color(plain: bool) -> bool {
    !plain && std::env::var_os("NO_COLOR").is_none()
}
