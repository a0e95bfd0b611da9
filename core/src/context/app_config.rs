use std::path::{Path, PathBuf};

use fragstat_types::AppConfig;

/// Name under which confy stores the configuration file.
pub const APP_NAME: &str = "fragstat";

/// Load the user configuration from an explicit file, or from the platform
/// config directory when `path` is None. confy creates the file with default
/// values when it does not exist yet.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, confy::ConfyError> {
    match path {
        Some(path) => confy::load_path(path),
        None => confy::load(APP_NAME, None),
    }
}

/// Resolve a log file path, joining with log_directory if relative.
pub fn resolve_log_path(config: &AppConfig, path: &Path) -> PathBuf {
    if path.is_absolute() || config.log_directory.is_empty() {
        path.to_path_buf()
    } else {
        Path::new(&config.log_directory).join(path)
    }
}
