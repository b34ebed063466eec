use crate::paths;
use std::path::PathBuf;

/// Load config file content
///
/// Searches in order:
/// 1. `.action-schema.toml` in the current working directory
/// 2. `.action-schema.toml` in the home directory
/// 3. `config.toml` in the platform config directory
///
/// Returns the path and content of the first readable file, None otherwise.
pub fn load_config_file() -> Option<(PathBuf, String)> {
    let candidates = [
        paths::local_config_path().ok(),
        paths::home_config_path(),
        paths::global_config_path().ok(),
    ];

    for path in candidates.into_iter().flatten() {
        if let Ok(content) = std::fs::read_to_string(&path) {
            log::debug!("Loaded config from {}", path.display());
            return Some((path, content));
        }
    }

    None
}
