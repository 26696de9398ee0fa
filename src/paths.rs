use std::path::PathBuf;

/// Returns the root boardview directory path.
///
/// Resolution order:
/// 1. `BOARDVIEW_ROOT` environment variable (if set)
/// 2. Current working directory + `.boardview`
pub fn boardview_root() -> PathBuf {
    if let Ok(root) = std::env::var("BOARDVIEW_ROOT") {
        PathBuf::from(root)
    } else {
        PathBuf::from(".boardview")
    }
}

/// Returns the path to the default config file.
pub fn config_path() -> PathBuf {
    boardview_root().join("config.yaml")
}
