//! Discovery of the `.sgc.yaml` configuration file.

use std::path::{Path, PathBuf};

/// File name looked for in the working directory and its ancestors.
pub const CONFIG_FILE_NAME: &str = ".sgc.yaml";

/// Environment variable naming an explicit configuration file.
const CONFIG_FILE_ENV: &str = "SGC_CONFIG";

/// Locate the configuration file for a run started in `start`.
///
/// `SGC_CONFIG` wins when it names an existing file. Otherwise the directory
/// tree is walked upward from `start` until a `.sgc.yaml` is found or the
/// filesystem root is reached.
///
/// # Examples
///
/// ```no_run
/// use sgc_config::find_config_file;
/// use std::path::Path;
///
/// if let Some(path) = find_config_file(Path::new(".")) {
///     println!("Using config at {}", path.display());
/// }
/// ```
pub fn find_config_file(start: &Path) -> Option<PathBuf> {
    if let Some(env_path) = std::env::var_os(CONFIG_FILE_ENV).map(PathBuf::from) {
        if env_path.is_file() {
            return Some(env_path);
        }
    }

    let start = start.canonicalize().ok()?;
    let mut current = start.as_path();
    loop {
        let candidate = current.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) if parent != current => {
                current = parent;
            }
            _ => break, // Reached filesystem root.
        }
    }

    None
}
