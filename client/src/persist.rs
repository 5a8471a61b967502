use std::path::{Path, PathBuf};

use crate::BootstrapError;

/// Write `contents` to `path`, creating parent directories and replacing whatever was there.
///
/// Returns the absolute path that was written.
pub fn persist(path: &Path, contents: &str) -> Result<PathBuf, BootstrapError> {
    let fail = |source: std::io::Error| BootstrapError::Persistence {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(fail)?;
    }
    std::fs::write(path, contents).map_err(fail)?;

    let absolute = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    log::info!("Saved final query to {}", absolute.display());
    Ok(absolute)
}
