//! Scratch directory lifecycle.

use std::fs;
use std::path::{Path, PathBuf};

use crate::FileOpsError;

/// Deletes `path` if it exists and recreates it empty.
///
/// Refuses filesystem roots, the current directory, the home directory and
/// any of their ancestors.
pub fn reset_dir(path: &Path) -> Result<(), FileOpsError> {
    let cwd = std::env::current_dir().ok();
    reset_dir_guarded(path, cwd.as_deref(), home_dir().as_deref())
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .filter(|h| !h.is_empty())
        .map(PathBuf::from)
}

/// Inner implementation with explicit protected directories, for testability.
fn reset_dir_guarded(
    path: &Path,
    cwd: Option<&Path>,
    home: Option<&Path>,
) -> Result<(), FileOpsError> {
    let refuse = |reason: &str| FileOpsError::UnsafeReset {
        path: path.to_path_buf(),
        reason: reason.into(),
    };

    if path.as_os_str().is_empty() || path.parent().is_none() {
        return Err(refuse("path is empty or a filesystem root"));
    }

    // Nothing to delete when the path does not resolve.
    if let Ok(abs) = fs::canonicalize(path) {
        if abs.parent().is_none() {
            return Err(refuse("path is a filesystem root"));
        }
        if let Some(cwd) = cwd.map(canonical_or_self) {
            if cwd.starts_with(&abs) {
                return Err(refuse("path is the current directory or one of its parents"));
            }
        }
        if let Some(home) = home.map(canonical_or_self) {
            if home.starts_with(&abs) {
                return Err(refuse("path is the home directory or one of its parents"));
            }
        }
    }

    if path.is_dir() {
        fs::remove_dir_all(path).map_err(|e| FileOpsError::io(path, e))?;
        tracing::debug!(path = %path.display(), "removed previous working directory");
    } else if path.exists() {
        fs::remove_file(path).map_err(|e| FileOpsError::io(path, e))?;
    }

    fs::create_dir_all(path).map_err(|e| FileOpsError::io(path, e))?;
    Ok(())
}

fn canonical_or_self(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
