//! Copies the translation components into the game directory.

use std::fs;
use std::path::Path;

use crate::copy::copy_dir_recursive;
use crate::{DLL_NAME, FileOpsError, UPDATE_DIR};

/// Outcome for a single component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentStatus {
    Installed { files: u64 },
    /// Not present in the extracted archive; skipped with a warning.
    Missing,
}

impl ComponentStatus {
    pub fn is_installed(&self) -> bool {
        matches!(self, ComponentStatus::Installed { .. })
    }
}

/// Per-component result of [`install_components`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstallReport {
    pub dll: ComponentStatus,
    pub update: ComponentStatus,
}

impl InstallReport {
    /// True when every component was copied.
    pub fn is_complete(&self) -> bool {
        self.dll.is_installed() && self.update.is_installed()
    }

    /// Names of the components that were skipped.
    pub fn missing(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if !self.dll.is_installed() {
            names.push(DLL_NAME);
        }
        if !self.update.is_installed() {
            names.push(UPDATE_DIR);
        }
        names
    }
}

/// Installs `dinput8.dll` and the `update/` tree from `source` into `game_dir`.
///
/// A component absent from `source` is not an error: it is logged and
/// reported as [`ComponentStatus::Missing`]. Existing files in `game_dir` are
/// overwritten, so running this twice leaves the same result.
pub fn install_components(source: &Path, game_dir: &Path) -> Result<InstallReport, FileOpsError> {
    let dll_src = source.join(DLL_NAME);
    let dll = if dll_src.is_file() {
        let dll_dst = game_dir.join(DLL_NAME);
        fs::copy(&dll_src, &dll_dst).map_err(|e| FileOpsError::io(&dll_dst, e))?;
        tracing::info!(dest = %dll_dst.display(), "copied {DLL_NAME}");
        ComponentStatus::Installed { files: 1 }
    } else {
        tracing::warn!(path = %dll_src.display(), "{DLL_NAME} not found in extracted archive");
        ComponentStatus::Missing
    };

    let update_src = source.join(UPDATE_DIR);
    let update = if update_src.is_dir() {
        let update_dst = game_dir.join(UPDATE_DIR);
        let files = copy_dir_recursive(&update_src, &update_dst)?;
        tracing::info!(dest = %update_dst.display(), files, "copied {UPDATE_DIR} directory");
        ComponentStatus::Installed { files }
    } else {
        tracing::warn!(path = %update_src.display(), "{UPDATE_DIR} directory not found in extracted archive");
        ComponentStatus::Missing
    };

    Ok(InstallReport { dll, update })
}
