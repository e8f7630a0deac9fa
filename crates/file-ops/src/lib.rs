//! Working directory management and translation file installation.
//!
//! Copies the patch components out of an extracted archive into the game
//! directory, overwriting whatever is already there.

mod copy;
mod install;
mod workdir;

use std::path::PathBuf;

pub use copy::copy_dir_recursive;
pub use install::{ComponentStatus, InstallReport, install_components};
pub use workdir::reset_dir;

/// Proxy DLL loaded by the game; placed at the game root.
pub const DLL_NAME: &str = "dinput8.dll";

/// Directory of replacement game assets; copied recursively.
pub const UPDATE_DIR: &str = "update";

/// Errors produced by file operations.
#[derive(Debug, thiserror::Error)]
pub enum FileOpsError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("directory not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("refusing to reset {}: {reason}", .path.display())]
    UnsafeReset { path: PathBuf, reason: String },
}

impl FileOpsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
