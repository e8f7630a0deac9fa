//! Archive format detection and extraction.
//!
//! Zip and 7z archives are extracted. Rar is recognised so the caller gets
//! a precise error instead of a corrupt-archive one.

mod detect;
mod extract;

use std::path::PathBuf;

pub use detect::{ArchiveFormat, detect_format, sniff};
pub use extract::{ExtractReport, extract};

/// Errors produced while reading or unpacking an archive.
#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("7z error: {0}")]
    SevenZip(#[from] sevenz_rust::Error),

    #[error("unsupported archive format: {0}")]
    Unsupported(ArchiveFormat),

    #[error("unrecognised archive format: {}", .0.display())]
    UnknownFormat(PathBuf),

    #[error("archive entry escapes the output directory: {0}")]
    UnsafePath(String),
}
