//! Buffered HTTP download of release archives.
//!
//! The whole response body is held in memory and written to disk in a
//! single call. There is no streaming, resume or retry.

mod download;

pub use download::{Downloader, TEMP_ARCHIVE_STEM, temp_archive_path};

/// Errors produced by the transfer crate.
#[derive(Debug, thiserror::Error)]
pub enum TransferError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("download failed with status {status}: {url}")]
    Status { status: u16, url: String },
}
