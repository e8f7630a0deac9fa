//! Whole-body downloads to a local file.

use std::path::{Path, PathBuf};

use crate::TransferError;

/// File stem of the downloaded archive inside the system temp directory.
pub const TEMP_ARCHIVE_STEM: &str = "p3p_traducao";

/// Returns `<temp>/p3p_traducao.<ext>`, keeping the asset's extension.
///
/// Falls back to `zip` when the asset name has no extension.
pub fn temp_archive_path(asset_name: &str) -> PathBuf {
    let ext = Path::new(asset_name)
        .extension()
        .and_then(|e| e.to_str())
        .filter(|e| !e.is_empty())
        .unwrap_or("zip");
    std::env::temp_dir().join(format!("{TEMP_ARCHIVE_STEM}.{ext}"))
}

/// HTTP downloader that buffers the full response before writing.
pub struct Downloader {
    http: reqwest::Client,
}

impl Downloader {
    /// Creates a downloader sending the given `User-Agent`.
    pub fn new(user_agent: &str) -> Result<Self, TransferError> {
        let http = reqwest::Client::builder().user_agent(user_agent).build()?;
        Ok(Self { http })
    }

    /// Fetches the entire body of `url`.
    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>, TransferError> {
        let resp = self.http.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(TransferError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(resp.bytes().await?.to_vec())
    }

    /// Downloads `url` into `dest`, replacing any existing file.
    ///
    /// Returns the number of bytes written.
    pub async fn download_to(&self, url: &str, dest: &Path) -> Result<u64, TransferError> {
        tracing::info!(%url, dest = %dest.display(), "downloading");
        let data = self.fetch(url).await?;

        if let Some(parent) = dest.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(dest, &data).await?;

        let len = data.len() as u64;
        tracing::info!(bytes = len, dest = %dest.display(), "download complete");
        Ok(len)
    }
}
