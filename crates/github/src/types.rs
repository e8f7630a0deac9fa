//! API response types for GitHub releases.
//!
//! Only the fields the installer reads are modelled; unknown fields are
//! ignored by serde.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A file attached to a release.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReleaseAsset {
    pub name: String,
    pub browser_download_url: String,
    #[serde(default)]
    pub size: u64,
}

/// A tagged release and its assets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Release {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub tag_name: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub draft: bool,
    #[serde(default)]
    pub prerelease: bool,
    /// `None` for drafts.
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub assets: Vec<ReleaseAsset>,
}

impl Release {
    /// Human-readable label: the release title, or the tag when untitled.
    pub fn label(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.tag_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_from_api_json() {
        let json = r#"{
            "id": 1,
            "tag_name": "v1.2",
            "name": "Tradução v1.2",
            "draft": false,
            "prerelease": false,
            "published_at": "2024-03-01T12:00:00Z",
            "html_url": "https://github.com/Hinrong/P3P-Traduzido/releases/tag/v1.2",
            "assets": [
                {
                    "name": "P3PBR.zip",
                    "browser_download_url": "https://github.com/Hinrong/P3P-Traduzido/releases/download/v1.2/P3PBR.zip",
                    "size": 2048,
                    "content_type": "application/zip",
                    "download_count": 10
                }
            ]
        }"#;

        let release: Release = serde_json::from_str(json).unwrap();
        assert_eq!(release.tag_name, "v1.2");
        assert_eq!(release.label(), "Tradução v1.2");
        assert!(release.published_at.is_some());
        assert_eq!(release.assets.len(), 1);
        assert_eq!(release.assets[0].size, 2048);
    }

    #[test]
    fn draft_without_timestamp() {
        let json = r#"{"tag_name":"next","name":null,"draft":true,"published_at":null,"assets":[]}"#;
        let release: Release = serde_json::from_str(json).unwrap();
        assert!(release.draft);
        assert!(release.published_at.is_none());
        assert_eq!(release.label(), "next");
    }
}
