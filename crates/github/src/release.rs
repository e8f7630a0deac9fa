//! Release and asset selection.

use crate::types::{Release, ReleaseAsset};

/// Asset name suffixes treated as compressed archives, in no priority order.
pub const ARCHIVE_EXTENSIONS: &[&str] = &[".zip", ".7z", ".rar"];

/// Returns true if the asset name ends in a known archive suffix.
pub fn is_archive_name(name: &str) -> bool {
    ARCHIVE_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

/// Picks the newest release by `published_at`.
///
/// Undated releases (drafts) rank below dated ones. Ties keep the order the
/// API returned them in.
pub fn latest_release(releases: &[Release]) -> Option<&Release> {
    // `min_by` returns the first of equal elements.
    releases
        .iter()
        .min_by(|a, b| b.published_at.cmp(&a.published_at))
}

/// Returns the first asset, in listed order, whose name is an archive.
pub fn select_archive_asset(release: &Release) -> Option<&ReleaseAsset> {
    release.assets.iter().find(|a| is_archive_name(&a.name))
}
