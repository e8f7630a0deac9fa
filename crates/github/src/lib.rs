//! GitHub releases client.
//!
//! Lists a repository's releases through the REST API v3 and picks the
//! archive asset of the newest one. Requests are unauthenticated and
//! unpaginated (first page only).

pub mod client;
pub mod release;
pub mod types;

pub use client::{Client, Error};
pub use release::{ARCHIVE_EXTENSIONS, is_archive_name, latest_release, select_archive_asset};
pub use types::{Release, ReleaseAsset};
