pub mod locator;

// Re-export primary types.
pub use locator::{AppLocator, GameInstall, SteamLocator, parse_app_id};

/// Errors for Steam operations.
#[derive(Debug, thiserror::Error)]
pub enum SteamError {
    #[error("steam installation not found")]
    NotFound,

    #[error("invalid app id: {0:?}")]
    InvalidAppId(String),

    #[error("steam library error: {0}")]
    Library(String),
}
