//! Installed app lookup across all Steam libraries.

use std::path::PathBuf;

use steamlocate::SteamDir;

use crate::SteamError;

/// An installed Steam app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameInstall {
    pub app_id: u32,
    pub name: Option<String>,
    /// Absolute install directory (`<library>/steamapps/common/<installdir>`).
    pub path: PathBuf,
}

/// Resolves the install directory of an app from its Steam app id.
pub trait AppLocator {
    /// Returns `Ok(None)` when the app is not installed.
    fn locate(&self, app_id: &str) -> Result<Option<GameInstall>, SteamError>;
}

/// Locator backed by the local Steam client's library metadata.
#[derive(Debug, Clone, Default)]
pub struct SteamLocator {
    base_dir: Option<PathBuf>,
}

impl SteamLocator {
    /// Creates a locator that auto-detects the Steam directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a locator rooted at a custom Steam directory.
    pub fn with_base(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: Some(base_dir.into()),
        }
    }

    fn steam_dir(&self) -> Result<SteamDir, SteamError> {
        let found = match &self.base_dir {
            Some(dir) => SteamDir::from_dir(dir),
            None => SteamDir::locate(),
        };

        found.map_err(|e| {
            tracing::debug!(error = %e, "steam directory not found");
            SteamError::NotFound
        })
    }
}

impl AppLocator for SteamLocator {
    fn locate(&self, app_id: &str) -> Result<Option<GameInstall>, SteamError> {
        let id = parse_app_id(app_id)?;
        let steam = self.steam_dir()?;
        tracing::debug!(steam_dir = %steam.path().display(), app_id = id, "searching steam libraries");

        let found = steam
            .find_app(id)
            .map_err(|e| SteamError::Library(e.to_string()))?;
        let Some((app, library)) = found else {
            tracing::info!(app_id = id, "app not present in any steam library");
            return Ok(None);
        };

        let path = library.resolve_app_dir(&app);
        // Manifests can outlive a manually deleted game folder.
        if !path.is_dir() {
            tracing::warn!(path = %path.display(), "app manifest points to a missing directory");
            return Ok(None);
        }

        Ok(Some(GameInstall {
            app_id: app.app_id,
            name: app.name.clone(),
            path,
        }))
    }
}

/// Parses a numeric Steam app id.
pub fn parse_app_id(app_id: &str) -> Result<u32, SteamError> {
    app_id
        .trim()
        .parse::<u32>()
        .map_err(|_| SteamError::InvalidAppId(app_id.to_string()))
}
