//! Installer configuration.
//!
//! Every field has a compiled-in default. An optional TOML file overrides
//! them; it is read if present and never written:
//! - Linux: `~/.config/p3pbr/installer.toml`
//! - Windows: `%APPDATA%/p3pbr/installer.toml`

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

/// Installer configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    /// Steam app id of the game (Persona 3 Portable).
    #[serde(default = "default_app_id")]
    pub app_id: String,

    /// GitHub owner of the translation repository.
    #[serde(default = "default_owner")]
    pub owner: String,

    /// GitHub repository publishing the translation releases.
    #[serde(default = "default_repo")]
    pub repo: String,

    /// `User-Agent` sent to GitHub and the download host.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Extraction directory, relative to the current directory.
    #[serde(default = "default_work_dir")]
    pub work_dir: PathBuf,

    /// Steam root to search instead of the auto-detected one.
    #[serde(default)]
    pub steam_dir: Option<PathBuf>,
}

fn default_app_id() -> String {
    "1809700".into()
}

fn default_owner() -> String {
    "Hinrong".into()
}

fn default_repo() -> String {
    "P3P-Traduzido".into()
}

fn default_user_agent() -> String {
    "P3P-Installer".into()
}

fn default_api_base_url() -> String {
    "https://api.github.com".into()
}

fn default_work_dir() -> PathBuf {
    PathBuf::from("P3PBR")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_id: default_app_id(),
            owner: default_owner(),
            repo: default_repo(),
            user_agent: default_user_agent(),
            api_base_url: default_api_base_url(),
            work_dir: default_work_dir(),
            steam_dir: None,
        }
    }
}

impl Config {
    /// Loads the override file if it exists, otherwise returns the defaults.
    pub fn load() -> anyhow::Result<Self> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Loads configuration from `path`, falling back to defaults when the
    /// file does not exist.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("invalid configuration in {}", path.display()))?;

        tracing::info!(path = %path.display(), "configuration loaded");
        Ok(config)
    }
}

/// Returns the platform-specific configuration file path.
fn config_path() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA")
            .map(|appdata| PathBuf::from(appdata).join("p3pbr").join("installer.toml"))
    }

    #[cfg(not(target_os = "windows"))]
    {
        std::env::var_os("HOME").map(|home| {
            PathBuf::from(home)
                .join(".config")
                .join("p3pbr")
                .join("installer.toml")
        })
    }
}
