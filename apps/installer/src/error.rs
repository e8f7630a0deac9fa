//! Installer error types and their user-facing messages.

use p3pbr_archive::ArchiveError;
use p3pbr_file_ops::FileOpsError;
use p3pbr_steam::SteamError;
use p3pbr_transfer::TransferError;

/// Errors produced by the install pipeline.
#[derive(Debug, thiserror::Error)]
pub enum InstallError {
    /// The game (or Steam itself) is not installed.
    #[error("game not found")]
    GameNotFound,

    #[error("steam error: {0}")]
    Steam(#[from] SteamError),

    #[error("release lookup failed: {0}")]
    Release(#[from] p3pbr_github::Error),

    #[error("download failed: {0}")]
    Download(#[from] TransferError),

    #[error("extraction failed: {0}")]
    Archive(#[from] ArchiveError),

    #[error("installation failed: {0}")]
    Install(#[from] FileOpsError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("background task failed: {0}")]
    Task(String),
}

impl InstallError {
    /// Message shown to the user at the top-level boundary.
    pub fn user_message(&self) -> String {
        match self {
            InstallError::GameNotFound => {
                "Erro: Jogo não encontrado! Verifique se está instalado na Steam.".into()
            }
            InstallError::Release(p3pbr_github::Error::NoReleases { .. }) => {
                critical("Nenhuma release encontrada no repositório.")
            }
            InstallError::Release(p3pbr_github::Error::NoArchiveAsset { .. }) => {
                critical("Nenhum arquivo compactado encontrado na release.")
            }
            InstallError::Archive(ArchiveError::Unsupported(format)) => critical(&format!(
                "O formato {format} não é suportado. Extraia o arquivo manualmente."
            )),
            other => critical(&other.to_string()),
        }
    }
}

/// Formats the generic failure message.
pub fn critical(detail: &str) -> String {
    format!("Ocorreu um erro crítico: {detail}")
}
