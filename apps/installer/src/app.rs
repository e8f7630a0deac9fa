//! Install pipeline: locate, resolve, download, extract, install.

use std::path::{Path, PathBuf};

use p3pbr_archive::ExtractReport;
use p3pbr_file_ops::{ComponentStatus, DLL_NAME, InstallReport, UPDATE_DIR, install_components, reset_dir};
use p3pbr_github::Client;
use p3pbr_steam::{AppLocator, SteamError};
use p3pbr_transfer::{Downloader, temp_archive_path};

use crate::config::Config;
use crate::console::Console;
use crate::error::InstallError;

/// What a successful run did.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub game_dir: PathBuf,
    pub release_tag: String,
    pub work_dir: PathBuf,
    pub report: InstallReport,
}

/// Runs the five install stages in order.
///
/// Stages never overlap: each awaits the previous one. A failure stops the
/// run; files already copied into the game directory stay there.
pub async fn run(
    config: &Config,
    locator: &dyn AppLocator,
    ui: &Console,
) -> Result<Outcome, InstallError> {
    // -- 1. Locate --
    ui.step(1, "Localizando instalação do Persona 3 Portable...");
    let game = match locator.locate(&config.app_id) {
        Ok(Some(game)) => game,
        Ok(None) | Err(SteamError::NotFound) => return Err(InstallError::GameNotFound),
        Err(e) => return Err(e.into()),
    };
    tracing::info!(app_id = game.app_id, path = %game.path.display(), "game located");
    ui.detail(&format!("Jogo encontrado em: {}", game.path.display()));

    // -- 2. Resolve release --
    ui.step(2, "Buscando última versão da tradução...");
    let github = Client::new(&config.user_agent)?.with_base_url(&config.api_base_url);
    let (release, asset) = github.latest_archive(&config.owner, &config.repo).await?;
    ui.detail(&format!("Versão: {}", release.label()));
    ui.detail(&format!("Link encontrado: {}", asset.browser_download_url));

    // -- 3. Download --
    let archive_path = temp_archive_path(&asset.name);
    ui.step(3, "Baixando arquivos (isso pode demorar um pouco)...");
    Downloader::new(&config.user_agent)?
        .download_to(&asset.browser_download_url, &archive_path)
        .await?;

    // -- 4. Extract --
    let work_dir = std::env::current_dir()?.join(&config.work_dir);
    ui.step(
        4,
        &format!("Extraindo para pasta temporária '{}'...", work_dir.display()),
    );
    let extracted = tokio::task::spawn_blocking({
        let work_dir = work_dir.clone();
        move || unpack(&archive_path, &work_dir)
    })
    .await
    .map_err(|e| InstallError::Task(format!("task join error: {e}")))??;
    ui.detail(&format!("{} arquivos extraídos.", extracted.files));

    // -- 5. Install --
    ui.step(5, "Instalando arquivos na pasta do jogo...");
    let report = tokio::task::spawn_blocking({
        let work_dir = work_dir.clone();
        let game_dir = game.path.clone();
        move || install_components(&work_dir, &game_dir)
    })
    .await
    .map_err(|e| InstallError::Task(format!("task join error: {e}")))??;
    report_components(ui, &report);

    Ok(Outcome {
        game_dir: game.path,
        release_tag: release.tag_name,
        work_dir,
        report,
    })
}

/// Recreates the working directory and extracts into it. The archive is
/// deleted whether or not extraction succeeds.
fn unpack(archive: &Path, work_dir: &Path) -> Result<ExtractReport, InstallError> {
    reset_dir(work_dir)?;
    let extracted = p3pbr_archive::extract(archive, work_dir);
    remove_archive(archive);
    Ok(extracted?)
}

fn remove_archive(path: &Path) {
    if let Err(e) = std::fs::remove_file(path) {
        tracing::warn!(path = %path.display(), error = %e, "failed to delete downloaded archive");
    }
}

fn report_components(ui: &Console, report: &InstallReport) {
    match report.dll {
        ComponentStatus::Installed { .. } => ui.detail(&format!("{DLL_NAME} copiado.")),
        ComponentStatus::Missing => {
            ui.warn(&format!("{DLL_NAME} não foi encontrado na extração."))
        }
    }
    match report.update {
        ComponentStatus::Installed { .. } => ui.detail(&format!("Pasta '{UPDATE_DIR}' copiada.")),
        ComponentStatus::Missing => {
            ui.warn(&format!("Pasta '{UPDATE_DIR}' não foi encontrada na extração."))
        }
    }
}
