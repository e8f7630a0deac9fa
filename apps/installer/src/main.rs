//! P3P translation installer entry point.

mod app;
mod config;
mod console;
mod error;

use std::process::ExitCode;

use anyhow::Context;
use p3pbr_steam::SteamLocator;
use tracing_subscriber::EnvFilter;

use crate::console::Console;
use crate::error::{InstallError, critical};

fn main() -> ExitCode {
    // Diagnostics go to stderr; the console UI owns stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "starting P3P translation installer"
    );

    let ui = Console::new();
    ui.banner();
    ui.pause("Pressione qualquer tecla para continuar...");

    let code = match install(&ui) {
        Ok(outcome) => {
            tracing::info!(
                release = %outcome.release_tag,
                game_dir = %outcome.game_dir.display(),
                work_dir = %outcome.work_dir.display(),
                "installation finished"
            );
            if !outcome.report.is_complete() {
                ui.warn(&format!(
                    "Itens ausentes no pacote: {}",
                    outcome.report.missing().join(", ")
                ));
            }
            ui.success("\nSUCESSO! A tradução foi instalada.");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "installation failed");
            ui.error(&format!("\n{}", user_message(&err)));
            ExitCode::FAILURE
        }
    };

    ui.pause("\nPressione qualquer tecla para sair.");
    code
}

/// Loads configuration and runs the pipeline on a fresh runtime.
fn install(ui: &Console) -> anyhow::Result<app::Outcome> {
    let config = config::Config::load()?;

    let locator = match &config.steam_dir {
        Some(dir) => SteamLocator::with_base(dir),
        None => SteamLocator::new(),
    };

    let rt = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    let outcome = rt.block_on(app::run(&config, &locator, ui))?;
    Ok(outcome)
}

/// Maps any failure to the message printed at the top-level boundary.
fn user_message(err: &anyhow::Error) -> String {
    match err.downcast_ref::<InstallError>() {
        Some(install_err) => install_err.user_message(),
        None => critical(&format!("{err:#}")),
    }
}
