use std::fs::{self, File};
use std::io::{self, BufReader, Read};
use std::path::{Component, Path, PathBuf};

use sevenz_rust::{Password, SevenZReader};

use crate::ArchiveError;
use crate::detect::{ArchiveFormat, detect_format};

/// Summary of an extraction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractReport {
    pub format: Option<ArchiveFormat>,
    /// Regular files written.
    pub files: usize,
    /// Uncompressed bytes written.
    pub bytes: u64,
}

/// Extracts every file entry of `archive` into `out_dir`.
///
/// Relative paths are preserved and existing files are overwritten. Directory
/// entries are skipped; parents are created on demand.
pub fn extract(archive: &Path, out_dir: &Path) -> Result<ExtractReport, ArchiveError> {
    let format = detect_format(archive)?;
    tracing::debug!(archive = %archive.display(), %format, "detected archive format");

    let mut report = match format {
        ArchiveFormat::Zip => extract_zip(archive, out_dir)?,
        ArchiveFormat::SevenZip => extract_7z(archive, out_dir)?,
        other => return Err(ArchiveError::Unsupported(other)),
    };
    report.format = Some(format);

    tracing::info!(
        files = report.files,
        bytes = report.bytes,
        out_dir = %out_dir.display(),
        "archive extracted"
    );
    Ok(report)
}

fn extract_zip(archive: &Path, out_dir: &Path) -> Result<ExtractReport, ArchiveError> {
    let reader = BufReader::new(File::open(archive)?);
    let mut zip = zip::ZipArchive::new(reader)?;
    let mut report = ExtractReport::default();

    for i in 0..zip.len() {
        let mut entry = zip.by_index(i)?;
        if entry.is_dir() {
            continue;
        }

        let relative = entry
            .enclosed_name()
            .ok_or_else(|| ArchiveError::UnsafePath(entry.name().to_string()))?;
        report.bytes += write_entry(&out_dir.join(relative), &mut entry)?;
        report.files += 1;
    }

    Ok(report)
}

fn extract_7z(archive: &Path, out_dir: &Path) -> Result<ExtractReport, ArchiveError> {
    let mut reader = SevenZReader::open(archive, Password::empty())?;
    let mut report = ExtractReport::default();
    let mut rejected = None;

    reader.for_each_entries(|entry, data| {
        // Stopping only ends the current folder; later folders still call back.
        if rejected.is_some() || entry.is_directory() {
            return Ok(true);
        }

        let Some(target) = enclosed_target(out_dir, entry.name()) else {
            rejected = Some(entry.name().to_string());
            return Ok(false);
        };
        report.bytes += write_entry(&target, data)?;
        report.files += 1;
        Ok(true)
    })?;

    match rejected {
        Some(name) => Err(ArchiveError::UnsafePath(name)),
        None => Ok(report),
    }
}

/// Resolves a 7z entry name under `out_dir`.
///
/// Returns `None` for empty, absolute or parent-relative names.
fn enclosed_target(out_dir: &Path, name: &str) -> Option<PathBuf> {
    let normalized = name.replace('\\', "/");
    let relative = Path::new(&normalized);
    let mut depth = 0usize;
    for component in relative.components() {
        match component {
            Component::Normal(_) => depth += 1,
            Component::CurDir => {}
            _ => return None,
        }
    }
    (depth > 0).then(|| out_dir.join(relative))
}

/// Writes one entry to `target`, creating parents and truncating any
/// existing file.
fn write_entry<R: Read + ?Sized>(target: &Path, data: &mut R) -> io::Result<u64> {
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut out = File::create(target)?;
    io::copy(data, &mut out)
}
