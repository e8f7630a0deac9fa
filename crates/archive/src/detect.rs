use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::ArchiveError;

/// Archive container formats a release may ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArchiveFormat {
    Zip,
    SevenZip,
    Rar,
}

impl ArchiveFormat {
    fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "zip" => Some(Self::Zip),
            "7z" => Some(Self::SevenZip),
            "rar" => Some(Self::Rar),
            _ => None,
        }
    }
}

impl fmt::Display for ArchiveFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArchiveFormat::Zip => write!(f, "zip"),
            ArchiveFormat::SevenZip => write!(f, "7z"),
            ArchiveFormat::Rar => write!(f, "rar"),
        }
    }
}

/// Identifies a format from the leading bytes of a file.
pub fn sniff(header: &[u8]) -> Option<ArchiveFormat> {
    match header {
        // Local file header, or the end-of-central-directory of an empty zip.
        [0x50, 0x4B, 0x03, 0x04, ..] | [0x50, 0x4B, 0x05, 0x06, ..] => Some(ArchiveFormat::Zip),
        [0x37, 0x7A, 0xBC, 0xAF, 0x27, 0x1C, ..] => Some(ArchiveFormat::SevenZip),
        // RAR 4 and RAR 5 share this prefix.
        [0x52, 0x61, 0x72, 0x21, 0x1A, 0x07, ..] => Some(ArchiveFormat::Rar),
        _ => None,
    }
}

/// Detects the format of the archive at `path`.
///
/// Magic bytes win; the file extension is only consulted when the header is
/// not recognised.
pub fn detect_format(path: &Path) -> Result<ArchiveFormat, ArchiveError> {
    let mut header = Vec::with_capacity(8);
    File::open(path)?.take(8).read_to_end(&mut header)?;

    if let Some(format) = sniff(&header) {
        return Ok(format);
    }

    path.extension()
        .and_then(|e| e.to_str())
        .and_then(ArchiveFormat::from_extension)
        .ok_or_else(|| ArchiveError::UnknownFormat(path.to_path_buf()))
}
