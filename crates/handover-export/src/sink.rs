//! Delivery of rendered export files.

use handover_core::Result;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::format::ExportFile;

/// Destination for rendered exports.
///
/// Receives the file exactly as rendered and returns where it ended up.
pub trait ExportSink {
    fn deliver(&self, file: &ExportFile) -> Result<PathBuf>;
}

/// Writes exports into a directory, creating it if needed.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    /// Sink writing into `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Sink writing into the user's download directory, or the current
    /// directory when there is none.
    pub fn downloads() -> Self {
        Self::new(dirs::download_dir().unwrap_or_else(|| PathBuf::from(".")))
    }

    /// Target directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ExportSink for DirectorySink {
    fn deliver(&self, file: &ExportFile) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(safe_file_name(&file.file_name));
        std::fs::write(&path, file.contents.as_bytes())?;
        info!(
            "Wrote {} ({}, {} bytes)",
            path.display(),
            file.mime_type,
            file.contents.len()
        );
        Ok(path)
    }
}

/// Keep a file name inside the target directory.
fn safe_file_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect();
    if cleaned.is_empty() || cleaned.chars().all(|c| c == '.') {
        format!("_{}", cleaned)
    } else {
        cleaned
    }
}
