//! Export format catalogue.
//!
//! Each format knows its renderer, MIME type and file naming, so callers
//! only pick a format and hand the result to a sink.

use handover_core::{HandoverError, Result};
use handover_markers::{ExportSettings, Marker};
use std::fmt;
use std::str::FromStr;

use crate::premiere::export_editor_xml;
use crate::resolve::export_spreadsheet_csv;

/// File stem used when the caller has no file name.
pub const DEFAULT_FILE_STEM: &str = "markers";

/// Target editing tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// Timeline editor XML for Premiere Pro
    Premiere,
    /// Marker CSV for DaVinci Resolve
    Resolve,
    /// Same CSV, named for other tools
    Generic,
}

impl ExportFormat {
    /// All formats, in menu order.
    pub const ALL: [Self; 3] = [Self::Premiere, Self::Resolve, Self::Generic];

    /// Short identifier, also used as the file name suffix.
    pub fn name(self) -> &'static str {
        match self {
            Self::Premiere => "premiere",
            Self::Resolve => "resolve",
            Self::Generic => "generic",
        }
    }

    /// Menu label.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Premiere => "Premiere Pro (.xml)",
            Self::Resolve => "DaVinci Resolve (.csv)",
            Self::Generic => "Generic CSV",
        }
    }

    /// File extension.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Premiere => "xml",
            Self::Resolve | Self::Generic => "csv",
        }
    }

    /// MIME type of the rendered file.
    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Premiere => "application/xml",
            Self::Resolve | Self::Generic => "text/csv",
        }
    }

    /// `<stem>_<format>.<ext>`, with [`DEFAULT_FILE_STEM`] for an empty stem.
    pub fn file_name(self, stem: &str) -> String {
        let stem = if stem.is_empty() {
            DEFAULT_FILE_STEM
        } else {
            stem
        };
        format!("{}_{}.{}", stem, self.name(), self.extension())
    }

    /// Render the file contents.
    pub fn render(self, markers: &[Marker], settings: &ExportSettings) -> Result<String> {
        match self {
            Self::Premiere => Ok(export_editor_xml(markers, settings)),
            Self::Resolve | Self::Generic => export_spreadsheet_csv(markers, settings),
        }
    }

    /// Render and name a complete export file.
    pub fn export(self, markers: &[Marker], settings: &ExportSettings, stem: &str) -> Result<ExportFile> {
        Ok(ExportFile {
            file_name: self.file_name(stem),
            mime_type: self.mime_type(),
            contents: self.render(markers, settings)?,
        })
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExportFormat {
    type Err = HandoverError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|format| format.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                HandoverError::UnsupportedFormat(format!(
                    "'{}' (expected premiere, resolve or generic)",
                    s
                ))
            })
    }
}

/// A rendered export ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    /// Suggested file name
    pub file_name: String,
    /// MIME type
    pub mime_type: &'static str,
    /// File contents
    pub contents: String,
}
