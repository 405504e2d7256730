//! Handover Export - Marker files for editing tools
//!
//! This crate handles:
//! - Timeline editor XML (Premiere-style `xmeml` sequences with markers)
//! - Spreadsheet CSV (Resolve marker import layout)
//! - Export format catalogue with file naming
//! - Delivering rendered files to a destination

pub mod format;
pub mod premiere;
pub mod resolve;
pub mod sink;

pub use format::{ExportFile, ExportFormat, DEFAULT_FILE_STEM};
pub use premiere::export_editor_xml;
pub use resolve::{export_spreadsheet_csv, CSV_HEADER};
pub use sink::{DirectorySink, ExportSink};
