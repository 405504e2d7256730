//! Spreadsheet CSV export.
//!
//! One row per marker under a fixed five-column header. Every field is
//! quoted with embedded quotes doubled, and the colour column is passed
//! through exactly as supplied. Rows are separated by `\n` with no trailing
//! newline.

use handover_core::{HandoverError, Result};
use handover_markers::{ExportSettings, Marker};
use tracing::{debug, warn};

/// Header row, written unquoted.
pub const CSV_HEADER: &str = "Timecode In,Name,Comment,Color,Timecode Out";

/// Render markers as marker-import CSV.
pub fn export_spreadsheet_csv(markers: &[Marker], settings: &ExportSettings) -> Result<String> {
    debug!(
        "Rendering spreadsheet CSV: {} markers at {} fps (drop-frame: {})",
        markers.len(),
        settings.frames_per_second,
        settings.drop_frame
    );

    let mut buffer = Vec::with_capacity(CSV_HEADER.len() + markers.len() * 64);
    buffer.extend_from_slice(CSV_HEADER.as_bytes());
    buffer.push(b'\n');

    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(buffer);

    for marker in markers {
        if !marker.is_positioned() {
            warn!(
                "Marker {} has no usable time ({}), exporting placeholder timecode",
                marker.id, marker.time_offset_seconds
            );
        }

        let tc_in = settings.timecode(marker.time_offset_seconds);
        let tc_out = settings.timecode(marker.out_offset_seconds(settings.frames_per_second));
        let color = marker.color.as_deref().unwrap_or("");

        writer
            .write_record([
                tc_in.as_str(),
                marker.display_name(),
                marker.text.as_str(),
                color,
                tc_out.as_str(),
            ])
            .map_err(|e| {
                HandoverError::Serialization(format!("Failed to write CSV row: {}", e))
            })?;
    }

    let buffer = writer
        .into_inner()
        .map_err(|e| HandoverError::Serialization(format!("Failed to flush CSV: {}", e)))?;
    let mut text = String::from_utf8(buffer)
        .map_err(|e| HandoverError::Serialization(format!("CSV is not UTF-8: {}", e)))?;

    if text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}
