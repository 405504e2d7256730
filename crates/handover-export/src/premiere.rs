//! Timeline editor XML export.
//!
//! Writes an `xmeml` document holding one sequence: its rate block
//! (timebase plus NTSC flag) and its markers in input order. Only `<`, `>`
//! and `&` are escaped in text content.

use handover_markers::{ExportSettings, Marker, MarkerColor};
use quick_xml::escape::partial_escape;
use tracing::{debug, warn};

/// Render markers as a timeline editor XML document.
///
/// Never fails: markers with an unusable time get placeholder timecodes and
/// colours outside the editor palette become red.
pub fn export_editor_xml(markers: &[Marker], settings: &ExportSettings) -> String {
    debug!(
        "Rendering editor XML: {} markers at {} fps (drop-frame: {})",
        markers.len(),
        settings.frames_per_second,
        settings.drop_frame
    );

    let ntsc = if settings.is_ntsc() { "TRUE" } else { "FALSE" };

    let mut xml = String::new();
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<xmeml version=\"5\">\n");
    xml.push_str("  <sequence>\n");
    xml.push_str(&format!(
        "    <name>{}</name>\n",
        partial_escape(&settings.sequence_name)
    ));
    xml.push_str("    <rate>\n");
    xml.push_str(&format!("      <timebase>{}</timebase>\n", settings.timebase()));
    xml.push_str(&format!("      <ntsc>{}</ntsc>\n", ntsc));
    xml.push_str("    </rate>\n");

    xml.push_str("    <markers>");
    for marker in markers {
        render_marker(&mut xml, marker, settings);
    }
    xml.push_str("\n    </markers>\n");

    xml.push_str("  </sequence>\n");
    xml.push_str("</xmeml>");
    xml
}

fn render_marker(xml: &mut String, marker: &Marker, settings: &ExportSettings) {
    if !marker.is_positioned() {
        warn!(
            "Marker {} has no usable time ({}), exporting placeholder timecode",
            marker.id, marker.time_offset_seconds
        );
    }

    let color = marker.editor_color();
    if let Some(requested) = marker.color.as_deref() {
        if MarkerColor::parse(requested).is_none() {
            debug!("Marker {}: colour '{}' not in palette, using {}", marker.id, requested, color);
        }
    }

    let tc_in = settings.timecode(marker.time_offset_seconds);
    let tc_out = settings.timecode(marker.out_offset_seconds(settings.frames_per_second));

    xml.push_str("\n      <marker>\n");
    xml.push_str(&format!(
        "        <name>{}</name>\n",
        partial_escape(marker.display_name())
    ));
    xml.push_str(&format!(
        "        <comment>{}</comment>\n",
        partial_escape(&marker.text)
    ));
    xml.push_str(&format!("        <in>{}</in>\n", tc_in));
    xml.push_str(&format!("        <out>{}</out>\n", tc_out));
    xml.push_str(&format!("        <color>{}</color>\n", color));
    xml.push_str("      </marker>");
}
