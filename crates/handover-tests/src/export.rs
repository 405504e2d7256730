//! Integration tests for the export pipeline.
//!
//! Exercises comment rows from handover-markers flowing through the
//! handover-export formatters and sinks.

use handover_export::{
    export_editor_xml, export_spreadsheet_csv, DirectorySink, ExportFormat, ExportSink, CSV_HEADER,
};
use handover_markers::{markers_from_comments, CommentRow, ExportSettings, FrameRatePreset, Marker};
use quick_xml::events::Event;
use quick_xml::Reader;

// ── Helpers ────────────────────────────────────────────────────

fn comment_rows() -> Vec<CommentRow> {
    serde_json::from_str(
        r#"[
            {"id": 31, "ptime": 42.0, "body": "Audio pops \"here\"", "user_name": "Sam", "created_at": "2025-01-04T10:00:00Z"},
            {"id": 12, "ptime": "5.5", "body": "<b>Title</b> & logo", "user_name": "Kim"},
            {"id": 27, "ptime": 600, "body": "Grade, warmer", "user_name": "", "parent_id": 12},
            {"id": 40, "ptime": "later", "body": "No time", "user_name": "Lee"}
        ]"#,
    )
    .unwrap()
}

fn settings() -> ExportSettings {
    ExportSettings::from_preset(FrameRatePreset::default_preset(), "Review v3")
}

/// Parse the document, failing on malformed XML, and return every
/// `<marker>` as (name, comment, in, out, color).
fn parse_markers(xml: &str) -> Vec<[String; 5]> {
    let mut reader = Reader::from_str(xml);
    let mut markers = Vec::new();
    let mut current: Option<[String; 5]> = None;
    let mut field: Option<usize> = None;

    loop {
        match reader.read_event().expect("well-formed XML") {
            Event::Start(e) => match e.name().as_ref() {
                b"marker" => current = Some(Default::default()),
                b"name" => field = Some(0),
                b"comment" => field = Some(1),
                b"in" => field = Some(2),
                b"out" => field = Some(3),
                b"color" => field = Some(4),
                _ => field = None,
            },
            Event::Text(e) => {
                if let (Some(marker), Some(idx)) = (current.as_mut(), field) {
                    marker[idx] = e.unescape().unwrap().into_owned();
                }
            }
            Event::End(e) => {
                field = None;
                if e.name().as_ref() == b"marker" {
                    markers.extend(current.take());
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }
    markers
}

// ── Editor XML ─────────────────────────────────────────────────

#[test]
fn comments_to_xml_round_trip_through_parser() {
    let markers = markers_from_comments(&comment_rows());
    let xml = export_editor_xml(&markers, &settings());
    let parsed = parse_markers(&xml);

    assert_eq!(parsed.len(), 4);
    assert_eq!(parsed[0][0], "Sam");
    assert_eq!(parsed[0][1], "Audio pops \"here\"");
    assert_eq!(parsed[1][1], "<b>Title</b> & logo");
    assert_eq!(parsed[1][2], "00:00:05:15");
    assert_eq!(parsed[2][0], "Marker");
    assert_eq!(parsed[2][2], "00:10:00:00");
    assert_eq!(parsed[2][3], "00:10:00:01");
    assert_eq!(parsed[3][2], "NaN:NaN:NaN:NaN");
    assert!(parsed.iter().all(|m| m[4] == "red"));
}

#[test]
fn xml_has_no_raw_markup_from_comments() {
    let markers = vec![Marker::new("1", 0.0, "<a & b>")];
    let xml = export_editor_xml(&markers, &settings());
    assert!(xml.contains("&lt;a &amp; b&gt;"));
    assert!(!xml.contains("<a & b>"));
    assert!(!xml.contains("<a "));
}

#[test]
fn xml_sequence_header() {
    let xml = export_editor_xml(&[], &settings());
    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<xmeml version=\"5\">"));
    assert!(xml.contains("<name>Review v3</name>"));
    assert!(xml.contains("<timebase>30</timebase>"));
    assert!(xml.contains("<ntsc>TRUE</ntsc>"));
    assert!(xml.ends_with("</xmeml>"));
}

#[test]
fn xml_ntsc_for_23_976_without_drop_frame() {
    let settings = ExportSettings::from_preset(FrameRatePreset::find("23.976").unwrap(), "S");
    let xml = export_editor_xml(&[], &settings);
    assert!(xml.contains("<timebase>24</timebase>"));
    assert!(xml.contains("<ntsc>TRUE</ntsc>"));

    let settings = ExportSettings::from_preset(FrameRatePreset::find("25").unwrap(), "S");
    assert!(export_editor_xml(&[], &settings).contains("<ntsc>FALSE</ntsc>"));
}

// ── Spreadsheet CSV ────────────────────────────────────────────

#[test]
fn comments_to_csv() {
    let markers = markers_from_comments(&comment_rows());
    let csv = export_spreadsheet_csv(&markers, &settings()).unwrap();

    let lines: Vec<&str> = csv.split('\n').collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], CSV_HEADER);
    assert!(lines[1].starts_with("\"00:00:41:29\",\"Sam\",\"Audio pops \"\"here\"\"\""));
    assert_eq!(
        lines[3],
        "\"00:10:00:00\",\"Marker\",\"Grade, warmer\",\"red\",\"00:10:00:01\""
    );
    assert!(lines[4].starts_with("\"NaN:NaN:NaN:NaN\",\"Lee\""));
}

#[test]
fn csv_and_xml_disagree_on_unknown_colors() {
    let markers = vec![Marker::new("1", 1.0, "x").with_color("purple")];
    let settings = ExportSettings::new(30.0, false, "S");

    let csv = export_spreadsheet_csv(&markers, &settings).unwrap();
    assert!(csv.contains(",\"purple\","));

    let xml = export_editor_xml(&markers, &settings);
    assert_eq!(parse_markers(&xml)[0][4], "red");
}

#[test]
fn both_formats_keep_caller_order() {
    let markers = vec![
        Marker::new("B", 30.0, "second-in-time"),
        Marker::new("A", 10.0, "first-in-time"),
        Marker::new("C", 50.0, "last-in-time"),
    ];
    let settings = ExportSettings::new(24.0, false, "S");

    let xml_order: Vec<String> = parse_markers(&export_editor_xml(&markers, &settings))
        .into_iter()
        .map(|m| m[1].clone())
        .collect();
    assert_eq!(xml_order, ["second-in-time", "first-in-time", "last-in-time"]);

    let csv = export_spreadsheet_csv(&markers, &settings).unwrap();
    let b = csv.find("second-in-time").unwrap();
    let a = csv.find("first-in-time").unwrap();
    let c = csv.find("last-in-time").unwrap();
    assert!(b < a && a < c);
}

#[test]
fn exports_are_deterministic() {
    let markers = markers_from_comments(&comment_rows());
    let settings = settings();
    assert_eq!(
        export_editor_xml(&markers, &settings),
        export_editor_xml(&markers, &settings)
    );
    assert_eq!(
        export_spreadsheet_csv(&markers, &settings).unwrap(),
        export_spreadsheet_csv(&markers, &settings).unwrap()
    );
}

// ── Formats and delivery ───────────────────────────────────────

#[test]
fn every_format_delivers_to_directory() {
    let dir = tempfile::tempdir().unwrap();
    let sink = DirectorySink::new(dir.path());
    let markers = markers_from_comments(&comment_rows());

    for format in ExportFormat::ALL {
        let file = format.export(&markers, &settings(), "interview.mov").unwrap();
        let path = sink.deliver(&file).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, file.contents);
        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            format!("interview.mov_{}.{}", format.name(), format.extension())
        );
    }
}
