//! Stored comment rows and their conversion to markers.
//!
//! Rows arrive as JSON from the comment table. The time column is loosely
//! typed: it may be a number, a numeric string, missing, or some other JSON
//! value entirely. Conversion never fails; an unreadable time becomes NaN and
//! the marker is reported as unpositioned.

use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::marker::{Marker, MarkerColor};

/// Row identifier, integer or text depending on the table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RowId {
    Integer(i64),
    Text(String),
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowId::Integer(id) => write!(f, "{}", id),
            RowId::Text(id) => f.write_str(id),
        }
    }
}

/// Playback time column value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimeValue {
    Number(f64),
    Text(String),
    /// Anything else (boolean, object, array). Never written back.
    #[serde(skip_serializing)]
    Other(IgnoredAny),
}

impl TimeValue {
    /// Seconds, NaN when the value holds no leading number.
    pub fn seconds(&self) -> f64 {
        match self {
            TimeValue::Number(seconds) => *seconds,
            TimeValue::Text(text) => parse_leading_float(text),
            TimeValue::Other(_) => f64::NAN,
        }
    }
}

/// A row of the comment table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentRow {
    /// Row ID
    pub id: RowId,
    /// Playback time the comment is anchored to
    #[serde(default)]
    pub ptime: Option<TimeValue>,
    /// Comment body
    #[serde(default)]
    pub body: Option<String>,
    /// Display name of the commenter
    #[serde(default)]
    pub user_name: Option<String>,
    /// Creation timestamp as stored
    #[serde(default)]
    pub created_at: Option<String>,
    /// Parent comment for replies
    #[serde(default)]
    pub parent_id: Option<RowId>,
}

impl CommentRow {
    /// Anchor time in seconds (NaN when missing or unreadable).
    pub fn seconds(&self) -> f64 {
        self.ptime.as_ref().map_or(f64::NAN, TimeValue::seconds)
    }

    /// Convert to a marker.
    ///
    /// The marker gets no label, so exporters name it after the commenter
    /// or fall back to the default name. The table has no colour column;
    /// every marker is red.
    ///
    /// Anonymous comments are named "Marker" like any other unnamed marker.
    /// Earlier releases of the review app labelled them "Comment".
    pub fn to_marker(&self) -> Marker {
        Marker {
            id: self.id.to_string(),
            time_offset_seconds: self.seconds(),
            duration_seconds: None,
            text: self.body.clone().unwrap_or_default(),
            label: None,
            author: self.user_name.clone().filter(|name| !name.is_empty()),
            color: Some(MarkerColor::Red.as_str().to_string()),
        }
    }
}

impl From<&CommentRow> for Marker {
    fn from(row: &CommentRow) -> Self {
        row.to_marker()
    }
}

/// Convert comment rows to markers, preserving order.
pub fn markers_from_comments(rows: &[CommentRow]) -> Vec<Marker> {
    let markers: Vec<Marker> = rows.iter().map(Marker::from).collect();
    let unpositioned = markers.iter().filter(|m| !m.is_positioned()).count();
    debug!(
        "Adapted {} comments to markers ({} unpositioned)",
        markers.len(),
        unpositioned
    );
    markers
}

/// Parse the longest leading decimal number in `text`.
///
/// Leading whitespace is skipped and trailing garbage ignored, so `" 12.5s"`
/// reads as 12.5. `Infinity` with an optional sign is accepted. Returns NaN
/// when no number starts the string.
pub fn parse_leading_float(text: &str) -> f64 {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    if text[end..].starts_with("Infinity") {
        return if bytes.first() == Some(&b'-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return f64::NAN;
    }

    // Exponent only counts when at least one digit follows it.
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    text[..end].parse().unwrap_or(f64::NAN)
}
