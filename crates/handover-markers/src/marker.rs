//! Marker types.

use handover_core::rate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name used when a marker has neither a label nor an author.
pub const DEFAULT_MARKER_NAME: &str = "Marker";

/// Marker colours understood by timeline editors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerColor {
    #[default]
    Red,
    Yellow,
    Green,
    Cyan,
    Blue,
    Magenta,
    Black,
    White,
}

impl MarkerColor {
    /// All colours, in editor palette order.
    pub const ALL: [Self; 8] = [
        Self::Red,
        Self::Yellow,
        Self::Green,
        Self::Cyan,
        Self::Blue,
        Self::Magenta,
        Self::Black,
        Self::White,
    ];

    /// Lower-case name as written to export files.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Cyan => "cyan",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Black => "black",
            Self::White => "white",
        }
    }

    /// Case-insensitive lookup by name.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|color| color.as_str().eq_ignore_ascii_case(name))
    }

    /// Colour for an optional name, red when absent or unknown.
    pub fn resolve(name: Option<&str>) -> Self {
        name.and_then(Self::parse).unwrap_or_default()
    }
}

impl fmt::Display for MarkerColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A timestamped annotation, the unit of export.
///
/// Markers are built fresh for each export and are never mutated by the
/// exporters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    /// Source identifier, carried for traceability only
    pub id: String,
    /// Anchor point in seconds from the start of the video
    pub time_offset_seconds: f64,
    /// Length of the marked interval (one frame when absent)
    #[serde(default)]
    pub duration_seconds: Option<f64>,
    /// Annotation body
    #[serde(default)]
    pub text: String,
    /// Short display name
    #[serde(default)]
    pub label: Option<String>,
    /// Author name, used when there is no label
    #[serde(default)]
    pub author: Option<String>,
    /// Colour name as supplied
    #[serde(default)]
    pub color: Option<String>,
}

impl Marker {
    /// Create a marker with only a time and a body.
    pub fn new(id: impl Into<String>, time_offset_seconds: f64, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            time_offset_seconds,
            duration_seconds: None,
            text: text.into(),
            label: None,
            author: None,
            color: None,
        }
    }

    /// Set the label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the author.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Set the colour name.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the marked duration.
    pub fn with_duration(mut self, seconds: f64) -> Self {
        self.duration_seconds = Some(seconds);
        self
    }

    /// Label, then author, then [`DEFAULT_MARKER_NAME`].
    pub fn display_name(&self) -> &str {
        self.label
            .as_deref()
            .or(self.author.as_deref())
            .unwrap_or(DEFAULT_MARKER_NAME)
    }

    /// Whether the marker has a usable position on the timeline.
    pub fn is_positioned(&self) -> bool {
        self.time_offset_seconds.is_finite() && self.time_offset_seconds >= 0.0
    }

    /// End of the marked interval at the given rate.
    pub fn out_offset_seconds(&self, fps: f64) -> f64 {
        let duration = self
            .duration_seconds
            .unwrap_or_else(|| rate::frame_duration(fps));
        self.time_offset_seconds + duration
    }

    /// Editor colour, red when absent or outside the palette.
    pub fn editor_color(&self) -> MarkerColor {
        MarkerColor::resolve(self.color.as_deref())
    }
}
