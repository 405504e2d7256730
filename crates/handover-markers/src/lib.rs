//! Handover Markers - Marker data model
//!
//! Implements the records every exporter consumes:
//! - Markers and their editor colours
//! - Per-export settings and the frame-rate presets offered for export
//! - Adapting stored comment rows into markers

pub mod comment;
pub mod marker;
pub mod settings;

pub use comment::{markers_from_comments, parse_leading_float, CommentRow, RowId, TimeValue};
pub use marker::{Marker, MarkerColor, DEFAULT_MARKER_NAME};
pub use settings::{ExportSettings, FrameRatePreset, DEFAULT_SEQUENCE_NAME, FRAME_RATE_PRESETS};
