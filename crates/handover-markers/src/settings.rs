//! Export settings and frame-rate presets.

use handover_core::{rate, seconds_to_timecode, HandoverError, Result};
use serde::{Deserialize, Serialize};

/// Sequence name used when the caller has none.
pub const DEFAULT_SEQUENCE_NAME: &str = "Sequence";

/// A frame rate as offered in the export menu.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameRatePreset {
    /// Menu label
    pub label: &'static str,
    /// Frames per second
    pub fps: f64,
    /// Count with drop-frame numbering
    pub drop_frame: bool,
}

/// Presets in menu order.
pub const FRAME_RATE_PRESETS: [FrameRatePreset; 8] = [
    FrameRatePreset::new("23.976", 23.976, false),
    FrameRatePreset::new("24", 24.0, false),
    FrameRatePreset::new("25", 25.0, false),
    FrameRatePreset::new("29.97 (DF)", 29.97, true),
    FrameRatePreset::new("29.97 (NDF)", 29.97, false),
    FrameRatePreset::new("30", 30.0, false),
    FrameRatePreset::new("59.94 (DF)", 59.94, true),
    FrameRatePreset::new("60", 60.0, false),
];

impl FrameRatePreset {
    const fn new(label: &'static str, fps: f64, drop_frame: bool) -> Self {
        Self {
            label,
            fps,
            drop_frame,
        }
    }

    /// The preset selected when nothing else is chosen (29.97 DF).
    pub fn default_preset() -> &'static Self {
        &FRAME_RATE_PRESETS[3]
    }

    /// Find a preset by label.
    ///
    /// Matching ignores case, spaces and brackets, so `29.97 (DF)`,
    /// `29.97df` and `29.97 DF` are equivalent. A bare rate such as `29.97`
    /// selects the first preset with that rate.
    pub fn find(label: &str) -> Option<&'static Self> {
        let wanted = normalize_label(label);
        if wanted.is_empty() {
            return None;
        }

        FRAME_RATE_PRESETS
            .iter()
            .find(|preset| normalize_label(preset.label) == wanted)
            .or_else(|| {
                FRAME_RATE_PRESETS
                    .iter()
                    .find(|preset| strip_counting_suffix(&normalize_label(preset.label)) == wanted)
            })
    }

    /// Like [`find`](Self::find), with an error naming the valid labels.
    pub fn parse(label: &str) -> Result<&'static Self> {
        Self::find(label).ok_or_else(|| {
            let known: Vec<&str> = FRAME_RATE_PRESETS.iter().map(|p| p.label).collect();
            HandoverError::NotFound(format!(
                "frame rate preset '{}' (expected one of: {})",
                label,
                known.join(", ")
            ))
        })
    }
}

fn normalize_label(label: &str) -> String {
    label
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '.')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

fn strip_counting_suffix(label: &str) -> &str {
    label
        .strip_suffix("ndf")
        .or_else(|| label.strip_suffix("df"))
        .unwrap_or(label)
}

/// Settings for a single export call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportSettings {
    /// Frames per second
    pub frames_per_second: f64,
    /// Drop-frame counting (only honoured at 29.97 and 59.94)
    #[serde(default)]
    pub drop_frame: bool,
    /// Sequence name written into the export
    pub sequence_name: String,
}

impl ExportSettings {
    /// Create settings from raw values.
    pub fn new(frames_per_second: f64, drop_frame: bool, sequence_name: impl Into<String>) -> Self {
        Self {
            frames_per_second,
            drop_frame,
            sequence_name: sequence_name.into(),
        }
    }

    /// Create settings from a menu preset.
    pub fn from_preset(preset: &FrameRatePreset, sequence_name: impl Into<String>) -> Self {
        Self::new(preset.fps, preset.drop_frame, sequence_name)
    }

    /// Rounded integer frame rate.
    pub fn timebase(&self) -> i64 {
        rate::timebase(self.frames_per_second)
    }

    /// NTSC flag for the sequence.
    pub fn is_ntsc(&self) -> bool {
        rate::is_ntsc(self.frames_per_second, self.drop_frame)
    }

    /// Duration of one frame in seconds.
    pub fn frame_duration(&self) -> f64 {
        rate::frame_duration(self.frames_per_second)
    }

    /// Timecode string for a time offset under these settings.
    pub fn timecode(&self, seconds: f64) -> String {
        seconds_to_timecode(seconds, self.frames_per_second, self.drop_frame)
    }

    /// Reject frame rates that cannot produce timecode.
    ///
    /// For settings built with [`ExportSettings::new`] from raw input. The
    /// exporters do not call this, and every preset passes it.
    pub fn validate(&self) -> Result<()> {
        let fps = self.frames_per_second;
        if !fps.is_finite() || fps < 0.5 {
            return Err(HandoverError::InvalidParameter(format!(
                "frame rate must be a finite number of at least 0.5 fps, got {}",
                fps
            )));
        }
        Ok(())
    }
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self::from_preset(FrameRatePreset::default_preset(), DEFAULT_SEQUENCE_NAME)
    }
}
