//! SMPTE timecode conversion.
//!
//! Converts a time offset in seconds into `HH:MM:SS:FF` fields at a given
//! frame rate, optionally with drop-frame counting for 29.97 and 59.94.
//!
//! Frame counts are always obtained by rounding `seconds * fps`, never by
//! truncation, so floating-point drift does not lose a frame. The hours
//! field is not wrapped at 24.

use std::fmt;

/// Rendered form of a time that cannot be expressed as a timecode.
pub const INVALID_TIMECODE: &str = "NaN:NaN:NaN:NaN";

/// Tolerance used to recognise the drop-frame eligible rates.
const DROP_FRAME_TOLERANCE: f64 = 0.01;

/// Drop-frame counting parameters for an NTSC rate.
///
/// Frame *numbers* `0..dropped_per_minute` are skipped at the start of
/// every minute except minutes divisible by ten. No picture frames are
/// dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropFrame {
    /// Frame numbers skipped per minute
    pub dropped_per_minute: u32,
    /// Nominal integer rate the fields count in
    pub timebase: u32,
}

impl DropFrame {
    /// 29.97 fps, counted as 30 with two numbers dropped.
    pub const NTSC_30: Self = Self {
        dropped_per_minute: 2,
        timebase: 30,
    };

    /// 59.94 fps, counted as 60 with four numbers dropped.
    pub const NTSC_60: Self = Self {
        dropped_per_minute: 4,
        timebase: 60,
    };

    /// Drop-frame parameters for a rate within ±0.01 of 29.97 or 59.94.
    pub fn for_fps(fps: f64) -> Option<Self> {
        if (fps - 29.97).abs() < DROP_FRAME_TOLERANCE {
            Some(Self::NTSC_30)
        } else if (fps - 59.94).abs() < DROP_FRAME_TOLERANCE {
            Some(Self::NTSC_60)
        } else {
            None
        }
    }

    /// Inflate a real frame count so that plain div/mod by the timebase
    /// yields the displayed drop-frame fields.
    fn display_frames(self, frames: f64) -> f64 {
        let timebase = self.timebase as f64;
        let total_minutes = ((frames / timebase).floor() / 60.0).floor();
        let skipped = total_minutes - (total_minutes / 10.0).floor();
        frames + self.dropped_per_minute as f64 * skipped
    }
}

/// A decomposed timecode.
///
/// Field order makes the derived `Ord` temporal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timecode {
    /// Hours, unbounded (no 24h wrap)
    pub hours: u64,
    /// Minutes (0-59)
    pub minutes: u8,
    /// Seconds (0-59)
    pub seconds: u8,
    /// Frame within the second
    pub frames: u32,
    /// Counted with drop-frame numbering
    pub drop_frame: bool,
}

impl Timecode {
    /// Convert a time offset to a timecode.
    ///
    /// Drop-frame counting is applied only when requested *and* the rate is
    /// 29.97 or 59.94; at any other rate the flag is ignored.
    ///
    /// Returns `None` when the result has no timecode form: non-finite
    /// seconds, a rate whose timebase rounds to zero or is not finite, or a
    /// time before zero.
    pub fn from_seconds(seconds: f64, fps: f64, drop_frame: bool) -> Option<Self> {
        let frames = (seconds * fps).round();

        let drop = if drop_frame {
            DropFrame::for_fps(fps)
        } else {
            None
        };

        let (total_seconds, frame) = match drop {
            Some(df) => {
                let timebase = df.timebase as f64;
                let display = df.display_frames(frames);
                ((display / timebase).floor(), display % timebase)
            }
            None => ((frames / fps).floor(), frames % fps.round()),
        };

        if !total_seconds.is_finite() || !frame.is_finite() || total_seconds < 0.0 || frame < 0.0
        {
            return None;
        }

        let total_seconds = total_seconds as u64;
        Some(Self {
            hours: total_seconds / 3600,
            minutes: ((total_seconds / 60) % 60) as u8,
            seconds: (total_seconds % 60) as u8,
            frames: frame as u32,
            drop_frame: drop.is_some(),
        })
    }

    /// Broadcast form: `;` before the frame field for drop-frame values.
    pub fn to_smpte_string(&self) -> String {
        let separator = if self.drop_frame { ';' } else { ':' };
        format!(
            "{:02}:{:02}:{:02}{}{:02}",
            self.hours, self.minutes, self.seconds, separator, self.frames
        )
    }
}

impl fmt::Display for Timecode {
    /// Colon-separated in both counting modes.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds, self.frames
        )
    }
}

/// Convert seconds to an `HH:MM:SS:FF` string.
///
/// Never fails: a time that cannot be converted renders as
/// [`INVALID_TIMECODE`] so a whole export is not lost to one bad marker.
pub fn seconds_to_timecode(seconds: f64, fps: f64, drop_frame: bool) -> String {
    match Timecode::from_seconds(seconds, fps, drop_frame) {
        Some(tc) => tc.to_string(),
        None => INVALID_TIMECODE.to_string(),
    }
}
