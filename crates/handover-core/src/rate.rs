//! Frame rate helpers.
//!
//! Frame rates are plain `f64` frames-per-second values as chosen in the
//! export menu (23.976, 29.97, ...). Editing tools describe a sequence rate
//! by its rounded integer timebase plus an NTSC flag.

/// Nominal rates offered for export, in frames per second.
pub const SUPPORTED_RATES: [f64; 7] = [23.976, 24.0, 25.0, 29.97, 30.0, 59.94, 60.0];

/// Rounded integer frame rate used by sequence settings (30 for 29.97).
#[inline]
pub fn timebase(fps: f64) -> i64 {
    fps.round() as i64
}

/// Whether the rate has a fractional part.
#[inline]
pub fn is_fractional(fps: f64) -> bool {
    fps % 1.0 != 0.0
}

/// NTSC flag for a sequence: set when drop-frame was requested or the rate
/// is fractional, whichever way the drop-frame setting points.
#[inline]
pub fn is_ntsc(fps: f64, drop_frame: bool) -> bool {
    drop_frame || is_fractional(fps)
}

/// Duration of a single frame in seconds.
#[inline]
pub fn frame_duration(fps: f64) -> f64 {
    1.0 / fps
}
