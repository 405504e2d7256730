//! Integration tests for timecode conversion as the exporters see it.

use handover_core::{rate, seconds_to_timecode, Timecode, INVALID_TIMECODE};
use handover_markers::{ExportSettings, FrameRatePreset, FRAME_RATE_PRESETS};

// ── Basic conversions ──────────────────────────────────────────

#[test]
fn whole_second_at_30() {
    assert_eq!(seconds_to_timecode(1.0, 30.0, false), "00:00:01:00");
}

#[test]
fn half_second_rounds_to_frame() {
    assert_eq!(seconds_to_timecode(1.5, 30.0, false), "00:00:01:15");
}

#[test]
fn minute_rollover() {
    assert_eq!(seconds_to_timecode(60.0, 30.0, false), "00:01:00:00");
}

#[test]
fn hours_grow_past_a_day() {
    assert_eq!(seconds_to_timecode(90_000.0, 24.0, false), "25:00:00:00");
}

// ── Drop frame ─────────────────────────────────────────────────

#[test]
fn drop_frame_tenth_minute_starts_at_zero() {
    let tc = seconds_to_timecode(600.0, 29.97, true);
    assert_eq!(tc, "00:10:00:00");
}

#[test]
fn drop_frame_first_minute_starts_at_two() {
    let tc = Timecode::from_seconds(1800.0 / 29.97, 29.97, true).unwrap();
    assert_eq!((tc.minutes, tc.seconds, tc.frames), (1, 0, 2));
}

#[test]
fn drop_frame_output_keeps_colons() {
    let tc = seconds_to_timecode(1800.0 / 29.97, 29.97, true);
    assert!(!tc.contains(';'));
}

#[test]
fn ndf_preset_at_29_97_counts_every_number() {
    let settings = ExportSettings::from_preset(FrameRatePreset::find("29.97 (NDF)").unwrap(), "S");
    assert_eq!(settings.timecode(1800.0 / 29.97), "00:01:00:00");
}

// ── Ordering ───────────────────────────────────────────────────

#[test]
fn timecodes_never_go_backwards_at_integral_and_drop_frame_rates() {
    for preset in FRAME_RATE_PRESETS
        .iter()
        .filter(|p| p.drop_frame || !rate::is_fractional(p.fps))
    {
        let mut previous = Timecode::from_seconds(0.0, preset.fps, preset.drop_frame).unwrap();
        let mut seconds = 0.0;
        while seconds < 1300.0 {
            seconds += 0.013;
            let current = Timecode::from_seconds(seconds, preset.fps, preset.drop_frame).unwrap();
            assert!(
                previous <= current,
                "{}: {} went back to {} at {}s",
                preset.label,
                previous,
                current,
                seconds
            );
            previous = current;
        }
    }
}

// ── Degenerate input ───────────────────────────────────────────

#[test]
fn nan_time_renders_placeholder() {
    assert!(Timecode::from_seconds(f64::NAN, 30.0, false).is_none());
    assert_eq!(seconds_to_timecode(f64::NAN, 30.0, false), INVALID_TIMECODE);
    assert_eq!(INVALID_TIMECODE, "NaN:NaN:NaN:NaN");
}

#[test]
fn one_frame_out_point_per_preset() {
    for preset in FRAME_RATE_PRESETS.iter() {
        let settings = ExportSettings::from_preset(preset, "S");
        let tc_in = Timecode::from_seconds(10.0, preset.fps, preset.drop_frame).unwrap();
        let tc_out =
            Timecode::from_seconds(10.0 + settings.frame_duration(), preset.fps, preset.drop_frame)
                .unwrap();
        let timebase = settings.timebase() as u32;

        let expected = if tc_in.frames + 1 == timebase {
            (tc_in.seconds + 1, 0)
        } else {
            (tc_in.seconds, tc_in.frames + 1)
        };
        assert_eq!((tc_out.seconds, tc_out.frames), expected, "{}", preset.label);
    }
}
