//! Handover Core - Foundation types for marker export
//!
//! This crate provides the pieces every exporter shares:
//! - Frame rate helpers (timebase, NTSC flag, frame duration)
//! - SMPTE timecode conversion with drop-frame counting
//! - The common error type

pub mod error;
pub mod rate;
pub mod timecode;

pub use error::{HandoverError, Result};
pub use timecode::{seconds_to_timecode, DropFrame, Timecode, INVALID_TIMECODE};
