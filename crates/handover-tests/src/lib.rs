//! Integration test crate for Handover Player.
//!
//! This crate exists solely to hold cross-crate integration tests.
//! It depends on every handover crate to verify they work together.

#[cfg(test)]
mod export;

#[cfg(test)]
mod timecode;
