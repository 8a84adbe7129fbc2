//! Core time representation shared by every playback module.

pub mod time;

pub use time::{Time, ZERO};
