//! Wall-clock to playback-time mapping.

use std::time::Instant;

use crate::core::time::Time;

/// Maps monotonic wall-clock time to logical playback time through a single
/// start offset, realigned on every seek and on resume.
#[derive(Debug)]
pub struct PlaybackClock {
    epoch: Instant,
    start_time: Time,
}

impl PlaybackClock {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
            start_time: 0,
        }
    }

    fn now(&self) -> Time {
        self.epoch.elapsed().as_nanos() as Time
    }

    /// Realign the origin so that `position()` reads `position` right now.
    pub fn align(&mut self, position: Time) {
        self.start_time = self.now() - position;
    }

    /// Logical playback time: wall-clock elapsed since the aligned origin.
    pub fn position(&self) -> Time {
        self.now() - self.start_time
    }
}

impl Default for PlaybackClock {
    fn default() -> Self {
        Self::new()
    }
}
