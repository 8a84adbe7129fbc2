//! Decodable, seekable media track (the video or audio decoder front-end).

use crate::core::time::Time;

/// One decodable track of the multiplexed stream.
///
/// `start_time`/`current_time` are in the track's own timebase; the
/// controller subtracts `start_time` to obtain logical playback time.
pub trait Track {
    /// Attempt to decode the next unit of buffered data.
    /// Returns true if output was produced, false if nothing was decodable.
    fn decode(&mut self) -> bool;
    /// Reposition decoding at `time` (track timebase, not logical time).
    fn seek(&mut self, time: Time);
    /// Presentation timestamp of the first unit of the track.
    fn start_time(&self) -> Time;
    /// Presentation timestamp of the most recently decoded unit.
    fn current_time(&self) -> Time;
    /// True once the track has seen enough data to produce output.
    fn can_play(&self) -> bool;
    /// Release decoder state.
    fn destroy(&mut self);
}
