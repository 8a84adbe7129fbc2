//! Downstream collaborators: the pixel renderer and the audio output sink.

use crate::core::time::Time;

/// Pixel output for decoded video frames.
///
/// Frame delivery happens inside the video track implementation; the
/// controller only uses the renderer for connection progress and teardown.
pub trait Renderer {
    /// Show connection/buffering progress while the source is not yet
    /// established.
    fn render_progress(&mut self, progress: f32);
    /// Release GPU or surface resources.
    fn destroy(&mut self);
}

/// Device that consumes decoded audio asynchronously.
pub trait AudioSink {
    fn enabled(&self) -> bool;
    /// While disabled the sink drops decoded output instead of enqueueing it.
    fn set_enabled(&mut self, enabled: bool);
    /// Duration of audio queued ahead of the playback cursor.
    fn enqueued_time(&self) -> Time;
    /// Zero the enqueued-duration counter without touching queued audio.
    fn reset_enqueued_time(&mut self);
    /// Discard queued audio immediately.
    fn stop(&mut self);
    fn volume(&self) -> f32;
    fn set_volume(&mut self, volume: f32);
    /// Release the output device.
    fn destroy(&mut self);
}
