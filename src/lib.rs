//! Playback synchronization controller for streamed, multiplexed
//! audio/video.
//!
//! The controller owns the wall-clock mapping between elapsed real time and
//! media position, drives decode work for the video and audio tracks on
//! every scheduler tick, and enforces a bounded-lag backpressure policy so
//! audio output never drifts far ahead of the incoming stream. Decoding,
//! rendering and transport are external collaborators injected behind the
//! traits in [`media`].
//!
//! Typical setup:
//!
//! ```no_run
//! use riffle::{Player, PlayerConfig, PollScheduler};
//! # fn collaborators() -> (Box<dyn riffle::Source>, Box<dyn riffle::Demuxer>,
//! #     Box<dyn riffle::Track>, Box<dyn riffle::Renderer>,
//! #     Box<dyn riffle::Track>, Box<dyn riffle::AudioSink>) { unimplemented!() }
//! let (source, demuxer, video, renderer, audio, sink) = collaborators();
//! let mut player = Player::builder(
//!     PlayerConfig::default(),
//!     source,
//!     demuxer,
//!     Box::new(PollScheduler::new()),
//! )
//! .video(video)
//! .renderer(renderer)
//! .audio(audio, sink)
//! .build();
//!
//! player.start_loading();
//! while player.is_scheduled() {
//!     player.tick();
//! }
//! ```

pub mod core;
pub mod media;
pub mod playback;
pub mod runtime;

pub use crate::core::time::{Time, ZERO};
pub use media::{AudioSink, Demuxer, Renderer, Source, StreamChannel, Track};
pub use playback::{
    DecodePath, PlaybackClock, PlaybackState, Player, PlayerBuilder, PlayerConfig, PollScheduler,
    RenderPath, Scheduler, TickToken, Visibility,
};
pub use runtime::{PlayerCommand, PlayerRunner, RunnerError};
