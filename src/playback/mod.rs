//! Playback synchronization: controller, state machine, clock and tick
//! scheduling.

pub mod clock;
pub mod config;
pub mod player;
pub mod scheduler;
pub mod state;

pub use clock::PlaybackClock;
pub use config::{DecodePath, PlayerConfig, RenderPath};
pub use player::{Player, PlayerBuilder, Visibility};
pub use scheduler::{PollScheduler, Scheduler, TickToken};
pub use state::PlaybackState;
