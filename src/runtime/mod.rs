//! Thread-backed playback driver.
//!
//! Owns a [`Player`] on a dedicated thread, paces ticks at a fixed interval
//! and accepts commands over a crossbeam channel. Embedders that already
//! have a frame loop can drive [`Player::tick`] directly instead.

use std::thread;
use std::time::Duration;

use crossbeam::channel::{self, RecvTimeoutError, Sender};
use log::info;

use crate::core::time::Time;
use crate::playback::{Player, Visibility};

/// Command accepted by the playback thread.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlayerCommand {
    Play,
    Pause,
    Stop,
    Seek(Time),
    NextFrame,
    SetVolume(f32),
    Visibility(Visibility),
    Shutdown,
}

/// Error type for the playback driver.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    #[error("playback thread disconnected")]
    Disconnected,
}

/// Handle to the playback thread.
pub struct PlayerRunner {
    command_tx: Sender<PlayerCommand>,
    thread: Option<thread::JoinHandle<()>>,
}

impl PlayerRunner {
    /// Spawn the playback thread. `build` runs on that thread to construct
    /// the player, so collaborators do not need to be `Send`. The player's
    /// source is started (and autoplay honored) before the loop begins.
    pub fn spawn<F>(tick_interval: Duration, build: F) -> Self
    where
        F: FnOnce() -> Player + Send + 'static,
    {
        let (command_tx, command_rx) = channel::unbounded();

        let thread = thread::spawn(move || {
            let mut player = build();
            player.start_loading();
            info!("playback thread started");

            'outer: loop {
                match command_rx.recv_timeout(tick_interval) {
                    Ok(command) => {
                        if Self::handle(&mut player, command) {
                            break;
                        }
                        // Drain anything queued behind the first command so
                        // ticks never starve behind a command burst.
                        while let Ok(command) = command_rx.try_recv() {
                            if Self::handle(&mut player, command) {
                                break 'outer;
                            }
                        }
                    }
                    Err(RecvTimeoutError::Timeout) => {}
                    Err(RecvTimeoutError::Disconnected) => break,
                }

                if player.is_scheduled() {
                    player.tick();
                }
            }

            player.destroy();
            info!("playback thread stopped");
        });

        Self {
            command_tx,
            thread: Some(thread),
        }
    }

    /// Returns true when the loop should exit.
    fn handle(player: &mut Player, command: PlayerCommand) -> bool {
        match command {
            PlayerCommand::Play => player.play(),
            PlayerCommand::Pause => player.pause(),
            PlayerCommand::Stop => player.stop(),
            PlayerCommand::Seek(time) => player.seek(time),
            PlayerCommand::NextFrame => {
                player.next_frame();
            }
            PlayerCommand::SetVolume(volume) => player.set_volume(volume),
            PlayerCommand::Visibility(visibility) => player.visibility_changed(visibility),
            PlayerCommand::Shutdown => return true,
        }
        false
    }

    /// Send a command to the playback thread.
    pub fn send(&self, command: PlayerCommand) -> Result<(), RunnerError> {
        self.command_tx
            .send(command)
            .map_err(|_| RunnerError::Disconnected)
    }
}

impl Drop for PlayerRunner {
    fn drop(&mut self) {
        let _ = self.command_tx.send(PlayerCommand::Shutdown);
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::{Demuxer, Source, StreamChannel};
    use crate::playback::{PlayerConfig, PollScheduler};
    use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
    use std::sync::Arc;

    struct SharedSource {
        started: Arc<AtomicBool>,
        polls: Arc<AtomicU32>,
        destroyed: Arc<AtomicBool>,
    }

    impl Source for SharedSource {
        fn start(&mut self) {
            self.started.store(true, Ordering::SeqCst);
        }
        fn established(&self) -> bool {
            self.polls.fetch_add(1, Ordering::SeqCst);
            false
        }
        fn progress(&self) -> f32 {
            0.0
        }
        fn destroy(&mut self) {
            self.destroyed.store(true, Ordering::SeqCst);
        }
    }

    struct NullDemuxer;

    impl Demuxer for NullDemuxer {
        fn connect(&mut self, _channel: StreamChannel) {}
    }

    fn wait_for(flag: &AtomicBool) -> bool {
        for _ in 0..200 {
            if flag.load(Ordering::SeqCst) {
                return true;
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        false
    }

    #[test]
    fn test_runner_ticks_and_shuts_down() {
        let started = Arc::new(AtomicBool::new(false));
        let polls = Arc::new(AtomicU32::new(0));
        let destroyed = Arc::new(AtomicBool::new(false));

        let runner = {
            let started = Arc::clone(&started);
            let polls = Arc::clone(&polls);
            let destroyed = Arc::clone(&destroyed);
            PlayerRunner::spawn(Duration::from_millis(5), move || {
                Player::builder(
                    PlayerConfig::default(),
                    Box::new(SharedSource {
                        started,
                        polls,
                        destroyed,
                    }),
                    Box::new(NullDemuxer),
                    Box::new(PollScheduler::new()),
                )
                .build()
            })
        };

        assert!(wait_for(&started));
        // Autoplay scheduled ticks; each tick polls source readiness.
        for _ in 0..200 {
            if polls.load(Ordering::SeqCst) >= 2 {
                break;
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        assert!(polls.load(Ordering::SeqCst) >= 2);

        drop(runner);
        assert!(destroyed.load(Ordering::SeqCst));
    }

    #[test]
    fn test_send_after_shutdown_fails() {
        let mut runner = PlayerRunner::spawn(Duration::from_millis(5), || {
            Player::builder(
                PlayerConfig::default(),
                Box::new(SharedSource {
                    started: Arc::new(AtomicBool::new(false)),
                    polls: Arc::new(AtomicU32::new(0)),
                    destroyed: Arc::new(AtomicBool::new(false)),
                }),
                Box::new(NullDemuxer),
                Box::new(PollScheduler::new()),
            )
            .build()
        });

        runner.send(PlayerCommand::Shutdown).unwrap();
        if let Some(thread) = runner.thread.take() {
            thread.join().unwrap();
        }
        // The receiver is gone once the thread exits.
        assert!(runner.send(PlayerCommand::Play).is_err());
    }
}
