//! The playback synchronization controller.
//!
//! Owns the play/pause/stop/seek state machine, the wall-clock mapping, the
//! per-tick decode drive for both tracks and the bounded-lag backpressure on
//! audio output. Decoding, rendering and transport are injected behind the
//! traits in [`crate::media`].

use log::debug;

use crate::core::time::{self, Time};
use crate::media::{AudioSink, Demuxer, Renderer, Source, StreamChannel, Track};
use crate::playback::clock::PlaybackClock;
use crate::playback::config::PlayerConfig;
use crate::playback::scheduler::{Scheduler, TickToken};
use crate::playback::state::PlaybackState;

/// Display-surface visibility transition, delivered by the embedder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    Hidden,
}

/// Observer hook fired on playback transitions.
type Hook = Box<dyn FnMut()>;

/// Streaming playback controller.
///
/// All methods are synchronous and run on the embedder's thread; ticks are
/// delivered sequentially by the scheduler. Absent collaborators (no audio,
/// no video, no renderer) are a normal, permanent condition and every
/// operation degrades gracefully around them.
pub struct Player {
    config: PlayerConfig,
    state: PlaybackState,
    clock: PlaybackClock,
    scheduler: Box<dyn Scheduler>,
    tick_token: Option<TickToken>,

    source: Option<Box<dyn Source>>,
    video: Option<Box<dyn Track>>,
    renderer: Option<Box<dyn Renderer>>,
    audio: Option<Box<dyn Track>>,
    audio_out: Option<Box<dyn AudioSink>>,

    resume_on_show: bool,
    on_play: Option<Hook>,
    on_pause: Option<Hook>,
    destroyed: bool,
}

impl Player {
    pub fn builder(
        config: PlayerConfig,
        source: Box<dyn Source>,
        demuxer: Box<dyn Demuxer>,
        scheduler: Box<dyn Scheduler>,
    ) -> PlayerBuilder {
        PlayerBuilder {
            config,
            source,
            demuxer,
            scheduler,
            video: None,
            renderer: None,
            audio: None,
            on_play: None,
            on_pause: None,
        }
    }

    /// Start the source and, when autoplay is configured, begin playback
    /// immediately.
    pub fn start_loading(&mut self) {
        if let Some(source) = &mut self.source {
            source.start();
        }
        if self.config.autoplay {
            self.play();
        }
    }

    /// Begin (or resume) playback. No-op while a tick is already scheduled.
    pub fn play(&mut self) {
        if self.tick_token.is_some() {
            return;
        }
        self.tick_token = Some(self.scheduler.schedule());
        self.state.request_play();
        debug!("play requested");
    }

    /// Halt playback. No-op while already paused.
    pub fn pause(&mut self) {
        if self.state.paused {
            return;
        }
        if let Some(token) = self.tick_token.take() {
            self.scheduler.cancel(token);
        }
        self.state.mark_paused();

        let audio_playable = self.audio.as_ref().map_or(false, |a| a.can_play());
        if audio_playable {
            // The sink may have audio enqueued past the last rendered frame;
            // rewind so audio and video stay together across pause/resume.
            if let Some(sink) = &mut self.audio_out {
                sink.stop();
            }
            let position = self.position();
            self.seek(position);
        }

        debug!("paused");
        if let Some(on_pause) = &mut self.on_pause {
            on_pause();
        }
    }

    /// Pause and rewind to the start of the stream.
    pub fn stop(&mut self) {
        self.pause();
        self.seek(time::ZERO);
        if self.config.decode_first_frame {
            // Keep a poster frame visible while stopped.
            if let Some(video) = &mut self.video {
                video.decode();
            }
        }
    }

    /// Tear down every collaborator. Idempotent; also runs on drop.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.pause();
        if let Some(mut source) = self.source.take() {
            source.destroy();
        }
        if let Some(mut video) = self.video.take() {
            video.destroy();
        }
        if let Some(mut renderer) = self.renderer.take() {
            renderer.destroy();
        }
        if let Some(mut audio) = self.audio.take() {
            audio.destroy();
        }
        if let Some(mut sink) = self.audio_out.take() {
            sink.destroy();
        }
        self.destroyed = true;
        debug!("destroyed");
    }

    /// Current logical playback position.
    ///
    /// Audio is authoritative when playable: audio underrun is more
    /// perceptually disruptive than video judder.
    pub fn position(&self) -> Time {
        if let Some(audio) = &self.audio {
            if audio.can_play() {
                return audio.current_time() - audio.start_time();
            }
        }
        if let Some(video) = &self.video {
            return video.current_time() - video.start_time();
        }
        time::ZERO
    }

    /// Reposition both tracks at logical time `time` and realign the clock,
    /// so `position()` reads `time` before any decode has run.
    ///
    /// Negative times are clamped to the start of the stream.
    pub fn seek(&mut self, time: Time) {
        let time = time.max(time::ZERO);

        let audio_playable = self.audio.as_ref().map_or(false, |a| a.can_play());
        let start_offset = if audio_playable {
            self.audio.as_ref().map_or(time::ZERO, |a| a.start_time())
        } else {
            self.video.as_ref().map_or(time::ZERO, |v| v.start_time())
        };

        if let Some(video) = &mut self.video {
            video.seek(time + start_offset);
        }
        if let Some(audio) = &mut self.audio {
            audio.seek(time + start_offset);
        }

        self.clock.align(time);
        debug!("seek to {}", time::format_time(time));
    }

    /// Setter counterpart of [`Player::position`].
    pub fn set_position(&mut self, time: Time) {
        self.seek(time);
    }

    /// Wall-clock playback position derived from the clock alignment.
    ///
    /// Tracks report the decoded position; this reports real time elapsed
    /// since the last seek/resume alignment.
    pub fn elapsed(&self) -> Time {
        self.clock.position()
    }

    pub fn volume(&self) -> f32 {
        self.audio_out.as_ref().map_or(0.0, |sink| sink.volume())
    }

    pub fn set_volume(&mut self, volume: f32) {
        if let Some(sink) = &mut self.audio_out {
            sink.set_volume(volume);
        }
    }

    /// Decode a single video frame outside the regular tick loop.
    /// Returns whether a frame was produced.
    pub fn next_frame(&mut self) -> bool {
        let established = self.source.as_ref().map_or(false, |s| s.established());
        if established {
            if let Some(video) = &mut self.video {
                return video.decode();
            }
        }
        false
    }

    /// React to a display-surface visibility transition.
    ///
    /// Hiding records the play intent and pauses; showing resumes only if
    /// playback was actually wanted when hidden.
    pub fn visibility_changed(&mut self, visibility: Visibility) {
        if !self.config.pause_when_hidden {
            return;
        }
        match visibility {
            Visibility::Hidden => {
                self.resume_on_show = self.state.wants_to_play;
                self.pause();
            }
            Visibility::Visible => {
                if self.resume_on_show {
                    self.resume_on_show = false;
                    self.play();
                }
            }
        }
    }

    /// One scheduler tick: drive decode for both tracks.
    ///
    /// Re-arms the scheduler before any decode work, so a failure inside the
    /// decode pass cannot stall the loop. A tick arriving after the token
    /// was cancelled is ignored.
    pub fn tick(&mut self) {
        if self.tick_token.is_none() {
            return;
        }
        self.tick_token = Some(self.scheduler.schedule());

        let established = self.source.as_ref().map_or(false, |s| s.established());
        if !established {
            let progress = self.source.as_ref().map_or(0.0, |s| s.progress());
            if let Some(renderer) = &mut self.renderer {
                renderer.render_progress(progress);
            }
            return;
        }

        if !self.state.is_playing {
            // First tick with data: elapsed real time starts counting from
            // the already-current logical position.
            let position = self.position();
            self.clock.align(position);
            self.state.mark_playing();
            debug!(
                "source established, playback starting at {}",
                time::format_time(position)
            );
            if let Some(on_play) = &mut self.on_play {
                on_play();
            }
        }

        self.decode_streaming();
    }

    /// Decode everything buffered up to now. Buffered-but-undecoded data is
    /// latency, not safety margin, so each tick drains it completely.
    fn decode_streaming(&mut self) {
        if let Some(video) = &mut self.video {
            video.decode();
        }

        let max_audio_lag = self.config.max_audio_lag;
        if let (Some(audio), Some(sink)) = (&mut self.audio, &mut self.audio_out) {
            loop {
                // If a lot of audio is enqueued already, mute the sink and
                // catch up with the encoder.
                if sink.enqueued_time() > max_audio_lag {
                    debug!(
                        "audio lag {} over bound, muting sink to catch up",
                        time::format_time(sink.enqueued_time())
                    );
                    sink.reset_enqueued_time();
                    sink.set_enabled(false);
                }
                if !audio.decode() {
                    break;
                }
            }
            sink.set_enabled(true);
        }
    }

    /// True while a tick is scheduled. Hosts driving ticks from their own
    /// loop poll this before delivering one.
    pub fn is_scheduled(&self) -> bool {
        self.tick_token.is_some()
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }
}

impl Drop for Player {
    fn drop(&mut self) {
        self.destroy();
    }
}

/// Assembles a [`Player`] and performs the one-time demuxer wiring.
pub struct PlayerBuilder {
    config: PlayerConfig,
    source: Box<dyn Source>,
    demuxer: Box<dyn Demuxer>,
    scheduler: Box<dyn Scheduler>,
    video: Option<Box<dyn Track>>,
    renderer: Option<Box<dyn Renderer>>,
    audio: Option<(Box<dyn Track>, Box<dyn AudioSink>)>,
    on_play: Option<Hook>,
    on_pause: Option<Hook>,
}

impl PlayerBuilder {
    /// Attach the video track.
    pub fn video(mut self, track: Box<dyn Track>) -> Self {
        self.video = Some(track);
        self
    }

    /// Attach the renderer for progress display and teardown.
    pub fn renderer(mut self, renderer: Box<dyn Renderer>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    /// Attach the audio track together with the sink that consumes its
    /// output; the backpressure valve needs both.
    pub fn audio(mut self, track: Box<dyn Track>, sink: Box<dyn AudioSink>) -> Self {
        self.audio = Some((track, sink));
        self
    }

    /// Hook fired once when playback actually starts.
    pub fn on_play<F: FnMut() + 'static>(mut self, hook: F) -> Self {
        self.on_play = Some(Box::new(hook));
        self
    }

    /// Hook fired after every pause.
    pub fn on_pause<F: FnMut() + 'static>(mut self, hook: F) -> Self {
        self.on_pause = Some(Box::new(hook));
        self
    }

    /// Wire the demuxer channels for every attached track and build the
    /// controller. The `video`/`audio` config toggles drop the matching
    /// pipeline halves even when supplied.
    pub fn build(mut self) -> Player {
        if !self.config.video {
            self.video = None;
            self.renderer = None;
        }
        if !self.config.audio {
            self.audio = None;
        }

        if self.video.is_some() {
            self.demuxer.connect(StreamChannel::Video1);
        }
        if self.audio.is_some() {
            self.demuxer.connect(StreamChannel::Audio1);
        }

        let (audio, audio_out) = match self.audio {
            Some((track, sink)) => (Some(track), Some(sink)),
            None => (None, None),
        };

        Player {
            config: self.config,
            state: PlaybackState::new(),
            clock: PlaybackClock::new(),
            scheduler: self.scheduler,
            tick_token: None,
            source: Some(self.source),
            video: self.video,
            renderer: self.renderer,
            audio,
            audio_out,
            resume_on_show: false,
            on_play: self.on_play,
            on_pause: self.on_pause,
            destroyed: false,
        }
    }
}
