//! Controller configuration.

use crate::core::time::{constants, Time};

/// Decoder implementation preference, selected once at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodePath {
    /// Use the fast decoder when the platform supports it.
    Accelerated,
    /// Always use the portable decoder.
    Portable,
}

/// Renderer implementation preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderPath {
    /// Use the GPU renderer when the platform supports it.
    Gpu,
    /// Always use the fallback renderer.
    Fallback,
}

/// Options recognized by the player.
#[derive(Debug, Clone)]
pub struct PlayerConfig {
    /// Upper bound on audio queued ahead of playback before the sink is
    /// muted so decode can catch up.
    pub max_audio_lag: Time,
    /// Restart from the beginning when the source ends. The semantics live
    /// entirely in the source collaborator; carried here so embedders
    /// configure the whole pipeline from one place.
    pub loop_playback: bool,
    /// Attach the video pipeline.
    pub video: bool,
    /// Attach the audio pipeline.
    pub audio: bool,
    /// Opt out of the accelerated decode path even when available.
    pub disable_accelerated_decode: bool,
    /// Opt out of the GPU renderer even when available.
    pub disable_gpu_renderer: bool,
    /// Pause automatically while the display surface is hidden.
    pub pause_when_hidden: bool,
    /// Decode one video frame after `stop()` so a poster frame stays
    /// visible.
    pub decode_first_frame: bool,
    /// Begin playback as soon as the source is started.
    pub autoplay: bool,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            max_audio_lag: 250 * constants::NANOS_PER_MILLI,
            loop_playback: true,
            video: true,
            audio: true,
            disable_accelerated_decode: false,
            disable_gpu_renderer: false,
            pause_when_hidden: true,
            decode_first_frame: true,
            autoplay: true,
        }
    }
}

impl PlayerConfig {
    /// Decoder strategy for embedders constructing the track collaborators.
    pub fn decode_path(&self) -> DecodePath {
        if self.disable_accelerated_decode {
            DecodePath::Portable
        } else {
            DecodePath::Accelerated
        }
    }

    /// Renderer strategy for embedders constructing the renderer.
    pub fn render_path(&self) -> RenderPath {
        if self.disable_gpu_renderer {
            RenderPath::Fallback
        } else {
            RenderPath::Gpu
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::time::from_millis;

    #[test]
    fn test_defaults() {
        let config = PlayerConfig::default();
        assert_eq!(config.max_audio_lag, from_millis(250));
        assert!(config.loop_playback);
        assert!(config.video);
        assert!(config.audio);
        assert!(config.pause_when_hidden);
        assert!(config.decode_first_frame);
        assert!(config.autoplay);
    }

    #[test]
    fn test_path_selection() {
        let mut config = PlayerConfig::default();
        assert_eq!(config.decode_path(), DecodePath::Accelerated);
        assert_eq!(config.render_path(), RenderPath::Gpu);

        config.disable_accelerated_decode = true;
        config.disable_gpu_renderer = true;
        assert_eq!(config.decode_path(), DecodePath::Portable);
        assert_eq!(config.render_path(), RenderPath::Fallback);
    }
}
