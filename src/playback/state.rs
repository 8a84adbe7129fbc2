//! Playback state flags.

/// Controller state flags.
///
/// `wants_to_play` tracks user intent while `is_playing` tracks whether
/// decode has actually begun; the two differ while the source is still
/// connecting. Invariant: `is_playing` implies `!paused`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackState {
    pub paused: bool,
    pub wants_to_play: bool,
    pub is_playing: bool,
}

impl PlaybackState {
    /// Initial state: paused, nothing requested.
    pub fn new() -> Self {
        Self {
            paused: true,
            wants_to_play: false,
            is_playing: false,
        }
    }

    /// Playback requested; decode has not necessarily begun yet.
    pub fn request_play(&mut self) {
        self.wants_to_play = true;
        self.paused = false;
    }

    /// First tick with an established source: decode is now running.
    pub fn mark_playing(&mut self) {
        debug_assert!(!self.paused);
        self.is_playing = true;
    }

    /// Playback halted.
    pub fn mark_paused(&mut self) {
        self.wants_to_play = false;
        self.is_playing = false;
        self.paused = true;
    }
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = PlaybackState::new();
        assert!(state.paused);
        assert!(!state.wants_to_play);
        assert!(!state.is_playing);
    }

    #[test]
    fn test_request_play_then_mark_playing() {
        let mut state = PlaybackState::new();
        state.request_play();
        assert!(state.wants_to_play);
        assert!(!state.paused);
        assert!(!state.is_playing);

        state.mark_playing();
        assert!(state.is_playing);
        assert!(!state.paused);
    }

    #[test]
    fn test_mark_paused_clears_intent() {
        let mut state = PlaybackState::new();
        state.request_play();
        state.mark_playing();
        state.mark_paused();
        assert!(state.paused);
        assert!(!state.wants_to_play);
        assert!(!state.is_playing);
    }

    #[test]
    fn test_playing_implies_not_paused() {
        let mut state = PlaybackState::new();
        state.request_play();
        state.mark_playing();
        assert!(!(state.is_playing && state.paused));
        state.mark_paused();
        assert!(!(state.is_playing && state.paused));
    }
}
