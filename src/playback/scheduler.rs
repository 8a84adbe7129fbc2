//! Cooperative tick scheduling.

/// Opaque handle to a scheduled tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickToken(u64);

impl TickToken {
    /// Mint a token for a newly scheduled tick. Implementors choose the id;
    /// the controller only stores and returns tokens.
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

/// Recurring-tick scheduler ("call me back before the next refresh").
///
/// The controller holds at most one live token. It re-arms as the first
/// action of every tick and cancels synchronously on pause, so a cancelled
/// tick never fires.
pub trait Scheduler {
    /// Arm the next tick.
    fn schedule(&mut self) -> TickToken;
    /// Cancel a pending tick before it fires.
    fn cancel(&mut self, token: TickToken);
}

/// Scheduler for hosts that drive ticks from their own loop: `schedule`
/// arms a flag the host polls, `cancel` clears it.
#[derive(Debug, Default)]
pub struct PollScheduler {
    armed: bool,
    last_token: u64,
}

impl PollScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while a tick is armed and should be delivered by the host.
    pub fn is_armed(&self) -> bool {
        self.armed
    }
}

impl Scheduler for PollScheduler {
    fn schedule(&mut self) -> TickToken {
        self.armed = true;
        self.last_token += 1;
        TickToken::new(self.last_token)
    }

    fn cancel(&mut self, _token: TickToken) {
        self.armed = false;
    }
}
