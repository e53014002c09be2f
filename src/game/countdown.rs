use std::time::{Duration, Instant};

const ONE_SECOND: Duration = Duration::from_secs(1);

/// One-second cadence for the limited-time mode, interleaved with the main
/// tick on the same thread via deadline polling
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Countdown {
    remaining: u32,
    deadline: Option<Instant>,
}

impl Countdown {
    /// Start a countdown of `seconds` seconds, with the first firing one
    /// second from now
    pub(super) fn start(seconds: u32) -> Countdown {
        Countdown {
            remaining: seconds,
            deadline: Some(Instant::now() + ONE_SECOND),
        }
    }

    /// Seconds left on the clock
    pub(super) fn remaining(&self) -> u32 {
        self.remaining
    }

    /// When the next second elapses, or `None` if the countdown has been
    /// stopped
    pub(super) fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub(super) fn due(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|deadline| deadline <= now)
    }

    /// Count one second off the clock and re-arm the deadline.  Returns the
    /// new remaining time.
    pub(super) fn second_elapsed(&mut self) -> u32 {
        self.remaining = self.remaining.saturating_sub(1);
        if let Some(deadline) = self.deadline {
            self.deadline = Some(deadline + ONE_SECOND);
        }
        self.remaining
    }

    pub(super) fn stop(&mut self) {
        self.deadline = None;
    }
}
