/// Default quiet period before a scroll is considered settled.
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 150;

/// An explicit, cancellable debounce timer for "scroll settled" detection.
///
/// The timer holds no clock of its own: the host arms it with the time of each scroll event and
/// polls it from its frame/timer loop. Re-arming pushes the deadline back, so a burst of events
/// fires once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SettleTimer {
    delay_ms: u64,
    deadline_ms: Option<u64>,
}

impl SettleTimer {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            deadline_ms: None,
        }
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    pub fn set_delay_ms(&mut self, delay_ms: u64) {
        self.delay_ms = delay_ms;
    }

    pub fn deadline_ms(&self) -> Option<u64> {
        self.deadline_ms
    }

    pub fn is_armed(&self) -> bool {
        self.deadline_ms.is_some()
    }

    /// Starts (or restarts) the quiet period at `now_ms`.
    pub fn arm(&mut self, now_ms: u64) {
        self.deadline_ms = Some(now_ms.saturating_add(self.delay_ms));
    }

    pub fn cancel(&mut self) {
        self.deadline_ms = None;
    }

    /// Returns `true` exactly once, the first time it is polled at or after the deadline.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => {
                self.deadline_ms = None;
                true
            }
            _ => false,
        }
    }
}

impl Default for SettleTimer {
    fn default() -> Self {
        Self::new(DEFAULT_SETTLE_DELAY_MS)
    }
}
