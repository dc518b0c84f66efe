// clock.rs - Wall-clock gate for automatic generation advance

use std::time::{Duration, Instant};

pub const TICK_INTERVAL: Duration = Duration::from_millis(1000);

/// Decides when the event loop should advance a generation.
#[derive(Debug, Clone)]
pub struct TickClock {
    interval: Duration,
    last_update: Instant,
    paused: bool,
}

impl TickClock {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            last_update: now,
            paused: false,
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    /// True once more than one interval has passed since the last tick.
    /// Marks `now` as the last tick when it fires.
    pub fn should_tick(&mut self, now: Instant) -> bool {
        if self.paused {
            return false;
        }
        if now.saturating_duration_since(self.last_update) > self.interval {
            self.last_update = now;
            return true;
        }
        false
    }

    /// How long the loop may sleep before the next tick is due; `None` while paused
    pub fn time_until_next_tick(&self, now: Instant) -> Option<Duration> {
        if self.paused {
            return None;
        }
        let elapsed = now.saturating_duration_since(self.last_update);
        // +1ms: the tick fires only once the interval is strictly exceeded
        Some((self.interval + Duration::from_millis(1)).saturating_sub(elapsed))
    }
}
