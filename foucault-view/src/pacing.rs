use std::time::{Duration, Instant};

// A stalled window gets at most this many ticks on its next frame, the rest
// of the backlog is dropped.
const MAX_CATCH_UP: u32 = 4;

const MIN_PERIOD: Duration = Duration::from_nanos(1);
// Used when the rate cannot be turned into a period at all.
const FALLBACK_PERIOD: Duration = Duration::from_secs(1);

/// Turns wall-clock time into a whole number of fixed-rate ticks.
#[derive(Debug, Clone)]
pub struct FramePacer {
    period: Duration,
    last: Option<Instant>,
    carry: Duration,
}

impl FramePacer {
    pub fn new(frame_rate_hz: f64) -> Self {
        FramePacer {
            period: Duration::try_from_secs_f64(1.0 / frame_rate_hz)
                .unwrap_or(FALLBACK_PERIOD)
                .max(MIN_PERIOD),
            last: None,
            carry: Duration::ZERO,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Number of ticks due at `now`. The very first frame always gets one.
    pub fn advance(&mut self, now: Instant) -> u32 {
        let Some(last) = self.last.replace(now) else {
            return 1;
        };

        self.carry += now.saturating_duration_since(last);
        let due = (self.carry.as_nanos() / self.period.as_nanos()) as u64;

        if due > MAX_CATCH_UP as u64 {
            self.carry = Duration::ZERO;
            return MAX_CATCH_UP;
        }

        self.carry -= self.period * due as u32;
        due as u32
    }

    pub fn until_next(&self) -> Duration {
        self.period.saturating_sub(self.carry)
    }
}
