use instant::Instant;

/// Wall-clock time owed to the fixed-step loop.
#[derive(Clone, Debug, Default)]
pub struct AccumulatorClock {
    accumulated: f64,
    last_timestamp: Option<Instant>,
}

impl AccumulatorClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accumulated(&self) -> f64 {
        self.accumulated
    }

    /// Seconds since the previous call; the first call yields zero.
    pub fn frame_delta(&mut self, now: Instant) -> f64 {
        let dt = match self.last_timestamp {
            Some(prev) if now > prev => (now - prev).as_secs_f64(),
            _ => 0.0,
        };
        self.last_timestamp = Some(now);
        dt
    }

    /// Bank an already-clamped frame delta. Negative or NaN deltas add nothing.
    pub fn deposit(&mut self, dt: f64) {
        if dt > 0.0 {
            self.accumulated += dt;
        }
    }

    /// Withdraw one tick if at least one is owed.
    pub fn take_tick(&mut self, tick: f64) -> bool {
        if self.accumulated >= tick {
            self.accumulated -= tick;
            true
        } else {
            false
        }
    }

    /// Drop owed time so a state change is not followed by a burst of stale ticks.
    pub fn reset(&mut self) {
        self.accumulated = 0.0;
    }
}
