// Simulation tick clock
//
// Converts wall-clock frame time into a whole number of fixed simulation
// ticks. Animation cadence and physics are expressed per tick, so the
// character moves and animates at the same rate whatever the display
// refresh rate is.

use std::time::{Duration, Instant};

/// Simulation rate (60 ticks per second)
pub const TICK_RATE: u32 = 60;
const TICK_DURATION: Duration = Duration::from_micros(16_667); // ~1/60 second

/// Maximum number of ticks run for one rendered frame
const MAX_CATCH_UP_TICKS: u32 = 5;

/// Fixed-timestep clock
#[derive(Debug)]
pub struct TickClock {
    /// Time not yet consumed by a tick
    accumulator: Duration,

    /// Time of last frame
    last_frame_time: Instant,
}

impl TickClock {
    pub fn new() -> Self {
        Self {
            accumulator: Duration::ZERO,
            last_frame_time: Instant::now(),
        }
    }

    /// Begin a new frame, returns the number of ticks to simulate
    pub fn begin_frame(&mut self) -> u32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame_time);
        self.last_frame_time = now;

        self.advance(frame_time)
    }

    /// Feed elapsed time into the accumulator and count the ticks it covers
    fn advance(&mut self, elapsed: Duration) -> u32 {
        self.accumulator += elapsed;

        let mut ticks = 0;
        while self.accumulator >= TICK_DURATION && ticks < MAX_CATCH_UP_TICKS {
            self.accumulator -= TICK_DURATION;
            ticks += 1;
        }

        // Drop the backlog instead of spiralling after a long stall
        if ticks == MAX_CATCH_UP_TICKS && self.accumulator >= TICK_DURATION {
            log::debug!(
                "Dropping {:?} of simulation backlog",
                self.accumulator
            );
            self.accumulator = Duration::ZERO;
        }

        ticks
    }
}

impl Default for TickClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_creation() {
        let clock = TickClock::new();
        assert_eq!(clock.accumulator, Duration::ZERO);
    }

    #[test]
    fn test_tick_duration_matches_rate() {
        let secs = TICK_DURATION.as_secs_f32();
        assert!((secs - 1.0 / TICK_RATE as f32).abs() < 0.0001);
    }

    #[test]
    fn test_partial_tick_is_carried() {
        let mut clock = TickClock::new();
        assert_eq!(clock.advance(Duration::from_millis(10)), 0);
        assert_eq!(clock.advance(Duration::from_millis(10)), 1);
        assert!(clock.accumulator < TICK_DURATION);
    }

    #[test]
    fn test_exact_ticks() {
        let mut clock = TickClock::new();
        assert_eq!(clock.advance(TICK_DURATION * 3), 3);
    }

    #[test]
    fn test_catch_up_is_capped() {
        let mut clock = TickClock::new();

        // 300ms would be 18 ticks
        assert_eq!(clock.advance(Duration::from_millis(300)), MAX_CATCH_UP_TICKS);

        // Backlog was dropped, so a short frame yields nothing
        assert_eq!(clock.advance(Duration::from_millis(1)), 0);
    }
}
