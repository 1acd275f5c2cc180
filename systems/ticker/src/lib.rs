#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Fixed-cadence ticker that turns frame deltas into flood step commands.

use std::time::Duration;

use flood_it_core::Command;

/// Interval between flood steps when nothing else is configured.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Upper bound on ticks emitted for a single frame.
pub const DEFAULT_MAX_TICKS_PER_FRAME: u32 = 8;

/// Configuration parameters required to construct the ticker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    tick_interval: Duration,
    max_ticks_per_frame: u32,
}

impl Config {
    /// Creates a new configuration using the provided tick cadence.
    #[must_use]
    pub const fn new(tick_interval: Duration) -> Self {
        Self {
            tick_interval,
            max_ticks_per_frame: DEFAULT_MAX_TICKS_PER_FRAME,
        }
    }

    /// Overrides how many ticks a single long frame may catch up on.
    #[must_use]
    pub const fn with_max_ticks_per_frame(mut self, max_ticks_per_frame: u32) -> Self {
        self.max_ticks_per_frame = max_ticks_per_frame;
        self
    }

    /// Interval between consecutive ticks.
    #[must_use]
    pub const fn tick_interval(&self) -> Duration {
        self.tick_interval
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_INTERVAL)
    }
}

/// Pure system that emits one [`Command::Tick`] per elapsed interval.
#[derive(Debug)]
pub struct Ticker {
    tick_interval: Duration,
    max_ticks_per_frame: u32,
    accumulator: Duration,
}

impl Ticker {
    /// Creates a new ticker using the supplied configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            tick_interval: config.tick_interval,
            max_ticks_per_frame: config.max_ticks_per_frame,
            accumulator: Duration::ZERO,
        }
    }

    /// Accumulates `dt` and pushes the ticks it pays for.
    ///
    /// A zero interval emits exactly one tick per frame. Time beyond the
    /// per-frame cap is dropped rather than carried into later frames.
    pub fn handle(&mut self, dt: Duration, out: &mut Vec<Command>) {
        if self.tick_interval.is_zero() {
            out.push(Command::Tick);
            return;
        }

        self.accumulator = self.accumulator.saturating_add(dt);
        let ticks = self.resolve_ticks();
        out.extend(std::iter::repeat(Command::Tick).take(ticks));
    }

    fn resolve_ticks(&mut self) -> usize {
        let mut ticks = 0;
        while self.accumulator >= self.tick_interval {
            if ticks == self.max_ticks_per_frame as usize {
                self.accumulator = Duration::ZERO;
                break;
            }
            self.accumulator -= self.tick_interval;
            ticks += 1;
        }
        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_interval_carries_over() {
        let mut ticker = Ticker::new(Config::new(Duration::from_millis(10)));
        ticker.accumulator = Duration::from_millis(25);

        assert_eq!(ticker.resolve_ticks(), 2);
        assert_eq!(ticker.accumulator, Duration::from_millis(5));
    }

    #[test]
    fn backlog_past_the_cap_is_dropped() {
        let config = Config::new(Duration::from_millis(10)).with_max_ticks_per_frame(2);
        let mut ticker = Ticker::new(config);
        ticker.accumulator = Duration::from_millis(95);

        assert_eq!(ticker.resolve_ticks(), 2);
        assert_eq!(ticker.accumulator, Duration::ZERO);
    }
}
