//! Frame clocks
//!
//! A clock blocks until the next tick is due and counts elapsed ticks.

use std::time::{Duration, Instant};

pub trait FrameClock {
    /// Block until the next tick should run
    fn wait_for_next_tick(&mut self);

    /// Ticks started so far
    fn elapsed_ticks(&self) -> u64;

    /// Target ticks per second
    fn tick_rate(&self) -> u32;

    /// Convert a tick count to wall-clock seconds at the target rate
    fn ticks_to_secs(&self, ticks: u64) -> f32 {
        ticks as f32 / self.tick_rate() as f32
    }
}

/// Paces ticks with `std::thread::sleep`
#[derive(Debug)]
pub struct SleepClock {
    tick_rate: u32,
    period: Duration,
    next_deadline: Option<Instant>,
    ticks: u64,
}

impl SleepClock {
    pub fn new(tick_rate: u32) -> Self {
        let tick_rate = tick_rate.max(1);
        Self {
            tick_rate,
            period: Duration::from_secs_f64(1.0 / tick_rate as f64),
            next_deadline: None,
            ticks: 0,
        }
    }
}

impl FrameClock for SleepClock {
    fn wait_for_next_tick(&mut self) {
        let now = Instant::now();
        match self.next_deadline {
            None => self.next_deadline = Some(now + self.period),
            Some(deadline) => {
                if deadline > now {
                    std::thread::sleep(deadline - now);
                    self.next_deadline = Some(deadline + self.period);
                } else {
                    // Fell behind; don't try to catch up with a burst of ticks
                    self.next_deadline = Some(now + self.period);
                }
            }
        }
        self.ticks += 1;
    }

    fn elapsed_ticks(&self) -> u64 {
        self.ticks
    }

    fn tick_rate(&self) -> u32 {
        self.tick_rate
    }
}

/// Never blocks; for tests and headless batch runs
#[derive(Debug, Clone)]
pub struct ManualClock {
    tick_rate: u32,
    ticks: u64,
}

impl ManualClock {
    pub fn new(tick_rate: u32) -> Self {
        Self {
            tick_rate: tick_rate.max(1),
            ticks: 0,
        }
    }
}

impl FrameClock for ManualClock {
    fn wait_for_next_tick(&mut self) {
        self.ticks += 1;
    }

    fn elapsed_ticks(&self) -> u64 {
        self.ticks
    }

    fn tick_rate(&self) -> u32 {
        self.tick_rate
    }
}
