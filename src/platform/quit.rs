//! Quit signal sources, polled once per tick

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

pub trait QuitSignal {
    fn should_quit(&mut self) -> bool;
}

/// Quits once Ctrl-C has been pressed
#[derive(Debug, Clone, Default)]
pub struct InterruptQuit {
    flag: Arc<AtomicBool>,
    reported: bool,
}

impl InterruptQuit {
    /// Unhooked flag; only `raise` sets it
    pub fn new() -> Self {
        Self::default()
    }

    /// Route Ctrl-C to this source instead of killing the process.
    ///
    /// Only one handler can be installed per process.
    pub fn install() -> Result<Self, ctrlc::Error> {
        let quit = Self::new();
        let flag = Arc::clone(&quit.flag);
        ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst))?;
        Ok(quit)
    }

    pub fn raise(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }
}

impl QuitSignal for InterruptQuit {
    fn should_quit(&mut self) -> bool {
        let raised = self.flag.load(Ordering::SeqCst);
        if raised && !self.reported {
            log::info!("Interrupt received, quitting");
            self.reported = true;
        }
        raised
    }
}

/// Quits after a fixed number of polls.
///
/// The loop finishes the tick that observes quit, so a limit of 0 still runs one tick.
#[derive(Debug, Clone)]
pub struct TickLimit {
    remaining: u64,
}

impl TickLimit {
    pub fn new(ticks: u64) -> Self {
        Self { remaining: ticks }
    }
}

impl QuitSignal for TickLimit {
    fn should_quit(&mut self) -> bool {
        if self.remaining <= 1 {
            self.remaining = 0;
            return true;
        }
        self.remaining -= 1;
        false
    }
}

/// Quits when either source does. Both are polled every tick.
impl<A: QuitSignal, B: QuitSignal> QuitSignal for (A, B) {
    fn should_quit(&mut self) -> bool {
        let a = self.0.should_quit();
        let b = self.1.should_quit();
        a || b
    }
}
