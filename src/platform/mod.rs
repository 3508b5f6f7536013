//! Platform abstraction layer
//!
//! Handles the host-side collaborators of the simulation loop:
//! - Frame pacing (fixed tick rate)
//! - Quit signalling

pub mod clock;
pub mod quit;

pub use clock::{FrameClock, ManualClock, SleepClock};
pub use quit::{InterruptQuit, QuitSignal, TickLimit};
