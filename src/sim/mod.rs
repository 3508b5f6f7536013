//! Deterministic simulation module
//!
//! All robot logic lives here. This module must be pure and deterministic:
//! - One fixed-size step per tick
//! - Seeded RNG only, passed in by the caller
//! - No rendering or platform dependencies in the step itself

pub mod collision;
pub mod simulation;
pub mod state;
pub mod tick;

pub use collision::{Bounds, circle_exceeds_bounds};
pub use simulation::{SimStats, Simulation};
pub use state::{MotionState, RngState, Robot};
pub use tick::{TickEvent, tick};
