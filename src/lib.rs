//! Brownian Robot - a circular robot wandering a rectangular arena
//!
//! Core modules:
//! - `sim`: Deterministic simulation (robot motion, boundary collision, rotation phases)
//! - `renderer`: Render surfaces the simulation draws its frames onto
//! - `platform`: Frame pacing and quit signalling for the native shell
//! - `settings`: Construction-time configuration

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};
pub use sim::{Simulation, TickEvent};

use glam::Vec2;

/// Default configuration constants
pub mod consts {
    /// Arena dimensions in pixels
    pub const ARENA_WIDTH: u32 = 900;
    pub const ARENA_HEIGHT: u32 = 500;

    /// Target simulation rate (ticks per second)
    pub const TICK_RATE: u32 = 60;

    /// Robot defaults
    pub const ROBOT_RADIUS: f32 = 20.0;
    /// Pixels per tick
    pub const ROBOT_TRANSLATIONAL_SPEED: f32 = 1.0;
    /// Degrees per tick
    pub const ROBOT_ROTATIONAL_SPEED: f32 = 1.0;
    /// Longest a single rotation phase may last
    pub const MAX_ROTATION_SECS: f32 = 2.0;

    pub const WINDOW_CAPTION: &str = "Brownian Motion in Robot";
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Unit direction vector for a heading in degrees
#[inline]
pub fn heading_to_direction(degrees: f32) -> Vec2 {
    let radians = degrees.to_radians();
    Vec2::new(radians.cos(), radians.sin())
}
