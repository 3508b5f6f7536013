//! Robot state and the move/rotate primitives
//!
//! The robot is either translating or counting down a rotation phase. Which one
//! is decided purely by `rotation_ticks_remaining`.

use glam::Vec2;
use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::{Bounds, circle_exceeds_bounds};
use crate::settings::{Rgb, Settings};
use crate::{heading_to_direction, normalize_degrees};

/// What the robot does on its next tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MotionState {
    /// Free to attempt a straight-line move
    Translating,
    /// Stationary, waiting out a rotation phase
    Rotating { ticks_remaining: u32 },
}

/// The circular robot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Robot {
    /// Center of the circle
    pos: Vec2,
    radius: f32,
    color: Rgb,
    /// Direction of travel in degrees, [0, 360)
    heading: f32,
    /// Pixels per tick
    translational_speed: f32,
    /// Degrees per tick of rotation
    rotational_speed: f32,
    max_rotation_ticks: u32,
    /// 0 = translating, otherwise ticks left in the current rotation phase
    rotation_ticks_remaining: u32,
}

impl Robot {
    pub fn new(
        pos: Vec2,
        radius: f32,
        translational_speed: f32,
        rotational_speed: f32,
        max_rotation_ticks: u32,
    ) -> Self {
        debug_assert!(radius > 0.0, "robot radius must be positive");
        debug_assert!(max_rotation_ticks > 0, "rotation phase bound must be positive");
        Self {
            pos,
            radius,
            color: Rgb::BLUE,
            heading: 0.0,
            translational_speed,
            rotational_speed,
            max_rotation_ticks,
            rotation_ticks_remaining: 0,
        }
    }

    /// Robot centered in the arena described by `settings`
    pub fn from_settings(settings: &Settings) -> Self {
        let mut robot = Self::new(
            settings.arena_center(),
            settings.robot_radius,
            settings.translational_speed,
            settings.rotational_speed,
            settings.max_rotation_ticks(),
        );
        robot.color = settings.robot_color;
        robot
    }

    /// Test fixture: robot mid-run with a given heading and rotation countdown
    #[cfg(test)]
    pub(crate) fn with_state(mut self, heading: f32, rotation_ticks_remaining: u32) -> Self {
        self.heading = normalize_degrees(heading);
        self.rotation_ticks_remaining = rotation_ticks_remaining;
        self
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn heading(&self) -> f32 {
        self.heading
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn rotation_ticks_remaining(&self) -> u32 {
        self.rotation_ticks_remaining
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn translational_speed(&self) -> f32 {
        self.translational_speed
    }

    pub fn rotational_speed(&self) -> f32 {
        self.rotational_speed
    }

    pub fn max_rotation_ticks(&self) -> u32 {
        self.max_rotation_ticks
    }

    pub fn motion_state(&self) -> MotionState {
        match self.rotation_ticks_remaining {
            0 => MotionState::Translating,
            ticks_remaining => MotionState::Rotating { ticks_remaining },
        }
    }

    /// Where the next move would put the robot's center
    pub fn candidate_position(&self) -> Vec2 {
        self.pos + heading_to_direction(self.heading) * self.translational_speed
    }

    /// Would the robot's circle at `center` cross an edge of `bounds`?
    pub fn collides(&self, center: Vec2, bounds: &Bounds) -> bool {
        circle_exceeds_bounds(center, self.radius, bounds)
    }

    /// Step forward along the heading unless that would cross the boundary.
    ///
    /// Returns false and leaves the position untouched on collision.
    pub fn attempt_move(&mut self, bounds: &Bounds) -> bool {
        let candidate = self.candidate_position();
        if self.collides(candidate, bounds) {
            return false;
        }
        self.pos = candidate;
        true
    }

    /// Start a rotation phase of random length and turn the heading accordingly.
    ///
    /// Returns the number of ticks the phase will last.
    pub fn begin_rotation<R: Rng + ?Sized>(&mut self, rng: &mut R) -> u32 {
        let ticks = rng.random_range(1..=self.max_rotation_ticks);
        self.rotation_ticks_remaining = ticks;
        self.heading = normalize_degrees(self.heading + ticks as f32 * self.rotational_speed);
        ticks
    }

    /// Count down one tick of the current rotation phase.
    ///
    /// Caller must only call this while rotating.
    pub fn tick_rotation(&mut self) {
        debug_assert!(self.rotation_ticks_remaining > 0, "tick_rotation while translating");
        self.rotation_ticks_remaining -= 1;
    }
}

/// Seed wrapper so a run can be reproduced from its log line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}
