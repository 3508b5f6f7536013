//! Fixed timestep simulation tick
//!
//! One call advances the robot by exactly one tick.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::Bounds;
use super::state::{MotionState, Robot};

/// What happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickEvent {
    /// Robot advanced along its heading
    Moved,
    /// Move was blocked; a rotation phase of `ticks` just began
    Collided { ticks: u32 },
    /// Rotation phase counted down; `remaining` ticks left afterwards
    Rotating { remaining: u32 },
}

/// Advance the robot by one tick
pub fn tick<R: Rng + ?Sized>(robot: &mut Robot, bounds: &Bounds, rng: &mut R) -> TickEvent {
    match robot.motion_state() {
        MotionState::Translating => {
            if robot.attempt_move(bounds) {
                TickEvent::Moved
            } else {
                let ticks = robot.begin_rotation(rng);
                TickEvent::Collided { ticks }
            }
        }
        MotionState::Rotating { .. } => {
            robot.tick_rotation();
            TickEvent::Rotating {
                remaining: robot.rotation_ticks_remaining(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_collision_starts_rotation_then_resumes() {
        let bounds = Bounds::from_size(100.0, 100.0);
        // One pixel from the right wall, heading east
        let mut robot = Robot::new(Vec2::new(89.5, 50.0), 10.0, 1.0, 1.0, 5);
        let mut rng = Pcg32::seed_from_u64(3);

        let event = tick(&mut robot, &bounds, &mut rng);
        let ticks = match event {
            TickEvent::Collided { ticks } => ticks,
            other => panic!("expected collision, got {:?}", other),
        };
        assert!((1..=5).contains(&ticks));
        assert_eq!(robot.pos(), Vec2::new(89.5, 50.0));
        assert_eq!(robot.heading(), ticks as f32);

        // Position is frozen while the phase counts down
        for expected in (0..ticks).rev() {
            let event = tick(&mut robot, &bounds, &mut rng);
            assert_eq!(event, TickEvent::Rotating { remaining: expected });
            assert_eq!(robot.pos(), Vec2::new(89.5, 50.0));
        }

        assert_eq!(robot.motion_state(), MotionState::Translating);
    }

    #[test]
    fn test_free_space_moves() {
        let bounds = Bounds::from_size(900.0, 500.0);
        let mut robot = Robot::new(Vec2::new(450.0, 250.0), 30.0, 5.0, 1.0, 120);
        let mut rng = Pcg32::seed_from_u64(0);
        assert_eq!(tick(&mut robot, &bounds, &mut rng), TickEvent::Moved);
        assert_eq!(robot.pos(), Vec2::new(455.0, 250.0));
    }

    #[test]
    fn test_heading_only_changes_on_collision() {
        let bounds = Bounds::from_size(300.0, 200.0);
        let mut robot = Robot::new(Vec2::new(150.0, 100.0), 20.0, 3.0, 1.0, 60);
        let mut rng = Pcg32::seed_from_u64(11);

        for _ in 0..2_000 {
            let before = robot.heading();
            let event = tick(&mut robot, &bounds, &mut rng);
            if !matches!(event, TickEvent::Collided { .. }) {
                assert_eq!(robot.heading(), before);
            }
        }
    }
}
