//! Arena loop: owns the robot, the arena bounds and the seeded RNG

use rand_pcg::Pcg32;

use super::collision::Bounds;
use super::state::{RngState, Robot};
use super::tick::{TickEvent, tick};
use crate::platform::{FrameClock, QuitSignal};
use crate::renderer::RenderSurface;
use crate::settings::{Rgb, Settings};

/// Running totals for diagnostics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimStats {
    pub ticks: u64,
    pub moves: u64,
    pub collisions: u64,
    pub rotation_ticks: u64,
}

impl SimStats {
    fn record(&mut self, event: TickEvent) {
        self.ticks += 1;
        match event {
            TickEvent::Moved => self.moves += 1,
            TickEvent::Collided { .. } => self.collisions += 1,
            TickEvent::Rotating { .. } => self.rotation_ticks += 1,
        }
    }
}

pub struct Simulation {
    robot: Robot,
    bounds: Bounds,
    background: Rgb,
    tick_rate: u32,
    rng_state: RngState,
    rng: Pcg32,
    stats: SimStats,
}

impl Simulation {
    /// Robot starts at the arena center, heading 0 degrees
    pub fn new(settings: &Settings, seed: u64) -> Self {
        let rng_state = RngState::new(seed);
        Self {
            robot: Robot::from_settings(settings),
            bounds: settings.bounds(),
            background: settings.background,
            tick_rate: settings.tick_rate,
            rng_state,
            rng: rng_state.to_rng(),
            stats: SimStats::default(),
        }
    }

    pub fn robot(&self) -> &Robot {
        &self.robot
    }

    pub fn seed(&self) -> u64 {
        self.rng_state.seed
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn stats(&self) -> SimStats {
        self.stats
    }

    /// Advance one tick
    pub fn step(&mut self) -> TickEvent {
        let event = tick(&mut self.robot, &self.bounds, &mut self.rng);
        self.stats.record(event);

        if let TickEvent::Collided { ticks } = event {
            log::info!(
                "Collided! Rotating for {:.2} seconds",
                ticks as f32 / self.tick_rate as f32
            );
        }
        log::trace!(
            "tick {}: {:?} pos=({:.2}, {:.2}) heading={:.1}",
            self.stats.ticks,
            event,
            self.robot.pos().x,
            self.robot.pos().y,
            self.robot.heading()
        );
        event
    }

    /// Draw the current frame
    pub fn draw(&self, surface: &mut (impl RenderSurface + ?Sized)) {
        surface.clear(self.background);
        surface.draw_circle(self.robot.pos(), self.robot.radius(), self.robot.color());
        surface.present();
    }

    /// Run paced ticks until `quit` fires.
    ///
    /// Each iteration waits for the clock, polls quit, steps and draws. A quit
    /// seen during a tick takes effect after that tick's frame is presented,
    /// so at least one tick always runs.
    pub fn run(
        &mut self,
        surface: &mut (impl RenderSurface + ?Sized),
        clock: &mut (impl FrameClock + ?Sized),
        quit: &mut (impl QuitSignal + ?Sized),
    ) -> SimStats {
        log::info!("Simulation starting (seed {})", self.seed());
        loop {
            clock.wait_for_next_tick();
            let quitting = quit.should_quit();

            self.step();
            self.draw(surface);

            if quitting {
                break;
            }
        }

        let stats = self.stats;
        log::info!(
            "Quitting after {} ticks ({:.1} s): {} moves, {} collisions, {} rotation ticks",
            stats.ticks,
            clock.ticks_to_secs(clock.elapsed_ticks()),
            stats.moves,
            stats.collisions,
            stats.rotation_ticks
        );
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{InterruptQuit, ManualClock, TickLimit};
    use crate::renderer::{DrawCall, RecordingSurface};
    use crate::sim::MotionState;
    use glam::Vec2;

    #[test]
    fn test_new_starts_centered_and_translating() {
        let settings = Settings::default();
        let sim = Simulation::new(&settings, 1);
        assert_eq!(sim.robot().pos(), Vec2::new(450.0, 250.0));
        assert_eq!(sim.robot().heading(), 0.0);
        assert_eq!(sim.robot().motion_state(), MotionState::Translating);
        assert_eq!(sim.seed(), 1);
        assert_eq!(sim.bounds().width(), 900.0);
    }

    #[test]
    fn test_determinism() {
        // Two simulations with the same seed should produce identical results
        let settings = Settings::night();
        let mut sim1 = Simulation::new(&settings, 99999);
        let mut sim2 = Simulation::new(&settings, 99999);

        for _ in 0..5_000 {
            assert_eq!(sim1.step(), sim2.step());
            assert_eq!(sim1.robot().pos(), sim2.robot().pos());
            assert_eq!(sim1.robot().heading(), sim2.robot().heading());
        }
        assert_eq!(sim1.stats(), sim2.stats());
        assert!(sim1.stats().collisions > 0);
    }

    #[test]
    fn test_robot_never_leaves_arena() {
        let settings = Settings {
            translational_speed: 7.0,
            rotational_speed: 3.0,
            ..Settings::default()
        };
        let mut sim = Simulation::new(&settings, 2024);
        let bounds = *sim.bounds();

        for _ in 0..20_000 {
            sim.step();
            assert!(!sim.robot().collides(sim.robot().pos(), &bounds));
        }
    }

    #[test]
    fn test_stats_add_up() {
        let mut sim = Simulation::new(&Settings::default(), 5);
        for _ in 0..3_000 {
            sim.step();
        }
        let stats = sim.stats();
        assert_eq!(stats.ticks, 3_000);
        assert_eq!(stats.moves + stats.collisions + stats.rotation_ticks, 3_000);
    }

    #[test]
    fn test_run_draws_every_tick_until_quit() {
        let settings = Settings::default();
        let mut sim = Simulation::new(&settings, 7);
        let mut surface = RecordingSurface::new();
        let mut clock = ManualClock::new(settings.tick_rate);
        let mut quit = TickLimit::new(10);

        let stats = sim.run(&mut surface, &mut clock, &mut quit);

        assert_eq!(stats.ticks, 10);
        assert_eq!(clock.elapsed_ticks(), 10);
        assert_eq!(surface.frames.len(), 10);
        assert_eq!(surface.frames[0][0], DrawCall::Clear(Rgb::WHITE));
        assert_eq!(
            surface.frames[9][1],
            DrawCall::Circle {
                center: Vec2::new(460.0, 250.0),
                radius: 20.0,
                color: Rgb::BLUE,
            }
        );
    }

    #[test]
    fn test_zero_tick_limit_still_finishes_one_tick() {
        let settings = Settings::default();
        let mut sim = Simulation::new(&settings, 7);
        let mut surface = RecordingSurface::new();
        let mut clock = ManualClock::new(settings.tick_rate);

        let stats = sim.run(&mut surface, &mut clock, &mut TickLimit::new(0));

        assert_eq!(stats.ticks, 1);
        assert_eq!(surface.frames.len(), 1);
    }

    #[test]
    fn test_interrupt_ends_run_after_drawing_the_tick() {
        let settings = Settings::default();
        let mut sim = Simulation::new(&settings, 7);
        let mut surface = RecordingSurface::new();
        let mut clock = ManualClock::new(settings.tick_rate);
        let mut quit = InterruptQuit::new();
        quit.raise();

        let stats = sim.run(&mut surface, &mut clock, &mut quit);

        assert_eq!(stats.ticks, 1);
        assert_eq!(surface.frames.len(), 1);
        assert_eq!(sim.robot().pos(), Vec2::new(451.0, 250.0));
    }
}
