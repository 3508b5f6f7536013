//! Headless surfaces: logging and recording

use glam::Vec2;

use super::RenderSurface;
use crate::settings::Rgb;

/// Logs every draw call at trace level
#[derive(Debug, Default)]
pub struct LogSurface {
    frames: u64,
}

impl LogSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames
    }
}

impl RenderSurface for LogSurface {
    fn clear(&mut self, _color: Rgb) {}

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Rgb) {
        log::trace!(
            "frame {}: circle at ({:.2}, {:.2}) r={} {:?}",
            self.frames,
            center.x,
            center.y,
            radius,
            color
        );
    }

    fn present(&mut self) {
        self.frames += 1;
    }
}

/// A single recorded draw operation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCall {
    Clear(Rgb),
    Circle { center: Vec2, radius: f32, color: Rgb },
}

/// Keeps every presented frame in memory
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pending: Vec<DrawCall>,
    pub frames: Vec<Vec<DrawCall>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Circle centers of each presented frame, in order
    pub fn circle_centers(&self) -> Vec<Vec2> {
        self.frames
            .iter()
            .flat_map(|frame| frame.iter())
            .filter_map(|call| match call {
                DrawCall::Circle { center, .. } => Some(*center),
                DrawCall::Clear(_) => None,
            })
            .collect()
    }
}

impl RenderSurface for RecordingSurface {
    fn clear(&mut self, color: Rgb) {
        self.pending.push(DrawCall::Clear(color));
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Rgb) {
        self.pending.push(DrawCall::Circle {
            center,
            radius,
            color,
        });
    }

    fn present(&mut self) {
        self.frames.push(std::mem::take(&mut self.pending));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_surface_groups_frames() {
        let mut surface = RecordingSurface::new();
        surface.clear(Rgb::WHITE);
        surface.draw_circle(Vec2::new(1.0, 2.0), 3.0, Rgb::BLUE);
        surface.present();
        surface.clear(Rgb::WHITE);
        surface.present();

        assert_eq!(surface.frames.len(), 2);
        assert_eq!(surface.frames[0].len(), 2);
        assert_eq!(surface.frames[1], vec![DrawCall::Clear(Rgb::WHITE)]);
        assert_eq!(surface.circle_centers(), vec![Vec2::new(1.0, 2.0)]);
    }

    #[test]
    fn test_log_surface_counts_frames() {
        let mut surface = LogSurface::new();
        surface.draw_circle(Vec2::ZERO, 1.0, Rgb::BLACK);
        surface.present();
        surface.present();
        assert_eq!(surface.frames_presented(), 2);
    }
}
