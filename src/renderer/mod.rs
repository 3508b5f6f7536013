//! Render surfaces
//!
//! The simulation only needs to clear a frame, draw filled circles and present.
//! Anything that can do that (a window, a terminal, a test recorder) plugs in here.

pub mod ascii;
pub mod surface;

pub use ascii::AsciiSurface;
pub use surface::{DrawCall, LogSurface, RecordingSurface};

use glam::Vec2;

use crate::settings::Rgb;

/// Drawing target for one frame at a time
pub trait RenderSurface {
    /// Fill the whole frame with `color`
    fn clear(&mut self, color: Rgb);

    /// Draw a filled circle
    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Rgb);

    /// Finish the frame
    fn present(&mut self);
}
