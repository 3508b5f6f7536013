//! Boundary collision for a circle inside an axis-aligned rectangle
//!
//! Screen coordinates: `top < bottom`, +y points down.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned arena rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Bounds {
    pub fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Rectangle anchored at the origin
    pub fn from_size(width: f32, height: f32) -> Self {
        Self::new(0.0, width, 0.0, height)
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }
}

/// True if a circle at `center` pokes past any edge of `bounds`.
///
/// Each edge is tested independently; crossing a single edge is enough.
/// Exactly touching an edge is not a collision.
#[inline]
pub fn circle_exceeds_bounds(center: Vec2, radius: f32, bounds: &Bounds) -> bool {
    center.x + radius > bounds.right
        || center.x - radius < bounds.left
        || center.y + radius > bounds.bottom
        || center.y - radius < bounds.top
}
