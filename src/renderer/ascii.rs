//! Coarse text rendering for terminals
//!
//! Each character cell covers a `cell_w` x `cell_h` block of arena pixels. A
//! cell is filled when its center lies inside a drawn circle.

use std::io::Write;

use glam::Vec2;

use super::RenderSurface;
use crate::settings::Rgb;

/// Picks a glyph for a color: dark colors get sparse glyphs
fn glyph_for(color: Rgb) -> char {
    match color.luma() {
        0..=63 => ' ',
        64..=127 => '+',
        128..=191 => 'o',
        _ => '#',
    }
}

pub struct AsciiSurface<W: Write> {
    out: W,
    cols: usize,
    rows: usize,
    cell: Vec2,
    cells: Vec<char>,
    /// Only every Nth presented frame is written out
    every: u64,
    frame: u64,
}

impl<W: Write> AsciiSurface<W> {
    /// Surface for an arena of `arena_size` pixels, `cols` characters wide.
    ///
    /// Rows are derived assuming terminal cells are twice as tall as wide.
    pub fn new(out: W, arena_size: (u32, u32), cols: usize, every: u64) -> Self {
        let cols = cols.max(1);
        let cell_w = arena_size.0 as f32 / cols as f32;
        let cell_h = cell_w * 2.0;
        let rows = ((arena_size.1 as f32 / cell_h).ceil() as usize).max(1);
        Self {
            out,
            cols,
            rows,
            cell: Vec2::new(cell_w, cell_h),
            cells: vec![' '; cols * rows],
            every: every.max(1),
            frame: 0,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Current frame buffer as lines of text
    pub fn lines(&self) -> Vec<String> {
        self.cells
            .chunks(self.cols)
            .map(|row| row.iter().collect())
            .collect()
    }
}

impl<W: Write> RenderSurface for AsciiSurface<W> {
    fn clear(&mut self, color: Rgb) {
        self.cells.fill(glyph_for(color));
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Rgb) {
        let glyph = match glyph_for(color) {
            // Keep dark robots visible on the blank background
            ' ' => '@',
            g => g,
        };
        let r2 = radius * radius;
        for row in 0..self.rows {
            for col in 0..self.cols {
                let cell_center = Vec2::new(
                    (col as f32 + 0.5) * self.cell.x,
                    (row as f32 + 0.5) * self.cell.y,
                );
                if cell_center.distance_squared(center) <= r2 {
                    self.cells[row * self.cols + col] = glyph;
                }
            }
        }
    }

    fn present(&mut self) {
        self.frame += 1;
        if self.frame % self.every != 0 {
            return;
        }
        let mut text = String::with_capacity((self.cols + 3) * (self.rows + 2));
        let border = format!("+{}+\n", "-".repeat(self.cols));
        text.push_str(&border);
        for line in self.lines() {
            text.push('|');
            text.push_str(&line);
            text.push_str("|\n");
        }
        text.push_str(&border);
        if let Err(e) = self.out.write_all(text.as_bytes()).and_then(|_| self.out.flush()) {
            log::warn!("Failed to write ascii frame: {}", e);
        }
    }
}
