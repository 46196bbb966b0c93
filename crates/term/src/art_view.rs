//! ArtView: maps a random-art [`Grid`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::Grid;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Cell, BORDER_CORNER, BORDER_HORIZONTAL, BORDER_VERTICAL, DEFAULT_ALPHABET};

/// Colors for the bordered art.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub border: CellStyle,
    pub start: CellStyle,
    pub end: CellStyle,
    /// Unvisited cells.
    pub empty: CellStyle,
    /// Visit-count heat ramp, coolest first; counts past the end reuse the last entry.
    pub heat: [CellStyle; 4],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            border: CellStyle::fg(Rgb::new(200, 200, 200)),
            start: CellStyle::fg(Rgb::new(80, 220, 120)).bold(),
            end: CellStyle::fg(Rgb::new(235, 80, 80)).bold(),
            empty: CellStyle::fg(Rgb::new(80, 80, 90)).dim(),
            heat: [
                CellStyle::fg(Rgb::new(110, 150, 230)),
                CellStyle::fg(Rgb::new(90, 200, 220)),
                CellStyle::fg(Rgb::new(230, 210, 90)),
                CellStyle::fg(Rgb::new(240, 140, 60)).bold(),
            ],
        }
    }
}

/// A terminal view of the random-art grid.
#[derive(Debug, Clone)]
pub struct ArtView {
    alphabet: Vec<char>,
    palette: Palette,
}

impl Default for ArtView {
    fn default() -> Self {
        Self::new(&DEFAULT_ALPHABET.chars().collect::<Vec<_>>())
    }
}

impl ArtView {
    /// `alphabet` must be non-empty; take it from a validated `ArtConfig`.
    pub fn new(alphabet: &[char]) -> Self {
        Self {
            alphabet: alphabet.to_vec(),
            palette: Palette::default(),
        }
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    fn style_for(&self, cell: Cell) -> CellStyle {
        match cell {
            Cell::Start => self.palette.start,
            Cell::End => self.palette.end,
            Cell::Visits(0) => self.palette.empty,
            Cell::Visits(n) => {
                let last = self.palette.heat.len() - 1;
                self.palette.heat[(n as usize - 1).min(last)]
            }
        }
    }

    /// Render the grid with its border into a new framebuffer.
    ///
    /// Grids wider or taller than a terminal can address are clipped.
    pub fn render(&self, grid: &Grid) -> FrameBuffer {
        let w = u16::try_from(grid.width()).unwrap_or(u16::MAX - 2);
        let h = u16::try_from(grid.height()).unwrap_or(u16::MAX - 2);
        let mut fb = FrameBuffer::new(w.saturating_add(2), h.saturating_add(2));
        self.render_into(grid, &mut fb);
        fb
    }

    /// Render into an existing framebuffer sized `(width + 2, height + 2)`.
    pub fn render_into(&self, grid: &Grid, fb: &mut FrameBuffer) {
        let border = self.palette.border;
        let frame_w = fb.width();
        let frame_h = fb.height();
        if frame_w < 2 || frame_h < 2 {
            return;
        }

        self.draw_border(fb, frame_w, frame_h, border);

        for (y, row) in grid.rows().enumerate().take((frame_h - 2) as usize) {
            for (x, &cell) in row.iter().enumerate().take((frame_w - 2) as usize) {
                let ch = cell.symbol(&self.alphabet);
                fb.put_char(x as u16 + 1, y as u16 + 1, ch, self.style_for(cell));
            }
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, w: u16, h: u16, style: CellStyle) {
        fb.hline(1, 0, w - 2, BORDER_HORIZONTAL, style);
        fb.hline(1, h - 1, w - 2, BORDER_HORIZONTAL, style);
        for y in 1..h - 1 {
            fb.put_char(0, y, BORDER_VERTICAL, style);
            fb.put_char(w - 1, y, BORDER_VERTICAL, style);
        }
        for (x, y) in [(0, 0), (w - 1, 0), (0, h - 1), (w - 1, h - 1)] {
            fb.put_char(x, y, BORDER_CORNER, style);
        }
    }
}
