//! Grid module - the random-art field
//!
//! The grid is a `height x width` field of [`Cell`]s stored in a flat row-major
//! vector. Coordinates are `(row, col)` with `(0, 0)` at the top-left corner.
//! A [`Cursor`] walks the grid diagonally and is clamped to its edges.

use crate::types::{Cell, Direction, BORDER_CORNER, BORDER_HORIZONTAL, BORDER_VERTICAL};

/// Walk position, always inside the grid it was created for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

impl Cursor {
    /// The starting cell `(height / 2, width / 2)`.
    pub fn center(height: usize, width: usize) -> Self {
        Self {
            row: height / 2,
            col: width / 2,
        }
    }

    /// Move one diagonal step, saturating at the grid edges.
    ///
    /// Rows and columns clamp independently, so a move into a wall slides
    /// along it.
    pub fn step(&mut self, dir: Direction, height: usize, width: usize) {
        let (dr, dc) = dir.delta();
        self.row = clamp_axis(self.row, dr, height);
        self.col = clamp_axis(self.col, dc, width);
    }
}

#[inline(always)]
fn clamp_axis(pos: usize, delta: i8, len: usize) -> usize {
    if delta < 0 {
        pos.saturating_sub(1)
    } else {
        (pos + 1).min(len.saturating_sub(1))
    }
}

/// The random-art field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    height: usize,
    width: usize,
    /// Flat array of cells, row-major order (row * width + col)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid of zero counters.
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            cells: vec![Cell::default(); height * width],
        }
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(row * self.width + col)
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Where every walk on this grid begins.
    pub fn cursor_start(&self) -> Cursor {
        Cursor::center(self.height, self.width)
    }

    /// Get cell at `(row, col)`, `None` if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Set cell at `(row, col)`. Returns false if out of bounds.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> bool {
        match self.index(row, col) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// Count one visit at `(row, col)`.
    ///
    /// Sentinels are left alone; counts saturate.
    pub fn visit(&mut self, row: usize, col: usize) {
        if let Some(i) = self.index(row, col) {
            if let Cell::Visits(n) = self.cells[i] {
                self.cells[i] = Cell::Visits(n.saturating_add(1));
            }
        }
    }

    /// Walk `dirs` from the center, counting every landing cell, then mark
    /// the start and end cells.
    ///
    /// Returns the final cursor.
    pub fn walk(&mut self, dirs: impl IntoIterator<Item = Direction>) -> Cursor {
        let start = self.cursor_start();
        let mut pos = start;
        let mut steps = 0usize;

        for dir in dirs {
            pos.step(dir, self.height, self.width);
            self.visit(pos.row, pos.col);
            steps += 1;
        }

        // End is written last so it wins when the walk returns to the start.
        self.set(start.row, start.col, Cell::Start);
        self.set(pos.row, pos.col, Cell::End);

        log::trace!(
            "walked {} steps on {}x{} grid, start={:?} end={:?}",
            steps,
            self.height,
            self.width,
            start,
            pos
        );
        pos
    }

    /// Character for the cell at `(row, col)`.
    pub fn symbol(&self, row: usize, col: usize, alphabet: &[char]) -> Option<char> {
        self.get(row, col).map(|cell| cell.symbol(alphabet))
    }

    /// Iterate rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // chunks() rejects a zero chunk size; an empty grid has no rows anyway.
        self.cells.chunks(self.width.max(1))
    }

    /// Append the bordered text rendering of this grid to `out`.
    ///
    /// Visit counts cycle through `alphabet` (blank when it is empty).
    /// Produces `height + 2` newline-terminated lines of `width + 2` chars.
    pub fn render_into(&self, alphabet: &[char], out: &mut String) {
        out.reserve((self.height + 2) * (self.width + 3));

        push_border(out, self.width);
        for row in self.rows() {
            out.push(BORDER_VERTICAL);
            out.extend(row.iter().map(|cell| cell.symbol(alphabet)));
            out.push(BORDER_VERTICAL);
            out.push('\n');
        }
        push_border(out, self.width);
    }
}

fn push_border(out: &mut String, width: usize) {
    out.push(BORDER_CORNER);
    out.extend(std::iter::repeat(BORDER_HORIZONTAL).take(width));
    out.push(BORDER_CORNER);
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Direction::*;

    #[test]
    fn new_grid_is_all_zero() {
        let grid = Grid::new(3, 5);
        for row in 0..3 {
            for col in 0..5 {
                assert_eq!(grid.get(row, col), Some(Cell::Visits(0)));
            }
        }
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.get(0, 5), None);
    }

    #[test]
    fn cursor_starts_at_center_rounding_down() {
        assert_eq!(Cursor::center(8, 16), Cursor { row: 4, col: 8 });
        assert_eq!(Cursor::center(5, 9), Cursor { row: 2, col: 4 });
        assert_eq!(Cursor::center(1, 1), Cursor { row: 0, col: 0 });
    }

    #[test]
    fn cursor_moves_diagonally() {
        let mut c = Cursor::center(8, 16);
        c.step(NorthWest, 8, 16);
        assert_eq!(c, Cursor { row: 3, col: 7 });
        c.step(SouthEast, 8, 16);
        assert_eq!(c, Cursor { row: 4, col: 8 });
        c.step(NorthEast, 8, 16);
        assert_eq!(c, Cursor { row: 3, col: 9 });
        c.step(SouthWest, 8, 16);
        assert_eq!(c, Cursor { row: 4, col: 8 });
    }

    #[test]
    fn cursor_slides_along_walls() {
        let mut c = Cursor { row: 0, col: 3 };
        c.step(NorthEast, 8, 16);
        assert_eq!(c, Cursor { row: 0, col: 4 });

        let mut c = Cursor { row: 7, col: 15 };
        c.step(SouthEast, 8, 16);
        assert_eq!(c, Cursor { row: 7, col: 15 });

        let mut c = Cursor { row: 5, col: 0 };
        c.step(SouthWest, 8, 16);
        assert_eq!(c, Cursor { row: 6, col: 0 });
    }

    #[test]
    fn walk_counts_every_step_and_marks_sentinels() {
        let mut grid = Grid::new(8, 16);
        let end = grid.walk([NorthWest, NorthWest, SouthEast]);

        assert_eq!(end, Cursor { row: 3, col: 7 });
        assert_eq!(grid.get(4, 8), Some(Cell::Start));
        // (3,7) was visited twice but is overwritten by the end marker.
        assert_eq!(grid.get(3, 7), Some(Cell::End));
        assert_eq!(grid.get(2, 6), Some(Cell::Visits(1)));
    }

    #[test]
    fn end_overwrites_start_when_walk_returns_home() {
        let mut grid = Grid::new(8, 16);
        grid.walk([NorthWest, SouthEast]);
        assert_eq!(grid.get(4, 8), Some(Cell::End));
        assert!(grid.rows().flatten().all(|c| *c != Cell::Start));
    }

    #[test]
    fn visit_ignores_sentinels() {
        let mut grid = Grid::new(2, 2);
        grid.set(0, 0, Cell::Start);
        grid.visit(0, 0);
        assert_eq!(grid.get(0, 0), Some(Cell::Start));
    }

    #[test]
    fn render_into_draws_border() {
        let mut grid = Grid::new(1, 3);
        grid.walk(std::iter::empty());
        let alphabet: Vec<char> = " .".chars().collect();
        let mut out = String::new();
        grid.render_into(&alphabet, &mut out);
        assert_eq!(out, "+---+\n| E |\n+---+\n");
        assert_eq!(grid.symbol(0, 1, &alphabet), Some('E'));
        assert_eq!(grid.symbol(0, 0, &alphabet), Some(' '));
        assert_eq!(grid.symbol(1, 0, &alphabet), None);
    }

    #[test]
    fn render_into_with_empty_alphabet_draws_blanks() {
        let mut grid = Grid::new(1, 3);
        grid.walk([SouthEast]);
        let mut out = String::new();
        grid.render_into(&[], &mut out);
        assert_eq!(out, "+---+\n| SE|\n+---+\n");
        assert_eq!(grid.symbol(0, 0, &[]), Some(' '));
    }
}
