//! Geometry of the square drawing surface.
//!
//! The surface uses pixel-like units with the origin at the top-left corner
//! and `y` growing downward. The board occupies the whole surface; each
//! cell is a third of its side.

use crate::games::tictactoe::{Coord, WinningLine};
use derive_new::new;
use tracing::{instrument, trace};

/// A point on the surface.
#[derive(Debug, Clone, Copy, PartialEq, new)]
pub struct Point {
    /// Horizontal offset from the left edge.
    pub x: f64,
    /// Vertical offset from the top edge.
    pub y: f64,
}

/// A straight segment on the surface.
#[derive(Debug, Clone, Copy, PartialEq, new)]
pub struct Segment {
    /// Start point.
    pub from: Point,
    /// End point.
    pub to: Point,
}

/// Square drawing surface of a fixed logical size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    size: f64,
}

impl Surface {
    /// Creates a surface `size` units wide and tall.
    pub fn new(size: f64) -> Self {
        Self { size }
    }

    /// Side length of the surface.
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Side length of one cell.
    pub fn cell_size(&self) -> f64 {
        self.size / 3.0
    }

    /// The four grid lines: two vertical, then two horizontal.
    pub fn grid_lines(&self) -> [Segment; 4] {
        let cell = self.cell_size();
        let (a, b) = (cell, cell * 2.0);
        [
            Segment::new(Point::new(a, 0.0), Point::new(a, self.size)),
            Segment::new(Point::new(b, 0.0), Point::new(b, self.size)),
            Segment::new(Point::new(0.0, a), Point::new(self.size, a)),
            Segment::new(Point::new(0.0, b), Point::new(self.size, b)),
        ]
    }

    /// Center of the given cell.
    pub fn cell_center(&self, coord: Coord) -> Point {
        let cell = self.cell_size();
        Point::new(
            coord.col as f64 * cell + cell / 2.0,
            coord.row as f64 * cell + cell / 2.0,
        )
    }

    /// Cell under the offset `(x, y)`, found by dividing by the cell size
    /// and flooring. Offsets outside the board give `None`.
    #[instrument(skip(self))]
    pub fn cell_at(&self, x: f64, y: f64) -> Option<Coord> {
        let cell = self.cell_size();
        if !(x.is_finite() && y.is_finite()) || x < 0.0 || y < 0.0 || cell <= 0.0 {
            return None;
        }
        let coord = Coord::new((y / cell).floor() as usize, (x / cell).floor() as usize);
        trace!(%coord, "Offset mapped to cell");
        coord.index().map(|_| coord)
    }

    /// Point `progress` of the way from the start cell center to the end
    /// cell center of `line`. `progress` is clamped to `[0, 1]`.
    pub fn line_point(&self, line: WinningLine, progress: f64) -> Point {
        let t = progress.clamp(0.0, 1.0);
        let from = self.cell_center(line.start);
        let to = self.cell_center(line.end);
        Point::new(from.x + (to.x - from.x) * t, from.y + (to.y - from.y) * t)
    }
}

impl Default for Surface {
    fn default() -> Self {
        Self::new(300.0)
    }
}
