//! Paints the board onto a ratatui [`Canvas`].

use super::animation::LineAnimation;
use super::surface::{Point, Segment, Surface};
use crate::games::tictactoe::{Board, Coord, Player};
use ratatui::{
    layout::Rect,
    style::Color,
    symbols::Marker,
    widgets::{
        Block,
        canvas::{Canvas, Circle, Context, Line, Rectangle},
    },
};

/// Colors used on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Grid lines.
    pub grid: Color,
    /// X marks.
    pub x: Color,
    /// O marks.
    pub o: Color,
    /// The animated winning line.
    pub winning_line: Color,
    /// Keyboard cursor outline.
    pub cursor: Color,
}

impl Theme {
    /// Color for a player's mark.
    pub fn mark(&self, player: Player) -> Color {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            grid: Color::White,
            x: Color::Blue,
            o: Color::Red,
            winning_line: Color::Rgb(0xcf, 0xe4, 0xef),
            cursor: Color::Yellow,
        }
    }
}

/// Everything the painter needs for one frame.
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    /// Marks to draw.
    pub board: &'a Board,
    /// Surface geometry.
    pub surface: Surface,
    /// Colors.
    pub theme: Theme,
    /// Winning line in flight, if any.
    pub animation: Option<&'a LineAnimation>,
    /// Highlighted cell, if any.
    pub cursor: Option<Coord>,
}

impl<'a> BoardView<'a> {
    /// Builds the canvas widget for this frame.
    ///
    /// The whole board is repainted every frame: grid, marks, cursor, and
    /// on a separate layer the winning line up to its current progress.
    pub fn canvas(self, block: Block<'a>) -> Canvas<'a, impl Fn(&mut Context) + 'a> {
        let size = self.surface.size();
        Canvas::default()
            .block(block)
            .marker(Marker::Braille)
            .x_bounds([0.0, size])
            .y_bounds([0.0, size])
            .paint(move |ctx| self.paint(ctx))
    }

    fn paint(&self, ctx: &mut Context) {
        for segment in self.surface.grid_lines() {
            self.draw_segment(ctx, segment, self.theme.grid);
        }

        if let Some(cursor) = self.cursor {
            self.draw_cursor(ctx, cursor);
        }

        for (coord, player) in self.board.marks() {
            self.draw_mark(ctx, coord, player);
        }

        if let Some(animation) = self.animation {
            ctx.layer();
            let line = animation.line();
            let from = self.surface.cell_center(line.start);
            let to = self.surface.line_point(line, animation.progress());
            self.draw_segment(ctx, Segment::new(from, to), self.theme.winning_line);
        }
    }

    fn draw_mark(&self, ctx: &mut Context, coord: Coord, player: Player) {
        let center = self.surface.cell_center(coord);
        let radius = self.surface.cell_size() * 0.3;
        let color = self.theme.mark(player);
        match player {
            Player::X => {
                let (dx, dy) = (radius, radius);
                self.draw_segment(
                    ctx,
                    Segment::new(
                        Point::new(center.x - dx, center.y - dy),
                        Point::new(center.x + dx, center.y + dy),
                    ),
                    color,
                );
                self.draw_segment(
                    ctx,
                    Segment::new(
                        Point::new(center.x - dx, center.y + dy),
                        Point::new(center.x + dx, center.y - dy),
                    ),
                    color,
                );
            }
            Player::O => {
                let flipped = self.flip(center);
                ctx.draw(&Circle {
                    x: flipped.x,
                    y: flipped.y,
                    radius,
                    color,
                });
            }
        }
    }

    fn draw_cursor(&self, ctx: &mut Context, cursor: Coord) {
        let cell = self.surface.cell_size();
        let inset = cell * 0.08;
        // Rectangle is anchored at its bottom-left corner in canvas space.
        let bottom_left = self.flip(Point::new(
            cursor.col as f64 * cell + inset,
            (cursor.row + 1) as f64 * cell - inset,
        ));
        ctx.draw(&Rectangle {
            x: bottom_left.x,
            y: bottom_left.y,
            width: cell - 2.0 * inset,
            height: cell - 2.0 * inset,
            color: self.theme.cursor,
        });
    }

    fn draw_segment(&self, ctx: &mut Context, segment: Segment, color: Color) {
        let from = self.flip(segment.from);
        let to = self.flip(segment.to);
        ctx.draw(&Line {
            x1: from.x,
            y1: from.y,
            x2: to.x,
            y2: to.y,
            color,
        });
    }

    /// Surface `y` grows downward, canvas `y` grows upward.
    fn flip(&self, point: Point) -> Point {
        Point::new(point.x, self.surface.size() - point.y)
    }
}

/// Maps a terminal cell inside `area` to an offset on `surface`.
///
/// The terminal cell's center is scaled by the ratio between the surface
/// size and the area's extent. Cells outside `area` give `None`.
pub fn pointer_offset(area: Rect, surface: &Surface, column: u16, row: u16) -> Option<Point> {
    if area.width == 0 || area.height == 0 {
        return None;
    }
    let inside = column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height);
    if !inside {
        return None;
    }
    let x = (f64::from(column - area.x) + 0.5) * surface.size() / f64::from(area.width);
    let y = (f64::from(row - area.y) + 0.5) * surface.size() / f64::from(area.height);
    Some(Point::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_offset_corners() {
        let surface = Surface::new(300.0);
        let area = Rect::new(10, 5, 30, 15);

        let top_left = pointer_offset(area, &surface, 10, 5).unwrap();
        assert_eq!(surface.cell_at(top_left.x, top_left.y), Some(Coord::new(0, 0)));

        let bottom_right = pointer_offset(area, &surface, 39, 19).unwrap();
        assert_eq!(
            surface.cell_at(bottom_right.x, bottom_right.y),
            Some(Coord::new(2, 2))
        );

        let middle = pointer_offset(area, &surface, 25, 12).unwrap();
        assert_eq!(surface.cell_at(middle.x, middle.y), Some(Coord::new(1, 1)));
    }

    #[test]
    fn test_pointer_offset_outside_area() {
        let surface = Surface::new(300.0);
        let area = Rect::new(10, 5, 30, 15);
        assert_eq!(pointer_offset(area, &surface, 9, 6), None);
        assert_eq!(pointer_offset(area, &surface, 40, 6), None);
        assert_eq!(pointer_offset(area, &surface, 12, 20), None);
        assert_eq!(pointer_offset(Rect::new(0, 0, 0, 0), &surface, 0, 0), None);
    }
}
