//! Canvas plumbing: seat shapes and the mapping between terminal cells and
//! canvas coordinates.

use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::canvas::{Circle, Context, Painter, Shape};

use crate::hall::SeatPainter;
use crate::layout::{Point, ViewportConfig};
use crate::ui::theme::COLOR_SEAT_OUTLINE;

/// Braille dots per terminal cell, horizontally and vertically.
const DOTS_PER_CELL_X: f64 = 2.0;
const DOTS_PER_CELL_Y: f64 = 4.0;

/// A filled disc.
///
/// Ratatui's `Circle` only strokes the outline, so the disc is filled by
/// sampling the canvas every `step` units.
#[derive(Debug, Clone)]
pub struct Disc {
    pub center: Point,
    pub radius: f64,
    pub color: Color,
    pub step: f64,
}

impl Shape for Disc {
    fn draw(&self, painter: &mut Painter) {
        if self.step.is_nan() || self.step <= 0.0 {
            return;
        }
        let r2 = self.radius * self.radius;
        let mut dy = -self.radius;
        while dy <= self.radius {
            let mut dx = -self.radius;
            while dx <= self.radius {
                if dx * dx + dy * dy <= r2 {
                    if let Some((x, y)) = painter.get_point(self.center.x + dx, self.center.y + dy) {
                        painter.paint(x, y, self.color);
                    }
                }
                dx += self.step;
            }
            dy += self.step;
        }
    }
}

/// A filled axis-aligned rectangle, `(x, y)` being its bottom-left corner.
#[derive(Debug, Clone)]
pub struct FilledRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: Color,
    pub step: f64,
}

impl Shape for FilledRect {
    fn draw(&self, painter: &mut Painter) {
        if self.step.is_nan() || self.step <= 0.0 {
            return;
        }
        let mut y = self.y;
        while y <= self.y + self.height {
            let mut x = self.x;
            while x <= self.x + self.width {
                if let Some((px, py)) = painter.get_point(x, y) {
                    painter.paint(px, py, self.color);
                }
                x += self.step;
            }
            y += self.step;
        }
    }
}

/// Paints seats as outlined discs on a canvas context.
pub struct CanvasSeatPainter<'a, 'b> {
    ctx: &'a mut Context<'b>,
    step: f64,
}

impl<'a, 'b> CanvasSeatPainter<'a, 'b> {
    pub fn new(ctx: &'a mut Context<'b>, step: f64) -> Self {
        Self { ctx, step }
    }
}

impl SeatPainter for CanvasSeatPainter<'_, '_> {
    fn draw_seat(&mut self, center: Point, radius: f64, fill: Color) {
        self.ctx.draw(&Disc {
            center,
            radius,
            color: fill,
            step: self.step,
        });
        self.ctx.draw(&Circle {
            x: center.x,
            y: center.y,
            radius,
            color: COLOR_SEAT_OUTLINE,
        });
    }
}

/// Maps terminal cells inside `area` to canvas coordinates and back.
///
/// The canvas spans `x_bounds` left to right and `y_bounds` bottom to top,
/// so terminal row 0 sits at the top of the y range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasMapping {
    area: Rect,
    x_bounds: [f64; 2],
    y_bounds: [f64; 2],
}

impl CanvasMapping {
    pub fn new(area: Rect, viewport: &ViewportConfig) -> Self {
        Self {
            area,
            x_bounds: viewport.x_bounds(),
            y_bounds: viewport.y_bounds(),
        }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    /// Canvas width covered by one terminal column.
    pub fn cell_width(&self) -> f64 {
        if self.area.width == 0 {
            return 0.0;
        }
        (self.x_bounds[1] - self.x_bounds[0]) / f64::from(self.area.width)
    }

    /// Canvas height covered by one terminal row.
    pub fn cell_height(&self) -> f64 {
        if self.area.height == 0 {
            return 0.0;
        }
        (self.y_bounds[1] - self.y_bounds[0]) / f64::from(self.area.height)
    }

    /// Sampling step fine enough to hit every braille dot.
    pub fn dot_step(&self) -> f64 {
        let x = self.cell_width() / DOTS_PER_CELL_X;
        let y = self.cell_height() / DOTS_PER_CELL_Y;
        x.min(y) / 2.0
    }

    /// Canvas point at the center of terminal cell `(column, row)`, or `None`
    /// when the cell lies outside the canvas area.
    pub fn cell_to_point(&self, column: u16, row: u16) -> Option<Point> {
        let area = self.area;
        if area.width == 0 || area.height == 0 {
            return None;
        }
        if column < area.x || row < area.y {
            return None;
        }
        let dx = column - area.x;
        let dy = row - area.y;
        if dx >= area.width || dy >= area.height {
            return None;
        }

        let x = self.x_bounds[0] + (f64::from(dx) + 0.5) * self.cell_width();
        let y = self.y_bounds[1] - (f64::from(dy) + 0.5) * self.cell_height();
        Some(Point::new(x, y))
    }

    /// Candidate click points for a terminal cell: the cell center first,
    /// then the center of each of its braille dots, top row first.
    ///
    /// Empty when the cell lies outside the canvas area.
    pub fn cell_points(&self, column: u16, row: u16) -> Vec<Point> {
        let Some(center) = self.cell_to_point(column, row) else {
            return Vec::new();
        };
        let dot_w = self.cell_width() / DOTS_PER_CELL_X;
        let dot_h = self.cell_height() / DOTS_PER_CELL_Y;
        let left = center.x - self.cell_width() / 2.0;
        let top = center.y + self.cell_height() / 2.0;

        let mut points = Vec::with_capacity(1 + (DOTS_PER_CELL_X * DOTS_PER_CELL_Y) as usize);
        points.push(center);
        for dy in 0..DOTS_PER_CELL_Y as usize {
            for dx in 0..DOTS_PER_CELL_X as usize {
                points.push(Point::new(
                    left + (dx as f64 + 0.5) * dot_w,
                    top - (dy as f64 + 0.5) * dot_h,
                ));
            }
        }
        points
    }

    /// Terminal cell containing canvas point `point`, if inside the area.
    pub fn point_to_cell(&self, point: Point) -> Option<(u16, u16)> {
        let (cw, ch) = (self.cell_width(), self.cell_height());
        if cw <= 0.0 || ch <= 0.0 {
            return None;
        }
        let fx = (point.x - self.x_bounds[0]) / cw;
        let fy = (self.y_bounds[1] - point.y) / ch;
        if fx < 0.0 || fy < 0.0 || fx >= f64::from(self.area.width) || fy >= f64::from(self.area.height) {
            return None;
        }
        Some((self.area.x + fx as u16, self.area.y + fy as u16))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping() -> CanvasMapping {
        // 100 columns over 1000 units, 35 rows over 700 units.
        CanvasMapping::new(Rect::new(0, 0, 100, 35), &ViewportConfig::new(1000.0, 700.0))
    }

    #[test]
    fn test_cell_size() {
        let m = mapping();
        assert_eq!(m.cell_width(), 10.0);
        assert_eq!(m.cell_height(), 20.0);
        assert_eq!(m.dot_step(), 2.5);
    }

    #[test]
    fn test_top_left_cell_maps_to_top_left_corner() {
        let p = mapping().cell_to_point(0, 0).unwrap();
        assert_eq!(p, Point::new(-495.0, 340.0));
    }

    #[test]
    fn test_bottom_right_cell_maps_to_bottom_right_corner() {
        let p = mapping().cell_to_point(99, 34).unwrap();
        assert_eq!(p, Point::new(495.0, -340.0));
    }

    #[test]
    fn test_cells_outside_area_do_not_map() {
        let m = CanvasMapping::new(Rect::new(5, 2, 10, 10), &ViewportConfig::new(100.0, 100.0));
        assert!(m.cell_to_point(4, 5).is_none());
        assert!(m.cell_to_point(5, 1).is_none());
        assert!(m.cell_to_point(15, 5).is_none());
        assert!(m.cell_to_point(5, 12).is_none());
        assert!(m.cell_to_point(5, 2).is_some());
    }

    #[test]
    fn test_empty_area_maps_nothing() {
        let m = CanvasMapping::new(Rect::new(0, 0, 0, 0), &ViewportConfig::default());
        assert!(m.cell_to_point(0, 0).is_none());
        assert!(m.point_to_cell(Point::new(0.0, 0.0)).is_none());
    }

    #[test]
    fn test_point_to_cell_inverts_cell_to_point() {
        let m = mapping();
        for (column, row) in [(0, 0), (42, 17), (99, 34)] {
            let p = m.cell_to_point(column, row).unwrap();
            assert_eq!(m.point_to_cell(p), Some((column, row)));
        }
        assert!(m.point_to_cell(Point::new(600.0, 0.0)).is_none());
    }

    #[test]
    fn test_cell_points_cover_braille_dots() {
        let points = mapping().cell_points(0, 0);
        assert_eq!(points.len(), 9);
        assert_eq!(points[0], Point::new(-495.0, 340.0));
        // 10 x 20 cell: dots are 5 wide and 5 tall.
        assert_eq!(points[1], Point::new(-497.5, 347.5));
        assert_eq!(points[2], Point::new(-492.5, 347.5));
        assert_eq!(points[8], Point::new(-492.5, 332.5));
    }

    #[test]
    fn test_cell_points_outside_area_is_empty() {
        assert!(mapping().cell_points(100, 0).is_empty());
    }
}
