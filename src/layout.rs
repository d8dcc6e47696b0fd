//! Grid geometry for the seat board.
//!
//! All coordinates live in the canvas space: origin at the viewport center,
//! x grows to the right, y grows upwards. The renderer uses the same space by
//! setting its canvas bounds to `[-width/2, width/2] x [-height/2, height/2]`.

use crate::error::ConfigError;

/// Number of seat rows in the default hall.
pub const DEFAULT_ROWS: usize = 8;
/// Number of seats per row in the default hall.
pub const DEFAULT_COLS: usize = 12;
/// Seat radius in canvas units.
pub const DEFAULT_SEAT_RADIUS: f64 = 16.0;
/// Horizontal gap between neighbouring seats.
pub const DEFAULT_GAP_X: f64 = 18.0;
/// Vertical gap between rows.
pub const DEFAULT_GAP_Y: f64 = 24.0;

pub const DEFAULT_VIEWPORT_WIDTH: f64 = 1000.0;
pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 700.0;
/// Space reserved above the grid for the screen banner.
pub const DEFAULT_TOP_MARGIN: f64 = 150.0;
/// Space reserved below the grid for counters and the legend.
pub const DEFAULT_BOTTOM_MARGIN: f64 = 80.0;

/// A point in canvas space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance_to(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Shape of the seat grid.
#[derive(Debug, Clone, PartialEq)]
pub struct GridConfig {
    pub rows: usize,
    pub cols: usize,
    pub radius: f64,
    pub gap_x: f64,
    pub gap_y: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            radius: DEFAULT_SEAT_RADIUS,
            gap_x: DEFAULT_GAP_X,
            gap_y: DEFAULT_GAP_Y,
        }
    }
}

impl GridConfig {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            ..Self::default()
        }
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_gaps(mut self, gap_x: f64, gap_y: f64) -> Self {
        self.gap_x = gap_x;
        self.gap_y = gap_y;
        self
    }

    /// Seat diameter.
    pub fn diameter(&self) -> f64 {
        2.0 * self.radius
    }

    /// Total width covered by the seats of one row, gaps included.
    pub fn grid_width(&self) -> f64 {
        span(self.cols, self.diameter(), self.gap_x)
    }

    /// Total height covered by all rows, gaps included.
    pub fn grid_height(&self) -> f64 {
        span(self.rows, self.diameter(), self.gap_y)
    }

    /// Number of seats in the grid.
    pub fn seat_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Reject grids that cannot hold a seat or have negative spacing.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::EmptyGrid {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(ConfigError::InvalidRadius(self.radius));
        }
        if !(self.gap_x.is_finite() && self.gap_x >= 0.0 && self.gap_y.is_finite() && self.gap_y >= 0.0)
        {
            return Err(ConfigError::InvalidGap {
                gap_x: self.gap_x,
                gap_y: self.gap_y,
            });
        }
        Ok(())
    }
}

/// Dimensions of the drawable area and the bands reserved above and below the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportConfig {
    pub width: f64,
    pub height: f64,
    pub top_margin: f64,
    pub bottom_margin: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_VIEWPORT_WIDTH,
            height: DEFAULT_VIEWPORT_HEIGHT,
            top_margin: DEFAULT_TOP_MARGIN,
            bottom_margin: DEFAULT_BOTTOM_MARGIN,
        }
    }
}

impl ViewportConfig {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_margins(mut self, top: f64, bottom: f64) -> Self {
        self.top_margin = top;
        self.bottom_margin = bottom;
        self
    }

    /// Canvas x bounds for this viewport.
    pub fn x_bounds(&self) -> [f64; 2] {
        [-self.width / 2.0, self.width / 2.0]
    }

    /// Canvas y bounds for this viewport.
    pub fn y_bounds(&self) -> [f64; 2] {
        [-self.height / 2.0, self.height / 2.0]
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.width.is_finite() && self.width > 0.0 && self.height.is_finite() && self.height > 0.0)
        {
            return Err(ConfigError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

/// Length of `count` items of size `item` separated by `gap`.
/// A single item has no gap.
fn span(count: usize, item: f64, gap: f64) -> f64 {
    let count = count as f64;
    count * item + (count - 1.0).max(0.0) * gap
}

/// Bottom-left anchor of the grid: horizontally centered, vertically centered
/// in the band between the bottom and top margins.
pub fn grid_origin(grid: &GridConfig, viewport: &ViewportConfig) -> Point {
    let x0 = -grid.grid_width() / 2.0;
    let mut y0 = -viewport.height / 2.0 + viewport.bottom_margin + grid.radius;
    y0 += (viewport.height - viewport.top_margin - viewport.bottom_margin - grid.grid_height()) / 2.0;
    Point::new(x0, y0)
}

/// Center of seat `(row, col)` given the grid origin.
pub fn seat_center(grid: &GridConfig, origin: Point, row: usize, col: usize) -> Point {
    let pitch_x = grid.diameter() + grid.gap_x;
    let pitch_y = grid.diameter() + grid.gap_y;
    Point::new(
        origin.x + col as f64 * pitch_x + grid.radius,
        origin.y + row as f64 * pitch_y + grid.radius,
    )
}
