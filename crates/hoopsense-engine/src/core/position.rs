use serde::{Deserialize, Serialize};

/// A point on the court, in meters.
///
/// `x` runs along the court length (baseline to baseline), `y` across its width.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn distance_to(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    #[must_use]
    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

/// Axis-aligned bounding box of a tracked object (player, ball or basket).
///
/// Corner ordering is not enforced: an inverted box (`x1 > x2` or `y1 > y2`) is
/// accepted as-is, and [`width()`](Self::width) / [`height()`](Self::height) report
/// absolute extents so that degenerate boxes are tolerated rather than rejected.
/// All tactical measurements use the box [`center()`](Self::center).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x1: f64,
    pub x2: f64,
    pub y1: f64,
    pub y2: f64,
}

impl Position {
    #[must_use]
    pub const fn new(x1: f64, x2: f64, y1: f64, y2: f64) -> Self {
        Self { x1, x2, y1, y2 }
    }

    /// Builds a square box of side `2 * half_extent` centered on `center`.
    #[must_use]
    pub fn around(center: Point, half_extent: f64) -> Self {
        Self {
            x1: center.x - half_extent,
            x2: center.x + half_extent,
            y1: center.y - half_extent,
            y2: center.y + half_extent,
        }
    }

    #[must_use]
    pub fn center_x(&self) -> f64 {
        (self.x1 + self.x2) / 2.0
    }

    #[must_use]
    pub fn center_y(&self) -> f64 {
        (self.y1 + self.y2) / 2.0
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.center_x(), self.center_y())
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        (self.x2 - self.x1).abs()
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        (self.y2 - self.y1).abs()
    }

    /// Surface covered by the box (`width * height`).
    #[must_use]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Euclidean distance between the centers of two boxes.
    #[must_use]
    pub fn distance_to(&self, other: &Position) -> f64 {
        self.center().distance_to(other.center())
    }
}

/// Rectangular region a player is assigned to, given as `(x1, y1, x2, y2)`.
///
/// Bounds are expected to satisfy `x1 <= x2` and `y1 <= y2`; this is not checked here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct Zone {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Zone {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Inclusive containment test: points on the boundary are inside.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        (self.x1..=self.x2).contains(&point.x) && (self.y1..=self.y2).contains(&point.y)
    }
}

impl From<[f64; 4]> for Zone {
    fn from([x1, y1, x2, y2]: [f64; 4]) -> Self {
        Self { x1, y1, x2, y2 }
    }
}

impl From<Zone> for [f64; 4] {
    fn from(zone: Zone) -> Self {
        [zone.x1, zone.y1, zone.x2, zone.y2]
    }
}
