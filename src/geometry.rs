//! Planar primitives shared by the edge index, the validator and the bins.
//!
//! - [`Rect`]: closed axis-aligned rectangle `[x_min, x_max] × [y_min, y_max]`.
//! - [`Segment`]: raw directed pair of points as supplied by a caller.
//! - [`AxisSegment`]: a segment whose orientation has been fixed to either
//!   horizontal or vertical, with its endpoints ordered along the axis.

use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

/// Fraction of a feature's extent within which two coordinates on it are
/// considered equal.
pub const FUZZY_TOLERANCE: f64 = 1e-5;

/// Relative floating-point resolution; differences below this fraction of a
/// coordinate's magnitude are rounding noise regardless of extent.
const RESOLUTION: f64 = 4.0 * f64::EPSILON;

/// Absolute tolerance for comparing coordinates near `at` on a feature (edge,
/// side, bin) of length `extent`.
///
/// The tolerance follows the feature size, not the distance from the origin,
/// so narrow bins far from zero keep their width. It never drops below the
/// float resolution at `at`.
pub fn tolerance(at: f64, extent: f64) -> f64 {
    (FUZZY_TOLERANCE * extent.abs()).max(RESOLUTION * at.abs())
}

/// Compare two coordinates lying on a feature of length `extent`.
pub fn fuzzy_equals(a: f64, b: f64, extent: f64) -> bool {
    (a - b).abs() <= tolerance(a.abs().max(b.abs()), extent)
}

/// Closed axis-aligned rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Rect {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Rectangle spanned by two opposite corners, in any order.
    pub fn from_corners(a: Point2<f64>, b: Point2<f64>) -> Self {
        Self {
            x_min: a.x.min(b.x),
            x_max: a.x.max(b.x),
            y_min: a.y.min(b.y),
            y_max: a.y.max(b.y),
        }
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    pub fn center(&self) -> Point2<f64> {
        Point2::new(
            0.5 * (self.x_min + self.x_max),
            0.5 * (self.y_min + self.y_max),
        )
    }

    pub fn is_finite(&self) -> bool {
        self.x_min.is_finite()
            && self.x_max.is_finite()
            && self.y_min.is_finite()
            && self.y_max.is_finite()
    }

    /// True if the rectangle collapses to a line or a point along either axis,
    /// up to float resolution at its coordinates.
    pub fn is_degenerate(&self) -> bool {
        let at_x = self.x_min.abs().max(self.x_max.abs());
        let at_y = self.y_min.abs().max(self.y_max.abs());
        self.width() <= tolerance(at_x, 0.0) || self.height() <= tolerance(at_y, 0.0)
    }

    /// Strict containment of a point in the open interior.
    pub fn contains_interior(&self, p: Point2<f64>) -> bool {
        p.x > self.x_min && p.x < self.x_max && p.y > self.y_min && p.y < self.y_max
    }

    /// Boundary as four raw segments: left, top, right, bottom.
    pub fn segments(&self) -> [Segment; 4] {
        let ll = Point2::new(self.x_min, self.y_min);
        let ul = Point2::new(self.x_min, self.y_max);
        let ur = Point2::new(self.x_max, self.y_max);
        let lr = Point2::new(self.x_max, self.y_min);
        [
            Segment::new(ll, ul),
            Segment::new(ul, ur),
            Segment::new(lr, ur),
            Segment::new(ll, lr),
        ]
    }

    /// Boundary as oriented sides: bottom, top, left, right.
    pub fn sides(&self) -> [AxisSegment; 4] {
        [
            AxisSegment::Horizontal {
                y: self.y_min,
                x0: self.x_min,
                x1: self.x_max,
            },
            AxisSegment::Horizontal {
                y: self.y_max,
                x0: self.x_min,
                x1: self.x_max,
            },
            AxisSegment::Vertical {
                x: self.x_min,
                y0: self.y_min,
                y1: self.y_max,
            },
            AxisSegment::Vertical {
                x: self.x_max,
                y0: self.y_min,
                y1: self.y_max,
            },
        ]
    }

    /// Multiply every coordinate by the per-axis factor. Negative factors
    /// mirror the rectangle, so bounds are re-ordered afterwards.
    pub fn scaled(&self, factors: Vector2<f64>) -> Self {
        let (xa, xb) = (self.x_min * factors.x, self.x_max * factors.x);
        let (ya, yb) = (self.y_min * factors.y, self.y_max * factors.y);
        Self {
            x_min: xa.min(xb),
            x_max: xa.max(xb),
            y_min: ya.min(yb),
            y_max: ya.max(yb),
        }
    }
}

/// Raw directed segment between two points.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point2<f64>,
    pub end: Point2<f64>,
}

impl Segment {
    pub fn new(start: Point2<f64>, end: Point2<f64>) -> Self {
        Self { start, end }
    }

    /// Fix the orientation of the segment.
    ///
    /// The drift across the segment is compared with its length, so the
    /// classification does not depend on where the segment sits. Returns
    /// `None` when the segment is neither horizontal nor vertical. A segment
    /// collapsed to a point is classified as vertical.
    pub fn orient(&self) -> Option<AxisSegment> {
        let (a, b) = (self.start, self.end);
        let (dx, dy) = ((b.x - a.x).abs(), (b.y - a.y).abs());
        let at_x = a.x.abs().max(b.x.abs());
        let at_y = a.y.abs().max(b.y.abs());
        if dx <= tolerance(at_x, dy) {
            Some(AxisSegment::Vertical {
                x: a.x,
                y0: a.y.min(b.y),
                y1: a.y.max(b.y),
            })
        } else if dy <= tolerance(at_y, dx) {
            Some(AxisSegment::Horizontal {
                y: a.y,
                x0: a.x.min(b.x),
                x1: a.x.max(b.x),
            })
        } else {
            None
        }
    }
}

/// Segment with orientation fixed at construction and `start <= end` along
/// its axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "orientation", rename_all = "lowercase")]
pub enum AxisSegment {
    Horizontal { y: f64, x0: f64, x1: f64 },
    Vertical { x: f64, y0: f64, y1: f64 },
}

impl AxisSegment {
    /// Coordinate shared by both endpoints (Y for horizontal, X for vertical).
    pub fn major(&self) -> f64 {
        match *self {
            AxisSegment::Horizontal { y, .. } => y,
            AxisSegment::Vertical { x, .. } => x,
        }
    }

    /// Extent along the varying coordinate as `(low, high)`.
    pub fn span(&self) -> (f64, f64) {
        match *self {
            AxisSegment::Horizontal { x0, x1, .. } => (x0, x1),
            AxisSegment::Vertical { y0, y1, .. } => (y0, y1),
        }
    }

    pub fn is_horizontal(&self) -> bool {
        matches!(self, AxisSegment::Horizontal { .. })
    }
}
