use crate::dbn::Dbn2D;
use crate::error::AxisError;
use crate::geometry::{Rect, Segment};
use crate::validate::close_outline;

use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};
use std::ops::{AddAssign, SubAssign};

/// Contract a bin type must satisfy to live on an [`Axis2D`](crate::Axis2D).
///
/// Combination operators are only applied by the axis to bins of identical
/// geometry.
pub trait AxisBin:
    Clone + Send + Sync + for<'a> AddAssign<&'a Self> + for<'a> SubAssign<&'a Self>
{
    fn from_rect(rect: Rect) -> Self;

    /// Build a bin from its four boundary segments.
    ///
    /// The segments must be axis-aligned and close a rectangle of non-zero
    /// extent. Overlap with other bins is not checked here.
    fn from_segments(segments: &[Segment]) -> Result<Self, AxisError> {
        let sides: &[Segment; 4] = segments.try_into().map_err(|_| AxisError::MalformedBin {
            segments: segments.len(),
        })?;
        close_outline(sides)
            .map(Self::from_rect)
            .map_err(|reason| AxisError::InvalidOutline { reason })
    }

    fn rect(&self) -> Rect;

    fn x_min(&self) -> f64 {
        self.rect().x_min
    }

    fn x_max(&self) -> f64 {
        self.rect().x_max
    }

    fn y_min(&self) -> f64 {
        self.rect().y_min
    }

    fn y_max(&self) -> f64 {
        self.rect().y_max
    }

    fn fill(&mut self, x: f64, y: f64, weight: f64);

    /// Zero the accumulated statistics, keeping geometry.
    fn reset(&mut self);

    /// Rescale geometry (and any coordinate moments) per axis.
    fn scale(&mut self, sx: f64, sy: f64);

    /// Rescale accumulated weights only.
    fn scale_w(&mut self, factor: f64);
}

/// Histogram bin: a rectangle with a weighted 2D distribution.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoBin2D {
    rect: Rect,
    dbn: Dbn2D,
}

impl HistoBin2D {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            dbn: Dbn2D::new(),
        }
    }

    pub fn dbn(&self) -> &Dbn2D {
        &self.dbn
    }

    pub fn area(&self) -> f64 {
        self.rect.area()
    }

    pub fn center(&self) -> Point2<f64> {
        self.rect.center()
    }

    pub fn sum_w(&self) -> f64 {
        self.dbn.sum_w
    }

    pub fn num_entries(&self) -> u64 {
        self.dbn.num_fills
    }

    /// Sum of weights per unit area.
    pub fn height(&self) -> f64 {
        self.dbn.sum_w / self.area()
    }
}

impl AxisBin for HistoBin2D {
    fn from_rect(rect: Rect) -> Self {
        Self::new(rect)
    }

    fn rect(&self) -> Rect {
        self.rect
    }

    fn fill(&mut self, x: f64, y: f64, weight: f64) {
        self.dbn.fill(x, y, weight);
    }

    fn reset(&mut self) {
        self.dbn.reset();
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        self.rect = self.rect.scaled(Vector2::new(sx, sy));
        self.dbn.scale(sx, sy);
    }

    fn scale_w(&mut self, factor: f64) {
        self.dbn.scale_w(factor);
    }
}

impl AddAssign<&HistoBin2D> for HistoBin2D {
    fn add_assign(&mut self, rhs: &HistoBin2D) {
        self.dbn += &rhs.dbn;
    }
}

impl SubAssign<&HistoBin2D> for HistoBin2D {
    fn sub_assign(&mut self, rhs: &HistoBin2D) {
        self.dbn -= &rhs.dbn;
    }
}
