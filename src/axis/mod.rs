//! Two-dimensional bin axis over irregular rectangular bins.
//!
//! [`Axis2D`] owns the bins, the [`EdgeIndex`] describing their boundaries,
//! the total/underflow/overflow distributions and cached extrema. Every bin,
//! whether it comes from an explicit list or from the regular-grid generator,
//! goes through the same path:
//!
//! 1. decompose into four boundary segments;
//! 2. validate against the current index ([`SegmentValidator`]);
//! 3. commit the four sides to the index and regenerate its cache;
//! 4. append the bin.
//!
//! Rejected candidates are recorded as [`DroppedBin`] diagnostics and do not
//! stop the batch. Extrema are recomputed after each batch.

mod inspect;
mod ops;

use crate::bins::{AxisBin, HistoBin2D};
use crate::dbn::Dbn2D;
use crate::diagnostics::DroppedBin;
use crate::edges::EdgeIndex;
use crate::error::AxisError;
use crate::geometry::{Rect, Segment};
use crate::grid::regular_rects;
use crate::lookup;
use crate::validate::{Rejection, SegmentValidator};

use log::{debug, warn};
use nalgebra::Vector2;

#[derive(Clone, Debug)]
pub struct Axis2D<B: AxisBin = HistoBin2D> {
    bins: Vec<B>,
    edges: EdgeIndex,
    dbn: Dbn2D,
    underflow: Dbn2D,
    overflow: Dbn2D,
    low_edge_x: f64,
    high_edge_x: f64,
    low_edge_y: f64,
    high_edge_y: f64,
    dropped: Vec<DroppedBin>,
    attempts: usize,
}

impl<B: AxisBin> Default for Axis2D<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: AxisBin> Axis2D<B> {
    /// Empty axis. Extrema of an empty axis are `+inf` (low) and `-inf` (high).
    pub fn new() -> Self {
        Self {
            bins: Vec::new(),
            edges: EdgeIndex::new(),
            dbn: Dbn2D::new(),
            underflow: Dbn2D::new(),
            overflow: Dbn2D::new(),
            low_edge_x: f64::INFINITY,
            high_edge_x: f64::NEG_INFINITY,
            low_edge_y: f64::INFINITY,
            high_edge_y: f64::NEG_INFINITY,
            dropped: Vec::new(),
            attempts: 0,
        }
    }

    /// Axis built from explicit bin rectangles. Invalid or overlapping
    /// rectangles are dropped; compare [`len`](Self::len) with the input size
    /// if every bin must be present.
    pub fn from_rects<I>(rects: I) -> Self
    where
        I: IntoIterator<Item = Rect>,
    {
        let mut axis = Self::new();
        axis.add_bins(rects);
        axis
    }

    /// Regular `nx × ny` layout over `[low_x, high_x] × [low_y, high_y]`.
    pub fn regular(
        nx: usize,
        low_x: f64,
        high_x: f64,
        ny: usize,
        low_y: f64,
        high_y: f64,
    ) -> Result<Self, AxisError> {
        let rects = regular_rects(nx, low_x, high_x, ny, low_y, high_y)?;
        debug!(
            "Axis2D::regular {nx}x{ny} over [{low_x}, {high_x}]x[{low_y}, {high_y}]"
        );
        Ok(Self::from_rects(rects))
    }

    /// Insert one bin. Returns its index, or `None` if it was rejected.
    pub fn add_bin(&mut self, rect: Rect) -> Option<usize> {
        let id = self.insert_rect(rect);
        self.regenerate_extrema();
        id
    }

    /// Insert a batch of bins and return how many were admitted.
    pub fn add_bins<I>(&mut self, rects: I) -> usize
    where
        I: IntoIterator<Item = Rect>,
    {
        let before = self.bins.len();
        let mut requested = 0usize;
        for rect in rects {
            requested += 1;
            self.insert_rect(rect);
        }
        self.regenerate_extrema();
        let admitted = self.bins.len() - before;
        debug!(
            "Axis2D::add_bins admitted {admitted}/{requested} (total bins {})",
            self.bins.len()
        );
        admitted
    }

    /// Insert one bin described by its boundary segments.
    ///
    /// Fails with [`AxisError::MalformedBin`] unless exactly four segments are
    /// given; geometric rejection is reported as `Ok(None)`.
    pub fn add_bin_segments(&mut self, segments: &[Segment]) -> Result<Option<usize>, AxisError> {
        let sides: [Segment; 4] = segments
            .try_into()
            .map_err(|_| AxisError::MalformedBin {
                segments: segments.len(),
            })?;
        let verdict = SegmentValidator::new(&self.edges).validate(&sides);
        let id = self.commit(sides, verdict);
        self.regenerate_extrema();
        Ok(id)
    }

    /// Bin merging after construction is not supported.
    pub fn merge_bins(&mut self, _from: usize, _to: usize) -> Result<(), AxisError> {
        Err(AxisError::Unsupported {
            operation: "merging bins",
        })
    }

    fn insert_rect(&mut self, rect: Rect) -> Option<usize> {
        let verdict = SegmentValidator::new(&self.edges).validate_rect(&rect);
        self.commit(rect.segments(), verdict)
    }

    fn commit(&mut self, segments: [Segment; 4], verdict: Result<Rect, Rejection>) -> Option<usize> {
        let attempt = self.attempts;
        self.attempts += 1;
        match verdict {
            Ok(rect) => {
                let id = self.bins.len();
                for side in rect.sides() {
                    self.edges.insert(&side, id);
                }
                if self.edges.is_dirty() {
                    self.edges.regenerate_cache();
                }
                self.bins.push(B::from_rect(rect));
                Some(id)
            }
            Err(reason) => {
                warn!("Axis2D: dropped bin candidate #{attempt}: {reason}");
                self.dropped.push(DroppedBin {
                    attempt,
                    segments: segments.to_vec(),
                    reason,
                });
                None
            }
        }
    }

    fn regenerate_extrema(&mut self) {
        let mut low_x = f64::INFINITY;
        let mut high_x = f64::NEG_INFINITY;
        let mut low_y = f64::INFINITY;
        let mut high_y = f64::NEG_INFINITY;
        for bin in &self.bins {
            low_x = low_x.min(bin.x_min());
            high_x = high_x.max(bin.x_max());
            low_y = low_y.min(bin.y_min());
            high_y = high_y.max(bin.y_max());
        }
        self.low_edge_x = low_x;
        self.high_edge_x = high_x;
        self.low_edge_y = low_y;
        self.high_edge_y = high_y;
    }

    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    pub fn bins(&self) -> &[B] {
        &self.bins
    }

    pub fn bin(&self, index: usize) -> Result<&B, AxisError> {
        let len = self.bins.len();
        self.bins
            .get(index)
            .ok_or(AxisError::IndexOutOfRange { index, len })
    }

    pub fn bin_mut(&mut self, index: usize) -> Result<&mut B, AxisError> {
        let len = self.bins.len();
        self.bins
            .get_mut(index)
            .ok_or(AxisError::IndexOutOfRange { index, len })
    }

    /// Index of the bin containing `(x, y)`, if any.
    pub fn bin_index(&self, x: f64, y: f64) -> Option<usize> {
        lookup::find_bin(&self.edges, x, y)
    }

    pub fn bin_by_coord(&self, x: f64, y: f64) -> Result<&B, AxisError> {
        let index = self.bin_index(x, y).ok_or(AxisError::NoBinAt { x, y })?;
        self.bin(index)
    }

    pub fn bin_by_coord_mut(&mut self, x: f64, y: f64) -> Result<&mut B, AxisError> {
        let index = self.bin_index(x, y).ok_or(AxisError::NoBinAt { x, y })?;
        self.bin_mut(index)
    }

    /// Fill the bin containing `(x, y)` and the total distribution.
    ///
    /// A point outside every bin fills nothing and yields
    /// [`AxisError::NoBinAt`]; under/overflow are not routed in 2D.
    pub fn fill(&mut self, x: f64, y: f64, weight: f64) -> Result<usize, AxisError> {
        let index = self.bin_index(x, y).ok_or(AxisError::NoBinAt { x, y })?;
        self.bins[index].fill(x, y, weight);
        self.dbn.fill(x, y, weight);
        Ok(index)
    }

    /// Zero every accumulator, keeping geometry.
    pub fn reset(&mut self) {
        self.dbn.reset();
        self.underflow.reset();
        self.overflow.reset();
        for bin in &mut self.bins {
            bin.reset();
        }
    }

    /// Multiply every coordinate by the per-axis factor.
    ///
    /// Factors must be finite and non-zero; a negative factor mirrors the
    /// layout along that axis.
    pub fn scale(&mut self, sx: f64, sy: f64) -> Result<(), AxisError> {
        if !sx.is_finite() || !sy.is_finite() || sx == 0.0 || sy == 0.0 {
            return Err(AxisError::InvalidScale { sx, sy });
        }
        self.edges.scale(Vector2::new(sx, sy));
        self.edges.regenerate_cache();
        for bin in &mut self.bins {
            bin.scale(sx, sy);
        }
        self.dbn.scale(sx, sy);
        self.underflow.scale(sx, sy);
        self.overflow.scale(sx, sy);
        self.regenerate_extrema();
        debug!("Axis2D::scale by ({sx}, {sy}) over {} bins", self.bins.len());
        Ok(())
    }

    /// Rescale accumulated weights only.
    pub fn scale_w(&mut self, factor: f64) {
        self.dbn.scale_w(factor);
        self.underflow.scale_w(factor);
        self.overflow.scale_w(factor);
        for bin in &mut self.bins {
            bin.scale_w(factor);
        }
    }

    pub fn low_edge_x(&self) -> f64 {
        self.low_edge_x
    }

    pub fn high_edge_x(&self) -> f64 {
        self.high_edge_x
    }

    pub fn low_edge_y(&self) -> f64 {
        self.low_edge_y
    }

    pub fn high_edge_y(&self) -> f64 {
        self.high_edge_y
    }

    pub fn edges(&self) -> &EdgeIndex {
        &self.edges
    }

    /// Candidates rejected so far, in insertion order.
    pub fn dropped(&self) -> &[DroppedBin] {
        &self.dropped
    }

    pub fn total_dbn(&self) -> &Dbn2D {
        &self.dbn
    }

    pub fn total_dbn_mut(&mut self) -> &mut Dbn2D {
        &mut self.dbn
    }

    pub fn underflow(&self) -> &Dbn2D {
        &self.underflow
    }

    pub fn underflow_mut(&mut self) -> &mut Dbn2D {
        &mut self.underflow
    }

    pub fn overflow(&self) -> &Dbn2D {
        &self.overflow
    }

    pub fn overflow_mut(&mut self) -> &mut Dbn2D {
        &mut self.overflow
    }
}
