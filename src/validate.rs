//! Admission gate for candidate bins.
//!
//! A candidate arrives as four raw boundary segments. It is admitted when:
//! 1. every coordinate is finite and every segment is horizontal or vertical;
//! 2. the segments close a rectangle of non-zero extent;
//! 3. no side strictly crosses an edge already in the index (touching at an
//!    endpoint is allowed, since neighbouring bins share corners);
//! 4. the candidate neither sits inside an existing bin nor encloses part of an
//!    existing edge.
//!
//! Steps 3 and 4 together reject any interior overlap with a valid existing
//! layout. The checks are best-effort under floating-point tolerance.

use crate::edges::{EdgeIndex, EdgeList};
use crate::geometry::{fuzzy_equals, AxisSegment, Rect, Segment};
use crate::lookup;

use nalgebra::Point2;
use serde::Serialize;

/// Why a candidate bin was dropped.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "reason", rename_all = "camelCase")]
pub enum Rejection {
    NonFinite,
    Diagonal { segment: usize },
    NotRectangular,
    Degenerate,
    Crossing { side: AxisSegment },
    Overlap { bin: usize },
    EnclosesEdge { bin: usize },
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::NonFinite => write!(f, "non-finite coordinate"),
            Rejection::Diagonal { segment } => {
                write!(f, "segment {segment} is neither horizontal nor vertical")
            }
            Rejection::NotRectangular => write!(f, "segments do not close a rectangle"),
            Rejection::Degenerate => write!(f, "rectangle has zero extent"),
            Rejection::Crossing { side } => write!(f, "side {side:?} cuts an existing edge"),
            Rejection::Overlap { bin } => write!(f, "lies inside existing bin {bin}"),
            Rejection::EnclosesEdge { bin } => {
                write!(f, "encloses part of an edge of existing bin {bin}")
            }
        }
    }
}

/// Checks candidate bins against the edges already committed to an index.
///
/// The index cache must be current (see [`EdgeIndex::regenerate_cache`]).
pub struct SegmentValidator<'a> {
    index: &'a EdgeIndex,
}

impl<'a> SegmentValidator<'a> {
    pub fn new(index: &'a EdgeIndex) -> Self {
        Self { index }
    }

    /// Validate a candidate given as raw segments and return its normalized
    /// rectangle.
    pub fn validate(&self, segments: &[Segment; 4]) -> Result<Rect, Rejection> {
        let rect = close_outline(segments)?;
        self.admit(&rect)
    }

    /// Validate a candidate given as a rectangle. Its sides are horizontal and
    /// vertical by construction, so only finiteness and extent are checked
    /// before the index tests.
    pub fn validate_rect(&self, rect: &Rect) -> Result<Rect, Rejection> {
        if !rect.is_finite() {
            return Err(Rejection::NonFinite);
        }
        let rect = Rect::from_corners(
            Point2::new(rect.x_min, rect.y_min),
            Point2::new(rect.x_max, rect.y_max),
        );
        if rect.is_degenerate() {
            return Err(Rejection::Degenerate);
        }
        self.admit(&rect)
    }

    fn admit(&self, rect: &Rect) -> Result<Rect, Rejection> {
        if let Some(side) = rect.sides().into_iter().find(|s| cuts_existing(self.index, s)) {
            return Err(Rejection::Crossing { side });
        }
        let center = rect.center();
        if let Some(bin) = lookup::find_bin(self.index, center.x, center.y) {
            return Err(Rejection::Overlap { bin });
        }
        if let Some(bin) = enclosed_edge(self.index, rect) {
            return Err(Rejection::EnclosesEdge { bin });
        }
        Ok(*rect)
    }
}

/// Check that four raw segments are finite, axis-aligned and close a
/// rectangle of non-zero extent. Does not consult any index.
pub fn close_outline(segments: &[Segment; 4]) -> Result<Rect, Rejection> {
    let sides = orient_all(segments)?;
    close_rectangle(&sides)
}

fn orient_all(segments: &[Segment; 4]) -> Result<[AxisSegment; 4], Rejection> {
    let finite = segments
        .iter()
        .all(|s| s.start.x.is_finite() && s.start.y.is_finite() && s.end.x.is_finite() && s.end.y.is_finite());
    if !finite {
        return Err(Rejection::NonFinite);
    }
    let mut sides = [AxisSegment::Vertical {
        x: 0.0,
        y0: 0.0,
        y1: 0.0,
    }; 4];
    for (i, (seg, slot)) in segments.iter().zip(sides.iter_mut()).enumerate() {
        *slot = seg.orient().ok_or(Rejection::Diagonal { segment: i })?;
    }
    Ok(sides)
}

/// Two horizontal sides at distinct Y spanning the same X range and two
/// vertical sides at distinct X spanning the same Y range.
fn close_rectangle(sides: &[AxisSegment; 4]) -> Result<Rect, Rejection> {
    let mut horizontal: Vec<&AxisSegment> = sides.iter().filter(|s| s.is_horizontal()).collect();
    let mut vertical: Vec<&AxisSegment> = sides.iter().filter(|s| !s.is_horizontal()).collect();
    if horizontal.len() != 2 || vertical.len() != 2 {
        return Err(Rejection::NotRectangular);
    }
    horizontal.sort_by(|a, b| a.major().total_cmp(&b.major()));
    vertical.sort_by(|a, b| a.major().total_cmp(&b.major()));

    let rect = Rect::new(
        vertical[0].major(),
        vertical[1].major(),
        horizontal[0].major(),
        horizontal[1].major(),
    );
    if rect.is_degenerate() {
        return Err(Rejection::Degenerate);
    }
    let spans_match = |s: &AxisSegment, low: f64, high: f64| {
        let (a, b) = s.span();
        fuzzy_equals(a, low, high - low) && fuzzy_equals(b, high, high - low)
    };
    let closed = horizontal
        .iter()
        .all(|s| spans_match(s, rect.x_min, rect.x_max))
        && vertical
            .iter()
            .all(|s| spans_match(s, rect.y_min, rect.y_max));
    if !closed {
        return Err(Rejection::NotRectangular);
    }
    Ok(rect)
}

/// True if `side` strictly crosses a perpendicular edge in the index.
fn cuts_existing(index: &EdgeIndex, side: &AxisSegment) -> bool {
    let (perpendicular, at) = match side {
        AxisSegment::Vertical { x, .. } => (index.horizontal(), *x),
        AxisSegment::Horizontal { y, .. } => (index.vertical(), *y),
    };
    let (low, high) = side.span();
    perpendicular.between(low, high).any(|coll| {
        coll.edges.iter().any(|e| {
            let len = e.high - e.low;
            e.spans(at) && !fuzzy_equals(e.low, at, len) && !fuzzy_equals(e.high, at, len)
        })
    })
}

/// First existing bin with an edge running through the open interior of
/// `rect` over a non-negligible length.
fn enclosed_edge(index: &EdgeIndex, rect: &Rect) -> Option<usize> {
    enclosed_in(index.horizontal(), (rect.y_min, rect.y_max), (rect.x_min, rect.x_max))
        .or_else(|| enclosed_in(index.vertical(), (rect.x_min, rect.x_max), (rect.y_min, rect.y_max)))
}

fn enclosed_in(list: &EdgeList, major: (f64, f64), minor: (f64, f64)) -> Option<usize> {
    list.between(major.0, major.1)
        .flat_map(|coll| coll.edges.iter())
        .find(|e| {
            e.overlap(minor.0, minor.1) > 0.0
                && !fuzzy_equals(e.low.max(minor.0), e.high.min(minor.1), minor.1 - minor.0)
        })
        .map(|e| e.bin)
}
