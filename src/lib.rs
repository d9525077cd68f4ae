#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod axis;
pub mod bins;
pub mod dbn;
pub mod diagnostics;
pub mod error;
pub mod geometry;

// Building blocks behind the axis; public for tooling and tests.
pub mod config;
pub mod edges;
pub mod grid;
pub mod io;
pub mod lookup;
pub mod validate;

// --- High-level re-exports -------------------------------------------------

pub use crate::axis::Axis2D;
pub use crate::bins::{AxisBin, HistoBin2D};
pub use crate::dbn::Dbn2D;
pub use crate::error::{AxisError, ErrorKind};
pub use crate::geometry::{AxisSegment, Rect, Segment};

// Diagnostics returned by the axis.
pub use crate::diagnostics::{AxisReport, DroppedBin};
pub use crate::validate::Rejection;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use axis2d::prelude::*;
///
/// let mut axis: Axis2D = Axis2D::regular(4, 0.0, 4.0, 2, 0.0, 1.0).unwrap();
/// let idx = axis.fill(2.5, 0.25, 1.0).unwrap();
/// assert_eq!(axis.bin(idx).unwrap().sum_w(), 1.0);
/// assert!(axis.is_griddy());
/// ```
pub mod prelude {
    pub use crate::{Axis2D, AxisBin, AxisError, HistoBin2D, Rect};
}
