//! Point-to-bin resolution over an [`EdgeIndex`].
//!
//! A point belongs to the bin whose bottom edge is the nearest horizontal edge
//! below it spanning its X, and whose left edge is the nearest vertical edge
//! to its left spanning its Y. The row and column searches run independently
//! and must agree on the bin id.

use crate::edges::{EdgeCollection, EdgeIndex, EdgeList};

/// Relative nudge applied to query coordinates so a point lying exactly on a
/// shared wall resolves to the bin above / to the right of it. A few units in
/// the last place at the query's magnitude, far below any
/// [`tolerance`](crate::geometry::tolerance) of a non-degenerate bin.
pub const LOOKUP_NUDGE: f64 = 8.0 * f64::EPSILON;

#[inline]
fn nudge(v: f64) -> f64 {
    v + LOOKUP_NUDGE * v.abs().max(f64::MIN_POSITIVE)
}

/// Resolve `(x, y)` to a bin index, or `None` when the point lies in a gap,
/// a hole, or outside the covered region.
///
/// Bins behave as half-open `[min, max)` along both axes.
pub fn find_bin(index: &EdgeIndex, x: f64, y: f64) -> Option<usize> {
    if !x.is_finite() || !y.is_finite() {
        return None;
    }
    let (x, y) = (nudge(x), nudge(y));
    let row = nearest_spanning(index.horizontal(), y, x)?;
    let column = nearest_spanning(index.vertical(), x, y)?;
    row.spanning(x)
        .map(|e| e.bin)
        .find(|&bin| column.spanning(y).any(|e| e.bin == bin))
}

/// Walk down from the floor collection of `major` until one holds an edge
/// whose span strictly contains `minor`.
///
/// In a gap-free grid the floor collection matches immediately. Irregular
/// layouts can have a closer coordinate that belongs to a neighbouring bin
/// only, in which case lower coordinates are tried.
fn nearest_spanning(list: &EdgeList, major: f64, minor: f64) -> Option<&EdgeCollection> {
    let mut idx = list.floor_index(major)?;
    loop {
        let coll = list.get(idx)?;
        if coll.spanning(minor).next().is_some() {
            return Some(coll);
        }
        idx = idx.checked_sub(1)?;
    }
}
