use super::collection::{Edge, EdgeCollection};
use crate::geometry::{fuzzy_equals, AxisSegment};

use nalgebra::Vector2;

/// Edge collections sorted by major coordinate, plus a dense copy of the
/// coordinates used for floor lookups.
///
/// Inserting a new coordinate marks the key cache dirty; it must be rebuilt
/// with [`EdgeList::regenerate_cache`] before the next [`EdgeList::floor_index`].
#[derive(Clone, Debug, Default)]
pub struct EdgeList {
    collections: Vec<EdgeCollection>,
    keys: Vec<f64>,
    dirty: bool,
}

impl PartialEq for EdgeList {
    fn eq(&self, other: &Self) -> bool {
        self.collections == other.collections
    }
}

impl EdgeList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct major coordinates.
    pub fn len(&self) -> usize {
        self.collections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&EdgeCollection> {
        self.collections.get(index)
    }

    pub fn collections(&self) -> &[EdgeCollection] {
        &self.collections
    }

    /// Total number of edges across all coordinates.
    pub fn edge_count(&self) -> usize {
        self.collections.iter().map(EdgeCollection::len).sum()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Append `edge` to the collection at `coord`, creating it if no existing
    /// coordinate is fuzzy-equal on the scale of the edge's length. Returns
    /// true when a collection was created.
    pub fn insert(&mut self, coord: f64, edge: Edge) -> bool {
        match self.locate(coord, edge.high - edge.low) {
            Ok(idx) => {
                self.collections[idx].edges.push(edge);
                false
            }
            Err(pos) => {
                self.collections
                    .insert(pos, EdgeCollection::new(coord, edge));
                self.dirty = true;
                true
            }
        }
    }

    /// `Ok(index)` of a fuzzy-equal coordinate, or `Err(position)` where a new
    /// collection keeps the list sorted.
    ///
    /// Works on the collections themselves so it stays valid while the key
    /// cache is dirty.
    fn locate(&self, coord: f64, extent: f64) -> Result<usize, usize> {
        let pos = self.collections.partition_point(|c| c.coord <= coord);
        if pos > 0 && fuzzy_equals(self.collections[pos - 1].coord, coord, extent) {
            return Ok(pos - 1);
        }
        if pos < self.collections.len()
            && fuzzy_equals(self.collections[pos].coord, coord, extent)
        {
            return Ok(pos);
        }
        Err(pos)
    }

    pub fn regenerate_cache(&mut self) {
        self.keys.clear();
        self.keys.extend(self.collections.iter().map(|c| c.coord));
        self.dirty = false;
    }

    /// Index of the collection with the greatest coordinate `<= value`.
    ///
    /// `None` when `value` lies below every coordinate, the list is empty, or
    /// `value` is NaN.
    pub fn floor_index(&self, value: f64) -> Option<usize> {
        debug_assert!(!self.dirty, "floor lookup on a stale edge cache");
        let mut lo = 0usize;
        let mut hi = self.keys.len();
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if self.keys[mid] <= value {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }
        lo.checked_sub(1)
    }

    /// Collections whose coordinate lies strictly between `low` and `high`,
    /// excluding coordinates fuzzy-equal to either bound on the scale of
    /// `high - low`.
    pub fn between(&self, low: f64, high: f64) -> impl Iterator<Item = &EdgeCollection> + '_ {
        let extent = high - low;
        let start = self.floor_index(low).map_or(0, |i| i + 1);
        let end = self.floor_index(high).map_or(0, |i| i + 1).max(start);
        self.collections[start..end].iter().filter(move |c| {
            !fuzzy_equals(c.coord, low, extent) && !fuzzy_equals(c.coord, high, extent)
        })
    }

    /// Rescale coordinates and spans. A negative `major` factor reverses the
    /// order of the collections. Leaves the cache dirty.
    pub(crate) fn scale(&mut self, major: f64, minor: f64) {
        for coll in &mut self.collections {
            coll.scale(major, minor);
        }
        if major < 0.0 {
            self.collections.reverse();
        }
        self.dirty = true;
    }
}

/// Horizontal edges keyed by Y and vertical edges keyed by X.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EdgeIndex {
    horizontal: EdgeList,
    vertical: EdgeList,
}

impl EdgeIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows: horizontal edges grouped by Y.
    pub fn horizontal(&self) -> &EdgeList {
        &self.horizontal
    }

    /// Columns: vertical edges grouped by X.
    pub fn vertical(&self) -> &EdgeList {
        &self.vertical
    }

    pub fn is_empty(&self) -> bool {
        self.horizontal.is_empty() && self.vertical.is_empty()
    }

    pub fn is_dirty(&self) -> bool {
        self.horizontal.is_dirty() || self.vertical.is_dirty()
    }

    pub fn edge_count(&self) -> usize {
        self.horizontal.edge_count() + self.vertical.edge_count()
    }

    /// Commit one side of bin `bin`.
    pub fn insert(&mut self, side: &AxisSegment, bin: usize) {
        match *side {
            AxisSegment::Horizontal { y, x0, x1 } => {
                self.horizontal.insert(y, Edge::new(bin, x0, x1));
            }
            AxisSegment::Vertical { x, y0, y1 } => {
                self.vertical.insert(x, Edge::new(bin, y0, y1));
            }
        }
    }

    pub fn regenerate_cache(&mut self) {
        self.horizontal.regenerate_cache();
        self.vertical.regenerate_cache();
    }

    /// Multiply every stored coordinate by the per-axis factor. The caller
    /// regenerates the cache afterwards.
    pub fn scale(&mut self, factors: Vector2<f64>) {
        self.horizontal.scale(factors.y, factors.x);
        self.vertical.scale(factors.x, factors.y);
    }
}
