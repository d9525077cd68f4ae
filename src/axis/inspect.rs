use super::Axis2D;
use crate::bins::AxisBin;
use crate::diagnostics::{AxisReport, Extent, ProbeResult};
use crate::grid;
use crate::lookup;

use rayon::prelude::*;

/// Fraction of a bin's height below its top edge where the inclusion probe
/// is placed.
const INCLUSION_PROBE: f64 = 1e-5;

impl<B: AxisBin> Axis2D<B> {
    /// True if the edge index has the row/column signature of a complete
    /// rectangular grid. See [`grid::is_griddy`] for the caveats.
    pub fn is_griddy(&self) -> bool {
        grid::is_griddy(&self.edges)
    }

    /// Best-effort check for bins hidden inside or shadowed by other bins.
    ///
    /// Probes each bin just inside its top-left corner and reports `true` if
    /// any probe resolves to a different bin or to none. Fast and almost
    /// always right; not a correctness guarantee.
    pub fn check_inclusion(&self) -> bool {
        self.bins.par_iter().enumerate().any(|(i, bin)| {
            let y = bin.y_max() - INCLUSION_PROBE * (bin.y_max() - bin.y_min());
            lookup::find_bin(&self.edges, bin.x_min(), y) != Some(i)
        })
    }

    pub fn extent(&self) -> Option<Extent> {
        if self.bins.is_empty() {
            return None;
        }
        Some(Extent {
            low_x: self.low_edge_x,
            high_x: self.high_edge_x,
            low_y: self.low_edge_y,
            high_y: self.high_edge_y,
        })
    }

    /// Structural summary, resolving each of `probes` to a bin index.
    pub fn report(&self, probes: &[[f64; 2]]) -> AxisReport {
        let (row_edge_counts, column_edge_counts) = grid::edge_counts(&self.edges);
        AxisReport {
            bins: self.bins.len(),
            extent: self.extent(),
            griddy: self.is_griddy(),
            inclusion_suspected: self.check_inclusion(),
            row_edge_counts,
            column_edge_counts,
            dropped: self.dropped.clone(),
            probes: probes
                .iter()
                .map(|&[x, y]| ProbeResult {
                    x,
                    y,
                    bin: self.bin_index(x, y),
                })
                .collect(),
        }
    }
}
