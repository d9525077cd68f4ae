use crate::error::AxisError;
use crate::geometry::Rect;

/// Rectangles of a regular `nx × ny` layout over `[low_x, high_x] × [low_y, high_y]`.
///
/// Edge `i` along an axis is `low + (high - low) * i / n`, so cells sharing a
/// wall compute bit-identical coordinates for it. Cells are ordered with X as
/// the outer loop: cell `(i, j)` has index `i * ny + j`.
pub fn regular_rects(
    nx: usize,
    low_x: f64,
    high_x: f64,
    ny: usize,
    low_y: f64,
    high_y: f64,
) -> Result<Vec<Rect>, AxisError> {
    let xs = edges_along('x', nx, low_x, high_x)?;
    let ys = edges_along('y', ny, low_y, high_y)?;
    let mut rects = Vec::with_capacity(nx * ny);
    for xw in xs.windows(2) {
        for yw in ys.windows(2) {
            rects.push(Rect::new(xw[0], xw[1], yw[0], yw[1]));
        }
    }
    Ok(rects)
}

fn edges_along(axis: char, bins: usize, low: f64, high: f64) -> Result<Vec<f64>, AxisError> {
    if bins == 0 || !low.is_finite() || !high.is_finite() || low >= high {
        return Err(AxisError::InvalidLimits {
            axis,
            bins,
            low,
            high,
        });
    }
    let width = high - low;
    Ok((0..=bins)
        .map(|i| {
            if i == bins {
                high
            } else {
                low + width * i as f64 / bins as f64
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_cells_x_major() {
        let rects = regular_rects(2, 0.0, 2.0, 3, 0.0, 3.0).expect("valid limits");
        assert_eq!(rects.len(), 6);
        assert_eq!(rects[0], Rect::new(0.0, 1.0, 0.0, 1.0));
        assert_eq!(rects[1], Rect::new(0.0, 1.0, 1.0, 2.0));
        assert_eq!(rects[3], Rect::new(1.0, 2.0, 0.0, 1.0));
        assert_eq!(rects[5], Rect::new(1.0, 2.0, 2.0, 3.0));
    }

    #[test]
    fn last_edge_hits_upper_limit_exactly() {
        let rects = regular_rects(3, 0.0, 0.3, 1, -1.0, 1.0).expect("valid limits");
        assert_eq!(rects.last().map(|r| r.x_max), Some(0.3));
    }

    #[test]
    fn rejects_invalid_limits() {
        assert!(matches!(
            regular_rects(0, 0.0, 1.0, 1, 0.0, 1.0),
            Err(AxisError::InvalidLimits { axis: 'x', .. })
        ));
        assert!(matches!(
            regular_rects(1, 0.0, 1.0, 2, 3.0, 3.0),
            Err(AxisError::InvalidLimits { axis: 'y', .. })
        ));
        assert!(regular_rects(1, f64::NAN, 1.0, 1, 0.0, 1.0).is_err());
    }
}
