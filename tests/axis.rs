mod common;

use axis2d::{Axis2D, AxisBin, AxisError, ErrorKind, Rect, Rejection};
use common::layouts::{interior_samples, mosaic, permuted, unit_grid};

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn interior_points_resolve_to_their_bin_in_any_insertion_order() {
    init_logger();
    let rects = mosaic();
    for stride in [1, 3, 5, 7] {
        let order = permuted(&rects, stride);
        let axis: Axis2D = Axis2D::from_rects(order.iter().copied());
        assert_eq!(
            axis.len(),
            rects.len(),
            "stride {stride}: dropped {:?}",
            axis.dropped()
        );
        for (idx, rect) in order.iter().enumerate() {
            assert_eq!(axis.bin(idx).map(|b| b.rect()), Ok(*rect));
            for (x, y) in interior_samples(rect) {
                assert_eq!(
                    axis.bin_index(x, y),
                    Some(idx),
                    "stride {stride}: ({x}, {y}) should fall in {rect:?}"
                );
            }
        }
    }
}

#[test]
fn overlapping_candidates_leave_bin_count_unchanged() {
    init_logger();
    let mut axis: Axis2D = Axis2D::from_rects(mosaic());
    let before = axis.len();
    let overlapping = [
        Rect::new(1.0, 2.5, 0.5, 1.5),
        Rect::new(0.5, 1.5, 0.5, 1.5),
        Rect::new(2.0, 4.5, 1.0, 2.5),
        Rect::new(-1.0, 10.0, -1.0, 5.0),
        Rect::new(3.0, 5.0, 0.0, 1.0),
        Rect::new(8.5, 9.5, 0.0, 1.0),
    ];
    for rect in overlapping {
        assert_eq!(axis.add_bin(rect), None, "{rect:?} overlaps an existing bin");
    }
    assert_eq!(axis.len(), before);
    assert_eq!(axis.dropped().len(), overlapping.len());
    assert!(!axis.check_inclusion());
}

#[test]
fn adjacent_candidate_is_admitted_after_construction() {
    let mut axis: Axis2D = Axis2D::from_rects(mosaic());
    let id = axis.add_bin(Rect::new(6.0, 8.0, 0.0, 1.0));
    assert_eq!(id, Some(8));
    assert_eq!(axis.bin_index(7.0, 0.5), Some(8));
    assert_eq!(axis.high_edge_x(), 9.0);
}

#[test]
fn regular_grid_is_griddy_until_a_protruding_bin_is_added() {
    for (nx, ny) in [(1, 2), (2, 3), (5, 4)] {
        let mut axis: Axis2D =
            Axis2D::regular(nx, 0.0, nx as f64, ny, 0.0, ny as f64).expect("valid grid");
        assert_eq!(axis.len(), nx * ny);
        assert!(axis.is_griddy(), "{nx}x{ny} grid should be griddy");
        let extra = Rect::new(nx as f64, nx as f64 + 1.0, 0.0, 1.0);
        assert!(axis.add_bin(extra).is_some());
        assert!(!axis.is_griddy(), "{nx}x{ny} grid plus a protrusion is not a grid");
    }
}

#[test]
fn explicit_and_generated_grids_are_equal() {
    let generated: Axis2D = Axis2D::regular(3, 0.0, 3.0, 2, 0.0, 2.0).expect("valid grid");
    let explicit: Axis2D = Axis2D::from_rects(unit_grid(3, 2));
    assert!(generated == explicit);
}

#[test]
fn two_by_two_grid_resolves_four_distinct_bins() {
    let axis: Axis2D = Axis2D::regular(2, 0.0, 2.0, 2, 0.0, 2.0).expect("valid grid");
    let mut seen = Vec::new();
    for i in 0..2 {
        for j in 0..2 {
            let bin = axis
                .bin_index(i as f64 + 0.5, j as f64 + 0.5)
                .expect("cell centre lies inside the grid");
            assert!(!seen.contains(&bin), "bin {bin} resolved twice");
            seen.push(bin);
        }
    }
    assert_eq!(seen.len(), 4);
}

#[test]
fn scale_round_trip_restores_geometry() {
    let original: Axis2D = Axis2D::from_rects(mosaic());
    for s in [3.0, 0.1, 7.25] {
        let mut axis = original.clone();
        axis.scale(s, s).expect("finite scale");
        assert!(approx_eq(axis.high_edge_x(), 9.0 * s));
        axis.scale(1.0 / s, 1.0 / s).expect("finite scale");
        assert!(approx_eq(axis.low_edge_x(), original.low_edge_x()));
        assert!(approx_eq(axis.high_edge_x(), original.high_edge_x()));
        assert!(approx_eq(axis.low_edge_y(), original.low_edge_y()));
        assert!(approx_eq(axis.high_edge_y(), original.high_edge_y()));
        for (a, b) in axis.bins().iter().zip(original.bins()) {
            assert!(approx_eq(a.x_min(), b.x_min()) && approx_eq(a.x_max(), b.x_max()));
            assert!(approx_eq(a.y_min(), b.y_min()) && approx_eq(a.y_max(), b.y_max()));
        }
        let rows = axis.edges().horizontal().collections();
        let orig_rows = original.edges().horizontal().collections();
        assert_eq!(rows.len(), orig_rows.len());
        for (r, o) in rows.iter().zip(orig_rows) {
            assert!(approx_eq(r.coord, o.coord));
        }
        for rect in mosaic() {
            let c = rect.center();
            assert_eq!(axis.bin_index(c.x, c.y), original.bin_index(c.x, c.y));
        }
    }
}

#[test]
fn scaled_axis_resolves_scaled_points() {
    let mut axis: Axis2D = Axis2D::from_rects(mosaic());
    axis.scale(2.0, 0.5).expect("finite scale");
    assert_eq!(axis.bin_index(1.0 * 2.0, 3.5 * 0.5), Some(0));
    assert_eq!(axis.bin_index(8.5 * 2.0, 1.0 * 0.5), Some(7));
    assert!(!axis.is_griddy());
}

#[test]
fn addition_sums_bins_and_totals() {
    let mut a: Axis2D = Axis2D::from_rects(mosaic());
    let mut b: Axis2D = Axis2D::from_rects(mosaic());
    a.fill(1.0, 1.0, 2.0).expect("inside");
    a.fill(5.0, 2.0, 1.0).expect("inside");
    b.fill(1.5, 3.0, 0.5).expect("inside");
    a.underflow_mut().fill(-1.0, -1.0, 1.0);
    b.overflow_mut().fill(10.0, 10.0, 4.0);

    a.try_add_assign(&b).expect("identical layouts combine");
    assert_eq!(a.bin(0).map(|bin| bin.sum_w()), Ok(2.5));
    assert_eq!(a.bin(0).map(|bin| bin.num_entries()), Ok(2));
    assert_eq!(a.bin(4).map(|bin| bin.sum_w()), Ok(1.0));
    assert_eq!(a.total_dbn().sum_w, 3.5);
    assert_eq!(a.total_dbn().num_fills, 3);
    assert_eq!(a.underflow().sum_w, 1.0);
    assert_eq!(a.overflow().sum_w, 4.0);
}

#[test]
fn addition_of_different_layouts_is_a_logic_error() {
    let mut a: Axis2D = Axis2D::from_rects(mosaic());
    let mut other = mosaic();
    other[7] = Rect::new(8.0, 9.5, 0.5, 1.5);
    let b: Axis2D = Axis2D::from_rects(other);
    assert!(a != b);
    let err = a.try_add_assign(&b).unwrap_err();
    assert_eq!(err, AxisError::IncompatibleBinning);
    assert_eq!(err.kind(), ErrorKind::Logic);
    assert_eq!(a.try_sub(&b).map(|_| ()), Err(AxisError::IncompatibleBinning));
}

#[test]
fn gap_points_are_range_errors() {
    let axis: Axis2D = Axis2D::from_rects(mosaic());
    for (x, y) in [(7.0, 1.0), (8.5, 2.0), (8.5, 0.25), (-0.5, 2.0), (3.0, 4.5)] {
        let err = axis.bin_by_coord(x, y).unwrap_err();
        assert_eq!(err, AxisError::NoBinAt { x, y });
        assert_eq!(err.kind(), ErrorKind::Range);
    }
}

#[test]
fn dropped_diagnostics_identify_the_candidate() {
    let mut rects = unit_grid(2, 2);
    rects.insert(2, Rect::new(0.5, 1.5, 0.5, 1.5));
    let axis: Axis2D = Axis2D::from_rects(rects);
    assert_eq!(axis.len(), 4);
    let dropped = axis.dropped();
    assert_eq!(dropped.len(), 1);
    assert_eq!(dropped[0].attempt, 2);
    assert!(matches!(
        dropped[0].reason,
        Rejection::Crossing { .. } | Rejection::Overlap { .. }
    ));
}

#[test]
fn layouts_far_from_origin_keep_every_bin() {
    init_logger();
    let grid: Axis2D = Axis2D::regular(2, 1e6, 1e6 + 2.0, 2, 0.0, 2.0).expect("valid grid");
    assert_eq!(grid.len(), 4, "dropped {:?}", grid.dropped());
    assert!(grid.is_griddy());

    let x0 = 1.7e9;
    let axis: Axis2D = Axis2D::from_rects([
        Rect::new(x0, x0 + 1000.0, 0.0, 1.0),
        Rect::new(x0 + 1000.0, x0 + 2000.0, 0.0, 1.0),
    ]);
    assert_eq!(axis.len(), 2, "dropped {:?}", axis.dropped());
    assert_eq!(axis.bin_index(x0 + 500.0, 0.5), Some(0));
    assert_eq!(axis.bin_index(x0 + 1500.0, 0.5), Some(1));
    assert_eq!(axis.bin_index(x0 + 2500.0, 0.5), None);

    let shifted: Axis2D = Axis2D::from_rects(
        mosaic()
            .into_iter()
            .map(|r| Rect::new(r.x_min + 1e6, r.x_max + 1e6, r.y_min, r.y_max)),
    );
    assert_eq!(shifted.len(), mosaic().len(), "dropped {:?}", shifted.dropped());
    for (idx, rect) in mosaic().iter().enumerate() {
        let c = rect.center();
        assert_eq!(shifted.bin_index(c.x + 1e6, c.y), Some(idx));
    }
}

#[test]
fn neighbour_within_tolerance_of_a_shared_wall_is_admitted() {
    let mut axis: Axis2D = Axis2D::from_rects([Rect::new(0.0, 1.0, 0.0, 1.0)]);
    assert_eq!(axis.add_bin(Rect::new(0.9999999, 2.0, 0.5, 3.0)), Some(1));
    assert!(axis.dropped().is_empty());
    assert_eq!(axis.bin_index(1.5, 2.0), Some(1));
    assert_eq!(axis.add_bin(Rect::new(0.5, 2.0, -1.0, 0.5)), None);
    assert!(matches!(axis.dropped()[0].reason, Rejection::Crossing { .. }));
}
