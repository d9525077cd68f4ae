use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Running sums of a weighted two-dimensional sample.
///
/// Stores the fill count and the weighted moments needed for means and
/// variances along each axis plus the XY cross term.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dbn2D {
    pub num_fills: u64,
    pub sum_w: f64,
    pub sum_w2: f64,
    pub sum_wx: f64,
    pub sum_wx2: f64,
    pub sum_wy: f64,
    pub sum_wy2: f64,
    pub sum_wxy: f64,
}

impl Dbn2D {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fill(&mut self, x: f64, y: f64, weight: f64) {
        self.num_fills += 1;
        self.sum_w += weight;
        self.sum_w2 += weight * weight;
        self.sum_wx += weight * x;
        self.sum_wx2 += weight * x * x;
        self.sum_wy += weight * y;
        self.sum_wy2 += weight * y * y;
        self.sum_wxy += weight * x * y;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Rescale as if every fill weight had been multiplied by `factor`.
    pub fn scale_w(&mut self, factor: f64) {
        self.sum_w *= factor;
        self.sum_w2 *= factor * factor;
        self.sum_wx *= factor;
        self.sum_wx2 *= factor;
        self.sum_wy *= factor;
        self.sum_wy2 *= factor;
        self.sum_wxy *= factor;
    }

    /// Rescale as if every filled coordinate had been multiplied per axis.
    pub fn scale(&mut self, sx: f64, sy: f64) {
        self.sum_wx *= sx;
        self.sum_wx2 *= sx * sx;
        self.sum_wy *= sy;
        self.sum_wy2 *= sy * sy;
        self.sum_wxy *= sx * sy;
    }

    /// Effective number of entries, `(Σw)² / Σw²`.
    pub fn eff_num_entries(&self) -> f64 {
        if self.sum_w2 == 0.0 {
            return 0.0;
        }
        self.sum_w * self.sum_w / self.sum_w2
    }

    pub fn mean_x(&self) -> Option<f64> {
        (self.sum_w != 0.0).then(|| self.sum_wx / self.sum_w)
    }

    pub fn mean_y(&self) -> Option<f64> {
        (self.sum_w != 0.0).then(|| self.sum_wy / self.sum_w)
    }
}

impl AddAssign<&Dbn2D> for Dbn2D {
    fn add_assign(&mut self, rhs: &Dbn2D) {
        self.num_fills += rhs.num_fills;
        self.sum_w += rhs.sum_w;
        self.sum_w2 += rhs.sum_w2;
        self.sum_wx += rhs.sum_wx;
        self.sum_wx2 += rhs.sum_wx2;
        self.sum_wy += rhs.sum_wy;
        self.sum_wy2 += rhs.sum_wy2;
        self.sum_wxy += rhs.sum_wxy;
    }
}

/// Fill counts are added, not subtracted: the result still reflects every
/// fill that contributed to either operand.
impl SubAssign<&Dbn2D> for Dbn2D {
    fn sub_assign(&mut self, rhs: &Dbn2D) {
        self.num_fills += rhs.num_fills;
        self.sum_w -= rhs.sum_w;
        self.sum_w2 -= rhs.sum_w2;
        self.sum_wx -= rhs.sum_wx;
        self.sum_wx2 -= rhs.sum_wx2;
        self.sum_wy -= rhs.sum_wy;
        self.sum_wy2 -= rhs.sum_wy2;
        self.sum_wxy -= rhs.sum_wxy;
    }
}

impl Add for Dbn2D {
    type Output = Dbn2D;

    fn add(mut self, rhs: Dbn2D) -> Dbn2D {
        self += &rhs;
        self
    }
}

impl Sub for Dbn2D {
    type Output = Dbn2D;

    fn sub(mut self, rhs: Dbn2D) -> Dbn2D {
        self -= &rhs;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn fill_accumulates_moments() {
        let mut d = Dbn2D::new();
        d.fill(1.0, 2.0, 2.0);
        d.fill(3.0, -1.0, 1.0);
        assert_eq!(d.num_fills, 2);
        assert!(approx_eq(d.sum_w, 3.0));
        assert!(approx_eq(d.sum_w2, 5.0));
        assert!(approx_eq(d.sum_wx, 5.0));
        assert!(approx_eq(d.sum_wxy, 1.0));
        assert_eq!(d.mean_x(), Some(5.0 / 3.0));
    }

    #[test]
    fn scale_w_squares_only_the_weight_square() {
        let mut d = Dbn2D::new();
        d.fill(2.0, 1.0, 1.0);
        d.scale_w(3.0);
        assert!(approx_eq(d.sum_w, 3.0));
        assert!(approx_eq(d.sum_w2, 9.0));
        assert!(approx_eq(d.sum_wx2, 12.0));
        assert!(approx_eq(d.eff_num_entries(), 1.0));
    }

    #[test]
    fn coordinate_scale_leaves_weights() {
        let mut d = Dbn2D::new();
        d.fill(2.0, 1.0, 1.0);
        d.scale(2.0, -1.0);
        assert!(approx_eq(d.sum_w, 1.0));
        assert!(approx_eq(d.sum_wx, 4.0));
        assert!(approx_eq(d.sum_wx2, 16.0));
        assert!(approx_eq(d.sum_wy, -1.0));
        assert!(approx_eq(d.sum_wxy, -4.0));
    }

    #[test]
    fn subtraction_keeps_fill_history() {
        let mut a = Dbn2D::new();
        a.fill(0.0, 0.0, 2.0);
        let mut b = Dbn2D::new();
        b.fill(0.0, 0.0, 0.5);
        let diff = a - b;
        assert_eq!(diff.num_fills, 2);
        assert!(approx_eq(diff.sum_w, 1.5));
        let sum = a + b;
        assert!(approx_eq(sum.sum_w, 2.5));
    }

    #[test]
    fn empty_distribution_has_no_mean() {
        assert_eq!(Dbn2D::new().mean_y(), None);
        assert_eq!(Dbn2D::new().eff_num_entries(), 0.0);
    }
}
