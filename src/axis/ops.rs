use super::Axis2D;
use crate::bins::AxisBin;
use crate::error::AxisError;

/// Two axes are equal when their edge indices are identical. Accumulated
/// statistics are not compared.
impl<B: AxisBin> PartialEq for Axis2D<B> {
    fn eq(&self, other: &Self) -> bool {
        self.edges == other.edges
    }
}

impl<B: AxisBin> Axis2D<B> {
    /// Add `other` bin-by-bin. Both axes must share the same binning.
    pub fn try_add_assign(&mut self, other: &Self) -> Result<(), AxisError> {
        if self != other {
            return Err(AxisError::IncompatibleBinning);
        }
        for (bin, rhs) in self.bins.iter_mut().zip(&other.bins) {
            *bin += rhs;
        }
        self.dbn += &other.dbn;
        self.underflow += &other.underflow;
        self.overflow += &other.overflow;
        Ok(())
    }

    /// Subtract `other` bin-by-bin. Both axes must share the same binning.
    pub fn try_sub_assign(&mut self, other: &Self) -> Result<(), AxisError> {
        if self != other {
            return Err(AxisError::IncompatibleBinning);
        }
        for (bin, rhs) in self.bins.iter_mut().zip(&other.bins) {
            *bin -= rhs;
        }
        self.dbn -= &other.dbn;
        self.underflow -= &other.underflow;
        self.overflow -= &other.overflow;
        Ok(())
    }

    pub fn try_add(&self, other: &Self) -> Result<Self, AxisError> {
        let mut out = self.clone();
        out.try_add_assign(other)?;
        Ok(out)
    }

    pub fn try_sub(&self, other: &Self) -> Result<Self, AxisError> {
        let mut out = self.clone();
        out.try_sub_assign(other)?;
        Ok(out)
    }
}
