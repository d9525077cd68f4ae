use crate::validate::Rejection;

/// Broad category of an [`AxisError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Index, coordinate or parameter outside the valid domain.
    Range,
    /// Structural mismatch or use of an unsupported capability.
    Logic,
    /// Candidate bin not described by four segments outlining a rectangle.
    Malformed,
}

/// Errors raised by [`Axis2D`](crate::Axis2D) operations.
#[derive(Clone, Debug, PartialEq)]
pub enum AxisError {
    IndexOutOfRange {
        index: usize,
        len: usize,
    },
    NoBinAt {
        x: f64,
        y: f64,
    },
    InvalidLimits {
        axis: char,
        bins: usize,
        low: f64,
        high: f64,
    },
    InvalidScale {
        sx: f64,
        sy: f64,
    },
    IncompatibleBinning,
    Unsupported {
        operation: &'static str,
    },
    MalformedBin {
        segments: usize,
    },
    /// Four segments that do not outline a non-degenerate rectangle.
    InvalidOutline {
        reason: Rejection,
    },
}

impl AxisError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AxisError::IndexOutOfRange { .. }
            | AxisError::NoBinAt { .. }
            | AxisError::InvalidLimits { .. }
            | AxisError::InvalidScale { .. } => ErrorKind::Range,
            AxisError::IncompatibleBinning | AxisError::Unsupported { .. } => ErrorKind::Logic,
            AxisError::MalformedBin { .. } | AxisError::InvalidOutline { .. } => {
                ErrorKind::Malformed
            }
        }
    }
}

impl std::fmt::Display for AxisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AxisError::IndexOutOfRange { index, len } => {
                write!(f, "bin index {index} out of range (axis has {len} bins)")
            }
            AxisError::NoBinAt { x, y } => write!(f, "no bin found at ({x}, {y})"),
            AxisError::InvalidLimits {
                axis,
                bins,
                low,
                high,
            } => write!(
                f,
                "invalid {axis} limits: {bins} bins over [{low}, {high}]"
            ),
            AxisError::InvalidScale { sx, sy } => {
                write!(f, "invalid scale factors ({sx}, {sy}); need finite non-zero")
            }
            AxisError::IncompatibleBinning => {
                write!(f, "cannot combine axes with different binnings")
            }
            AxisError::Unsupported { operation } => {
                write!(f, "{operation} is not supported by a 2D axis")
            }
            AxisError::MalformedBin { segments } => write!(
                f,
                "a bin needs exactly four boundary segments, got {segments}"
            ),
            AxisError::InvalidOutline { reason } => {
                write!(f, "segments do not outline a bin: {reason}")
            }
        }
    }
}

impl std::error::Error for AxisError {}
