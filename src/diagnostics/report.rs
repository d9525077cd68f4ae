use super::dropped::DroppedBin;
use serde::Serialize;

/// Bounding box of all bins on an axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Extent {
    pub low_x: f64,
    pub high_x: f64,
    pub low_y: f64,
    pub high_y: f64,
}

/// Outcome of resolving one probe point.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProbeResult {
    pub x: f64,
    pub y: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bin: Option<usize>,
}

/// Structural summary of an axis.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisReport {
    pub bins: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extent: Option<Extent>,
    pub griddy: bool,
    pub inclusion_suspected: bool,
    pub row_edge_counts: Vec<usize>,
    pub column_edge_counts: Vec<usize>,
    pub dropped: Vec<DroppedBin>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub probes: Vec<ProbeResult>,
}
