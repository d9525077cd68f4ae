use crate::error::AxisError;
use crate::geometry::Rect;
use crate::Axis2D;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct AxisToolConfig {
    pub layout: LayoutConfig,
    /// Optional per-axis rescale applied after construction.
    #[serde(default)]
    pub scale: Option<[f64; 2]>,
    /// Points to resolve against the finished axis.
    #[serde(default)]
    pub probes: Vec<[f64; 2]>,
    #[serde(default)]
    pub output: AxisOutputConfig,
}

/// Bin layout, either a regular grid or an explicit list of rectangles.
#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LayoutConfig {
    Regular {
        nx: usize,
        x_range: [f64; 2],
        ny: usize,
        y_range: [f64; 2],
    },
    Explicit {
        bins: Vec<Rect>,
    },
}

impl LayoutConfig {
    /// Number of bins the layout asks for.
    pub fn requested(&self) -> usize {
        match self {
            LayoutConfig::Regular { nx, ny, .. } => nx * ny,
            LayoutConfig::Explicit { bins } => bins.len(),
        }
    }

    pub fn build(&self) -> Result<Axis2D, AxisError> {
        match self {
            LayoutConfig::Regular {
                nx,
                x_range,
                ny,
                y_range,
            } => Axis2D::regular(*nx, x_range[0], x_range[1], *ny, y_range[0], y_range[1]),
            LayoutConfig::Explicit { bins } => Ok(Axis2D::from_rects(bins.iter().copied())),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AxisOutputConfig {
    /// Where to write the JSON report. Printed to stdout when absent.
    pub report_json: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<AxisToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

pub fn parse_config(data: &str) -> Result<AxisToolConfig, serde_json::Error> {
    serde_json::from_str(data)
}
