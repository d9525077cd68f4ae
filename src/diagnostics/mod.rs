//! Serializable diagnostics produced while building and inspecting an axis.
//!
//! - [`DroppedBin`]: a candidate bin rejected at insertion, with the reason.
//! - [`AxisReport`]: structural summary of an axis (extent, grid shape,
//!   dropped candidates) suitable for JSON output.
//! - [`TimingBreakdown`]: wall-clock timings of the demo stages.

pub mod dropped;
pub mod report;
pub mod timing;

pub use dropped::DroppedBin;
pub use report::{AxisReport, Extent, ProbeResult};
pub use timing::{StageTiming, TimingBreakdown};
