use crate::geometry::Segment;
use crate::validate::Rejection;
use serde::Serialize;

/// Record of a candidate bin that failed validation.
///
/// `attempt` counts every insertion attempt on the axis, admitted or not, so
/// it identifies the position of the candidate in the caller's input order.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DroppedBin {
    pub attempt: usize,
    pub segments: Vec<Segment>,
    pub reason: Rejection,
}
