//! Grid-related helpers for 2D bin layouts.
//!
//! - [`check`]: structural test for "the edge index describes a complete,
//!   gap-free rectangular grid".
//! - [`regular`]: rectangle generator for regular `nx × ny` layouts.

pub mod check;
pub mod regular;

pub use check::{edge_counts, is_griddy};
pub use regular::regular_rects;
