//! Edge index: the sorted coordinate structures behind point-in-bin queries.
//!
//! Every committed bin contributes four edges. Horizontal edges are grouped by
//! their Y coordinate, vertical edges by their X coordinate:
//!
//! - [`collection`]: [`Edge`] (a bin-tagged span) and [`EdgeCollection`]
//!   (all edges sharing one major coordinate).
//! - [`index`]: [`EdgeList`] (collections sorted by coordinate plus a dense
//!   key cache for floor lookups) and [`EdgeIndex`] (the horizontal/vertical
//!   pair).
//!
//! The key cache is regenerated explicitly. Callers insert a batch, then call
//! [`EdgeIndex::regenerate_cache`] before issuing floor lookups.

pub mod collection;
pub mod index;

pub use collection::{Edge, EdgeCollection};
pub use index::{EdgeIndex, EdgeList};
