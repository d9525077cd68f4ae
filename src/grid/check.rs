use crate::edges::{EdgeCollection, EdgeIndex, EdgeList};

/// Cheap test for a complete rectangular grid.
///
/// In a gap-free grid every interior row holds the top edges of the cells
/// below and the bottom edges of the cells above, so it carries exactly twice
/// as many edges as the first and last rows. The same holds for columns.
///
/// This is a necessary condition only. It runs in O(rows + columns) instead of
/// a pairwise overlap test, and some non-grid layouts with matching edge counts
/// pass it.
pub fn is_griddy(index: &EdgeIndex) -> bool {
    follows_grid_pattern(index.horizontal()) && follows_grid_pattern(index.vertical())
}

/// Edge count per row (horizontal index) and per column (vertical index).
pub fn edge_counts(index: &EdgeIndex) -> (Vec<usize>, Vec<usize>) {
    let counts = |list: &EdgeList| -> Vec<usize> {
        list.collections().iter().map(EdgeCollection::len).collect()
    };
    (counts(index.horizontal()), counts(index.vertical()))
}

fn follows_grid_pattern(list: &EdgeList) -> bool {
    let colls = list.collections();
    let (first, last) = match (colls.first(), colls.last()) {
        (Some(first), Some(last)) if colls.len() >= 2 => (first.len(), last.len()),
        _ => return false,
    };
    if first == 0 || first != last {
        return false;
    }
    colls[1..colls.len() - 1]
        .iter()
        .all(|coll| coll.len() == 2 * first)
}
