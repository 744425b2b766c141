//! Normalization of a series-parallel composition tree.
//!
//! Currently a structural identity pass and the hook for a future
//! conversion into a width-bounded nice tree decomposition. Any
//! normalization added here has to materialize to the same adjacency
//! list as its input, up to a relabeling of the vertices.

use crate::sp_tree::SpTree;

/// Rebuilds `root` bottom up. The shape of the tree and the denoted graph
/// are preserved.
pub fn to_nice_tree(root: SpTree) -> SpTree {
    match root {
        SpTree::Leaf { .. } => root,
        SpTree::Parallel { a, b, left, right } => SpTree::Parallel {
            a,
            b,
            left: Box::new(to_nice_tree(*left)),
            right: Box::new(to_nice_tree(*right)),
        },
        SpTree::Series { a, b, c, left, right } => SpTree::Series {
            a,
            b,
            c,
            left: Box::new(to_nice_tree(*left)),
            right: Box::new(to_nice_tree(*right)),
        },
    }
}
