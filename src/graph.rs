//! Implementation of a simple, undirected graph data structure that is
//! materialized from a series-parallel composition tree.

use fxhash::FxHashSet;
use crate::sp_tree::SpTree;

/// A static undirected graph over the vertex ids `0..num_reserved`. Parallel
/// composition can introduce parallel edges, so the adjacency lists are kept
/// as multisets.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct UGraph {
    adj_list: Vec<Vec<usize>>,
}

impl UGraph {

    /// Creates a graph with `num_reserved` vertices and no edges.
    pub fn new(num_reserved: usize) -> Self {
        UGraph {
            adj_list: vec![Vec::new(); num_reserved],
        }
    }

    /// Materializes the graph denoted by `root` over a vertex space of size
    /// `num_reserved`. Each leaf of the tree contributes exactly one
    /// undirected edge; composition nodes contribute none. The tree is
    /// walked left to right, so repeated materialization of the same tree
    /// yields identical adjacency lists.
    pub fn from_sp_tree(root: &SpTree, num_reserved: usize) -> Self {
        let mut graph = UGraph::new(num_reserved);
        graph.insert_edges(root);
        graph
    }

    fn insert_edges(&mut self, node: &SpTree) {
        match node {
            SpTree::Leaf { x, y } => self.insert_edge(*x, *y),
            SpTree::Parallel { left, right, .. } => {
                self.insert_edges(left);
                self.insert_edges(right);
            },
            SpTree::Series { left, right, .. } => {
                self.insert_edges(left);
                self.insert_edges(right);
            },
        }
    }

    /// Inserts the undirected edge between `src` and `trg`.
    pub fn insert_edge(&mut self, src: usize, trg: usize) {
        self.adj_list[src].push(trg);
        self.adj_list[trg].push(src);
    }

    /// Returns an `Iterator` over all vertex ids.
    pub fn nodes(&self) -> impl Iterator<Item=usize> + '_ {
        0..self.adj_list.len()
    }

    /// Returns the size of the vertex space.
    pub fn num_reserved(&self) -> usize {
        self.adj_list.len()
    }

    /// Returns the number of edges, parallel edges counted individually.
    pub fn num_edges(&self) -> usize {
        self.adj_list.iter().map(|neighbors| neighbors.len()).sum::<usize>() / 2
    }

    /// Returns the neighborhood of `node` in traversal order.
    pub fn neighbors(&self, node: usize) -> &[usize] {
        &self.adj_list[node]
    }

    /// Returns the degree of `node`, parallel edges counted individually.
    pub fn degree(&self, node: usize) -> usize {
        self.adj_list[node].len()
    }

    /// Checks if `edge` exists.
    pub fn edge_exists(&self, edge: (usize, usize)) -> bool {
        self.adj_list[edge.0].contains(&edge.1)
    }

    /// Checks if no two vertices in `set` are adjacent.
    pub fn is_independent_set(&self, set: &FxHashSet<usize>) -> bool {
        set.iter().all(|node| {
            self.adj_list[*node].iter().all(|neighbor| !set.contains(neighbor))
        })
    }

}
