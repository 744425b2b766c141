//! Implementation of the rooted two-state dynamic program for maximum
//! weight independent set, together with the backtracking pass that
//! recovers the selected vertices.

use crate::mwis_instance::{MwisInstance, MwisSolution};

/// The tables of one solver run. Allocated fresh per call, never shared.
struct DpTables {
    /// Best subtree weight with the vertex excluded from the set.
    excluded: Vec<i64>,
    /// Best subtree weight with the vertex included in the set.
    included: Vec<i64>,
    /// Whether including the vertex was the strictly better subtree
    /// decision. A tie keeps the initial `false` and favors exclusion.
    choice: Vec<bool>,
    visited: Vec<bool>,
    /// The spanning-tree children recorded while the traversal descends.
    children: Vec<Vec<usize>>,
}

impl DpTables {

    fn new(n: usize) -> Self {
        DpTables {
            excluded: vec![0; n],
            included: vec![0; n],
            choice: vec![false; n],
            visited: vec![false; n],
            children: vec![Vec::new(); n],
        }
    }

}

impl MwisInstance {

    /// Computes a maximum weight independent set of the component of vertex
    /// 0 by a depth-first two-state dynamic program rooted there:
    /// `excluded(v)` sums `max(excluded(u), included(u))` over the children
    /// `u` of `v`, `included(v)` adds `weight(v)` to the sum of
    /// `excluded(u)`, and the optimum is the better of the two values at
    /// the root. Backtracking over the recorded spanning tree then emits
    /// the selected vertices.
    ///
    /// The traversal linearizes the adjacency structure through a visited
    /// marker: an edge leading to an already visited vertex is skipped and
    /// never checked against the independence constraint. The result is
    /// therefore only guaranteed optimal when the materialized graph is
    /// acyclic. Vertices unreachable from vertex 0 are never selected.
    pub fn solve(&self) -> MwisSolution {
        let n = self.graph.num_reserved();
        if n == 0 {
            return MwisSolution { weight: 0, vertices: Vec::new() }
        }
        let mut tables = DpTables::new(n);
        self.dp_solve(0, &mut tables);
        let weight = tables.excluded[0].max(tables.included[0]);
        let mut vertices = Vec::new();
        self.collect(0, true, &tables, &mut vertices);
        MwisSolution { weight, vertices }
    }

    fn dp_solve(&self, v: usize, tables: &mut DpTables) {
        tables.visited[v] = true;
        tables.excluded[v] = 0;
        tables.included[v] = self.weights[v];
        for &u in self.graph.neighbors(v) {
            if !tables.visited[u] {
                tables.children[v].push(u);
                self.dp_solve(u, tables);
                tables.excluded[v] += tables.excluded[u].max(tables.included[u]);
                tables.included[v] += tables.excluded[u];
            }
        }
        tables.choice[v] = tables.included[v] > tables.excluded[v];
    }

    /// Emits a selectable vertex whose inclusion won its subtree. The
    /// children of an emitted vertex were forced excluded by `included(v)`
    /// and descend non-selectable; everyone else's children are free again.
    fn collect(&self, v: usize, selectable: bool, tables: &DpTables, out: &mut Vec<usize>) {
        if selectable && tables.choice[v] {
            out.push(v);
            for &u in &tables.children[v] {
                self.collect(u, false, tables, out);
            }
        } else {
            for &u in &tables.children[v] {
                self.collect(u, true, tables, out);
            }
        }
    }

}
