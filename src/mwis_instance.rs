//! A maximum weight independent set instance: a materialized graph together
//! with one integer weight per vertex.

use crate::graph::UGraph;
use crate::cust_error::{ImportError, ProcessingError};
use fxhash::FxHashSet;
use std::io::{BufRead, Read, Write};
use std::io;

#[derive(Debug, Eq, PartialEq, Clone)]
pub struct MwisInstance {
    pub graph: UGraph,
    pub weights: Vec<i64>,
}

/// The optimum weight and the vertices achieving it, in backtracking order.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct MwisSolution {
    pub weight: i64,
    pub vertices: Vec<usize>,
}

impl MwisInstance {

    /// Creates an instance over `graph` and `weights`. The weight vector has
    /// to hold exactly one entry per reserved vertex; missing weights are
    /// never defaulted.
    pub fn new(graph: UGraph, weights: Vec<i64>) -> Result<Self, ProcessingError> {
        if weights.len() != graph.num_reserved() {
            return Err(ProcessingError::InvalidParameter(
                format!("Expected {} weights, got {}.", graph.num_reserved(), weights.len())
            ))
        }
        Ok(MwisInstance {
            graph,
            weights,
        })
    }

    /// Reads `n` whitespace-separated integer weights, one per vertex id in
    /// increasing order. Fewer than `n` entries is an input error.
    pub fn read_weights<R: BufRead>(mut input: R, n: usize) -> Result<Vec<i64>, ImportError> {
        let mut text = String::new();
        input.read_to_string(&mut text)?;
        let mut weights = Vec::with_capacity(n);
        for token in text.split_whitespace().take(n) {
            weights.push(token.parse::<i64>()?);
        }
        if weights.len() < n {
            return Err(ImportError::InputMalformedError)
        }
        Ok(weights)
    }

    /// Checks if a solution is valid: all vertices in range and distinct, no
    /// two of them adjacent, and their weights summing to the claimed
    /// optimum.
    pub fn validate_solution(&self, solution: &MwisSolution) -> bool {
        if solution.vertices.iter().any(|node| *node >= self.graph.num_reserved()) {
            return false
        }
        let set: FxHashSet<usize> = solution.vertices.iter().copied().collect();
        if set.len() != solution.vertices.len() {
            return false
        }
        if !self.graph.is_independent_set(&set) {
            return false
        }
        let total: i64 = solution.vertices.iter().map(|node| self.weights[*node]).sum();
        total == solution.weight
    }

    /// Writes a solution to a `Write` type: the optimum weight first, then
    /// one selected vertex per line.
    pub fn write_solution<W: Write>(solution: &MwisSolution, mut out: W) -> Result<(), io::Error> {
        writeln!(out, "{}", solution.weight)?;
        for node in &solution.vertices {
            writeln!(out, "{}", node)?;
        }
        Ok(())
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use crate::graph::UGraph;
    use crate::sp_tree::SpTree;

    #[test]
    fn read_weights_test() {
        let ws = Cursor::new("5 -3\n12");
        let weights = MwisInstance::read_weights(ws, 3);
        assert!(weights.is_ok());
        assert_eq!(weights.unwrap(), vec![5, -3, 12]);
    }

    #[test]
    fn read_weights_short_test() {
        let ws = Cursor::new("5 3");
        assert!(matches!(
            MwisInstance::read_weights(ws, 3),
            Err(ImportError::InputMalformedError)
        ));
    }

    #[test]
    fn weight_count_mismatch_test() {
        let sp = Cursor::new("(L 0 1)");
        let (root, next_vertex) = SpTree::read_sp(sp).unwrap();
        let graph = UGraph::from_sp_tree(&root, next_vertex);
        assert!(MwisInstance::new(graph, vec![5]).is_err());
    }

    #[test]
    fn validate_solution_test() {
        let sp = Cursor::new("(S 0 1 2 (L 0 1) (L 1 2))");
        let (root, next_vertex) = SpTree::read_sp(sp).unwrap();
        let graph = UGraph::from_sp_tree(&root, next_vertex);
        let ins = MwisInstance::new(graph, vec![1, 10, 1]).unwrap();
        assert!(ins.validate_solution(&MwisSolution { weight: 10, vertices: vec![1] }));
        assert!(ins.validate_solution(&MwisSolution { weight: 2, vertices: vec![0, 2] }));
        // Adjacent vertices.
        assert!(!ins.validate_solution(&MwisSolution { weight: 11, vertices: vec![0, 1] }));
        // Wrong total.
        assert!(!ins.validate_solution(&MwisSolution { weight: 11, vertices: vec![1] }));
        // Duplicate vertex.
        assert!(!ins.validate_solution(&MwisSolution { weight: 20, vertices: vec![1, 1] }));
        // Out of range.
        assert!(!ins.validate_solution(&MwisSolution { weight: 0, vertices: vec![3] }));
    }

    #[test]
    fn write_solution_test() {
        let mut out = Vec::new();
        let solution = MwisSolution { weight: 12, vertices: vec![0, 2, 4] };
        assert!(MwisInstance::write_solution(&solution, &mut out).is_ok());
        assert_eq!(String::from_utf8(out).unwrap(), "12\n0\n2\n4\n");
    }

}
