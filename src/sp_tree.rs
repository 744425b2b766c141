//! The series-parallel composition tree and its parser.
//!
//! A composed graph is described textually by the grammar
//! `node := '(' ('L' x y | 'P' a b node node | 'S' a b c node node) ')'`
//! where `L` is a single edge between `x` and `y`, `P` composes two
//! subgraphs sharing source `a` and sink `b`, and `S` composes two
//! subgraphs through the shared interior vertex `b` with overall source
//! `a` and sink `c`. Whitespace between tokens is skipped.

use std::io::{BufRead, Read};
use crate::cust_error::ImportError;

/// A series-parallel composition tree. Composition nodes own their
/// children exclusively.
#[derive(Debug, Eq, PartialEq, Clone)]
pub enum SpTree {
    Leaf { x: usize, y: usize },
    Parallel { a: usize, b: usize, left: Box<SpTree>, right: Box<SpTree> },
    Series { a: usize, b: usize, c: usize, left: Box<SpTree>, right: Box<SpTree> },
}

impl SpTree {

    /// Reads a nested-parenthesis description and creates a `SpTree`.
    /// Also returns the size of the vertex space, that is one more than the
    /// largest vertex id referenced anywhere in the description, leaf or
    /// composition header alike.
    pub fn read_sp<R: BufRead>(mut input: R) -> Result<(Self, usize), ImportError> {
        let mut text = String::new();
        input.read_to_string(&mut text)?;
        let mut scanner = Scanner::new(&text);
        let mut next_vertex = 0;
        let root = Self::parse_node(&mut scanner, &mut next_vertex)?;
        Ok((root, next_vertex))
    }

    fn parse_node(scanner: &mut Scanner<'_>, next_vertex: &mut usize) -> Result<Self, ImportError> {
        scanner.expect('(')?;
        let node = match scanner.next_char()? {
            'L' => {
                let x = scanner.read_id()?;
                let y = scanner.read_id()?;
                *next_vertex = (*next_vertex).max(x.max(y) + 1);
                SpTree::Leaf { x, y }
            },
            'P' => {
                let a = scanner.read_id()?;
                let b = scanner.read_id()?;
                let left = Box::new(Self::parse_node(scanner, next_vertex)?);
                let right = Box::new(Self::parse_node(scanner, next_vertex)?);
                // The children already folded their own ids into `next_vertex`.
                *next_vertex = (*next_vertex).max(a.max(b) + 1);
                SpTree::Parallel { a, b, left, right }
            },
            'S' => {
                let a = scanner.read_id()?;
                let b = scanner.read_id()?;
                let c = scanner.read_id()?;
                let left = Box::new(Self::parse_node(scanner, next_vertex)?);
                let right = Box::new(Self::parse_node(scanner, next_vertex)?);
                *next_vertex = (*next_vertex).max(a.max(b).max(c) + 1);
                SpTree::Series { a, b, c, left, right }
            },
            tag => return Err(ImportError::UnknownTag(tag)),
        };
        scanner.expect(')')?;
        Ok(node)
    }

    /// Returns the source terminal of the composed subgraph.
    pub fn source(&self) -> usize {
        match self {
            SpTree::Leaf { x, .. } => *x,
            SpTree::Parallel { a, .. } => *a,
            SpTree::Series { a, .. } => *a,
        }
    }

    /// Returns the sink terminal of the composed subgraph.
    pub fn sink(&self) -> usize {
        match self {
            SpTree::Leaf { y, .. } => *y,
            SpTree::Parallel { b, .. } => *b,
            SpTree::Series { c, .. } => *c,
        }
    }

    /// Returns the largest vertex id incident to any edge of the composed
    /// graph. Vertex ids only referenced in composition headers are not
    /// considered.
    pub fn max_node(&self) -> usize {
        match self {
            SpTree::Leaf { x, y } => *x.max(y),
            SpTree::Parallel { left, right, .. } => left.max_node().max(right.max_node()),
            SpTree::Series { left, right, .. } => left.max_node().max(right.max_node()),
        }
    }

    /// Returns the number of leaves, which equals the number of edges of the
    /// composed graph.
    pub fn num_leaves(&self) -> usize {
        match self {
            SpTree::Leaf { .. } => 1,
            SpTree::Parallel { left, right, .. } => left.num_leaves() + right.num_leaves(),
            SpTree::Series { left, right, .. } => left.num_leaves() + right.num_leaves(),
        }
    }

}

/// A whitespace-skipping cursor over the textual description.
struct Scanner<'a> {
    rest: &'a str,
}

impl<'a> Scanner<'a> {

    fn new(text: &'a str) -> Self {
        Scanner { rest: text }
    }

    fn skip_whitespace(&mut self) {
        self.rest = self.rest.trim_start();
    }

    /// Returns the next non-whitespace character and advances past it.
    fn next_char(&mut self) -> Result<char, ImportError> {
        self.skip_whitespace();
        let mut chars = self.rest.chars();
        let next = chars.next().ok_or(ImportError::InputMalformedError)?;
        self.rest = chars.as_str();
        Ok(next)
    }

    fn expect(&mut self, expected: char) -> Result<(), ImportError> {
        if self.next_char()? == expected {
            Ok(())
        } else {
            Err(ImportError::InputMalformedError)
        }
    }

    /// Reads the next run of digits as a vertex id.
    fn read_id(&mut self) -> Result<usize, ImportError> {
        self.skip_whitespace();
        let end = self.rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(self.rest.len());
        let id = self.rest[..end].parse::<usize>()?;
        self.rest = &self.rest[end..];
        Ok(id)
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use crate::cust_error::ImportError;

    #[test]
    fn read_leaf_test() {
        let sp = Cursor::new("(L 0 1)");
        let parsed = SpTree::read_sp(sp);
        assert!(parsed.is_ok());
        let (root, next_vertex) = parsed.unwrap();
        assert_eq!(root, SpTree::Leaf { x: 0, y: 1 });
        assert_eq!(next_vertex, 2);
        assert_eq!(root.source(), 0);
        assert_eq!(root.sink(), 1);
    }

    #[test]
    fn read_series_test() {
        let sp = Cursor::new("(S 0 1 2 (L 0 1) (L 1 2))");
        let parsed = SpTree::read_sp(sp);
        assert!(parsed.is_ok());
        let (root, next_vertex) = parsed.unwrap();
        assert_eq!(next_vertex, 3);
        assert_eq!(root.source(), 0);
        assert_eq!(root.sink(), 2);
        assert_eq!(root.num_leaves(), 2);
        match root {
            SpTree::Series { a, b, c, left, right } => {
                assert_eq!((a, b, c), (0, 1, 2));
                assert_eq!(*left, SpTree::Leaf { x: 0, y: 1 });
                assert_eq!(*right, SpTree::Leaf { x: 1, y: 2 });
            },
            _ => panic!("expected a series node"),
        }
    }

    #[test]
    fn read_nested_test() {
        let sp = Cursor::new("(P 0 2\n  (S 0 1 2 (L 0 1) (L 1 2))\n  (L 0 2))");
        let parsed = SpTree::read_sp(sp);
        assert!(parsed.is_ok());
        let (root, next_vertex) = parsed.unwrap();
        assert_eq!(next_vertex, 3);
        assert_eq!(root.num_leaves(), 3);
        assert_eq!(root.max_node(), 2);
    }

    #[test]
    fn header_only_id_test() {
        // Vertex 5 appears in a header but on no edge.
        let sp = Cursor::new("(P 0 5 (L 0 1) (L 0 1))");
        let parsed = SpTree::read_sp(sp);
        assert!(parsed.is_ok());
        let (root, next_vertex) = parsed.unwrap();
        assert_eq!(next_vertex, 6);
        assert_eq!(root.max_node(), 1);
    }

    #[test]
    fn unknown_tag_test() {
        let sp = Cursor::new("(X 0 1)");
        match SpTree::read_sp(sp) {
            Err(ImportError::UnknownTag('X')) => (),
            other => panic!("expected UnknownTag, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn malformed_int_test() {
        let sp = Cursor::new("(L 0 -1)");
        assert!(matches!(SpTree::read_sp(sp), Err(ImportError::BadIntError(_))));
    }

    #[test]
    fn unbalanced_test() {
        let sp = Cursor::new("(S 0 1 2 (L 0 1) (L 1 2)");
        assert!(matches!(SpTree::read_sp(sp), Err(ImportError::InputMalformedError)));
    }

    #[test]
    fn missing_child_test() {
        let sp = Cursor::new("(P 0 1 (L 0 1))");
        assert!(SpTree::read_sp(sp).is_err());
    }

}
