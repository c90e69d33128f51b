//! Tree traversal.
//!
//! Query generators walk a tree with a [`Visitor`] instead of matching on node variants
//! themselves. See [`Cqr::walk`](crate::Cqr::walk).

use std::collections::BTreeSet;

use crate::{boolean::BooleanQuery, keyword::Keyword};

/// Callbacks invoked by a depth-first, pre-order walk.
///
/// `depth` is 0 for the root. All methods default to doing nothing.
pub trait Visitor {
    /// Called for every keyword leaf.
    fn visit_keyword(&mut self, _keyword: &Keyword, _depth: usize) {}

    /// Called for a Boolean query before any of its children.
    fn enter_boolean(&mut self, _query: &BooleanQuery, _depth: usize) {}

    /// Called for a Boolean query after all of its children.
    fn leave_boolean(&mut self, _query: &BooleanQuery, _depth: usize) {}
}

/// Summary statistics for a query tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Total number of nodes.
    pub nodes: usize,
    /// Number of keyword leaves.
    pub keywords: usize,
    /// Number of Boolean queries.
    pub booleans: usize,
    /// Number of levels; a lone keyword has depth 1.
    pub depth: usize,
    /// Distinct field names used by keywords.
    pub fields: BTreeSet<String>,
    /// Distinct operator labels.
    pub operators: BTreeSet<String>,
}

impl TreeStats {
    /// Records a node seen at `depth`.
    fn record_node(&mut self, depth: usize) {
        self.nodes += 1;
        self.depth = self.depth.max(depth + 1);
    }
}

impl Visitor for TreeStats {
    fn visit_keyword(&mut self, keyword: &Keyword, depth: usize) {
        self.record_node(depth);
        self.keywords += 1;
        self.fields.extend(keyword.fields().iter().cloned());
    }

    fn enter_boolean(&mut self, query: &BooleanQuery, depth: usize) {
        self.record_node(depth);
        self.booleans += 1;
        self.operators.insert(query.operator().to_string());
    }
}
