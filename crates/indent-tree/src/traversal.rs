//! Pre-order depth-first traversal

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::address::Address;
use crate::navigation::ChildMode;
use crate::tree::IndentTree;

/// What a visitor learns about each node it is shown
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Visit {
    /// The node's own text, without indentation or descendants
    pub label: String,

    /// Position of the node in document order
    pub address: Address,

    /// 1-based position among the node's siblings
    pub sibling_index: usize,

    /// Whether the node has no direct children
    pub is_leaf: bool,

    /// 1 for the node a traversal starts from, +1 per level below it
    pub depth: usize,
}

/// Receives nodes during a depth-first traversal
///
/// Implemented for every `FnMut(&Visit)` closure.
pub trait Visitor {
    fn visit(&mut self, visit: &Visit);
}

impl<F> Visitor for F
where
    F: FnMut(&Visit),
{
    fn visit(&mut self, visit: &Visit) {
        self(visit)
    }
}

impl IndentTree {
    /// Visit every node in pre-order
    ///
    /// Top-level nodes are visited in order, each at depth 1 with its
    /// position among the top-level nodes as sibling index.
    pub fn visit_depth_first<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        for (index, address) in self.children(Address::ROOT, ChildMode::Direct).enumerate() {
            self.visit_from(address, index + 1, 1, visitor);
        }
    }

    /// Visit the subtree rooted at `address` in pre-order
    ///
    /// The node itself is reported with the given sibling index and depth.
    /// Nothing is visited for the root or an address past the end.
    pub fn visit_from<V: Visitor + ?Sized>(
        &self,
        address: Address,
        sibling_index: usize,
        depth: usize,
        visitor: &mut V,
    ) {
        if !self.contains(address) {
            return;
        }

        visitor.visit(&self.make_visit(address, sibling_index, depth));

        let children = self.children_of(address, ChildMode::Direct);
        for (index, child) in children.into_iter().enumerate() {
            self.visit_from(child, index + 1, depth + 1, visitor);
        }
    }

    /// Walk every node in pre-order without recursion
    ///
    /// Yields the same records, in the same order, as
    /// [`IndentTree::visit_depth_first`].
    pub fn walk(&self) -> TreeWalker<'_> {
        let top_level: Vec<_> = self.children(Address::ROOT, ChildMode::Direct).collect();
        let stack = top_level
            .into_iter()
            .enumerate()
            .rev()
            .map(|(index, address)| (address, index + 1, 1))
            .collect();
        TreeWalker { tree: self, stack }
    }

    /// Walk the subtree rooted at `address` in pre-order
    pub fn walk_from(&self, address: Address) -> TreeWalker<'_> {
        let stack = if self.contains(address) {
            vec![(address, 1, 1)]
        } else {
            Vec::new()
        };
        TreeWalker { tree: self, stack }
    }

    fn make_visit(&self, address: Address, sibling_index: usize, depth: usize) -> Visit {
        Visit {
            label: self.label(address),
            address,
            sibling_index,
            is_leaf: self.is_leaf(address),
            depth,
        }
    }
}

/// Iterator for walking an indented tree in pre-order
pub struct TreeWalker<'a> {
    tree: &'a IndentTree,
    /// Pending nodes as (address, sibling index, depth), next on top
    stack: Vec<(Address, usize, usize)>,
}

impl<'a> Iterator for TreeWalker<'a> {
    type Item = Visit;

    fn next(&mut self) -> Option<Self::Item> {
        let (address, sibling_index, depth) = self.stack.pop()?;

        // Add children in reverse order so they're popped in correct order
        let children = self.tree.children_of(address, ChildMode::Direct);
        for (index, child) in children.into_iter().enumerate().rev() {
            self.stack.push((child, index + 1, depth + 1));
        }

        Some(self.tree.make_visit(address, sibling_index, depth))
    }
}
