//! Parent, child and leaf discovery from indentation alone
//!
//! Nothing here keeps an index. A node's subtree is the contiguous run of
//! lines below it that are indented deeper than the node itself; the first
//! line indented at or above the node's own level ends the run.

use derive_more::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::address::Address;
use crate::tree::IndentTree;

/// Which lines of a subtree a child scan reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ChildMode {
    /// Only lines exactly one level below the node
    #[display(fmt = "Direct")]
    Direct,

    /// Every line of the node's subtree
    #[display(fmt = "Descendants")]
    Descendants,
}

/// Forward scan over the subtree of a node
///
/// Created by [`IndentTree::children`].
pub struct ChildScan<'a> {
    tree: &'a IndentTree,
    mode: ChildMode,
    child_indent: usize,
    cursor: usize,
}

impl<'a> Iterator for ChildScan<'a> {
    type Item = Address;

    fn next(&mut self) -> Option<Self::Item> {
        while self.cursor <= self.tree.line_count() {
            let address = Address(self.cursor);
            let indent = self.tree.indent_width(address);
            if indent < self.child_indent {
                // First line outside the subtree; stop for good
                self.cursor = usize::MAX;
                return None;
            }

            self.cursor += 1;
            if self.mode == ChildMode::Descendants || indent == self.child_indent {
                return Some(address);
            }
        }
        None
    }
}

impl IndentTree {
    /// Indentation width of the children of `address`
    ///
    /// Top-level lines are the children of the root, so the root's children
    /// sit at width 0.
    pub fn child_indent(&self, address: Address) -> usize {
        if address.is_root() {
            0
        } else {
            self.indent_width(address) + self.style().level_width()
        }
    }

    /// Get the parent of a node
    ///
    /// Walks upwards to the nearest line indented exactly one unit less.
    /// Top-level lines, the root itself and lines with no such ancestor all
    /// resolve to the root.
    pub fn parent_of(&self, address: Address) -> Address {
        if address.is_root() {
            return Address::ROOT;
        }

        let unit = self.style().level_width();
        let Some(target) = self.indent_width(address).checked_sub(unit) else {
            return Address::ROOT;
        };

        let start = (address.get() - 1).min(self.line_count());
        (1..=start)
            .rev()
            .map(Address)
            .find(|&candidate| self.indent_width(candidate) == target)
            .unwrap_or(Address::ROOT)
    }

    /// Iterate over the children or descendants of a node in document order
    pub fn children(&self, address: Address, mode: ChildMode) -> ChildScan<'_> {
        ChildScan {
            tree: self,
            mode,
            child_indent: self.child_indent(address),
            cursor: address.get().saturating_add(1),
        }
    }

    /// Collect the children or descendants of a node in document order
    pub fn children_of(&self, address: Address, mode: ChildMode) -> Vec<Address> {
        self.children(address, mode).collect()
    }

    /// Check if a node has no direct children
    pub fn is_leaf(&self, address: Address) -> bool {
        self.children(address, ChildMode::Direct).next().is_none()
    }

    /// Get the depth of a node from its indentation (top-level = 0)
    pub fn depth(&self, address: Address) -> usize {
        self.style().depth_of(self.indent_width(address))
    }

    /// Get all ancestors of a node, from parent upwards, excluding the root
    pub fn ancestors(&self, address: Address) -> Vec<Address> {
        let mut ancestors = Vec::new();
        let mut current = self.parent_of(address);
        while !current.is_root() {
            ancestors.push(current);
            current = self.parent_of(current);
        }
        ancestors
    }

    /// The last line of a node's subtree, or the node itself if it is a leaf
    ///
    /// For the root this is the last line of the document.
    pub fn subtree_end(&self, address: Address) -> Address {
        if address.is_root() {
            return Address(self.line_count());
        }
        self.children(address, ChildMode::Descendants)
            .last()
            .unwrap_or(address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> IndentTree {
        IndentTree::from_text("a\n  b\n  c\n    d\ne")
    }

    #[test]
    fn test_child_scan_stops_at_subtree_end() {
        let tree = sample();
        let mut scan = tree.children(Address(1), ChildMode::Descendants);
        assert_eq!(scan.next(), Some(Address(2)));
        assert_eq!(scan.next(), Some(Address(3)));
        assert_eq!(scan.next(), Some(Address(4)));
        assert_eq!(scan.next(), None);
        assert_eq!(scan.next(), None);
    }

    #[test]
    fn test_child_indent() {
        let tree = sample();
        assert_eq!(tree.child_indent(Address::ROOT), 0);
        assert_eq!(tree.child_indent(Address(1)), 2);
        assert_eq!(tree.child_indent(Address(3)), 4);
    }

    #[test]
    fn test_subtree_end() {
        let tree = sample();
        assert_eq!(tree.subtree_end(Address(1)), Address(4));
        assert_eq!(tree.subtree_end(Address(2)), Address(2));
        assert_eq!(tree.subtree_end(Address::ROOT), Address(5));
        assert_eq!(IndentTree::new().subtree_end(Address::ROOT), Address::ROOT);
    }

    #[test]
    fn test_depth_and_ancestors() {
        let tree = sample();
        assert_eq!(tree.depth(Address(1)), 0);
        assert_eq!(tree.depth(Address(4)), 2);
        assert_eq!(tree.ancestors(Address(4)), vec![Address(3), Address(1)]);
        assert!(tree.ancestors(Address(5)).is_empty());
    }

    #[test]
    fn test_mode_display() {
        assert_eq!(ChildMode::Direct.to_string(), "Direct");
        assert_eq!(ChildMode::Descendants.to_string(), "Descendants");
    }
}
