//! Reading nodes out of the tree and grafting new ones in

use derive_more::Display;
use log::{trace, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::address::Address;
use crate::navigation::ChildMode;
use crate::tree::{skip_chars, IndentTree};

/// How much of a node [`IndentTree::read_node`] returns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ReadMode {
    /// Just the node's label
    #[default]
    #[display(fmt = "SelfOnly")]
    SelfOnly,

    /// The node and its whole subtree, dedented to the node's level
    #[display(fmt = "WithDescendants")]
    WithDescendants,
}

impl IndentTree {
    /// The text of a node without its indentation
    ///
    /// Empty for the root and for addresses past the end.
    pub fn label(&self, address: Address) -> String {
        self.line(address).map(|line| line.label).unwrap_or_default()
    }

    /// Read a node, optionally together with its subtree
    ///
    /// With [`ReadMode::WithDescendants`] every line of the subtree loses the
    /// node's own indentation width, so nested levels keep their relative
    /// indentation and the block can be appended anywhere else with
    /// [`IndentTree::append_child`]. Reading the root with descendants
    /// returns the whole tree.
    pub fn read_node(&self, address: Address, mode: ReadMode) -> String {
        if address.is_root() {
            return match mode {
                ReadMode::SelfOnly => String::new(),
                ReadMode::WithDescendants => self.to_text(),
            };
        }

        match mode {
            ReadMode::SelfOnly => self.label(address),
            ReadMode::WithDescendants => {
                if !self.contains(address) {
                    return String::new();
                }

                let strip = self.indent_width(address);
                std::iter::once(address)
                    .chain(self.children(address, ChildMode::Descendants))
                    .filter_map(|line| self.line_text(line))
                    .map(|text| skip_chars(&text, strip).to_string())
                    .collect::<Vec<_>>()
                    .join("\n")
            }
        }
    }

    /// Append `node` as the last child of `address`
    ///
    /// `node` may span several lines with their own relative indentation,
    /// such as the output of [`IndentTree::read_node`] with descendants. The
    /// child level's indentation is added to every line, which re-bases the
    /// whole block under the new parent. The new lines go after the parent's
    /// entire subtree; appending to the root puts them at the end of the
    /// document.
    pub fn append_child(&self, address: Address, node: &str) -> IndentTree {
        if !address.is_root() && !self.contains(address) {
            warn!(
                "Appending under line {} of a {}-line tree",
                address,
                self.line_count()
            );
        }

        let indent = self.child_indent(address);
        let after = self.subtree_end(address);
        trace!(
            "Appending child of {} after line {} at indent {}",
            address,
            after,
            indent
        );

        self.insert_after(after, node, indent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_label() {
        let tree = IndentTree::from_text("a\n  b c\n");
        assert_eq!(tree.label(Address(2)), "b c");
        assert_eq!(tree.label(Address::ROOT), "");
        assert_eq!(tree.label(Address(3)), "");
    }

    #[test]
    fn test_read_root() {
        let tree = IndentTree::from_text("a\n  b");
        assert_eq!(tree.read_node(Address::ROOT, ReadMode::SelfOnly), "");
        assert_eq!(
            tree.read_node(Address::ROOT, ReadMode::WithDescendants),
            "a\n  b"
        );
    }

    #[test]
    fn test_read_mode_default() {
        assert_eq!(ReadMode::default(), ReadMode::SelfOnly);
        assert_eq!(ReadMode::WithDescendants.to_string(), "WithDescendants");
    }

    #[test]
    fn test_append_under_missing_line_goes_to_end() {
        let tree = IndentTree::from_text("a");
        assert_eq!(tree.append_child(Address(7), "x").to_text(), "a\n  x");
    }
}
