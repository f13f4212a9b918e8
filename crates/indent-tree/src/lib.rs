//! Indented-text trees
//!
//! A tree stored as nothing but lines of text, where each line is a node and
//! its leading indentation encodes its depth. Every query re-scans the
//! indentation, and every mutation splices lines into the text and returns a
//! new tree, so a tree is always its own serialization.
//!
//! # Core Concepts
//!
//! - **IndentTree**: The tree value, a rope of indented lines
//! - **Address**: 1-based line position used as a cursor; 0 is the virtual root
//! - **IndentStyle**: Indentation unit and character (two spaces by default)
//!
//! # Example
//!
//! ```
//! use indent_tree::prelude::*;
//!
//! let tree = IndentTree::from_text("a\n  b\n  c\n    d");
//! assert_eq!(tree.children_of(Address(1), ChildMode::Direct), vec![Address(2), Address(3)]);
//!
//! // Copy the subtree under `c` to the top level
//! let subtree = tree.read_node(Address(3), ReadMode::WithDescendants);
//! let tree = tree.append_child(Address::ROOT, &subtree);
//! assert_eq!(tree.to_text(), "a\n  b\n  c\n    d\nc\n  d");
//! ```

mod address;
mod navigation;
mod node;
mod style;
mod traversal;
mod tree;
mod validate;

pub use address::Address;
pub use navigation::{ChildMode, ChildScan};
pub use node::ReadMode;
pub use style::IndentStyle;
pub use traversal::{TreeWalker, Visit, Visitor};
pub use tree::{IndentTree, Line};
pub use validate::{IndentIssue, ValidationError};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        Address, ChildMode, IndentStyle, IndentTree, Line, ReadMode, Visit, Visitor,
    };
}
