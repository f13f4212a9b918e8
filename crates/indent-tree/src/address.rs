//! Line addresses used as cursors into an indented tree

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 1-based document-order position of a line
///
/// Address 0 is the virtual root: the implicit parent of every top-level
/// line. An address is only a cursor. It shifts whenever lines above it are
/// inserted or removed, so it must be re-resolved after every mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Address(pub usize);

impl Address {
    /// The virtual root always has address 0
    pub const ROOT: Address = Address(0);

    /// Create a new Address from a usize
    pub const fn new(address: usize) -> Self {
        Address(address)
    }

    /// Get the inner usize value
    pub const fn get(self) -> usize {
        self.0
    }

    /// Returns true for the virtual root
    pub const fn is_root(self) -> bool {
        self.0 == 0
    }

    /// The address of the line below this one
    pub const fn next(self) -> Self {
        Address(self.0 + 1)
    }

    /// The address of the line above this one, saturating at the root
    pub const fn prev(self) -> Self {
        Address(self.0.saturating_sub(1))
    }

    /// Zero-based line index in the underlying buffer, `None` for the root
    pub(crate) const fn line_index(self) -> Option<usize> {
        self.0.checked_sub(1)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for Address {
    fn from(address: usize) -> Self {
        Address(address)
    }
}

impl From<Address> for usize {
    fn from(address: Address) -> Self {
        address.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address() {
        assert_eq!(Address::ROOT, Address(0));
        assert_eq!(Address::new(5).get(), 5);
        assert_eq!(Address::from(10), Address(10));
        assert_eq!(usize::from(Address(7)), 7);
        assert_eq!(Address(3).to_string(), "3");
    }

    #[test]
    fn test_address_shift() {
        assert_eq!(Address(3).next(), Address(4));
        assert_eq!(Address(3).prev(), Address(2));
        assert_eq!(Address::ROOT.prev(), Address::ROOT);
        assert!(Address::ROOT.is_root());
        assert!(!Address(1).is_root());
    }

    #[test]
    fn test_line_index() {
        assert_eq!(Address::ROOT.line_index(), None);
        assert_eq!(Address(1).line_index(), Some(0));
        assert_eq!(Address(9).line_index(), Some(8));
    }
}
