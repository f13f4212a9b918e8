//! Optional checking of the indentation invariant
//!
//! Queries never validate their input: malformed indentation just produces
//! structurally wrong answers. Callers that cannot trust their input run
//! [`IndentTree::validate`] first, or build trees with
//! [`IndentTree::from_text_strict`].

use std::fmt;

use anyhow::{Context, Result};
use derive_more::Display;
use log::debug;

use crate::address::Address;
use crate::style::IndentStyle;
use crate::tree::IndentTree;

/// A single violation of the indentation invariant
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum IndentIssue {
    /// The indentation width is not a whole number of levels
    #[display(fmt = "line {}: indent {} is not a multiple of {}", address, width, unit)]
    Misaligned {
        address: Address,
        width: usize,
        unit: usize,
    },

    /// The line is more than one level deeper than the line above it
    #[display(fmt = "line {}: indent {} skips a level (at most {})", address, width, max)]
    SkippedLevel {
        address: Address,
        width: usize,
        max: usize,
    },

    /// The indentation run is followed by whitespace of another kind
    #[display(fmt = "line {}: unexpected {:?} in indentation", address, found)]
    ForeignWhitespace { address: Address, found: char },
}

impl IndentIssue {
    /// The line the issue was found on
    pub fn address(&self) -> Address {
        match self {
            IndentIssue::Misaligned { address, .. }
            | IndentIssue::SkippedLevel { address, .. }
            | IndentIssue::ForeignWhitespace { address, .. } => *address,
        }
    }
}

/// Every indentation issue found in a tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub issues: Vec<IndentIssue>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} indentation issue(s)", self.issues.len())?;
        if let Some(first) = self.issues.first() {
            write!(f, ", first: {}", first)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

impl IndentTree {
    /// Build a tree from indented text, rejecting malformed indentation
    pub fn from_text_strict(text: &str, style: IndentStyle) -> Result<Self> {
        let tree = Self::from_text_with_style(text, style);
        tree.validate()
            .context("Rejected tree with malformed indentation")?;
        Ok(tree)
    }

    /// Check that every line sits at most one level below the line above it
    /// and is indented by a whole number of levels
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        let issues = self.issues();
        debug!(
            "Validated {} lines: {} issue(s)",
            self.line_count(),
            issues.len()
        );

        if issues.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { issues })
        }
    }

    /// List every indentation issue in document order
    pub fn issues(&self) -> Vec<IndentIssue> {
        let unit = self.style().level_width();
        let mut issues = Vec::new();
        let mut previous: Option<usize> = None;

        for line in self.lines() {
            let address = line.address;
            let width = line.indent;

            if let Some(found) = line.label.chars().next() {
                if found.is_whitespace() {
                    issues.push(IndentIssue::ForeignWhitespace { address, found });
                }
            }

            if width % unit != 0 {
                issues.push(IndentIssue::Misaligned {
                    address,
                    width,
                    unit,
                });
            }

            let max = previous.map_or(0, |previous| previous + unit);
            if width > max {
                issues.push(IndentIssue::SkippedLevel {
                    address,
                    width,
                    max,
                });
            }

            previous = Some(width);
        }

        issues
    }
}
