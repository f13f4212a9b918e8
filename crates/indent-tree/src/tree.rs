use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, trace};
use ropey::Rope;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::address::Address;
use crate::style::IndentStyle;

/// A tree whose only representation is indented text
///
/// Every line of the buffer is a node; its depth is its indentation width
/// divided by the style's unit. Structure is recovered by re-scanning
/// indentation on demand, so there is no separate node graph to keep in sync.
///
/// Mutating operations never change `self`. They return a new tree, which is
/// cheap because the underlying rope shares unchanged chunks between clones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndentTree {
    /// Buffer of lines, each terminated by `\n`
    rope: Rope,

    /// How depth is encoded in leading whitespace
    style: IndentStyle,
}

/// A single line of the tree as seen through its indentation
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Line {
    /// Position of the line in document order
    pub address: Address,

    /// Number of leading indentation characters
    pub indent: usize,

    /// Text following the indentation
    pub label: String,
}

impl IndentTree {
    /// Create an empty tree with the default style
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty tree with the given style
    pub fn with_style(style: IndentStyle) -> Self {
        Self {
            rope: Rope::new(),
            style,
        }
    }

    /// Build a tree from indented text using the default style
    pub fn from_text(text: &str) -> Self {
        Self::from_text_with_style(text, IndentStyle::default())
    }

    /// Build a tree from indented text
    ///
    /// Line endings are normalized to `\n` and a single trailing newline is
    /// ignored. Indentation is taken as-is; see [`IndentTree::validate`] for
    /// checking it.
    pub fn from_text_with_style(text: &str, style: IndentStyle) -> Self {
        let mut buffer = String::with_capacity(text.len() + 1);
        if !text.is_empty() {
            for line in split_lines(text) {
                buffer.push_str(line);
                buffer.push('\n');
            }
        }

        Self {
            rope: Rope::from_str(&buffer),
            style,
        }
    }

    /// Read a tree from a text file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::load_with_style(path, IndentStyle::default())
    }

    /// Read a tree from a text file using the given style
    pub fn load_with_style(path: impl AsRef<Path>, style: IndentStyle) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read tree from {}", path.display()))?;
        let tree = Self::from_text_with_style(&text, style);
        debug!("Loaded {} lines from {}", tree.line_count(), path.display());
        Ok(tree)
    }

    /// Write the tree to a text file, newline-terminated
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.rope.to_string())
            .with_context(|| format!("Failed to write tree to {}", path.display()))?;
        debug!("Saved {} lines to {}", self.line_count(), path.display());
        Ok(())
    }

    /// The indentation style of this tree
    pub fn style(&self) -> IndentStyle {
        self.style
    }

    /// The tree as text, lines joined by `\n` with no trailing newline
    ///
    /// Because [`IndentTree::from_text`] ignores one trailing newline, a tree
    /// whose last line is empty does not survive `to_text` followed by
    /// `from_text`: the empty last node is dropped. [`IndentTree::save`]
    /// writes every line newline-terminated and round-trips exactly.
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    /// Number of lines (nodes) in the tree
    pub fn line_count(&self) -> usize {
        // The buffer always ends with a line break, so the rope reports one
        // extra empty line after it.
        self.rope.len_lines() - 1
    }

    /// Check if the tree has no lines
    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// Check if the address denotes an existing line
    pub fn contains(&self, address: Address) -> bool {
        !address.is_root() && address.get() <= self.line_count()
    }

    /// Indentation width of the line at `address`
    ///
    /// The root and addresses past the end of the document report 0.
    pub fn indent_width(&self, address: Address) -> usize {
        match self.line_slice(address) {
            Some(line) => line
                .chars()
                .take_while(|&c| c == self.style.indent_char)
                .count(),
            None => 0,
        }
    }

    /// Raw text of the line at `address`, indentation included
    pub fn line_text(&self, address: Address) -> Option<String> {
        self.line_slice(address).map(|line| {
            let text = line.to_string();
            match text.strip_suffix('\n') {
                Some(stripped) => stripped.to_string(),
                None => text,
            }
        })
    }

    /// The line at `address` as an (address, indent, label) record
    pub fn line(&self, address: Address) -> Option<Line> {
        let text = self.line_text(address)?;
        let indent = self.style.measure(&text);
        Some(Line {
            address,
            indent,
            label: skip_chars(&text, indent).to_string(),
        })
    }

    /// Iterate over every line in document order
    pub fn lines(&self) -> impl Iterator<Item = Line> + '_ {
        (1..=self.line_count()).filter_map(move |address| self.line(Address(address)))
    }

    /// Insert `text` after the line at `address`
    ///
    /// Each line of `text` is prefixed with `indent` indentation characters,
    /// on top of whatever indentation it already carries. Inserting after the
    /// root puts the text at the start of the document; addresses past the
    /// end append it. Every inserted line shifts the addresses below it by
    /// one.
    pub fn insert_after(&self, address: Address, text: &str, indent: usize) -> Self {
        let at_line = address.get().min(self.line_count());
        let prefix = self.style.prefix(indent);

        let mut block = String::with_capacity(text.len() + prefix.len() + 1);
        let mut inserted = 0;
        for line in split_lines(text) {
            block.push_str(&prefix);
            block.push_str(line);
            block.push('\n');
            inserted += 1;
        }

        let mut rope = self.rope.clone();
        rope.insert(rope.line_to_char(at_line), &block);
        trace!(
            "Inserted {} line(s) after line {} at indent {}",
            inserted,
            at_line,
            indent
        );

        Self {
            rope,
            style: self.style,
        }
    }

    /// Remove `count` lines starting at `address`
    ///
    /// Removal is unguarded: it does not care whether the range covers a
    /// whole subtree, which is why it is not part of the public surface.
    // Kept for a guarded delete; only the tests call it for now.
    #[cfg_attr(not(test), allow(dead_code))]
    pub(crate) fn remove_lines(&self, address: Address, count: usize) -> Self {
        let Some(start) = address.line_index() else {
            return self.clone();
        };
        let start = start.min(self.line_count());
        let end = (start + count).min(self.line_count());

        let mut rope = self.rope.clone();
        rope.remove(rope.line_to_char(start)..rope.line_to_char(end));
        trace!("Removed {} line(s) starting at line {}", end - start, start + 1);

        Self {
            rope,
            style: self.style,
        }
    }

    fn line_slice(&self, address: Address) -> Option<ropey::RopeSlice<'_>> {
        let index = address.line_index()?;
        if index >= self.line_count() {
            return None;
        }
        Some(self.rope.line(index))
    }
}

impl fmt::Display for IndentTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.rope.to_string();
        f.write_str(text.strip_suffix('\n').unwrap_or(&text))
    }
}

impl From<&str> for IndentTree {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}

/// Split node text into lines, ignoring one trailing newline and `\r` endings
///
/// Empty text yields a single empty line.
pub(crate) fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let body = text.strip_suffix('\n').unwrap_or(text);
    body.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

/// The suffix of `text` after its first `count` characters
pub(crate) fn skip_chars(text: &str, count: usize) -> &str {
    match text.char_indices().nth(count) {
        Some((offset, _)) => &text[offset..],
        None => "",
    }
}
