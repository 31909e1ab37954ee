//! Cell comment placement
//!
//! Comment bodies are serialized into a separate comments part by the
//! enclosing workbook; the worksheet only needs to know which cells carry a
//! comment, because comment placement feeds span calculation and row
//! emission.

use std::collections::BTreeMap;

/// A cell comment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    /// Comment text
    pub text: String,
}

/// Sparse row-major table of comment placements
#[derive(Debug, Default)]
pub struct CommentTable {
    rows: BTreeMap<u32, BTreeMap<u16, Comment>>,
}

impl CommentTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a comment, overwriting any previous comment at the coordinate
    pub fn insert(&mut self, row: u32, col: u16, comment: Comment) {
        self.rows.entry(row).or_default().insert(col, comment);
    }

    /// Get the column map for a row, if the row has any comments
    pub fn row(&self, row: u32) -> Option<&BTreeMap<u16, Comment>> {
        self.rows.get(&row)
    }

    /// Check whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of stored comments
    pub fn count(&self) -> usize {
        self.rows.values().map(|r| r.len()).sum()
    }
}
