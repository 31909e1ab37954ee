//! Column metadata

use std::collections::BTreeMap;

use crate::style::StyleRef;

/// Properties applied to a contiguous range of columns
///
/// One record per configuration call. Overlapping ranges are all retained
/// and emitted in call order; the flattened side maps in [`ColumnStore`]
/// give last-write-wins per-column lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnRange {
    /// First column of the range (0-based, inclusive)
    pub first_col: u16,
    /// Last column of the range (0-based, inclusive)
    pub last_col: u16,
    /// Custom width in character units (None = default)
    pub width: Option<f64>,
    /// Column-level style handle
    pub style: Option<StyleRef>,
    /// Columns are hidden
    pub hidden: bool,
    /// Outline/grouping level (0-7)
    pub outline_level: u8,
}

/// Column configuration records plus flattened per-column lookup maps
///
/// The side maps are derived eagerly when a range is applied so cell
/// serialization gets O(log n) per-column width/style lookup without
/// rescanning the range list.
#[derive(Debug, Default)]
pub struct ColumnStore {
    ranges: Vec<ColumnRange>,
    widths: BTreeMap<u16, f64>,
    styles: BTreeMap<u16, StyleRef>,
    max_outline_level: u8,
}

impl ColumnStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a configured range and flatten it into the side maps
    ///
    /// Hidden columns store a width of 0 regardless of the requested width.
    pub fn apply(&mut self, range: ColumnRange) {
        if range.outline_level > self.max_outline_level {
            self.max_outline_level = range.outline_level;
        }

        let width = if range.hidden { Some(0.0) } else { range.width };

        for col in range.first_col..=range.last_col {
            if let Some(w) = width {
                self.widths.insert(col, w);
            }
            if let Some(style) = range.style {
                self.styles.insert(col, style);
            }
        }

        self.ranges.push(range);
    }

    /// All configured ranges, in call order
    pub fn ranges(&self) -> &[ColumnRange] {
        &self.ranges
    }

    /// Check whether any range was configured
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Flattened width for a column, if one was configured
    pub fn width(&self, col: u16) -> Option<f64> {
        self.widths.get(&col).copied()
    }

    /// Flattened style for a column, if one was configured
    pub fn style(&self, col: u16) -> Option<StyleRef> {
        self.styles.get(&col).copied()
    }

    /// Highest outline level seen across all ranges
    pub fn max_outline_level(&self) -> u8 {
        self.max_outline_level
    }
}
