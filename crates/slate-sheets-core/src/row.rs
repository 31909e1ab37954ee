//! Row metadata

use crate::style::StyleRef;

/// Properties set on a single row, independent of cell data
///
/// A row may have properties with no cells, or cells with no properties.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowProperties {
    /// Custom height in points (None = default)
    pub height: Option<f64>,
    /// Row-level style handle
    pub style: Option<StyleRef>,
    /// Row is hidden
    pub hidden: bool,
    /// Outline/grouping level (0-7)
    pub outline_level: u8,
    /// Row is collapsed (in outline)
    pub collapsed: bool,
}
