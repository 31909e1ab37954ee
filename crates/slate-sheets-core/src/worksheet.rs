//! Worksheet type

use std::collections::BTreeMap;

use crate::cell::{Cell, CellTable};
use crate::column::{ColumnRange, ColumnStore};
use crate::comment::{Comment, CommentTable};
use crate::dimension::DimensionTracker;
use crate::error::Result;
use crate::row::RowProperties;
use crate::style::StyleRef;

/// A single worksheet being assembled for writing
///
/// The worksheet is a single-owner batch builder: all cell writes and
/// row/column configuration happen first, then the finished sheet is handed
/// read-only to the serializer. Every mutating entry point validates its
/// coordinates against the worksheet limits before touching any state, and
/// widens the tracked dimension as a side effect on success.
#[derive(Debug, Default)]
pub struct Worksheet {
    /// Cell storage
    cells: CellTable,
    /// Comment placement
    comments: CommentTable,
    /// Bounding rectangle of all referenced rows/columns
    dimension: DimensionTracker,
    /// Column configuration
    columns: ColumnStore,
    /// Per-row properties
    rows: BTreeMap<u32, RowProperties>,
    /// Highest row outline level seen
    max_row_outline_level: u8,
}

impl Worksheet {
    /// Create a new empty worksheet
    pub fn new() -> Self {
        Self::default()
    }

    // === Cell writes ===

    /// Write a number to a cell
    pub fn write_number(
        &mut self,
        row: u32,
        col: u16,
        value: f64,
        style: Option<StyleRef>,
    ) -> Result<()> {
        self.dimension.check_and_update(row, col, false, false)?;
        self.cells.insert(row, col, Cell::Number { value, style });
        Ok(())
    }

    /// Write a shared string to a cell
    ///
    /// The string must already be interned in the workbook's shared-string
    /// table; `index` is its position there.
    pub fn write_string(
        &mut self,
        row: u32,
        col: u16,
        index: u32,
        style: Option<StyleRef>,
    ) -> Result<()> {
        self.dimension.check_and_update(row, col, false, false)?;
        self.cells.insert(row, col, Cell::String { index, style });
        Ok(())
    }

    /// Write a rich-text string to a cell
    ///
    /// Like [`write_string`](Self::write_string), the rich-text run is
    /// interned by the workbook and referenced here by index.
    pub fn write_rich_string(
        &mut self,
        row: u32,
        col: u16,
        index: u32,
        style: Option<StyleRef>,
    ) -> Result<()> {
        self.dimension.check_and_update(row, col, false, false)?;
        self.cells.insert(row, col, Cell::RichString { index, style });
        Ok(())
    }

    /// Write a formula with its cached result to a cell
    ///
    /// A leading `=` is stripped. Callers that have not calculated the
    /// formula pass 0.0 as the result, as Excel does.
    pub fn write_formula(
        &mut self,
        row: u32,
        col: u16,
        formula: &str,
        style: Option<StyleRef>,
        result: f64,
    ) -> Result<()> {
        self.dimension.check_and_update(row, col, false, false)?;
        let formula = formula.strip_prefix('=').unwrap_or(formula).to_string();
        self.cells.insert(
            row,
            col,
            Cell::Formula {
                formula,
                result,
                style,
            },
        );
        Ok(())
    }

    /// Write a boolean to a cell
    pub fn write_boolean(
        &mut self,
        row: u32,
        col: u16,
        value: bool,
        style: Option<StyleRef>,
    ) -> Result<()> {
        self.dimension.check_and_update(row, col, false, false)?;
        self.cells.insert(row, col, Cell::Boolean { value, style });
        Ok(())
    }

    /// Write a styled blank cell
    ///
    /// A blank without a style carries no information and is ignored
    /// without touching the dimension.
    pub fn write_blank(&mut self, row: u32, col: u16, style: Option<StyleRef>) -> Result<()> {
        let Some(style) = style else {
            return Ok(());
        };
        self.dimension.check_and_update(row, col, false, false)?;
        self.cells.insert(row, col, Cell::Blank { style });
        Ok(())
    }

    /// Attach a comment to a cell
    ///
    /// Comment placement counts as referencing the cell, so the dimension
    /// widens; the comment body itself is serialized elsewhere.
    pub fn write_comment<S: Into<String>>(&mut self, row: u32, col: u16, text: S) -> Result<()> {
        self.dimension.check_and_update(row, col, false, false)?;
        self.comments.insert(row, col, Comment { text: text.into() });
        Ok(())
    }

    // === Row/column configuration ===

    /// Set the width and other properties of a range of columns
    ///
    /// Endpoints are normalized so `first_col <= last_col`. The column
    /// dimension is only recorded when a style is present, or when the
    /// range is hidden with a nonzero width; width-only ranges are
    /// informational and must not drag otherwise-untouched columns into the
    /// worksheet dimension. `outline_level` is clamped to 0..=7.
    pub fn set_column(
        &mut self,
        first_col: u16,
        last_col: u16,
        width: Option<f64>,
        style: Option<StyleRef>,
        hidden: bool,
        outline_level: i8,
    ) -> Result<()> {
        let (first_col, last_col) = if first_col > last_col {
            (last_col, first_col)
        } else {
            (first_col, last_col)
        };

        let ignore_col = !(style.is_some() || (width.map_or(false, |w| w != 0.0) && hidden));

        // Validate the larger endpoint first: first_col <= last_col, so a
        // passing last_col guarantees the whole range is in bounds and no
        // partial dimension update can occur.
        self.dimension.check_and_update(0, last_col, true, ignore_col)?;
        self.dimension.check_and_update(0, first_col, true, ignore_col)?;

        let outline_level = outline_level.clamp(0, 7) as u8;

        self.columns.apply(ColumnRange {
            first_col,
            last_col,
            width,
            style,
            hidden,
            outline_level,
        });

        Ok(())
    }

    /// Set the height and other properties of a single row
    ///
    /// The row dimension is recorded even if the row never receives cells.
    /// `outline_level` is clamped to 0..=7.
    pub fn set_row(
        &mut self,
        row: u32,
        height: Option<f64>,
        style: Option<StyleRef>,
        hidden: bool,
        outline_level: i8,
        collapsed: bool,
    ) -> Result<()> {
        self.dimension.check_and_update(row, 0, false, true)?;

        let outline_level = outline_level.clamp(0, 7) as u8;
        if outline_level > self.max_row_outline_level {
            self.max_row_outline_level = outline_level;
        }

        self.rows.insert(
            row,
            RowProperties {
                height,
                style,
                hidden,
                outline_level,
                collapsed,
            },
        );

        Ok(())
    }

    // === Read access for serialization ===

    /// The cell table
    pub fn cells(&self) -> &CellTable {
        &self.cells
    }

    /// The comment placement table
    pub fn comments(&self) -> &CommentTable {
        &self.comments
    }

    /// The tracked dimension
    pub fn dimension(&self) -> &DimensionTracker {
        &self.dimension
    }

    /// The column configuration
    pub fn columns(&self) -> &ColumnStore {
        &self.columns
    }

    /// Properties for a row, if explicitly configured
    pub fn row_properties(&self, row: u32) -> Option<&RowProperties> {
        self.rows.get(&row)
    }

    /// Highest row outline level seen across all `set_row` calls
    pub fn max_row_outline_level(&self) -> u8 {
        self.max_row_outline_level
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::Error;
    use crate::{MAX_COLS, MAX_ROWS};

    #[test]
    fn test_write_number_tracks_dimension() {
        let mut sheet = Worksheet::new();
        sheet.write_number(5, 5, 1.5, None).unwrap();

        assert_eq!(sheet.dimension().row_bounds(), Some((5, 5)));
        assert_eq!(sheet.dimension().col_bounds(), Some((5, 5)));
        assert!(matches!(
            sheet.cells().get(5, 5),
            Some(Cell::Number { value, .. }) if *value == 1.5
        ));
    }

    #[test]
    fn test_write_number_out_of_bounds() {
        let mut sheet = Worksheet::new();

        assert_eq!(
            sheet.write_number(MAX_ROWS, 0, 1.0, None),
            Err(Error::RowOutOfBounds(MAX_ROWS, MAX_ROWS - 1))
        );
        assert_eq!(
            sheet.write_number(0, MAX_COLS, 1.0, None),
            Err(Error::ColumnOutOfBounds(MAX_COLS, MAX_COLS - 1))
        );

        assert!(sheet.dimension().row_bounds().is_none());
        assert!(sheet.cells().is_empty());
    }

    #[test]
    fn test_overwrite_keeps_second_value() {
        let mut sheet = Worksheet::new();
        sheet.write_number(0, 0, 1.0, None).unwrap();
        sheet.write_boolean(0, 0, true, None).unwrap();

        assert_eq!(sheet.cells().cell_count(), 1);
        assert!(matches!(
            sheet.cells().get(0, 0),
            Some(Cell::Boolean { value: true, .. })
        ));
    }

    #[test]
    fn test_write_formula_strips_equals() {
        let mut sheet = Worksheet::new();
        sheet.write_formula(0, 0, "=SUM(A2:A9)", None, 12.0).unwrap();

        assert!(matches!(
            sheet.cells().get(0, 0),
            Some(Cell::Formula { formula, result, .. })
                if formula == "SUM(A2:A9)" && *result == 12.0
        ));
    }

    #[test]
    fn test_write_blank_without_style_is_noop() {
        let mut sheet = Worksheet::new();
        sheet.write_blank(3, 3, None).unwrap();

        assert!(sheet.cells().is_empty());
        assert!(sheet.dimension().row_bounds().is_none());

        sheet.write_blank(3, 3, Some(StyleRef::new(1))).unwrap();
        assert_eq!(sheet.cells().cell_count(), 1);
        assert_eq!(sheet.dimension().row_bounds(), Some((3, 3)));
    }

    #[test]
    fn test_set_column_normalizes_reversed_range() {
        let mut sheet = Worksheet::new();
        sheet.set_column(2, 0, Some(10.0), None, false, 0).unwrap();

        let ranges = sheet.columns().ranges();
        assert_eq!(ranges.len(), 1);
        assert_eq!((ranges[0].first_col, ranges[0].last_col), (0, 2));
        for col in 0..=2 {
            assert_eq!(sheet.columns().width(col), Some(10.0));
        }
    }

    #[test]
    fn test_width_only_column_does_not_touch_dimension() {
        let mut sheet = Worksheet::new();
        sheet.set_column(1, 3, Some(10.0), None, false, 0).unwrap();
        assert!(sheet.dimension().col_bounds().is_none());

        sheet
            .set_column(5, 6, None, Some(StyleRef::new(2)), false, 0)
            .unwrap();
        assert_eq!(sheet.dimension().col_bounds(), Some((5, 6)));
        // Row dimension is never recorded by column configuration.
        assert!(sheet.dimension().row_bounds().is_none());
    }

    #[test]
    fn test_hidden_column_with_width_touches_dimension() {
        let mut sheet = Worksheet::new();
        sheet.set_column(7, 7, Some(10.0), None, true, 0).unwrap();
        assert_eq!(sheet.dimension().col_bounds(), Some((7, 7)));
        assert_eq!(sheet.columns().width(7), Some(0.0));
    }

    #[test]
    fn test_set_column_out_of_bounds_is_atomic() {
        let mut sheet = Worksheet::new();
        let err = sheet
            .set_column(0, MAX_COLS, None, Some(StyleRef::new(1)), false, 0)
            .unwrap_err();
        assert_eq!(err, Error::ColumnOutOfBounds(MAX_COLS, MAX_COLS - 1));

        assert!(sheet.dimension().col_bounds().is_none());
        assert!(sheet.columns().is_empty());
    }

    #[test]
    fn test_outline_level_clamped() {
        let mut sheet = Worksheet::new();
        sheet.set_column(0, 0, None, None, false, -1).unwrap();
        sheet.set_column(1, 1, None, None, false, 10).unwrap();

        let ranges = sheet.columns().ranges();
        assert_eq!(ranges[0].outline_level, 0);
        assert_eq!(ranges[1].outline_level, 7);
        assert_eq!(sheet.columns().max_outline_level(), 7);

        sheet.set_row(0, None, None, false, 10, false).unwrap();
        assert_eq!(sheet.row_properties(0).unwrap().outline_level, 7);
        assert_eq!(sheet.max_row_outline_level(), 7);
    }

    #[test]
    fn test_set_row_records_row_dimension_only() {
        let mut sheet = Worksheet::new();
        sheet.set_row(8, Some(30.0), None, false, 0, false).unwrap();

        assert_eq!(sheet.dimension().row_bounds(), Some((8, 8)));
        assert!(sheet.dimension().col_bounds().is_none());
        assert_eq!(
            sheet.row_properties(8),
            Some(&RowProperties {
                height: Some(30.0),
                ..RowProperties::default()
            })
        );
    }

    #[test]
    fn test_write_comment_widens_dimension() {
        let mut sheet = Worksheet::new();
        sheet.write_comment(2, 4, "reviewed").unwrap();

        assert_eq!(sheet.dimension().row_bounds(), Some((2, 2)));
        assert_eq!(sheet.dimension().col_bounds(), Some((4, 4)));
        assert!(sheet.comments().row(2).is_some());
    }
}
