//! Worksheet dimension tracking

use crate::error::{Error, Result};
use crate::{MAX_COLS, MAX_ROWS};

/// Tracks the minimal bounding rectangle of all referenced rows and columns
///
/// Bounds are undefined until the first accepted coordinate on the
/// corresponding axis, and only ever widen afterwards. The ignore flags let
/// callers validate a coordinate without recording it on one axis: column
/// configuration must not count as touching row data, and vice versa.
#[derive(Debug, Default)]
pub struct DimensionTracker {
    row_min: Option<u32>,
    row_max: Option<u32>,
    col_min: Option<u16>,
    col_max: Option<u16>,
}

impl DimensionTracker {
    /// Create a tracker with no bounds set
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a coordinate and widen the tracked bounds
    ///
    /// Fails without any state change if the row or column is outside the
    /// worksheet limits. On success the row bounds are widened unless
    /// `ignore_row` is set, and likewise for the column bounds.
    pub fn check_and_update(
        &mut self,
        row: u32,
        col: u16,
        ignore_row: bool,
        ignore_col: bool,
    ) -> Result<()> {
        if row >= MAX_ROWS {
            return Err(Error::RowOutOfBounds(row, MAX_ROWS - 1));
        }
        if col >= MAX_COLS {
            return Err(Error::ColumnOutOfBounds(col, MAX_COLS - 1));
        }

        if !ignore_row {
            if self.row_min.map_or(true, |min| row < min) {
                self.row_min = Some(row);
            }
            if self.row_max.map_or(true, |max| row > max) {
                self.row_max = Some(row);
            }
        }

        if !ignore_col {
            if self.col_min.map_or(true, |min| col < min) {
                self.col_min = Some(col);
            }
            if self.col_max.map_or(true, |max| col > max) {
                self.col_max = Some(col);
            }
        }

        Ok(())
    }

    /// The tracked row bounds as (min, max), if any row was recorded
    pub fn row_bounds(&self) -> Option<(u32, u32)> {
        Some((self.row_min?, self.row_max?))
    }

    /// The tracked column bounds as (min, max), if any column was recorded
    pub fn col_bounds(&self) -> Option<(u16, u16)> {
        Some((self.col_min?, self.col_max?))
    }
}
