//! Row span calculation
//!
//! The `spans` attribute on `<row>` records, per block of 16 rows, the
//! minimal 1-based column range containing any cell or comment data. It is
//! not semantically required by the format; Excel writes it and emitting
//! the same values keeps output byte-comparable with reference files.

use std::collections::HashMap;

use slate_sheets_core::Worksheet;

/// Per-block span hints, recomputed from scratch on every serialization pass
#[derive(Debug, Default)]
pub struct RowSpans {
    /// Block index (row / 16) → "min:max", 1-based inclusive
    spans: HashMap<u32, String>,
}

impl RowSpans {
    /// Derive the spans for a worksheet
    pub fn calculate(sheet: &Worksheet) -> Self {
        let mut spans = HashMap::new();

        let Some((row_min, row_max)) = sheet.dimension().row_bounds() else {
            return Self { spans };
        };
        let col_bounds = sheet.dimension().col_bounds();

        let mut span_min: Option<u16> = None;
        let mut span_max: u16 = 0;

        for row in row_min..=row_max {
            if let Some((col_min, col_max)) = col_bounds {
                if let Some(cells) = sheet.cells().row(row) {
                    for (&col, _) in cells.range(col_min..=col_max) {
                        widen(&mut span_min, &mut span_max, col);
                    }
                }
                if let Some(comments) = sheet.comments().row(row) {
                    for (&col, _) in comments.range(col_min..=col_max) {
                        widen(&mut span_min, &mut span_max, col);
                    }
                }
            }

            // Block boundary or final row: flush the accumulator.
            if (row + 1) % 16 == 0 || row == row_max {
                if let Some(min) = span_min.take() {
                    spans.insert(row / 16, format!("{}:{}", min + 1, span_max + 1));
                }
            }
        }

        Self { spans }
    }

    /// The span string for a block, if the block contains any data
    pub fn get(&self, block: u32) -> Option<&str> {
        self.spans.get(&block).map(String::as_str)
    }

    /// Number of non-empty blocks
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Check whether no block has data
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}

fn widen(span_min: &mut Option<u16>, span_max: &mut u16, col: u16) {
    match *span_min {
        None => {
            *span_min = Some(col);
            *span_max = col;
        }
        Some(min) => {
            if col < min {
                *span_min = Some(col);
            }
            if col > *span_max {
                *span_max = col;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_block_span() {
        let mut sheet = Worksheet::new();
        for row in 0..16 {
            sheet.write_number(row, 2, 1.0, None).unwrap();
            sheet.write_number(row, 7, 1.0, None).unwrap();
        }

        let spans = RowSpans::calculate(&sheet);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans.get(0), Some("3:8"));
    }

    #[test]
    fn test_blocks_reset_accumulator() {
        let mut sheet = Worksheet::new();
        sheet.write_number(0, 0, 1.0, None).unwrap();
        sheet.write_number(15, 9, 1.0, None).unwrap();
        sheet.write_number(16, 4, 1.0, None).unwrap();

        let spans = RowSpans::calculate(&sheet);
        assert_eq!(spans.get(0), Some("1:10"));
        assert_eq!(spans.get(1), Some("5:5"));
    }

    #[test]
    fn test_partial_final_block() {
        let mut sheet = Worksheet::new();
        sheet.write_number(17, 3, 1.0, None).unwrap();
        sheet.write_number(18, 5, 1.0, None).unwrap();

        let spans = RowSpans::calculate(&sheet);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans.get(1), Some("4:6"));
    }

    #[test]
    fn test_comments_count_as_data() {
        let mut sheet = Worksheet::new();
        sheet.write_number(0, 4, 1.0, None).unwrap();
        sheet.write_comment(1, 8, "note").unwrap();

        let spans = RowSpans::calculate(&sheet);
        assert_eq!(spans.get(0), Some("5:9"));
    }

    #[test]
    fn test_rows_without_data_yield_no_span() {
        let mut sheet = Worksheet::new();
        sheet.set_row(3, Some(24.0), None, false, 0, false).unwrap();

        let spans = RowSpans::calculate(&sheet);
        assert!(spans.is_empty());
        assert_eq!(spans.get(0), None);
    }
}
