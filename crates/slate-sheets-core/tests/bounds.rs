//! Property tests for coordinate validation and dimension tracking.

use proptest::prelude::*;
use slate_sheets_core::{Worksheet, MAX_COLS, MAX_ROWS};

proptest! {
    #[test]
    fn valid_writes_succeed_and_are_covered_by_dimension(
        row in 0..MAX_ROWS,
        col in 0..MAX_COLS,
        value in proptest::num::f64::NORMAL,
    ) {
        let mut sheet = Worksheet::new();
        prop_assert!(sheet.write_number(row, col, value, None).is_ok());

        let (row_min, row_max) = sheet.dimension().row_bounds().unwrap();
        let (col_min, col_max) = sheet.dimension().col_bounds().unwrap();
        prop_assert!(row_min <= row && row <= row_max);
        prop_assert!(col_min <= col && col <= col_max);
    }

    #[test]
    fn out_of_bounds_rows_fail_without_mutation(row in MAX_ROWS..=u32::MAX, col in 0..MAX_COLS) {
        let mut sheet = Worksheet::new();
        sheet.write_number(1, 1, 1.0, None).unwrap();

        prop_assert!(sheet.write_number(row, col, 1.0, None).is_err());
        prop_assert_eq!(sheet.dimension().row_bounds(), Some((1, 1)));
        prop_assert_eq!(sheet.dimension().col_bounds(), Some((1, 1)));
        prop_assert_eq!(sheet.cells().cell_count(), 1);
    }

    #[test]
    fn out_of_bounds_cols_fail_without_mutation(row in 0..MAX_ROWS, col in MAX_COLS..=u16::MAX) {
        let mut sheet = Worksheet::new();
        sheet.write_number(1, 1, 1.0, None).unwrap();

        prop_assert!(sheet.write_number(row, col, 1.0, None).is_err());
        prop_assert_eq!(sheet.dimension().row_bounds(), Some((1, 1)));
        prop_assert_eq!(sheet.dimension().col_bounds(), Some((1, 1)));
        prop_assert_eq!(sheet.cells().cell_count(), 1);
    }

    #[test]
    fn dimension_bounds_stay_ordered(
        writes in proptest::collection::vec((0..MAX_ROWS, 0..MAX_COLS), 1..32),
    ) {
        let mut sheet = Worksheet::new();
        for (row, col) in &writes {
            sheet.write_number(*row, *col, 0.0, None).unwrap();
        }

        let (row_min, row_max) = sheet.dimension().row_bounds().unwrap();
        let (col_min, col_max) = sheet.dimension().col_bounds().unwrap();
        prop_assert!(row_min <= row_max);
        prop_assert!(col_min <= col_max);
        prop_assert_eq!(row_min, writes.iter().map(|w| w.0).min().unwrap());
        prop_assert_eq!(row_max, writes.iter().map(|w| w.0).max().unwrap());
        prop_assert_eq!(col_min, writes.iter().map(|w| w.1).min().unwrap());
        prop_assert_eq!(col_max, writes.iter().map(|w| w.1).max().unwrap());
    }
}
