//! # slate-sheets-core
//!
//! Worksheet data model for the slate-sheets spreadsheet writer.
//!
//! This crate provides the in-memory side of worksheet writing:
//! - [`Worksheet`] - the single-owner batch builder that accumulates cell
//!   data, row/column metadata and comment placement
//! - [`Cell`] - the tagged cell value variants
//! - [`CellAddress`] - (row, col) to A1 reference conversion
//! - [`StyleRef`] and [`StyleResolver`] - opaque handles into an externally
//!   owned style registry
//!
//! Serialization to the XLSX worksheet part lives in `slate-sheets-xlsx`,
//! which consumes a finished [`Worksheet`] read-only.
//!
//! ## Example
//!
//! ```rust
//! use slate_sheets_core::Worksheet;
//!
//! let mut sheet = Worksheet::new();
//! sheet.write_number(0, 0, 42.0, None).unwrap();
//! sheet.set_column(0, 2, Some(10.0), None, false, 0).unwrap();
//!
//! let (row_min, row_max) = sheet.dimension().row_bounds().unwrap();
//! assert_eq!((row_min, row_max), (0, 0));
//! ```

pub mod cell;
pub mod column;
pub mod comment;
pub mod dimension;
pub mod error;
pub mod row;
pub mod style;
pub mod worksheet;

// Re-exports for convenience
pub use cell::{Cell, CellAddress, CellTable};
pub use column::{ColumnRange, ColumnStore};
pub use comment::{Comment, CommentTable};
pub use dimension::DimensionTracker;
pub use error::{Error, Result};
pub use row::RowProperties;
pub use style::{StyleRef, StyleResolver};
pub use worksheet::Worksheet;

/// Maximum number of rows in a worksheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet (Excel limit)
pub const MAX_COLS: u16 = 16_384;

/// Default row height in points
pub const DEFAULT_ROW_HEIGHT: f64 = 15.0;

/// Default column width in character units (Calibri 11)
pub const DEFAULT_COL_WIDTH: f64 = 8.43;
