//! # slate-sheets-xlsx
//!
//! Serializes a [`slate_sheets_core::Worksheet`] into the `<worksheet>` XML
//! part of an XLSX package.
//!
//! Spreadsheet applications are strict about the worksheet part: element
//! order, attribute order, default-value elision and numeric formatting all
//! have to match what Excel itself writes, or files open subtly broken.
//! The writer here reproduces that exact document shape; packaging the part
//! into a zip container, and the workbook/styles/shared-strings parts, are
//! the enclosing application's responsibility.

pub mod error;
pub mod settings;
pub mod spans;
pub mod writer;
pub mod xml;

pub use error::{XlsxError, XlsxResult};
pub use settings::{ExcelVersion, PageMargins, SheetSettings};
pub use writer::WorksheetWriter;
